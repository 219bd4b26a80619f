//! Named merge policies for `group_merge`
//!
//! Each function decides which value survives when two records map to the
//! same key. The first argument is the value already stored for the key.

/// Larger value wins; the stored value is kept on ties
pub fn keep_max(current: f64, incoming: f64) -> f64 {
    if incoming > current {
        incoming
    } else {
        current
    }
}

/// Smaller value wins; the stored value is kept on ties
pub fn keep_min(current: f64, incoming: f64) -> f64 {
    if incoming < current {
        incoming
    } else {
        current
    }
}

/// The first value seen for a key is never replaced
pub fn keep_first<V>(current: V, _incoming: V) -> V {
    current
}

pub fn add(current: f64, incoming: f64) -> f64 {
    current + incoming
}
