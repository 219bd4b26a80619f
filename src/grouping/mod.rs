//! Group-by primitives
//!
//! Every function here builds a `BTreeMap`, so keys iterate in ascending
//! order no matter how the input was ordered. Within a group, records keep
//! the order in which the input produced them. A group only exists when at
//! least one record produced its key, so empty input gives an empty map.

use std::collections::BTreeMap;

use crate::aggregate::{Accumulator, Aggregator};

pub mod combine;

/// Partition `items` by `key`
pub fn group_by<I, K, F>(items: I, mut key: F) -> BTreeMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: BTreeMap<K, Vec<I::Item>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Group and reduce in one pass without materializing the group lists
///
/// `init` creates the per-group state the first time a key is seen and
/// `fold` folds each record into it.
pub fn group_fold<I, K, A, FK, FI, FF>(
    items: I,
    mut key: FK,
    init: FI,
    mut fold: FF,
) -> BTreeMap<K, A>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
    FI: Fn() -> A,
    FF: FnMut(&mut A, I::Item),
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for item in items {
        let state = groups.entry(key(&item)).or_insert_with(&init);
        fold(state, item);
    }
    groups
}

/// Group and project each record, keeping the projected values
pub fn group_map<I, K, V, FK, FV>(items: I, key: FK, mut value: FV) -> BTreeMap<K, Vec<V>>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(I::Item) -> V,
{
    group_fold(items, key, Vec::new, |values, item| values.push(value(item)))
}

/// Per-key sum of a numeric projection
pub fn group_sum<I, K, FK, FV>(items: I, key: FK, mut value: FV) -> BTreeMap<K, f64>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(&I::Item) -> f64,
{
    group_fold(items, key, || 0.0, |total, item| *total += value(&item))
}

/// Number of records per key
pub fn group_count<I, K, FK>(items: I, key: FK) -> BTreeMap<K, usize>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
{
    group_fold(items, key, || 0usize, |n, _| *n += 1)
}

/// Key each record's value, resolving collisions with `merge`
///
/// `merge(stored, incoming)` returns the value to keep; see
/// [`combine`] for the named policies.
pub fn group_merge<I, K, V, FK, FV, M>(
    items: I,
    mut key: FK,
    mut value: FV,
    merge: M,
) -> BTreeMap<K, V>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(&I::Item) -> V,
    M: Fn(V, V) -> V,
{
    let mut merged: BTreeMap<K, V> = BTreeMap::new();
    for item in items {
        let k = key(&item);
        let incoming = value(&item);
        let next = match merged.remove(&k) {
            Some(stored) => merge(stored, incoming),
            None => incoming,
        };
        merged.insert(k, next);
    }
    merged
}

/// Apply `aggregator` to a numeric projection of every group
pub fn group_aggregate<I, K, FK, FV>(
    items: I,
    key: FK,
    mut value: FV,
    aggregator: Aggregator,
) -> BTreeMap<K, f64>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(&I::Item) -> f64,
{
    group_fold(
        items,
        key,
        || Accumulator::empty(aggregator),
        |acc, item| acc.push(value(&item)),
    )
    .into_iter()
    // groups are never empty, so every aggregator has a value
    .filter_map(|(k, acc)| acc.finalize().map(|v| (k, v)))
    .collect()
}
