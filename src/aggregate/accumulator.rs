//! Mergeable aggregate state
//!
//! An `Accumulator` holds the running state of one aggregator. Two
//! accumulators of the same kind can be merged with `Semigroup::combine`,
//! which is associative, so partial results computed over disjoint slices
//! can be folded together in any grouping and produce the same value.

use serde::{Deserialize, Serialize};
use stillwater::Semigroup;

/// The aggregate functions the engine knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregator {
    Count,
    Sum,
    Average,
    Min,
    Max,
    /// max - min
    Range,
    Median,
}

/// Running state for a single aggregator
#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
    Count(usize),
    Sum(f64),
    /// (sum, count) - divided on finalize
    Average(f64, usize),
    Min(Option<f64>),
    Max(Option<f64>),
    /// (min, max) seen so far
    Range(Option<(f64, f64)>),
    /// All values; sorted on finalize
    Median(Vec<f64>),
}

impl Accumulator {
    /// The identity state for `kind`
    pub fn empty(kind: Aggregator) -> Self {
        match kind {
            Aggregator::Count => Accumulator::Count(0),
            Aggregator::Sum => Accumulator::Sum(0.0),
            Aggregator::Average => Accumulator::Average(0.0, 0),
            Aggregator::Min => Accumulator::Min(None),
            Aggregator::Max => Accumulator::Max(None),
            Aggregator::Range => Accumulator::Range(None),
            Aggregator::Median => Accumulator::Median(Vec::new()),
        }
    }

    /// Accumulate every value of `values` into a fresh state
    pub fn from_values<I>(kind: Aggregator, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut acc = Self::empty(kind);
        for value in values {
            acc.push(value);
        }
        acc
    }

    pub fn kind(&self) -> Aggregator {
        match self {
            Accumulator::Count(_) => Aggregator::Count,
            Accumulator::Sum(_) => Aggregator::Sum,
            Accumulator::Average(_, _) => Aggregator::Average,
            Accumulator::Min(_) => Aggregator::Min,
            Accumulator::Max(_) => Aggregator::Max,
            Accumulator::Range(_) => Aggregator::Range,
            Accumulator::Median(_) => Aggregator::Median,
        }
    }

    pub fn push(&mut self, value: f64) {
        match self {
            Accumulator::Count(n) => *n = n.saturating_add(1),
            Accumulator::Sum(s) => *s += value,
            Accumulator::Average(sum, count) => {
                *sum += value;
                *count += 1;
            }
            Accumulator::Min(current) => {
                *current = Some(current.map_or(value, |c| if value < c { value } else { c }));
            }
            Accumulator::Max(current) => {
                *current = Some(current.map_or(value, |c| if value > c { value } else { c }));
            }
            Accumulator::Range(bounds) => {
                *bounds = Some(match *bounds {
                    None => (value, value),
                    Some((lo, hi)) => (lo.min(value), hi.max(value)),
                });
            }
            Accumulator::Median(values) => values.push(value),
        }
    }

    /// Final value of the aggregate
    ///
    /// Average and median resolve to `0.0` when nothing was accumulated.
    /// Min, max and range have no result on empty input.
    pub fn finalize(self) -> Option<f64> {
        match self {
            Accumulator::Count(n) => Some(n as f64),
            Accumulator::Sum(s) => Some(s),
            Accumulator::Average(sum, count) => {
                if count == 0 {
                    Some(0.0)
                } else {
                    Some(sum / count as f64)
                }
            }
            Accumulator::Min(v) | Accumulator::Max(v) => v,
            Accumulator::Range(bounds) => bounds.map(|(lo, hi)| hi - lo),
            Accumulator::Median(values) => Some(median_of(values)),
        }
    }
}

impl Semigroup for Accumulator {
    fn combine(self, other: Self) -> Self {
        use Accumulator::*;

        match (self, other) {
            (Count(a), Count(b)) => Count(a.saturating_add(b)),
            (Sum(a), Sum(b)) => Sum(a + b),
            (Average(sum_a, count_a), Average(sum_b, count_b)) => {
                Average(sum_a + sum_b, count_a + count_b)
            }
            (Min(a), Min(b)) => Min(merge_option(a, b, f64::min)),
            (Max(a), Max(b)) => Max(merge_option(a, b, f64::max)),
            (Range(a), Range(b)) => Range(merge_option(a, b, |(lo_a, hi_a), (lo_b, hi_b)| {
                (lo_a.min(lo_b), hi_a.max(hi_b))
            })),
            (Median(mut a), Median(b)) => {
                a.extend(b);
                Median(a)
            }
            (a, b) => panic!(
                "Cannot combine incompatible accumulators: {:?} and {:?}",
                a.kind(),
                b.kind()
            ),
        }
    }
}

fn merge_option<T>(a: Option<T>, b: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(merge(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Median with the even-length mean rule; `0.0` when empty
pub(crate) fn median_of(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}
