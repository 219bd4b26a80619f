//! Aggregate functions over numeric projections
//!
//! Empty input policy:
//! - `sum` and `count` are zero
//! - `average` and `median` default to `0.0` so callers can keep composing
//!   arithmetic over empty groups
//! - `min`, `max`, `range` and `summarize` return `None`

use serde::{Deserialize, Serialize};

pub mod accumulator;


pub use accumulator::{Accumulator, Aggregator};

/// Fold `values` through `kind` and finalize
pub fn aggregate<I>(kind: Aggregator, values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    Accumulator::from_values(kind, values).finalize()
}

pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum()
}

pub fn count<I>(values: I) -> usize
where
    I: IntoIterator,
{
    values.into_iter().count()
}

/// Arithmetic mean, `0.0` on empty input
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    aggregate(Aggregator::Average, values).unwrap_or(0.0)
}

pub fn min<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    aggregate(Aggregator::Min, values)
}

pub fn max<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    aggregate(Aggregator::Max, values)
}

/// `max - min`, or `None` when there are no values
pub fn range<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    aggregate(Aggregator::Range, values)
}

/// Middle value after sorting ascending; the mean of the two middle values
/// for even counts; `0.0` on empty input
pub fn median<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    accumulator::median_of(values.into_iter().collect())
}

/// One-pass descriptive statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl Summary {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Statistics over `values`, `None` when empty
pub fn summarize<I>(values: I) -> Option<Summary>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let mut summary = Summary {
        count: 1,
        sum: first,
        min: first,
        max: first,
        average: first,
    };
    for value in iter {
        summary.count += 1;
        summary.sum += value;
        summary.min = summary.min.min(value);
        summary.max = summary.max.max(value);
    }
    summary.average = summary.sum / summary.count as f64;
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALARIES: [f64; 8] = [
        55000.0, 48000.0, 75000.0, 42000.0, 62000.0, 51000.0, 58000.0, 50000.0,
    ];

    #[test]
    fn test_sum_and_count() {
        assert_eq!(sum(SALARIES), 441000.0);
        assert_eq!(count(SALARIES), 8);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
        assert_eq!(count(Vec::<f64>::new()), 0);
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(SALARIES), 53000.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(SALARIES[..7].iter().copied()), 55000.0);
    }

    #[test]
    fn test_median_single_and_empty() {
        assert_eq!(median([42.0]), 42.0);
        assert_eq!(median(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average(Vec::<f64>::new()), 0.0);
        assert!((average([28.0, 42.0, 31.0]) - 33.6667).abs() < 0.001);
    }

    #[test]
    fn test_min_max_range_absent_on_empty() {
        assert_eq!(min(Vec::<f64>::new()), None);
        assert_eq!(max(Vec::<f64>::new()), None);
        assert_eq!(range(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_range() {
        assert_eq!(range([55000.0, 75000.0, 62000.0, 50000.0]), Some(25000.0));
        assert_eq!(range([48000.0]), Some(0.0));
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(SALARIES).unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.sum, 441000.0);
        assert_eq!(summary.min, 42000.0);
        assert_eq!(summary.max, 75000.0);
        assert_eq!(summary.average, 55125.0);
        assert_eq!(summary.range(), 33000.0);
        assert!(summarize(Vec::<f64>::new()).is_none());
    }
}
