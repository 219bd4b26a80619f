//! Ranking and selection by a numeric metric
//!
//! Ties are resolved by input order everywhere: the record encountered
//! first wins a best/worst selection, and equal records keep their
//! relative order in sorted output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::aggregate;

/// A record paired with the metric it was ranked by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub item: T,
    pub value: f64,
}

impl<T> Ranked<T> {
    pub fn new(item: T, value: f64) -> Self {
        Self { item, value }
    }
}

/// Record with the largest metric, `None` when `items` is empty
pub fn best_by<I, F>(items: I, metric: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    select(items, metric, |candidate, best| candidate > best)
}

/// Record with the smallest metric, `None` when `items` is empty
pub fn worst_by<I, F>(items: I, metric: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    select(items, metric, |candidate, best| candidate < best)
}

fn select<I, F, P>(items: I, mut metric: F, replaces: P) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
    P: Fn(f64, f64) -> bool,
{
    let mut best: Option<(f64, I::Item)> = None;
    for item in items {
        let value = metric(&item);
        let take = match &best {
            Some((best_value, _)) => replaces(value, *best_value),
            None => true,
        };
        if take {
            best = Some((value, item));
        }
    }
    best.map(|(_, item)| item)
}

/// All records sorted by descending metric; ties keep input order
pub fn rank_desc<I, F>(items: I, mut metric: F) -> Vec<Ranked<I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    let mut ranked: Vec<Ranked<I::Item>> = items
        .into_iter()
        .map(|item| {
            let value = metric(&item);
            Ranked::new(item, value)
        })
        .collect();
    // stable sort
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked
}

/// At most `n` records with the largest metric, in descending order
pub fn top_n<I, F>(items: I, n: usize, metric: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    let mut ranked = rank_desc(items, metric);
    ranked.truncate(n);
    trace!("top_n kept {} of at most {}", ranked.len(), n);
    ranked.into_iter().map(|r| r.item).collect()
}

/// Rank every entity by a precomputed metric, defaulting missing ones
///
/// Entities absent from `metrics` rank with `default` instead of being
/// dropped, so with a default of `0.0` they sink to the bottom.
pub fn rank_with_default<I, K, FK>(
    entities: I,
    mut key: FK,
    metrics: &BTreeMap<K, f64>,
    default: f64,
) -> Vec<Ranked<I::Item>>
where
    I: IntoIterator,
    K: Ord,
    FK: FnMut(&I::Item) -> K,
{
    rank_desc(entities, |e| metrics.get(&key(e)).copied().unwrap_or(default))
}

/// Keys whose aggregate is strictly above the mean of all aggregates
///
/// Only keys present in `aggregates` take part in the mean, so an entity
/// with no contributing records neither lowers the mean nor appears in the
/// result. Keys come back in ascending order.
pub fn above_average<K>(aggregates: &BTreeMap<K, f64>) -> Vec<K>
where
    K: Ord + Clone,
{
    if aggregates.is_empty() {
        return Vec::new();
    }
    let mean = aggregate::average(aggregates.values().copied());
    trace!("above_average mean {:.4} over {} entries", mean, aggregates.len());
    aggregates
        .iter()
        .filter(|(_, value)| **value > mean)
        .map(|(key, _)| key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<(&'static str, f64)> {
        vec![
            ("Alice", 55000.0),
            ("Bob", 48000.0),
            ("Charlie", 75000.0),
            ("Dave", 42000.0),
            ("Eve", 62000.0),
            ("Frank", 51000.0),
            ("Grace", 58000.0),
        ]
    }

    #[test]
    fn test_top_3() {
        let top = top_n(staff(), 3, |(_, salary)| *salary);
        assert_eq!(
            top,
            vec![("Charlie", 75000.0), ("Eve", 62000.0), ("Grace", 58000.0)]
        );
    }

    #[test]
    fn test_top_n_larger_than_input() {
        let top = top_n(staff(), 100, |(_, salary)| *salary);
        assert_eq!(top.len(), 7);
        assert_eq!(top.last().unwrap().0, "Dave");
        assert!(top_n(staff(), 0, |(_, s)| *s).is_empty());
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let items = vec![("first", 1.0), ("second", 2.0), ("third", 1.0), ("fourth", 2.0)];
        let top = top_n(items, 3, |(_, v)| *v);
        let names: Vec<_> = top.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["second", "fourth", "first"]);
    }

    #[test]
    fn test_best_and_worst() {
        assert_eq!(best_by(staff(), |(_, s)| *s).unwrap().0, "Charlie");
        assert_eq!(worst_by(staff(), |(_, s)| *s).unwrap().0, "Dave");
        assert!(best_by(Vec::<(&str, f64)>::new(), |(_, s)| *s).is_none());
        assert!(worst_by(Vec::<(&str, f64)>::new(), |(_, s)| *s).is_none());
    }

    #[test]
    fn test_best_by_first_wins_ties() {
        let items = vec![("a", 5.0), ("b", 5.0), ("c", 1.0)];
        assert_eq!(best_by(items.clone(), |(_, v)| *v).unwrap().0, "a");
        let items = vec![("a", 5.0), ("b", 1.0), ("c", 1.0)];
        assert_eq!(worst_by(items, |(_, v)| *v).unwrap().0, "b");
    }

    #[test]
    fn test_above_average() {
        let totals = BTreeMap::from([
            ("Alice", 3250.0),
            ("Bob", 1300.0),
            ("Charlie", 500.0),
            ("Dave", 500.0),
        ]);
        assert_eq!(above_average(&totals), vec!["Alice"]);
    }

    #[test]
    fn test_above_average_all_equal_is_empty() {
        let totals = BTreeMap::from([(1u64, 10.0), (2, 10.0)]);
        assert!(above_average(&totals).is_empty());
        assert!(above_average(&BTreeMap::<u64, f64>::new()).is_empty());
    }

    #[test]
    fn test_rank_with_default_keeps_entities_without_metric() {
        let metrics = BTreeMap::from([(1u64, 300.0), (3, 500.0)]);
        let ranked = rank_with_default(vec![1u64, 2, 3], |id| *id, &metrics, 0.0);

        let ids: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(ranked[2].value, 0.0);
    }
}
