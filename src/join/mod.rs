//! Foreign-key resolution between record collections
//!
//! Foreign keys carried in plain fields are advisory. A child whose key has
//! no parent is simply left out of joined results; it is never an error and
//! never lands in a placeholder bucket.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use tracing::debug;

pub mod membership;

pub use membership::Membership;

/// Lookup from a parent key to a chosen parent attribute
#[derive(Debug, Clone)]
pub struct ForeignKeyIndex<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> ForeignKeyIndex<K, V>
where
    K: Eq + Hash,
{
    /// Index `parents` by `key`, storing `value` for each
    ///
    /// Keys are expected to be unique. If they are not, the first parent
    /// seen for a key wins.
    pub fn build<I, FK, FV>(parents: I, mut key: FK, mut value: FV) -> Self
    where
        I: IntoIterator,
        FK: FnMut(&I::Item) -> K,
        FV: FnMut(I::Item) -> V,
    {
        let mut entries = HashMap::new();
        for parent in parents {
            entries.entry(key(&parent)).or_insert_with(|| value(parent));
        }
        Self { entries }
    }

    pub fn resolve(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Group children by the parent attribute their foreign key resolves to
///
/// Children with a dangling foreign key are dropped.
pub fn join_group_by<I, K, V, FK>(
    children: I,
    mut foreign_key: FK,
    index: &ForeignKeyIndex<K, V>,
) -> BTreeMap<V, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    V: Ord + Clone,
    FK: FnMut(&I::Item) -> K,
{
    let mut groups: BTreeMap<V, Vec<I::Item>> = BTreeMap::new();
    let mut dangling = 0usize;
    for child in children {
        match index.resolve(&foreign_key(&child)) {
            Some(parent) => groups.entry(parent.clone()).or_default().push(child),
            None => dangling += 1,
        }
    }
    if dangling > 0 {
        debug!("Skipped {} records with unresolved foreign keys", dangling);
    }
    groups
}

/// Split children into those whose foreign key resolves and those whose does not
pub fn partition_resolved<I, K, V, FK>(
    children: I,
    mut foreign_key: FK,
    index: &ForeignKeyIndex<K, V>,
) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    K: Eq + Hash,
    FK: FnMut(&I::Item) -> K,
{
    children
        .into_iter()
        .partition(|child| index.contains(&foreign_key(child)))
}
