//! Abstractions over keyed containers, and the helper operations built on them.
//!
//! [`Mapping`] is the small capability set every supported container exposes:
//! borrowed iteration over its entries, a key membership test, and an
//! insert-or-overwrite. All of the helpers in [`MapExt`] are written in terms
//! of these three primitives, so they work the same on `HashMap`, `BTreeMap`,
//! `IndexMap` and [`Record`].
//!
//! Operations whose result depends on iteration order (such as reverse
//! lookup) are only offered on [`OrderedMapping`] implementors.

mod ext;
mod group;

pub use self::ext::{DuplicateKey, MapExt};
pub use self::group::ValueGroup;

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::btree_map::Iter as BTreeIter;
use std::collections::hash_map::Iter as HashIter;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use indexmap::map::Iter as IndexIter;

use crate::types::{Record, Value};
use crate::types::record::Iter as RecordIter;

/// An associative container with unique keys.
pub trait Mapping {
    type Key;
    type Value;
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Iterates over all entries in the container's natural order.
    fn entries(&self) -> Self::Entries<'_>;

    fn has_key(&self, key: &Self::Key) -> bool;

    /// Inserts an entry, overwriting and returning any previous value for the key.
    fn upsert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;
}

/// A [`Mapping`] whose iteration order is deterministic for a given sequence
/// of operations.
pub trait OrderedMapping: Mapping {}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Entries<'a> = HashIter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;
    type Entries<'a> = BTreeIter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

// Ordered by key.
impl<K: Ord, V> OrderedMapping for BTreeMap<K, V> {}

impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Entries<'a> = IndexIter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    // Overwriting an existing key keeps its original position.
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

// Ordered by insertion.
impl<K: Eq + Hash, V, S: BuildHasher> OrderedMapping for IndexMap<K, V, S> {}

impl Mapping for Record {
    type Key = String;
    type Value = Value;
    type Entries<'a> = RecordIter<'a>;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn has_key(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    fn upsert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }
}

impl OrderedMapping for Record {}
