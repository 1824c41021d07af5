use std::fmt::Debug;

use thiserror::Error;

use crate::mapping::{Mapping, OrderedMapping, ValueGroup};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("key is already present in the target mapping: {0:?}")]
pub struct DuplicateKey<K: Debug>(pub K);

type GroupItem<M> = <<M as Mapping>::Value as ValueGroup>::Item;

/// Helper operations available on every [`Mapping`].
pub trait MapExt: Mapping {
    /// Concatenates the members of every group, in mapping order and then in
    /// per-group order. Absent and empty groups contribute nothing.
    fn flatten_values(&self) -> Vec<GroupItem<Self>>
    where
        Self::Value: ValueGroup,
        GroupItem<Self>: Clone,
    {
        let total = self.entries().map(|(_, group)| group.members().len()).sum();
        let mut flattened = Vec::with_capacity(total);

        for (_, group) in self.entries() {
            flattened.extend_from_slice(group.members());
        }

        flattened
    }

    /// Like [`MapExt::flatten_values`], but borrows the members instead of cloning them.
    fn flatten_values_ref(&self) -> Vec<&GroupItem<Self>>
    where
        Self::Value: ValueGroup,
    {
        self.entries()
            .flat_map(|(_, group)| group.members())
            .collect()
    }

    /// Copies every entry of `source` into this mapping.
    /// Keys already present are overwritten with the value from `source`.
    fn merge_from<M>(&mut self, source: &M)
    where
        M: Mapping<Key = Self::Key, Value = Self::Value> + ?Sized,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        for (key, value) in source.entries() {
            self.upsert(key.clone(), value.clone());
        }
    }

    /// Copies every entry of `source` into this mapping, failing if any key of
    /// `source` is already present. On failure, this mapping is left untouched.
    fn try_merge_from<M>(&mut self, source: &M) -> Result<(), DuplicateKey<Self::Key>>
    where
        M: Mapping<Key = Self::Key, Value = Self::Value> + ?Sized,
        Self::Key: Clone + Debug,
        Self::Value: Clone,
    {
        if let Some((key, _)) = source.entries().find(|(key, _)| self.has_key(key)) {
            tracing::debug!(?key, "rejecting merge, key already present");
            return Err(DuplicateKey(key.clone()));
        }

        self.merge_from(source);
        Ok(())
    }

    /// Inserts each item under the key computed by `selector`, in item order.
    /// Items that map to the same key overwrite each other, so the last one wins.
    fn extend_by_key<I, F>(&mut self, items: I, mut selector: F)
    where
        I: IntoIterator<Item = Self::Value>,
        F: FnMut(&Self::Value) -> Self::Key,
    {
        for item in items {
            let key = selector(&item);
            self.upsert(key, item);
        }
    }

    /// Fallible form of [`MapExt::extend_by_key`].
    ///
    /// The first error returned by `selector` is passed back as-is and stops
    /// processing. Items inserted before the failure stay in the mapping.
    fn try_extend_by_key<I, F, E>(&mut self, items: I, mut selector: F) -> Result<(), E>
    where
        I: IntoIterator<Item = Self::Value>,
        F: FnMut(&Self::Value) -> Result<Self::Key, E>,
    {
        for item in items {
            let key = selector(&item)?;
            self.upsert(key, item);
        }

        Ok(())
    }

    /// Finds the first key, in iteration order, whose value equals `value`.
    fn find_key_by_value(&self, value: &Self::Value) -> Option<&Self::Key>
    where
        Self: OrderedMapping,
        Self::Value: Eq,
    {
        self.entries()
            .find(|(_, v)| same_value(*v, value))
            .map(|(k, _)| k)
    }

    /// Finds all keys, in iteration order, whose values equal `value`.
    fn find_keys_by_value(&self, value: &Self::Value) -> Vec<&Self::Key>
    where
        Self: OrderedMapping,
        Self::Value: Eq,
    {
        self.entries()
            .filter(|(_, v)| same_value(*v, value))
            .map(|(k, _)| k)
            .collect()
    }

    /// Like [`MapExt::find_key_by_value`], for values that are only
    /// `PartialEq`. Every comparison goes through `==`, so a value that is not
    /// equal to itself (such as `f64::NAN`) never matches.
    fn find_key_by_partial_eq(&self, value: &Self::Value) -> Option<&Self::Key>
    where
        Self: OrderedMapping,
        Self::Value: PartialEq,
    {
        self.entries()
            .find(|(_, v)| *v == value)
            .map(|(k, _)| k)
    }

    /// Like [`MapExt::find_keys_by_value`], for values that are only `PartialEq`.
    fn find_keys_by_partial_eq(&self, value: &Self::Value) -> Vec<&Self::Key>
    where
        Self: OrderedMapping,
        Self::Value: PartialEq,
    {
        self.entries()
            .filter(|(_, v)| *v == value)
            .map(|(k, _)| k)
            .collect()
    }
}

impl<M: Mapping + ?Sized> MapExt for M {}

// Reflexivity of `Eq` makes the identity check agree with `==`.
fn same_value<V: Eq>(a: &V, b: &V) -> bool {
    std::ptr::eq(a, b) || a == b
}
