use crate::error::{BlogError, Result};
use crate::model::{Key, Record};
use std::collections::HashSet;

/// An immutable, ordered set of records of one type.
///
/// Records keep the order they were loaded in. Every lookup is a linear
/// scan; the collections are small and never change after load.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Builds a collection, rejecting duplicate primary keys.
    pub fn from_records(records: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(BlogError::DuplicateId {
                    collection: T::COLLECTION,
                    id: record.id(),
                });
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by primary key. A missing id is `None`, not an error.
    pub fn get_by_id(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Every record, in load order.
    pub fn list_all(&self) -> &[T] {
        &self.records
    }

    /// All records whose `key` equals `value`, in load order.
    ///
    /// Returns an empty vector when nothing matches, including for
    /// dangling foreign keys.
    pub fn list_related(&self, key: Key<T>, value: i64) -> Vec<&T> {
        self.records
            .iter()
            .filter(|r| key.get(r) == value)
            .collect()
    }

    /// The first record whose `key` equals `value`.
    pub fn get_related_single(&self, key: Key<T>, value: i64) -> Option<&T> {
        self.records.iter().find(|r| key.get(r) == value)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get_by_id(id).is_some()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
