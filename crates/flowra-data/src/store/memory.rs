//! In-memory record collection.

use std::sync::RwLock;

use uuid::Uuid;

use super::RecordCollection;
use crate::pagination::{CursorPosition, KeysetRecord, SortDirection};
use crate::{DataError, DataResult};

/// An in-memory, append-friendly record collection.
///
/// Records are kept unordered and sorted per scan; collections here are
/// bounded by what fits in a single process, so scan cost is not a concern.
/// Shared across handlers behind an `Arc`.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> MemoryCollection<T>
where
    T: KeysetRecord + Clone + Send + Sync,
{
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Appends a record to the collection.
    pub async fn insert(&self, record: T) -> DataResult<()> {
        let mut records = self.records.write().map_err(|_| DataError::Poisoned)?;
        records.push(record);
        Ok(())
    }

    /// Appends multiple records to the collection.
    pub async fn insert_many(&self, batch: impl IntoIterator<Item = T>) -> DataResult<()> {
        let mut records = self.records.write().map_err(|_| DataError::Poisoned)?;
        records.extend(batch);
        Ok(())
    }

    /// Finds a record by its tie-break key.
    pub async fn get(&self, id: Uuid) -> DataResult<Option<T>> {
        let records = self.records.read().map_err(|_| DataError::Poisoned)?;
        Ok(records.iter().find(|record| record.sort_id() == id).cloned())
    }

    /// Returns a read-only view of this collection restricted to records
    /// matching `predicate`.
    ///
    /// The view paginates through the same [`RecordCollection`] seam, so
    /// scoped listings (for example, runs of one workflow) behave identically
    /// to whole-collection listings.
    pub fn scoped<F>(&self, predicate: F) -> ScopedCollection<'_, T, F>
    where
        F: Fn(&T) -> bool + Send + Sync,
    {
        ScopedCollection {
            inner: self,
            predicate,
        }
    }

    fn scan_filtered<F>(
        &self,
        position: Option<&CursorPosition>,
        direction: SortDirection,
        limit: i64,
        offset: i64,
        predicate: F,
    ) -> DataResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        let records = self.records.read().map_err(|_| DataError::Poisoned)?;

        let mut matched: Vec<T> = records
            .iter()
            .filter(|record| predicate(record))
            .filter(|record| {
                position.is_none_or(|pos| pos.admits(*record, direction))
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let ordering = (a.sort_key(), a.sort_id()).cmp(&(b.sort_key(), b.sort_id()));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let offset = offset.max(0) as usize;
        let limit = limit.max(0) as usize;

        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }

    fn count_filtered<F>(&self, predicate: F) -> DataResult<i64>
    where
        F: Fn(&T) -> bool,
    {
        let records = self.records.read().map_err(|_| DataError::Poisoned)?;
        Ok(records.iter().filter(|record| predicate(record)).count() as i64)
    }
}

impl<T> RecordCollection for MemoryCollection<T>
where
    T: KeysetRecord + Clone + Send + Sync,
{
    type Record = T;

    async fn scan_after(
        &self,
        position: Option<CursorPosition>,
        direction: SortDirection,
        limit: i64,
    ) -> DataResult<Vec<T>> {
        self.scan_filtered(position.as_ref(), direction, limit, 0, |_| true)
    }

    async fn scan_offset(
        &self,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> DataResult<Vec<T>> {
        self.scan_filtered(None, direction, limit, offset, |_| true)
    }

    async fn count(&self) -> DataResult<i64> {
        self.count_filtered(|_| true)
    }
}

/// A filtered, read-only view over a [`MemoryCollection`].
///
/// Created by [`MemoryCollection::scoped`].
#[derive(Debug)]
pub struct ScopedCollection<'a, T, F> {
    inner: &'a MemoryCollection<T>,
    predicate: F,
}

impl<T, F> RecordCollection for ScopedCollection<'_, T, F>
where
    T: KeysetRecord + Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    type Record = T;

    async fn scan_after(
        &self,
        position: Option<CursorPosition>,
        direction: SortDirection,
        limit: i64,
    ) -> DataResult<Vec<T>> {
        self.inner
            .scan_filtered(position.as_ref(), direction, limit, 0, &self.predicate)
    }

    async fn scan_offset(
        &self,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> DataResult<Vec<T>> {
        self.inner
            .scan_filtered(None, direction, limit, offset, &self.predicate)
    }

    async fn count(&self) -> DataResult<i64> {
        self.inner.count_filtered(&self.predicate)
    }
}
