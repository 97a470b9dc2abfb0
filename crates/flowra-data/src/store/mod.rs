//! Collection stores that back paginated queries.
//!
//! A store only needs to answer three read-only questions to be paginated:
//! an ordered scan strictly beyond a keyset position, an ordered scan at a
//! numeric offset, and a count. All pagination logic lives above this seam,
//! so swapping the in-memory store for a database-backed one changes nothing
//! in the handlers.

mod memory;

use std::future::Future;

use crate::DataResult;
use crate::pagination::{CursorPosition, KeysetRecord, SortDirection};

pub use memory::{MemoryCollection, ScopedCollection};

/// An ordered, appendable collection of records that supports range queries.
///
/// Implementations must apply the position bound *strictly*: the record at
/// the position itself is excluded, ties on the sort key are broken by the
/// tie-break key, and results are returned in the requested direction.
pub trait RecordCollection: Send + Sync {
    /// The record type stored in this collection.
    type Record: KeysetRecord + Send;

    /// Scans up to `limit` records strictly beyond `position` in the given
    /// direction. A `None` position scans from the start of the ordering.
    fn scan_after(
        &self,
        position: Option<CursorPosition>,
        direction: SortDirection,
        limit: i64,
    ) -> impl Future<Output = DataResult<Vec<Self::Record>>> + Send;

    /// Scans up to `limit` records in the given direction, skipping the
    /// first `offset` records.
    fn scan_offset(
        &self,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> impl Future<Output = DataResult<Vec<Self::Record>>> + Send;

    /// Returns the total number of records in the collection.
    fn count(&self) -> impl Future<Output = DataResult<i64>> + Send;
}
