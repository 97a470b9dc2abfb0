//! Pagination types for collection queries.
//!
//! This module provides both cursor-based and page-number pagination,
//! with cursor-based being the preferred approach for most use cases.

mod cursor;
mod key;
mod offset;

pub use cursor::{Cursor, CursorPage, CursorPagination, paginate_cursor};
pub use key::{CursorPosition, KeysetRecord, SortDirection, SortKey, SortKeyKind};
pub use offset::{NumberedPage, OffsetPagination, paginate_offset};
