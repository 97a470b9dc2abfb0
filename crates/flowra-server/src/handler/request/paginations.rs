//! Pagination query parameters for both response contracts.
//!
//! Parameter handling is deliberately forgiving: an out-of-range `page_size`
//! is clamped, a malformed `cursor` degrades to the first page. Pagination is
//! a best-effort continuation mechanism, not a security boundary, so broken
//! parameters must never block the caller.

use flowra_data::pagination::{CursorPagination, OffsetPagination, SortDirection};
use serde::{Deserialize, Serialize};

/// Query parameters for cursor-paginated endpoints.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CursorPaginationQuery {
    /// Maximum number of records to return.
    ///
    /// Clamped silently to the paginator's `[1, max]` range.
    pub page_size: Option<u32>,

    /// Opaque continuation token from a previous response.
    ///
    /// Invalid or stale tokens restart pagination from the first page.
    pub cursor: Option<String>,
}

impl CursorPaginationQuery {
    /// Default page size when the caller does not specify one.
    const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Returns the effective page size.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    /// Converts the query into pagination parameters for the given scan
    /// direction.
    pub fn into_pagination(self, direction: SortDirection) -> CursorPagination {
        CursorPagination::from_cursor_param(self.page_size() as i64, self.cursor.as_deref())
            .with_direction(direction)
    }
}

/// Query parameters for page-number paginated endpoints.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PagePaginationQuery {
    /// 1-based page number. Values below 1 are clamped to the first page.
    pub page: Option<u32>,

    /// Maximum number of records per page.
    ///
    /// Clamped silently to the paginator's `[1, max]` range.
    pub page_size: Option<u32>,
}

impl PagePaginationQuery {
    /// Default page size when the caller does not specify one.
    const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Returns the effective page number.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the effective page size.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    /// Converts the query into pagination parameters for the given scan
    /// direction.
    pub fn into_pagination(self, direction: SortDirection) -> OffsetPagination {
        OffsetPagination::from_page(self.page() as i64, self.page_size() as i64)
            .with_direction(direction)
    }
}
