//! Page-number pagination for collection queries.
//!
//! Offset pagination is suitable for small datasets or when random page
//! access is required. It breaks under concurrent mutation (appended records
//! shift page boundaries), so for API iteration prefer cursor pagination.

use serde::{Deserialize, Serialize};

use super::SortDirection;
use crate::DataResult;
use crate::store::RecordCollection;

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 1000;

/// Offset-based pagination parameters for collection queries.
///
/// Use this for dashboards or when callers need to jump to specific pages.
/// For infinite scroll or API iteration, prefer [`CursorPagination`].
///
/// [`CursorPagination`]: super::CursorPagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
    /// Ordering direction for the scan.
    #[serde(default)]
    pub direction: SortDirection,
}

impl OffsetPagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
            direction: SortDirection::default(),
        }
    }

    /// Creates pagination from a 1-based page number and page size.
    ///
    /// Out-of-range values are clamped silently; pagination never rejects a
    /// request over its parameters.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_LIMIT);
        Self {
            limit: page_size,
            offset: (page - 1) * page_size,
            direction: SortDirection::default(),
        }
    }

    /// Sets the scan direction.
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            direction: SortDirection::default(),
        }
    }
}

/// Result of a page-number paginated query.
#[derive(Debug, Clone)]
pub struct NumberedPage<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total count of items across all pages.
    pub total: i64,
    /// Current page number (1-based).
    pub page: i64,
    /// Requested page size.
    pub page_size: i64,
}

impl<T> NumberedPage<T> {
    /// Creates a numbered page from query results.
    pub fn new(items: Vec<T>, total: i64, pagination: &OffsetPagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page_number(),
            page_size: pagination.page_size(),
        }
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self) -> i64 {
        (self.total + self.page_size - 1) / self.page_size
    }

    /// Returns the next page number, if one exists.
    pub fn next_page(&self) -> Option<i64> {
        (self.page < self.total_pages()).then(|| self.page + 1)
    }

    /// Returns the previous page number, if one exists.
    pub fn previous_page(&self) -> Option<i64> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> NumberedPage<U>
    where
        F: FnMut(T) -> U,
    {
        NumberedPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Fetches one numbered page from `collection` according to `pagination`.
///
/// Runs a count query plus an offset scan. Failures from the backing store
/// propagate to the caller unmodified.
pub async fn paginate_offset<C>(
    collection: &C,
    pagination: &OffsetPagination,
) -> DataResult<NumberedPage<C::Record>>
where
    C: RecordCollection,
{
    let total = collection.count().await?;

    let items = collection
        .scan_offset(pagination.direction, pagination.limit, pagination.offset)
        .await?;

    Ok(NumberedPage::new(items, total, pagination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds_checking() {
        let pagination = OffsetPagination::new(0, 10);
        assert_eq!(pagination.limit, 1);

        let pagination = OffsetPagination::new(1500, 10);
        assert_eq!(pagination.limit, MAX_LIMIT);

        let pagination = OffsetPagination::new(10, -5);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = OffsetPagination::from_page(1, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(3, 10);
        assert_eq!(pagination.offset, 20);

        let pagination = OffsetPagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(1, 0);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn pagination_page_number() {
        assert_eq!(OffsetPagination::new(20, 0).page_number(), 1);
        assert_eq!(OffsetPagination::new(20, 20).page_number(), 2);
        assert_eq!(OffsetPagination::new(10, 25).page_number(), 3);
    }

    #[test]
    fn numbered_page_arithmetic() {
        let pagination = OffsetPagination::from_page(2, 10);
        let page = NumberedPage::new(vec![0; 10], 31, &pagination);

        assert_eq!(page.total_pages(), 4);
        assert_eq!(page.next_page(), Some(3));
        assert_eq!(page.previous_page(), Some(1));
    }

    #[test]
    fn numbered_page_boundaries() {
        let first = NumberedPage::new(vec![0; 10], 25, &OffsetPagination::from_page(1, 10));
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let last = NumberedPage::new(vec![0; 5], 25, &OffsetPagination::from_page(3, 10));
        assert_eq!(last.next_page(), None);
        assert_eq!(last.previous_page(), Some(2));
    }

    #[test]
    fn numbered_page_empty_collection() {
        let page: NumberedPage<i32> =
            NumberedPage::new(Vec::new(), 0, &OffsetPagination::from_page(1, 10));

        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.next_page(), None);
        assert_eq!(page.previous_page(), None);
    }
}
