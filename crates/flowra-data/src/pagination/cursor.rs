//! Cursor-based pagination for collection queries.
//!
//! Cursor pagination provides efficient, stable pagination for large datasets.
//! Unlike offset pagination, performance remains constant regardless of page
//! depth, and concurrent appends never shift previously returned pages.
//!
//! A cursor is an opaque token that fully encodes a resume position: the sort
//! field's name, the last seen sort-key value, the tie-break key and the scan
//! direction. No continuation state is ever kept server-side.

use base64::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CursorPosition, KeysetRecord, SortDirection, SortKey};
use crate::DataResult;
use crate::store::RecordCollection;

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 100;

/// Wire representation of a cursor: URL-safe base64 of this JSON object.
#[derive(Debug, Serialize, Deserialize)]
struct CursorWire {
    field: String,
    value: String,
    tie: Uuid,
    dir: SortDirection,
}

/// A cursor representing a position in a paginated result set.
///
/// The cursor encodes the last seen item's sort-key value and tie-break key,
/// together with the sort field's name and the scan direction, so a follow-up
/// call can resume correctly even from a different client or process.
///
/// Cursors are advisory, not authoritative: decoding is permissive and any
/// malformed token degrades to "start of collection" instead of failing the
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Cursor {
    /// Name of the sort field this cursor was built from.
    pub field: String,
    /// String form of the last seen sort-key value (ISO-8601 for timestamps).
    pub value: String,
    /// Tie-break key of the last seen item.
    pub tie: Uuid,
    /// Scan direction the cursor was produced under.
    pub direction: SortDirection,
}

impl Cursor {
    /// Creates a cursor pointing immediately after the given record.
    pub fn after_record<R: KeysetRecord>(record: &R, direction: SortDirection) -> Self {
        Self {
            field: R::SORT_FIELD.to_owned(),
            value: record.sort_key().to_string(),
            tie: record.sort_id(),
            direction,
        }
    }

    /// Encodes the cursor as a URL-safe base64 string.
    ///
    /// Field order is fixed, so re-encoding a decoded cursor is byte-stable.
    pub fn encode(&self) -> String {
        let data = serde_json::json!({
            "field": self.field,
            "value": self.value,
            "tie": self.tie,
            "dir": self.direction,
        })
        .to_string();

        BASE64_URL_SAFE_NO_PAD.encode(data.as_bytes())
    }

    /// Decodes a cursor from a URL-safe base64 string.
    ///
    /// Returns `None` on any structural failure: bad base64, invalid UTF-8,
    /// invalid JSON or missing keys.
    pub fn decode(encoded: &str) -> Option<Self> {
        let bytes = BASE64_URL_SAFE_NO_PAD.decode(encoded).ok()?;
        let wire: CursorWire = serde_json::from_slice(&bytes).ok()?;

        Some(Self {
            field: wire.field,
            value: wire.value,
            tie: wire.tie,
            direction: wire.dir,
        })
    }

    /// Resolves this cursor into a scan position for the record type `R`.
    ///
    /// Returns `None` when the cursor names a different sort field or its
    /// value does not parse as `R`'s sort-key kind; callers treat that the
    /// same as an absent cursor.
    pub fn position_for<R: KeysetRecord>(&self) -> Option<CursorPosition> {
        if self.field != R::SORT_FIELD {
            return None;
        }

        let key = SortKey::parse(R::SORT_KIND, &self.value)?;
        Some(CursorPosition { key, tie: self.tie })
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.encode()
    }
}

impl TryFrom<String> for Cursor {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cursor::decode(&value).ok_or("invalid cursor format")
    }
}

/// Cursor-based pagination parameters for collection queries.
///
/// This is the preferred pagination method for API endpoints. It provides:
/// - Consistent performance regardless of page depth
/// - Stable results even when items are appended concurrently
/// - Efficient "load more" / infinite scroll patterns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CursorPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Cursor pointing to the last item of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,
    /// Ordering direction for the scan.
    #[serde(default)]
    pub direction: SortDirection,
}

impl CursorPagination {
    /// Creates a new cursor pagination with the given limit.
    pub fn new(limit: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            after: None,
            direction: SortDirection::default(),
        }
    }

    /// Creates cursor pagination starting after the given cursor.
    pub fn after(limit: i64, cursor: Cursor) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            after: Some(cursor),
            direction: SortDirection::default(),
        }
    }

    /// Creates cursor pagination from an optional encoded cursor string.
    ///
    /// If the cursor string is absent or invalid, pagination starts from the
    /// beginning of the collection.
    pub fn from_cursor_param(limit: i64, cursor: Option<&str>) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            after: cursor.and_then(Cursor::decode),
            direction: SortDirection::default(),
        }
    }

    /// Sets the scan direction.
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the limit plus one for fetching to determine if more results
    /// exist without a separate count query.
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }

    /// Resolves the cursor into a scan position for the record type `R`.
    ///
    /// A cursor produced under a different direction than the one configured
    /// here is discarded, the same as any other malformed cursor.
    pub fn position_for<R: KeysetRecord>(&self) -> Option<CursorPosition> {
        self.after
            .as_ref()
            .filter(|cursor| cursor.direction == self.direction)
            .and_then(Cursor::position_for::<R>)
    }

    /// Checks if we have a usable cursor to paginate from.
    pub fn has_cursor(&self) -> bool {
        self.after.is_some()
    }
}

/// Result of a cursor-paginated query.
///
/// `has_next` and `next_cursor` are intrinsically consistent: the page has a
/// next cursor if and only if more items exist beyond it.
#[derive(Debug, Clone)]
pub struct CursorPage<T> {
    /// The items in this page, ordered in the scan direction.
    pub items: Vec<T>,
    /// Cursor to fetch the next page. Present only when more items exist.
    pub next_cursor: Option<Cursor>,
}

impl<T: KeysetRecord> CursorPage<T> {
    /// Creates a cursor page from an over-fetched scan result.
    ///
    /// `items` should contain up to `limit + 1` records; the extra record
    /// signals a further page and is dropped before returning.
    pub fn from_scan(mut items: Vec<T>, limit: i64, direction: SortDirection) -> Self {
        let has_more = items.len() as i64 > limit;

        if has_more {
            items.truncate(limit as usize);
        }

        let next_cursor = if has_more {
            items
                .last()
                .map(|record| Cursor::after_record(record, direction))
        } else {
            None
        };

        Self { items, next_cursor }
    }
}

impl<T> CursorPage<T> {
    /// Creates an empty cursor page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }

    /// Returns true if there are more items to fetch.
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> CursorPage<U>
    where
        F: FnMut(T) -> U,
    {
        CursorPage {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Fetches one page from `collection` according to `pagination`.
///
/// The operation is stateless per call: all continuation state lives inside
/// the returned cursor. Scan failures from the backing store propagate to the
/// caller unmodified; a retry with the same pagination is always safe.
pub async fn paginate_cursor<C>(
    collection: &C,
    pagination: &CursorPagination,
) -> DataResult<CursorPage<C::Record>>
where
    C: RecordCollection,
{
    let position = pagination.position_for::<C::Record>();

    let records = collection
        .scan_after(position, pagination.direction, pagination.fetch_limit())
        .await?;

    Ok(CursorPage::from_scan(
        records,
        pagination.limit,
        pagination.direction,
    ))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::pagination::SortKeyKind;

    #[derive(Debug, Clone)]
    struct Event {
        id: Uuid,
        occurred_at: Timestamp,
    }

    impl KeysetRecord for Event {
        const SORT_FIELD: &'static str = "occurred_at";
        const SORT_KIND: SortKeyKind = SortKeyKind::Timestamp;

        fn sort_key(&self) -> SortKey {
            SortKey::Timestamp(self.occurred_at)
        }

        fn sort_id(&self) -> Uuid {
            self.id
        }
    }

    fn event(seconds: i64) -> Event {
        Event {
            id: Uuid::new_v4(),
            occurred_at: Timestamp::from_second(seconds).unwrap(),
        }
    }

    #[test]
    fn cursor_encode_decode_roundtrip() {
        let cursor = Cursor::after_record(&event(1_700_000_000), SortDirection::Descending);

        let encoded = cursor.encode();
        let decoded = Cursor::decode(&encoded).expect("decode should succeed");

        assert_eq!(decoded, cursor);
        // Round-trip is idempotent at the byte level.
        assert_eq!(decoded.encode(), encoded);
    }

    #[test]
    fn cursor_decode_invalid() {
        assert!(Cursor::decode("").is_none());
        assert!(Cursor::decode("not base64 at all!!").is_none());

        // Valid base64 of non-JSON bytes.
        let garbage = BASE64_URL_SAFE_NO_PAD.encode(b"definitely not json");
        assert!(Cursor::decode(&garbage).is_none());

        // Valid JSON with missing keys.
        let partial = BASE64_URL_SAFE_NO_PAD.encode(br#"{"field":"occurred_at"}"#);
        assert!(Cursor::decode(&partial).is_none());

        // Truncated blob.
        let full = Cursor::after_record(&event(0), SortDirection::Descending).encode();
        assert!(Cursor::decode(&full[..full.len() / 2]).is_none());
    }

    #[test]
    fn cursor_position_requires_matching_field() {
        let mut cursor = Cursor::after_record(&event(0), SortDirection::Descending);
        assert!(cursor.position_for::<Event>().is_some());

        cursor.field = "updated_at".to_owned();
        assert!(cursor.position_for::<Event>().is_none());
    }

    #[test]
    fn cursor_position_requires_parseable_value() {
        let mut cursor = Cursor::after_record(&event(0), SortDirection::Descending);
        cursor.value = "not-a-timestamp".to_owned();
        assert!(cursor.position_for::<Event>().is_none());
    }

    #[test]
    fn pagination_discards_mismatched_direction() {
        let cursor = Cursor::after_record(&event(0), SortDirection::Ascending);

        let pagination =
            CursorPagination::after(10, cursor.clone()).with_direction(SortDirection::Descending);
        assert!(pagination.position_for::<Event>().is_none());

        let pagination =
            CursorPagination::after(10, cursor).with_direction(SortDirection::Ascending);
        assert!(pagination.position_for::<Event>().is_some());
    }

    #[test]
    fn pagination_limit_bounds() {
        assert_eq!(CursorPagination::new(0).limit, 1);
        assert_eq!(CursorPagination::new(-5).limit, 1);
        assert_eq!(CursorPagination::new(200).limit, MAX_LIMIT);
        assert_eq!(CursorPagination::new(50).fetch_limit(), 51);
    }

    #[test]
    fn pagination_from_invalid_cursor_param_starts_over() {
        let pagination = CursorPagination::from_cursor_param(25, Some("@@@"));
        assert!(!pagination.has_cursor());

        let pagination = CursorPagination::from_cursor_param(25, Some(""));
        assert!(!pagination.has_cursor());

        let pagination = CursorPagination::from_cursor_param(25, None);
        assert!(!pagination.has_cursor());
    }

    #[test]
    fn page_with_more_drops_extra_and_builds_cursor() {
        let items: Vec<Event> = (0..11).map(|i| event(1_000 - i)).collect();
        let last_kept = items[9].clone();

        let page = CursorPage::from_scan(items, 10, SortDirection::Descending);

        assert_eq!(page.items.len(), 10);
        assert!(page.has_next());

        let cursor = page.next_cursor.expect("cursor should be present");
        assert_eq!(cursor.tie, last_kept.id);
        assert_eq!(cursor.value, last_kept.sort_key().to_string());
    }

    #[test]
    fn page_without_more_has_no_cursor() {
        let items: Vec<Event> = (0..7).map(|i| event(1_000 - i)).collect();
        let page = CursorPage::from_scan(items, 10, SortDirection::Descending);

        assert_eq!(page.items.len(), 7);
        assert!(!page.has_next());
        assert!(page.next_cursor.is_none());
    }
}
