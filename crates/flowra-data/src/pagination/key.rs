//! Sort keys and keyset positions for cursor pagination.
//!
//! Keyset pagination addresses records by value rather than by offset: a
//! position is the pair of a record's sort key and its unique tie-break key.
//! The tie-break guarantees a total order even when sort keys collide, which
//! is what prevents skipped or duplicated records across page boundaries.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordering direction for a paginated scan.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    /// Smallest sort key first.
    #[serde(rename = "asc")]
    #[strum(serialize = "asc")]
    Ascending,
    /// Largest sort key first. The default for activity-style listings.
    #[default]
    #[serde(rename = "desc")]
    #[strum(serialize = "desc")]
    Descending,
}

/// The value kind a record's sort field carries on the wire.
///
/// Cursor values travel as strings; the kind determines how a decoded
/// value is parsed back into a comparable [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKeyKind {
    /// ISO-8601 timestamp.
    Timestamp,
    /// Decimal 64-bit integer.
    Integer,
    /// Opaque UTF-8 text, compared lexicographically.
    Text,
}

/// A totally-ordered sort key extracted from a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Timestamp-valued sort field.
    Timestamp(Timestamp),
    /// Integer-valued sort field.
    Integer(i64),
    /// Text-valued sort field.
    Text(String),
}

impl SortKey {
    /// Returns the kind of this sort key.
    pub fn kind(&self) -> SortKeyKind {
        match self {
            Self::Timestamp(_) => SortKeyKind::Timestamp,
            Self::Integer(_) => SortKeyKind::Integer,
            Self::Text(_) => SortKeyKind::Text,
        }
    }

    /// Parses a wire-format value back into a sort key of the given kind.
    ///
    /// Returns `None` if the value does not parse as the expected kind.
    pub fn parse(kind: SortKeyKind, value: &str) -> Option<Self> {
        match kind {
            SortKeyKind::Timestamp => value.parse::<Timestamp>().ok().map(Self::Timestamp),
            SortKeyKind::Integer => value.parse::<i64>().ok().map(Self::Integer),
            SortKeyKind::Text => Some(Self::Text(value.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(timestamp) => write!(f, "{timestamp}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A record addressable by keyset pagination.
///
/// Implementors expose a totally-ordered sort key plus a stable, unique
/// tie-break key. Together they define the record's position in the
/// collection's ordering.
pub trait KeysetRecord {
    /// Name of the sort field, as carried inside encoded cursors.
    const SORT_FIELD: &'static str;
    /// Wire kind of the sort field's value.
    const SORT_KIND: SortKeyKind;

    /// Returns the record's sort key.
    fn sort_key(&self) -> SortKey;

    /// Returns the record's unique tie-break key.
    fn sort_id(&self) -> Uuid;
}

/// A resolved position in an ordered collection.
///
/// Produced by decoding a cursor against a concrete record type; consumed by
/// collection scans as a strict range bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPosition {
    /// Sort key of the last seen record.
    pub key: SortKey,
    /// Tie-break key of the last seen record.
    pub tie: Uuid,
}

impl CursorPosition {
    /// Returns whether `record` lies strictly beyond this position in the
    /// given scan direction.
    ///
    /// Ties on the sort key are broken by the tie-break key, so records
    /// sharing a sort-key value are neither skipped nor duplicated.
    pub fn admits<R: KeysetRecord>(&self, record: &R, direction: SortDirection) -> bool {
        use std::cmp::Ordering;

        let ordering = match record.sort_key().cmp(&self.key) {
            Ordering::Equal => record.sort_id().cmp(&self.tie),
            ordering => ordering,
        };

        match direction {
            SortDirection::Ascending => ordering == Ordering::Greater,
            SortDirection::Descending => ordering == Ordering::Less,
        }
    }
}
