//! Serialized error response body.

use serde::{Deserialize, Serialize};

/// Error body returned by all failing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error name, e.g. `not_found`.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional context for debugging, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
