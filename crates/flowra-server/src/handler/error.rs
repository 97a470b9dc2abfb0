//! HTTP error handling for request handlers.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use flowra_data::DataError;

use crate::handler::response::ErrorResponse;

/// A specialized [`Result`] type for HTTP handlers.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kinds surfaced by HTTP handlers, one per status code in use.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 Bad Request - invalid request data.
    BadRequest,
    /// 404 Not Found - resource does not exist.
    NotFound,
    /// 500 Internal Server Error - unexpected server failure.
    #[default]
    InternalServerError,
}

impl ErrorKind {
    /// Returns the HTTP status code for this error kind.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error name sent in response bodies.
    pub fn name(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::InternalServerError => "internal_server_error",
        }
    }

    /// Returns the default user-facing message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "The request data is invalid.",
            Self::NotFound => "The requested resource was not found.",
            Self::InternalServerError => "An unexpected error occurred.",
        }
    }

    /// Creates an [`Error`] with the specified context.
    pub fn with_context(self, context: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_context(context)
    }
}

/// The error type for HTTP handlers.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error {
    kind: ErrorKind,
    context: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates a new [`Error`] with the specified kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches context included in the error response for debugging.
    pub fn with_context(self, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the context if present.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.kind.name(),
            self.kind.status_code().as_u16()
        )?;

        if let Some(ref context) = self.context {
            write!(f, ": {context}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind.name().to_owned(),
            message: self.kind.message().to_owned(),
            details: self.context.map(Cow::into_owned),
        };

        (self.kind.status_code(), Json(body)).into_response()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<DataError> for Error {
    fn from(error: DataError) -> Self {
        // Store failures are retryable from the caller's perspective; the
        // paginator never masks them as empty or partial pages.
        ErrorKind::InternalServerError.with_context(error.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        ErrorKind::BadRequest.with_context(errors.to_string())
    }
}
