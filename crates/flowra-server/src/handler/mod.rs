//! All `axum::`[`Router`]s with related handlers.
//!
//! One pagination contract per endpoint: workflow listings use the
//! page-number contract, run listings use the cursor contract. The two are
//! never mixed within one endpoint.
//!
//! [`Router`]: axum::Router

mod error;
mod runs;
mod workflows;

pub mod request;
pub mod response;

use axum::Router;

pub use error::{Error, ErrorKind, Result};

use crate::service::ServiceState;

/// Returns the full API router.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(workflows::routes())
        .merge(runs::routes())
}
