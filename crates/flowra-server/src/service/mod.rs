//! Shared service state for HTTP handlers.

mod state;

pub use state::ServiceState;
