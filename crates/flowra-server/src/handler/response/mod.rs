//! Response types for HTTP handlers.

mod error_response;
mod runs;
mod workflows;

pub use error_response::ErrorResponse;
pub use runs::{RunData, RunsPage};
pub use workflows::{WorkflowData, WorkflowsPage};
