//! Application state shared across all handlers.

use std::sync::Arc;

use flowra_data::model::{Workflow, WorkflowRun};
use flowra_data::store::MemoryCollection;

/// Shared state injected into every handler via `axum::extract::State`.
///
/// Collections are behind `Arc`s so cloning the state per request is cheap.
#[derive(Debug, Clone, Default)]
pub struct ServiceState {
    /// Workflow definitions.
    pub workflows: Arc<MemoryCollection<Workflow>>,
    /// Workflow run history. Append-heavy; paginated by cursor.
    pub runs: Arc<MemoryCollection<WorkflowRun>>,
}

impl ServiceState {
    /// Creates state with empty collections.
    pub fn new() -> Self {
        Self::default()
    }
}
