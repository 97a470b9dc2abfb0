//! Workflow run model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pagination::{KeysetRecord, SortKey, SortKeyKind};

/// Lifecycle state of a workflow run.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    /// Accepted, waiting for a worker.
    #[default]
    Queued,
    /// Currently executing.
    Running,
    /// Finished without error.
    Succeeded,
    /// Finished with an error.
    Failed,
}

impl RunStatus {
    /// Returns whether the run has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// A single execution of a workflow.
///
/// Runs form the append-heavy collection of the platform: executions are
/// inserted continuously while clients page through history, which is why
/// run listings use cursor pagination (newest first) rather than offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Unique run identifier.
    pub id: Uuid,
    /// Workflow this run belongs to.
    pub workflow_id: Uuid,
    /// Current lifecycle state.
    pub status: RunStatus,
    /// Trigger payload the run started with.
    pub payload: serde_json::Value,
    /// Timestamp when the run started.
    pub started_at: Timestamp,
    /// Timestamp when the run reached a terminal state.
    pub finished_at: Option<Timestamp>,
}

/// Data required to create a new workflow run.
#[derive(Debug, Default, Clone)]
pub struct NewWorkflowRun {
    /// Workflow the run belongs to.
    pub workflow_id: Uuid,
    /// Trigger payload for the run.
    pub payload: Option<serde_json::Value>,
}

impl WorkflowRun {
    /// Creates a queued run with a fresh identifier and start timestamp.
    pub fn new(new_run: NewWorkflowRun) -> Self {
        Self {
            id: Uuid::now_v7(),
            workflow_id: new_run.workflow_id,
            status: RunStatus::default(),
            payload: new_run.payload.unwrap_or(serde_json::Value::Null),
            started_at: Timestamp::now(),
            finished_at: None,
        }
    }
}

impl KeysetRecord for WorkflowRun {
    const SORT_FIELD: &'static str = "started_at";
    const SORT_KIND: SortKeyKind = SortKeyKind::Timestamp;

    fn sort_key(&self) -> SortKey {
        SortKey::Timestamp(self.started_at)
    }

    fn sort_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_run_starts_queued() {
        let run = WorkflowRun::new(NewWorkflowRun {
            workflow_id: Uuid::now_v7(),
            payload: None,
        });

        assert_eq!(run.status, RunStatus::Queued);
        assert!(!run.status.is_terminal());
        assert!(run.finished_at.is_none());
        assert_eq!(run.payload, serde_json::Value::Null);
    }

    #[test]
    fn status_wire_form_is_snake_case() {
        let json = serde_json::to_string(&RunStatus::Succeeded).unwrap();
        assert_eq!(json, r#""succeeded""#);
        assert_eq!(RunStatus::Failed.to_string(), "failed");
    }
}
