//! Workflow run response types.

use flowra_data::model::{RunStatus, WorkflowRun};
use flowra_data::pagination::CursorPage;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response type for a single workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunData {
    /// Unique run identifier.
    pub id: Uuid,
    /// Workflow this run belongs to.
    pub workflow_id: Uuid,
    /// Current lifecycle state.
    pub status: RunStatus,
    /// Trigger payload, omitted when null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// When the run started.
    pub started_at: Timestamp,
    /// When the run reached a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Timestamp>,
}

impl From<WorkflowRun> for RunData {
    fn from(run: WorkflowRun) -> Self {
        let payload = if run.payload.is_null() {
            None
        } else {
            Some(run.payload)
        };

        Self {
            id: run.id,
            workflow_id: run.workflow_id,
            status: run.status,
            payload,
            started_at: run.started_at,
            finished_at: run.finished_at,
        }
    }
}

/// Cursor response contract for run listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunsPage {
    /// Number of runs actually returned in this page.
    pub page_size: i64,
    /// Whether more runs exist beyond this page.
    pub has_next: bool,
    /// Continuation token for the next page. Present iff `has_next`.
    pub next_cursor: Option<String>,
    /// The runs in this page.
    pub results: Vec<RunData>,
}

impl From<CursorPage<WorkflowRun>> for RunsPage {
    fn from(page: CursorPage<WorkflowRun>) -> Self {
        let has_next = page.has_next();
        let next_cursor = page.next_cursor.map(|cursor| cursor.encode());
        let results: Vec<RunData> = page.items.into_iter().map(RunData::from).collect();

        Self {
            page_size: results.len() as i64,
            has_next,
            next_cursor,
            results,
        }
    }
}
