//! Workflow run request types.

use flowra_data::model::NewWorkflowRun;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for creating a workflow run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRun {
    /// Trigger payload passed to the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl CreateRun {
    /// Converts the request into run creation data for the given workflow.
    pub fn into_new_run(self, workflow_id: Uuid) -> NewWorkflowRun {
        NewWorkflowRun {
            workflow_id,
            payload: self.payload,
        }
    }
}
