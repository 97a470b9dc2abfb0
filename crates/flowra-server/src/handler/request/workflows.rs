//! Workflow request types.

use flowra_data::model::NewWorkflow;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for creating a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflow {
    /// Human-readable workflow name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    /// Optional workflow description.
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CreateWorkflow> for NewWorkflow {
    fn from(request: CreateWorkflow) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}
