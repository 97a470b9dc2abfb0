//! Path parameter types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path parameters for workflow-scoped routes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPathParams {
    /// Identifier of the workflow addressed by the route.
    pub workflow_id: Uuid,
}
