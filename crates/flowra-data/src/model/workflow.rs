//! Workflow model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pagination::{KeysetRecord, SortKey, SortKeyKind};

/// A workflow definition owned by an organization.
///
/// The node graph itself is executed elsewhere; this record carries the
/// metadata the API surface lists and filters on. Workflows are listed in
/// creation order with page-number pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Unique workflow identifier.
    pub id: Uuid,
    /// Human-readable workflow name.
    pub name: String,
    /// Optional workflow description.
    pub description: Option<String>,
    /// Whether the workflow accepts new runs.
    pub is_active: bool,
    /// Timestamp when the workflow was created.
    pub created_at: Timestamp,
    /// Timestamp when the workflow was last updated.
    pub updated_at: Timestamp,
}

/// Data required to create a new workflow.
#[derive(Debug, Default, Clone)]
pub struct NewWorkflow {
    /// Human-readable workflow name.
    pub name: String,
    /// Optional workflow description.
    pub description: Option<String>,
}

impl Workflow {
    /// Creates a workflow with a fresh identifier and timestamps.
    pub fn new(new_workflow: NewWorkflow) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::now_v7(),
            name: new_workflow.name,
            description: new_workflow.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl KeysetRecord for Workflow {
    const SORT_FIELD: &'static str = "created_at";
    const SORT_KIND: SortKeyKind = SortKeyKind::Timestamp;

    fn sort_key(&self) -> SortKey {
        SortKey::Timestamp(self.created_at)
    }

    fn sort_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_workflow_is_active_with_matching_timestamps() {
        let workflow = Workflow::new(NewWorkflow {
            name: "nightly-report".to_owned(),
            description: None,
        });

        assert!(workflow.is_active);
        assert_eq!(workflow.created_at, workflow.updated_at);
        assert_eq!(workflow.sort_id(), workflow.id);
    }
}
