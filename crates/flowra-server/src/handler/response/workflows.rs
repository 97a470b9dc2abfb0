//! Workflow response types.

use flowra_data::model::Workflow;
use flowra_data::pagination::NumberedPage;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response type for a single workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowData {
    /// Unique workflow identifier.
    pub id: Uuid,
    /// Human-readable workflow name.
    pub name: String,
    /// Optional workflow description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the workflow accepts new runs.
    pub is_active: bool,
    /// When the workflow was created.
    pub created_at: Timestamp,
    /// When the workflow was last updated.
    pub updated_at: Timestamp,
}

impl From<Workflow> for WorkflowData {
    fn from(workflow: Workflow) -> Self {
        Self {
            id: workflow.id,
            name: workflow.name,
            description: workflow.description,
            is_active: workflow.is_active,
            created_at: workflow.created_at,
            updated_at: workflow.updated_at,
        }
    }
}

/// Page-number response contract for workflow listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowsPage {
    /// Total number of workflows across all pages.
    pub count: i64,
    /// Total number of pages at the current page size.
    pub total_pages: i64,
    /// Current page number (1-based).
    pub current_page: i64,
    /// Requested page size.
    pub page_size: i64,
    /// Next page number, absent on the last page.
    pub next: Option<i64>,
    /// Previous page number, absent on the first page.
    pub previous: Option<i64>,
    /// The workflows in this page.
    pub results: Vec<WorkflowData>,
}

impl From<NumberedPage<Workflow>> for WorkflowsPage {
    fn from(page: NumberedPage<Workflow>) -> Self {
        Self {
            count: page.total,
            total_pages: page.total_pages(),
            current_page: page.page,
            page_size: page.page_size,
            next: page.next_page(),
            previous: page.previous_page(),
            results: page.items.into_iter().map(WorkflowData::from).collect(),
        }
    }
}
