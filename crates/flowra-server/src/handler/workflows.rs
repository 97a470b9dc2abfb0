//! Workflow handlers.
//!
//! Workflows are a small, slowly-changing collection, so listings use the
//! page-number contract and allow random page access.

use axum::Router;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use flowra_data::model::Workflow;
use flowra_data::pagination::{SortDirection, paginate_offset};
use validator::Validate;

use crate::handler::Result;
use crate::handler::request::{CreateWorkflow, PagePaginationQuery};
use crate::handler::response::{WorkflowData, WorkflowsPage};
use crate::service::ServiceState;

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "flowra_server::handler::workflows";

/// Lists workflows in creation order with page-number pagination.
#[tracing::instrument(skip_all, fields(page = pagination.page(), page_size = pagination.page_size()))]
async fn list_workflows(
    State(state): State<ServiceState>,
    Query(pagination): Query<PagePaginationQuery>,
) -> Result<(StatusCode, Json<WorkflowsPage>)> {
    tracing::debug!(target: TRACING_TARGET, "listing workflows");

    let pagination = pagination.into_pagination(SortDirection::Ascending);
    let page = paginate_offset(state.workflows.as_ref(), &pagination).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        returned = page.items.len(),
        total = page.total,
        "workflows listed"
    );

    Ok((StatusCode::OK, Json(page.into())))
}

/// Creates a new workflow.
#[tracing::instrument(skip_all)]
async fn create_workflow(
    State(state): State<ServiceState>,
    Json(request): Json<CreateWorkflow>,
) -> Result<(StatusCode, Json<WorkflowData>)> {
    request.validate()?;

    let workflow = Workflow::new(request.into());
    state.workflows.insert(workflow.clone()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        workflow_id = %workflow.id,
        "workflow created"
    );

    Ok((StatusCode::CREATED, Json(workflow.into())))
}

/// Returns routes for workflow management.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/workflows/", get(list_workflows).post(create_workflow))
}
