//! Workflow run handlers.
//!
//! Run history is append-heavy and deep, so listings use the cursor contract:
//! a bounded page plus an opaque continuation token, stable under concurrent
//! appends. Tokens are advisory; a malformed one restarts from the first page.

use axum::Router;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use flowra_data::model::WorkflowRun;
use flowra_data::pagination::{SortDirection, paginate_cursor};

use crate::handler::request::{CreateRun, CursorPaginationQuery, WorkflowPathParams};
use crate::handler::response::{RunData, RunsPage};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for run operations.
const TRACING_TARGET: &str = "flowra_server::handler::runs";

/// Run listings return the newest runs first.
const LIST_DIRECTION: SortDirection = SortDirection::Descending;

/// Lists all runs with cursor pagination.
#[tracing::instrument(skip_all, fields(page_size = pagination.page_size()))]
async fn list_runs(
    State(state): State<ServiceState>,
    Query(pagination): Query<CursorPaginationQuery>,
) -> Result<(StatusCode, Json<RunsPage>)> {
    tracing::debug!(target: TRACING_TARGET, "listing runs");

    let pagination = pagination.into_pagination(LIST_DIRECTION);
    let page = paginate_cursor(state.runs.as_ref(), &pagination).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        returned = page.items.len(),
        has_next = page.has_next(),
        "runs listed"
    );

    Ok((StatusCode::OK, Json(page.into())))
}

/// Lists runs of one workflow with cursor pagination.
#[tracing::instrument(
    skip_all,
    fields(
        workflow_id = %path_params.workflow_id,
        page_size = pagination.page_size(),
    )
)]
async fn list_workflow_runs(
    State(state): State<ServiceState>,
    Path(path_params): Path<WorkflowPathParams>,
    Query(pagination): Query<CursorPaginationQuery>,
) -> Result<(StatusCode, Json<RunsPage>)> {
    tracing::debug!(target: TRACING_TARGET, "listing workflow runs");

    let workflow_id = path_params.workflow_id;
    if state.workflows.get(workflow_id).await?.is_none() {
        return Err(ErrorKind::NotFound.with_context("workflow does not exist"));
    }

    let pagination = pagination.into_pagination(LIST_DIRECTION);
    let scoped = state
        .runs
        .scoped(move |run: &WorkflowRun| run.workflow_id == workflow_id);
    let page = paginate_cursor(&scoped, &pagination).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        returned = page.items.len(),
        has_next = page.has_next(),
        "workflow runs listed"
    );

    Ok((StatusCode::OK, Json(page.into())))
}

/// Appends a new run to a workflow's history.
#[tracing::instrument(skip_all, fields(workflow_id = %path_params.workflow_id))]
async fn create_workflow_run(
    State(state): State<ServiceState>,
    Path(path_params): Path<WorkflowPathParams>,
    Json(request): Json<CreateRun>,
) -> Result<(StatusCode, Json<RunData>)> {
    let workflow_id = path_params.workflow_id;
    if state.workflows.get(workflow_id).await?.is_none() {
        return Err(ErrorKind::NotFound.with_context("workflow does not exist"));
    }

    let run = WorkflowRun::new(request.into_new_run(workflow_id));
    state.runs.insert(run.clone()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        run_id = %run.id,
        "run created"
    );

    Ok((StatusCode::CREATED, Json(run.into())))
}

/// Returns routes for run management.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/runs/", get(list_runs))
        .route(
            "/workflows/{workflowId}/runs/",
            get(list_workflow_runs).post(create_workflow_run),
        )
}
