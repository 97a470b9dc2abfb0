//! Demo data seeding for local development.

use flowra_data::DataResult;
use flowra_data::model::{NewWorkflow, RunStatus, Workflow, WorkflowRun};
use flowra_server::service::ServiceState;
use jiff::{Span, Timestamp};
use serde_json::json;

use crate::TRACING_TARGET_STARTUP;

/// Workflows created by the seeder, with one run per listed status.
const DEMO_WORKFLOWS: &[(&str, &str, &[RunStatus])] = &[
    (
        "nightly-report",
        "Aggregates yesterday's activity into a report",
        &[
            RunStatus::Succeeded,
            RunStatus::Succeeded,
            RunStatus::Failed,
            RunStatus::Succeeded,
            RunStatus::Running,
        ],
    ),
    (
        "webhook-fanout",
        "Delivers incoming webhooks to downstream services",
        &[
            RunStatus::Succeeded,
            RunStatus::Failed,
            RunStatus::Succeeded,
            RunStatus::Succeeded,
            RunStatus::Succeeded,
            RunStatus::Succeeded,
            RunStatus::Queued,
        ],
    ),
    (
        "invoice-sync",
        "Synchronizes invoices with the billing provider",
        &[RunStatus::Succeeded, RunStatus::Running, RunStatus::Queued],
    ),
];

/// Populates the in-memory store with demo workflows and runs.
///
/// Run timestamps are spread backwards from the current time so cursor
/// pagination over `/runs/` has several pages to walk through.
pub async fn seed_demo_data(state: &ServiceState) -> DataResult<()> {
    let now = Timestamp::now();
    let mut run_count = 0usize;

    for (index, (name, description, statuses)) in DEMO_WORKFLOWS.iter().enumerate() {
        let mut workflow = Workflow::new(NewWorkflow {
            name: (*name).to_owned(),
            description: Some((*description).to_owned()),
        });
        workflow.created_at = now - Span::new().hours(24 * (index as i64 + 1));
        workflow.updated_at = workflow.created_at;

        for (offset, status) in statuses.iter().enumerate() {
            let started_at = now - Span::new().minutes(15 * (run_count as i64 + 1));
            let finished_at = status
                .is_terminal()
                .then(|| started_at + Span::new().minutes(5));

            let run = WorkflowRun {
                id: uuid::Uuid::now_v7(),
                workflow_id: workflow.id,
                status: *status,
                payload: json!({ "trigger": "schedule", "attempt": offset + 1 }),
                started_at,
                finished_at,
            };
            state.runs.insert(run).await?;
            run_count += 1;
        }

        state.workflows.insert(workflow).await?;
    }

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        workflows = DEMO_WORKFLOWS.len(),
        runs = run_count,
        "Seeded demo data"
    );

    Ok(())
}
