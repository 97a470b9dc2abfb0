//! End-to-end pagination behavior over the HTTP surface.

use axum_test::TestServer;
use base64::prelude::*;
use flowra_data::model::{NewWorkflow, NewWorkflowRun, Workflow, WorkflowRun};
use flowra_server::handler::routes;
use flowra_server::service::ServiceState;
use jiff::{Span, Timestamp};
use serde_json::{Value, json};
use uuid::Uuid;

fn test_server(state: ServiceState) -> TestServer {
    TestServer::new(routes().with_state(state)).expect("router should build")
}

async fn seed_workflow(state: &ServiceState, name: &str) -> Workflow {
    let workflow = Workflow::new(NewWorkflow {
        name: name.to_owned(),
        description: None,
    });
    state.workflows.insert(workflow.clone()).await.unwrap();
    workflow
}

/// Seeds `count` runs with strictly decreasing ages (newest has index 0).
async fn seed_runs(state: &ServiceState, workflow_id: Uuid, count: i64) -> Vec<WorkflowRun> {
    let now = Timestamp::now();
    let mut runs = Vec::new();

    for index in 0..count {
        let mut run = WorkflowRun::new(NewWorkflowRun {
            workflow_id,
            payload: None,
        });
        run.started_at = now - Span::new().seconds(index * 60);
        state.runs.insert(run.clone()).await.unwrap();
        runs.push(run);
    }

    runs
}

fn result_ids(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|run| run["id"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn cursor_walk_returns_every_run_exactly_once_in_order() {
    let state = ServiceState::new();
    let workflow = seed_workflow(&state, "walk").await;
    let runs = seed_runs(&state, workflow.id, 25).await;
    let server = test_server(state);

    let mut collected: Vec<String> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;

    loop {
        let mut request = server
            .get(&format!("/workflows/{}/runs/", workflow.id))
            .add_query_param("page_size", 10);
        if let Some(ref token) = cursor {
            request = request.add_query_param("cursor", token);
        }

        let response = request.await;
        response.assert_status_ok();
        let body: Value = response.json();

        let ids = result_ids(&body);
        assert_eq!(body["pageSize"].as_i64().unwrap(), ids.len() as i64);
        collected.extend(ids);
        pages += 1;

        // has_next and next_cursor must agree.
        let has_next = body["hasNext"].as_bool().unwrap();
        assert_eq!(has_next, !body["nextCursor"].is_null());

        if !has_next {
            break;
        }
        cursor = Some(body["nextCursor"].as_str().unwrap().to_owned());
    }

    assert_eq!(pages, 3); // 10 + 10 + 5
    let expected: Vec<String> = runs.iter().map(|run| run.id.to_string()).collect();
    assert_eq!(collected, expected, "newest first, no gaps, no duplicates");
}

#[tokio::test]
async fn malformed_cursors_degrade_to_first_page() {
    let state = ServiceState::new();
    let workflow = seed_workflow(&state, "degrade").await;
    seed_runs(&state, workflow.id, 5).await;
    let server = test_server(state);

    let url = format!("/workflows/{}/runs/", workflow.id);
    let baseline = server.get(&url).add_query_param("page_size", 3).await;
    baseline.assert_status_ok();
    let baseline: Value = baseline.json();

    let garbage_json = BASE64_URL_SAFE_NO_PAD.encode(b"these are not the droids");
    let broken_tokens = [
        "".to_owned(),
        "@@not-base64@@".to_owned(),
        garbage_json,
        "dHJ1bmNhdGVk".to_owned(),
    ];

    for token in broken_tokens {
        let response = server
            .get(&url)
            .add_query_param("page_size", 3)
            .add_query_param("cursor", &token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();

        assert_eq!(
            result_ids(&body),
            result_ids(&baseline),
            "cursor {token:?} must behave like an absent cursor"
        );
    }
}

#[tokio::test]
async fn page_size_is_clamped_to_maximum() {
    let state = ServiceState::new();
    let workflow = seed_workflow(&state, "clamp").await;
    seed_runs(&state, workflow.id, 150).await;
    let server = test_server(state);

    let response = server
        .get(&format!("/workflows/{}/runs/", workflow.id))
        .add_query_param("page_size", 5000)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["results"].as_array().unwrap().len(), 100);
    assert!(body["hasNext"].as_bool().unwrap());

    // page_size of zero clamps up to one.
    let response = server
        .get(&format!("/workflows/{}/runs/", workflow.id))
        .add_query_param("page_size", 0)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn append_mid_chain_appears_exactly_once_later() {
    let state = ServiceState::new();
    let workflow = seed_workflow(&state, "append").await;
    let runs = seed_runs(&state, workflow.id, 4).await;
    let server = test_server(state.clone());

    let url = format!("/workflows/{}/runs/", workflow.id);
    let first = server.get(&url).add_query_param("page_size", 2).await;
    first.assert_status_ok();
    let first: Value = first.json();
    assert_eq!(
        result_ids(&first),
        vec![runs[0].id.to_string(), runs[1].id.to_string()]
    );

    // Appended between calls: one run older than the cursor position (sorts
    // after it in the descending chain) and one newer (sorts before it).
    let mut older = WorkflowRun::new(NewWorkflowRun {
        workflow_id: workflow.id,
        payload: None,
    });
    older.started_at = runs[3].started_at - Span::new().seconds(60);
    state.runs.insert(older.clone()).await.unwrap();

    let mut newer = WorkflowRun::new(NewWorkflowRun {
        workflow_id: workflow.id,
        payload: None,
    });
    newer.started_at = runs[0].started_at + Span::new().seconds(60);
    state.runs.insert(newer.clone()).await.unwrap();

    let cursor = first["nextCursor"].as_str().unwrap();
    let second = server
        .get(&url)
        .add_query_param("page_size", 10)
        .add_query_param("cursor", cursor)
        .await;
    second.assert_status_ok();
    let second: Value = second.json();

    let ids = result_ids(&second);
    assert_eq!(
        ids,
        vec![
            runs[2].id.to_string(),
            runs[3].id.to_string(),
            older.id.to_string(),
        ],
        "older append shows up exactly once; newer append is invisible to this chain"
    );
    assert!(!second["hasNext"].as_bool().unwrap());
}

#[tokio::test]
async fn descending_worked_example_holds() {
    // Four runs at t=100..400; page_size 2, newest first.
    let state = ServiceState::new();
    let workflow = seed_workflow(&state, "example").await;

    let mut by_second: Vec<(i64, Uuid)> = Vec::new();
    for seconds in [100, 200, 300, 400] {
        let mut run = WorkflowRun::new(NewWorkflowRun {
            workflow_id: workflow.id,
            payload: None,
        });
        run.started_at = Timestamp::from_second(seconds).unwrap();
        by_second.push((seconds, run.id));
        state.runs.insert(run).await.unwrap();
    }
    let server = test_server(state);

    let url = format!("/workflows/{}/runs/", workflow.id);
    let first = server.get(&url).add_query_param("page_size", 2).await;
    let first: Value = first.json();

    assert_eq!(
        result_ids(&first),
        vec![by_second[3].1.to_string(), by_second[2].1.to_string()]
    );
    assert!(first["hasNext"].as_bool().unwrap());

    // The cursor resumes strictly after t=300.
    let cursor = first["nextCursor"].as_str().unwrap();
    let second = server
        .get(&url)
        .add_query_param("page_size", 2)
        .add_query_param("cursor", cursor)
        .await;
    let second: Value = second.json();

    assert_eq!(
        result_ids(&second),
        vec![by_second[1].1.to_string(), by_second[0].1.to_string()]
    );
    assert!(!second["hasNext"].as_bool().unwrap());
    assert!(second["nextCursor"].is_null());
}

#[tokio::test]
async fn workflow_listing_uses_page_number_contract() {
    let state = ServiceState::new();
    for index in 0..7 {
        seed_workflow(&state, &format!("workflow-{index}")).await;
    }
    let server = test_server(state);

    let response = server
        .get("/workflows/")
        .add_query_param("page", 2)
        .add_query_param("page_size", 3)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["count"].as_i64().unwrap(), 7);
    assert_eq!(body["totalPages"].as_i64().unwrap(), 3);
    assert_eq!(body["currentPage"].as_i64().unwrap(), 2);
    assert_eq!(body["pageSize"].as_i64().unwrap(), 3);
    assert_eq!(body["next"].as_i64(), Some(3));
    assert_eq!(body["previous"].as_i64(), Some(1));
    assert_eq!(body["results"].as_array().unwrap().len(), 3);

    let last = server
        .get("/workflows/")
        .add_query_param("page", 3)
        .add_query_param("page_size", 3)
        .await;
    let last: Value = last.json();
    assert_eq!(last["results"].as_array().unwrap().len(), 1);
    assert!(last["next"].is_null());
}

#[tokio::test]
async fn create_endpoints_validate_and_scope() {
    let state = ServiceState::new();
    let server = test_server(state.clone());

    // Invalid payload is rejected.
    let response = server.post("/workflows/").json(&json!({ "name": "" })).await;
    response.assert_status_bad_request();

    // Valid payload creates a workflow.
    let response = server
        .post("/workflows/")
        .json(&json!({ "name": "etl-sync" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let workflow: Value = response.json();
    let workflow_id = workflow["id"].as_str().unwrap().to_owned();

    // Runs can only be appended to existing workflows.
    let response = server
        .post(&format!("/workflows/{}/runs/", Uuid::new_v4()))
        .json(&json!({}))
        .await;
    response.assert_status_not_found();

    let response = server
        .post(&format!("/workflows/{workflow_id}/runs/"))
        .json(&json!({ "payload": { "invoice": 42 } }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let run: Value = response.json();
    assert_eq!(run["workflowId"].as_str().unwrap(), workflow_id);
    assert_eq!(run["status"].as_str().unwrap(), "queued");

    // The run is visible through the global listing as well.
    let response = server.get("/runs/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pageSize"].as_i64().unwrap(), 1);
    assert!(!body["hasNext"].as_bool().unwrap());
}
