//! End-to-end pass over the public API: provision the program, run one
//! workshop to completion over HTTP, and check that the scoring surface
//! reflects the backlog.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use govdesk::governance::program::{program_router, InMemoryProgramStore, ProgramService};

fn router() -> axum::Router {
    let service = Arc::new(ProgramService::new(Arc::new(
        InMemoryProgramStore::provisioned(),
    )));
    program_router(service)
}

async fn send(router: &axum::Router, method: Method, path: &str, payload: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match payload {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).expect("payload")))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("route dispatch");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

#[tokio::test]
async fn workshop_one_runs_to_completion_over_http() {
    let app = router();

    // Fresh program: ten workshops, nothing started.
    let (status, listing) = send(&app, Method::GET, "/api/program/workshops", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().expect("array").len(), 10);

    let (status, detail) = send(&app, Method::POST, "/api/program/workshops/1/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["status"], "in_progress");

    // Check every completion criterion through a merge patch.
    let criteria: Vec<String> = detail["completion_criteria"]
        .as_array()
        .expect("criteria array")
        .iter()
        .map(|value| value.as_str().expect("criterion").to_string())
        .collect();
    let state: Value = criteria.iter().map(|key| (key.clone(), json!(true))).collect::<serde_json::Map<_, _>>().into();
    let (status, detail) = send(
        &app,
        Method::PATCH,
        "/api/program/workshops/1",
        Some(json!({ "completion_criteria_state": state })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["completion_pct"], json!(100.0));
    assert_eq!(detail["ready_to_complete"], json!(false));

    // Deliver and validate every OBLIGATOIRE item of workshop 1.
    for item_id in ["A1-01", "A1-02", "A1-03", "A1-04", "A1-06", "A1-07"] {
        for next in ["in_progress", "done"] {
            let (status, _) = send(
                &app,
                Method::PATCH,
                &format!("/api/program/items/{item_id}"),
                Some(json!({ "status": next })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, view) = send(
            &app,
            Method::POST,
            &format!("/api/program/items/{item_id}/validate"),
            Some(json!({ "validated_by": "sponsor" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["status"], "validated");
        assert_eq!(view["validated_by"], "sponsor");
    }

    let (status, detail) = send(&app, Method::GET, "/api/program/workshops/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["ready_to_complete"], json!(true));

    let (status, detail) = send(
        &app,
        Method::PATCH,
        "/api/program/workshops/1",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["status"], "completed");

    let (status, kpis) = send(&app, Method::GET, "/api/program/kpis", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kpis["workshops_completed"], json!(1));
    assert_eq!(kpis["workshop_completion_pct"], json!(10.0));
    assert_eq!(kpis["items_validated"], json!(6));
}

#[tokio::test]
async fn invalid_transitions_surface_as_conflicts() {
    let app = router();

    // Completing an untouched workshop must be refused.
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/program/workshops/3",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().expect("message").contains("transition"));

    // Unknown criteria keys are a validation failure, not a conflict.
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/program/workshops/3",
        Some(json!({ "completion_criteria_state": { "Critère inventé": true } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/api/program/workshops/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn action_lifecycle_over_http() {
    let app = router();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/program/actions",
        Some(json!({
            "title": "Documenter la stratégie DLP",
            "priority": "high",
            "workshop_number": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "open");
    assert_eq!(created["ageing_days"], json!(0));
    let action_id = created["id"].as_str().expect("id").to_string();

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/program/actions/{action_id}"),
        Some(json!({ "status": "done" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["ageing_days"], Value::Null);

    // Terminal actions accept no further transitions.
    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/program/actions/{action_id}"),
        Some(json!({ "status": "open" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/program/actions/{action_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
