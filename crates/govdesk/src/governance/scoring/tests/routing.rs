use super::common::*;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::governance::scoring::domain::UsageStatus;
use crate::governance::scoring::router::scoring_router;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).expect("request")
}

fn put_json(path: &str, payload: &Value) -> Request<Body> {
    Request::put(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload")))
        .expect("request")
}

#[tokio::test]
async fn quality_route_serves_the_summary() {
    let service = build_service(
        vec![
            document("doc-001", 0.90, true, 10),
            document("doc-002", 0.85, true, 20),
            document("doc-003", 0.55, false, 5),
            document("doc-004", 0.70, true, 120),
        ],
        vec![],
        vec![],
    );
    let router = scoring_router(service);

    let response = router
        .oneshot(get("/api/enterprise-brain/quality"))
        .await
        .expect("route");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["evidences"]["total_documents"], json!(4));
}

#[tokio::test]
async fn unknown_document_route_returns_not_found() {
    let service = build_service(vec![], vec![], vec![]);
    let router = scoring_router(service);

    let response = router
        .oneshot(get("/api/enterprise-brain/documents/doc-404"))
        .await
        .expect("route");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().expect("message").contains("doc-404"));
}

#[tokio::test]
async fn document_usage_route_classifies_under_the_active_policy() {
    let service = build_service(vec![document("doc-001", 0.92, true, 1)], vec![], vec![]);
    let router = scoring_router(service);

    let response = router
        .oneshot(get("/api/ai/usage/document/doc-001"))
        .await
        .expect("route");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["usage_status"], json!(UsageStatus::Authorized));
}

#[tokio::test]
async fn invalid_policy_update_returns_unprocessable() {
    let service = build_service(vec![], vec![], vec![]);
    let router = scoring_router(service);

    let response = router
        .oneshot(put_json(
            "/api/settings/ai-policy",
            &json!({ "min_iqi_authorized": 0.4, "min_iqi_assisted": 0.7 }),
        ))
        .await
        .expect("route");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn iso_update_with_unknown_code_returns_not_found() {
    let service = build_service(vec![], vec![], vec![]);
    let router = scoring_router(service);

    let response = router
        .oneshot(put_json(
            "/api/settings/iso",
            &json!({ "profiles": [{ "iso_code": "ISO99999", "enabled": true }] }),
        ))
        .await
        .expect("route");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn maturity_route_serves_score_band_and_referentials() {
    let service = build_service(vec![], vec![], full_kpi_set(1.0, 1.0, 0.0));
    let router = scoring_router(service);

    let response = router
        .oneshot(get("/api/compliance/maturity"))
        .await
        .expect("route");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["score"], json!(1.0));
    assert_eq!(body["band"], json!("green"));
    assert_eq!(body["iso_referentials"], json!(["ISO42001", "ISO27001"]));
}
