//! Public-API pass over the scoring surface: quality, maturity, and the
//! settings writes, all over HTTP.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use govdesk::governance::scoring::{
    scoring_router, AiUsageLog, Document, InMemoryScoringStore, IsoProfile, KpiSnapshot,
    ScoringConfig, ScoringService, ThresholdPolicy, UsageStatus,
};

fn corpus() -> Vec<Document> {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid instant");
    let doc = |id: &str, confidence: f64, validated: bool, age_days: i64| Document {
        id: id.to_string(),
        title: format!("Document {id}"),
        doc_type: "procedure".to_string(),
        url: format!("https://kb.example.test/{id}"),
        owner: "governance@example.test".to_string(),
        confidence_score: confidence,
        validated,
        last_updated: now - Duration::days(age_days),
    };
    vec![
        doc("doc-001", 0.92, true, 10),
        doc("doc-002", 0.75, true, 30),
        doc("doc-003", 0.55, false, 5),
    ]
}

fn router() -> axum::Router {
    let store = Arc::new(InMemoryScoringStore::seeded(
        corpus(),
        vec![AiUsageLog {
            document_id: "doc-001".to_string(),
            usage_status: UsageStatus::Authorized,
            checked_at: Utc::now(),
            intent: "compliance review".to_string(),
        }],
        vec![
            KpiSnapshot {
                id: "kpi-001".to_string(),
                name: "MaturityIndex".to_string(),
                value: 1.0,
                measured_at: Utc::now(),
            },
            KpiSnapshot {
                id: "kpi-002".to_string(),
                name: "PolicyCoverage".to_string(),
                value: 1.0,
                measured_at: Utc::now(),
            },
            KpiSnapshot {
                id: "kpi-003".to_string(),
                name: "AuditFreshnessDays".to_string(),
                value: 0.0,
                measured_at: Utc::now(),
            },
        ],
        vec![IsoProfile {
            iso_code: "ISO42001".to_string(),
            name: "AI management systems".to_string(),
            enabled: true,
        }],
        ThresholdPolicy::default(),
    ));
    scoring_router(Arc::new(ScoringService::new(store, ScoringConfig::default())))
}

async fn send(
    router: &axum::Router,
    method: Method,
    path: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
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
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn quality_and_documents_are_served() {
    let app = router();

    let (status, quality) = send(&app, Method::GET, "/api/enterprise-brain/quality", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quality["evidences"]["total_documents"], json!(3));
    assert_eq!(quality["evidences"]["validated_count"], json!(2));

    let (status, documents) =
        send(&app, Method::GET, "/api/enterprise-brain/documents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(documents.as_array().expect("array").len(), 3);

    let (status, document) = send(
        &app,
        Method::GET,
        "/api/enterprise-brain/documents/doc-002",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(document["id"], "doc-002");
}

#[tokio::test]
async fn maturity_reports_score_and_band() {
    let app = router();

    let (status, maturity) = send(&app, Method::GET, "/api/compliance/maturity", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(maturity["score"], json!(1.0));
    assert_eq!(maturity["band"], "green");
    assert_eq!(maturity["iso_referentials"], json!(["ISO42001"]));
}

#[tokio::test]
async fn policy_update_changes_classification() {
    let app = router();

    // doc-002 sits at 0.75 and is validated: assisted under the defaults.
    let (status, usage) = send(&app, Method::GET, "/api/ai/usage/document/doc-002", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(usage["usage_status"], "assisted");

    let (status, policy) = send(
        &app,
        Method::PUT,
        "/api/settings/ai-policy",
        Some(json!({ "min_iqi_authorized": 0.70, "min_iqi_assisted": 0.50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(policy["min_iqi_authorized"], json!(0.70));

    let (status, usage) = send(&app, Method::GET, "/api/ai/usage/document/doc-002", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(usage["usage_status"], "authorized");
}

#[tokio::test]
async fn iso_settings_round_trip() {
    let app = router();

    let (status, profiles) = send(
        &app,
        Method::PUT,
        "/api/settings/iso",
        Some(json!({ "profiles": [{ "iso_code": "ISO42001", "enabled": false }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profiles[0]["enabled"], json!(false));

    // With the referential disabled the maturity view lists nothing.
    let (status, maturity) = send(&app, Method::GET, "/api/compliance/maturity", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(maturity["iso_referentials"], json!([]));
}
