use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::infra::AppState;
use govdesk::governance::program::{program_router, ProgramRepository, ProgramService};
use govdesk::governance::scoring::{scoring_router, GovernanceSummary, ScoringRepository, ScoringService};
use govdesk::governance::EngineError;

/// Shared state for the composite AI governance summary, which reads from
/// both engines: classification drift from scoring, backlog ageing from the
/// program.
pub(crate) struct SummaryState<S, P> {
    pub(crate) scoring: Arc<ScoringService<S>>,
    pub(crate) program: Arc<ProgramService<P>>,
}

impl<S, P> Clone for SummaryState<S, P> {
    fn clone(&self) -> Self {
        Self {
            scoring: self.scoring.clone(),
            program: self.program.clone(),
        }
    }
}

/// Assemble the full API surface: both engine routers, the composite AI
/// summary, and the operational endpoints.
pub(crate) fn governance_routes<S, P>(
    scoring: Arc<ScoringService<S>>,
    program: Arc<ProgramService<P>>,
) -> axum::Router
where
    S: ScoringRepository + 'static,
    P: ProgramRepository + 'static,
{
    let summary_routes = axum::Router::new()
        .route(
            "/api/governance/ai/summary",
            axum::routing::get(ai_summary_endpoint::<S, P>),
        )
        .with_state(SummaryState { scoring: scoring.clone(), program: program.clone() });

    scoring_router(scoring)
        .merge(program_router(program))
        .merge(summary_routes)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn ai_summary_endpoint<S, P>(
    State(state): State<SummaryState<S, P>>,
) -> Result<Json<GovernanceSummary>, EngineError>
where
    S: ScoringRepository + 'static,
    P: ProgramRepository + 'static,
{
    let ageing = state.program.max_open_ageing(Utc::now())?;
    state.scoring.ai_summary(ageing).map(Json)
}
