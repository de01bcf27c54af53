use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use super::domain::{
    Document, DocumentUsageView, IsoProfile, IsoToggle, KpiSnapshot, MaturityView, QualitySummary,
};
use super::policy::ThresholdPolicy;
use super::repository::ScoringRepository;
use super::service::ScoringService;
use crate::governance::EngineError;

/// Batch ISO enablement payload accepted by the settings endpoint.
#[derive(Debug, Deserialize)]
pub struct IsoProfileUpdate {
    pub profiles: Vec<IsoToggle>,
}

/// Router exposing the scoring read models and the two settings writes.
/// The AI governance summary is mounted by the API crate because it also
/// draws open-action ageing from the program engine.
pub fn scoring_router<R>(service: Arc<ScoringService<R>>) -> Router
where
    R: ScoringRepository + 'static,
{
    Router::new()
        .route("/api/enterprise-brain/quality", get(quality_handler::<R>))
        .route("/api/enterprise-brain/documents", get(documents_handler::<R>))
        .route(
            "/api/enterprise-brain/documents/:document_id",
            get(document_handler::<R>),
        )
        .route(
            "/api/ai/usage/document/:document_id",
            get(document_usage_handler::<R>),
        )
        .route("/api/compliance/maturity", get(maturity_handler::<R>))
        .route("/api/compliance/kpis/latest", get(kpis_handler::<R>))
        .route(
            "/api/settings/iso",
            get(iso_profiles_handler::<R>).put(update_iso_profiles_handler::<R>),
        )
        .route(
            "/api/settings/ai-policy",
            get(policy_handler::<R>).put(update_policy_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn quality_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
) -> Result<Json<QualitySummary>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.quality_summary(Utc::now()).map(Json)
}

pub(crate) async fn documents_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
) -> Result<Json<Vec<Document>>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.documents().map(Json)
}

pub(crate) async fn document_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
    Path(document_id): Path<String>,
) -> Result<Json<Document>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.document(&document_id).map(Json)
}

pub(crate) async fn document_usage_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
    Path(document_id): Path<String>,
) -> Result<Json<DocumentUsageView>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.document_usage(&document_id).map(Json)
}

pub(crate) async fn maturity_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
) -> Result<Json<MaturityView>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.maturity().map(Json)
}

pub(crate) async fn kpis_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
) -> Result<Json<Vec<KpiSnapshot>>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.latest_kpis().map(Json)
}

pub(crate) async fn iso_profiles_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
) -> Result<Json<Vec<IsoProfile>>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.iso_profiles().map(Json)
}

pub(crate) async fn update_iso_profiles_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
    Json(update): Json<IsoProfileUpdate>,
) -> Result<Json<Vec<IsoProfile>>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.update_iso_profiles(&update.profiles).map(Json)
}

pub(crate) async fn policy_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
) -> Result<Json<ThresholdPolicy>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.threshold_policy().map(Json)
}

pub(crate) async fn update_policy_handler<R>(
    State(service): State<Arc<ScoringService<R>>>,
    Json(policy): Json<ThresholdPolicy>,
) -> Result<Json<ThresholdPolicy>, EngineError>
where
    R: ScoringRepository + 'static,
{
    service.update_threshold_policy(policy).map(Json)
}
