use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use super::domain::{
    ActionPatch, ActionView, Decision, ItemPatch, ItemView, NewAction, NewDecision, ProgramKpis,
    WorkshopDetailView, WorkshopPatch, WorkshopSummaryView,
};
use super::repository::ProgramRepository;
use super::service::ProgramService;
use crate::governance::EngineError;

#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub workshop_number: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub validated_by: String,
}

/// Router exposing the governance program: workshops, items, the action
/// backlog, decisions, and the KPI rollup.
pub fn program_router<R>(service: Arc<ProgramService<R>>) -> Router
where
    R: ProgramRepository + 'static,
{
    Router::new()
        .route("/api/program/workshops", get(workshops_handler::<R>))
        .route(
            "/api/program/workshops/:number",
            get(workshop_detail_handler::<R>).patch(patch_workshop_handler::<R>),
        )
        .route(
            "/api/program/workshops/:number/start",
            post(start_workshop_handler::<R>),
        )
        .route("/api/program/items", get(items_handler::<R>))
        .route(
            "/api/program/items/:item_id",
            get(item_detail_handler::<R>).patch(patch_item_handler::<R>),
        )
        .route(
            "/api/program/items/:item_id/validate",
            post(validate_item_handler::<R>),
        )
        .route(
            "/api/program/items/:item_id/unvalidate",
            post(unvalidate_item_handler::<R>),
        )
        .route(
            "/api/program/actions",
            get(actions_handler::<R>).post(create_action_handler::<R>),
        )
        .route(
            "/api/program/actions/:action_id",
            patch(update_action_handler::<R>).delete(delete_action_handler::<R>),
        )
        .route(
            "/api/program/decisions",
            get(decisions_handler::<R>).post(create_decision_handler::<R>),
        )
        .route(
            "/api/program/decisions/:decision_id",
            axum::routing::delete(delete_decision_handler::<R>),
        )
        .route("/api/program/kpis", get(kpis_handler::<R>))
        .with_state(service)
}

pub(crate) async fn workshops_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
) -> Result<Json<Vec<WorkshopSummaryView>>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.workshops().map(Json)
}

pub(crate) async fn workshop_detail_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(number): Path<u8>,
) -> Result<Json<WorkshopDetailView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.workshop_detail(number).map(Json)
}

pub(crate) async fn start_workshop_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(number): Path<u8>,
) -> Result<Json<WorkshopDetailView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.start_workshop(number).map(Json)
}

pub(crate) async fn patch_workshop_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(number): Path<u8>,
    Json(patch): Json<WorkshopPatch>,
) -> Result<Json<WorkshopDetailView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.patch_workshop(number, patch).map(Json)
}

pub(crate) async fn items_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<Vec<ItemView>>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.items(query.workshop_number).map(Json)
}

pub(crate) async fn item_detail_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.item_detail(&item_id).map(Json)
}

pub(crate) async fn patch_item_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(item_id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<ItemView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.patch_item(&item_id, patch).map(Json)
}

pub(crate) async fn validate_item_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(item_id): Path<String>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ItemView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service
        .validate_item(&item_id, &request.validated_by, Utc::now())
        .map(Json)
}

pub(crate) async fn unvalidate_item_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.unvalidate_item(&item_id).map(Json)
}

pub(crate) async fn actions_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
) -> Result<Json<Vec<ActionView>>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.actions(Utc::now()).map(Json)
}

pub(crate) async fn create_action_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Json(new_action): Json<NewAction>,
) -> Result<(StatusCode, Json<ActionView>), EngineError>
where
    R: ProgramRepository + 'static,
{
    let view = service.create_action(new_action, Utc::now())?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub(crate) async fn update_action_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(action_id): Path<String>,
    Json(patch): Json<ActionPatch>,
) -> Result<Json<ActionView>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.update_action(&action_id, patch, Utc::now()).map(Json)
}

pub(crate) async fn delete_action_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(action_id): Path<String>,
) -> Result<StatusCode, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.delete_action(&action_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn decisions_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
) -> Result<Json<Vec<Decision>>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.decisions().map(Json)
}

pub(crate) async fn create_decision_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Json(new_decision): Json<NewDecision>,
) -> Result<(StatusCode, Json<Decision>), EngineError>
where
    R: ProgramRepository + 'static,
{
    let decision = service.create_decision(new_decision, Utc::now())?;
    Ok((StatusCode::CREATED, Json(decision)))
}

pub(crate) async fn delete_decision_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(decision_id): Path<String>,
) -> Result<StatusCode, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.delete_decision(&decision_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn kpis_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
) -> Result<Json<ProgramKpis>, EngineError>
where
    R: ProgramRepository + 'static,
{
    service.program_kpis(Utc::now()).map(Json)
}
