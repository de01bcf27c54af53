//! Governance scoring and workflow engine.
//!
//! Two sibling areas share this namespace: `scoring` holds the stateless
//! calculators (corpus quality, AI usage classification, compliance
//! maturity) together with the threshold policy aggregate, and `program`
//! holds the stateful ten-workshop governance program (workshops, items,
//! actions, decisions). Both areas talk to storage through repository
//! traits so the API layer and tests can swap implementations freely.

pub mod program;
pub mod scoring;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub use program::{ProgramRepository, ProgramService};
pub use scoring::{ScoringRepository, ScoringService, ThresholdPolicy};

/// Error surface shared by every engine operation.
///
/// Mutations are all-or-nothing: a failed check leaves stored state
/// untouched and the variant names the violated constraint for the caller.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    #[error("invalid {entity} transition from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl EngineError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EngineError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::InvalidTransition { .. } | EngineError::Conflict(_) => {
                StatusCode::CONFLICT
            }
            EngineError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Attach entity context when lifting a store failure into the engine
    /// error surface.
    pub fn into_engine(self, entity: &'static str, id: impl Into<String>) -> EngineError {
        match self {
            StoreError::NotFound => EngineError::not_found(entity, id),
            StoreError::Conflict => {
                EngineError::Conflict(format!("{entity} '{}' already exists", id.into()))
            }
            StoreError::Unavailable(message) => EngineError::Unavailable(message),
        }
    }
}

/// Percentage rounding applied uniformly across every reported breakdown.
/// Rounded figures are display values; the engine never feeds them back
/// into further computation.
pub(crate) fn round_pct(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Two-decimal rounding for composite 0-1 scores.
pub(crate) fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
