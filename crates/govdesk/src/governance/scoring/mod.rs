//! Stateless scoring calculators and the threshold policy aggregate.
//!
//! Everything here is a pure read over a snapshot of stored records; the
//! only mutable state is configuration (AI thresholds, ISO enablement),
//! changed through the single validated entry points on [`ScoringService`].

pub mod ai_usage;
pub mod domain;
pub mod maturity;
pub mod policy;
pub mod quality;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdvisoryAction, AiUsageLog, Band, Document, DocumentUsageView, GovernanceSummary, IsoProfile,
    IsoToggle, KpiSnapshot, MaturityView, QualityEvidences, QualitySummary, Traceability,
    UsageStatus,
};
pub use policy::{ScoringConfig, ThresholdPolicy};
pub use repository::{InMemoryScoringStore, ScoringRepository};
pub use router::scoring_router;
pub use service::ScoringService;
