//! Govdesk governance engine.
//!
//! The crate hosts the deterministic rules behind the governance portal:
//! information-quality scoring for the knowledge corpus, AI usage
//! classification against configurable thresholds, compliance maturity
//! scoring, and the ten-workshop governance program with its items, actions,
//! and decisions. Each area exposes a repository trait, a service, and an
//! axum router; the `services/api` crate assembles those routers into the
//! running HTTP service and owns process concerns (CLI, metrics, seeding).

pub mod config;
pub mod error;
pub mod governance;
pub mod telemetry;
