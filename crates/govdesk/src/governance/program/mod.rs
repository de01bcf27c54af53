//! The ten-workshop governance program.
//!
//! Workshops and their items are provisioned up front from a static catalog
//! and then move through small, explicitly enumerated state machines. The
//! action backlog and decision log hang off the same store; every progress
//! figure (completion percentages, ageing, KPI rollup) is derived at read
//! time rather than stored.

pub mod definitions;
pub mod domain;
pub mod progress;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use definitions::PROGRAM_WORKSHOPS;
pub use domain::{
    Action, ActionPatch, ActionStatus, ActionView, Decision, ItemPatch, ItemRequirement,
    ItemStatus, ItemView, NewAction, NewDecision, Priority, ProgramKpis, Workshop,
    WorkshopDetailView, WorkshopItem, WorkshopPatch, WorkshopStatus, WorkshopSummaryView,
};
pub use repository::{InMemoryProgramStore, ProgramRepository};
pub use router::program_router;
pub use service::ProgramService;
