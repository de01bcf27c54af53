use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Workshop lifecycle. Status only ever advances forward; the engine never
/// regresses a workshop automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkshopStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl WorkshopStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkshopStatus::NotStarted => "not_started",
            WorkshopStatus::InProgress => "in_progress",
            WorkshopStatus::Completed => "completed",
        }
    }

    /// Enumerated forward edges: start and complete. Everything else is an
    /// invalid transition.
    pub fn can_advance_to(self, next: WorkshopStatus) -> bool {
        matches!(
            (self, next),
            (WorkshopStatus::NotStarted, WorkshopStatus::InProgress)
                | (WorkshopStatus::InProgress, WorkshopStatus::Completed)
        )
    }
}

/// Item lifecycle. The single reverse edge (`validated -> done`) models
/// explicit removal of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    NotStarted,
    InProgress,
    Done,
    Validated,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "not_started",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Done => "done",
            ItemStatus::Validated => "validated",
        }
    }

    pub fn can_step_to(self, next: ItemStatus) -> bool {
        matches!(
            (self, next),
            (ItemStatus::NotStarted, ItemStatus::InProgress)
                | (ItemStatus::InProgress, ItemStatus::Done)
                | (ItemStatus::Done, ItemStatus::Validated)
                | (ItemStatus::Validated, ItemStatus::Done)
        )
    }

    /// An item counts toward delivery progress once it is done or validated.
    pub fn is_delivered(self) -> bool {
        matches!(self, ItemStatus::Done | ItemStatus::Validated)
    }
}

/// Requirement level carried by the program catalog. The French labels are
/// the stored wire values; presentation-layer localization is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemRequirement {
    #[serde(rename = "OBLIGATOIRE")]
    Obligatoire,
    #[serde(rename = "RECOMMANDE")]
    Recommande,
    #[serde(rename = "OPTIONNEL")]
    Optionnel,
}

/// Action lifecycle: open -> in_progress -> done | closed. Done and closed
/// are both terminal; skipping in_progress is a legal forward jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Open,
    InProgress,
    Done,
    Closed,
}

impl ActionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::Open => "open",
            ActionStatus::InProgress => "in_progress",
            ActionStatus::Done => "done",
            ActionStatus::Closed => "closed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ActionStatus::Done | ActionStatus::Closed)
    }

    pub fn can_move_to(self, next: ActionStatus) -> bool {
        match self {
            ActionStatus::Open => next != ActionStatus::Open,
            ActionStatus::InProgress => next.is_terminal(),
            ActionStatus::Done | ActionStatus::Closed => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// One of the ten program workshops, provisioned up front from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    pub workshop_number: u8,
    pub title: String,
    pub description: String,
    pub status: WorkshopStatus,
    pub completion_criteria: Vec<String>,
    /// Criterion text -> checked. Keys are always a subset of
    /// `completion_criteria`; patches with unknown keys are rejected.
    pub completion_criteria_state: BTreeMap<String, bool>,
}

/// Deliverable tracked inside a workshop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkshopItem {
    pub item_id: String,
    pub workshop_number: u8,
    pub title: String,
    pub module_name: String,
    pub status_requirement: ItemRequirement,
    pub status: ItemStatus,
    pub acceptance_criteria: Vec<String>,
    pub acceptance_state: BTreeMap<String, bool>,
    pub owner_user_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    /// Set only while the item is validated.
    pub validated_by: Option<String>,
    pub validated_at: Option<DateTime<Utc>>,
}

/// Backlog action, optionally linked to a workshop. Ageing is derived at
/// query time from `created_at`, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: ActionStatus,
    pub workshop_number: Option<u8>,
    pub owner_user_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Logged governance decision. Create-only: immutable once stored, apart
/// from hard deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub decision_text: String,
    pub workshop_number: Option<u8>,
    pub decided_by: String,
    pub decided_at: DateTime<Utc>,
    pub evidence_links: Vec<String>,
}

/// Partial workshop update: status transition and/or a criteria-state merge
/// patch carrying only the keys the caller intends to change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkshopPatch {
    pub status: Option<WorkshopStatus>,
    pub completion_criteria_state: Option<BTreeMap<String, bool>>,
}

/// Partial item update. `acceptance_state` follows the same merge semantics
/// as workshop criteria. Transitions into `validated` go through the
/// dedicated validate operation because they require an actor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub status: Option<ItemStatus>,
    pub owner_user_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub acceptance_state: Option<BTreeMap<String, bool>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAction {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub workshop_number: Option<u8>,
    pub owner_user_id: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ActionStatus>,
    pub workshop_number: Option<u8>,
    pub owner_user_id: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDecision {
    pub decision_text: String,
    pub workshop_number: Option<u8>,
    pub decided_by: String,
    #[serde(default)]
    pub evidence_links: Vec<String>,
}

/// Workshop row for the program listing, with derived progress fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkshopSummaryView {
    pub workshop_number: u8,
    pub title: String,
    pub status: WorkshopStatus,
    pub completion_pct: f64,
    pub items_total: usize,
    pub items_done: usize,
    pub items_validated: usize,
}

/// Full workshop view served after every read or write so progress fields
/// are never stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkshopDetailView {
    pub workshop_number: u8,
    pub title: String,
    pub description: String,
    pub status: WorkshopStatus,
    pub completion_criteria: Vec<String>,
    pub completion_criteria_state: BTreeMap<String, bool>,
    pub completion_pct: f64,
    /// True when every completion criterion is checked and every
    /// OBLIGATOIRE item is validated. Callers decide whether to complete.
    pub ready_to_complete: bool,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: WorkshopItem,
    pub acceptance_progress_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionView {
    #[serde(flatten)]
    pub action: Action,
    /// Days since creation, present only while the action is open or in
    /// progress.
    pub ageing_days: Option<i64>,
}

/// Program-level KPI rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramKpis {
    pub workshops_completed: usize,
    pub workshop_completion_pct: f64,
    pub items_total: usize,
    pub items_done: usize,
    pub items_validated: usize,
    pub actions_open_count: usize,
    pub actions_avg_ageing_days: f64,
    pub decisions_count: usize,
}
