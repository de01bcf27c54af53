use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{
    Action, ActionPatch, ActionStatus, ActionView, Decision, ItemPatch, ItemStatus, ItemView,
    NewAction, NewDecision, ProgramKpis, Workshop, WorkshopDetailView, WorkshopItem, WorkshopPatch,
    WorkshopStatus, WorkshopSummaryView,
};
use super::progress;
use super::repository::ProgramRepository;
use crate::governance::EngineError;

/// Service driving the ten-workshop governance program: workshop and item
/// state machines, the action backlog with derived ageing, and the decision
/// log. Every response carries freshly derived progress fields.
pub struct ProgramService<R> {
    repository: Arc<R>,
    action_seq: AtomicU64,
    decision_seq: AtomicU64,
}

impl<R> ProgramService<R>
where
    R: ProgramRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            action_seq: AtomicU64::new(1),
            decision_seq: AtomicU64::new(1),
        }
    }

    fn next_action_id(&self) -> String {
        format!("act-{:06}", self.action_seq.fetch_add(1, Ordering::Relaxed))
    }

    fn next_decision_id(&self) -> String {
        format!(
            "dec-{:06}",
            self.decision_seq.fetch_add(1, Ordering::Relaxed)
        )
    }

    fn load_workshop(&self, number: u8) -> Result<Workshop, EngineError> {
        self.repository
            .workshop(number)
            .map_err(|err| err.into_engine("workshop", number.to_string()))?
            .ok_or_else(|| EngineError::not_found("workshop", number.to_string()))
    }

    fn load_item(&self, item_id: &str) -> Result<WorkshopItem, EngineError> {
        self.repository
            .item(item_id)
            .map_err(|err| err.into_engine("item", item_id))?
            .ok_or_else(|| EngineError::not_found("item", item_id))
    }

    fn workshop_items(&self, number: u8) -> Result<Vec<WorkshopItem>, EngineError> {
        self.repository
            .items(Some(number))
            .map_err(|err| err.into_engine("item", "*"))
    }

    /// Optional workshop references on actions and decisions must point at a
    /// provisioned workshop.
    fn check_workshop_ref(&self, workshop_number: Option<u8>) -> Result<(), EngineError> {
        if let Some(number) = workshop_number {
            self.load_workshop(number)?;
        }
        Ok(())
    }

    fn detail_view(&self, workshop: Workshop) -> Result<WorkshopDetailView, EngineError> {
        let items = self.workshop_items(workshop.workshop_number)?;
        let item_views = items
            .iter()
            .map(|item| ItemView {
                acceptance_progress_pct: progress::acceptance_progress_pct(item),
                item: item.clone(),
            })
            .collect();
        Ok(WorkshopDetailView {
            workshop_number: workshop.workshop_number,
            title: workshop.title.clone(),
            description: workshop.description.clone(),
            status: workshop.status,
            completion_pct: progress::completion_pct(&workshop),
            ready_to_complete: progress::ready_to_complete(&workshop, &items),
            completion_criteria: workshop.completion_criteria,
            completion_criteria_state: workshop.completion_criteria_state,
            items: item_views,
        })
    }

    /// Program listing, one summary row per workshop in catalog order.
    pub fn workshops(&self) -> Result<Vec<WorkshopSummaryView>, EngineError> {
        let workshops = self
            .repository
            .workshops()
            .map_err(|err| err.into_engine("workshop", "*"))?;
        let items = self
            .repository
            .items(None)
            .map_err(|err| err.into_engine("item", "*"))?;

        Ok(workshops
            .into_iter()
            .map(|workshop| {
                let scoped: Vec<&WorkshopItem> = items
                    .iter()
                    .filter(|item| item.workshop_number == workshop.workshop_number)
                    .collect();
                WorkshopSummaryView {
                    workshop_number: workshop.workshop_number,
                    completion_pct: progress::completion_pct(&workshop),
                    items_total: scoped.len(),
                    items_done: scoped
                        .iter()
                        .filter(|item| item.status == ItemStatus::Done)
                        .count(),
                    items_validated: scoped
                        .iter()
                        .filter(|item| item.status == ItemStatus::Validated)
                        .count(),
                    title: workshop.title,
                    status: workshop.status,
                }
            })
            .collect())
    }

    pub fn workshop_detail(&self, number: u8) -> Result<WorkshopDetailView, EngineError> {
        let workshop = self.load_workshop(number)?;
        self.detail_view(workshop)
    }

    /// Explicit start operation: `not_started -> in_progress`.
    pub fn start_workshop(&self, number: u8) -> Result<WorkshopDetailView, EngineError> {
        let mut workshop = self.load_workshop(number)?;
        if !workshop
            .status
            .can_advance_to(WorkshopStatus::InProgress)
        {
            return Err(EngineError::InvalidTransition {
                entity: "workshop",
                from: workshop.status.label().to_string(),
                to: WorkshopStatus::InProgress.label().to_string(),
            });
        }
        workshop.status = WorkshopStatus::InProgress;
        self.repository
            .update_workshop(workshop.clone())
            .map_err(|err| err.into_engine("workshop", number.to_string()))?;
        self.detail_view(workshop)
    }

    /// Partial workshop update. The criteria patch is validated against the
    /// workshop's criteria list before anything is written; on rejection the
    /// stored state is untouched. Merge semantics: only the keys present in
    /// the patch change.
    pub fn patch_workshop(
        &self,
        number: u8,
        patch: WorkshopPatch,
    ) -> Result<WorkshopDetailView, EngineError> {
        let workshop = self.load_workshop(number)?;

        let criteria_patch: Vec<(String, bool)> = match &patch.completion_criteria_state {
            Some(state) => {
                for key in state.keys() {
                    if !workshop.completion_criteria.iter().any(|c| c == key) {
                        return Err(EngineError::Validation(format!(
                            "unknown completion criterion '{key}' for workshop {number}"
                        )));
                    }
                }
                state.iter().map(|(k, v)| (k.clone(), *v)).collect()
            }
            None => Vec::new(),
        };

        if let Some(next) = patch.status {
            if next != workshop.status && !workshop.status.can_advance_to(next) {
                return Err(EngineError::InvalidTransition {
                    entity: "workshop",
                    from: workshop.status.label().to_string(),
                    to: next.label().to_string(),
                });
            }
        }

        let mut updated = if criteria_patch.is_empty() {
            workshop
        } else {
            self.repository
                .merge_completion_state(number, &criteria_patch)
                .map_err(|err| err.into_engine("workshop", number.to_string()))?
        };

        if let Some(next) = patch.status {
            if next != updated.status {
                updated.status = next;
                self.repository
                    .update_workshop(updated.clone())
                    .map_err(|err| err.into_engine("workshop", number.to_string()))?;
            }
        }

        self.detail_view(updated)
    }

    pub fn items(&self, workshop_number: Option<u8>) -> Result<Vec<ItemView>, EngineError> {
        if let Some(number) = workshop_number {
            self.load_workshop(number)?;
        }
        let items = self
            .repository
            .items(workshop_number)
            .map_err(|err| err.into_engine("item", "*"))?;
        Ok(items
            .into_iter()
            .map(|item| ItemView {
                acceptance_progress_pct: progress::acceptance_progress_pct(&item),
                item,
            })
            .collect())
    }

    pub fn item_detail(&self, item_id: &str) -> Result<ItemView, EngineError> {
        let item = self.load_item(item_id)?;
        Ok(ItemView {
            acceptance_progress_pct: progress::acceptance_progress_pct(&item),
            item,
        })
    }

    /// Partial item update. Status moves follow the item state machine, with
    /// one carve-out: entering `validated` requires the dedicated validate
    /// operation because it records an actor. Leaving `validated` through a
    /// patch clears the validation stamp.
    pub fn patch_item(&self, item_id: &str, patch: ItemPatch) -> Result<ItemView, EngineError> {
        let item = self.load_item(item_id)?;

        let acceptance_patch: Vec<(String, bool)> = match &patch.acceptance_state {
            Some(state) => {
                for key in state.keys() {
                    if !item.acceptance_criteria.iter().any(|c| c == key) {
                        return Err(EngineError::Validation(format!(
                            "unknown acceptance criterion '{key}' for item {item_id}"
                        )));
                    }
                }
                state.iter().map(|(k, v)| (k.clone(), *v)).collect()
            }
            None => Vec::new(),
        };

        if let Some(next) = patch.status {
            if next == ItemStatus::Validated && item.status != ItemStatus::Validated {
                return Err(EngineError::Validation(
                    "validation requires the validate operation with an actor".to_string(),
                ));
            }
            if next != item.status && !item.status.can_step_to(next) {
                return Err(EngineError::InvalidTransition {
                    entity: "item",
                    from: item.status.label().to_string(),
                    to: next.label().to_string(),
                });
            }
        }

        let mut updated = if acceptance_patch.is_empty() {
            item
        } else {
            self.repository
                .merge_acceptance_state(item_id, &acceptance_patch)
                .map_err(|err| err.into_engine("item", item_id))?
        };

        if let Some(next) = patch.status {
            if next != updated.status {
                if updated.status == ItemStatus::Validated {
                    updated.validated_by = None;
                    updated.validated_at = None;
                }
                updated.status = next;
            }
        }
        if let Some(owner) = patch.owner_user_id {
            updated.owner_user_id = Some(owner);
        }
        if let Some(due_date) = patch.due_date {
            updated.due_date = Some(due_date);
        }
        if let Some(notes) = patch.notes {
            updated.notes = notes;
        }

        self.repository
            .update_item(updated.clone())
            .map_err(|err| err.into_engine("item", item_id))?;

        Ok(ItemView {
            acceptance_progress_pct: progress::acceptance_progress_pct(&updated),
            item: updated,
        })
    }

    /// Validate a delivered item: `done -> validated`, stamping who and when.
    pub fn validate_item(
        &self,
        item_id: &str,
        validated_by: &str,
        now: DateTime<Utc>,
    ) -> Result<ItemView, EngineError> {
        if validated_by.trim().is_empty() {
            return Err(EngineError::Validation(
                "validated_by must not be empty".to_string(),
            ));
        }
        let mut item = self.load_item(item_id)?;
        if !item.status.can_step_to(ItemStatus::Validated) {
            return Err(EngineError::InvalidTransition {
                entity: "item",
                from: item.status.label().to_string(),
                to: ItemStatus::Validated.label().to_string(),
            });
        }
        item.status = ItemStatus::Validated;
        item.validated_by = Some(validated_by.trim().to_string());
        item.validated_at = Some(now);
        self.repository
            .update_item(item.clone())
            .map_err(|err| err.into_engine("item", item_id))?;
        Ok(ItemView {
            acceptance_progress_pct: progress::acceptance_progress_pct(&item),
            item,
        })
    }

    /// Withdraw a validation: `validated -> done`, clearing the stamp.
    pub fn unvalidate_item(&self, item_id: &str) -> Result<ItemView, EngineError> {
        let mut item = self.load_item(item_id)?;
        if item.status != ItemStatus::Validated {
            return Err(EngineError::InvalidTransition {
                entity: "item",
                from: item.status.label().to_string(),
                to: ItemStatus::Done.label().to_string(),
            });
        }
        item.status = ItemStatus::Done;
        item.validated_by = None;
        item.validated_at = None;
        self.repository
            .update_item(item.clone())
            .map_err(|err| err.into_engine("item", item_id))?;
        Ok(ItemView {
            acceptance_progress_pct: progress::acceptance_progress_pct(&item),
            item,
        })
    }

    pub fn actions(&self, now: DateTime<Utc>) -> Result<Vec<ActionView>, EngineError> {
        let actions = self
            .repository
            .actions()
            .map_err(|err| err.into_engine("action", "*"))?;
        Ok(actions
            .into_iter()
            .map(|action| ActionView {
                ageing_days: progress::ageing_days(&action, now),
                action,
            })
            .collect())
    }

    pub fn create_action(
        &self,
        new_action: NewAction,
        now: DateTime<Utc>,
    ) -> Result<ActionView, EngineError> {
        if new_action.title.trim().is_empty() {
            return Err(EngineError::Validation(
                "action title must not be empty".to_string(),
            ));
        }
        self.check_workshop_ref(new_action.workshop_number)?;

        let action = Action {
            id: self.next_action_id(),
            title: new_action.title.trim().to_string(),
            description: new_action.description,
            priority: new_action.priority,
            status: ActionStatus::Open,
            workshop_number: new_action.workshop_number,
            owner_user_id: new_action.owner_user_id,
            due_date: new_action.due_date,
            created_at: now,
        };
        self.repository
            .insert_action(action.clone())
            .map_err(|err| err.into_engine("action", action.id.clone()))?;
        Ok(ActionView {
            ageing_days: progress::ageing_days(&action, now),
            action,
        })
    }

    pub fn update_action(
        &self,
        id: &str,
        patch: ActionPatch,
        now: DateTime<Utc>,
    ) -> Result<ActionView, EngineError> {
        let mut action = self
            .repository
            .action(id)
            .map_err(|err| err.into_engine("action", id))?
            .ok_or_else(|| EngineError::not_found("action", id))?;

        if let Some(next) = patch.status {
            if next != action.status && !action.status.can_move_to(next) {
                return Err(EngineError::InvalidTransition {
                    entity: "action",
                    from: action.status.label().to_string(),
                    to: next.label().to_string(),
                });
            }
        }
        if patch.workshop_number.is_some() {
            self.check_workshop_ref(patch.workshop_number)?;
        }

        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(EngineError::Validation(
                    "action title must not be empty".to_string(),
                ));
            }
            action.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            action.description = description;
        }
        if let Some(priority) = patch.priority {
            action.priority = priority;
        }
        if let Some(next) = patch.status {
            action.status = next;
        }
        if let Some(number) = patch.workshop_number {
            action.workshop_number = Some(number);
        }
        if let Some(owner) = patch.owner_user_id {
            action.owner_user_id = Some(owner);
        }
        if let Some(due_date) = patch.due_date {
            action.due_date = Some(due_date);
        }

        self.repository
            .update_action(action.clone())
            .map_err(|err| err.into_engine("action", id))?;
        Ok(ActionView {
            ageing_days: progress::ageing_days(&action, now),
            action,
        })
    }

    pub fn delete_action(&self, id: &str) -> Result<(), EngineError> {
        self.repository
            .delete_action(id)
            .map_err(|err| err.into_engine("action", id))
    }

    pub fn decisions(&self) -> Result<Vec<Decision>, EngineError> {
        self.repository
            .decisions()
            .map_err(|err| err.into_engine("decision", "*"))
    }

    /// Record a governance decision. Decisions are immutable once logged.
    pub fn create_decision(
        &self,
        new_decision: NewDecision,
        now: DateTime<Utc>,
    ) -> Result<Decision, EngineError> {
        if new_decision.decision_text.trim().is_empty() {
            return Err(EngineError::Validation(
                "decision_text must not be empty".to_string(),
            ));
        }
        if new_decision.decided_by.trim().is_empty() {
            return Err(EngineError::Validation(
                "decided_by must not be empty".to_string(),
            ));
        }
        self.check_workshop_ref(new_decision.workshop_number)?;

        let decision = Decision {
            id: self.next_decision_id(),
            decision_text: new_decision.decision_text.trim().to_string(),
            workshop_number: new_decision.workshop_number,
            decided_by: new_decision.decided_by.trim().to_string(),
            decided_at: now,
            evidence_links: new_decision.evidence_links,
        };
        self.repository
            .insert_decision(decision.clone())
            .map_err(|err| err.into_engine("decision", decision.id.clone()))?;
        Ok(decision)
    }

    pub fn delete_decision(&self, id: &str) -> Result<(), EngineError> {
        self.repository
            .delete_decision(id)
            .map_err(|err| err.into_engine("decision", id))
    }

    /// Program-level KPI rollup, derived in full on every call.
    pub fn program_kpis(&self, now: DateTime<Utc>) -> Result<ProgramKpis, EngineError> {
        let workshops = self
            .repository
            .workshops()
            .map_err(|err| err.into_engine("workshop", "*"))?;
        let items = self
            .repository
            .items(None)
            .map_err(|err| err.into_engine("item", "*"))?;
        let actions = self
            .repository
            .actions()
            .map_err(|err| err.into_engine("action", "*"))?;
        let decisions = self.decisions()?;

        Ok(ProgramKpis {
            workshops_completed: workshops
                .iter()
                .filter(|workshop| workshop.status == WorkshopStatus::Completed)
                .count(),
            workshop_completion_pct: progress::program_completion_pct(&workshops),
            items_total: items.len(),
            items_done: items
                .iter()
                .filter(|item| item.status == ItemStatus::Done)
                .count(),
            items_validated: items
                .iter()
                .filter(|item| item.status == ItemStatus::Validated)
                .count(),
            actions_open_count: actions
                .iter()
                .filter(|action| !action.status.is_terminal())
                .count(),
            actions_avg_ageing_days: progress::average_ageing_days(&actions, now),
            decisions_count: decisions.len(),
        })
    }

    /// Worst open-action ageing, fed into the AI governance summary so
    /// advisory priority can escalate with a stale backlog.
    pub fn max_open_ageing(&self, now: DateTime<Utc>) -> Result<Option<i64>, EngineError> {
        let actions = self
            .repository
            .actions()
            .map_err(|err| err.into_engine("action", "*"))?;
        Ok(progress::max_ageing_days(&actions, now))
    }
}
