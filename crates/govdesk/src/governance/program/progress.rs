//! Derived progress metrics. Everything here is a pure function over the
//! current records; nothing is stored, so callers can never serve a stale
//! percentage.

use chrono::{DateTime, Utc};

use super::domain::{Action, ItemRequirement, ItemStatus, Workshop, WorkshopItem, WorkshopStatus};
use super::definitions::PROGRAM_WORKSHOPS;
use crate::governance::round_pct;

/// Share of completion criteria currently checked, as a percentage.
/// A workshop with no criteria reports 0, never NaN.
pub fn completion_pct(workshop: &Workshop) -> f64 {
    if workshop.completion_criteria.is_empty() {
        return 0.0;
    }
    let checked = workshop
        .completion_criteria
        .iter()
        .filter(|criterion| {
            workshop
                .completion_criteria_state
                .get(criterion.as_str())
                .copied()
                .unwrap_or(false)
        })
        .count();
    round_pct(checked as f64 / workshop.completion_criteria.len() as f64 * 100.0)
}

/// Share of items delivered (done or validated), as a percentage.
pub fn items_progress_pct(items: &[WorkshopItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let delivered = items
        .iter()
        .filter(|item| item.status.is_delivered())
        .count();
    round_pct(delivered as f64 / items.len() as f64 * 100.0)
}

/// Share of an item's acceptance criteria currently checked.
pub fn acceptance_progress_pct(item: &WorkshopItem) -> f64 {
    if item.acceptance_criteria.is_empty() {
        return 0.0;
    }
    let checked = item
        .acceptance_criteria
        .iter()
        .filter(|criterion| {
            item.acceptance_state
                .get(criterion.as_str())
                .copied()
                .unwrap_or(false)
        })
        .count();
    round_pct(checked as f64 / item.acceptance_criteria.len() as f64 * 100.0)
}

/// Program completion over the fixed ten-workshop roster.
pub fn program_completion_pct(workshops: &[Workshop]) -> f64 {
    let completed = workshops
        .iter()
        .filter(|workshop| workshop.status == WorkshopStatus::Completed)
        .count();
    round_pct(completed as f64 / PROGRAM_WORKSHOPS as f64 * 100.0)
}

/// External completion rule: every completion criterion checked and every
/// OBLIGATOIRE item validated. The engine exposes the predicate; invoking
/// the completion itself stays an explicit caller decision.
pub fn ready_to_complete(workshop: &Workshop, items: &[WorkshopItem]) -> bool {
    let criteria_met = workshop.completion_criteria.iter().all(|criterion| {
        workshop
            .completion_criteria_state
            .get(criterion.as_str())
            .copied()
            .unwrap_or(false)
    });

    let mandatory_validated = items
        .iter()
        .filter(|item| item.status_requirement == ItemRequirement::Obligatoire)
        .all(|item| item.status == ItemStatus::Validated);

    criteria_met && mandatory_validated
}

/// Whole days elapsed since creation, defined only while the action is
/// open or in progress.
pub fn ageing_days(action: &Action, now: DateTime<Utc>) -> Option<i64> {
    if action.status.is_terminal() {
        return None;
    }
    Some(now.signed_duration_since(action.created_at).num_days())
}

/// Mean ageing over non-terminal actions; terminal actions are excluded
/// from both numerator and denominator.
pub fn average_ageing_days(actions: &[Action], now: DateTime<Utc>) -> f64 {
    let ages: Vec<i64> = actions
        .iter()
        .filter_map(|action| ageing_days(action, now))
        .collect();
    if ages.is_empty() {
        return 0.0;
    }
    round_pct(ages.iter().sum::<i64>() as f64 / ages.len() as f64)
}

/// Worst open-action ageing, used to escalate governance advisories.
pub fn max_ageing_days(actions: &[Action], now: DateTime<Utc>) -> Option<i64> {
    actions
        .iter()
        .filter_map(|action| ageing_days(action, now))
        .max()
}
