use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::governance::program::domain::{ItemPatch, ItemStatus, NewAction, Priority};
use crate::governance::program::repository::InMemoryProgramStore;
use crate::governance::program::service::ProgramService;

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).single().expect("valid instant")
}

pub(super) fn build_service() -> Arc<ProgramService<InMemoryProgramStore>> {
    Arc::new(ProgramService::new(Arc::new(
        InMemoryProgramStore::provisioned(),
    )))
}

/// Walk an item through `not_started -> in_progress -> done`.
pub(super) fn deliver_item(service: &ProgramService<InMemoryProgramStore>, item_id: &str) {
    for status in [ItemStatus::InProgress, ItemStatus::Done] {
        service
            .patch_item(
                item_id,
                ItemPatch {
                    status: Some(status),
                    ..ItemPatch::default()
                },
            )
            .expect("legal step");
    }
}

pub(super) fn criteria_patch(entries: &[(&str, bool)]) -> BTreeMap<String, bool> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

pub(super) fn new_action(title: &str, workshop_number: Option<u8>) -> NewAction {
    NewAction {
        title: title.to_string(),
        description: "raised during governance review".to_string(),
        priority: Priority::Medium,
        workshop_number,
        owner_user_id: Some("user-042".to_string()),
        due_date: None,
    }
}
