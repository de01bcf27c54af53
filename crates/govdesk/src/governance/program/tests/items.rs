use super::common::*;

use crate::governance::program::definitions::ITEM_CATALOG;
use crate::governance::program::domain::{ItemPatch, ItemStatus};
use crate::governance::program::progress;
use crate::governance::EngineError;

#[test]
fn catalog_is_fully_provisioned() {
    let service = build_service();

    let items = service.items(None).expect("listing readable");
    assert_eq!(items.len(), ITEM_CATALOG.len());

    let workshop_one = service.items(Some(1)).expect("filtered listing");
    assert_eq!(workshop_one.len(), 7);
    assert!(workshop_one
        .iter()
        .all(|view| view.item.status == ItemStatus::NotStarted));
}

#[test]
fn item_walks_the_full_lifecycle() {
    let service = build_service();

    deliver_item(&service, "A1-01");
    let validated = service
        .validate_item("A1-01", "sponsor", fixed_now())
        .expect("validation");
    assert_eq!(validated.item.status, ItemStatus::Validated);
    assert_eq!(validated.item.validated_by.as_deref(), Some("sponsor"));
    assert_eq!(validated.item.validated_at, Some(fixed_now()));

    let reopened = service.unvalidate_item("A1-01").expect("unvalidate");
    assert_eq!(reopened.item.status, ItemStatus::Done);
    assert!(reopened.item.validated_by.is_none());
    assert!(reopened.item.validated_at.is_none());
}

#[test]
fn status_jumps_are_rejected() {
    let service = build_service();

    let error = service
        .patch_item(
            "A1-01",
            ItemPatch {
                status: Some(ItemStatus::Done),
                ..ItemPatch::default()
            },
        )
        .expect_err("not_started cannot jump to done");
    assert!(matches!(error, EngineError::InvalidTransition { .. }));
}

#[test]
fn patch_cannot_enter_validated() {
    let service = build_service();
    deliver_item(&service, "A1-02");

    let error = service
        .patch_item(
            "A1-02",
            ItemPatch {
                status: Some(ItemStatus::Validated),
                ..ItemPatch::default()
            },
        )
        .expect_err("validated entry requires the validate operation");
    assert!(matches!(error, EngineError::Validation(_)));
}

#[test]
fn validation_requires_a_delivered_item_and_an_actor() {
    let service = build_service();

    let error = service
        .validate_item("A1-03", "sponsor", fixed_now())
        .expect_err("not_started cannot be validated");
    assert!(matches!(error, EngineError::InvalidTransition { .. }));

    deliver_item(&service, "A1-03");
    let error = service
        .validate_item("A1-03", "   ", fixed_now())
        .expect_err("blank actor must be rejected");
    assert!(matches!(error, EngineError::Validation(_)));
}

#[test]
fn unvalidate_requires_a_validated_item() {
    let service = build_service();
    deliver_item(&service, "A1-04");

    let error = service
        .unvalidate_item("A1-04")
        .expect_err("done is not validated");
    assert!(matches!(error, EngineError::InvalidTransition { .. }));
}

#[test]
fn acceptance_patch_merges_and_rejects_unknown_keys() {
    let service = build_service();

    let detail = service.item_detail("A1-01").expect("detail readable");
    let first = detail.item.acceptance_criteria[0].clone();
    let second = detail.item.acceptance_criteria[1].clone();

    service
        .patch_item(
            "A1-01",
            ItemPatch {
                acceptance_state: Some(criteria_patch(&[(first.as_str(), true)])),
                ..ItemPatch::default()
            },
        )
        .expect("first patch");
    let view = service
        .patch_item(
            "A1-01",
            ItemPatch {
                acceptance_state: Some(criteria_patch(&[(second.as_str(), true)])),
                ..ItemPatch::default()
            },
        )
        .expect("second patch");

    assert_eq!(view.item.acceptance_state[&first], true);
    assert_eq!(view.item.acceptance_state[&second], true);
    // 2 of 5 criteria checked.
    assert_eq!(view.acceptance_progress_pct, 40.0);

    let error = service
        .patch_item(
            "A1-01",
            ItemPatch {
                acceptance_state: Some(criteria_patch(&[("Critère inventé", true)])),
                ..ItemPatch::default()
            },
        )
        .expect_err("unknown acceptance key must be rejected");
    assert!(matches!(error, EngineError::Validation(_)));
}

#[test]
fn patch_updates_ownership_fields() {
    let service = build_service();

    let view = service
        .patch_item(
            "A2-01",
            ItemPatch {
                owner_user_id: Some("user-007".to_string()),
                notes: Some("kickoff planned".to_string()),
                ..ItemPatch::default()
            },
        )
        .expect("metadata patch");

    assert_eq!(view.item.owner_user_id.as_deref(), Some("user-007"));
    assert_eq!(view.item.notes, "kickoff planned");
    assert_eq!(view.item.status, ItemStatus::NotStarted);
}

#[test]
fn delivered_items_drive_the_progress_rate() {
    let service = build_service();
    deliver_item(&service, "A1-01");
    deliver_item(&service, "A1-02");
    service
        .validate_item("A1-02", "sponsor", fixed_now())
        .expect("validation");

    let items: Vec<_> = service
        .items(Some(1))
        .expect("listing")
        .into_iter()
        .map(|view| view.item)
        .collect();

    // 2 of 7 items are done or validated.
    assert_eq!(progress::items_progress_pct(&items), 28.6);
}

#[test]
fn unknown_item_is_not_found() {
    let service = build_service();

    let error = service.item_detail("A99-01").expect_err("lookup must fail");
    assert!(matches!(error, EngineError::NotFound { .. }));
}
