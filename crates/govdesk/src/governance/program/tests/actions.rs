use super::common::*;

use chrono::Duration;

use crate::governance::program::domain::{ActionPatch, ActionStatus};
use crate::governance::EngineError;

#[test]
fn new_action_opens_with_zero_ageing() {
    let service = build_service();

    let view = service
        .create_action(new_action("Define DLP exception process", Some(2)), fixed_now())
        .expect("creation");

    assert_eq!(view.action.status, ActionStatus::Open);
    assert_eq!(view.ageing_days, Some(0));
}

#[test]
fn ageing_is_derived_from_the_query_instant() {
    let service = build_service();
    service
        .create_action(new_action("Review connector catalog", None), fixed_now())
        .expect("creation");

    let later = fixed_now() + Duration::days(10);
    let views = service.actions(later).expect("listing");
    assert_eq!(views[0].ageing_days, Some(10));
}

#[test]
fn terminal_actions_stop_ageing() {
    let service = build_service();
    let open = service
        .create_action(new_action("Fix RBAC drift", None), fixed_now())
        .expect("creation");
    let done = service
        .create_action(new_action("Archive stale flows", None), fixed_now())
        .expect("creation");

    service
        .update_action(
            &done.action.id,
            ActionPatch {
                status: Some(ActionStatus::Done),
                ..ActionPatch::default()
            },
            fixed_now(),
        )
        .expect("legal jump to done");

    let later = fixed_now() + Duration::days(20);
    let views = service.actions(later).expect("listing");
    let open_view = views
        .iter()
        .find(|view| view.action.id == open.action.id)
        .expect("open action listed");
    let done_view = views
        .iter()
        .find(|view| view.action.id == done.action.id)
        .expect("done action listed");

    assert_eq!(open_view.ageing_days, Some(20));
    assert_eq!(done_view.ageing_days, None);
}

#[test]
fn terminal_actions_accept_no_further_transitions() {
    let service = build_service();
    let view = service
        .create_action(new_action("One-shot cleanup", None), fixed_now())
        .expect("creation");

    service
        .update_action(
            &view.action.id,
            ActionPatch {
                status: Some(ActionStatus::Closed),
                ..ActionPatch::default()
            },
            fixed_now(),
        )
        .expect("open may close directly");

    let error = service
        .update_action(
            &view.action.id,
            ActionPatch {
                status: Some(ActionStatus::Open),
                ..ActionPatch::default()
            },
            fixed_now(),
        )
        .expect_err("closed is terminal");
    assert!(matches!(error, EngineError::InvalidTransition { .. }));
}

#[test]
fn action_must_reference_a_real_workshop() {
    let service = build_service();

    let error = service
        .create_action(new_action("Orphan action", Some(42)), fixed_now())
        .expect_err("unknown workshop reference");
    assert!(matches!(error, EngineError::NotFound { .. }));
}

#[test]
fn blank_title_is_rejected() {
    let service = build_service();

    let error = service
        .create_action(new_action("   ", None), fixed_now())
        .expect_err("blank title");
    assert!(matches!(error, EngineError::Validation(_)));
}

#[test]
fn delete_removes_the_action() {
    let service = build_service();
    let view = service
        .create_action(new_action("Temporary action", None), fixed_now())
        .expect("creation");

    service.delete_action(&view.action.id).expect("deletion");
    let error = service
        .delete_action(&view.action.id)
        .expect_err("second delete must fail");
    assert!(matches!(error, EngineError::NotFound { .. }));
}

#[test]
fn kpi_rollup_counts_open_actions_and_average_ageing() {
    let service = build_service();
    service
        .create_action(new_action("Backlog item one", None), fixed_now())
        .expect("creation");
    service
        .create_action(
            new_action("Backlog item two", None),
            fixed_now() + Duration::days(10),
        )
        .expect("creation");
    let closed = service
        .create_action(new_action("Closed item", None), fixed_now())
        .expect("creation");
    service
        .update_action(
            &closed.action.id,
            ActionPatch {
                status: Some(ActionStatus::Closed),
                ..ActionPatch::default()
            },
            fixed_now(),
        )
        .expect("closure");

    let at = fixed_now() + Duration::days(20);
    let kpis = service.program_kpis(at).expect("rollup");

    // Two open actions aged 20 and 10 days; the closed one is excluded.
    assert_eq!(kpis.actions_open_count, 2);
    assert_eq!(kpis.actions_avg_ageing_days, 15.0);

    let max = service.max_open_ageing(at).expect("max ageing");
    assert_eq!(max, Some(20));
}
