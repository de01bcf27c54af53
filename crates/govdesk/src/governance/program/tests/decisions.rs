use super::common::*;

use crate::governance::program::domain::NewDecision;
use crate::governance::EngineError;

fn new_decision(text: &str, decided_by: &str, workshop_number: Option<u8>) -> NewDecision {
    NewDecision {
        decision_text: text.to_string(),
        workshop_number,
        decided_by: decided_by.to_string(),
        evidence_links: vec!["https://wiki.example.test/decisions/42".to_string()],
    }
}

#[test]
fn decision_is_logged_with_actor_and_instant() {
    let service = build_service();

    let decision = service
        .create_decision(
            new_decision("Adopt three-environment strategy", "sponsor", Some(2)),
            fixed_now(),
        )
        .expect("creation");

    assert_eq!(decision.decided_by, "sponsor");
    assert_eq!(decision.decided_at, fixed_now());
    assert_eq!(decision.workshop_number, Some(2));

    let decisions = service.decisions().expect("listing");
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0], decision);
}

#[test]
fn blank_text_or_actor_is_rejected() {
    let service = build_service();

    let error = service
        .create_decision(new_decision("  ", "sponsor", None), fixed_now())
        .expect_err("blank text");
    assert!(matches!(error, EngineError::Validation(_)));

    let error = service
        .create_decision(new_decision("Valid text", "  ", None), fixed_now())
        .expect_err("blank actor");
    assert!(matches!(error, EngineError::Validation(_)));
}

#[test]
fn decision_must_reference_a_real_workshop() {
    let service = build_service();

    let error = service
        .create_decision(new_decision("Orphan decision", "sponsor", Some(99)), fixed_now())
        .expect_err("unknown workshop reference");
    assert!(matches!(error, EngineError::NotFound { .. }));
}

#[test]
fn delete_removes_the_decision() {
    let service = build_service();
    let decision = service
        .create_decision(new_decision("Short-lived decision", "sponsor", None), fixed_now())
        .expect("creation");

    service.delete_decision(&decision.id).expect("deletion");
    let error = service
        .delete_decision(&decision.id)
        .expect_err("second delete must fail");
    assert!(matches!(error, EngineError::NotFound { .. }));

    let kpis = service.program_kpis(fixed_now()).expect("rollup");
    assert_eq!(kpis.decisions_count, 0);
}
