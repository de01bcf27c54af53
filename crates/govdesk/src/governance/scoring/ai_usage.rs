use std::collections::HashMap;

use super::domain::{
    AdvisoryAction, AiUsageLog, Document, DocumentUsageView, GovernanceSummary, Traceability,
    UsageStatus,
};
use super::policy::{ScoringConfig, ThresholdPolicy};
use crate::governance::program::Priority;
use crate::governance::round_pct;

/// Classify AI usage of a single document under the active policy.
///
/// Boundary values meet the threshold (inclusive `>=`). The IQI proxy is
/// the document's own confidence score, not the corpus aggregate.
pub fn classify(document: &Document, policy: &ThresholdPolicy) -> UsageStatus {
    if document.validated && document.confidence_score >= policy.min_iqi_authorized {
        UsageStatus::Authorized
    } else if document.confidence_score >= policy.min_iqi_assisted {
        UsageStatus::Assisted
    } else {
        UsageStatus::Forbidden
    }
}

/// Per-document classification with the operator-facing rationale.
pub fn document_usage(document: &Document, policy: &ThresholdPolicy) -> DocumentUsageView {
    let usage_status = classify(document, policy);
    let reason = match usage_status {
        UsageStatus::Authorized => "validated document with sufficient IQI score".to_string(),
        UsageStatus::Assisted => "intermediate IQI score, assisted usage only".to_string(),
        UsageStatus::Forbidden => "IQI score insufficient or document not validated".to_string(),
    };

    DocumentUsageView {
        document_id: document.id.clone(),
        document_title: document.title.clone(),
        usage_status,
        iqi_score: document.confidence_score,
        reason,
    }
}

/// Aggregate the executive governance summary over the recorded usages.
///
/// Percentages are rounded independently and may not sum to exactly 100;
/// that drift is accepted display noise. Anomalies are recomputed against
/// the active policy on every call so threshold changes surface immediately
/// as reclassification drift. `max_open_action_ageing_days` carries the
/// worst open-action ageing from the program engine so backlog advisories
/// can escalate with it. Advisories do not depend on usage volume: a tenant
/// with an empty log history still hears about a stale backlog or a weak
/// corpus.
pub fn governance_summary(
    logs: &[AiUsageLog],
    documents: &[Document],
    policy: &ThresholdPolicy,
    config: &ScoringConfig,
    max_open_action_ageing_days: Option<i64>,
) -> GovernanceSummary {
    let total = logs.len();
    let by_id: HashMap<&str, &Document> = documents
        .iter()
        .map(|doc| (doc.id.as_str(), doc))
        .collect();

    let mut authorized = 0usize;
    let mut assisted = 0usize;
    let mut forbidden = 0usize;
    let mut anomalies = 0usize;

    for log in logs {
        match log.usage_status {
            UsageStatus::Authorized => authorized += 1,
            UsageStatus::Assisted => assisted += 1,
            UsageStatus::Forbidden => forbidden += 1,
        }

        // A log referencing a vanished document cannot be re-audited; it
        // counts as drift rather than being silently skipped.
        match by_id.get(log.document_id.as_str()) {
            Some(document) if classify(document, policy) == log.usage_status => {}
            _ => anomalies += 1,
        }
    }

    let below_assisted = documents
        .iter()
        .filter(|doc| doc.confidence_score < policy.min_iqi_assisted)
        .count();

    let critical_actions = advisories(
        anomalies,
        below_assisted,
        max_open_action_ageing_days,
        config,
    );

    // Only the shares need a populated history.
    let share = |count: usize| {
        if total == 0 {
            0.0
        } else {
            round_pct(count as f64 / total as f64 * 100.0)
        }
    };

    GovernanceSummary {
        authorized_percentage: share(authorized),
        assisted_percentage: share(assisted),
        forbidden_percentage: share(forbidden),
        total_usages: total,
        critical_actions,
        traceability: Traceability {
            logged: total,
            audited: total - anomalies,
            anomalies,
        },
    }
}

/// Derive the advisory backlog. Advisories are suggestions only; promoting
/// one into a persisted `Action` is an explicit operator step elsewhere.
fn advisories(
    anomalies: usize,
    below_assisted: usize,
    max_open_action_ageing_days: Option<i64>,
    config: &ScoringConfig,
) -> Vec<AdvisoryAction> {
    let mut actions = Vec::new();

    if anomalies > 0 {
        let priority = if anomalies >= config.anomaly_escalation_count {
            Priority::High
        } else {
            Priority::Medium
        };
        actions.push(AdvisoryAction {
            id: "adv-reclassify".to_string(),
            title: "Reclassify AI usage records that drifted from the active policy".to_string(),
            priority,
            status: "pending".to_string(),
        });
    }

    if below_assisted > 0 {
        actions.push(AdvisoryAction {
            id: "adv-revalidate".to_string(),
            title: format!(
                "Revalidate {below_assisted} document(s) with IQI below the assisted threshold"
            ),
            priority: Priority::Medium,
            status: "pending".to_string(),
        });
    }

    if let Some(ageing) = max_open_action_ageing_days {
        if ageing >= config.ageing_escalation_days {
            let priority = if ageing >= config.ageing_escalation_days * 2 {
                Priority::Critical
            } else {
                Priority::High
            };
            actions.push(AdvisoryAction {
                id: "adv-ageing".to_string(),
                title: format!("Review open governance actions ageing {ageing} day(s)"),
                priority,
                status: "pending".to_string(),
            });
        }
    }

    actions
}
