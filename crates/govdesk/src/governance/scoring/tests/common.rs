use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::governance::scoring::domain::{AiUsageLog, Document, IsoProfile, KpiSnapshot, UsageStatus};
use crate::governance::scoring::maturity::{
    KPI_AUDIT_FRESHNESS_DAYS, KPI_MATURITY_INDEX, KPI_POLICY_COVERAGE,
};
use crate::governance::scoring::policy::{ScoringConfig, ThresholdPolicy};
use crate::governance::scoring::repository::InMemoryScoringStore;
use crate::governance::scoring::service::ScoringService;

/// Fixed reference instant so freshness math stays deterministic.
pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid instant")
}

pub(super) fn document(id: &str, confidence: f64, validated: bool, age_days: i64) -> Document {
    Document {
        id: id.to_string(),
        title: format!("Document {id}"),
        doc_type: "procedure".to_string(),
        url: format!("https://kb.example.test/{id}"),
        owner: "governance@example.test".to_string(),
        confidence_score: confidence,
        validated,
        last_updated: fixed_now() - Duration::days(age_days),
    }
}

pub(super) fn usage_log(document_id: &str, status: UsageStatus) -> AiUsageLog {
    AiUsageLog {
        document_id: document_id.to_string(),
        usage_status: status,
        checked_at: fixed_now() - Duration::days(1),
        intent: "draft customer answer".to_string(),
    }
}

pub(super) fn kpi(id: &str, name: &str, value: f64, age_days: i64) -> KpiSnapshot {
    KpiSnapshot {
        id: id.to_string(),
        name: name.to_string(),
        value,
        measured_at: fixed_now() - Duration::days(age_days),
    }
}

pub(super) fn full_kpi_set(maturity: f64, coverage: f64, audit_age_days: f64) -> Vec<KpiSnapshot> {
    vec![
        kpi("kpi-001", KPI_MATURITY_INDEX, maturity, 3),
        kpi("kpi-002", KPI_POLICY_COVERAGE, coverage, 3),
        kpi("kpi-003", KPI_AUDIT_FRESHNESS_DAYS, audit_age_days, 3),
    ]
}

pub(super) fn iso_profiles() -> Vec<IsoProfile> {
    vec![
        IsoProfile {
            iso_code: "ISO42001".to_string(),
            name: "AI management systems".to_string(),
            enabled: true,
        },
        IsoProfile {
            iso_code: "ISO27001".to_string(),
            name: "Information security".to_string(),
            enabled: true,
        },
        IsoProfile {
            iso_code: "ISO9001".to_string(),
            name: "Quality management".to_string(),
            enabled: false,
        },
    ]
}

pub(super) fn seeded_store(
    documents: Vec<Document>,
    usage_logs: Vec<AiUsageLog>,
    kpis: Vec<KpiSnapshot>,
) -> Arc<InMemoryScoringStore> {
    Arc::new(InMemoryScoringStore::seeded(
        documents,
        usage_logs,
        kpis,
        iso_profiles(),
        ThresholdPolicy::default(),
    ))
}

pub(super) fn build_service(
    documents: Vec<Document>,
    usage_logs: Vec<AiUsageLog>,
    kpis: Vec<KpiSnapshot>,
) -> Arc<ScoringService<InMemoryScoringStore>> {
    Arc::new(ScoringService::new(
        seeded_store(documents, usage_logs, kpis),
        ScoringConfig::default(),
    ))
}
