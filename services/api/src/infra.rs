use chrono::{DateTime, NaiveDate, Utc};
use govdesk::governance::program::InMemoryProgramStore;
use govdesk::governance::scoring::{
    AiUsageLog, Document, InMemoryScoringStore, IsoProfile, KpiSnapshot, ThresholdPolicy,
    UsageStatus,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .expect("seed timestamps are valid RFC 3339 literals")
}

/// Demo corpus: a spread of validated/unvalidated documents across the
/// confidence range so every classification branch is reachable out of the
/// box.
pub(crate) fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: "doc-001".to_string(),
            title: "Politique de Sécurité Informatique".to_string(),
            doc_type: "Politique".to_string(),
            url: "https://sharepoint.example.com/doc/001".to_string(),
            owner: "Jean Dupont".to_string(),
            confidence_score: 0.92,
            validated: true,
            last_updated: instant("2024-01-10T14:30:00Z"),
        },
        Document {
            id: "doc-002".to_string(),
            title: "Procédure de Gestion des Incidents".to_string(),
            doc_type: "Procédure".to_string(),
            url: "https://sharepoint.example.com/doc/002".to_string(),
            owner: "Marie Martin".to_string(),
            confidence_score: 0.75,
            validated: true,
            last_updated: instant("2023-11-20T09:15:00Z"),
        },
        Document {
            id: "doc-003".to_string(),
            title: "Guide d'Utilisation IA".to_string(),
            doc_type: "Guide".to_string(),
            url: "https://sharepoint.example.com/doc/003".to_string(),
            owner: "Pierre Durand".to_string(),
            confidence_score: 0.88,
            validated: false,
            last_updated: instant("2024-01-05T16:45:00Z"),
        },
        Document {
            id: "doc-004".to_string(),
            title: "Charte Éthique IA".to_string(),
            doc_type: "Charte".to_string(),
            url: "https://sharepoint.example.com/doc/004".to_string(),
            owner: "Sophie Bernard".to_string(),
            confidence_score: 0.55,
            validated: false,
            last_updated: instant("2023-08-01T11:00:00Z"),
        },
    ]
}

/// Demo usage history. The doc-003 entry was logged as authorized before the
/// document lost validation, so the anomaly audit has drift to surface.
pub(crate) fn seed_usage_logs() -> Vec<AiUsageLog> {
    vec![
        AiUsageLog {
            document_id: "doc-001".to_string(),
            usage_status: UsageStatus::Authorized,
            checked_at: instant("2024-01-15T08:00:00Z"),
            intent: "Analyse de conformité".to_string(),
        },
        AiUsageLog {
            document_id: "doc-002".to_string(),
            usage_status: UsageStatus::Assisted,
            checked_at: instant("2024-01-15T09:00:00Z"),
            intent: "Recherche procédure".to_string(),
        },
        AiUsageLog {
            document_id: "doc-003".to_string(),
            usage_status: UsageStatus::Authorized,
            checked_at: instant("2024-01-15T10:00:00Z"),
            intent: "Formation utilisateur".to_string(),
        },
        AiUsageLog {
            document_id: "doc-004".to_string(),
            usage_status: UsageStatus::Forbidden,
            checked_at: instant("2024-01-15T11:00:00Z"),
            intent: "Rédaction rapport".to_string(),
        },
    ]
}

pub(crate) fn seed_kpis() -> Vec<KpiSnapshot> {
    vec![
        KpiSnapshot {
            id: "kpi-001".to_string(),
            name: "MaturityIndex".to_string(),
            value: 0.72,
            measured_at: instant("2024-01-15T10:00:00Z"),
        },
        KpiSnapshot {
            id: "kpi-002".to_string(),
            name: "PolicyCoverage".to_string(),
            value: 0.85,
            measured_at: instant("2024-01-15T10:00:00Z"),
        },
        KpiSnapshot {
            id: "kpi-003".to_string(),
            name: "AuditFreshnessDays".to_string(),
            value: 15.0,
            measured_at: instant("2024-01-15T10:00:00Z"),
        },
    ]
}

pub(crate) fn seed_iso_profiles() -> Vec<IsoProfile> {
    vec![
        IsoProfile {
            iso_code: "ISO9001".to_string(),
            name: "Qualité".to_string(),
            enabled: true,
        },
        IsoProfile {
            iso_code: "ISO27001".to_string(),
            name: "Sécurité de l'information".to_string(),
            enabled: true,
        },
        IsoProfile {
            iso_code: "ISO14001".to_string(),
            name: "Environnement".to_string(),
            enabled: false,
        },
        IsoProfile {
            iso_code: "ISO45001".to_string(),
            name: "Santé et sécurité".to_string(),
            enabled: false,
        },
    ]
}

pub(crate) fn seeded_scoring_store() -> Arc<InMemoryScoringStore> {
    Arc::new(InMemoryScoringStore::seeded(
        seed_documents(),
        seed_usage_logs(),
        seed_kpis(),
        seed_iso_profiles(),
        ThresholdPolicy::default(),
    ))
}

pub(crate) fn provisioned_program_store() -> Arc<InMemoryProgramStore> {
    Arc::new(InMemoryProgramStore::provisioned())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
