use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::governance::program::Priority;

/// Knowledge-corpus document carrying the quality signals the scorers read.
/// Documents are owned by the corpus and are superseded, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub doc_type: String,
    pub url: String,
    pub owner: String,
    /// Quality confidence in [0, 1]; doubles as the per-document IQI proxy.
    pub confidence_score: f64,
    pub validated: bool,
    pub last_updated: DateTime<Utc>,
}

/// Classification of an AI usage against the active threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    Authorized,
    Assisted,
    Forbidden,
}

impl UsageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UsageStatus::Authorized => "authorized",
            UsageStatus::Assisted => "assisted",
            UsageStatus::Forbidden => "forbidden",
        }
    }
}

/// Recorded AI usage event. The stored status is a historical footprint;
/// classification is always recomputed on read, and the delta between the
/// two feeds the anomaly audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiUsageLog {
    pub document_id: String,
    pub usage_status: UsageStatus,
    pub checked_at: DateTime<Utc>,
    pub intent: String,
}

/// Append-only KPI measurement; the maturity scorer reads the latest value
/// per name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub measured_at: DateTime<Utc>,
}

/// Recognized ISO referential; only `enabled` is mutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoProfile {
    pub iso_code: String,
    pub name: String,
    pub enabled: bool,
}

/// Batch enablement toggle accepted by the settings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IsoToggle {
    pub iso_code: String,
    pub enabled: bool,
}

/// Corpus-wide information quality summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualitySummary {
    /// Composite IQI in [0, 1], two decimals.
    pub iqi_global: f64,
    pub evidences: QualityEvidences,
}

/// Breakdown behind the composite IQI. Rates are reported as percentages
/// rounded to one decimal, each independently of the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityEvidences {
    pub total_documents: usize,
    pub validated_count: usize,
    pub validation_rate: f64,
    pub avg_confidence: f64,
    pub freshness_score: f64,
    pub fresh_documents: usize,
}

/// Per-document AI usage classification served to the document views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentUsageView {
    pub document_id: String,
    pub document_title: String,
    pub usage_status: UsageStatus,
    pub iqi_score: f64,
    pub reason: String,
}

/// Executive AI governance summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceSummary {
    pub authorized_percentage: f64,
    pub assisted_percentage: f64,
    pub forbidden_percentage: f64,
    pub total_usages: usize,
    pub critical_actions: Vec<AdvisoryAction>,
    pub traceability: Traceability,
}

/// Reclassification audit counters. `anomalies` counts usages whose
/// recorded status no longer matches what the active policy would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traceability {
    pub logged: usize,
    pub audited: usize,
    pub anomalies: usize,
}

/// Read-only advisory surfaced alongside the governance summary. These are
/// suggestions derived from the current snapshot, distinct from persisted
/// `Action` entities, and are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryAction {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub status: String,
}

/// Three-level compliance banding over the composite maturity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Green,
    Yellow,
    Red,
}

/// Compliance maturity response: composite score, band, the raw KPI inputs
/// used, and the ISO referentials enabled at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityView {
    pub score: f64,
    pub band: Band,
    pub inputs: BTreeMap<String, f64>,
    pub iso_referentials: Vec<String>,
}
