use std::collections::BTreeMap;

use super::domain::{Band, IsoProfile, KpiSnapshot, MaturityView};
use crate::governance::round_score;

const MATURITY_INDEX_WEIGHT: f64 = 0.40;
const POLICY_COVERAGE_WEIGHT: f64 = 0.40;
const AUDIT_FRESHNESS_WEIGHT: f64 = 0.20;
/// Audits older than this many days floor the freshness term at 0.
const AUDIT_FRESHNESS_HORIZON_DAYS: f64 = 30.0;

const BAND_GREEN_FLOOR: f64 = 0.80;
const BAND_YELLOW_FLOOR: f64 = 0.60;

pub const KPI_MATURITY_INDEX: &str = "MaturityIndex";
pub const KPI_POLICY_COVERAGE: &str = "PolicyCoverage";
pub const KPI_AUDIT_FRESHNESS_DAYS: &str = "AuditFreshnessDays";

impl Band {
    pub fn from_score(score: f64) -> Self {
        if score >= BAND_GREEN_FLOOR {
            Band::Green
        } else if score >= BAND_YELLOW_FLOOR {
            Band::Yellow
        } else {
            Band::Red
        }
    }
}

/// Compose the weighted compliance maturity score from the latest KPI
/// snapshot per name. A missing KPI contributes 0 to its term, never an
/// error. Referentials reflect ISO enablement at scoring time only;
/// recorded KPI history is untouched by enablement changes.
pub fn maturity(kpis: &[KpiSnapshot], iso_profiles: &[IsoProfile]) -> MaturityView {
    let latest = latest_per_name(kpis);
    let inputs: BTreeMap<String, f64> = latest
        .iter()
        .map(|(name, snapshot)| ((*name).to_string(), snapshot.value))
        .collect();

    let maturity_index = latest
        .get(KPI_MATURITY_INDEX)
        .map(|kpi| kpi.value)
        .unwrap_or(0.0);
    let policy_coverage = latest
        .get(KPI_POLICY_COVERAGE)
        .map(|kpi| kpi.value)
        .unwrap_or(0.0);
    let freshness_term = latest
        .get(KPI_AUDIT_FRESHNESS_DAYS)
        .map(|kpi| (1.0 - kpi.value / AUDIT_FRESHNESS_HORIZON_DAYS).clamp(0.0, 1.0))
        .unwrap_or(0.0);

    let score = MATURITY_INDEX_WEIGHT * maturity_index
        + POLICY_COVERAGE_WEIGHT * policy_coverage
        + AUDIT_FRESHNESS_WEIGHT * freshness_term;
    let score = round_score(score);

    MaturityView {
        score,
        band: Band::from_score(score),
        inputs,
        iso_referentials: iso_profiles
            .iter()
            .filter(|profile| profile.enabled)
            .map(|profile| profile.iso_code.clone())
            .collect(),
    }
}

/// Reduce the append-only KPI history to the most recent snapshot per name.
pub fn latest_per_name(kpis: &[KpiSnapshot]) -> BTreeMap<&str, &KpiSnapshot> {
    let mut latest: BTreeMap<&str, &KpiSnapshot> = BTreeMap::new();
    for kpi in kpis {
        match latest.get(kpi.name.as_str()) {
            Some(existing) if existing.measured_at >= kpi.measured_at => {}
            _ => {
                latest.insert(kpi.name.as_str(), kpi);
            }
        }
    }
    latest
}

/// Convenience for the KPI listing endpoint: latest snapshot per name,
/// ordered by name.
pub fn latest_snapshots(kpis: &[KpiSnapshot]) -> Vec<KpiSnapshot> {
    latest_per_name(kpis).into_values().cloned().collect()
}
