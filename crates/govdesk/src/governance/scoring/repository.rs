use std::sync::Mutex;

use super::domain::{AiUsageLog, Document, IsoProfile, IsoToggle, KpiSnapshot};
use super::policy::ThresholdPolicy;
use crate::governance::StoreError;

/// Storage abstraction behind the scoring service. Reads return snapshots;
/// the two mutators (ISO enablement, threshold policy) commit atomically
/// after the service has validated the request.
pub trait ScoringRepository: Send + Sync {
    fn documents(&self) -> Result<Vec<Document>, StoreError>;
    fn document(&self, id: &str) -> Result<Option<Document>, StoreError>;
    fn usage_logs(&self) -> Result<Vec<AiUsageLog>, StoreError>;
    fn kpis(&self) -> Result<Vec<KpiSnapshot>, StoreError>;
    fn iso_profiles(&self) -> Result<Vec<IsoProfile>, StoreError>;
    /// Apply enablement toggles in one batch; every code must already be
    /// recognized or the whole batch fails.
    fn set_iso_enabled(&self, toggles: &[IsoToggle]) -> Result<Vec<IsoProfile>, StoreError>;
    fn threshold_policy(&self) -> Result<ThresholdPolicy, StoreError>;
    fn store_threshold_policy(&self, policy: ThresholdPolicy) -> Result<(), StoreError>;
}

/// Mutex-guarded reference store used by the API service and tests.
#[derive(Debug, Default)]
pub struct InMemoryScoringStore {
    inner: Mutex<ScoringState>,
}

#[derive(Debug, Default)]
struct ScoringState {
    documents: Vec<Document>,
    usage_logs: Vec<AiUsageLog>,
    kpis: Vec<KpiSnapshot>,
    iso_profiles: Vec<IsoProfile>,
    policy: Option<ThresholdPolicy>,
}

impl InMemoryScoringStore {
    pub fn seeded(
        documents: Vec<Document>,
        usage_logs: Vec<AiUsageLog>,
        kpis: Vec<KpiSnapshot>,
        iso_profiles: Vec<IsoProfile>,
        policy: ThresholdPolicy,
    ) -> Self {
        Self {
            inner: Mutex::new(ScoringState {
                documents,
                usage_logs,
                kpis,
                iso_profiles,
                policy: Some(policy),
            }),
        }
    }

    /// Append a KPI snapshot; history is append-only.
    pub fn record_kpi(&self, kpi: KpiSnapshot) {
        let mut state = self.inner.lock().expect("scoring store mutex poisoned");
        state.kpis.push(kpi);
    }
}

impl ScoringRepository for InMemoryScoringStore {
    fn documents(&self) -> Result<Vec<Document>, StoreError> {
        let state = self.inner.lock().expect("scoring store mutex poisoned");
        Ok(state.documents.clone())
    }

    fn document(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let state = self.inner.lock().expect("scoring store mutex poisoned");
        Ok(state.documents.iter().find(|doc| doc.id == id).cloned())
    }

    fn usage_logs(&self) -> Result<Vec<AiUsageLog>, StoreError> {
        let state = self.inner.lock().expect("scoring store mutex poisoned");
        Ok(state.usage_logs.clone())
    }

    fn kpis(&self) -> Result<Vec<KpiSnapshot>, StoreError> {
        let state = self.inner.lock().expect("scoring store mutex poisoned");
        Ok(state.kpis.clone())
    }

    fn iso_profiles(&self) -> Result<Vec<IsoProfile>, StoreError> {
        let state = self.inner.lock().expect("scoring store mutex poisoned");
        Ok(state.iso_profiles.clone())
    }

    fn set_iso_enabled(&self, toggles: &[IsoToggle]) -> Result<Vec<IsoProfile>, StoreError> {
        let mut state = self.inner.lock().expect("scoring store mutex poisoned");

        // All-or-nothing: reject the whole batch before mutating anything.
        for toggle in toggles {
            if !state
                .iso_profiles
                .iter()
                .any(|profile| profile.iso_code == toggle.iso_code)
            {
                return Err(StoreError::NotFound);
            }
        }

        for toggle in toggles {
            if let Some(profile) = state
                .iso_profiles
                .iter_mut()
                .find(|profile| profile.iso_code == toggle.iso_code)
            {
                profile.enabled = toggle.enabled;
            }
        }

        Ok(state.iso_profiles.clone())
    }

    fn threshold_policy(&self) -> Result<ThresholdPolicy, StoreError> {
        let state = self.inner.lock().expect("scoring store mutex poisoned");
        Ok(state.policy.unwrap_or_default())
    }

    fn store_threshold_policy(&self, policy: ThresholdPolicy) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("scoring store mutex poisoned");
        state.policy = Some(policy);
        Ok(())
    }
}
