use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::ai_usage;
use super::domain::{
    Document, DocumentUsageView, GovernanceSummary, IsoProfile, IsoToggle, KpiSnapshot,
    MaturityView, QualitySummary,
};
use super::maturity;
use super::policy::{ScoringConfig, ThresholdPolicy};
use super::quality;
use super::repository::ScoringRepository;
use crate::governance::EngineError;

/// Service composing the quality aggregator, usage classifier, and maturity
/// scorer over a shared repository. All reads are pure computations over
/// the snapshot the repository hands back.
pub struct ScoringService<R> {
    repository: Arc<R>,
    config: ScoringConfig,
}

impl<R> ScoringService<R>
where
    R: ScoringRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Corpus quality summary at `now`.
    pub fn quality_summary(&self, now: DateTime<Utc>) -> Result<QualitySummary, EngineError> {
        let documents = self
            .repository
            .documents()
            .map_err(|err| err.into_engine("document", "*"))?;
        Ok(quality::corpus_quality(&documents, &self.config, now))
    }

    pub fn documents(&self) -> Result<Vec<Document>, EngineError> {
        self.repository
            .documents()
            .map_err(|err| err.into_engine("document", "*"))
    }

    pub fn document(&self, id: &str) -> Result<Document, EngineError> {
        self.repository
            .document(id)
            .map_err(|err| err.into_engine("document", id))?
            .ok_or_else(|| EngineError::not_found("document", id))
    }

    /// Classify AI usage of one document under the active policy.
    pub fn document_usage(&self, id: &str) -> Result<DocumentUsageView, EngineError> {
        let document = self.document(id)?;
        let policy = self.threshold_policy()?;
        Ok(ai_usage::document_usage(&document, &policy))
    }

    /// Executive AI governance summary. Reclassification runs on every call
    /// so policy changes surface immediately as anomalies. The caller passes
    /// the worst open-action ageing from the program engine so advisory
    /// priority can escalate with the backlog.
    pub fn ai_summary(
        &self,
        max_open_action_ageing_days: Option<i64>,
    ) -> Result<GovernanceSummary, EngineError> {
        let logs = self
            .repository
            .usage_logs()
            .map_err(|err| err.into_engine("ai usage log", "*"))?;
        let documents = self
            .repository
            .documents()
            .map_err(|err| err.into_engine("document", "*"))?;
        let policy = self.threshold_policy()?;
        Ok(ai_usage::governance_summary(
            &logs,
            &documents,
            &policy,
            &self.config,
            max_open_action_ageing_days,
        ))
    }

    pub fn maturity(&self) -> Result<MaturityView, EngineError> {
        let kpis = self
            .repository
            .kpis()
            .map_err(|err| err.into_engine("kpi", "*"))?;
        let profiles = self
            .repository
            .iso_profiles()
            .map_err(|err| err.into_engine("iso profile", "*"))?;
        Ok(maturity::maturity(&kpis, &profiles))
    }

    /// Latest KPI snapshot per name, for the dashboard listing.
    pub fn latest_kpis(&self) -> Result<Vec<KpiSnapshot>, EngineError> {
        let kpis = self
            .repository
            .kpis()
            .map_err(|err| err.into_engine("kpi", "*"))?;
        Ok(maturity::latest_snapshots(&kpis))
    }

    pub fn iso_profiles(&self) -> Result<Vec<IsoProfile>, EngineError> {
        self.repository
            .iso_profiles()
            .map_err(|err| err.into_engine("iso profile", "*"))
    }

    /// Batch enablement update; unknown codes reject the whole batch.
    pub fn update_iso_profiles(
        &self,
        toggles: &[IsoToggle],
    ) -> Result<Vec<IsoProfile>, EngineError> {
        self.repository.set_iso_enabled(toggles).map_err(|err| {
            let codes = toggles
                .iter()
                .map(|toggle| toggle.iso_code.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            err.into_engine("iso profile", codes)
        })
    }

    pub fn threshold_policy(&self) -> Result<ThresholdPolicy, EngineError> {
        self.repository
            .threshold_policy()
            .map_err(|err| err.into_engine("threshold policy", "active"))
    }

    /// Single entry point for threshold updates. The ordering invariant is
    /// checked before commit; on rejection the prior policy stays active.
    pub fn update_threshold_policy(
        &self,
        policy: ThresholdPolicy,
    ) -> Result<ThresholdPolicy, EngineError> {
        policy.validate()?;
        self.repository
            .store_threshold_policy(policy)
            .map_err(|err| err.into_engine("threshold policy", "active"))?;
        Ok(policy)
    }
}
