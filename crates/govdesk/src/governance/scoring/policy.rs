use serde::{Deserialize, Serialize};

use crate::governance::EngineError;

/// AI usage thresholds, one active instance per tenant.
///
/// The ordering invariant (`min_iqi_authorized >= min_iqi_assisted`) is
/// re-validated on every update before anything is committed; an instance
/// obtained from the repository is therefore always coherent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    pub min_iqi_authorized: f64,
    pub min_iqi_assisted: f64,
}

impl ThresholdPolicy {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.min_iqi_authorized)
            || !(0.0..=1.0).contains(&self.min_iqi_assisted)
        {
            return Err(EngineError::Validation(
                "IQI thresholds must be between 0 and 1".to_string(),
            ));
        }
        if self.min_iqi_authorized < self.min_iqi_assisted {
            return Err(EngineError::Validation(
                "authorized threshold must not be below assisted threshold".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            min_iqi_authorized: 0.80,
            min_iqi_assisted: 0.60,
        }
    }
}

/// Build-time scoring knobs. Weights for the composite IQI are fixed
/// equal-thirds (see `quality`); only the freshness window and advisory
/// escalation cutoffs vary per deployment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Documents older than this window contribute 0 to freshness.
    pub freshness_window_days: i64,
    /// Anomaly count at which reclassification advisories escalate.
    pub anomaly_escalation_count: usize,
    /// Open-action ageing at which backlog advisories escalate.
    pub ageing_escalation_days: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            freshness_window_days: 90,
            anomaly_escalation_count: 3,
            ageing_escalation_days: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_coherent() {
        ThresholdPolicy::default().validate().expect("defaults hold");
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let policy = ThresholdPolicy {
            min_iqi_authorized: 0.5,
            min_iqi_assisted: 0.7,
        };
        assert!(matches!(
            policy.validate(),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let policy = ThresholdPolicy {
            min_iqi_authorized: 1.2,
            min_iqi_assisted: 0.6,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn accepts_equal_thresholds() {
        let policy = ThresholdPolicy {
            min_iqi_authorized: 0.6,
            min_iqi_assisted: 0.6,
        };
        policy.validate().expect("equal thresholds are ordered");
    }
}
