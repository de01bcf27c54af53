use chrono::{DateTime, Utc};

use super::domain::{Document, QualityEvidences, QualitySummary};
use super::policy::ScoringConfig;
use crate::governance::{round_pct, round_score};

/// Aggregate the corpus-wide Information Quality Index.
///
/// The composite blends validation rate, average confidence, and binary
/// freshness with equal thirds. An empty corpus yields all-zero metrics
/// rather than a division error.
pub fn corpus_quality(
    documents: &[Document],
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> QualitySummary {
    let total = documents.len();
    if total == 0 {
        return QualitySummary {
            iqi_global: 0.0,
            evidences: QualityEvidences {
                total_documents: 0,
                validated_count: 0,
                validation_rate: 0.0,
                avg_confidence: 0.0,
                freshness_score: 0.0,
                fresh_documents: 0,
            },
        };
    }

    let validated_count = documents.iter().filter(|doc| doc.validated).count();
    let fresh_documents = documents
        .iter()
        .filter(|doc| is_fresh(doc, config, now))
        .count();

    let validation_rate = validated_count as f64 / total as f64;
    let avg_confidence =
        documents.iter().map(|doc| doc.confidence_score).sum::<f64>() / total as f64;
    let freshness = fresh_documents as f64 / total as f64;

    let iqi_global = (validation_rate + avg_confidence + freshness) / 3.0;

    QualitySummary {
        iqi_global: round_score(iqi_global),
        evidences: QualityEvidences {
            total_documents: total,
            validated_count,
            validation_rate: round_pct(validation_rate * 100.0),
            avg_confidence: round_pct(avg_confidence * 100.0),
            freshness_score: round_pct(freshness * 100.0),
            fresh_documents,
        },
    }
}

/// Binary freshness: full credit within the window, none outside it.
fn is_fresh(document: &Document, config: &ScoringConfig, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(document.last_updated)
        .num_days()
        < config.freshness_window_days
}
