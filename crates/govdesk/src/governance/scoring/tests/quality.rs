use super::common::*;

use crate::governance::scoring::policy::ScoringConfig;
use crate::governance::scoring::quality::corpus_quality;

#[test]
fn empty_corpus_yields_zero_metrics() {
    let summary = corpus_quality(&[], &ScoringConfig::default(), fixed_now());

    assert_eq!(summary.iqi_global, 0.0);
    assert_eq!(summary.evidences.total_documents, 0);
    assert_eq!(summary.evidences.validation_rate, 0.0);
    assert_eq!(summary.evidences.avg_confidence, 0.0);
    assert_eq!(summary.evidences.freshness_score, 0.0);
}

#[test]
fn composite_blends_equal_thirds() {
    // 3/4 validated, average confidence 0.75, 3/4 fresh.
    let documents = vec![
        document("doc-001", 0.90, true, 10),
        document("doc-002", 0.85, true, 20),
        document("doc-003", 0.55, false, 5),
        document("doc-004", 0.70, true, 120),
    ];

    let summary = corpus_quality(&documents, &ScoringConfig::default(), fixed_now());

    assert_eq!(summary.iqi_global, 0.75);
    assert_eq!(summary.evidences.total_documents, 4);
    assert_eq!(summary.evidences.validated_count, 3);
    assert_eq!(summary.evidences.validation_rate, 75.0);
    assert_eq!(summary.evidences.avg_confidence, 75.0);
    assert_eq!(summary.evidences.freshness_score, 75.0);
    assert_eq!(summary.evidences.fresh_documents, 3);
}

#[test]
fn freshness_window_is_exclusive_at_the_boundary() {
    let config = ScoringConfig::default();
    let inside = vec![document("doc-001", 1.0, true, config.freshness_window_days - 1)];
    let outside = vec![document("doc-002", 1.0, true, config.freshness_window_days)];

    let fresh = corpus_quality(&inside, &config, fixed_now());
    let stale = corpus_quality(&outside, &config, fixed_now());

    assert_eq!(fresh.evidences.fresh_documents, 1);
    assert_eq!(stale.evidences.fresh_documents, 0);
}

#[test]
fn composite_rounds_to_two_decimals() {
    // (1.0 + 0.6 + 1.0) / 3 = 0.8666... -> 0.87
    let documents = vec![document("doc-001", 0.60, true, 1)];

    let summary = corpus_quality(&documents, &ScoringConfig::default(), fixed_now());

    assert_eq!(summary.iqi_global, 0.87);
    assert_eq!(summary.evidences.avg_confidence, 60.0);
}
