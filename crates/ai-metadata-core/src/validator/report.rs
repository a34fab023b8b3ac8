//! Aggregate quality reports

use crate::config::ScoringConfig;
use crate::contracts::{ComponentQualitySummary, QualityReport, ReadinessLevel, ValidationResult};

/// Fold per-component results (in tag order) into a report
pub(crate) fn build_report<'a, I>(scoring: &ScoringConfig, results: I) -> QualityReport
where
    I: IntoIterator<Item = (&'a str, ValidationResult)>,
{
    let mut components = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;
    let mut score_sum = 0u64;

    for (tag_name, result) in results {
        total_errors += result.errors.len();
        total_warnings += result.warnings.len();
        score_sum += u64::from(result.score);

        for suggestion in &result.suggestions {
            if !recommendations.contains(suggestion) {
                recommendations.push(suggestion.clone());
            }
        }

        components.push(ComponentQualitySummary {
            tag_name: tag_name.to_string(),
            score: result.score,
            quality: result.quality,
            valid: result.valid,
            error_count: result.errors.len(),
            warning_count: result.warnings.len(),
        });
    }

    let average_score = if components.is_empty() {
        0.0
    } else {
        score_sum as f64 / components.len() as f64
    };

    QualityReport {
        total_components: components.len(),
        average_score,
        total_errors,
        total_warnings,
        readiness_for_ai: readiness(scoring, total_errors, average_score),
        components,
        recommendations,
    }
}

/// Readiness from the error total and the average score
pub fn readiness(scoring: &ScoringConfig, total_errors: usize, average_score: f64) -> ReadinessLevel {
    if total_errors > 0 {
        ReadinessLevel::NotReady
    } else if average_score >= f64::from(scoring.high_threshold) {
        ReadinessLevel::ProductionReady
    } else if average_score >= f64::from(scoring.medium_threshold) {
        ReadinessLevel::DevelopmentReady
    } else {
        ReadinessLevel::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::Quality;

    fn result(score: u8, errors: usize, suggestions: &[&str]) -> ValidationResult {
        ValidationResult {
            valid: errors == 0,
            score,
            quality: ScoringConfig::default().quality(score),
            errors: vec!["e".to_string(); errors],
            warnings: vec![],
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            completeness: 100,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(&ScoringConfig::default(), Vec::new());
        assert_eq!(report.total_components, 0);
        assert_eq!(report.average_score, 0.0);
        assert_eq!(report.readiness_for_ai, ReadinessLevel::NeedsImprovement);
    }

    #[test]
    fn test_errors_mean_not_ready() {
        let report = build_report(
            &ScoringConfig::default(),
            vec![("ui-button", result(100, 0, &[])), ("ui-card", result(85, 1, &[]))],
        );
        assert_eq!(report.total_errors, 1);
        assert_eq!(report.average_score, 92.5);
        assert_eq!(report.readiness_for_ai, ReadinessLevel::NotReady);
        assert_eq!(report.components[1].quality, Quality::Medium);
    }

    #[test]
    fn test_recommendations_are_distinct() {
        let report = build_report(
            &ScoringConfig::default(),
            vec![
                ("ui-button", result(90, 0, &["a", "b"])),
                ("ui-card", result(80, 0, &["b", "c"])),
            ],
        );
        assert_eq!(report.recommendations, vec!["a", "b", "c"]);
        assert_eq!(report.readiness_for_ai, ReadinessLevel::DevelopmentReady);
    }

    #[test]
    fn test_readiness_thresholds() {
        let scoring = ScoringConfig::default();
        assert_eq!(readiness(&scoring, 0, 90.0), ReadinessLevel::ProductionReady);
        assert_eq!(readiness(&scoring, 0, 89.9), ReadinessLevel::DevelopmentReady);
        assert_eq!(readiness(&scoring, 0, 69.9), ReadinessLevel::NeedsImprovement);
    }
}
