//! Training dataset checks

use serde_json::Value;

use crate::config::ScoringConfig;
use crate::contracts::{DatasetValidationResult, TrainingDataset};

/// Frameworks the dataset must carry guidance for
pub const GUIDED_FRAMEWORKS: [&str; 3] = ["react", "vue", "angular"];

/// Top-level keys a serialized dataset must have
const REQUIRED_KEYS: [&str; 3] = ["version", "created", "components"];

#[derive(Default)]
struct DatasetFindings {
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl DatasetFindings {
    fn finish(self, scoring: &ScoringConfig, component_count: usize) -> DatasetValidationResult {
        DatasetValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            suggestions: self.suggestions,
            quality: scoring.dataset_quality(component_count),
            component_count,
        }
    }
}

/// Check a typed dataset
pub(crate) fn check_dataset(scoring: &ScoringConfig, dataset: &TrainingDataset) -> DatasetValidationResult {
    let mut findings = DatasetFindings::default();

    if dataset.version.trim().is_empty() {
        findings.errors.push("Missing required field: version".to_string());
    }

    check_coverage(scoring, dataset, &mut findings);
    check_guidance(dataset, &mut findings);
    check_examples(scoring, dataset, &mut findings);

    findings.finish(scoring, dataset.components.len())
}

/// Check a dataset that has not been decoded yet
///
/// Missing top-level keys are reported without attempting to decode; a
/// document that has them but does not decode is reported as a single error.
pub(crate) fn check_dataset_value(scoring: &ScoringConfig, value: &Value) -> DatasetValidationResult {
    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| value.get(**key).map_or(true, Value::is_null))
        .map(|key| format!("Missing required field: {}", key))
        .collect();

    if !missing.is_empty() {
        let component_count = value
            .get("components")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        let findings = DatasetFindings {
            errors: missing,
            ..Default::default()
        };
        return findings.finish(scoring, component_count);
    }

    match serde_json::from_value::<TrainingDataset>(value.clone()) {
        Ok(dataset) => check_dataset(scoring, &dataset),
        Err(e) => {
            tracing::debug!(error = %e, "Dataset failed to decode");
            let findings = DatasetFindings {
                errors: vec![format!("Malformed dataset: {}", e)],
                ..Default::default()
            };
            findings.finish(scoring, 0)
        }
    }
}

fn check_coverage(scoring: &ScoringConfig, dataset: &TrainingDataset, findings: &mut DatasetFindings) {
    if dataset.components.len() < scoring.dataset_min_components {
        findings.warnings.push(format!(
            "Low component coverage: {} components (at least {} recommended)",
            dataset.components.len(),
            scoring.dataset_min_components
        ));
    }
}

fn check_guidance(dataset: &TrainingDataset, findings: &mut DatasetFindings) {
    for framework in GUIDED_FRAMEWORKS {
        match dataset.framework_guidance.get(framework) {
            None => findings
                .warnings
                .push(format!("Missing framework guidance for {}", framework)),
            Some(guidance) => {
                if guidance.import_patterns.is_empty() {
                    findings
                        .suggestions
                        .push(format!("Add import patterns for {}", framework));
                }
                if guidance.event_patterns.is_empty() {
                    findings
                        .suggestions
                        .push(format!("Add event handling patterns for {}", framework));
                }
            }
        }
    }
}

fn check_examples(scoring: &ScoringConfig, dataset: &TrainingDataset, findings: &mut DatasetFindings) {
    let thin = dataset
        .components
        .iter()
        .filter(|c| c.examples.len() < scoring.min_examples_per_component)
        .count();
    if thin > 0 {
        findings.warnings.push(format!(
            "{} components have fewer than {} examples",
            thin, scoring.min_examples_per_component
        ));
    }

    if dataset.anti_example_count() < dataset.components.len() {
        findings
            .suggestions
            .push("Add more anti-examples to improve AI understanding of misuse".to_string());
    }
}
