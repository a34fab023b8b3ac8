//! Metadata validator
//!
//! Scores metadata records, audits live elements against their records,
//! checks exported datasets and rolls results up into quality reports.
//! Every operation is deterministic and side-effect free apart from
//! `tracing` events; data problems are reported as findings, never as errors.

pub mod compliance;
pub mod dataset;
pub mod report;
pub mod rules;

use compliance::{ComplianceCheck, ComplianceFindings};
use rules::{MetadataFindings, MetadataRule};

use crate::config::ScoringConfig;
use crate::contracts::{
    ComplianceResult, ComponentMetadata, ComponentRegistry, DatasetValidationResult,
    IssueSeverity, QualityReport, TrainingDataset, ValidatedMetadata, ValidationResult,
    COMPLETENESS_CHECKLIST,
};
use crate::element::ElementAttributes;
use crate::error::{MetadataError, Result};

/// Runs metadata rules and compliance checks under one scoring config
pub struct MetadataValidator {
    scoring: ScoringConfig,
    rules: Vec<Box<dyn MetadataRule>>,
    checks: Vec<Box<dyn ComplianceCheck>>,
}

impl Default for MetadataValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataValidator {
    /// Validator with the default rules and scoring
    pub fn new() -> Self {
        Self::with_scoring(ScoringConfig::default())
    }

    /// Validator with the default rules and custom scoring
    pub fn with_scoring(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            rules: rules::default_rules(),
            checks: compliance::default_checks(),
        }
    }

    /// Validator with no rules or checks registered
    pub fn empty(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            rules: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Register an additional metadata rule
    pub fn register(&mut self, rule: Box<dyn MetadataRule>) {
        self.rules.push(rule);
    }

    /// Register an additional compliance check
    pub fn register_check(&mut self, check: Box<dyn ComplianceCheck>) {
        self.checks.push(check);
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Identifiers of the registered metadata rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Score one metadata record
    pub fn validate_component_metadata(&self, metadata: &ComponentMetadata) -> ValidationResult {
        let mut findings = MetadataFindings::default();
        for rule in &self.rules {
            rule.evaluate(metadata, &mut findings);
        }

        let completeness = completeness(metadata);
        let score = self.scoring.metadata_score(
            findings.errors.len(),
            findings.warnings.len(),
            completeness,
        );

        tracing::debug!(
            score,
            completeness,
            errors = findings.errors.len(),
            warnings = findings.warnings.len(),
            "Validated component metadata"
        );

        ValidationResult {
            valid: findings.errors.is_empty(),
            score,
            quality: self.scoring.quality(score),
            errors: findings.errors,
            warnings: findings.warnings,
            suggestions: findings.suggestions,
            completeness,
        }
    }

    /// Score a live element against its metadata
    pub fn validate_component_implementation(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
    ) -> ComplianceResult {
        let mut findings = ComplianceFindings::default();
        for check in &self.checks {
            check.evaluate(element, metadata, &mut findings);
        }

        let count = |severity: IssueSeverity| {
            findings
                .issues
                .iter()
                .filter(|issue| issue.severity == severity)
                .count()
        };
        let score = self.scoring.compliance_score(
            count(IssueSeverity::Error),
            count(IssueSeverity::Warning),
            count(IssueSeverity::Info),
        );

        tracing::debug!(
            tag = element.tag_name(),
            score,
            issues = findings.issues.len(),
            "Audited component implementation"
        );

        ComplianceResult {
            score,
            status: self.scoring.compliance_status(score),
            issues: findings.issues,
            suggestions: findings.suggestions,
            strengths: findings.strengths,
        }
    }

    /// Check an exported training dataset
    pub fn validate_training_dataset(&self, dataset: &TrainingDataset) -> DatasetValidationResult {
        dataset::check_dataset(&self.scoring, dataset)
    }

    /// Check a training dataset that is still raw JSON
    pub fn validate_training_dataset_json(&self, value: &serde_json::Value) -> DatasetValidationResult {
        dataset::check_dataset_value(&self.scoring, value)
    }

    /// Validate every record and aggregate the results
    pub fn generate_quality_report(&self, registry: &ComponentRegistry) -> QualityReport {
        let report = report::build_report(
            &self.scoring,
            registry
                .iter()
                .map(|(tag, metadata)| (tag.as_str(), self.validate_component_metadata(metadata))),
        );

        tracing::info!(
            components = report.total_components,
            average_score = report.average_score,
            readiness = %report.readiness_for_ai,
            "Generated quality report"
        );
        report
    }

    /// Promote a record to [`ValidatedMetadata`] if it has no errors
    pub fn trust(&self, metadata: ComponentMetadata) -> Result<ValidatedMetadata> {
        let result = self.validate_component_metadata(&metadata);
        if result.valid {
            Ok(ValidatedMetadata::new_unchecked(metadata, result.score))
        } else {
            Err(MetadataError::Untrusted(result.errors))
        }
    }
}

impl TryFrom<ComponentMetadata> for ValidatedMetadata {
    type Error = MetadataError;

    fn try_from(metadata: ComponentMetadata) -> Result<Self> {
        MetadataValidator::new().trust(metadata)
    }
}

/// Percentage of the presence checklist that is filled in
pub fn completeness(metadata: &ComponentMetadata) -> u8 {
    let present = COMPLETENESS_CHECKLIST
        .iter()
        .filter(|field| metadata.is_present(**field))
        .count();
    (present * 100 / COMPLETENESS_CHECKLIST.len()) as u8
}

/// [`MetadataValidator::validate_component_metadata`] with default scoring
pub fn validate_component_metadata(metadata: &ComponentMetadata) -> ValidationResult {
    MetadataValidator::new().validate_component_metadata(metadata)
}

/// [`MetadataValidator::validate_component_implementation`] with default scoring
pub fn validate_component_implementation(
    element: &dyn ElementAttributes,
    metadata: &ComponentMetadata,
) -> ComplianceResult {
    MetadataValidator::new().validate_component_implementation(element, metadata)
}

/// [`MetadataValidator::validate_training_dataset`] with default scoring
pub fn validate_training_dataset(dataset: &TrainingDataset) -> DatasetValidationResult {
    MetadataValidator::new().validate_training_dataset(dataset)
}

/// [`MetadataValidator::generate_quality_report`] with default scoring
pub fn generate_quality_report(registry: &ComponentRegistry) -> QualityReport {
    MetadataValidator::new().generate_quality_report(registry)
}
