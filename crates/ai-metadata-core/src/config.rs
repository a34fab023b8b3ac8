//! Pipeline configuration
//!
//! Scoring deductions, quality thresholds and export defaults. The defaults
//! reproduce the constants the metadata tooling has always used; they can be
//! overridden from a TOML/YAML/JSON file and from `AI_METADATA_*` environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::contracts::{ComplianceStatus, Quality};
use crate::error::{MetadataError, Result};

/// Deductions and thresholds used by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points lost per metadata error
    pub metadata_error_penalty: u32,
    /// Points lost per metadata warning
    pub metadata_warning_penalty: u32,
    /// Points lost per compliance error issue
    pub compliance_error_penalty: u32,
    /// Points lost per compliance warning issue
    pub compliance_warning_penalty: u32,
    /// Points lost per compliance info issue
    pub compliance_info_penalty: u32,
    /// Scores at or above this are `high` / `compliant` / `production-ready`
    pub high_threshold: u8,
    /// Scores at or above this are `medium` / `partial` / `development-ready`
    pub medium_threshold: u8,
    /// Datasets with fewer components get a coverage warning
    pub dataset_min_components: usize,
    /// Component count for a `medium` dataset
    pub dataset_medium_components: usize,
    /// Component count for a `high` dataset
    pub dataset_high_components: usize,
    /// Components with fewer examples are flagged
    pub min_examples_per_component: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            metadata_error_penalty: 15,
            metadata_warning_penalty: 5,
            compliance_error_penalty: 20,
            compliance_warning_penalty: 10,
            compliance_info_penalty: 2,
            high_threshold: 90,
            medium_threshold: 70,
            dataset_min_components: 5,
            dataset_medium_components: 10,
            dataset_high_components: 20,
            min_examples_per_component: 3,
        }
    }
}

impl ScoringConfig {
    /// Metadata score before the completeness clamp (may be negative)
    pub fn raw_metadata_score(&self, errors: usize, warnings: usize) -> i64 {
        100 - errors as i64 * i64::from(self.metadata_error_penalty)
            - warnings as i64 * i64::from(self.metadata_warning_penalty)
    }

    /// Metadata score: deductions, capped by completeness, clamped to 0–100
    pub fn metadata_score(&self, errors: usize, warnings: usize, completeness: u8) -> u8 {
        self.raw_metadata_score(errors, warnings)
            .min(i64::from(completeness))
            .clamp(0, 100) as u8
    }

    /// Compliance score from issue counts, clamped to 0–100
    pub fn compliance_score(&self, errors: usize, warnings: usize, infos: usize) -> u8 {
        let raw = 100
            - errors as i64 * i64::from(self.compliance_error_penalty)
            - warnings as i64 * i64::from(self.compliance_warning_penalty)
            - infos as i64 * i64::from(self.compliance_info_penalty);
        raw.clamp(0, 100) as u8
    }

    pub fn quality(&self, score: u8) -> Quality {
        if score >= self.high_threshold {
            Quality::High
        } else if score >= self.medium_threshold {
            Quality::Medium
        } else {
            Quality::Low
        }
    }

    pub fn compliance_status(&self, score: u8) -> ComplianceStatus {
        if score >= self.high_threshold {
            ComplianceStatus::Compliant
        } else if score >= self.medium_threshold {
            ComplianceStatus::Partial
        } else {
            ComplianceStatus::NonCompliant
        }
    }

    /// Dataset quality from its component count
    pub fn dataset_quality(&self, component_count: usize) -> Quality {
        if component_count >= self.dataset_high_components {
            Quality::High
        } else if component_count >= self.dataset_medium_components {
            Quality::Medium
        } else {
            Quality::Low
        }
    }

    /// Reject threshold combinations that make the buckets meaningless
    pub fn validate(&self) -> Result<()> {
        if self.high_threshold > 100 || self.medium_threshold > 100 {
            return Err(MetadataError::config_error(
                "Score thresholds must be between 0 and 100",
            ));
        }
        if self.medium_threshold > self.high_threshold {
            return Err(MetadataError::config_error(format!(
                "medium_threshold ({}) must not exceed high_threshold ({})",
                self.medium_threshold, self.high_threshold
            )));
        }
        if self.dataset_medium_components > self.dataset_high_components {
            return Err(MetadataError::config_error(
                "dataset_medium_components must not exceed dataset_high_components",
            ));
        }
        Ok(())
    }
}

/// Options for building a training dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub include_anti_examples: bool,
    pub include_relationships: bool,
    pub include_global_patterns: bool,
    /// Skip components scoring below `min_quality_score`
    pub validate_quality: bool,
    pub min_quality_score: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_anti_examples: true,
            include_relationships: true,
            include_global_patterns: true,
            validate_quality: true,
            min_quality_score: 70,
        }
    }
}

impl ExportOptions {
    /// Create an options builder
    pub fn builder() -> ExportOptionsBuilder {
        ExportOptionsBuilder::new()
    }
}

/// Builder for ExportOptions
pub struct ExportOptionsBuilder {
    options: ExportOptions,
}

impl ExportOptionsBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    pub fn include_anti_examples(mut self, enabled: bool) -> Self {
        self.options.include_anti_examples = enabled;
        self
    }

    pub fn include_relationships(mut self, enabled: bool) -> Self {
        self.options.include_relationships = enabled;
        self
    }

    pub fn include_global_patterns(mut self, enabled: bool) -> Self {
        self.options.include_global_patterns = enabled;
        self
    }

    pub fn validate_quality(mut self, enabled: bool) -> Self {
        self.options.validate_quality = enabled;
        self
    }

    pub fn min_quality_score(mut self, score: u8) -> Self {
        self.options.min_quality_score = score;
        self
    }

    /// Build the options
    pub fn build(self) -> ExportOptions {
        self.options
    }
}

impl Default for ExportOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub scoring: ScoringConfig,
    pub export: ExportOptions,
}

impl PipelineConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load from a TOML, YAML or JSON file, then validate
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: PipelineConfig = crate::loader::load_document(path)?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Apply `AI_METADATA_*` overrides read through `lookup`
    ///
    /// Unparseable values are ignored and logged; the previous value stays.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parsed<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
            let raw = raw?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "Ignoring unparseable environment override");
                    None
                }
            }
        }

        let export = &mut self.export;
        if let Some(v) = parsed("AI_METADATA_MIN_QUALITY_SCORE", lookup("AI_METADATA_MIN_QUALITY_SCORE")) {
            export.min_quality_score = v;
        }
        if let Some(v) = parsed("AI_METADATA_VALIDATE_QUALITY", lookup("AI_METADATA_VALIDATE_QUALITY")) {
            export.validate_quality = v;
        }
        if let Some(v) = parsed(
            "AI_METADATA_INCLUDE_ANTI_EXAMPLES",
            lookup("AI_METADATA_INCLUDE_ANTI_EXAMPLES"),
        ) {
            export.include_anti_examples = v;
        }
        if let Some(v) = parsed(
            "AI_METADATA_INCLUDE_RELATIONSHIPS",
            lookup("AI_METADATA_INCLUDE_RELATIONSHIPS"),
        ) {
            export.include_relationships = v;
        }
        if let Some(v) = parsed(
            "AI_METADATA_INCLUDE_GLOBAL_PATTERNS",
            lookup("AI_METADATA_INCLUDE_GLOBAL_PATTERNS"),
        ) {
            export.include_global_patterns = v;
        }
    }
}
