//! Validation, compliance and report result shapes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality bucket derived from a 0–100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Low => write!(f, "low"),
            Quality::Medium => write!(f, "medium"),
            Quality::High => write!(f, "high"),
        }
    }
}

/// Result of scoring one metadata record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff there are no errors
    pub valid: bool,
    /// 0–100
    pub score: u8,
    pub quality: Quality,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    /// Percentage of the presence checklist that is filled in
    pub completeness: u8,
}

/// Severity of a compliance issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Info => write!(f, "info"),
            IssueSeverity::Warning => write!(f, "warning"),
            IssueSeverity::Error => write!(f, "error"),
        }
    }
}

/// Area of the element contract an issue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Semantics,
    Accessibility,
    Keyboard,
    Aria,
    Performance,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueCategory::Semantics => write!(f, "semantics"),
            IssueCategory::Accessibility => write!(f, "accessibility"),
            IssueCategory::Keyboard => write!(f, "keyboard"),
            IssueCategory::Aria => write!(f, "aria"),
            IssueCategory::Performance => write!(f, "performance"),
        }
    }
}

/// One mismatch between an element and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub category: IssueCategory,
    pub severity: IssueSeverity,
    pub description: String,
    pub fix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl ComplianceIssue {
    fn new(
        category: IssueCategory,
        severity: IssueSeverity,
        description: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            description: description.into(),
            fix: fix.into(),
            example: None,
        }
    }

    /// Create an error issue
    pub fn error(category: IssueCategory, description: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(category, IssueSeverity::Error, description, fix)
    }

    /// Create a warning issue
    pub fn warning(category: IssueCategory, description: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(category, IssueSeverity::Warning, description, fix)
    }

    /// Create an info issue
    pub fn info(category: IssueCategory, description: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(category, IssueSeverity::Info, description, fix)
    }

    /// Attach a markup example of the fix
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.description)
    }
}

/// Compliance bucket derived from a 0–100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::Partial => write!(f, "partial"),
            ComplianceStatus::NonCompliant => write!(f, "non-compliant"),
        }
    }
}

/// Result of scoring a live element against its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub score: u8,
    pub status: ComplianceStatus,
    pub issues: Vec<ComplianceIssue>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
}

impl ComplianceResult {
    /// Issues of one severity
    pub fn issues_with(&self, severity: IssueSeverity) -> impl Iterator<Item = &ComplianceIssue> {
        self.issues.iter().filter(move |issue| issue.severity == severity)
    }
}

/// Result of checking an exported training dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    /// Bucketed from the component count
    pub quality: Quality,
    pub component_count: usize,
}

/// How ready a component set is for AI-assisted generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessLevel {
    NotReady,
    NeedsImprovement,
    DevelopmentReady,
    ProductionReady,
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadinessLevel::NotReady => write!(f, "not-ready"),
            ReadinessLevel::NeedsImprovement => write!(f, "needs-improvement"),
            ReadinessLevel::DevelopmentReady => write!(f, "development-ready"),
            ReadinessLevel::ProductionReady => write!(f, "production-ready"),
        }
    }
}

/// Per-component line of a quality report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentQualitySummary {
    pub tag_name: String,
    pub score: u8,
    pub quality: Quality,
    pub valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Aggregate quality of a component set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub total_components: usize,
    pub average_score: f64,
    pub total_errors: usize,
    pub total_warnings: usize,
    #[serde(rename = "readinessForAI")]
    pub readiness_for_ai: ReadinessLevel,
    pub components: Vec<ComponentQualitySummary>,
    /// Distinct suggestions across all components, first-seen order
    pub recommendations: Vec<String>,
}
