//! AI Metadata Contract Definitions
//!
//! Plain data shapes shared by the validator, the exporter and downstream AI
//! tooling. Nothing in here scores or exports anything.
//!
//! # Design Principles
//!
//! - **Permissive authoring**: `ComponentMetadata` accepts partial records;
//!   validity is decided at runtime by the validator
//! - **Stable wire names**: every type serializes with camelCase keys, so
//!   records authored for existing tooling load unchanged
//! - **Derived results**: validation and export results are recomputed on
//!   demand and never persisted here

pub mod dataset;
pub mod metadata;
pub mod results;

pub use dataset::{
    AntiExample, ComponentRelationship, ComponentTrainingData, ExampleKind, FrameworkGuidance,
    GlobalPattern, RelationshipKind, TrainingDataset, TrainingExample,
};
pub use metadata::{
    AiPrompts, BundleImpact, ComponentCategory, ComponentMetadata, ComponentRegistry,
    Criticality, Framework, MetadataField, ValidatedMetadata, COMPLETENESS_CHECKLIST,
    REQUIRED_FIELDS,
};
pub use results::{
    ComplianceIssue, ComplianceResult, ComplianceStatus, ComponentQualitySummary,
    DatasetValidationResult, IssueCategory, IssueSeverity, Quality, QualityReport,
    ReadinessLevel, ValidationResult,
};
