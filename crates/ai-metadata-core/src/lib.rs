//! AI Metadata Core
//!
//! Validation, compliance scoring and training-data export for UI component
//! metadata consumed by AI coding assistants.
//!
//! # Pipeline
//! - [`validator`]: scores metadata records, audits live elements against
//!   them, checks exported datasets and builds quality reports
//! - [`exporter`]: turns records into a [`TrainingDataset`] and renders it
//!   for Copilot, Cursor, Claude, OpenAI fine-tuning, JSON Schema or plain JSON
//! - [`prompts`]: system, per-component and pattern prompts
//!
//! # Design Principles
//! - Deterministic: same input always produces the same output
//! - No I/O: the only side effects are `tracing` events ([`loader`] is a
//!   convenience for callers that keep metadata on disk)
//! - Findings are data: quality problems never surface as `Err`

pub mod catalog;
pub mod config;
pub mod element;
pub mod error;
pub mod exporter;
pub mod loader;
pub mod prompts;
pub mod validator;

#[path = "../contracts/mod.rs"]
pub mod contracts;

pub use contracts::*;

pub use config::{ExportOptions, ExportOptionsBuilder, PipelineConfig, ScoringConfig};
pub use element::{ElementAttributes, ElementSnapshot};
pub use error::{MetadataError, Result};
pub use exporter::{
    export_component_training, export_for_ai_tool, export_training_dataset, AiToolFormat,
    ComponentExportFormat, TrainingDataExporter,
};
pub use prompts::{generate_ai_prompts, ComponentPrompts, PromptCollection};
pub use validator::{
    generate_quality_report, validate_component_implementation, validate_component_metadata,
    validate_training_dataset, MetadataValidator,
};

/// Crate version
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
