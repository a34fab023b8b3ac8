//! CLI command definitions for the AI metadata pipeline
//!
//! Provides Clap-based commands for validating metadata registries, auditing
//! rendered elements, exporting training data and generating prompts.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use ai_metadata_core::catalog::builtin_registry;
use ai_metadata_core::loader::{load_document, load_registry};
use ai_metadata_core::{
    export_component_training, generate_ai_prompts, AiToolFormat, ComponentExportFormat,
    ComponentRegistry, ElementSnapshot, ExportOptions, IssueSeverity, MetadataError,
    MetadataValidator, PipelineConfig, TrainingDataExporter, ValidationResult,
};

use super::output::{self, OutputFormat};
use super::ExitCode;

/// AI Metadata CLI
///
/// Validate UI component metadata, audit rendered elements against it and
/// export training data for AI coding assistants.
#[derive(Parser, Debug)]
#[command(name = "ai-metadata")]
#[command(about = "AI metadata pipeline - Validate metadata and export training data", long_about = None)]
#[command(version)]
pub struct MetadataCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Pipeline configuration file (TOML, YAML or JSON)
    ///
    /// `AI_METADATA_*` environment variables override values from the file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: MetadataCommands,
}

/// Available pipeline commands
#[derive(Subcommand, Debug)]
pub enum MetadataCommands {
    /// Validate component metadata records
    ///
    /// Without an input file the built-in component catalog is validated.
    Validate {
        /// Metadata registry file (tag name → metadata)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Validate only this component
        #[arg(long)]
        component: Option<String>,

        /// Output format for validation results
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Audit a rendered element against its component metadata
    Audit {
        /// Element snapshot file (tag name and attributes)
        #[arg(short, long)]
        element: PathBuf,

        /// Component to audit against (defaults to the element's tag name)
        #[arg(long)]
        component: Option<String>,

        /// Metadata registry file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format for audit results
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Aggregate quality report and AI readiness
    Report {
        /// Metadata registry file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format for the report
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Export the training dataset for an AI tool
    ///
    /// Tools: github-copilot, cursor-ide, claude-artifacts, openai-gpt,
    /// json-schema, standard. Unknown names fall back to standard.
    Export {
        /// Metadata registry file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target AI tool
        #[arg(short, long, default_value = "standard")]
        tool: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: ExportFilterArgs,
    },

    /// Export training data for a single component
    Component {
        /// Component tag name
        tag: String,

        /// Metadata registry file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        format: ComponentFormatArg,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate system, component and pattern prompts
    Prompts {
        /// Metadata registry file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,

        /// Write to this file instead of stdout (table format writes JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check an exported training dataset
    CheckDataset {
        /// Dataset file (JSON)
        dataset: PathBuf,

        /// Output format for check results
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },
}

/// Export options that override the pipeline configuration
#[derive(Args, Debug, Default, Clone)]
pub struct ExportFilterArgs {
    /// Minimum metadata score for a component to be exported
    #[arg(long)]
    pub min_quality_score: Option<u8>,

    /// Export every component regardless of score
    #[arg(long)]
    pub no_quality_filter: bool,

    /// Omit anti-examples
    #[arg(long)]
    pub no_anti_examples: bool,

    /// Omit component relationships
    #[arg(long)]
    pub no_relationships: bool,

    /// Omit global patterns
    #[arg(long)]
    pub no_global_patterns: bool,
}

impl ExportFilterArgs {
    /// Apply the flags on top of configured options
    pub fn apply(&self, mut options: ExportOptions) -> ExportOptions {
        if let Some(score) = self.min_quality_score {
            options.min_quality_score = score;
        }
        if self.no_quality_filter {
            options.validate_quality = false;
        }
        if self.no_anti_examples {
            options.include_anti_examples = false;
        }
        if self.no_relationships {
            options.include_relationships = false;
        }
        if self.no_global_patterns {
            options.include_global_patterns = false;
        }
        options
    }
}

/// Single-component export formats
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ComponentFormatArg {
    Json,
    Markdown,
    Yaml,
}

impl From<ComponentFormatArg> for ComponentExportFormat {
    fn from(arg: ComponentFormatArg) -> Self {
        match arg {
            ComponentFormatArg::Json => ComponentExportFormat::Json,
            ComponentFormatArg::Markdown => ComponentExportFormat::Markdown,
            ComponentFormatArg::Yaml => ComponentExportFormat::Yaml,
        }
    }
}

/// Load the pipeline configuration and apply environment overrides
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig, MetadataError> {
    let mut config = match path {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    config.scoring.validate()?;
    Ok(config)
}

/// Load a registry file, or the built-in catalog when none is given
fn registry_from(input: Option<&Path>) -> Result<ComponentRegistry, MetadataError> {
    match input {
        Some(path) => load_registry(path),
        None => {
            tracing::debug!("No input file, using the built-in component catalog");
            Ok(builtin_registry())
        }
    }
}

/// Write text to a file, or print it
fn write_output(text: &str, output: Option<&Path>) -> Result<(), MetadataError> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| {
                MetadataError::FileError(format!(
                    "Failed to write '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::info!(path = %path.display(), bytes = text.len(), "Wrote output");
            Ok(())
        }
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn unknown_component(tag: &str) -> MetadataError {
    MetadataError::invalid_input(format!("Unknown component: {}", tag))
}

/// Execute the validate command
pub fn execute_validate(
    config: &PipelineConfig,
    input: Option<PathBuf>,
    component: Option<String>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, MetadataError> {
    let registry = registry_from(input.as_deref())?;
    let validator = MetadataValidator::with_scoring(config.scoring.clone());

    let results: Vec<(String, ValidationResult)> = match component {
        Some(tag) => {
            let metadata = registry.get(&tag).ok_or_else(|| unknown_component(&tag))?;
            vec![(tag.clone(), validator.validate_component_metadata(metadata))]
        }
        None => registry
            .iter()
            .map(|(tag, metadata)| (tag.clone(), validator.validate_component_metadata(metadata)))
            .collect(),
    };

    let output_format = format.unwrap_or_default();
    let by_tag: std::collections::BTreeMap<&str, &ValidationResult> =
        results.iter().map(|(tag, r)| (tag.as_str(), r)).collect();
    match output::serialize(&by_tag, output_format)? {
        Some(text) => println!("{}", text),
        None => output::write_validation_table(&mut std::io::stdout(), &results),
    }

    let has_errors = results.iter().any(|(_, r)| !r.errors.is_empty());
    let has_warnings = results.iter().any(|(_, r)| !r.warnings.is_empty());
    Ok(ExitCode::from_validation_result(has_errors, has_warnings))
}

/// Execute the audit command
pub fn execute_audit(
    config: &PipelineConfig,
    element: PathBuf,
    component: Option<String>,
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, MetadataError> {
    let snapshot: ElementSnapshot = load_document(&element)?;
    let registry = registry_from(input.as_deref())?;

    let tag = component.unwrap_or_else(|| snapshot.tag_name.clone());
    let metadata = registry.get(&tag).ok_or_else(|| unknown_component(&tag))?;

    let validator = MetadataValidator::with_scoring(config.scoring.clone());
    let result = validator.validate_component_implementation(&snapshot, metadata);

    output::render(&result, format.unwrap_or_default(), |out, result| {
        output::write_compliance_table(out, &tag, result)
    })?;

    let has_errors = result.issues_with(IssueSeverity::Error).next().is_some();
    let has_warnings = result.issues_with(IssueSeverity::Warning).next().is_some();
    Ok(ExitCode::from_validation_result(has_errors, has_warnings))
}

/// Execute the report command
pub fn execute_report(
    config: &PipelineConfig,
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, MetadataError> {
    let registry = registry_from(input.as_deref())?;
    let report = MetadataValidator::with_scoring(config.scoring.clone()).generate_quality_report(&registry);

    output::render(&report, format.unwrap_or_default(), |out, report| {
        output::write_report_table(out, report)
    })?;

    Ok(ExitCode::from_validation_result(
        report.total_errors > 0,
        report.total_warnings > 0,
    ))
}

/// Execute the export command
pub fn execute_export(
    config: PipelineConfig,
    input: Option<PathBuf>,
    tool: String,
    output: Option<PathBuf>,
    filters: ExportFilterArgs,
) -> Result<ExitCode, MetadataError> {
    let registry = registry_from(input.as_deref())?;

    let format = AiToolFormat::from_name(&tool);
    if format.as_str() != tool.trim().to_lowercase().replace('_', "-") {
        tracing::warn!(tool = %tool, "Unknown AI tool, exporting standard JSON");
    }

    let options = filters.apply(config.export);
    let exporter = TrainingDataExporter::with_validator(
        MetadataValidator::with_scoring(config.scoring),
        options,
    );
    let text = exporter.export_for_ai_tool(&registry, format)?;
    write_output(&text, output.as_deref())?;

    Ok(ExitCode::Success)
}

/// Execute the component command
pub fn execute_component(
    tag: String,
    input: Option<PathBuf>,
    format: ComponentFormatArg,
    output: Option<PathBuf>,
) -> Result<ExitCode, MetadataError> {
    let registry = registry_from(input.as_deref())?;
    let metadata = registry.get(&tag).ok_or_else(|| unknown_component(&tag))?;

    let text = export_component_training(&tag, metadata, format.into())?;
    write_output(&text, output.as_deref())?;

    Ok(ExitCode::Success)
}

/// Execute the prompts command
pub fn execute_prompts(
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<ExitCode, MetadataError> {
    let registry = registry_from(input.as_deref())?;
    let prompts = generate_ai_prompts(&registry);
    let output_format = format.unwrap_or_default();

    match output {
        Some(path) => {
            let structured = match output_format {
                OutputFormat::Table => OutputFormat::Json,
                other => other,
            };
            let text = output::serialize(&prompts, structured)?.unwrap_or_default();
            write_output(&text, Some(&path))?;
        }
        None => output::render(&prompts, output_format, |out, prompts| {
            output::write_prompts_table(out, prompts)
        })?,
    }

    Ok(ExitCode::Success)
}

/// Execute the check-dataset command
pub fn execute_check_dataset(
    config: &PipelineConfig,
    dataset: PathBuf,
    format: Option<OutputFormat>,
) -> Result<ExitCode, MetadataError> {
    let value: serde_json::Value = load_document(&dataset)?;
    let result = MetadataValidator::with_scoring(config.scoring.clone()).validate_training_dataset_json(&value);

    output::render(&result, format.unwrap_or_default(), |out, result| {
        output::write_dataset_table(out, result)
    })?;

    Ok(ExitCode::from_validation_result(
        !result.errors.is_empty(),
        !result.warnings.is_empty(),
    ))
}
