//! CLI module for the AI metadata pipeline
//!
//! Loads metadata registries, element snapshots and datasets from disk, runs
//! the validator or exporter over them and renders the results.

pub mod commands;
pub mod output;

pub use commands::{MetadataCli, MetadataCommands};
pub use output::OutputFormat;

use ai_metadata_core::MetadataError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution, nothing to report
    Success = 0,
    /// Findings include errors
    ValidationError = 1,
    /// Findings include warnings but no errors
    ValidationWarning = 2,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from finding counts
    pub fn from_validation_result(has_errors: bool, has_warnings: bool) -> Self {
        if has_errors {
            ExitCode::ValidationError
        } else if has_warnings {
            ExitCode::ValidationWarning
        } else {
            ExitCode::Success
        }
    }

    /// Exit code for an operational failure
    pub fn from_error(error: &MetadataError) -> Self {
        match error {
            MetadataError::FileError(_) => ExitCode::FileError,
            e if e.is_user_error() => ExitCode::InvalidInput,
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: MetadataCli) -> Result<ExitCode, MetadataError> {
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        MetadataCommands::Validate {
            input,
            component,
            format,
        } => commands::execute_validate(&config, input, component, format),
        MetadataCommands::Audit {
            element,
            component,
            input,
            format,
        } => commands::execute_audit(&config, element, component, input, format),
        MetadataCommands::Report { input, format } => {
            commands::execute_report(&config, input, format)
        }
        MetadataCommands::Export {
            input,
            tool,
            output,
            filters,
        } => commands::execute_export(config, input, tool, output, filters),
        MetadataCommands::Component {
            tag,
            input,
            format,
            output,
        } => commands::execute_component(tag, input, format, output),
        MetadataCommands::Prompts {
            input,
            format,
            output,
        } => commands::execute_prompts(input, format, output),
        MetadataCommands::CheckDataset { dataset, format } => {
            commands::execute_check_dataset(&config, dataset, format)
        }
    }
}
