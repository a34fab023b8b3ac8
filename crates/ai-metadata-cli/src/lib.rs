//! AI Metadata CLI
//!
//! Command-line front end for the AI metadata pipeline in
//! [`ai_metadata_core`].
//!
//! ## Commands
//!
//! - `validate`: score metadata records and list missing fields
//! - `audit`: check a rendered element snapshot against its metadata
//! - `report`: aggregate quality report with AI readiness
//! - `export`: training dataset rendered for an AI tool
//! - `component`: training data for one component as JSON, Markdown or YAML
//! - `prompts`: system, component and pattern prompts
//! - `check-dataset`: validate a previously exported dataset
//!
//! Commands that take `--input` fall back to the built-in component catalog
//! when no registry file is given.

pub mod cli;

pub use cli::{ExitCode, MetadataCli, MetadataCommands, OutputFormat};

/// Run the CLI and map operational failures to exit codes
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use ai_metadata_cli::{MetadataCli, run_cli};
///
/// fn main() {
///     let cli = MetadataCli::parse();
///     let exit_code = run_cli(cli);
///     std::process::exit(exit_code.into());
/// }
/// ```
pub fn run_cli(cli: MetadataCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}
