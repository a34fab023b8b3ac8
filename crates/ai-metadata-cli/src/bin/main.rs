//! AI Metadata CLI
//!
//! # Usage
//!
//! ```bash
//! # Validate a metadata registry
//! ai-metadata validate --input components.yaml
//!
//! # Audit a captured element against its metadata
//! ai-metadata audit --element button.json --input components.yaml
//!
//! # Export Cursor rules for components scoring at least 90
//! ai-metadata export --input components.yaml --tool cursor-ide --min-quality-score 90 -o .cursorrules
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Findings include errors
//! - 2: Findings include warnings
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use ai_metadata_cli::{run_cli, MetadataCli};
use tracing::Level;

fn main() {
    let cli = MetadataCli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
