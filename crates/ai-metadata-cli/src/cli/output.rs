//! Output formatting for the AI metadata CLI
//!
//! JSON and YAML output serialize the core result types directly; the table
//! format is a colored, human-readable rendering of the same data.

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::{self, Write};

use ai_metadata_core::{
    ComplianceResult, ComplianceStatus, DatasetValidationResult, IssueSeverity, MetadataError,
    PromptCollection, Quality, QualityReport, ReadinessLevel, ValidationResult,
};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Serialize `value` as JSON or YAML; `None` for the table format
pub fn serialize(value: &impl Serialize, format: OutputFormat) -> Result<Option<String>, MetadataError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(Some)
            .map_err(|e| MetadataError::SerializationError(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(Some)
            .map_err(|e| MetadataError::SerializationError(e.to_string())),
        OutputFormat::Table => Ok(None),
    }
}

/// Print `value` in a structured format, or call `table` for the table format
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> Result<(), MetadataError>
where
    T: Serialize,
    F: FnOnce(&mut dyn Write, &T),
{
    match serialize(value, format)? {
        Some(text) => println!("{}", text),
        None => {
            let mut stdout = io::stdout();
            table(&mut stdout, value);
            stdout.flush().ok();
        }
    }
    Ok(())
}

fn header(out: &mut dyn Write, title: &str) {
    writeln!(out).ok();
    writeln!(out, "{}", title.cyan().bold()).ok();
    writeln!(out, "{}", "=".repeat(60)).ok();
}

fn quality_label(quality: Quality) -> ColoredString {
    match quality {
        Quality::High => "high".green().bold(),
        Quality::Medium => "medium".yellow().bold(),
        Quality::Low => "low".red().bold(),
    }
}

fn list(out: &mut dyn Write, icon: ColoredString, items: &[String]) {
    for item in items {
        writeln!(out, "  {} {}", icon, item).ok();
    }
}

/// Per-component metadata validation results
pub fn write_validation_table(out: &mut dyn Write, results: &[(String, ValidationResult)]) {
    header(out, "Metadata Validation");

    for (tag, result) in results {
        let status = if result.valid { "+".green() } else { "x".red() };
        writeln!(out).ok();
        writeln!(
            out,
            "{} {}  score {}  quality {}  completeness {}%",
            status,
            tag.bold(),
            result.score,
            quality_label(result.quality),
            result.completeness
        )
        .ok();
        list(out, "x".red(), &result.errors);
        list(out, "!".yellow(), &result.warnings);
        list(out, "i".blue(), &result.suggestions);
    }

    let errors: usize = results.iter().map(|(_, r)| r.errors.len()).sum();
    let warnings: usize = results.iter().map(|(_, r)| r.warnings.len()).sum();
    writeln!(out).ok();
    writeln!(
        out,
        "{} components, {} errors, {} warnings",
        results.len(),
        errors.to_string().red(),
        warnings.to_string().yellow()
    )
    .ok();
}

/// Element compliance audit
pub fn write_compliance_table(out: &mut dyn Write, tag: &str, result: &ComplianceResult) {
    header(out, &format!("Compliance: {}", tag));

    let status = match result.status {
        ComplianceStatus::Compliant => "compliant".green().bold(),
        ComplianceStatus::Partial => "partial".yellow().bold(),
        ComplianceStatus::NonCompliant => "non-compliant".red().bold(),
    };
    writeln!(out, "Score {}  status {}", result.score, status).ok();

    if !result.issues.is_empty() {
        writeln!(out).ok();
        writeln!(out, "{}", "Issues:".cyan().bold()).ok();
        for issue in &result.issues {
            let label = match issue.severity {
                IssueSeverity::Error => "ERROR".red().bold(),
                IssueSeverity::Warning => "WARNING".yellow().bold(),
                IssueSeverity::Info => "INFO".blue().bold(),
            };
            writeln!(out, "  {} [{}] {}", label, issue.category, issue.description).ok();
            writeln!(out, "    Fix: {}", issue.fix.green()).ok();
            if let Some(example) = &issue.example {
                writeln!(out, "    Example: {}", example.dimmed()).ok();
            }
        }
    }

    if !result.strengths.is_empty() {
        writeln!(out).ok();
        writeln!(out, "{}", "Strengths:".cyan().bold()).ok();
        list(out, "+".green(), &result.strengths);
    }
    if !result.suggestions.is_empty() {
        writeln!(out).ok();
        writeln!(out, "{}", "Suggestions:".cyan().bold()).ok();
        list(out, "i".blue(), &result.suggestions);
    }
}

/// Aggregate quality report
pub fn write_report_table(out: &mut dyn Write, report: &QualityReport) {
    header(out, "AI Readiness Report");

    let readiness = match report.readiness_for_ai {
        ReadinessLevel::ProductionReady => "production-ready".green().bold(),
        ReadinessLevel::DevelopmentReady => "development-ready".yellow().bold(),
        ReadinessLevel::NeedsImprovement => "needs-improvement".yellow(),
        ReadinessLevel::NotReady => "not-ready".red().bold(),
    };
    writeln!(out, "Readiness:     {}", readiness).ok();
    writeln!(out, "Components:    {}", report.total_components).ok();
    writeln!(out, "Average score: {:.1}", report.average_score).ok();
    writeln!(
        out,
        "Errors:        {}   Warnings: {}",
        report.total_errors.to_string().red(),
        report.total_warnings.to_string().yellow()
    )
    .ok();

    if !report.components.is_empty() {
        writeln!(out).ok();
        writeln!(out, "{:<24} {:>5}  {:<8} {:>6} {:>8}", "COMPONENT", "SCORE", "QUALITY", "ERRORS", "WARNINGS").ok();
        writeln!(out, "{}", "-".repeat(60)).ok();
        for summary in &report.components {
            writeln!(
                out,
                "{:<24} {:>5}  {:<8} {:>6} {:>8}",
                summary.tag_name,
                summary.score,
                summary.quality.to_string(),
                summary.error_count,
                summary.warning_count
            )
            .ok();
        }
    }

    if !report.recommendations.is_empty() {
        writeln!(out).ok();
        writeln!(out, "{}", "Recommendations:".cyan().bold()).ok();
        list(out, "i".blue(), &report.recommendations);
    }
}

/// Training dataset check
pub fn write_dataset_table(out: &mut dyn Write, result: &DatasetValidationResult) {
    header(out, "Training Dataset");

    let status = if result.valid { "+".green() } else { "x".red() };
    writeln!(
        out,
        "{} {} components, quality {}",
        status,
        result.component_count,
        quality_label(result.quality)
    )
    .ok();
    list(out, "x".red(), &result.errors);
    list(out, "!".yellow(), &result.warnings);
    list(out, "i".blue(), &result.suggestions);
}

/// Prompt collection
pub fn write_prompts_table(out: &mut dyn Write, prompts: &PromptCollection) {
    header(out, "System Prompt");
    writeln!(out, "{}", prompts.system).ok();

    for (tag, component) in &prompts.components {
        header(out, tag);
        writeln!(out, "{}", "Generation:".bold()).ok();
        writeln!(out, "{}", component.generation).ok();
        writeln!(out, "{}", "Validation:".bold()).ok();
        writeln!(out, "{}", component.validation).ok();
    }

    if !prompts.patterns.is_empty() {
        header(out, "Patterns");
        for (name, prompt) in &prompts.patterns {
            writeln!(out, "{}: {}", name.bold(), prompt).ok();
        }
    }
}
