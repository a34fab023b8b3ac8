//! Integration tests for the AI metadata CLI
//!
//! Runs commands end to end against registry, element and dataset files in
//! a temporary directory.

use ai_metadata_cli::cli::{self, ExitCode};
use ai_metadata_cli::{run_cli, MetadataCli};
use ai_metadata_core::catalog::builtin_registry;
use ai_metadata_core::{ComponentMetadata, MetadataError};
use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write the built-in catalog, plus an empty record, as a JSON registry
fn write_registry(dir: &Path, with_empty: bool) -> PathBuf {
    let mut registry = builtin_registry();
    if with_empty {
        registry.insert("ui-empty".to_string(), ComponentMetadata::new());
    }
    let path = dir.join("components.json");
    std::fs::write(&path, serde_json::to_string_pretty(&registry).unwrap()).unwrap();
    path
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> Result<ExitCode, MetadataError> {
    let mut argv = vec!["ai-metadata"];
    argv.extend_from_slice(args);
    cli::run(MetadataCli::parse_from(argv))
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_validate_builtin_catalog_succeeds() {
    assert_eq!(run(&["validate"]).unwrap(), ExitCode::Success);
}

#[test]
fn test_validate_registry_with_missing_fields() {
    let dir = TempDir::new().unwrap();
    let registry = write_registry(dir.path(), true);

    let code = run(&["validate", "--input", arg(&registry), "--format", "json"]).unwrap();
    assert_eq!(code, ExitCode::ValidationError);

    let code = run(&["validate", "--input", arg(&registry), "--component", "ui-switch"]).unwrap();
    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_validate_unknown_component() {
    let err = run(&["validate", "--component", "ui-missing"]).unwrap_err();
    assert!(matches!(err, MetadataError::InvalidInput(_)));
}

#[test]
fn test_missing_registry_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let err = run(&["report", "--input", arg(&missing)]).unwrap_err();
    assert!(matches!(err, MetadataError::FileError(_)));

    let cli = MetadataCli::parse_from(["ai-metadata", "report", "--input", arg(&missing)]);
    assert_eq!(run_cli(cli), ExitCode::FileError);
}

#[test]
fn test_unsupported_registry_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "components.txt", "{}");

    let cli = MetadataCli::parse_from(["ai-metadata", "validate", "--input", arg(&path)]);
    assert_eq!(run_cli(cli), ExitCode::InvalidInput);
}

#[test]
fn test_audit_exit_codes() {
    let dir = TempDir::new().unwrap();

    let bare = write_file(dir.path(), "picker.json", r#"{"tagName": "ui-date-picker"}"#);
    assert_eq!(
        run(&["audit", "--element", arg(&bare)]).unwrap(),
        ExitCode::ValidationWarning
    );

    let mismatch = write_file(
        dir.path(),
        "button.yaml",
        "tagName: ui-button\nattributes:\n  role: link\n",
    );
    assert_eq!(
        run(&["audit", "--element", arg(&mismatch), "--format", "yaml"]).unwrap(),
        ExitCode::ValidationError
    );
}

#[test]
fn test_audit_against_named_component() {
    let dir = TempDir::new().unwrap();
    let element = write_file(
        dir.path(),
        "element.json",
        r#"{"tagName": "div", "attributes": {"role": "link"}}"#,
    );

    let code = run(&["audit", "--element", arg(&element), "--component", "ui-button"]).unwrap();
    assert_eq!(code, ExitCode::ValidationError);

    let err = run(&["audit", "--element", arg(&element)]).unwrap_err();
    assert!(matches!(err, MetadataError::InvalidInput(_)));
}

#[test]
fn test_report_exit_codes() {
    let dir = TempDir::new().unwrap();
    let registry = write_registry(dir.path(), true);

    assert_eq!(run(&["report"]).unwrap(), ExitCode::Success);
    assert_eq!(
        run(&["report", "--input", arg(&registry), "--format", "json"]).unwrap(),
        ExitCode::ValidationError
    );
}

#[test]
fn test_export_openai_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("train.jsonl");

    let code = run(&["export", "--tool", "openai-gpt", "--output", arg(&out)]).unwrap();
    assert_eq!(code, ExitCode::Success);

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(!text.is_empty());
    for line in text.lines() {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["messages"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn test_export_filters_and_config_file() {
    let dir = TempDir::new().unwrap();
    let registry = write_registry(dir.path(), true);
    let filtered = dir.path().join("filtered.json");
    let unfiltered = dir.path().join("unfiltered.json");

    run(&["export", "--input", arg(&registry), "-o", arg(&filtered)]).unwrap();
    let dataset: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&filtered).unwrap()).unwrap();
    assert_eq!(dataset["components"].as_array().unwrap().len(), 5);

    let config = write_file(dir.path(), "pipeline.toml", "[export]\nvalidate_quality = false\n");
    run(&[
        "export",
        "--input",
        arg(&registry),
        "--config",
        arg(&config),
        "--no-anti-examples",
        "-o",
        arg(&unfiltered),
    ])
    .unwrap();
    let dataset: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&unfiltered).unwrap()).unwrap();
    let components = dataset["components"].as_array().unwrap();
    assert_eq!(components.len(), 6);
    assert!(components
        .iter()
        .all(|c| c["antiExamples"].as_array().map_or(true, |a| a.is_empty())));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "pipeline.toml",
        "[scoring]\nhigh_threshold = 80\nmedium_threshold = 95\n",
    );

    let err = run(&["report", "--config", arg(&config)]).unwrap_err();
    assert!(matches!(err, MetadataError::ConfigError(_)));
}

#[test]
fn test_component_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("modal.md");

    let code = run(&["component", "ui-modal", "--format", "markdown", "-o", arg(&out)]).unwrap();
    assert_eq!(code, ExitCode::Success);
    assert!(std::fs::read_to_string(&out).unwrap().starts_with("# ui-modal"));
}

#[test]
fn test_prompts_to_file_are_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("prompts.json");

    run(&["prompts", "-o", arg(&out)]).unwrap();
    let prompts: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(prompts["system"].as_str().unwrap().len() > 0);
    assert_eq!(prompts["components"].as_object().unwrap().len(), 5);
}

#[test]
fn test_check_exported_dataset() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("dataset.json");
    run(&["export", "-o", arg(&dataset)]).unwrap();

    assert_eq!(
        run(&["check-dataset", arg(&dataset)]).unwrap(),
        ExitCode::Success
    );

    let empty = write_file(dir.path(), "empty.json", "{}");
    assert_eq!(
        run(&["check-dataset", arg(&empty), "--format", "json"]).unwrap(),
        ExitCode::ValidationError
    );
}
