//! Loading metadata registries, element snapshots and configs from disk
//!
//! The pipeline itself never touches the filesystem. These helpers exist for
//! callers (the CLI, build scripts) that keep metadata in JSON, YAML or TOML
//! files; the format is chosen by file extension.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::contracts::ComponentRegistry;
use crate::error::{MetadataError, Result};

/// Decode a document according to the extension of `path`
pub fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => serde_json::from_str(content)
            .map_err(|e| MetadataError::ParseError(format!("Invalid JSON: {}", e))),
        "yaml" | "yml" => serde_yaml::from_str(content)
            .map_err(|e| MetadataError::ParseError(format!("Invalid YAML: {}", e))),
        "toml" => toml::from_str(content)
            .map_err(|e| MetadataError::ParseError(format!("Invalid TOML: {}", e))),
        _ => Err(MetadataError::InvalidInput(format!(
            "Unsupported file format: {}. Supported formats: json, yaml, yml, toml",
            extension
        ))),
    }
}

/// Read and decode a document from disk
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MetadataError::FileError(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    parse_document(path, &content)
}

/// Load a tag name → metadata map
pub fn load_registry(path: &Path) -> Result<ComponentRegistry> {
    let registry: ComponentRegistry = load_document(path)?;
    tracing::debug!(
        path = %path.display(),
        components = registry.len(),
        "Loaded metadata registry"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::ComponentCategory;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_registry() {
        let yaml = r#"
ui-button:
  purpose: Primary action trigger for forms
  category: atom
  usagePatterns:
    - form submission
"#;
        let registry: ComponentRegistry = parse_document(Path::new("meta.yaml"), yaml).unwrap();
        let button = &registry["ui-button"];
        assert_eq!(button.category, Some(ComponentCategory::Atom));
        assert_eq!(button.usage_patterns, vec!["form submission".to_string()]);
    }

    #[test]
    fn test_parse_toml_registry() {
        let toml = r#"
[ui-card]
purpose = "Groups related content"
category = "molecule"
antiPatterns = ["Nesting cards"]
"#;
        let registry: ComponentRegistry = parse_document(Path::new("meta.toml"), toml).unwrap();
        assert_eq!(registry["ui-card"].anti_patterns.len(), 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = parse_document::<ComponentRegistry>(Path::new("meta.xml"), "").unwrap_err();
        assert!(matches!(err, MetadataError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_document::<ComponentRegistry>(Path::new("meta.json"), "{").unwrap_err();
        assert!(matches!(err, MetadataError::ParseError(_)));
    }

    #[test]
    fn test_load_registry_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"ui-switch": {{"purpose": "Toggle a binary setting", "semanticRole": "switch"}}}}"#
        )
        .unwrap();

        let registry = load_registry(file.path()).unwrap();
        assert_eq!(
            registry["ui-switch"].semantic_role.as_deref(),
            Some("switch")
        );
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_registry(Path::new("/nonexistent/meta.json")).unwrap_err();
        assert!(matches!(err, MetadataError::FileError(_)));
    }
}
