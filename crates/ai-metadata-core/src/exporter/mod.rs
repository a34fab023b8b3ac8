//! Training data exporter
//!
//! Projects metadata records into a [`TrainingDataset`] (synthesized examples,
//! anti-examples, relationships, global patterns, framework guidance) and
//! renders datasets into the formats AI tools consume.

pub mod formats;
pub mod guidance;

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

pub use formats::{AiToolFormat, ComponentExportFormat};

use crate::config::ExportOptions;
use crate::contracts::{
    AntiExample, ComponentMetadata, ComponentRegistry, ComponentRelationship,
    ComponentTrainingData, ExampleKind, Framework, GlobalPattern, RelationshipKind,
    TrainingDataset, TrainingExample,
};
use crate::error::Result;
use crate::validator::MetadataValidator;

/// Usage pattern that yields the form-submission global pattern
const FORM_SUBMISSION: &str = "form submission";
/// Usage pattern that yields the modal-trigger global pattern
const MODAL_TRIGGERS: &str = "modal triggers";

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("invalid regex pattern"))
}

/// Lowercase, dash-separated form of a free-text pattern
pub fn slugify(text: &str) -> String {
    slug_regex()
        .replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Builds training datasets from metadata registries
pub struct TrainingDataExporter {
    validator: MetadataValidator,
    options: ExportOptions,
}

impl Default for TrainingDataExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingDataExporter {
    /// Exporter with default options and scoring
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self::with_validator(MetadataValidator::new(), options)
    }

    /// Exporter that filters with a custom validator
    pub fn with_validator(validator: MetadataValidator, options: ExportOptions) -> Self {
        Self { validator, options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a dataset stamped with the current time
    pub fn export_training_dataset(&self, registry: &ComponentRegistry) -> TrainingDataset {
        self.export_training_dataset_at(registry, Utc::now())
    }

    /// Export a dataset stamped with `created`
    pub fn export_training_dataset_at(
        &self,
        registry: &ComponentRegistry,
        created: DateTime<Utc>,
    ) -> TrainingDataset {
        let mut components = Vec::with_capacity(registry.len());

        for (tag_name, metadata) in registry {
            if self.options.validate_quality {
                let result = self.validator.validate_component_metadata(metadata);
                if result.score < self.options.min_quality_score {
                    tracing::warn!(
                        tag = %tag_name,
                        score = result.score,
                        min_quality_score = self.options.min_quality_score,
                        "Skipping component below quality threshold"
                    );
                    continue;
                }
            }

            components.push(self.component_training_data(tag_name, metadata));
        }

        let global_patterns = if self.options.include_global_patterns {
            global_patterns(registry)
        } else {
            Vec::new()
        };

        let dataset = TrainingDataset {
            version: TrainingDataset::version_for(&created),
            created,
            components,
            global_patterns,
            framework_guidance: guidance::framework_guidance(),
        };

        tracing::info!(
            version = %dataset.version,
            components = dataset.components.len(),
            examples = dataset.example_count(),
            anti_examples = dataset.anti_example_count(),
            "Exported training dataset"
        );
        dataset
    }

    /// Export and render for one AI tool
    pub fn export_for_ai_tool(
        &self,
        registry: &ComponentRegistry,
        format: AiToolFormat,
    ) -> Result<String> {
        let dataset = self.export_training_dataset(registry);
        formats::render(format, &dataset)
    }

    /// Training data for one component, honoring the include options
    pub fn component_training_data(
        &self,
        tag_name: &str,
        metadata: &ComponentMetadata,
    ) -> ComponentTrainingData {
        ComponentTrainingData {
            tag_name: tag_name.to_string(),
            metadata: metadata.clone(),
            examples: training_examples(tag_name, metadata),
            anti_examples: if self.options.include_anti_examples {
                anti_examples(tag_name, metadata)
            } else {
                Vec::new()
            },
            relationships: if self.options.include_relationships {
                relationships(tag_name, metadata)
            } else {
                Vec::new()
            },
        }
    }
}

/// Example source for `framework`, or a bare tag when the record has none
fn example_code(tag_name: &str, metadata: &ComponentMetadata, framework: Framework) -> String {
    metadata
        .code_example(framework)
        .map(str::to_string)
        .unwrap_or_else(|| format!("<{tag}></{tag}>", tag = tag_name))
}

fn training_examples(tag_name: &str, metadata: &ComponentMetadata) -> Vec<TrainingExample> {
    let purpose = metadata.purpose.as_deref().unwrap_or_default();
    let category = metadata
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "uncategorized".to_string());
    let mut examples = Vec::new();

    for (index, pattern) in metadata.usage_patterns.iter().enumerate() {
        let framework = Framework::ALL[index % Framework::ALL.len()];
        examples.push(TrainingExample {
            id: format!("{}-usage-{}", tag_name, index),
            kind: ExampleKind::BestPractice,
            framework,
            scenario: pattern.clone(),
            code: example_code(tag_name, metadata, framework),
            explanation: format!("Use {} for {}. {}", tag_name, pattern, purpose)
                .trim_end()
                .to_string(),
            tags: vec![
                ExampleKind::BestPractice.to_string(),
                category.clone(),
                slugify(pattern),
            ],
        });
    }

    for (index, guideline) in metadata.a11y_guidelines.iter().enumerate() {
        examples.push(TrainingExample {
            id: format!("{}-a11y-{}", tag_name, index),
            kind: ExampleKind::Accessibility,
            framework: Framework::Vanilla,
            scenario: format!("Accessible {}", tag_name),
            code: example_code(tag_name, metadata, Framework::Vanilla),
            explanation: guideline.clone(),
            tags: vec![ExampleKind::Accessibility.to_string(), slugify(guideline)],
        });
    }

    for (index, hint) in metadata.performance_hints.iter().enumerate() {
        examples.push(TrainingExample {
            id: format!("{}-perf-{}", tag_name, index),
            kind: ExampleKind::Performance,
            framework: Framework::Vanilla,
            scenario: format!("Performant {}", tag_name),
            code: example_code(tag_name, metadata, Framework::Vanilla),
            explanation: hint.clone(),
            tags: vec![ExampleKind::Performance.to_string(), slugify(hint)],
        });
    }

    examples
}

fn anti_examples(tag_name: &str, metadata: &ComponentMetadata) -> Vec<AntiExample> {
    metadata
        .anti_patterns
        .iter()
        .enumerate()
        .map(|(index, anti_pattern)| AntiExample {
            id: format!("{}-anti-{}", tag_name, index),
            anti_pattern: anti_pattern.clone(),
            bad_code: format!(
                "<!-- Anti-pattern: {} -->\n<{tag}></{tag}>",
                anti_pattern,
                tag = tag_name
            ),
            good_code: example_code(tag_name, metadata, Framework::Vanilla),
            explanation: format!("Avoid: {}", anti_pattern),
        })
        .collect()
}

fn relationships(tag_name: &str, metadata: &ComponentMetadata) -> Vec<ComponentRelationship> {
    let contained_by = metadata
        .parent_components
        .iter()
        .map(|parent| ComponentRelationship {
            kind: RelationshipKind::Contains,
            source: parent.clone(),
            target: tag_name.to_string(),
            description: format!("{} contains {}", parent, tag_name),
        });
    let uses = metadata
        .child_components
        .iter()
        .map(|child| ComponentRelationship {
            kind: RelationshipKind::Uses,
            source: tag_name.to_string(),
            target: child.clone(),
            description: format!("{} uses {}", tag_name, child),
        });
    contained_by.chain(uses).collect()
}

/// First tag, in registry order, with a usage pattern mentioning `needle`
fn first_with_pattern<'a>(registry: &'a ComponentRegistry, needle: &str) -> Option<&'a str> {
    registry
        .iter()
        .find(|(_, metadata)| {
            metadata
                .usage_patterns
                .iter()
                .any(|p| p.to_lowercase().contains(needle))
        })
        .map(|(tag, _)| tag.as_str())
}

fn global_patterns(registry: &ComponentRegistry) -> Vec<GlobalPattern> {
    let mut patterns = Vec::new();

    if let Some(tag) = first_with_pattern(registry, FORM_SUBMISSION) {
        patterns.push(GlobalPattern {
            name: "form-submission".to_string(),
            description: "Form with a submit action".to_string(),
            components: vec![tag.to_string()],
            template: format!(
                "<form>\n  <!-- form fields -->\n  <{tag} type=\"submit\">Submit</{tag}>\n</form>",
                tag = tag
            ),
        });
    }

    if let Some(tag) = first_with_pattern(registry, MODAL_TRIGGERS) {
        patterns.push(GlobalPattern {
            name: "modal-trigger".to_string(),
            description: "Control that opens a modal dialog".to_string(),
            components: vec![tag.to_string(), "ui-modal".to_string()],
            template: format!(
                "<{tag} aria-haspopup=\"dialog\" aria-controls=\"dialog-id\">Open</{tag}>\n<ui-modal id=\"dialog-id\">\n  <!-- dialog content -->\n</ui-modal>",
                tag = tag
            ),
        });
    }

    patterns
}

/// [`TrainingDataExporter::export_training_dataset`] with the given options
pub fn export_training_dataset(registry: &ComponentRegistry, options: ExportOptions) -> TrainingDataset {
    TrainingDataExporter::with_options(options).export_training_dataset(registry)
}

/// [`TrainingDataExporter::export_for_ai_tool`] with the given options
pub fn export_for_ai_tool(
    registry: &ComponentRegistry,
    format: AiToolFormat,
    options: ExportOptions,
) -> Result<String> {
    TrainingDataExporter::with_options(options).export_for_ai_tool(registry, format)
}

/// Export one component without quality filtering
pub fn export_component_training(
    tag_name: &str,
    metadata: &ComponentMetadata,
    format: ComponentExportFormat,
) -> Result<String> {
    let data = TrainingDataExporter::new().component_training_data(tag_name, metadata);
    formats::render_component(format, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::ComponentCategory;

    fn button() -> ComponentMetadata {
        ComponentMetadata::new()
            .with_purpose("Primary action trigger")
            .with_category(ComponentCategory::Atom)
            .with_usage_patterns(["Form submission", "Modal triggers", "Toolbar actions", "Wizard steps", "Card CTA"])
            .with_anti_patterns(["Navigation links"])
            .with_code_example(Framework::Vanilla, "<ui-button variant=\"primary\">Save</ui-button>")
            .with_a11y_guidelines(["Visible focus ring"])
            .with_performance_hints(["No runtime dependencies"])
            .with_parent_components(["ui-card"])
            .with_child_components(["ui-icon"])
    }

    fn permissive() -> TrainingDataExporter {
        TrainingDataExporter::with_options(ExportOptions::builder().validate_quality(false).build())
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Form submission"), "form-submission");
        assert_eq!(slugify("  Icon-only (no label)! "), "icon-only-no-label");
    }

    #[test]
    fn test_usage_examples_cycle_frameworks() {
        let examples = training_examples("ui-button", &button());
        let frameworks: Vec<Framework> = examples
            .iter()
            .filter(|e| e.kind == ExampleKind::BestPractice)
            .map(|e| e.framework)
            .collect();
        assert_eq!(
            frameworks,
            vec![
                Framework::React,
                Framework::Vue,
                Framework::Angular,
                Framework::Vanilla,
                Framework::React
            ]
        );
        assert_eq!(examples.len(), 7);
        assert_eq!(examples[0].tags, vec!["best-practice", "atom", "form-submission"]);
        // no react example authored, so the bare tag is used
        assert_eq!(examples[0].code, "<ui-button></ui-button>");
        assert_eq!(examples[3].code, "<ui-button variant=\"primary\">Save</ui-button>");
    }

    #[test]
    fn test_anti_examples_pair_with_vanilla_example() {
        let anti = anti_examples("ui-button", &button());
        assert_eq!(anti.len(), 1);
        assert_eq!(anti[0].id, "ui-button-anti-0");
        assert!(anti[0].bad_code.contains("Anti-pattern: Navigation links"));
        assert_eq!(anti[0].good_code, "<ui-button variant=\"primary\">Save</ui-button>");
    }

    #[test]
    fn test_relationship_direction() {
        let rels = relationships("ui-button", &button());
        assert_eq!(rels[0].kind, RelationshipKind::Contains);
        assert_eq!((rels[0].source.as_str(), rels[0].target.as_str()), ("ui-card", "ui-button"));
        assert_eq!(rels[1].kind, RelationshipKind::Uses);
        assert_eq!((rels[1].source.as_str(), rels[1].target.as_str()), ("ui-button", "ui-icon"));
    }

    #[test]
    fn test_global_patterns() {
        let registry = ComponentRegistry::from([("ui-button".to_string(), button())]);
        let dataset = permissive().export_training_dataset(&registry);
        let names: Vec<&str> = dataset.global_patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["form-submission", "modal-trigger"]);
        assert!(dataset.global_patterns[0].template.contains("<ui-button type=\"submit\">"));
    }

    #[test]
    fn test_include_flags() {
        let options = ExportOptions::builder()
            .validate_quality(false)
            .include_anti_examples(false)
            .include_relationships(false)
            .include_global_patterns(false)
            .build();
        let registry = ComponentRegistry::from([("ui-button".to_string(), button())]);
        let dataset = export_training_dataset(&registry, options);
        let component = &dataset.components[0];
        assert!(component.anti_examples.is_empty());
        assert!(component.relationships.is_empty());
        assert!(dataset.global_patterns.is_empty());
        assert_eq!(dataset.framework_guidance.len(), 3);
    }

    #[test]
    fn test_quality_filter_skips_incomplete_records() {
        let registry = ComponentRegistry::from([
            ("ui-button".to_string(), button()),
            ("ui-empty".to_string(), ComponentMetadata::new()),
        ]);
        let dataset = TrainingDataExporter::with_options(
            ExportOptions::builder().min_quality_score(1).build(),
        )
        .export_training_dataset(&registry);
        assert!(dataset.component("ui-empty").is_none());
    }

    #[test]
    fn test_global_patterns_scan_filtered_components() {
        let registry = ComponentRegistry::from([(
            "ui-draft-button".to_string(),
            ComponentMetadata::new().with_usage_patterns(["Form submission"]),
        )]);
        let dataset = TrainingDataExporter::new().export_training_dataset(&registry);

        assert!(dataset.components.is_empty());
        assert_eq!(dataset.global_patterns.len(), 1);
        assert_eq!(dataset.global_patterns[0].components, vec!["ui-draft-button"]);
    }
}
