//! Property-based tests for scoring and export invariants

use proptest::prelude::*;

use ai_metadata_core::catalog::{builtin_registry, switch};
use ai_metadata_core::contracts::*;
use ai_metadata_core::exporter::slugify;
use ai_metadata_core::*;

/// Remove the required fields selected by `mask` (bit i → REQUIRED_FIELDS[i])
fn strip_required(mut metadata: ComponentMetadata, mask: u8) -> (ComponentMetadata, usize) {
    let mut removed = 0;
    for (i, field) in REQUIRED_FIELDS.iter().enumerate() {
        if mask & (1 << i) == 0 {
            continue;
        }
        removed += 1;
        match field {
            MetadataField::Purpose => metadata.purpose = None,
            MetadataField::Category => metadata.category = None,
            MetadataField::UsagePatterns => metadata.usage_patterns.clear(),
            MetadataField::AntiPatterns => metadata.anti_patterns.clear(),
            MetadataField::ContextualRules => metadata.contextual_rules.clear(),
            MetadataField::AiPrompts => metadata.ai_prompts = None,
            MetadataField::CodeExamples => metadata.code_examples = None,
            _ => {}
        }
    }
    (metadata, removed)
}

fn any_registry() -> impl Strategy<Value = ComponentRegistry> {
    prop::collection::vec(0u8..128, 1..8).prop_map(|masks| {
        let catalog: Vec<ComponentMetadata> = builtin_registry().into_values().collect();
        masks
            .into_iter()
            .enumerate()
            .map(|(i, mask)| {
                let base = catalog[i % catalog.len()].clone();
                (format!("ui-generated-{}", i), strip_required(base, mask).0)
            })
            .collect()
    })
}

proptest! {
    /// Each missing required field costs exactly one error and 15 points.
    #[test]
    fn each_error_costs_fifteen(mask in 0u8..128) {
        let (metadata, removed) = strip_required(switch(), mask);
        let result = validate_component_metadata(&metadata);

        prop_assert_eq!(result.errors.len(), removed);
        prop_assert!(result.warnings.is_empty());
        prop_assert_eq!(
            ScoringConfig::default().raw_metadata_score(result.errors.len(), result.warnings.len()),
            100 - 15 * removed as i64
        );
        prop_assert_eq!(result.valid, removed == 0);
    }

    /// Scores stay in range and never exceed completeness.
    #[test]
    fn score_bounded_by_completeness(mask in 0u8..128) {
        let (metadata, _) = strip_required(switch(), mask);
        let result = validate_component_metadata(&metadata);
        prop_assert!(result.score <= 100);
        prop_assert!(result.score <= result.completeness);
    }

    /// Quality is a pure function of the score.
    #[test]
    fn quality_buckets(score in 0u8..=100) {
        let expected = if score >= 90 {
            Quality::High
        } else if score >= 70 {
            Quality::Medium
        } else {
            Quality::Low
        };
        prop_assert_eq!(ScoringConfig::default().quality(score), expected);
    }

    /// Filtered exports keep exactly the components at or above the threshold.
    #[test]
    fn filter_respects_threshold(registry in any_registry(), min_score in 0u8..=100) {
        let options = ExportOptions::builder().min_quality_score(min_score).build();
        let dataset = export_training_dataset(&registry, options);

        for (tag, metadata) in &registry {
            let score = validate_component_metadata(metadata).score;
            prop_assert_eq!(dataset.component(tag).is_some(), score >= min_score);
        }
    }

    /// A matching role always yields the strength and no semantics issue.
    #[test]
    fn matching_role_is_a_strength(role in "[a-z]{3,12}", extra in prop::option::of("[a-z-]{1,12}")) {
        let metadata = ComponentMetadata::new().with_semantic_role(role.clone());
        let mut element = ElementSnapshot::new("ui-widget").with_attribute("role", role);
        if let Some(name) = extra {
            element = element.with_attribute(format!("data-{}", name), "x");
        }

        let result = validate_component_implementation(&element, &metadata);
        prop_assert!(result.strengths.iter().any(|s| s == "Correct semantic role implementation"));
        prop_assert!(result.issues.iter().all(|i| i.category != IssueCategory::Semantics));
    }

    /// Slugs are lowercase, dash-separated and trimmed.
    #[test]
    fn slugs_are_clean(text in ".{0,40}") {
        let slug = slugify(&text);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }
}
