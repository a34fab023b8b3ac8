//! Metadata quality rules
//!
//! Each rule looks at one aspect of a record and files errors, warnings or
//! suggestions. Rules never mutate the record and never fail.

use crate::contracts::{ComponentMetadata, Framework, MetadataField, REQUIRED_FIELDS};

/// Purposes shorter than this read as placeholders
pub const MIN_PURPOSE_CHARS: usize = 10;
pub const MIN_USAGE_PATTERNS: usize = 3;
pub const MIN_ANTI_PATTERNS: usize = 2;
pub const MIN_CONTEXTUAL_RULES: usize = 3;
/// Examples shorter than this cannot show real usage
pub const MIN_EXAMPLE_CHARS: usize = 20;
pub const MIN_PERFORMANCE_HINTS: usize = 2;

/// Messages collected while evaluating a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFindings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl MetadataFindings {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }
}

/// A single metadata quality rule
pub trait MetadataRule: Send + Sync {
    /// Rule identifier
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Evaluate the record, appending to `findings`
    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings);
}

/// The rules every validator starts with, in evaluation order
pub fn default_rules() -> Vec<Box<dyn MetadataRule>> {
    vec![
        Box::new(RequiredFieldsRule),
        Box::new(RecommendedFieldsRule),
        Box::new(ContentQualityRule),
        Box::new(FrameworkExamplesRule),
        Box::new(AccessibilityRule),
        Box::new(PerformanceRule),
    ]
}

/// Required fields must be present and non-empty
pub struct RequiredFieldsRule;

impl MetadataRule for RequiredFieldsRule {
    fn id(&self) -> &str {
        "required_fields"
    }

    fn name(&self) -> &str {
        "Required Field Presence"
    }

    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings) {
        for field in REQUIRED_FIELDS {
            if !metadata.is_present(field) {
                findings.error(format!("Missing required field: {}", field));
            }
        }
    }
}

/// Fields that improve generated code but are not mandatory
pub struct RecommendedFieldsRule;

impl MetadataRule for RecommendedFieldsRule {
    fn id(&self) -> &str {
        "recommended_fields"
    }

    fn name(&self) -> &str {
        "Recommended Field Presence"
    }

    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings) {
        if !metadata.is_present(MetadataField::SemanticRole) {
            findings.warning(format!(
                "Missing recommended field: {}",
                MetadataField::SemanticRole
            ));
        }
    }
}

/// Depth of the descriptive content
pub struct ContentQualityRule;

impl MetadataRule for ContentQualityRule {
    fn id(&self) -> &str {
        "content_quality"
    }

    fn name(&self) -> &str {
        "Content Quality"
    }

    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings) {
        if let Some(purpose) = metadata.purpose.as_deref() {
            let length = purpose.trim().chars().count();
            // Empty purposes are already a required-field error.
            if length > 0 && length < MIN_PURPOSE_CHARS {
                findings.warning(format!(
                    "Purpose description is too short (minimum {} characters)",
                    MIN_PURPOSE_CHARS
                ));
            }
        }

        let thin_lists = [
            (metadata.usage_patterns.len(), MIN_USAGE_PATTERNS, "usage patterns"),
            (metadata.anti_patterns.len(), MIN_ANTI_PATTERNS, "anti-patterns"),
            (metadata.contextual_rules.len(), MIN_CONTEXTUAL_RULES, "contextual rules"),
        ];
        for (count, minimum, label) in thin_lists {
            if count > 0 && count < minimum {
                findings.suggestion(format!(
                    "Consider adding more {} (at least {} recommended)",
                    label, minimum
                ));
            }
        }
    }
}

/// One substantial example per supported framework
pub struct FrameworkExamplesRule;

impl MetadataRule for FrameworkExamplesRule {
    fn id(&self) -> &str {
        "framework_examples"
    }

    fn name(&self) -> &str {
        "Framework Code Examples"
    }

    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings) {
        if metadata.code_examples.is_none() {
            return;
        }

        for framework in Framework::ALL {
            match metadata.code_example(framework) {
                None => findings.warning(format!("Missing {} code example", framework)),
                Some(code) if code.trim().chars().count() < MIN_EXAMPLE_CHARS => {
                    findings.warning(format!(
                        "{} code example is too short (minimum {} characters)",
                        framework, MIN_EXAMPLE_CHARS
                    ))
                }
                Some(_) => {}
            }
        }
    }
}

pub struct AccessibilityRule;

impl MetadataRule for AccessibilityRule {
    fn id(&self) -> &str {
        "accessibility"
    }

    fn name(&self) -> &str {
        "Accessibility Guidance"
    }

    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings) {
        if metadata.a11y_guidelines.is_empty() {
            findings.warning("No accessibility guidelines defined");
        }
        if metadata.aria_patterns.is_empty() {
            findings.suggestion("Consider documenting ARIA patterns");
        }
        if metadata.keyboard_interactions.is_empty() {
            findings.suggestion("Consider documenting keyboard interactions");
        }
    }
}

pub struct PerformanceRule;

impl MetadataRule for PerformanceRule {
    fn id(&self) -> &str {
        "performance"
    }

    fn name(&self) -> &str {
        "Performance Guidance"
    }

    fn evaluate(&self, metadata: &ComponentMetadata, findings: &mut MetadataFindings) {
        if metadata.performance_hints.len() < MIN_PERFORMANCE_HINTS {
            findings.suggestion(format!(
                "Consider adding more performance hints (at least {} recommended)",
                MIN_PERFORMANCE_HINTS
            ));
        }
        if metadata.bundle_impact.is_none() {
            findings.suggestion("Consider specifying bundle impact");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{AiPrompts, ComponentCategory};

    fn evaluate(rule: &dyn MetadataRule, metadata: &ComponentMetadata) -> MetadataFindings {
        let mut findings = MetadataFindings::default();
        rule.evaluate(metadata, &mut findings);
        findings
    }

    #[test]
    fn test_required_fields_on_empty_record() {
        let findings = evaluate(&RequiredFieldsRule, &ComponentMetadata::new());
        assert_eq!(findings.errors.len(), REQUIRED_FIELDS.len());
        assert!(findings
            .errors
            .contains(&"Missing required field: aiPrompts".to_string()));
    }

    #[test]
    fn test_required_fields_satisfied() {
        let metadata = ComponentMetadata::new()
            .with_purpose("Groups related content")
            .with_category(ComponentCategory::Molecule)
            .with_usage_patterns(["a"])
            .with_anti_patterns(["b"])
            .with_contextual_rules(["c"])
            .with_ai_prompts(AiPrompts::default())
            .with_code_example(Framework::Vanilla, "<ui-card></ui-card>");
        assert!(evaluate(&RequiredFieldsRule, &metadata).errors.is_empty());
    }

    #[test]
    fn test_semantic_role_is_only_a_warning() {
        let findings = evaluate(&RecommendedFieldsRule, &ComponentMetadata::new());
        assert!(findings.errors.is_empty());
        assert_eq!(
            findings.warnings,
            vec!["Missing recommended field: semanticRole".to_string()]
        );
    }

    #[test]
    fn test_short_purpose_warns() {
        let metadata = ComponentMetadata::new().with_purpose("Button");
        let findings = evaluate(&ContentQualityRule, &metadata);
        assert_eq!(findings.warnings.len(), 1);
    }

    #[test]
    fn test_thin_lists_suggest_but_empty_lists_do_not() {
        let metadata = ComponentMetadata::new()
            .with_usage_patterns(["form submission"])
            .with_anti_patterns(["icon-only without label"]);
        let findings = evaluate(&ContentQualityRule, &metadata);
        assert_eq!(findings.suggestions.len(), 2);
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_framework_examples() {
        let metadata = ComponentMetadata::new()
            .with_code_example(Framework::React, "<UiButton variant=\"primary\">Save</UiButton>")
            .with_code_example(Framework::Vue, "<ui-button/>");
        let findings = evaluate(&FrameworkExamplesRule, &metadata);
        assert_eq!(
            findings.warnings,
            vec![
                "vue code example is too short (minimum 20 characters)".to_string(),
                "Missing angular code example".to_string(),
                "Missing vanilla code example".to_string(),
            ]
        );
    }

    #[test]
    fn test_framework_examples_skipped_without_examples() {
        let findings = evaluate(&FrameworkExamplesRule, &ComponentMetadata::new());
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_accessibility_and_performance() {
        let metadata = ComponentMetadata::new();
        let a11y = evaluate(&AccessibilityRule, &metadata);
        assert_eq!(a11y.warnings.len(), 1);
        assert_eq!(a11y.suggestions.len(), 2);

        let perf = evaluate(&PerformanceRule, &metadata);
        assert_eq!(perf.suggestions.len(), 2);
    }
}
