//! Component metadata records
//!
//! A metadata record describes one UI component for AI consumption: what it
//! is for, how to use it, what to avoid, and how to write it in each supported
//! framework.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tag name → metadata, ordered by tag name so every derived artifact is
/// deterministic.
pub type ComponentRegistry = BTreeMap<String, ComponentMetadata>;

/// Atomic-design category of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Atom,
    Molecule,
    Organism,
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCategory::Atom => write!(f, "atom"),
            ComponentCategory::Molecule => write!(f, "molecule"),
            ComponentCategory::Organism => write!(f, "organism"),
        }
    }
}

/// How much damage a misuse of the component does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criticality::Low => write!(f, "low"),
            Criticality::Medium => write!(f, "medium"),
            Criticality::High => write!(f, "high"),
            Criticality::Critical => write!(f, "critical"),
        }
    }
}

/// Bundle size cost of pulling the component in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleImpact {
    Minimal,
    Moderate,
    Significant,
}

impl fmt::Display for BundleImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleImpact::Minimal => write!(f, "minimal"),
            BundleImpact::Moderate => write!(f, "moderate"),
            BundleImpact::Significant => write!(f, "significant"),
        }
    }
}

/// Frameworks every record must ship a code example for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Vanilla,
}

impl Framework {
    /// All frameworks, in the order examples cycle through them
    pub const ALL: [Framework; 4] = [
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::Vanilla,
    ];

    /// Key used in `codeExamples` and in framework guidance
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Vanilla => "vanilla",
        }
    }

    /// Language hint for fenced code blocks
    pub fn code_fence(&self) -> &'static str {
        match self {
            Framework::React => "tsx",
            Framework::Vue => "vue",
            Framework::Angular => "typescript",
            Framework::Vanilla => "html",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prompt fragments handed to AI assistants for this component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPrompts {
    #[serde(default)]
    pub code_generation: String,
    #[serde(default)]
    pub accessibility: String,
    #[serde(default)]
    pub performance: String,
    #[serde(default)]
    pub design_system: String,
}

/// Metadata describing one UI component for AI consumption
///
/// Every field is optional at the type level. A record becomes trustworthy
/// only after the validator accepts it (see [`ValidatedMetadata`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ComponentCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<Criticality>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usage_patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anti_patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contextual_rules: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompts: Option<AiPrompts>,

    /// Framework name → example source. Keys beyond the four required
    /// frameworks are kept and exported as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub design_tokens: BTreeMap<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance_hints: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_impact: Option<BundleImpact>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub a11y_guidelines: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aria_patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyboard_interactions: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub composition_patterns: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_components: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_components: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testing_patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_test_cases: Vec<String>,
}

fn collect_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl ComponentMetadata {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn with_semantic_role(mut self, role: impl Into<String>) -> Self {
        self.semantic_role = Some(role.into());
        self
    }

    pub fn with_category(mut self, category: ComponentCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = Some(criticality);
        self
    }

    pub fn with_usage_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usage_patterns = collect_strings(patterns);
        self
    }

    pub fn with_anti_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anti_patterns = collect_strings(patterns);
        self
    }

    pub fn with_contextual_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contextual_rules = collect_strings(rules);
        self
    }

    pub fn with_ai_prompts(mut self, prompts: AiPrompts) -> Self {
        self.ai_prompts = Some(prompts);
        self
    }

    /// Add or replace the example for one framework
    pub fn with_code_example(mut self, framework: Framework, code: impl Into<String>) -> Self {
        self.code_examples
            .get_or_insert_with(BTreeMap::new)
            .insert(framework.as_str().to_string(), code.into());
        self
    }

    pub fn with_performance_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.performance_hints = collect_strings(hints);
        self
    }

    pub fn with_bundle_impact(mut self, impact: BundleImpact) -> Self {
        self.bundle_impact = Some(impact);
        self
    }

    pub fn with_a11y_guidelines<I, S>(mut self, guidelines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.a11y_guidelines = collect_strings(guidelines);
        self
    }

    pub fn with_aria_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aria_patterns = collect_strings(patterns);
        self
    }

    pub fn with_keyboard_interactions<I, S>(mut self, interactions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyboard_interactions = collect_strings(interactions);
        self
    }

    pub fn with_child_components<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.child_components = collect_strings(tags);
        self
    }

    pub fn with_parent_components<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_components = collect_strings(tags);
        self
    }

    pub fn with_testing_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.testing_patterns = collect_strings(patterns);
        self
    }

    /// The example source for a framework, if the record has one
    pub fn code_example(&self, framework: Framework) -> Option<&str> {
        self.code_examples
            .as_ref()
            .and_then(|examples| examples.get(framework.as_str()))
            .map(String::as_str)
    }

    /// Whether a field counts as present (set and non-empty)
    pub fn is_present(&self, field: MetadataField) -> bool {
        fn filled(value: &Option<String>) -> bool {
            value.as_deref().map_or(false, |s| !s.trim().is_empty())
        }

        match field {
            MetadataField::Purpose => filled(&self.purpose),
            MetadataField::SemanticRole => filled(&self.semantic_role),
            MetadataField::Category => self.category.is_some(),
            MetadataField::UsagePatterns => !self.usage_patterns.is_empty(),
            MetadataField::AntiPatterns => !self.anti_patterns.is_empty(),
            MetadataField::ContextualRules => !self.contextual_rules.is_empty(),
            MetadataField::AiPrompts => self.ai_prompts.is_some(),
            MetadataField::CodeExamples => self
                .code_examples
                .as_ref()
                .map_or(false, |examples| !examples.is_empty()),
            MetadataField::A11yGuidelines => !self.a11y_guidelines.is_empty(),
            MetadataField::PerformanceHints => !self.performance_hints.is_empty(),
        }
    }
}

/// Fields the validator reasons about by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Purpose,
    SemanticRole,
    Category,
    UsagePatterns,
    AntiPatterns,
    ContextualRules,
    AiPrompts,
    CodeExamples,
    A11yGuidelines,
    PerformanceHints,
}

impl MetadataField {
    /// Wire name of the field, as used in messages
    pub fn name(&self) -> &'static str {
        match self {
            MetadataField::Purpose => "purpose",
            MetadataField::SemanticRole => "semanticRole",
            MetadataField::Category => "category",
            MetadataField::UsagePatterns => "usagePatterns",
            MetadataField::AntiPatterns => "antiPatterns",
            MetadataField::ContextualRules => "contextualRules",
            MetadataField::AiPrompts => "aiPrompts",
            MetadataField::CodeExamples => "codeExamples",
            MetadataField::A11yGuidelines => "a11yGuidelines",
            MetadataField::PerformanceHints => "performanceHints",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields whose absence is a hard error
pub const REQUIRED_FIELDS: [MetadataField; 7] = [
    MetadataField::Purpose,
    MetadataField::Category,
    MetadataField::UsagePatterns,
    MetadataField::AntiPatterns,
    MetadataField::ContextualRules,
    MetadataField::AiPrompts,
    MetadataField::CodeExamples,
];

/// Presence checklist behind the completeness percentage
pub const COMPLETENESS_CHECKLIST: [MetadataField; 10] = [
    MetadataField::Purpose,
    MetadataField::SemanticRole,
    MetadataField::Category,
    MetadataField::UsagePatterns,
    MetadataField::AntiPatterns,
    MetadataField::ContextualRules,
    MetadataField::AiPrompts,
    MetadataField::CodeExamples,
    MetadataField::A11yGuidelines,
    MetadataField::PerformanceHints,
];

/// A metadata record the validator accepted with zero errors
///
/// Only `MetadataValidator::trust` constructs this, so holding one means the
/// required fields are present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMetadata {
    inner: ComponentMetadata,
    score: u8,
}

impl ValidatedMetadata {
    pub(crate) fn new_unchecked(inner: ComponentMetadata, score: u8) -> Self {
        Self { inner, score }
    }

    pub fn purpose(&self) -> &str {
        self.inner.purpose.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> ComponentCategory {
        self.inner.category.unwrap_or(ComponentCategory::Atom)
    }

    pub fn usage_patterns(&self) -> &[String] {
        &self.inner.usage_patterns
    }

    pub fn anti_patterns(&self) -> &[String] {
        &self.inner.anti_patterns
    }

    pub fn contextual_rules(&self) -> &[String] {
        &self.inner.contextual_rules
    }

    pub fn ai_prompts(&self) -> &AiPrompts {
        static EMPTY: AiPrompts = AiPrompts {
            code_generation: String::new(),
            accessibility: String::new(),
            performance: String::new(),
            design_system: String::new(),
        };
        self.inner.ai_prompts.as_ref().unwrap_or(&EMPTY)
    }

    /// Score the record earned when it was validated
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn metadata(&self) -> &ComponentMetadata {
        &self.inner
    }

    pub fn into_inner(self) -> ComponentMetadata {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let metadata = ComponentMetadata::new()
            .with_semantic_role("button")
            .with_a11y_guidelines(["Visible focus ring"]);
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["semanticRole"], "button");
        assert_eq!(json["a11yGuidelines"][0], "Visible focus ring");
        assert!(json.get("purpose").is_none());
    }

    #[test]
    fn test_partial_record_deserializes() {
        let metadata: ComponentMetadata = serde_json::from_value(serde_json::json!({
            "purpose": "Toggle a setting",
            "category": "atom",
            "codeExamples": { "react": "<Switch />", "svelte": "<ui-switch />" }
        }))
        .unwrap();

        assert_eq!(metadata.category, Some(ComponentCategory::Atom));
        assert!(metadata.usage_patterns.is_empty());
        assert_eq!(metadata.code_example(Framework::React), Some("<Switch />"));
        assert_eq!(metadata.code_example(Framework::Vue), None);
        assert_eq!(metadata.code_examples.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_presence_rules() {
        let metadata = ComponentMetadata::new()
            .with_purpose("   ")
            .with_usage_patterns(Vec::<String>::new());
        assert!(!metadata.is_present(MetadataField::Purpose));
        assert!(!metadata.is_present(MetadataField::UsagePatterns));

        let mut metadata = metadata;
        metadata.code_examples = Some(BTreeMap::new());
        assert!(!metadata.is_present(MetadataField::CodeExamples));
    }

    #[test]
    fn test_checklists() {
        assert_eq!(COMPLETENESS_CHECKLIST.len(), 10);
        assert!(!REQUIRED_FIELDS.contains(&MetadataField::SemanticRole));
        assert!(REQUIRED_FIELDS
            .iter()
            .all(|field| COMPLETENESS_CHECKLIST.contains(field)));
    }

    #[test]
    fn test_framework_cycle_order() {
        let names: Vec<&str> = Framework::ALL.iter().map(Framework::as_str).collect();
        assert_eq!(names, vec!["react", "vue", "angular", "vanilla"]);
    }
}
