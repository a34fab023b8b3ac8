//! Prompt generation for AI assistants
//!
//! A fixed system prompt, per-component generation/validation prompts
//! interpolated from metadata, and composition prompts for common patterns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::contracts::{ComponentMetadata, ComponentRegistry};

pub const SYSTEM_PROMPT: &str = r#"You are an expert in the ui-* web component library. When generating UI code:
- Use the component whose documented purpose matches the task
- Follow each component's usage patterns and contextual rules
- Never use a component for one of its documented anti-patterns
- Meet the accessibility guidelines: semantic roles, ARIA attributes, keyboard support
- Prefer the framework wrapper that matches the host project"#;

/// Pattern name and usage-pattern keyword → prompt template (`{components}` is replaced)
const PATTERN_TEMPLATES: [(&str, &str); 2] = [
    (
        "form",
        "Build an accessible form using {components}. Associate every control with a label, \
         validate on submit, and announce errors to assistive technology.",
    ),
    (
        "navigation",
        "Build site navigation using {components}. Use landmark roles, mark the current page \
         with aria-current, and keep the tab order logical.",
    ),
];

/// Prompts for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPrompts {
    pub generation: String,
    pub validation: String,
}

/// Every prompt generated for a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCollection {
    pub system: String,
    pub components: BTreeMap<String, ComponentPrompts>,
    pub patterns: BTreeMap<String, String>,
}

fn listed(items: &[String]) -> String {
    if items.is_empty() {
        "none documented".to_string()
    } else {
        items.join("; ")
    }
}

fn generation_prompt(tag_name: &str, metadata: &ComponentMetadata) -> String {
    let mut prompt = format!(
        "Generate a <{tag}> component.\nPurpose: {purpose}\nUse it for: {usage}\nNever use it for: {anti}\nRules: {rules}",
        tag = tag_name,
        purpose = metadata.purpose.as_deref().unwrap_or("not documented"),
        usage = listed(&metadata.usage_patterns),
        anti = listed(&metadata.anti_patterns),
        rules = listed(&metadata.contextual_rules),
    );
    if let Some(hint) = metadata
        .ai_prompts
        .as_ref()
        .map(|p| p.code_generation.as_str())
        .filter(|hint| !hint.is_empty())
    {
        prompt.push_str(&format!("\n{}", hint));
    }
    prompt
}

fn validation_prompt(tag_name: &str, metadata: &ComponentMetadata) -> String {
    let mut prompt = format!(
        "Review this <{tag}> usage.\nCheck accessibility: {a11y}\nCheck ARIA: {aria}\nCheck keyboard support: {keyboard}\nFlag any of these anti-patterns: {anti}",
        tag = tag_name,
        a11y = listed(&metadata.a11y_guidelines),
        aria = listed(&metadata.aria_patterns),
        keyboard = listed(&metadata.keyboard_interactions),
        anti = listed(&metadata.anti_patterns),
    );
    if let Some(role) = &metadata.semantic_role {
        prompt.push_str(&format!("\nThe element must expose role=\"{}\".", role));
    }
    prompt
}

/// Build the prompt collection for a registry
pub fn generate_ai_prompts(registry: &ComponentRegistry) -> PromptCollection {
    let components = registry
        .iter()
        .map(|(tag, metadata)| {
            (
                tag.clone(),
                ComponentPrompts {
                    generation: generation_prompt(tag, metadata),
                    validation: validation_prompt(tag, metadata),
                },
            )
        })
        .collect();

    let mut patterns = BTreeMap::new();
    for (keyword, template) in PATTERN_TEMPLATES {
        let tags: Vec<&str> = registry
            .iter()
            .filter(|(_, metadata)| {
                metadata
                    .usage_patterns
                    .iter()
                    .any(|p| p.to_lowercase().contains(keyword))
            })
            .map(|(tag, _)| tag.as_str())
            .collect();
        let components = if tags.is_empty() {
            "the library's components (none documented for this pattern)".to_string()
        } else {
            tags.join(", ")
        };
        patterns.insert(keyword.to_string(), template.replace("{components}", &components));
    }

    tracing::debug!(
        components = registry.len(),
        patterns = patterns.len(),
        "Generated AI prompts"
    );

    PromptCollection {
        system: SYSTEM_PROMPT.to_string(),
        components,
        patterns,
    }
}
