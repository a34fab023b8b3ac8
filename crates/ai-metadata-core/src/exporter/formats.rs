//! Renderers for AI tool formats

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::contracts::{ComponentTrainingData, Framework, TrainingDataset};
use crate::error::{MetadataError, Result};

/// System message of every OpenAI fine-tuning record
pub const OPENAI_SYSTEM_PROMPT: &str = "You are an expert frontend developer who builds accessible, \
performant interfaces with the ui-* web component library. Follow the documented usage patterns \
and never use a component for one of its anti-patterns.";

/// Target format of [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiToolFormat {
    GithubCopilot,
    CursorIde,
    ClaudeArtifacts,
    OpenaiGpt,
    JsonSchema,
    Standard,
}

impl AiToolFormat {
    pub const ALL: [AiToolFormat; 6] = [
        AiToolFormat::GithubCopilot,
        AiToolFormat::CursorIde,
        AiToolFormat::ClaudeArtifacts,
        AiToolFormat::OpenaiGpt,
        AiToolFormat::JsonSchema,
        AiToolFormat::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiToolFormat::GithubCopilot => "github-copilot",
            AiToolFormat::CursorIde => "cursor-ide",
            AiToolFormat::ClaudeArtifacts => "claude-artifacts",
            AiToolFormat::OpenaiGpt => "openai-gpt",
            AiToolFormat::JsonSchema => "json-schema",
            AiToolFormat::Standard => "standard",
        }
    }

    /// Parse a format name; unknown names fall back to `Standard`
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .unwrap_or(AiToolFormat::Standard)
    }
}

impl fmt::Display for AiToolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of a single-component export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentExportFormat {
    Json,
    Markdown,
    Yaml,
}

impl fmt::Display for ComponentExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentExportFormat::Json => write!(f, "json"),
            ComponentExportFormat::Markdown => write!(f, "markdown"),
            ComponentExportFormat::Yaml => write!(f, "yaml"),
        }
    }
}

fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| MetadataError::SerializationError(format!("JSON: {}", e)))
}

/// Render a dataset for one AI tool
pub fn render(format: AiToolFormat, dataset: &TrainingDataset) -> Result<String> {
    match format {
        AiToolFormat::GithubCopilot => Ok(copilot_instructions(dataset)),
        AiToolFormat::CursorIde => to_json_pretty(&cursor_rules(dataset)),
        AiToolFormat::ClaudeArtifacts => Ok(claude_reference(dataset)),
        AiToolFormat::OpenaiGpt => openai_jsonl(dataset),
        AiToolFormat::JsonSchema => to_json_pretty(&metadata_schema(dataset)),
        AiToolFormat::Standard => to_json_pretty(dataset),
    }
}

/// Render one component's training data
pub fn render_component(format: ComponentExportFormat, data: &ComponentTrainingData) -> Result<String> {
    match format {
        ComponentExportFormat::Json => to_json_pretty(data),
        ComponentExportFormat::Yaml => serde_yaml::to_string(data)
            .map_err(|e| MetadataError::SerializationError(format!("YAML: {}", e))),
        ComponentExportFormat::Markdown => Ok(component_markdown(data)),
    }
}

fn bullet_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", heading));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

fn copilot_instructions(dataset: &TrainingDataset) -> String {
    let mut out = format!(
        "# UI Component Library: Copilot Instructions\n\nDataset version {}\n\n",
        dataset.version
    );

    for component in &dataset.components {
        let metadata = &component.metadata;
        out.push_str(&format!("## `<{}>`\n\n", component.tag_name));
        if let Some(purpose) = &metadata.purpose {
            out.push_str(&format!("{}\n\n", purpose));
        }
        bullet_section(&mut out, "**Use for:**", &metadata.usage_patterns);
        bullet_section(&mut out, "**Avoid:**", &metadata.anti_patterns);
        bullet_section(&mut out, "**Rules:**", &metadata.contextual_rules);
        if let Some(prompts) = &metadata.ai_prompts {
            if !prompts.code_generation.is_empty() {
                out.push_str(&format!("**Generation hint:** {}\n\n", prompts.code_generation));
            }
        }
    }

    if !dataset.global_patterns.is_empty() {
        out.push_str("## Patterns\n\n");
        for pattern in &dataset.global_patterns {
            out.push_str(&format!(
                "### {}\n\n{}\n\n```html\n{}\n```\n\n",
                pattern.name, pattern.description, pattern.template
            ));
        }
    }

    out
}

fn cursor_rules(dataset: &TrainingDataset) -> Value {
    let rules: Vec<Value> = dataset
        .components
        .iter()
        .map(|component| {
            let metadata = &component.metadata;
            json!({
                "component": component.tag_name,
                "description": metadata.purpose,
                "category": metadata.category,
                "semanticRole": metadata.semantic_role,
                "patterns": metadata.usage_patterns,
                "antiPatterns": metadata.anti_patterns,
                "rules": metadata.contextual_rules,
                "accessibility": metadata.a11y_guidelines,
                "examples": metadata.code_examples,
            })
        })
        .collect();

    json!({
        "version": dataset.version,
        "rules": rules,
        "globalPatterns": dataset.global_patterns,
    })
}

fn claude_reference(dataset: &TrainingDataset) -> String {
    let mut out = format!(
        "# Component Library Reference\n\nVersion {}. {} components.\n\n",
        dataset.version,
        dataset.components.len()
    );

    for component in &dataset.components {
        out.push_str(&format!("## {}\n\n", component.tag_name));
        if let Some(purpose) = &component.metadata.purpose {
            out.push_str(&format!("{}\n\n", purpose));
        }

        if !component.examples.is_empty() {
            out.push_str("### Examples\n\n");
            for example in &component.examples {
                out.push_str(&format!(
                    "#### {} ({})\n\n```{}\n{}\n```\n\n{}\n\n",
                    example.scenario,
                    example.framework,
                    example.framework.code_fence(),
                    example.code,
                    example.explanation
                ));
            }
        }

        if !component.anti_examples.is_empty() {
            out.push_str("### Avoid\n\n");
            for anti in &component.anti_examples {
                out.push_str(&format!(
                    "- **{}**\n\n```html\n{}\n```\n\nInstead:\n\n```html\n{}\n```\n\n",
                    anti.anti_pattern, anti.bad_code, anti.good_code
                ));
            }
        }
    }

    out
}

fn openai_jsonl(dataset: &TrainingDataset) -> Result<String> {
    let mut lines = Vec::with_capacity(dataset.example_count());

    for component in &dataset.components {
        for example in &component.examples {
            let record = json!({
                "messages": [
                    { "role": "system", "content": OPENAI_SYSTEM_PROMPT },
                    {
                        "role": "user",
                        "content": format!(
                            "Create a {} in {} for: {}",
                            component.tag_name, example.framework, example.scenario
                        ),
                    },
                    {
                        "role": "assistant",
                        "content": format!(
                            "```{}\n{}\n```\n\n{}",
                            example.framework.code_fence(),
                            example.code,
                            example.explanation
                        ),
                    },
                ]
            });
            lines.push(
                serde_json::to_string(&record)
                    .map_err(|e| MetadataError::SerializationError(format!("JSONL: {}", e)))?,
            );
        }
    }

    Ok(lines.join("\n"))
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn metadata_schema(dataset: &TrainingDataset) -> Value {
    let frameworks: Vec<&str> = Framework::ALL.iter().map(|f| f.as_str()).collect();
    let tags: Vec<&str> = dataset
        .components
        .iter()
        .map(|c| c.tag_name.as_str())
        .collect();

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "ComponentMetadata",
        "type": "object",
        "required": [
            "purpose", "category", "usagePatterns", "antiPatterns",
            "contextualRules", "aiPrompts", "codeExamples"
        ],
        "properties": {
            "purpose": { "type": "string", "minLength": 1 },
            "semanticRole": { "type": "string" },
            "category": { "enum": ["atom", "molecule", "organism"] },
            "criticality": { "enum": ["low", "medium", "high", "critical"] },
            "usagePatterns": string_array(),
            "antiPatterns": string_array(),
            "contextualRules": string_array(),
            "aiPrompts": {
                "type": "object",
                "properties": {
                    "codeGeneration": { "type": "string" },
                    "accessibility": { "type": "string" },
                    "performance": { "type": "string" },
                    "designSystem": { "type": "string" }
                }
            },
            "codeExamples": {
                "type": "object",
                "required": frameworks,
                "additionalProperties": { "type": "string" }
            },
            "designTokens": { "type": "object" },
            "performanceHints": string_array(),
            "bundleImpact": { "enum": ["minimal", "moderate", "significant"] },
            "a11yGuidelines": string_array(),
            "ariaPatterns": string_array(),
            "keyboardInteractions": string_array(),
            "compositionPatterns": {
                "type": "object",
                "additionalProperties": { "type": "string" }
            },
            "childComponents": string_array(),
            "parentComponents": string_array(),
            "testingPatterns": string_array(),
            "commonTestCases": string_array()
        },
        "x-componentTags": tags,
    })
}

fn component_markdown(data: &ComponentTrainingData) -> String {
    let metadata = &data.metadata;
    let mut out = format!("# {}\n\n", data.tag_name);

    if let Some(purpose) = &metadata.purpose {
        out.push_str(&format!("{}\n\n", purpose));
    }
    if let Some(category) = metadata.category {
        out.push_str(&format!("**Category:** {}\n\n", category));
    }
    if let Some(role) = &metadata.semantic_role {
        out.push_str(&format!("**Role:** {}\n\n", role));
    }

    bullet_section(&mut out, "## Usage Patterns\n", &metadata.usage_patterns);
    bullet_section(&mut out, "## Anti-Patterns\n", &metadata.anti_patterns);
    bullet_section(&mut out, "## Contextual Rules\n", &metadata.contextual_rules);
    bullet_section(&mut out, "## Accessibility\n", &metadata.a11y_guidelines);
    bullet_section(&mut out, "## Performance\n", &metadata.performance_hints);

    if let Some(examples) = metadata.code_examples.as_ref().filter(|e| !e.is_empty()) {
        out.push_str("## Code Examples\n\n");
        for (framework, code) in examples {
            let fence = Framework::ALL
                .iter()
                .find(|f| f.as_str() == framework.as_str())
                .map_or("html", |f| f.code_fence());
            out.push_str(&format!("### {}\n\n```{}\n{}\n```\n\n", framework, fence, code));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{ComponentMetadata, ExampleKind, TrainingExample};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn dataset() -> TrainingDataset {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let metadata = ComponentMetadata::new()
            .with_purpose("Primary action trigger")
            .with_usage_patterns(["form submission"])
            .with_anti_patterns(["Navigation links"])
            .with_code_example(Framework::React, "<UiButton>Save</UiButton>");
        TrainingDataset {
            version: TrainingDataset::version_for(&created),
            created,
            components: vec![ComponentTrainingData {
                tag_name: "ui-button".to_string(),
                metadata,
                examples: vec![TrainingExample {
                    id: "ui-button-usage-0".to_string(),
                    kind: ExampleKind::BestPractice,
                    framework: Framework::React,
                    scenario: "form submission".to_string(),
                    code: "<UiButton>Save</UiButton>".to_string(),
                    explanation: "Use ui-button for form submission.".to_string(),
                    tags: vec![],
                }],
                anti_examples: vec![],
                relationships: vec![],
            }],
            global_patterns: vec![],
            framework_guidance: BTreeMap::new(),
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AiToolFormat::from_name("github-copilot"), AiToolFormat::GithubCopilot);
        assert_eq!(AiToolFormat::from_name("OPENAI_GPT"), AiToolFormat::OpenaiGpt);
        assert_eq!(AiToolFormat::from_name("bogus"), AiToolFormat::Standard);
    }

    #[test]
    fn test_copilot_markdown() {
        let out = render(AiToolFormat::GithubCopilot, &dataset()).unwrap();
        assert!(out.starts_with("# UI Component Library"));
        assert!(out.contains("## `<ui-button>`"));
        assert!(out.contains("- form submission"));
        assert!(out.contains("**Avoid:**\n- Navigation links"));
    }

    #[test]
    fn test_cursor_rules_is_json() {
        let out = render(AiToolFormat::CursorIde, &dataset()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["rules"][0]["component"], "ui-button");
        assert_eq!(value["version"], "2024.06.01");
    }

    #[test]
    fn test_claude_fences_by_framework() {
        let out = render(AiToolFormat::ClaudeArtifacts, &dataset()).unwrap();
        assert!(out.contains("```tsx\n<UiButton>Save</UiButton>\n```"));
    }

    #[test]
    fn test_openai_jsonl_records() {
        let out = render(AiToolFormat::OpenaiGpt, &dataset()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        let record: Value = serde_json::from_str(lines[0]).unwrap();
        let roles: Vec<&str> = record["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["system", "user", "assistant"]);
    }

    #[test]
    fn test_schema_lists_tags() {
        let out = render(AiToolFormat::JsonSchema, &dataset()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["x-componentTags"][0], "ui-button");
        assert_eq!(value["required"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_standard_round_trips() {
        let original = dataset();
        let out = render(AiToolFormat::Standard, &original).unwrap();
        let decoded: TrainingDataset = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_component_markdown_and_yaml() {
        let data = &dataset().components[0];
        let markdown = render_component(ComponentExportFormat::Markdown, data).unwrap();
        assert!(markdown.starts_with("# ui-button\n"));
        assert!(markdown.contains("## Usage Patterns\n\n- form submission"));
        assert!(markdown.contains("### react\n\n```tsx"));

        let yaml = render_component(ComponentExportFormat::Yaml, data).unwrap();
        let decoded: ComponentTrainingData = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(&decoded, data);
    }
}
