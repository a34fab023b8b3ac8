//! Training dataset shapes produced by the exporter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::metadata::{ComponentMetadata, Framework};

/// What a synthesized example teaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExampleKind {
    BestPractice,
    Accessibility,
    Performance,
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleKind::BestPractice => write!(f, "best-practice"),
            ExampleKind::Accessibility => write!(f, "accessibility"),
            ExampleKind::Performance => write!(f, "performance"),
        }
    }
}

/// A good-usage example derived from a metadata record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingExample {
    pub id: String,
    pub kind: ExampleKind,
    pub framework: Framework,
    /// Scenario the example covers, phrased as a request
    pub scenario: String,
    pub code: String,
    pub explanation: String,
    pub tags: Vec<String>,
}

/// A misuse paired with the correct alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntiExample {
    pub id: String,
    pub anti_pattern: String,
    pub bad_code: String,
    pub good_code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    /// `source` renders `target` inside itself
    Contains,
    /// `source` depends on `target`
    Uses,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipKind::Contains => write!(f, "contains"),
            RelationshipKind::Uses => write!(f, "uses"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRelationship {
    pub kind: RelationshipKind,
    pub source: String,
    pub target: String,
    pub description: String,
}

/// Everything the dataset knows about one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTrainingData {
    pub tag_name: String,
    pub metadata: ComponentMetadata,
    pub examples: Vec<TrainingExample>,
    #[serde(default)]
    pub anti_examples: Vec<AntiExample>,
    #[serde(default)]
    pub relationships: Vec<ComponentRelationship>,
}

/// Reusable composition template spanning components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPattern {
    pub name: String,
    pub description: String,
    pub components: Vec<String>,
    pub template: String,
}

/// Per-framework integration advice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkGuidance {
    #[serde(default)]
    pub import_patterns: Vec<String>,
    #[serde(default)]
    pub event_patterns: Vec<String>,
    #[serde(default)]
    pub state_patterns: Vec<String>,
    #[serde(default)]
    pub gotchas: Vec<String>,
}

/// Aggregate export artifact for AI tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDataset {
    /// Derived from `created` (`YYYY.MM.DD`)
    pub version: String,
    pub created: DateTime<Utc>,
    pub components: Vec<ComponentTrainingData>,
    #[serde(default)]
    pub global_patterns: Vec<GlobalPattern>,
    #[serde(default)]
    pub framework_guidance: BTreeMap<String, FrameworkGuidance>,
}

impl TrainingDataset {
    /// Version string for a dataset created at `created`
    pub fn version_for(created: &DateTime<Utc>) -> String {
        created.format("%Y.%m.%d").to_string()
    }

    /// Total number of good-usage examples
    pub fn example_count(&self) -> usize {
        self.components.iter().map(|c| c.examples.len()).sum()
    }

    /// Total number of anti-examples
    pub fn anti_example_count(&self) -> usize {
        self.components.iter().map(|c| c.anti_examples.len()).sum()
    }

    /// Look up a component by tag name
    pub fn component(&self, tag_name: &str) -> Option<&ComponentTrainingData> {
        self.components.iter().find(|c| c.tag_name == tag_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_version_is_date_derived() {
        let created = Utc.with_ymd_and_hms(2024, 3, 7, 12, 30, 0).unwrap();
        assert_eq!(TrainingDataset::version_for(&created), "2024.03.07");
    }

    #[test]
    fn test_dataset_counts() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let example = TrainingExample {
            id: "ui-button-usage-0".to_string(),
            kind: ExampleKind::BestPractice,
            framework: Framework::React,
            scenario: "form submission".to_string(),
            code: "<UiButton />".to_string(),
            explanation: String::new(),
            tags: vec![],
        };
        let dataset = TrainingDataset {
            version: TrainingDataset::version_for(&created),
            created,
            components: vec![ComponentTrainingData {
                tag_name: "ui-button".to_string(),
                metadata: ComponentMetadata::new(),
                examples: vec![example.clone(), example],
                anti_examples: vec![],
                relationships: vec![],
            }],
            global_patterns: vec![],
            framework_guidance: BTreeMap::new(),
        };

        assert_eq!(dataset.example_count(), 2);
        assert_eq!(dataset.anti_example_count(), 0);
        assert!(dataset.component("ui-button").is_some());
        assert!(dataset.component("ui-card").is_none());
    }
}
