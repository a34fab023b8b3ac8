//! Read-only view of a rendered element
//!
//! Compliance checks only ever read an element's tag name and attributes.
//! Callers holding a real DOM node implement [`ElementAttributes`] over it;
//! everyone else uses [`ElementSnapshot`], which can also be loaded from JSON
//! or YAML captured in a browser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute access needed by the compliance validator
pub trait ElementAttributes {
    /// Lowercase tag name (`button`, `ui-switch`, ...)
    fn tag_name(&self) -> &str;

    /// Value of an attribute, if set
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Whether an attribute is set (boolean attributes have an empty value)
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Owned snapshot of an element's tag and attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub tag_name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ElementSnapshot {
    /// Snapshot of an element with no attributes
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into().to_lowercase(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_lowercase(), value.into());
        self
    }
}

impl ElementAttributes for ElementSnapshot {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl<T: ElementAttributes + ?Sized> ElementAttributes for &T {
    fn tag_name(&self) -> &str {
        (**self).tag_name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_normalizes_names() {
        let element = ElementSnapshot::new("UI-Switch").with_attribute("Role", "switch");
        assert_eq!(element.tag_name(), "ui-switch");
        assert_eq!(element.attribute("role"), Some("switch"));
    }

    #[test]
    fn test_boolean_attribute_is_present() {
        let element = ElementSnapshot::new("ui-modal").with_attribute("aria-modal", "");
        assert!(element.has_attribute("aria-modal"));
        assert!(!element.has_attribute("aria-label"));
    }

    #[test]
    fn test_snapshot_from_json() {
        let element: ElementSnapshot = serde_json::from_value(serde_json::json!({
            "tagName": "button",
            "attributes": { "aria-label": "Save" }
        }))
        .unwrap();
        assert_eq!(element.attribute("aria-label"), Some("Save"));
    }
}
