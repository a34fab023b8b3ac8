//! Element compliance checks
//!
//! Compare what a rendered element actually carries (role, ARIA attributes,
//! tabindex, loading) with what its metadata promises.

use crate::contracts::{ComplianceIssue, ComponentMetadata, IssueCategory};
use crate::element::ElementAttributes;

/// Native elements that are focusable without a tabindex
const NATIVELY_FOCUSABLE: [&str; 2] = ["button", "a"];

/// ARIA state attributes whose presence is checked against declared patterns
const TRACKED_ARIA_STATES: [&str; 2] = ["aria-expanded", "aria-controls"];

/// Everything a compliance check can report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceFindings {
    pub issues: Vec<ComplianceIssue>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
}

/// A single compliance check
pub trait ComplianceCheck: Send + Sync {
    /// Check identifier
    fn id(&self) -> &str;

    /// Evaluate one element against its metadata
    fn evaluate(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
        findings: &mut ComplianceFindings,
    );
}

/// The checks every validator starts with, in evaluation order
pub fn default_checks() -> Vec<Box<dyn ComplianceCheck>> {
    vec![
        Box::new(SemanticRoleCheck),
        Box::new(AccessibleNameCheck),
        Box::new(KeyboardAccessCheck),
        Box::new(AriaStateCheck),
        Box::new(LazyLoadingCheck),
    ]
}

/// The element's `role` must match the declared semantic role
pub struct SemanticRoleCheck;

impl ComplianceCheck for SemanticRoleCheck {
    fn id(&self) -> &str {
        "semantic_role"
    }

    fn evaluate(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
        findings: &mut ComplianceFindings,
    ) {
        let Some(expected) = metadata.semantic_role.as_deref() else {
            return;
        };

        match element.attribute("role") {
            None => findings.issues.push(
                ComplianceIssue::warning(
                    IssueCategory::Semantics,
                    format!("Missing semantic role (expected \"{}\")", expected),
                    format!("Add role=\"{}\"", expected),
                )
                .with_example(format!(
                    "<{tag} role=\"{role}\"></{tag}>",
                    tag = element.tag_name(),
                    role = expected
                )),
            ),
            Some(actual) if actual == expected => findings
                .strengths
                .push("Correct semantic role implementation".to_string()),
            Some(actual) => findings.issues.push(ComplianceIssue::error(
                IssueCategory::Semantics,
                format!(
                    "Incorrect semantic role: expected \"{}\", found \"{}\"",
                    expected, actual
                ),
                format!("Change role=\"{}\" to role=\"{}\"", actual, expected),
            )),
        }
    }
}

/// Components that declare an `aria-label` pattern need an accessible name
pub struct AccessibleNameCheck;

impl ComplianceCheck for AccessibleNameCheck {
    fn id(&self) -> &str {
        "accessible_name"
    }

    fn evaluate(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
        findings: &mut ComplianceFindings,
    ) {
        let declares_label = metadata
            .aria_patterns
            .iter()
            .any(|pattern| pattern.contains("aria-label"));

        if declares_label
            && !element.has_attribute("aria-label")
            && !element.has_attribute("aria-labelledby")
        {
            findings.issues.push(
                ComplianceIssue::warning(
                    IssueCategory::Accessibility,
                    "Missing accessible name (aria-label or aria-labelledby)",
                    "Add aria-label or reference a visible label with aria-labelledby",
                )
                .with_example(format!(
                    "<{tag} aria-label=\"Descriptive label\"></{tag}>",
                    tag = element.tag_name()
                )),
            );
        }
    }
}

/// Interactive components must be reachable by keyboard
pub struct KeyboardAccessCheck;

impl ComplianceCheck for KeyboardAccessCheck {
    fn id(&self) -> &str {
        "keyboard_access"
    }

    fn evaluate(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
        findings: &mut ComplianceFindings,
    ) {
        let tag = element.tag_name().to_ascii_lowercase();
        if !metadata.keyboard_interactions.is_empty()
            && !element.has_attribute("tabindex")
            && !NATIVELY_FOCUSABLE.contains(&tag.as_str())
        {
            findings.suggestions.push(
                "Add tabindex=\"0\" so keyboard users can reach this component".to_string(),
            );
        }
    }
}

/// Declared ARIA state patterns should be reflected on the element
pub struct AriaStateCheck;

impl ComplianceCheck for AriaStateCheck {
    fn id(&self) -> &str {
        "aria_state"
    }

    fn evaluate(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
        findings: &mut ComplianceFindings,
    ) {
        for attribute in TRACKED_ARIA_STATES {
            let declared = metadata
                .aria_patterns
                .iter()
                .any(|pattern| pattern.contains(attribute));
            if !declared {
                continue;
            }

            if element.has_attribute(attribute) {
                findings
                    .strengths
                    .push(format!("Implements declared {} pattern", attribute));
            } else {
                findings.issues.push(ComplianceIssue::info(
                    IssueCategory::Aria,
                    format!("Declared {} pattern is not reflected on the element", attribute),
                    format!("Set {} on the element when the pattern applies", attribute),
                ));
            }
        }
    }
}

/// Lazy-load hints need a `loading` attribute
pub struct LazyLoadingCheck;

impl ComplianceCheck for LazyLoadingCheck {
    fn id(&self) -> &str {
        "lazy_loading"
    }

    fn evaluate(
        &self,
        element: &dyn ElementAttributes,
        metadata: &ComponentMetadata,
        findings: &mut ComplianceFindings,
    ) {
        let wants_lazy = metadata
            .performance_hints
            .iter()
            .any(|hint| hint.to_lowercase().contains("lazy load"));

        if wants_lazy && !element.has_attribute("loading") {
            findings
                .suggestions
                .push("Add loading=\"lazy\" to defer offscreen content".to_string());
        }
    }
}
