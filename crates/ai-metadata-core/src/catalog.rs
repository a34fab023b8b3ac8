//! Metadata for the library's own components
//!
//! Used by the CLI when no metadata file is given, and as realistic fixtures.

use crate::contracts::{
    AiPrompts, BundleImpact, ComponentCategory, ComponentMetadata, ComponentRegistry, Criticality,
    Framework,
};

fn prompts(code_generation: &str, accessibility: &str, performance: &str, design_system: &str) -> AiPrompts {
    AiPrompts {
        code_generation: code_generation.to_string(),
        accessibility: accessibility.to_string(),
        performance: performance.to_string(),
        design_system: design_system.to_string(),
    }
}

pub fn button() -> ComponentMetadata {
    ComponentMetadata::new()
        .with_purpose("Primary action trigger for forms, dialogs and toolbars")
        .with_semantic_role("button")
        .with_category(ComponentCategory::Atom)
        .with_criticality(Criticality::High)
        .with_usage_patterns([
            "form submission",
            "modal triggers",
            "toolbar actions",
            "navigation actions",
        ])
        .with_anti_patterns([
            "Using a button for page navigation instead of a link",
            "Icon-only buttons without an accessible label",
        ])
        .with_contextual_rules([
            "Use variant=\"primary\" for at most one action per view",
            "Set type=\"submit\" inside forms",
            "Disable while an async action is pending",
        ])
        .with_ai_prompts(prompts(
            "Use <ui-button> for actions; pick variant by emphasis",
            "Give icon-only buttons an aria-label",
            "Buttons ship no runtime dependencies; avoid wrapping them in extra elements",
            "Follow the primary/secondary/ghost variant hierarchy",
        ))
        .with_code_example(Framework::React, "<UiButton variant=\"primary\" onClick={save}>Save</UiButton>")
        .with_code_example(Framework::Vue, "<ui-button variant=\"primary\" @click=\"save\">Save</ui-button>")
        .with_code_example(Framework::Angular, "<ui-button variant=\"primary\" (click)=\"save()\">Save</ui-button>")
        .with_code_example(Framework::Vanilla, "<ui-button variant=\"primary\" type=\"submit\">Save</ui-button>")
        .with_performance_hints(["No runtime dependencies", "Styles are scoped and static"])
        .with_bundle_impact(BundleImpact::Minimal)
        .with_a11y_guidelines(["Visible focus indicator", "Minimum 44px touch target"])
        .with_aria_patterns(["aria-label for icon-only buttons", "aria-pressed for toggle buttons"])
        .with_keyboard_interactions(["Enter activates", "Space activates"])
        .with_parent_components(["ui-card", "ui-modal"])
        .with_testing_patterns(["Click dispatches one event", "Disabled buttons ignore clicks"])
}

pub fn switch() -> ComponentMetadata {
    ComponentMetadata::new()
        .with_purpose("Toggle a single setting on or off with immediate effect")
        .with_semantic_role("switch")
        .with_category(ComponentCategory::Atom)
        .with_criticality(Criticality::Medium)
        .with_usage_patterns(["settings panels", "feature toggles", "preference forms"])
        .with_anti_patterns([
            "Using a switch for actions that need a submit step",
            "Using a switch for more than two states",
        ])
        .with_contextual_rules([
            "Apply the change immediately",
            "Label the setting, not the state",
            "Group related switches under a heading",
        ])
        .with_ai_prompts(prompts(
            "Use <ui-switch> for instant binary settings",
            "Expose role=\"switch\" and aria-checked",
            "Animate with CSS transitions only",
            "Match the checked colour to the primary token",
        ))
        .with_code_example(Framework::React, "<UiSwitch checked={enabled} onChange={toggle}>Wi-Fi</UiSwitch>")
        .with_code_example(Framework::Vue, "<ui-switch v-model=\"enabled\">Wi-Fi</ui-switch>")
        .with_code_example(Framework::Angular, "<ui-switch [(checked)]=\"enabled\">Wi-Fi</ui-switch>")
        .with_code_example(Framework::Vanilla, "<ui-switch role=\"switch\" checked>Wi-Fi</ui-switch>")
        .with_performance_hints(["CSS-only transitions", "No layout shift on toggle"])
        .with_bundle_impact(BundleImpact::Minimal)
        .with_a11y_guidelines(["Announce state changes", "Associate a visible label"])
        .with_aria_patterns(["aria-checked reflects state", "aria-label when no visible text"])
        .with_keyboard_interactions(["Space toggles", "Tab moves focus"])
}

pub fn card() -> ComponentMetadata {
    ComponentMetadata::new()
        .with_purpose("Group related content and actions into a single surface")
        .with_semantic_role("article")
        .with_category(ComponentCategory::Molecule)
        .with_criticality(Criticality::Low)
        .with_usage_patterns(["content previews", "dashboard tiles", "product listings"])
        .with_anti_patterns(["Nesting cards inside cards", "Making the whole card and its buttons clickable"])
        .with_contextual_rules([
            "Keep one primary action per card",
            "Use a heading for the card title",
            "Keep cards in a grid the same height",
        ])
        .with_ai_prompts(prompts(
            "Use <ui-card> with header, body and footer slots",
            "Start each card with a heading",
            "Lazy-render offscreen cards in long lists",
            "Use the elevation tokens for depth",
        ))
        .with_code_example(Framework::React, "<UiCard><h3 slot=\"header\">Plan</h3>Details</UiCard>")
        .with_code_example(Framework::Vue, "<ui-card><h3 slot=\"header\">Plan</h3>Details</ui-card>")
        .with_code_example(Framework::Angular, "<ui-card><h3 slot=\"header\">{{ plan }}</h3>Details</ui-card>")
        .with_code_example(Framework::Vanilla, "<ui-card><h3 slot=\"header\">Plan</h3>Details</ui-card>")
        .with_performance_hints(["Lazy load images inside cards", "Avoid box-shadow animations"])
        .with_bundle_impact(BundleImpact::Minimal)
        .with_a11y_guidelines(["Card titles are headings"])
        .with_aria_patterns(["aria-labelledby points at the title"])
        .with_keyboard_interactions(["Tab reaches each action in order"])
        .with_child_components(["ui-button"])
}

pub fn modal() -> ComponentMetadata {
    ComponentMetadata::new()
        .with_purpose("Focused dialog that blocks the page until dismissed")
        .with_semantic_role("dialog")
        .with_category(ComponentCategory::Organism)
        .with_criticality(Criticality::Critical)
        .with_usage_patterns(["confirmation dialogs", "short forms", "blocking alerts"])
        .with_anti_patterns(["Stacking modals on top of each other", "Opening a modal on page load"])
        .with_contextual_rules([
            "Trap focus inside while open",
            "Return focus to the trigger on close",
            "Always provide a close control",
        ])
        .with_ai_prompts(prompts(
            "Use <ui-modal> for decisions that block the flow",
            "Set aria-modal and label the dialog by its title",
            "Render dialog content lazily",
            "Use the overlay token for the backdrop",
        ))
        .with_code_example(Framework::React, "<UiModal open={open} onClose={close}>Delete file?</UiModal>")
        .with_code_example(Framework::Vue, "<ui-modal :open=\"open\" @close=\"close\">Delete file?</ui-modal>")
        .with_code_example(Framework::Angular, "<ui-modal [open]=\"open\" (close)=\"close()\">Delete file?</ui-modal>")
        .with_code_example(Framework::Vanilla, "<ui-modal open aria-labelledby=\"title\">Delete file?</ui-modal>")
        .with_performance_hints(["Lazy load dialog content", "Lock scroll without reflowing the page"])
        .with_bundle_impact(BundleImpact::Moderate)
        .with_a11y_guidelines(["Trap focus while open", "Escape closes the dialog"])
        .with_aria_patterns(["aria-modal=\"true\"", "aria-labelledby points at the title"])
        .with_keyboard_interactions(["Escape closes", "Tab cycles within the dialog"])
        .with_child_components(["ui-button"])
}

pub fn date_picker() -> ComponentMetadata {
    ComponentMetadata::new()
        .with_purpose("Pick a single date from a calendar or by typing")
        .with_semantic_role("combobox")
        .with_category(ComponentCategory::Organism)
        .with_criticality(Criticality::Medium)
        .with_usage_patterns(["booking forms", "report filters", "form submission of dates"])
        .with_anti_patterns(["Using a date picker for birth dates far in the past", "Hiding the text input"])
        .with_contextual_rules([
            "Show the expected format",
            "Respect min and max dates",
            "Localize month and weekday names",
        ])
        .with_ai_prompts(prompts(
            "Use <ui-date-picker> with min/max for constrained ranges",
            "Keep the text input editable and labelled",
            "Lazy load the calendar grid",
            "Use the surface tokens for the popup",
        ))
        .with_code_example(Framework::React, "<UiDatePicker value={date} onChange={setDate} />")
        .with_code_example(Framework::Vue, "<ui-date-picker v-model=\"date\"></ui-date-picker>")
        .with_code_example(Framework::Angular, "<ui-date-picker [(value)]=\"date\"></ui-date-picker>")
        .with_code_example(Framework::Vanilla, "<ui-date-picker min=\"2024-01-01\"></ui-date-picker>")
        .with_performance_hints(["Lazy load the calendar grid", "Format dates with Intl.DateTimeFormat"])
        .with_bundle_impact(BundleImpact::Significant)
        .with_a11y_guidelines(["Calendar grid uses role=\"grid\"", "Announce the selected date"])
        .with_aria_patterns(["aria-expanded reflects the popup", "aria-controls points at the calendar"])
        .with_keyboard_interactions(["Arrow keys move days", "Enter selects", "Escape closes"])
}

/// All built-in components keyed by tag name
pub fn builtin_registry() -> ComponentRegistry {
    ComponentRegistry::from([
        ("ui-button".to_string(), button()),
        ("ui-card".to_string(), card()),
        ("ui-date-picker".to_string(), date_picker()),
        ("ui-modal".to_string(), modal()),
        ("ui-switch".to_string(), switch()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::Quality;
    use crate::validator::validate_component_metadata;

    #[test]
    fn test_builtin_metadata_is_high_quality() {
        for (tag, metadata) in builtin_registry() {
            let result = validate_component_metadata(&metadata);
            assert!(result.valid, "{tag}: {:?}", result.errors);
            assert_eq!(result.quality, Quality::High, "{tag}: {:?}", result.warnings);
        }
    }
}
