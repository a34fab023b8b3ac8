//! Static framework integration guidance shipped with every dataset

use std::collections::BTreeMap;

use crate::contracts::FrameworkGuidance;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn react() -> FrameworkGuidance {
    FrameworkGuidance {
        import_patterns: strings(&[
            "import '@ui-components/core/button';",
            "import { UiButton } from '@ui-components/react';",
        ]),
        event_patterns: strings(&[
            "onClick={handleClick}",
            "onChange={(event) => setValue(event.detail.value)}",
        ]),
        state_patterns: strings(&[
            "const [checked, setChecked] = useState(false);",
            "Pass controlled values through props and listen for change events",
        ]),
        gotchas: strings(&[
            "Custom events need the wrapper components or addEventListener on a ref",
            "Use className, not class, on wrapper components",
        ]),
    }
}

fn vue() -> FrameworkGuidance {
    FrameworkGuidance {
        import_patterns: strings(&[
            "import '@ui-components/core/button';",
            "import { UiButton } from '@ui-components/vue';",
        ]),
        event_patterns: strings(&["@click=\"handleClick\"", "@change=\"onChange\""]),
        state_patterns: strings(&[
            "v-model=\"enabled\"",
            "const enabled = ref(false);",
        ]),
        gotchas: strings(&[
            "Register ui-* tags with compilerOptions.isCustomElement",
            "Bind complex values with the .prop modifier",
        ]),
    }
}

fn angular() -> FrameworkGuidance {
    FrameworkGuidance {
        import_patterns: strings(&[
            "import '@ui-components/core/button';",
            "schemas: [CUSTOM_ELEMENTS_SCHEMA]",
        ]),
        event_patterns: strings(&["(click)=\"handleClick()\"", "(change)=\"onChange($event)\""]),
        state_patterns: strings(&[
            "[checked]=\"enabled\"",
            "Use a ControlValueAccessor for reactive forms",
        ]),
        gotchas: strings(&[
            "CUSTOM_ELEMENTS_SCHEMA is required in every module that uses ui-* tags",
            "Bind properties with [prop], not attributes, for non-string values",
        ]),
    }
}

/// Guidance blocks keyed by framework name
pub fn framework_guidance() -> BTreeMap<String, FrameworkGuidance> {
    BTreeMap::from([
        ("react".to_string(), react()),
        ("vue".to_string(), vue()),
        ("angular".to_string(), angular()),
    ])
}
