//! CSS custom-property export.

use fluid_model::{FluidTypeConfig, Inheritable, TypeStep, font_stack};

/// Renders the `:root` block for a computed step list.
///
/// One `--{prefix}-{name}` property per step, followed by the body and
/// heading font stacks. An inherited heading family aliases the body stack.
pub fn css_custom_properties(steps: &[TypeStep], config: &FluidTypeConfig) -> String {
    let mut output = String::from(":root {\n");
    for step in steps {
        output.push_str(&format!("  --{}-{}: {};\n", config.prefix, step.name, step.clamp));
    }

    let typography = &config.typography;
    output.push_str("\n  /* Typography Settings */\n");
    output.push_str(&format!(
        "  --font-body: {};\n",
        font_stack(&typography.body.font_family, '\'')
    ));
    let heading = match &typography.heading.font_family {
        Inheritable::Inherit => "var(--font-body)".to_string(),
        Inheritable::Value(family) => font_stack(family, '\''),
    };
    output.push_str(&format!("  --font-heading: {heading};\n"));
    output.push('}');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherited_heading_family_aliases_body() {
        let mut config = FluidTypeConfig::default();
        config.typography.heading.font_family = Inheritable::Inherit;
        let css = css_custom_properties(&[], &config);
        assert!(css.contains("--font-heading: var(--font-body);"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn uses_configured_prefix() {
        let config = FluidTypeConfig {
            prefix: "step".to_string(),
            ..FluidTypeConfig::default()
        };
        let steps = vec![TypeStep {
            name: "body".to_string(),
            min_size: 14.0,
            max_size: 14.0,
            clamp: "0.875rem".to_string(),
            fallbacks: Vec::new(),
            preset: None,
        }];
        let css = css_custom_properties(&steps, &config);
        assert!(css.starts_with(":root {\n  --step-body: 0.875rem;\n"));
    }
}
