//! Style Resolver: per-element CSS properties from a computed step list.

use std::fmt;

use fluid_model::{
    HeadingTypography, Inheritable, LegacyStepName, StepCategory, TypeStep, Typography,
    find_step, font_stack,
};
use serde::Serialize;
use tracing::debug;

use crate::mapping::StyleMappings;
use crate::slots::SlotId;

/// Step names styled as running text outside preset mode.
pub const BODY_STEP_NAMES: [&str; 3] = ["body", "body-sm", "body-lg"];

/// Inline style for one text element. Unset properties are inherited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Letter spacing in em.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StyleProperties {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// CSS `(property, value)` pairs in a stable order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();
        if let Some(size) = &self.font_size {
            declarations.push(("font-size", size.clone()));
        }
        if let Some(family) = &self.font_family {
            declarations.push(("font-family", family.clone()));
        }
        if let Some(weight) = self.font_weight {
            declarations.push(("font-weight", weight.to_string()));
        }
        if let Some(line_height) = self.line_height {
            declarations.push(("line-height", line_height.to_string()));
        }
        if let Some(spacing) = self.letter_spacing {
            declarations.push(("letter-spacing", format!("{spacing}em")));
        }
        if let Some(color) = &self.color {
            declarations.push(("color", color.clone()));
        }
        declarations
    }

    fn with_heading_identity(mut self, heading: &HeadingTypography) -> Self {
        self.font_family = Some(match &heading.font_family {
            Inheritable::Inherit => Inheritable::Inherit.to_string(),
            Inheritable::Value(family) => font_stack(family, '"'),
        });
        self.color = Some(heading.color.to_string());
        self
    }
}

/// Renders as an inline `style` attribute value.
impl fmt::Display for StyleProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in self.declarations() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
            first = false;
        }
        Ok(())
    }
}

/// Resolves the style for `requested` against the current step list.
///
/// Legacy short names (`sm`, `base`, `xl`, ...) are translated only in
/// preset mode. A name missing from `steps` yields an empty style.
pub fn resolve_style(
    steps: &[TypeStep],
    requested: &str,
    typography: &Typography,
    is_preset: bool,
) -> StyleProperties {
    let name = if is_preset {
        LegacyStepName::resolve(requested)
    } else {
        requested
    };
    let Some(step) = find_step(steps, name) else {
        debug!(step = name, "step not in current scale; inheriting styles");
        return StyleProperties::default();
    };

    if is_preset && let Some(preset) = step.preset {
        let style = StyleProperties {
            font_size: Some(format!("{}px", step.min_size)),
            font_weight: Some(preset.font_weight),
            line_height: Some(preset.line_height),
            letter_spacing: Some(preset.letter_spacing),
            ..StyleProperties::default()
        };
        return match preset.category {
            StepCategory::Body => style,
            StepCategory::Heading => style.with_heading_identity(&typography.heading),
        };
    }

    let style = StyleProperties {
        font_size: Some(step.clamp.clone()),
        ..StyleProperties::default()
    };
    if BODY_STEP_NAMES.contains(&name) {
        return style;
    }
    let heading = &typography.heading;
    StyleProperties {
        font_weight: Some(heading.font_weight),
        line_height: Some(heading.line_height),
        letter_spacing: Some(heading.letter_spacing),
        ..style
    }
    .with_heading_identity(heading)
}

/// Resolves the style for a preview slot through its mapped step.
pub fn resolve_slot(
    steps: &[TypeStep],
    mappings: &StyleMappings,
    slot: SlotId,
    typography: &Typography,
    is_preset: bool,
) -> StyleProperties {
    resolve_style(steps, mappings.step_for(slot), typography, is_preset)
}
