//! Computed type steps.

use serde::{Deserialize, Serialize};

use crate::preset::PresetStep;

/// Whether a step styles headings or running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
    Heading,
    Body,
}

impl StepCategory {
    /// Classifies a step by name: `heading-*` steps are headings, all others body.
    pub fn of(name: &str) -> Self {
        if name.starts_with("heading-") {
            StepCategory::Heading
        } else {
            StepCategory::Body
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepCategory::Heading => "heading",
            StepCategory::Body => "body",
        }
    }
}

/// Typography carried by a step of a preset scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetStyle {
    pub font_weight: u16,
    pub line_height: f64,
    /// Letter spacing in em.
    pub letter_spacing: f64,
    pub category: StepCategory,
}

impl From<PresetStep> for PresetStyle {
    fn from(step: PresetStep) -> Self {
        Self {
            font_weight: step.font_weight(),
            line_height: step.line_height(),
            letter_spacing: step.letter_spacing(),
            category: step.category(),
        }
    }
}

/// One named rung of a computed scale.
///
/// Sizes are in pixels: `min_size` at the minimum viewport width and
/// `max_size` at the maximum. `clamp` is a ready-to-use CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStep {
    pub name: String,
    pub min_size: f64,
    pub max_size: f64,
    pub clamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PresetStyle>,
}

impl TypeStep {
    /// Category from the preset table when present, otherwise from the name.
    pub fn category(&self) -> StepCategory {
        self.preset
            .map_or_else(|| StepCategory::of(&self.name), |style| style.category)
    }

    pub fn is_heading(&self) -> bool {
        self.category() == StepCategory::Heading
    }

    /// True when the size does not vary with the viewport.
    pub fn is_constant(&self) -> bool {
        self.min_size == self.max_size
    }
}

/// Looks up a step by name.
pub fn find_step<'a>(steps: &'a [TypeStep], name: &str) -> Option<&'a TypeStep> {
    steps.iter().find(|step| step.name == name)
}
