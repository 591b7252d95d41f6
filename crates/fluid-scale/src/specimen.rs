//! Type specimen ordering and display metrics.

use fluid_model::{FluidTypeConfig, StepCategory, TypeStep};

use crate::units::{px_to_rem, round_to};

/// Precision used for specimen numbers that are not rounded to whole values.
const DISPLAY_DECIMALS: u32 = 3;

/// Viewport bound a specimen shows sizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Mobile: sizes at `min_width`.
    Min,
    /// Desktop: sizes at `max_width`.
    #[default]
    Max,
}

/// Rounding toggles for displayed pixel values. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecimenRounding {
    /// Font size snaps to whole pixels; so does line height unless the 4px
    /// snap applies.
    pub whole_pixels: bool,
    /// Line height snaps to the nearest multiple of 4px.
    pub line_height_multiple_of_four: bool,
}

impl SpecimenRounding {
    /// Three decimal places everywhere.
    pub const EXACT: Self = Self {
        whole_pixels: false,
        line_height_multiple_of_four: false,
    };
}

impl Default for SpecimenRounding {
    fn default() -> Self {
        Self {
            whole_pixels: true,
            line_height_multiple_of_four: true,
        }
    }
}

/// Headings first, then body steps; largest first within each group.
pub fn display_order(steps: &[TypeStep]) -> Vec<&TypeStep> {
    let mut ordered: Vec<&TypeStep> = steps.iter().collect();
    ordered.sort_by(|a, b| {
        category_rank(a.category())
            .cmp(&category_rank(b.category()))
            .then_with(|| b.min_size.total_cmp(&a.min_size))
    });
    ordered
}

fn category_rank(category: StepCategory) -> u8 {
    match category {
        StepCategory::Heading => 0,
        StepCategory::Body => 1,
    }
}

/// Numbers shown next to a step in a type specimen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecimenMetrics {
    pub font_size_px: f64,
    pub font_size_rem: f64,
    /// Unitless line height.
    pub line_height: f64,
    pub line_height_px: f64,
}

impl SpecimenMetrics {
    pub fn for_step(
        step: &TypeStep,
        config: &FluidTypeConfig,
        side: Side,
        rounding: SpecimenRounding,
    ) -> Self {
        let size = match side {
            Side::Min => step.min_size,
            Side::Max => step.max_size,
        };
        let line_height = match step.preset {
            Some(style) => style.line_height,
            None if StepCategory::of(&step.name) == StepCategory::Heading => {
                config.typography.heading.line_height
            }
            None => config.typography.body.line_height,
        };
        let line_height_px = size * line_height;

        let font_size_px = if rounding.whole_pixels {
            size.round()
        } else {
            round_to(size, DISPLAY_DECIMALS)
        };
        let line_height_px = if rounding.line_height_multiple_of_four {
            (line_height_px / 4.0).round() * 4.0
        } else if rounding.whole_pixels {
            line_height_px.round()
        } else {
            round_to(line_height_px, DISPLAY_DECIMALS)
        };

        Self {
            font_size_px,
            font_size_rem: round_to(px_to_rem(size, config.rem_value), DISPLAY_DECIMALS),
            line_height: round_to(line_height, DISPLAY_DECIMALS),
            line_height_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use fluid_model::{PresetScale, ScaleRatio};

    use super::*;
    use crate::engine::{compute_steps, preset_steps};

    #[test]
    fn headings_come_first_largest_first() {
        let steps = compute_steps(&FluidTypeConfig::default(), f64::INFINITY).expect("steps");
        let names: Vec<&str> = display_order(&steps)
            .iter()
            .map(|step| step.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "heading-1",
                "heading-2",
                "heading-3",
                "heading-4",
                "heading-5",
                "heading-6",
                "body-lg",
                "body",
                "body-sm"
            ]
        );
    }

    #[test]
    fn preset_line_height_comes_from_the_step() {
        let config = FluidTypeConfig {
            ratio: ScaleRatio::Preset(PresetScale::Shadcn),
            ..FluidTypeConfig::default()
        };
        let steps = preset_steps(PresetScale::Shadcn);
        let h2 = &steps[1];
        let metrics = SpecimenMetrics::for_step(h2, &config, Side::Max, SpecimenRounding::EXACT);
        assert_eq!(metrics.font_size_px, 30.0);
        assert_eq!(metrics.font_size_rem, 1.875);
        assert_eq!(metrics.line_height, 1.2);
        assert_eq!(metrics.line_height_px, 36.0);
    }

    #[test]
    fn rounding_toggles_combine() {
        let config = FluidTypeConfig::default();
        let step = TypeStep {
            name: "body".to_string(),
            min_size: 14.0,
            max_size: 15.3,
            clamp: String::new(),
            fallbacks: Vec::new(),
            preset: None,
        };
        let metrics = |rounding| SpecimenMetrics::for_step(&step, &config, Side::Max, rounding);

        // 15.3 * 1.5 = 22.95
        let both = metrics(SpecimenRounding::default());
        assert_eq!((both.font_size_px, both.line_height_px), (15.0, 24.0));

        let snap_only = metrics(SpecimenRounding {
            whole_pixels: false,
            ..SpecimenRounding::default()
        });
        assert_eq!((snap_only.font_size_px, snap_only.line_height_px), (15.3, 24.0));

        let whole_only = metrics(SpecimenRounding {
            line_height_multiple_of_four: false,
            ..SpecimenRounding::default()
        });
        assert_eq!((whole_only.font_size_px, whole_only.line_height_px), (15.0, 23.0));

        let exact = metrics(SpecimenRounding::EXACT);
        assert_eq!((exact.font_size_px, exact.line_height_px), (15.3, 22.95));

        let mobile = SpecimenMetrics::for_step(&step, &config, Side::Min, SpecimenRounding::EXACT);
        assert_eq!(mobile.line_height_px, 21.0);
    }
}
