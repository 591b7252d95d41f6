//! Scale engine: turns a configuration into an ordered list of type steps.
//!
//! Three modes, in priority order:
//!
//! 1. **Preset** when the ratio names a fixed design-system scale.
//! 2. **Pinned** when the simulated width is at or below `min_width`; every
//!    step gets a constant size from the minimum-side parameters.
//! 3. **Fluid** otherwise; every step interpolates linearly between the two
//!    viewport bounds inside a `clamp()` expression.
//!
//! Heading steps (`heading-*`) scale from a fixed 16px reference in pinned
//! and fluid modes, so only the ratio drives their size. Body steps scale
//! from the configured font sizes.

use fluid_model::{
    ConfigError, FluidTypeConfig, PresetScale, PresetStep, ScaleRatio, StepCategory, TypeStep,
};
use tracing::{debug, warn};

use crate::clamp::ClampExpr;
use crate::units::{Length, UnitOptions, round_to};

/// Base size in px for heading steps outside preset mode.
pub const HEADING_REFERENCE_SIZE: f64 = 16.0;

/// Which computation applies to a configuration at a simulated width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    Preset(PresetScale),
    Pinned,
    Fluid,
}

impl ScaleMode {
    pub fn select(config: &FluidTypeConfig, simulated_width: f64) -> Self {
        match config.ratio {
            ScaleRatio::Preset(scale) => ScaleMode::Preset(scale),
            ScaleRatio::Fluid { .. } if simulated_width <= config.min_width => ScaleMode::Pinned,
            ScaleRatio::Fluid { .. } => ScaleMode::Fluid,
        }
    }
}

/// Straight line through two (viewport width, size) points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FluidLine {
    pub fn between(from: (f64, f64), to: (f64, f64)) -> Self {
        let slope = (to.1 - from.1) / (to.0 - from.0);
        Self {
            slope,
            intercept: from.1 - slope * from.0,
        }
    }

    pub fn at(&self, width: f64) -> f64 {
        self.intercept + self.slope * width
    }
}

/// Computes the full step list for `config` at `simulated_width`.
///
/// Pass `f64::INFINITY` (or anything above `min_width`) for an unconstrained
/// preview.
///
/// # Errors
///
/// Returns [`ConfigError`] for a degenerate viewport range, non-finite or
/// non-positive sizes and ratios, duplicate steps, an unknown base step, or a
/// NaN simulated width. Preset scales ignore the numeric fields and never fail.
pub fn compute_steps(
    config: &FluidTypeConfig,
    simulated_width: f64,
) -> Result<Vec<TypeStep>, ConfigError> {
    let (min_ratio, max_ratio) = match config.ratio {
        ScaleRatio::Preset(scale) => {
            debug!(scale = %scale, "using preset type scale");
            return Ok(preset_steps(scale));
        }
        ScaleRatio::Fluid { min, max } => (min, max),
    };
    if simulated_width.is_nan() {
        return Err(ConfigError::NonFinite {
            field: "simulated-width",
            value: simulated_width,
        });
    }
    config.validate()?;
    let Some(base_index) = config.base_index() else {
        // validate() only lets an unknown base step through when there are no steps
        return Ok(Vec::new());
    };

    let units = UnitOptions::from_config(config);
    let mode = ScaleMode::select(config, simulated_width);
    let steps = config
        .steps
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let power = index as i32 - base_index as i32;
            match mode {
                ScaleMode::Pinned => pinned_step(name, power, min_ratio, config, &units),
                _ => fluid_step(name, power, (min_ratio, max_ratio), config, &units),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        mode = ?mode,
        simulated_width,
        steps = steps.len(),
        "computed type scale"
    );
    Ok(steps)
}

/// Steps of a fixed preset scale: constant px sizes with their own typography.
pub fn preset_steps(scale: PresetScale) -> Vec<TypeStep> {
    scale
        .steps()
        .iter()
        .map(|&step: &PresetStep| TypeStep {
            name: step.name().to_string(),
            min_size: step.font_size(),
            max_size: step.font_size(),
            clamp: format!("{}px", step.font_size()),
            fallbacks: Vec::new(),
            preset: Some(step.into()),
        })
        .collect()
}

fn base_sizes(name: &str, config: &FluidTypeConfig) -> (f64, f64) {
    match StepCategory::of(name) {
        StepCategory::Heading => (HEADING_REFERENCE_SIZE, HEADING_REFERENCE_SIZE),
        StepCategory::Body => (config.min_font_size, config.max_font_size),
    }
}

fn pinned_step(
    name: &str,
    power: i32,
    ratio: f64,
    config: &FluidTypeConfig,
    units: &UnitOptions,
) -> Result<TypeStep, ConfigError> {
    let (base, _) = base_sizes(name, config);
    let size = finite("step-size", base * ratio.powi(power))?;
    Ok(TypeStep {
        name: name.to_string(),
        min_size: size,
        max_size: size,
        clamp: checked_length(units, size)?.to_fixed(units.decimals),
        fallbacks: Vec::new(),
        preset: None,
    })
}

fn fluid_step(
    name: &str,
    power: i32,
    (min_ratio, max_ratio): (f64, f64),
    config: &FluidTypeConfig,
    units: &UnitOptions,
) -> Result<TypeStep, ConfigError> {
    let (base_min, base_max) = base_sizes(name, config);
    let min_size = finite("step-size", base_min * min_ratio.powi(power))?;
    let max_size = finite("step-size", base_max * max_ratio.powi(power))?;

    let line = FluidLine::between((config.min_width, min_size), (config.max_width, max_size));
    let (lo, hi) = if min_size <= max_size {
        (min_size, max_size)
    } else {
        warn!(
            step = name,
            min_size, max_size, "step shrinks toward the wide viewport; swapping clamp bounds"
        );
        (max_size, min_size)
    };
    let slope = finite("slope", line.slope * 100.0)?;
    let intercept = finite("intercept", line.intercept)?;
    let expr = ClampExpr {
        min: checked_length(units, lo)?,
        intercept: checked_length(units, intercept)?,
        slope: round_to(slope, units.decimals),
        viewport_unit: units.viewport_unit,
        max: checked_length(units, hi)?,
    };

    let fallbacks = if config.include_fallbacks {
        vec![format!("font-size: {};", checked_length(units, min_size)?)]
    } else {
        Vec::new()
    };

    Ok(TypeStep {
        name: name.to_string(),
        min_size,
        max_size,
        clamp: expr.to_string(),
        fallbacks,
        preset: None,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Output-unit length, rejected when the unit conversion overflows.
fn checked_length(units: &UnitOptions, px: f64) -> Result<Length, ConfigError> {
    let length = units.length(px);
    finite("step-size", length.value)?;
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step_config(max_font_size: f64) -> FluidTypeConfig {
        FluidTypeConfig {
            min_width: 375.0,
            max_width: 1440.0,
            min_font_size: 14.0,
            max_font_size,
            ratio: ScaleRatio::uniform(1.125),
            steps: vec!["body".to_string(), "heading-6".to_string()],
            base_step: "body".to_string(),
            ..FluidTypeConfig::default()
        }
    }

    #[test]
    fn mode_priority() {
        let mut config = two_step_config(14.0);
        assert_eq!(ScaleMode::select(&config, 375.0), ScaleMode::Pinned);
        assert_eq!(ScaleMode::select(&config, 376.0), ScaleMode::Fluid);
        config.ratio = ScaleRatio::Preset(PresetScale::Shadcn);
        assert_eq!(
            ScaleMode::select(&config, 100.0),
            ScaleMode::Preset(PresetScale::Shadcn)
        );
    }

    #[test]
    fn line_passes_through_both_points() {
        let line = FluidLine::between((375.0, 14.0), (1440.0, 18.0));
        assert!((line.at(375.0) - 14.0).abs() < 1e-12);
        assert!((line.at(1440.0) - 18.0).abs() < 1e-12);
        assert!((line.intercept - 12.591_549).abs() < 1e-6);
    }

    #[test]
    fn headings_use_the_reference_size() {
        let steps = compute_steps(&two_step_config(14.0), f64::INFINITY).expect("steps");
        assert_eq!(steps[0].min_size, 14.0);
        assert_eq!(steps[0].max_size, 14.0);
        assert_eq!(steps[1].min_size, 18.0);
        assert_eq!(steps[1].max_size, 18.0);
        assert_eq!(steps[1].clamp, "clamp(1.125rem, 1.125rem + 0vw, 1.125rem)");
    }

    #[test]
    fn body_interpolates_between_font_sizes() {
        let steps = compute_steps(&two_step_config(18.0), 1440.0).expect("steps");
        assert_eq!(
            steps[0].clamp,
            "clamp(0.875rem, 0.787rem + 0.376vw, 1.125rem)"
        );
    }

    #[test]
    fn fallbacks_use_the_min_size() {
        let config = FluidTypeConfig {
            include_fallbacks: true,
            ..two_step_config(18.0)
        };
        let steps = compute_steps(&config, 1440.0).expect("steps");
        assert_eq!(steps[0].fallbacks, vec!["font-size: 0.875rem;".to_string()]);
    }

    #[test]
    fn overflowing_sizes_are_rejected() {
        let config = FluidTypeConfig {
            ratio: ScaleRatio::uniform(1e200),
            steps: vec!["body".into(), "heading-2".into(), "heading-1".into()],
            ..two_step_config(14.0)
        };
        assert!(matches!(
            compute_steps(&config, 1440.0),
            Err(ConfigError::NonFinite {
                field: "step-size",
                ..
            })
        ));
    }

    #[test]
    fn huge_sizes_keep_finite_css() {
        let config = FluidTypeConfig {
            min_font_size: 1e300,
            max_font_size: 1e300,
            use_rems: false,
            decimals: 10,
            steps: vec!["body".into()],
            ..two_step_config(14.0)
        };
        let steps = compute_steps(&config, 1440.0).expect("steps");
        assert!(!steps[0].clamp.contains("inf"));
        assert!(steps[0].clamp.ends_with("px)"));
    }

    #[test]
    fn steep_slopes_stay_finite_after_rounding() {
        let config = FluidTypeConfig {
            min_width: 1e-300,
            max_width: 2e-300,
            decimals: 6,
            ..two_step_config(18.0)
        };
        let steps = compute_steps(&config, 1440.0).expect("steps");
        assert!(steps.iter().all(|step| !step.clamp.contains("inf")));
        assert!(steps[0].clamp.starts_with("clamp(0.875rem, 0.625rem + "));
    }

    #[test]
    fn overflowing_slopes_are_rejected() {
        let config = FluidTypeConfig {
            min_width: 1e-308,
            max_width: 2e-308,
            ..two_step_config(18.0)
        };
        assert!(matches!(
            compute_steps(&config, 1440.0),
            Err(ConfigError::NonFinite {
                field: "slope",
                ..
            })
        ));
    }

    #[test]
    fn overflowing_rem_conversion_is_rejected() {
        let config = FluidTypeConfig {
            min_font_size: 1e300,
            max_font_size: 1e300,
            rem_value: 1e-10,
            ..two_step_config(1e300)
        };
        assert!(matches!(
            compute_steps(&config, 100.0),
            Err(ConfigError::NonFinite {
                field: "step-size",
                ..
            })
        ));
    }

    #[test]
    fn nan_width_is_rejected() {
        assert!(compute_steps(&two_step_config(14.0), f64::NAN).is_err());
    }
}
