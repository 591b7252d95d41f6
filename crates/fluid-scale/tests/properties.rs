//! Property tests for the scale engine.

use fluid_model::{ConfigError, FluidTypeConfig, PresetScale, ScaleRatio};
use fluid_scale::{
    ClampExpr, compute_steps, evaluate_size, preset_steps, px_to_rem, rem_to_px, round_to,
};
use proptest::prelude::*;

fn fluid_config() -> impl Strategy<Value = FluidTypeConfig> {
    let widths = (200.0..800.0f64, 100.0..1600.0f64);
    let fonts = (10.0..24.0f64, 10.0..24.0f64);
    let ratios = (1.0..1.7f64, 1.0..1.7f64);
    let units = (2u32..=5, any::<bool>(), any::<bool>());
    (widths, fonts, ratios, units).prop_map(
        |((min_width, span), (min_font, max_font), (min, max), (decimals, rems, container))| {
            FluidTypeConfig {
                min_width,
                max_width: min_width + span,
                min_font_size: min_font,
                max_font_size: max_font,
                ratio: ScaleRatio::Fluid { min, max },
                decimals,
                use_rems: rems,
                use_container_width: container,
                ..FluidTypeConfig::default()
            }
        },
    )
}

/// Worst-case error, in px, from rounding the intercept and slope at `width`.
fn rounding_tolerance(config: &FluidTypeConfig, width: f64) -> f64 {
    let unit_px = if config.use_rems { config.rem_value } else { 1.0 };
    let half_ulp = 0.5 * 10f64.powi(-(config.decimals as i32));
    half_ulp * (unit_px + width / 100.0) + 1e-9
}

proptest! {
    #[test]
    fn preferred_term_hits_both_endpoints(config in fluid_config()) {
        let steps = compute_steps(&config, f64::INFINITY).expect("valid config");
        for step in &steps {
            let expr: ClampExpr = step.clamp.parse().expect("engine emits parseable clamp");
            let at_min = expr.preferred_at(config.min_width, config.rem_value);
            let at_max = expr.preferred_at(config.max_width, config.rem_value);
            let min_tolerance = rounding_tolerance(&config, config.min_width);
            let max_tolerance = rounding_tolerance(&config, config.max_width);
            prop_assert!((at_min - step.min_size).abs() <= min_tolerance);
            prop_assert!((at_max - step.max_size).abs() <= max_tolerance);
        }
    }

    #[test]
    fn clamp_bounds_are_ordered(config in fluid_config()) {
        let steps = compute_steps(&config, f64::INFINITY).expect("valid config");
        for step in &steps {
            let expr: ClampExpr = step.clamp.parse().expect("engine emits parseable clamp");
            prop_assert!(expr.min.to_px(config.rem_value) <= expr.max.to_px(config.rem_value));
            prop_assert!(step.min_size.is_finite() && step.max_size.is_finite());
        }
    }

    #[test]
    fn base_step_keeps_configured_sizes(config in fluid_config()) {
        let steps = compute_steps(&config, f64::INFINITY).expect("valid config");
        let base = steps.iter().find(|step| step.name == config.base_step).expect("base step");
        prop_assert_eq!(base.min_size, config.min_font_size);
        prop_assert_eq!(base.max_size, config.max_font_size);
    }

    #[test]
    fn presets_ignore_numeric_fields(config in fluid_config(), width in 0.0..3000.0f64) {
        let config = FluidTypeConfig {
            ratio: ScaleRatio::Preset(PresetScale::Shadcn),
            ..config
        };
        let steps = compute_steps(&config, width).expect("preset never fails");
        prop_assert_eq!(steps, preset_steps(PresetScale::Shadcn));
    }

    #[test]
    fn pinned_sizes_are_constant(
        config in fluid_config(),
        offset in 0.0..200.0f64,
        other_font in 10.0..24.0f64,
    ) {
        let width = config.min_width - offset;
        let steps = compute_steps(&config, width).expect("valid config");
        let changed = FluidTypeConfig { min_font_size: other_font, ..config.clone() };
        let other = compute_steps(&changed, width).expect("valid config");
        for (step, other) in steps.iter().zip(&other) {
            prop_assert_eq!(step.min_size, step.max_size);
            let px = evaluate_size(&step.clamp, width, config.rem_value).expect("plain length");
            prop_assert!((px - step.min_size).abs() <= rounding_tolerance(&config, 0.0));
            if step.is_heading() {
                prop_assert_eq!(step.min_size, other.min_size);
            }
        }
    }

    #[test]
    fn rem_round_trip(px in 1.0..200.0f64, rem_value in 8.0..32.0f64, decimals in 0u32..=6) {
        let rem = round_to(px_to_rem(px, rem_value), decimals);
        let tolerance = 0.5 * 10f64.powi(-(decimals as i32)) + 1e-12;
        prop_assert!((rem - px / rem_value).abs() <= tolerance);
        prop_assert!((rem_to_px(rem, rem_value) - px).abs() <= tolerance * rem_value + 1e-9);
    }

    #[test]
    fn equal_widths_are_rejected(config in fluid_config(), width in -100.0..3000.0f64) {
        let config = FluidTypeConfig { max_width: config.min_width, ..config };
        let degenerate = matches!(
            compute_steps(&config, width),
            Err(ConfigError::DegenerateViewport { .. })
        );
        prop_assert!(degenerate);
    }
}
