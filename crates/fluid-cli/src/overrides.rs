//! Configuration assembly: TOML file first, command-line flags on top.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use fluid_model::{FluidTypeConfig, NamedRatio, ScaleRatio, load_config};
use fluid_style::{SlotId, StyleMappings};
use tracing::debug;

/// Flags shared by every command that computes a scale.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// TOML configuration file; flags below override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated preview width in px (default: unconstrained).
    #[arg(long = "width", value_name = "PX")]
    pub width: Option<f64>,

    /// Scale ratio at both bounds: a number, a named ratio, or `shadcn`.
    #[arg(long = "ratio", value_name = "RATIO")]
    pub ratio: Option<ScaleRatio>,

    /// Ratio at the minimum viewport width.
    #[arg(long = "min-ratio", value_name = "RATIO")]
    pub min_ratio: Option<f64>,

    /// Ratio at the maximum viewport width.
    #[arg(long = "max-ratio", value_name = "RATIO")]
    pub max_ratio: Option<f64>,

    #[arg(long = "min-width", value_name = "PX")]
    pub min_width: Option<f64>,

    #[arg(long = "max-width", value_name = "PX")]
    pub max_width: Option<f64>,

    /// Base step size at the minimum viewport width.
    #[arg(long = "min-font-size", value_name = "PX")]
    pub min_font_size: Option<f64>,

    /// Base step size at the maximum viewport width.
    #[arg(long = "max-font-size", value_name = "PX")]
    pub max_font_size: Option<f64>,

    #[arg(long = "base-step", value_name = "STEP")]
    pub base_step: Option<String>,

    /// Custom property prefix for the CSS export.
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Pixels per rem.
    #[arg(long = "rem-value", value_name = "PX")]
    pub rem_value: Option<f64>,

    /// Emit px instead of rem.
    #[arg(long = "px")]
    pub px: bool,

    /// Interpolate against the container (`cqi`) instead of the viewport.
    #[arg(long = "container")]
    pub container: bool,

    /// Attach static fallback declarations to fluid steps.
    #[arg(long = "fallbacks")]
    pub fallbacks: bool,

    /// Decimal places for emitted numbers.
    #[arg(long = "decimals", value_name = "N")]
    pub decimals: Option<u32>,
}

impl ConfigOverrides {
    /// Simulated width, `f64::INFINITY` when none was given.
    pub fn simulated_width(&self) -> f64 {
        self.width.unwrap_or(f64::INFINITY)
    }

    /// Loads the file (or defaults) and applies every flag that was set.
    pub fn resolve(&self) -> Result<FluidTypeConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => FluidTypeConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut FluidTypeConfig) {
        if let Some(ratio) = self.ratio {
            config.ratio = ratio;
        }
        if self.min_ratio.is_some() || self.max_ratio.is_some() {
            let (min, max) = match config.ratio {
                ScaleRatio::Fluid { min, max } => (min, max),
                ScaleRatio::Preset(_) => {
                    let ratio = NamedRatio::MajorSecond.value();
                    (ratio, ratio)
                }
            };
            config.ratio = ScaleRatio::Fluid {
                min: self.min_ratio.unwrap_or(min),
                max: self.max_ratio.unwrap_or(max),
            };
        }
        set_if_some(&mut config.min_width, self.min_width);
        set_if_some(&mut config.max_width, self.max_width);
        set_if_some(&mut config.min_font_size, self.min_font_size);
        set_if_some(&mut config.max_font_size, self.max_font_size);
        set_if_some(&mut config.rem_value, self.rem_value);
        set_if_some(&mut config.decimals, self.decimals);
        if let Some(base_step) = &self.base_step {
            config.base_step.clone_from(base_step);
        }
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        if self.px {
            config.use_rems = false;
        }
        if self.container {
            config.use_container_width = true;
        }
        if self.fallbacks {
            config.include_fallbacks = true;
        }
    }
}

fn set_if_some<T: Copy>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn read_config(path: &Path) -> Result<FluidTypeConfig> {
    let config = load_config(path).with_context(|| format!("load {}", path.display()))?;
    debug!(path = %path.display(), "using config file");
    Ok(config)
}

/// Parses a `slot=step` override.
pub fn parse_mapping(raw: &str) -> Result<(SlotId, String), String> {
    let (slot, step) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=STEP, got `{raw}`"))?;
    let slot = slot.parse::<SlotId>().map_err(|error| error.to_string())?;
    let step = step.trim();
    if step.is_empty() {
        return Err(format!("missing step name for `{slot}`"));
    }
    Ok((slot, step.to_string()))
}

pub fn build_mappings(entries: &[(SlotId, String)]) -> StyleMappings {
    let mut mappings = StyleMappings::new();
    for (slot, step) in entries {
        mappings.set(*slot, step.as_str());
    }
    for (slot, step) in mappings.iter() {
        debug!(slot = %slot, step, "slot override");
    }
    mappings
}

#[cfg(test)]
mod tests {
    use fluid_model::PresetScale;

    use super::*;

    #[test]
    fn min_ratio_leaves_preset_mode() {
        let overrides = ConfigOverrides {
            ratio: Some(ScaleRatio::Preset(PresetScale::Shadcn)),
            min_ratio: Some(1.2),
            ..ConfigOverrides::default()
        };
        let mut config = FluidTypeConfig::default();
        overrides.apply(&mut config);
        assert_eq!(
            config.ratio,
            ScaleRatio::Fluid {
                min: 1.2,
                max: 1.125
            }
        );
    }

    #[test]
    fn unset_flags_keep_config_values() {
        let mut config = FluidTypeConfig {
            prefix: "type".to_string(),
            use_rems: true,
            ..FluidTypeConfig::default()
        };
        ConfigOverrides::default().apply(&mut config);
        assert_eq!(config, FluidTypeConfig {
            prefix: "type".to_string(),
            ..FluidTypeConfig::default()
        });
    }
}
