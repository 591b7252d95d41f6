//! Fluid type scale configuration.
//!
//! A configuration is an immutable snapshot: callers build or load one,
//! hand it to the scale engine, and replace it wholesale on every edit.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigLoadError};
use crate::preset::{PresetScale, UnknownName};
use crate::typography::Typography;

/// Upper bound on rounding precision for emitted numbers.
pub const MAX_DECIMALS: u32 = 10;

/// Default step names, smallest to largest.
pub const DEFAULT_STEPS: [&str; 9] = [
    "body-sm",
    "body",
    "body-lg",
    "heading-6",
    "heading-5",
    "heading-4",
    "heading-3",
    "heading-2",
    "heading-1",
];

/// Ratio between adjacent steps at each viewport bound, or a fixed preset.
///
/// Both bounds are either numeric or replaced by the preset together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleRatio {
    Fluid { min: f64, max: f64 },
    Preset(PresetScale),
}

impl ScaleRatio {
    pub fn uniform(ratio: f64) -> Self {
        ScaleRatio::Fluid {
            min: ratio,
            max: ratio,
        }
    }

    pub fn preset(&self) -> Option<PresetScale> {
        match self {
            ScaleRatio::Preset(scale) => Some(*scale),
            ScaleRatio::Fluid { .. } => None,
        }
    }
}

impl Default for ScaleRatio {
    fn default() -> Self {
        ScaleRatio::uniform(NamedRatio::MajorSecond.value())
    }
}

impl FromStr for ScaleRatio {
    type Err = UnknownName;

    /// Accepts a preset name, a named ratio, or a bare number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(scale) = s.parse::<PresetScale>() {
            return Ok(ScaleRatio::Preset(scale));
        }
        if let Ok(named) = s.parse::<NamedRatio>() {
            return Ok(ScaleRatio::uniform(named.value()));
        }
        s.trim()
            .parse::<f64>()
            .map(ScaleRatio::uniform)
            .map_err(|_| UnknownName::new("scale ratio", s))
    }
}

/// Classic modular-scale ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedRatio {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    PerfectFifth,
    GoldenRatio,
}

impl NamedRatio {
    pub const ALL: [NamedRatio; 8] = [
        NamedRatio::MinorSecond,
        NamedRatio::MajorSecond,
        NamedRatio::MinorThird,
        NamedRatio::MajorThird,
        NamedRatio::PerfectFourth,
        NamedRatio::AugmentedFourth,
        NamedRatio::PerfectFifth,
        NamedRatio::GoldenRatio,
    ];

    pub fn value(self) -> f64 {
        match self {
            NamedRatio::MinorSecond => 1.067,
            NamedRatio::MajorSecond => 1.125,
            NamedRatio::MinorThird => 1.2,
            NamedRatio::MajorThird => 1.25,
            NamedRatio::PerfectFourth => 1.333,
            NamedRatio::AugmentedFourth => 1.414,
            NamedRatio::PerfectFifth => 1.5,
            NamedRatio::GoldenRatio => 1.618,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            NamedRatio::MinorSecond => "minor-second",
            NamedRatio::MajorSecond => "major-second",
            NamedRatio::MinorThird => "minor-third",
            NamedRatio::MajorThird => "major-third",
            NamedRatio::PerfectFourth => "perfect-fourth",
            NamedRatio::AugmentedFourth => "augmented-fourth",
            NamedRatio::PerfectFifth => "perfect-fifth",
            NamedRatio::GoldenRatio => "golden-ratio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NamedRatio::MinorSecond => "Minor Second",
            NamedRatio::MajorSecond => "Major Second",
            NamedRatio::MinorThird => "Minor Third",
            NamedRatio::MajorThird => "Major Third",
            NamedRatio::PerfectFourth => "Perfect Fourth",
            NamedRatio::AugmentedFourth => "Augmented Fourth",
            NamedRatio::PerfectFifth => "Perfect Fifth",
            NamedRatio::GoldenRatio => "Golden Ratio",
        }
    }
}

impl fmt::Display for NamedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NamedRatio {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NamedRatio::ALL
            .into_iter()
            .find(|ratio| {
                ratio.slug().eq_ignore_ascii_case(wanted)
                    || ratio.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownName::new("named ratio", s))
    }
}

/// Everything the scale engine and style resolver need for one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FluidTypeConfig {
    /// Viewport width in px where `min_font_size` applies.
    pub min_width: f64,
    /// Viewport width in px where `max_font_size` applies.
    pub max_width: f64,
    /// Base step size in px at `min_width`.
    pub min_font_size: f64,
    /// Base step size in px at `max_width`.
    pub max_font_size: f64,
    pub ratio: ScaleRatio,
    /// Step names; position relative to `base_step` sets the exponent.
    pub steps: Vec<String>,
    pub base_step: String,
    /// Custom property prefix used by the CSS export.
    pub prefix: String,
    pub decimals: u32,
    pub use_rems: bool,
    /// Pixels per rem.
    pub rem_value: f64,
    /// Interpolate against the container (`cqi`) rather than the viewport (`vw`).
    pub use_container_width: bool,
    pub include_fallbacks: bool,
    pub typography: Typography,
}

impl Default for FluidTypeConfig {
    fn default() -> Self {
        Self {
            min_width: 375.0,
            max_width: 1440.0,
            min_font_size: 14.0,
            max_font_size: 14.0,
            ratio: ScaleRatio::default(),
            steps: DEFAULT_STEPS.iter().map(ToString::to_string).collect(),
            base_step: "body".to_string(),
            prefix: "fs".to_string(),
            decimals: 3,
            use_rems: true,
            rem_value: 16.0,
            use_container_width: false,
            include_fallbacks: false,
            typography: Typography::default(),
        }
    }
}

impl FluidTypeConfig {
    pub fn is_preset(&self) -> bool {
        self.ratio.preset().is_some()
    }

    /// Index of the base step within `steps`.
    pub fn base_index(&self) -> Option<usize> {
        self.steps.iter().position(|step| *step == self.base_step)
    }

    /// Checks every numeric field used by fluid and pinned computation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found. Step-list checks are skipped
    /// when `steps` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("min-width", self.min_width)?;
        check_positive("max-width", self.max_width)?;
        if self.min_width == self.max_width {
            return Err(ConfigError::DegenerateViewport {
                width: self.min_width,
            });
        }
        check_positive("min-font-size", self.min_font_size)?;
        check_positive("max-font-size", self.max_font_size)?;
        check_positive("rem-value", self.rem_value)?;
        if let ScaleRatio::Fluid { min, max } = self.ratio {
            check_positive("min-ratio", min)?;
            check_positive("max-ratio", max)?;
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::ExcessivePrecision {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }
        if self.steps.is_empty() {
            return Ok(());
        }
        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.as_str()) {
                return Err(ConfigError::DuplicateStep { name: step.clone() });
            }
        }
        if self.base_index().is_none() {
            return Err(ConfigError::UnknownBaseStep {
                base_step: self.base_step.clone(),
            });
        }
        Ok(())
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

/// Parses a TOML configuration; missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<FluidTypeConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Reads and parses a TOML configuration file.
///
/// Values are not validated here; the scale engine validates on use.
pub fn load_config(path: &Path) -> Result<FluidTypeConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|source| ConfigLoadError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        steps = config.steps.len(),
        preset = config.is_preset(),
        "loaded type scale config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        FluidTypeConfig::default().validate().expect("default config");
    }

    #[test]
    fn equal_widths_are_degenerate() {
        let config = FluidTypeConfig {
            min_width: 800.0,
            max_width: 800.0,
            ..FluidTypeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DegenerateViewport { width: 800.0 })
        );
    }

    #[test]
    fn non_finite_ratio_is_rejected() {
        let config = FluidTypeConfig {
            ratio: ScaleRatio::Fluid {
                min: f64::NAN,
                max: 1.2,
            },
            ..FluidTypeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "min-ratio",
                ..
            })
        ));
    }

    #[test]
    fn ratio_parses_names_numbers_and_presets() {
        assert_eq!(
            "shadcn".parse::<ScaleRatio>(),
            Ok(ScaleRatio::Preset(PresetScale::Shadcn))
        );
        assert_eq!(
            "golden-ratio".parse::<ScaleRatio>(),
            Ok(ScaleRatio::uniform(1.618))
        );
        assert_eq!("1.2".parse::<ScaleRatio>(), Ok(ScaleRatio::uniform(1.2)));
        assert!("huge".parse::<ScaleRatio>().is_err());
    }
}
