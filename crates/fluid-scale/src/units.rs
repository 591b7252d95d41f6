//! Unit conversion and number formatting for emitted CSS.

use std::fmt;

use fluid_model::FluidTypeConfig;

/// Rounds to `decimals` places, half away from zero. Negative zero becomes zero.
///
/// Values too large to scale by `10^decimals` carry no fractional digits and
/// are returned as they are.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Rounds and prints the shortest decimal form (`1.50` prints as `1.5`).
pub fn format_number(value: f64, decimals: u32) -> String {
    round_to(value, decimals).to_string()
}

pub fn px_to_rem(px: f64, rem_value: f64) -> f64 {
    px / rem_value
}

pub fn rem_to_px(rem: f64, rem_value: f64) -> f64 {
    rem * rem_value
}

/// Absolute unit for emitted sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Rem,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Rem => "rem",
        }
    }
}

/// Relative unit for the interpolation term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportUnit {
    /// Percent of the viewport width.
    Vw,
    /// Percent of the query container's inline size.
    Cqi,
}

impl ViewportUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            ViewportUnit::Vw => "vw",
            ViewportUnit::Cqi => "cqi",
        }
    }
}

/// A number with an absolute unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub fn rem(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Rem,
        }
    }

    /// Prints exactly `decimals` fractional digits (`1.000rem`).
    pub fn to_fixed(self, decimals: u32) -> String {
        format!("{:.*}{}", decimals as usize, self.value, self.unit.suffix())
    }

    pub fn to_px(self, rem_value: f64) -> f64 {
        match self.unit {
            LengthUnit::Px => self.value,
            LengthUnit::Rem => rem_to_px(self.value, rem_value),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Formatting settings taken from a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitOptions {
    pub unit: LengthUnit,
    pub viewport_unit: ViewportUnit,
    pub rem_value: f64,
    pub decimals: u32,
}

impl UnitOptions {
    pub fn from_config(config: &FluidTypeConfig) -> Self {
        Self {
            unit: if config.use_rems {
                LengthUnit::Rem
            } else {
                LengthUnit::Px
            },
            viewport_unit: if config.use_container_width {
                ViewportUnit::Cqi
            } else {
                ViewportUnit::Vw
            },
            rem_value: config.rem_value,
            decimals: config.decimals,
        }
    }

    /// Converts a pixel value to the output unit and rounds it.
    pub fn length(&self, px: f64) -> Length {
        let value = match self.unit {
            LengthUnit::Px => px,
            LengthUnit::Rem => px_to_rem(px, self.rem_value),
        };
        Length {
            value: round_to(value, self.decimals),
            unit: self.unit,
        }
    }

    pub fn format_length(&self, px: f64) -> String {
        self.length(px).to_string()
    }
}

/// Formats a pixel value in the configured unit.
pub fn format_length(px: f64, options: &UnitOptions) -> String {
    options.format_length(px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(0.375_586_85, 3), 0.376);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(2.0, 0), 2.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_number(-0.0001, 3), "0");
        assert!(round_to(-0.0001, 3).is_sign_positive());
    }

    #[test]
    fn huge_values_survive_rounding() {
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(-4e302, 6), -4e302);
        assert!(round_to(f64::MAX, 10).is_finite());
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_number(1.5, 3), "1.5");
        assert_eq!(format_number(18.0, 3), "18");
        assert_eq!(format_number(0.786_971_83, 3), "0.787");
    }

    #[test]
    fn lengths_use_configured_unit() {
        let rems = UnitOptions {
            unit: LengthUnit::Rem,
            viewport_unit: ViewportUnit::Vw,
            rem_value: 16.0,
            decimals: 3,
        };
        assert_eq!(rems.format_length(14.0), "0.875rem");
        assert_eq!(rems.format_length(18.0), "1.125rem");

        let px = UnitOptions {
            unit: LengthUnit::Px,
            ..rems
        };
        assert_eq!(format_length(12.591_549, &px), "12.592px");
    }

    #[test]
    fn fixed_lengths_keep_trailing_zeros() {
        assert_eq!(Length::rem(1.0).to_fixed(3), "1.000rem");
        assert_eq!(Length::px(12.5).to_fixed(0), "13px");
        assert_eq!(Length::px(14.0).to_fixed(2), "14.00px");
    }

    #[test]
    fn rem_round_trip_stays_within_precision() {
        let px = 17.777_777;
        let rem = round_to(px_to_rem(px, 16.0), 3);
        assert!((rem_to_px(rem, 16.0) - px).abs() <= 0.0005 * 16.0);
    }
}
