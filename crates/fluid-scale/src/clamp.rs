//! CSS `clamp()` expressions as emitted by the engine.
//!
//! The preferred term is always `intercept + slope·unit`, where the slope is
//! a percentage of the viewport (or container) width.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::units::{Length, LengthUnit, ViewportUnit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClampParseError {
    #[error("not a clamp expression: `{0}`")]
    Malformed(String),

    #[error("invalid length `{0}`")]
    InvalidLength(String),
}

/// `clamp(min, intercept + slope·viewport_unit, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampExpr {
    pub min: Length,
    pub intercept: Length,
    /// Percent of the viewport width per pixel of viewport width, times 100.
    pub slope: f64,
    pub viewport_unit: ViewportUnit,
    pub max: Length,
}

impl ClampExpr {
    /// Value of the preferred term, in px, at the given viewport width.
    pub fn preferred_at(&self, width: f64, rem_value: f64) -> f64 {
        self.intercept.to_px(rem_value) + self.slope * width / 100.0
    }

    /// Resolved size in px, following CSS `clamp()` semantics.
    pub fn evaluate(&self, width: f64, rem_value: f64) -> f64 {
        let lo = self.min.to_px(rem_value);
        let hi = self.max.to_px(rem_value);
        lo.max(self.preferred_at(width, rem_value).min(hi))
    }
}

impl fmt::Display for ClampExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clamp({}, {} + {}{}, {})",
            self.min,
            self.intercept,
            self.slope,
            self.viewport_unit.suffix(),
            self.max
        )
    }
}

impl FromStr for ClampExpr {
    type Err = ClampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ClampParseError::Malformed(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("clamp(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [min, preferred, max] = parts.as_slice() else {
            return Err(malformed());
        };
        let (intercept, slope) = preferred.split_once(" + ").ok_or_else(malformed)?;
        let (slope, viewport_unit) = parse_viewport_term(slope.trim())?;
        Ok(Self {
            min: min.parse()?,
            intercept: intercept.trim().parse()?,
            slope,
            viewport_unit,
            max: max.parse()?,
        })
    }
}

impl FromStr for Length {
    type Err = ClampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, unit) = if let Some(number) = s.strip_suffix("rem") {
            (number, LengthUnit::Rem)
        } else if let Some(number) = s.strip_suffix("px") {
            (number, LengthUnit::Px)
        } else {
            return Err(ClampParseError::InvalidLength(s.to_string()));
        };
        let value = number
            .parse::<f64>()
            .map_err(|_| ClampParseError::InvalidLength(s.to_string()))?;
        Ok(Length { value, unit })
    }
}

fn parse_viewport_term(term: &str) -> Result<(f64, ViewportUnit), ClampParseError> {
    let invalid = || ClampParseError::InvalidLength(term.to_string());
    let (number, unit) = if let Some(number) = term.strip_suffix("cqi") {
        (number, ViewportUnit::Cqi)
    } else if let Some(number) = term.strip_suffix("vw") {
        (number, ViewportUnit::Vw)
    } else {
        return Err(invalid());
    };
    let value = number.parse::<f64>().map_err(|_| invalid())?;
    Ok((value, unit))
}

/// Resolves a step's CSS value (clamp expression or plain length) to px.
pub fn evaluate_size(css: &str, width: f64, rem_value: f64) -> Result<f64, ClampParseError> {
    if css.trim_start().starts_with("clamp(") {
        Ok(css.parse::<ClampExpr>()?.evaluate(width, rem_value))
    } else {
        Ok(css.parse::<Length>()?.to_px(rem_value))
    }
}
