//! Body and heading typographic settings.
//!
//! The scale engine ignores these; they feed style resolution and the CSS export.

use std::fmt;

use serde::{Deserialize, Serialize};

const INHERIT: &str = "inherit";

/// A setting that is either inherited from the body or set explicitly.
///
/// Serialized as the literal string `"inherit"` or the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Inheritable {
    Inherit,
    Value(String),
}

impl Inheritable {
    pub fn value(value: impl Into<String>) -> Self {
        Inheritable::Value(value.into())
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, Inheritable::Inherit)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Inheritable::Inherit => None,
            Inheritable::Value(value) => Some(value),
        }
    }
}

impl From<String> for Inheritable {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(INHERIT) {
            Inheritable::Inherit
        } else {
            Inheritable::Value(value)
        }
    }
}

impl From<Inheritable> for String {
    fn from(value: Inheritable) -> Self {
        match value {
            Inheritable::Inherit => INHERIT.to_string(),
            Inheritable::Value(value) => value,
        }
    }
}

impl fmt::Display for Inheritable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inheritable::Inherit => f.write_str(INHERIT),
            Inheritable::Value(value) => f.write_str(value),
        }
    }
}

/// Settings applied to running text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BodyTypography {
    pub font_family: String,
    pub font_weight: u16,
    pub line_height: f64,
    /// Letter spacing in em.
    pub letter_spacing: f64,
    pub color: String,
}

impl Default for BodyTypography {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_weight: 400,
            line_height: 1.5,
            letter_spacing: 0.0,
            color: "#2d2d2d".to_string(),
        }
    }
}

/// Settings applied to heading steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HeadingTypography {
    pub font_family: Inheritable,
    pub font_weight: u16,
    pub line_height: f64,
    /// Letter spacing in em.
    pub letter_spacing: f64,
    pub color: Inheritable,
}

impl Default for HeadingTypography {
    fn default() -> Self {
        Self {
            font_family: Inheritable::value("Inter"),
            font_weight: 600,
            line_height: 1.1,
            letter_spacing: -0.02,
            color: Inheritable::Inherit,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub body: BodyTypography,
    pub heading: HeadingTypography,
}

/// Quotes a family name and appends the generic fallback.
pub fn font_stack(family: &str, quote: char) -> String {
    format!("{quote}{family}{quote}, sans-serif")
}
