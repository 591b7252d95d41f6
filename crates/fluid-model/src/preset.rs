//! Fixed design-system scales and legacy step aliases.
//!
//! Both tables are closed enums so every lookup is an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::step::StepCategory;

/// A hardcoded named type scale that replaces fluid interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetScale {
    /// The shadcn/ui typography scale.
    Shadcn,
}

impl PresetScale {
    pub const ALL: [PresetScale; 1] = [PresetScale::Shadcn];

    pub fn name(self) -> &'static str {
        match self {
            PresetScale::Shadcn => "shadcn",
        }
    }

    /// Ordered steps of the scale.
    pub fn steps(self) -> &'static [PresetStep] {
        match self {
            PresetScale::Shadcn => &PresetStep::ALL,
        }
    }
}

impl fmt::Display for PresetScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetScale {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetScale::ALL
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName::new("preset scale", s))
    }
}

/// One step of the shadcn scale, carrying its full typographic identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresetStep {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Body,
    BodySm,
    BodyLg,
}

impl PresetStep {
    /// Table order: headings largest first, then body, body-sm, body-lg.
    pub const ALL: [PresetStep; 9] = [
        PresetStep::Heading1,
        PresetStep::Heading2,
        PresetStep::Heading3,
        PresetStep::Heading4,
        PresetStep::Heading5,
        PresetStep::Heading6,
        PresetStep::Body,
        PresetStep::BodySm,
        PresetStep::BodyLg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PresetStep::Heading1 => "heading-1",
            PresetStep::Heading2 => "heading-2",
            PresetStep::Heading3 => "heading-3",
            PresetStep::Heading4 => "heading-4",
            PresetStep::Heading5 => "heading-5",
            PresetStep::Heading6 => "heading-6",
            PresetStep::Body => "body",
            PresetStep::BodySm => "body-sm",
            PresetStep::BodyLg => "body-lg",
        }
    }

    /// Font size in pixels.
    pub fn font_size(self) -> f64 {
        match self {
            PresetStep::Heading1 => 48.0,
            PresetStep::Heading2 => 30.0,
            PresetStep::Heading3 => 24.0,
            PresetStep::Heading4 => 20.0,
            PresetStep::Heading5 => 18.0,
            PresetStep::Heading6 => 16.0,
            PresetStep::Body => 14.0,
            // 14 / 1.125 and 14 * 1.125, rounded to two places
            PresetStep::BodySm => 12.44,
            PresetStep::BodyLg => 15.75,
        }
    }

    pub fn font_weight(self) -> u16 {
        match self {
            PresetStep::Heading1 => 800,
            PresetStep::Heading2
            | PresetStep::Heading3
            | PresetStep::Heading4
            | PresetStep::Heading5
            | PresetStep::Heading6 => 600,
            PresetStep::Body | PresetStep::BodySm | PresetStep::BodyLg => 400,
        }
    }

    pub fn line_height(self) -> f64 {
        match self {
            PresetStep::Heading1 => 1.0,
            PresetStep::Heading2 => 1.2,
            PresetStep::Heading3 => 1.333,
            PresetStep::Heading4 => 1.4,
            PresetStep::Heading5 | PresetStep::Heading6 | PresetStep::Body => 1.5,
            PresetStep::BodySm => 1.25,
            PresetStep::BodyLg => 1.75,
        }
    }

    /// Letter spacing in em.
    pub fn letter_spacing(self) -> f64 {
        match self.category() {
            StepCategory::Heading => -0.025,
            StepCategory::Body => 0.0,
        }
    }

    pub fn category(self) -> StepCategory {
        match self {
            PresetStep::Heading1
            | PresetStep::Heading2
            | PresetStep::Heading3
            | PresetStep::Heading4
            | PresetStep::Heading5
            | PresetStep::Heading6 => StepCategory::Heading,
            PresetStep::Body | PresetStep::BodySm | PresetStep::BodyLg => StepCategory::Body,
        }
    }
}

impl fmt::Display for PresetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetStep {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetStep::ALL
            .into_iter()
            .find(|step| step.name() == s)
            .ok_or_else(|| UnknownName::new("preset step", s))
    }
}

/// Short step names from earlier versions of the scale.
///
/// Only honoured when a preset scale is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyStepName {
    Display,
    Xxxl,
    Xxl,
    Xl,
    Lg,
    Md,
    Base,
    Sm,
}

impl LegacyStepName {
    pub const ALL: [LegacyStepName; 8] = [
        LegacyStepName::Display,
        LegacyStepName::Xxxl,
        LegacyStepName::Xxl,
        LegacyStepName::Xl,
        LegacyStepName::Lg,
        LegacyStepName::Md,
        LegacyStepName::Base,
        LegacyStepName::Sm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LegacyStepName::Display => "display",
            LegacyStepName::Xxxl => "xxxl",
            LegacyStepName::Xxl => "xxl",
            LegacyStepName::Xl => "xl",
            LegacyStepName::Lg => "lg",
            LegacyStepName::Md => "md",
            LegacyStepName::Base => "base",
            LegacyStepName::Sm => "sm",
        }
    }

    /// The current step this alias stands for.
    pub fn target(self) -> PresetStep {
        match self {
            LegacyStepName::Display => PresetStep::Heading1,
            LegacyStepName::Xxxl => PresetStep::Heading2,
            LegacyStepName::Xxl => PresetStep::Heading3,
            LegacyStepName::Xl => PresetStep::Heading4,
            LegacyStepName::Lg => PresetStep::Heading5,
            LegacyStepName::Md => PresetStep::Heading6,
            LegacyStepName::Base => PresetStep::Body,
            LegacyStepName::Sm => PresetStep::BodySm,
        }
    }

    /// Maps `name` to its current step name, or returns it unchanged.
    pub fn resolve(name: &str) -> &str {
        match name.parse::<LegacyStepName>() {
            Ok(alias) => alias.target().name(),
            Err(_) => name,
        }
    }
}

impl FromStr for LegacyStepName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegacyStepName::ALL
            .into_iter()
            .find(|alias| alias.name() == s)
            .ok_or_else(|| UnknownName::new("legacy step name", s))
    }
}

/// A name that matched no entry of a closed lookup table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: `{name}`")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}
