//! Data model for fluid type scales.
//!
//! - **config**: the configuration snapshot, scale ratios, and TOML loading
//! - **step**: computed type steps and their categories
//! - **preset**: fixed design-system scales and legacy step aliases
//! - **typography**: body and heading font settings
//! - **error**: configuration and load errors

pub mod config;
pub mod error;
pub mod preset;
pub mod step;
pub mod typography;

pub use config::{
    DEFAULT_STEPS, FluidTypeConfig, MAX_DECIMALS, NamedRatio, ScaleRatio, load_config,
    parse_config,
};
pub use error::{ConfigError, ConfigLoadError};
pub use preset::{LegacyStepName, PresetScale, PresetStep, UnknownName};
pub use step::{PresetStyle, StepCategory, TypeStep, find_step};
pub use typography::{BodyTypography, HeadingTypography, Inheritable, Typography, font_stack};
