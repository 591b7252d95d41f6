//! CLI library components for the fluid type calculator.

pub mod logging;
pub mod overrides;
