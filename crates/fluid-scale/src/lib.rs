//! Fluid type scale engine.
//!
//! - **engine**: mode selection and step computation
//! - **units**: rounding, px/rem conversion, CSS number formatting
//! - **clamp**: `clamp()` expressions, parsing and evaluation
//! - **export**: `:root` custom-property block
//! - **specimen**: specimen ordering and display metrics

pub mod clamp;
pub mod engine;
pub mod export;
pub mod specimen;
pub mod units;

pub use clamp::{ClampExpr, ClampParseError, evaluate_size};
pub use engine::{FluidLine, HEADING_REFERENCE_SIZE, ScaleMode, compute_steps, preset_steps};
pub use export::css_custom_properties;
pub use specimen::{Side, SpecimenMetrics, SpecimenRounding, display_order};
pub use units::{
    Length, LengthUnit, UnitOptions, ViewportUnit, format_length, format_number, px_to_rem,
    rem_to_px, round_to,
};
