//! Style resolution for preview text elements.
//!
//! - **resolver**: step name to inline CSS properties
//! - **slots**: the preview slot catalogue
//! - **mapping**: default slot rules and session overrides

pub mod mapping;
pub mod resolver;
pub mod slots;

pub use mapping::{StyleMappings, default_step_for};
pub use resolver::{BODY_STEP_NAMES, StyleProperties, resolve_slot, resolve_style};
pub use slots::{PreviewTab, SlotId, UnknownSlot};
