//! Which step each preview slot uses.
//!
//! Every slot has a rule-based default; the session can override any slot
//! with another step name.

use std::collections::BTreeMap;

use tracing::debug;

use crate::slots::{PreviewTab, SlotId};

/// Substring rules checked in order after the exact-id rules.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("heading-2", "heading-2"),
    ("heading-3", "heading-3"),
    ("feature-description", "body"),
    ("feature-title", "heading-5"),
    ("card-title", "heading-6"),
    ("card-value", "heading-3"),
    ("section-title", "heading-5"),
];

/// Substring rules checked after the generic `heading` rule.
const TRAILING_RULES: &[(&str, &str)] = &[
    ("table-header", "body-sm"),
    ("button", "body-sm"),
    ("tabs", "body-sm"),
    ("badge", "body-sm"),
    ("meta", "body-sm"),
    ("description", "body"),
    ("list-item", "body"),
    ("blockquote", "body-lg"),
    ("input", "body"),
    ("label", "body-sm"),
    ("pagination", "body-sm"),
    ("table-cell", "body"),
];

/// Default step for a slot id, most specific rule first.
///
/// Works on any id string so callers can map slots outside the built-in
/// catalogue. Unmatched ids fall back to `body`.
pub fn default_step_for(slot: &str) -> &'static str {
    match slot {
        "landing-heading" | "article-title" => return "heading-1",
        "landing-heading-2" => return "heading-2",
        "dashboard-title" | "tasks-title" => return "heading-3",
        _ => {}
    }
    if let Some(step) = first_match(slot, DEFAULT_RULES) {
        return step;
    }
    if slot.contains("heading") && !slot.contains("card") && !slot.contains("feature") {
        return "heading-1";
    }
    first_match(slot, TRAILING_RULES).unwrap_or("body")
}

fn first_match(slot: &str, rules: &[(&str, &'static str)]) -> Option<&'static str> {
    rules
        .iter()
        .find(|(needle, _)| slot.contains(needle))
        .map(|&(_, step)| step)
}

/// Session-scoped slot overrides on top of the default rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMappings {
    overrides: BTreeMap<SlotId, String>,
}

impl StyleMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override when set, default rule otherwise.
    pub fn step_for(&self, slot: SlotId) -> &str {
        self.overrides
            .get(&slot)
            .map_or_else(|| default_step_for(slot.as_str()), String::as_str)
    }

    pub fn is_overridden(&self, slot: SlotId) -> bool {
        self.overrides.contains_key(&slot)
    }

    pub fn set(&mut self, slot: SlotId, step: impl Into<String>) {
        let step = step.into();
        debug!(slot = %slot, step = %step, "style mapping override");
        self.overrides.insert(slot, step);
    }

    /// Removes one override, returning the step it pointed at.
    pub fn clear(&mut self, slot: SlotId) -> Option<String> {
        self.overrides.remove(&slot)
    }

    /// Drops every override for slots on `tab`; other tabs keep theirs.
    pub fn restore_defaults(&mut self, tab: PreviewTab) {
        let before = self.overrides.len();
        self.overrides.retain(|slot, _| slot.tab() != tab);
        debug!(
            tab = %tab,
            cleared = before - self.overrides.len(),
            "restored default style mappings"
        );
    }

    /// Overrides in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &str)> {
        self.overrides
            .iter()
            .map(|(slot, step)| (*slot, step.as_str()))
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
