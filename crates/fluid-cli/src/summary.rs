use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fluid_model::{FluidTypeConfig, StepCategory, TypeStep};
use fluid_scale::{ScaleMode, Side, SpecimenMetrics, SpecimenRounding, display_order};
use fluid_style::{PreviewTab, SlotId, StyleMappings};

pub fn print_scale(
    steps: &[TypeStep],
    config: &FluidTypeConfig,
    mode: ScaleMode,
    side: Side,
    rounding: SpecimenRounding,
) {
    println!("Mode: {}", mode_label(mode));
    if steps.is_empty() {
        println!("No steps configured.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Category"),
        header_cell("Size"),
        header_cell("Line height"),
        header_cell("CSS"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for step in display_order(steps) {
        let metrics = SpecimenMetrics::for_step(step, config, side, rounding);
        let mut css = step.clamp.clone();
        for fallback in &step.fallbacks {
            css.push_str(&format!("\n{fallback}"));
        }
        table.add_row(vec![
            step_cell(step),
            dim_cell(step.category().as_str()),
            Cell::new(format!(
                "{}px / {}rem",
                metrics.font_size_px, metrics.font_size_rem
            )),
            Cell::new(format!(
                "{} / {}px",
                metrics.line_height, metrics.line_height_px
            )),
            Cell::new(css),
        ]);
    }
    println!("{table}");
}

pub fn print_slots(tab: PreviewTab, slots: &[SlotId], mappings: &StyleMappings) {
    println!("{}", tab.title());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Label"),
        header_cell("Step"),
    ]);
    apply_table_style(&mut table);
    for slot in slots {
        let step = mappings.step_for(*slot);
        let step_cell = if mappings.is_overridden(*slot) {
            Cell::new(format!("{step} (override)"))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(step)
        };
        table.add_row(vec![
            Cell::new(slot.as_str()),
            dim_cell(slot.label()),
            step_cell,
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn mode_label(mode: ScaleMode) -> String {
    match mode {
        ScaleMode::Preset(scale) => format!("preset ({scale})"),
        ScaleMode::Pinned => "pinned (at or below min width)".to_string(),
        ScaleMode::Fluid => "fluid".to_string(),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn step_cell(step: &TypeStep) -> Cell {
    let cell = Cell::new(&step.name).add_attribute(Attribute::Bold);
    match step.category() {
        StepCategory::Heading => cell.fg(Color::Green),
        StepCategory::Body => cell,
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
