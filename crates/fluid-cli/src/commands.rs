use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use fluid_cli::overrides::{ConfigOverrides, build_mappings};
use fluid_model::{FluidTypeConfig, NamedRatio, TypeStep};
use fluid_scale::{ScaleMode, Side, SpecimenRounding, compute_steps, css_custom_properties};
use fluid_style::{PreviewTab, SlotId, resolve_slot};

use crate::cli::{CssArgs, ScaleArgs, SlotsArgs, StyleArgs};
use crate::summary::{apply_table_style, print_scale, print_slots};

fn compute(overrides: &ConfigOverrides) -> Result<(FluidTypeConfig, Vec<TypeStep>)> {
    let config = overrides.resolve()?;
    let width = overrides.simulated_width();
    let steps = compute_steps(&config, width).context("compute type scale")?;
    info!(
        mode = ?ScaleMode::select(&config, width),
        steps = steps.len(),
        "type scale ready"
    );
    Ok((config, steps))
}

pub fn run_scale(args: &ScaleArgs) -> Result<()> {
    let _span = info_span!("scale").entered();
    let (config, steps) = compute(&args.config)?;
    let side = if args.mobile { Side::Min } else { Side::Max };
    let rounding = SpecimenRounding {
        whole_pixels: !args.fractional_sizes,
        line_height_multiple_of_four: !args.no_line_height_snap,
    };
    let mode = ScaleMode::select(&config, args.config.simulated_width());
    print_scale(&steps, &config, mode, side, rounding);
    Ok(())
}

pub fn run_css(args: &CssArgs) -> Result<()> {
    let _span = info_span!("css").entered();
    let (config, steps) = compute(&args.config)?;
    println!("{}", css_custom_properties(&steps, &config));
    Ok(())
}

pub fn run_style(args: &StyleArgs) -> Result<()> {
    let _span = info_span!("style", slot = %args.slot).entered();
    let (config, steps) = compute(&args.config)?;
    let mappings = build_mappings(&args.mappings);
    let style = resolve_slot(
        &steps,
        &mappings,
        args.slot,
        &config.typography,
        config.is_preset(),
    );
    if args.json {
        let json = serde_json::to_string_pretty(&style).context("serialize style")?;
        println!("{json}");
    } else if style.is_empty() {
        println!(
            "{}: step `{}` is not in the current scale; styles are inherited",
            args.slot,
            mappings.step_for(args.slot)
        );
    } else {
        println!("{style}");
    }
    Ok(())
}

pub fn run_slots(args: &SlotsArgs) -> Result<()> {
    let mappings = build_mappings(&args.mappings);
    let tabs: Vec<PreviewTab> = match args.tab {
        Some(tab) => vec![tab],
        None => PreviewTab::ALL.to_vec(),
    };
    for tab in tabs {
        let slots: Vec<SlotId> = tab.slots().collect();
        print_slots(tab, &slots, &mappings);
    }
    Ok(())
}

pub fn run_ratios() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Ratio", "Flag value"]);
    apply_table_style(&mut table);
    for ratio in NamedRatio::ALL {
        table.add_row(vec![
            ratio.label().to_string(),
            ratio.value().to_string(),
            ratio.slug().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
