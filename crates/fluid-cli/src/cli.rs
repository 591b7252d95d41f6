//! CLI argument definitions for the fluid type calculator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fluid_cli::overrides::{ConfigOverrides, parse_mapping};
use fluid_style::{PreviewTab, SlotId};

#[derive(Parser)]
#[command(
    name = "fluid-type",
    version,
    about = "Fluid typography scale calculator",
    long_about = "Compute modular type scales that interpolate between two viewport widths.\n\n\
                  Prints step tables, exports CSS custom properties with clamp() sizes,\n\
                  and resolves inline styles for preview text slots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the computed type scale with specimen metrics.
    Scale(ScaleArgs),

    /// Print the `:root` block of CSS custom properties.
    Css(CssArgs),

    /// Print the resolved inline style for one preview slot.
    Style(StyleArgs),

    /// List preview slots and the step each one uses.
    Slots(SlotsArgs),

    /// List the named scale ratios.
    Ratios,
}

#[derive(Parser)]
pub struct ScaleArgs {
    #[command(flatten)]
    pub config: ConfigOverrides,

    /// Show sizes at the minimum viewport width instead of the maximum.
    #[arg(long = "mobile")]
    pub mobile: bool,

    /// Show font sizes to three decimals instead of whole pixels.
    #[arg(long = "fractional-sizes")]
    pub fractional_sizes: bool,

    /// Keep line heights as computed instead of snapping to multiples of 4px.
    #[arg(long = "no-line-height-snap")]
    pub no_line_height_snap: bool,
}

#[derive(Parser)]
pub struct CssArgs {
    #[command(flatten)]
    pub config: ConfigOverrides,
}

#[derive(Parser)]
pub struct StyleArgs {
    /// Slot id, e.g. `article-title`.
    #[arg(value_name = "SLOT")]
    pub slot: SlotId,

    #[command(flatten)]
    pub config: ConfigOverrides,

    /// Override a slot's step (repeatable), e.g. `--map article-body=body-lg`.
    #[arg(long = "map", value_name = "SLOT=STEP", value_parser = parse_mapping)]
    pub mappings: Vec<(SlotId, String)>,

    /// Print the style as JSON instead of inline CSS.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SlotsArgs {
    /// Only list slots on this preview tab.
    #[arg(long = "tab", value_name = "TAB")]
    pub tab: Option<PreviewTab>,

    /// Override a slot's step (repeatable).
    #[arg(long = "map", value_name = "SLOT=STEP", value_parser = parse_mapping)]
    pub mappings: Vec<(SlotId, String)>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
