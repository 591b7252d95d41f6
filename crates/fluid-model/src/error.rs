use std::path::PathBuf;

use thiserror::Error;

/// Invalid numeric configuration rejected before any step is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("degenerate viewport range: min-width and max-width are both {width}px")]
    DegenerateViewport { width: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("base step `{base_step}` is not one of the configured steps")]
    UnknownBaseStep { base_step: String },

    #[error("step `{name}` appears more than once")]
    DuplicateStep { name: String },

    #[error("decimals must be at most {max}, got {decimals}")]
    ExcessivePrecision { decimals: u32, max: u32 },
}

/// Failure to read a configuration file from disk.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
