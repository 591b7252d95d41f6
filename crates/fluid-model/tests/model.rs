//! Tests for fluid-model types.

use std::fs;
use std::path::PathBuf;

use fluid_model::{
    ConfigError, ConfigLoadError, FluidTypeConfig, Inheritable, PresetScale, ScaleRatio,
    TypeStep, load_config, parse_config,
};

fn unique_temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "fluid-type-{}-{}-{}.toml",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = parse_config(
        r#"
min-width = 320
max-font-size = 18
base-step = "body"

[ratio]
min = 1.2
max = 1.333

[typography.heading]
font-family = "inherit"
"#,
    )
    .expect("parse config");

    assert_eq!(config.min_width, 320.0);
    assert_eq!(config.max_width, 1440.0);
    assert_eq!(config.max_font_size, 18.0);
    assert_eq!(
        config.ratio,
        ScaleRatio::Fluid {
            min: 1.2,
            max: 1.333
        }
    );
    assert!(config.typography.heading.font_family.is_inherit());
    assert_eq!(config.typography.heading.font_weight, 600);
    assert_eq!(config.steps.len(), 9);
}

#[test]
fn preset_ratio_parses_from_string() {
    let config = parse_config("ratio = \"shadcn\"\n").expect("parse config");
    assert_eq!(config.ratio, ScaleRatio::Preset(PresetScale::Shadcn));
    assert!(config.is_preset());
}

#[test]
fn unknown_base_step_is_rejected() {
    let config = FluidTypeConfig {
        base_step: "caption".to_string(),
        ..FluidTypeConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::UnknownBaseStep {
            base_step: "caption".to_string()
        })
    );
}

#[test]
fn empty_steps_skip_step_checks() {
    let config = FluidTypeConfig {
        steps: Vec::new(),
        base_step: "missing".to_string(),
        ..FluidTypeConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn duplicate_steps_are_rejected() {
    let config = FluidTypeConfig {
        steps: vec!["body".into(), "heading-1".into(), "body".into()],
        ..FluidTypeConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::DuplicateStep {
            name: "body".to_string()
        })
    );
}

#[test]
fn negative_font_size_is_rejected() {
    let config = FluidTypeConfig {
        min_font_size: -2.0,
        ..FluidTypeConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive {
            field: "min-font-size",
            ..
        })
    ));
}

#[test]
fn inverted_viewport_is_allowed() {
    let config = FluidTypeConfig {
        min_width: 1440.0,
        max_width: 375.0,
        ..FluidTypeConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn config_round_trips_through_json() {
    let mut config = FluidTypeConfig::default();
    config.typography.heading.color = Inheritable::value("#111111");
    let json = serde_json::to_string(&config).expect("serialize config");
    assert!(json.contains("\"min-width\":375.0"));
    let round: FluidTypeConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round, config);
}

#[test]
fn type_step_omits_empty_optionals() {
    let step = TypeStep {
        name: "body".to_string(),
        min_size: 14.0,
        max_size: 14.0,
        clamp: "0.875rem".to_string(),
        fallbacks: Vec::new(),
        preset: None,
    };
    let json = serde_json::to_string(&step).expect("serialize step");
    assert!(!json.contains("fallbacks"));
    assert!(!json.contains("preset"));
}

#[test]
fn load_config_reads_file() {
    let path = unique_temp_path("load");
    fs::write(&path, "prefix = \"type\"\ndecimals = 2\n").unwrap();
    let config = load_config(&path).expect("load config");
    fs::remove_file(&path).ok();
    assert_eq!(config.prefix, "type");
    assert_eq!(config.decimals, 2);
}

#[test]
fn load_config_reports_missing_file() {
    let path = unique_temp_path("missing");
    let error = load_config(&path).unwrap_err();
    assert!(matches!(error, ConfigLoadError::Io { .. }));
    assert!(error.to_string().contains("failed to read config"));
}

#[test]
fn load_config_reports_bad_toml() {
    let path = unique_temp_path("bad");
    fs::write(&path, "min-width = \"wide\"\n").unwrap();
    let error = load_config(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(error, ConfigLoadError::Toml { .. }));
}
