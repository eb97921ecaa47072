//! Unit tests for config module

use mcansi::config::{RenderMode, MAX_RETRIES_LIMIT};
use mcansi::markup::Precision;
use mcansi::Config;

use crate::helpers::temp_file;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.render.mode, RenderMode::Rich);
    assert_eq!(config.render.max_retries, 1);
    assert_eq!(config.chroma.period_ms, 2000.0);
    assert_eq!(config.chroma.saturation, 0.8);
    assert_eq!(config.chroma.brightness, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.render.mode = RenderMode::Legacy;
    config.chroma.period_ms = 500.0;

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn render_mode_serializes_lowercase() {
    let toml_str = toml::to_string(&Config::default()).unwrap();
    assert!(toml_str.contains("mode = \"rich\""));
}

#[test]
fn partial_sections_fall_back_to_defaults() {
    let toml_str = r#"
[render]
mode = "legacy"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.render.mode, RenderMode::Legacy);
    assert_eq!(config.render.max_retries, 1);
    assert_eq!(config.chroma, Config::default().chroma);
}

#[test]
fn empty_file_is_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_mode_fails_to_parse() {
    assert!(toml::from_str::<Config>("[render]\nmode = \"sepia\"\n").is_err());
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut config = Config::default();
    config.chroma.saturation = 1.5;
    assert!(config.validate().unwrap_err().contains("saturation"));

    let mut config = Config::default();
    config.chroma.brightness = -0.1;
    assert!(config.validate().unwrap_err().contains("brightness"));

    let mut config = Config::default();
    config.chroma.period_ms = 0.0;
    assert!(config.validate().unwrap_err().contains("period_ms"));

    let mut config = Config::default();
    config.render.max_retries = MAX_RETRIES_LIMIT + 1;
    assert!(config.validate().unwrap_err().contains("max_retries"));
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_values() {
    let (_dir, path) = temp_file(
        "config.toml",
        b"[render]\nmode = \"legacy\"\nmax_retries = 3\n\n[chroma]\nsaturation = 0.5\n",
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.render.mode, RenderMode::Legacy);
    assert_eq!(config.render.max_retries, 3);
    assert_eq!(config.chroma.saturation, 0.5);
    assert_eq!(config.chroma.period_ms, 2000.0);
}

#[test]
fn load_from_rejects_invalid_values() {
    let (_dir, path) = temp_file("config.toml", b"[chroma]\nbrightness = 2.0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn load_from_reports_syntax_errors() {
    let (_dir, path) = temp_file("config.toml", b"[render\nmode = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn save_to_creates_parent_directories() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("config.toml");

    let mut config = Config::default();
    config.render.max_retries = 4;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn transcoder_follows_config_and_override() {
    let mut config = Config::default();
    config.render.mode = RenderMode::Legacy;
    config.render.max_retries = 2;

    let transcoder = config.render.transcoder(None);
    assert_eq!(transcoder.precision(), Precision::PaletteNearest);
    assert_eq!(transcoder.max_retries(), 2);

    let rich = config.render.transcoder(Some(RenderMode::Rich));
    assert_eq!(rich.precision(), Precision::ExactRgb);
}

#[test]
fn config_path_ends_with_app_directory() {
    if let Ok(path) = Config::config_path() {
        assert!(path.ends_with(".config/mcansi/config.toml"));
    }
}
