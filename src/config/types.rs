//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::markup::Precision;
use crate::palette::ChromaSettings;
use crate::transcode::{Transcoder, DEFAULT_MAX_RETRIES};

/// Upper bound accepted for `render.max_retries`.
pub const MAX_RETRIES_LIMIT: u32 = 8;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub chroma: ChromaSettings,
}

/// How colors from markup tags are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Keep exact 24-bit colors
    #[default]
    Rich,
    /// Collapse colors to the 16-color legacy palette
    Legacy,
}

impl RenderMode {
    pub fn precision(self) -> Precision {
        match self {
            RenderMode::Rich => Precision::ExactRgb,
            RenderMode::Legacy => Precision::PaletteNearest,
        }
    }
}

/// Transcoding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub mode: RenderMode,
    /// Extra passes after a markup parse failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

pub fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            max_retries: default_max_retries(),
        }
    }
}

impl RenderConfig {
    /// Build a transcoder, optionally overriding the configured mode.
    pub fn transcoder(&self, mode_override: Option<RenderMode>) -> Transcoder {
        let mode = mode_override.unwrap_or(self.mode);
        Transcoder::new(mode.precision()).with_max_retries(self.max_retries)
    }
}

impl Config {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.render.max_retries > MAX_RETRIES_LIMIT {
            return Err(format!(
                "render.max_retries {} exceeds maximum ({})",
                self.render.max_retries, MAX_RETRIES_LIMIT
            ));
        }
        if self.chroma.period_ms.is_nan() || self.chroma.period_ms <= 0.0 {
            return Err("chroma.period_ms must be > 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.chroma.saturation) {
            return Err(format!(
                "chroma.saturation {} must be between 0 and 1",
                self.chroma.saturation
            ));
        }
        if !(0.0..=1.0).contains(&self.chroma.brightness) {
            return Err(format!(
                "chroma.brightness {} must be between 0 and 1",
                self.chroma.brightness
            ));
        }
        Ok(())
    }
}
