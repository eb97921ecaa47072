//! Time-varying "chroma" rainbow colors.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::color::RgbColor;

/// Cycle shape of the chroma effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromaSettings {
    /// Length of one hue cycle in milliseconds.
    #[serde(default = "default_period_ms")]
    pub period_ms: f64,
    #[serde(default = "default_saturation")]
    pub saturation: f32,
    #[serde(default = "default_brightness")]
    pub brightness: f32,
}

pub fn default_period_ms() -> f64 {
    2000.0
}

pub fn default_saturation() -> f32 {
    0.8
}

pub fn default_brightness() -> f32 {
    1.0
}

impl Default for ChromaSettings {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
            saturation: default_saturation(),
            brightness: default_brightness(),
        }
    }
}

/// Chroma color for a screen position at `now_millis`.
///
/// Positions further right/down lag behind by `10 * offset_scale` ms per
/// unit, so calling this repeatedly over a row draws a moving rainbow.
pub fn chroma_color(
    x: f64,
    y: f64,
    offset_scale: f64,
    now_millis: u64,
    settings: &ChromaSettings,
) -> RgbColor {
    let period = settings.period_ms;
    let phase = (now_millis as f64 - x * 10.0 * offset_scale - y * 10.0 * offset_scale) % period;
    let hue = phase as f32 / period as f32;
    hsb_to_rgb(hue, settings.saturation, settings.brightness)
}

/// [`chroma_color`] at the current system time.
pub fn chroma_color_now(x: f64, y: f64, offset_scale: f64, settings: &ChromaSettings) -> RgbColor {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    chroma_color(x, y, offset_scale, now, settings)
}

/// HSB to RGB. Hue wraps (any real value is accepted); channels round half up.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> RgbColor {
    let channel = |v: f32| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = channel(brightness);
        return RgbColor::new(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => (0.0, 0.0, 0.0),
    };
    RgbColor::new(channel(r), channel(g), channel(b))
}
