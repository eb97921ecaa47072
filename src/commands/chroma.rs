//! Chroma command handler

use anyhow::Result;

use mcansi::palette::{chroma_color_now, ChromaSettings};
use mcansi::{colorize_rgb, Config, RgbColor};

/// Output line for a chroma color: the colored text, or the color itself.
pub fn format_chroma(color: RgbColor, text: Option<&str>) -> String {
    match text {
        Some(text) => colorize_rgb(color, text),
        None => color.to_string(),
    }
}

/// Handle the chroma command.
#[cfg(not(tarpaulin_include))]
pub fn handle(x: f64, y: f64, scale: f64, text: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let settings: ChromaSettings = config.chroma;
    let color = chroma_color_now(x, y, scale, &settings);
    tracing::debug!(%color, x, y, scale, "chroma color");
    println!("{}", format_chroma(color, text));
    Ok(())
}
