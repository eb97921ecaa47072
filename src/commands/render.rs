//! Render command handler

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use mcansi::config::RenderMode;
use mcansi::{Config, Transcoder};

use super::InputSource;

/// Mode requested on the command line, if any.
pub fn mode_override(legacy: bool, rich: bool) -> Option<RenderMode> {
    match (legacy, rich) {
        (true, _) => Some(RenderMode::Legacy),
        (_, true) => Some(RenderMode::Rich),
        _ => None,
    }
}

/// Transcode `input`, optionally followed by a newline.
pub fn render_text(transcoder: &Transcoder, input: &str, newline: bool) -> Result<String> {
    // A trailing newline from a file or pipe would land after the reset.
    let body = input.strip_suffix('\n').unwrap_or(input);
    let mut out = transcoder
        .transcode(body)
        .context("Failed to transcode input")?;
    if newline {
        out.push('\n');
    }
    Ok(out)
}

/// Handle the render command.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    text: &[String],
    legacy: bool,
    rich: bool,
    file: Option<&Path>,
    no_newline: bool,
) -> Result<()> {
    let config = Config::load()?;
    let transcoder = config.render.transcoder(mode_override(legacy, rich));
    debug!(
        precision = ?transcoder.precision(),
        max_retries = transcoder.max_retries(),
        "rendering"
    );

    let input = InputSource::select(text, file).read()?;
    let out = render_text(&transcoder, &input, !no_newline)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
