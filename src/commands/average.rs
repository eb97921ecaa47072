//! Average command handler

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use mcansi::{PixelBuffer, RgbColor};

/// Average color of a raw RGB file.
pub fn average_file(path: &Path, width: u32, height: u32) -> Result<RgbColor> {
    let file = File::open(path).with_context(|| format!("Failed to open image: {:?}", path))?;
    let pixels = PixelBuffer::read_rgb(BufReader::new(file), width, height)
        .with_context(|| format!("Failed to read {}x{} RGB data from {:?}", width, height, path))?;
    Ok(pixels.average())
}

/// Handle the average command.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, width: u32, height: u32) -> Result<()> {
    println!("{}", average_file(path, width, height)?);
    Ok(())
}
