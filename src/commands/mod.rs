//! Command handlers for the mcansi CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod average;
pub mod check;
pub mod chroma;
pub mod codes;
pub mod completions;
pub mod config;
pub mod nearest;
pub mod render;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Where the text for a command comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    Args(&'a [String]),
    File(&'a Path),
    Stdin,
}

impl<'a> InputSource<'a> {
    /// Positional words win, then `--file`, then standard input.
    pub fn select(words: &'a [String], file: Option<&'a Path>) -> Self {
        if !words.is_empty() {
            InputSource::Args(words)
        } else if let Some(path) = file {
            InputSource::File(path)
        } else {
            InputSource::Stdin
        }
    }

    /// Read the whole input into a string.
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Args(words) => Ok(words.join(" ")),
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {:?}", path)),
            InputSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read standard input")?;
                Ok(buffer)
            }
        }
    }
}

/// Parse a `#rrggbb` (or bare `rrggbb`) argument.
pub fn parse_color_arg(value: &str) -> Result<mcansi::RgbColor> {
    mcansi::RgbColor::from_hex(value.trim())
        .with_context(|| format!("Invalid color '{}': expected #rrggbb", value))
}
