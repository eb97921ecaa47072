//! Nearest command handler

use anyhow::{anyhow, Result};
use tracing::debug;

use mcansi::ColorSampleTable;

use super::parse_color_arg;

/// Build a sample table from `NAME=COLOR` entries.
pub fn build_table(samples: &[String]) -> Result<ColorSampleTable> {
    let mut table = ColorSampleTable::new();
    for sample in samples {
        let (name, color) = sample
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid sample '{}': expected NAME=COLOR", sample))?;
        let color = parse_color_arg(color)?;
        if !table.record(color, name) {
            debug!(%color, name, "sample color already recorded, keeping first name");
        }
    }
    Ok(table)
}

/// Handle the nearest command.
#[cfg(not(tarpaulin_include))]
pub fn handle(color: &str, samples: &[String]) -> Result<()> {
    let query = parse_color_arg(color)?;
    let table = build_table(samples)?;
    if table.is_empty() {
        return Err(anyhow!("No samples given: pass at least one --sample NAME=COLOR"));
    }
    println!("{}", table.nearest(query));
    Ok(())
}
