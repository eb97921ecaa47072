//! Color sample table: maps sampled colors to resource names.

use std::collections::HashMap;

use crate::color::RgbColor;

use super::PixelBuffer;

/// Sampled colors keyed by exact RGB value.
///
/// Keys are whole colors (no bucketing). The first name recorded for a color
/// is kept.
#[derive(Debug, Clone, Default)]
pub struct ColorSampleTable {
    entries: HashMap<RgbColor, String>,
}

impl ColorSampleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `color` unless the color is already present.
    /// Returns `true` if the entry was inserted.
    pub fn record(&mut self, color: RgbColor, name: impl Into<String>) -> bool {
        if self.entries.contains_key(&color) {
            return false;
        }
        self.entries.insert(color, name.into());
        true
    }

    /// Average `pixels`, record the average under `name` and return it.
    pub fn record_pixels(&mut self, pixels: &PixelBuffer, name: impl Into<String>) -> RgbColor {
        let average = pixels.average();
        self.record(average, name);
        average
    }

    /// Name whose key has the smallest signed packed difference
    /// `query - key`. Empty string when the table is empty.
    ///
    /// This is not a color distance: the smallest signed difference always
    /// belongs to the largest packed key, whatever the query.
    pub fn nearest(&self, color: RgbColor) -> &str {
        let query = color.packed() as i64;
        self.entries
            .iter()
            .min_by_key(|(key, _)| query - key.packed() as i64)
            .map(|(_, name)| name.as_str())
            .unwrap_or("")
    }

    pub fn get(&self, color: RgbColor) -> Option<&str> {
        self.entries.get(&color).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
