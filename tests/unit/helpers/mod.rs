//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use vte::{Params, Parser, Perform};

/// Write `contents` to a file inside a fresh temporary directory.
pub fn temp_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (temp_dir, path)
}

/// One piece of terminal output as seen by a VT parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Parameters of an SGR (`ESC [ ... m`) sequence
    Sgr(Vec<u16>),
}

#[derive(Default)]
struct Collector {
    segments: Vec<Segment>,
}

impl Perform for Collector {
    fn print(&mut self, c: char) {
        match self.segments.last_mut() {
            Some(Segment::Text(text)) => text.push(c),
            _ => self.segments.push(Segment::Text(c.to_string())),
        }
    }

    fn execute(&mut self, byte: u8) {
        self.print(byte as char);
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        if action == 'm' {
            let values = params.iter().flat_map(|p| p.iter().copied()).collect();
            self.segments.push(Segment::Sgr(values));
        }
    }
}

/// Split terminal output into text runs and SGR directives.
pub fn parse_ansi(output: &str) -> Vec<Segment> {
    let mut parser = Parser::new();
    let mut collector = Collector::default();
    parser.advance(&mut collector, output.as_bytes());
    collector.segments
}

/// Concatenated printable text with every escape removed.
pub fn visible_text(output: &str) -> String {
    parse_ansi(output)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Sgr(_) => None,
        })
        .collect()
}

/// SGR parameter lists in order of appearance.
pub fn sgr_params(output: &str) -> Vec<Vec<u16>> {
    parse_ansi(output)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Sgr(params) => Some(params),
            Segment::Text(_) => None,
        })
        .collect()
}
