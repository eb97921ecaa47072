//! Serialization of a markup document down to legacy codes.

use crate::color::NamedColor;
use crate::legacy::{StyleCode, SENTINEL};

use super::parser::{MarkupDocument, Node};
use super::tags::{Decoration, MarkupColor, StyleChange};

/// How colors survive the trip to the legacy dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Keep 24-bit colors as `§x` escapes.
    #[default]
    ExactRgb,
    /// Collapse every color to the nearest of the 16 palette colors.
    PaletteNearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Style {
    color: Option<MarkupColor>,
    decorations: [bool; 5],
}

impl Style {
    fn with(mut self, change: StyleChange, precision: Precision) -> Self {
        match change {
            StyleChange::Color(color) => self.color = Some(reduce(color, precision)),
            StyleChange::Decoration(decoration, on) => self.decorations[decoration.index()] = on,
        }
        self
    }

    fn has(&self, decoration: Decoration) -> bool {
        self.decorations[decoration.index()]
    }
}

fn reduce(color: MarkupColor, precision: Precision) -> MarkupColor {
    match (color, precision) {
        (MarkupColor::Exact(rgb), Precision::PaletteNearest) => {
            MarkupColor::Named(NamedColor::nearest_to(rgb))
        }
        _ => color,
    }
}

/// Render `document` as legacy-coded text.
pub fn serialize(document: &MarkupDocument, precision: Precision) -> String {
    let mut runs = Vec::new();
    flatten(&document.nodes, Style::default(), precision, &mut runs);

    let mut out = String::new();
    let mut current = Style::default();
    for (style, text) in runs {
        if text.is_empty() {
            continue;
        }
        write_transition(&mut out, &current, &style);
        out.push_str(text);
        current = style;
    }
    out
}

fn flatten<'d>(
    nodes: &'d [Node],
    style: Style,
    precision: Precision,
    runs: &mut Vec<(Style, &'d str)>,
) {
    for node in nodes {
        match node {
            Node::Text(text) => runs.push((style, text.as_str())),
            Node::Styled { change, children } => {
                flatten(children, style.with(*change, precision), precision, runs);
            }
        }
    }
}

/// Emit the codes that turn `from` into `to`.
///
/// A color code clears decorations, so removing a decoration means
/// re-emitting the color (or a reset when there is none) and every
/// decoration still active.
fn write_transition(out: &mut String, from: &Style, to: &Style) {
    if from == to {
        return;
    }

    let lost_decoration = Decoration::ALL
        .iter()
        .any(|d| from.has(*d) && !to.has(*d));

    match to.color {
        None if from.color.is_some() || lost_decoration => {
            out.push_str(&StyleCode::Reset.token());
            write_decorations(out, &Style::default(), to);
        }
        Some(color) if from.color != to.color || lost_decoration => {
            write_color(out, color);
            write_decorations(out, &Style::default(), to);
        }
        _ => write_decorations(out, from, to),
    }
}

fn write_decorations(out: &mut String, from: &Style, to: &Style) {
    for decoration in Decoration::ALL {
        if to.has(decoration) && !from.has(decoration) {
            out.push_str(&decoration.code().token());
        }
    }
}

fn write_color(out: &mut String, color: MarkupColor) {
    match color {
        MarkupColor::Named(named) => out.push_str(&StyleCode::from(named).token()),
        MarkupColor::Exact(rgb) => {
            out.push(SENTINEL);
            out.push('x');
            for digit in rgb.hex_digits().chars() {
                out.push(SENTINEL);
                out.push(digit);
            }
        }
    }
}
