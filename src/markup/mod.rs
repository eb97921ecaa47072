//! Nested-tag markup dialect and its resolution to legacy codes.
//!
//! Text such as `<gold>Hello <bold>world` is parsed into a small tag tree and
//! written back as `§6Hello §lworld`. Legacy codes already in the text are
//! plain text to the parser and pass through untouched.
//!
//! Resolution never fails: when the markup cannot be parsed the caller gets
//! the original text back as [`Resolution::Unresolved`] and decides whether to
//! try again after substituting the legacy codes.

mod parser;
mod serialize;
mod tags;

pub use parser::{parse, MarkupDocument, Node, RawTag};
pub use serialize::{serialize, Precision};
pub use tags::{Decoration, MarkupColor, StyleChange};

use tracing::debug;

/// A recognized tag whose arguments do not make sense.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Tag <{tag}> requires a color argument")]
    MissingColor { tag: String },

    #[error("Unknown color '{value}' in <{tag}>")]
    UnknownColor { tag: String, value: String },

    #[error("Invalid hex color tag <{tag}>, expected #RRGGBB")]
    InvalidHexColor { tag: String },

    #[error("Invalid value '{value}' for <{tag}>, expected true or false")]
    InvalidFlag { tag: String, value: String },
}

/// Outcome of resolving markup to the legacy dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Markup parsed; the text is now legacy-coded.
    Rewritten(String),
    /// Markup did not parse; the text is returned as given.
    Unresolved(String),
}

impl Resolution {
    pub fn needs_retry(&self) -> bool {
        matches!(self, Resolution::Unresolved(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Resolution::Rewritten(text) | Resolution::Unresolved(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::Rewritten(text) | Resolution::Unresolved(text) => text,
        }
    }
}

/// Rewrite markup tags in `text` into legacy codes.
pub fn resolve(text: &str, precision: Precision) -> Resolution {
    match parse(text) {
        Ok(document) => Resolution::Rewritten(serialize(&document, precision)),
        Err(err) => {
            debug!(error = %err, "Markup did not parse, keeping text as legacy");
            Resolution::Unresolved(text.to_string())
        }
    }
}
