//! Legacy/markup text to ANSI transcoding.
//!
//! A pass runs in three steps:
//! 1. resolve markup tags to legacy codes
//! 2. replace every `§x` hex escape with a 24-bit color directive
//! 3. replace every two-character legacy code with its directive
//!
//! When the markup could not be parsed, the substituted text gets another
//! pass (bounded by the retry budget). The final output always ends with a
//! reset directive.

use tracing::{debug, trace};

use crate::ansi::{AnsiDirective, ANSI_RESET};
use crate::error::TranscodeError;
use crate::legacy::{decode_hex_escape, find_escapes, EscapePattern, StyleCode};
use crate::markup::{self, Precision};

/// Default number of extra passes after a markup parse failure.
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Converts legacy-coded or markup text to ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transcoder {
    precision: Precision,
    max_retries: u32,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new(Precision::ExactRgb)
    }
}

impl Transcoder {
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Transcoder that collapses markup colors to the 16-color palette.
    pub fn legacy() -> Self {
        Self::new(Precision::PaletteNearest)
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Transcode `text`, appending a reset directive.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::MalformedColorEscape`] when a `§x` escape does
    /// not hold exactly six hex digits.
    pub fn transcode(&self, text: &str) -> Result<String, TranscodeError> {
        let mut out = self.run_pass(text, self.max_retries)?;
        out.push_str(ANSI_RESET);
        Ok(out)
    }

    fn run_pass(&self, text: &str, retries_left: u32) -> Result<String, TranscodeError> {
        let resolution = markup::resolve(text, self.precision);
        let needs_retry = resolution.needs_retry();

        let text = substitute_hex_escapes(resolution.into_text())?;
        let text = substitute_legacy_codes(text);

        if !needs_retry {
            return Ok(text);
        }
        if retries_left == 0 {
            debug!("Markup still unparsable after retries, emitting as-is");
            return Ok(text);
        }

        debug!(retries_left, "Retrying transcode after markup fallback");
        self.run_pass(&text, retries_left - 1)
    }
}

/// Replace each distinct `§x` escape, in discovery order, everywhere it occurs.
fn substitute_hex_escapes(text: String) -> Result<String, TranscodeError> {
    let escapes: Vec<String> = find_escapes(&text, EscapePattern::Hex)
        .map(|m| m.text.to_string())
        .collect();

    let mut text = text;
    for escape in escapes {
        if !text.contains(escape.as_str()) {
            continue;
        }
        let color = decode_hex_escape(&escape)?;
        let directive = AnsiDirective::ForegroundRgb(color).to_string();
        trace!(escape = %escape, %color, "Substituting hex escape");
        text = text.replace(escape.as_str(), &directive);
    }
    Ok(text)
}

/// Replace each distinct legacy code, in discovery order, everywhere it occurs.
fn substitute_legacy_codes(text: String) -> String {
    let codes: Vec<String> = find_escapes(&text, EscapePattern::Legacy)
        .map(|m| m.text.to_string())
        .collect();

    let mut text = text;
    for token in codes {
        if !text.contains(token.as_str()) {
            continue;
        }
        let code = StyleCode::from_token(&token);
        trace!(token = %token, code = code.label(), "Substituting legacy code");
        text = text.replace(token.as_str(), &code.directive().to_string());
    }
    text
}

/// Transcode with the default retry budget.
///
/// `legacy_mode` collapses markup colors to the 16-color palette.
///
/// # Errors
///
/// See [`Transcoder::transcode`].
pub fn to_ansi(text: &str, legacy_mode: bool) -> Result<String, TranscodeError> {
    let transcoder = if legacy_mode {
        Transcoder::legacy()
    } else {
        Transcoder::default()
    };
    transcoder.transcode(text)
}
