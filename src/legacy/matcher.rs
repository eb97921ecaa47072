//! Escape scanning for the two legacy patterns.
//!
//! Each call to [`find_escapes`] scans the text it is given from the start,
//! so a caller that rewrites its text simply scans again.

use regex::Regex;
use std::sync::LazyLock;

use crate::color::RgbColor;
use crate::error::TranscodeError;

use super::SENTINEL;

/// `§x` followed by twelve hex digits or sentinels.
/// Classes list both ASCII cases; `(?i)` folds Unicode (KELVIN SIGN ~ `k`).
static HEX_ESCAPE_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new("\u{00A7}[xX][0-9A-Fa-f\u{00A7}]{12}").ok());

/// `§` followed by one color or style discriminator.
static LEGACY_ESCAPE_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new("\u{00A7}[0-9A-Fa-fK-Ok-oRrXx]").ok());

/// Which escape form to scan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePattern {
    /// Extended 24-bit color escape, `§x` plus 12 characters.
    Hex,
    /// Two-character color or style code.
    Legacy,
}

impl EscapePattern {
    fn regex(self) -> Option<&'static Regex> {
        match self {
            EscapePattern::Hex => HEX_ESCAPE_REGEX.as_ref(),
            EscapePattern::Legacy => LEGACY_ESCAPE_REGEX.as_ref(),
        }
    }
}

/// One occurrence of an escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeMatch<'t> {
    /// Byte offset into the scanned text.
    pub start: usize,
    /// Exact matched substring.
    pub text: &'t str,
}

impl EscapeMatch<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Left-to-right, non-overlapping matches of one pattern.
#[derive(Debug)]
pub struct EscapeMatches<'t> {
    inner: Option<regex::Matches<'static, 't>>,
}

impl<'t> Iterator for EscapeMatches<'t> {
    type Item = EscapeMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.inner.as_mut()?.next()?;
        Some(EscapeMatch {
            start: m.start(),
            text: m.as_str(),
        })
    }
}

/// Scan `text` for every occurrence of `pattern`.
pub fn find_escapes(text: &str, pattern: EscapePattern) -> EscapeMatches<'_> {
    EscapeMatches {
        inner: pattern.regex().map(|re| re.find_iter(text)),
    }
}

/// Check whether `text` contains at least one legacy code.
pub fn contains_legacy_codes(text: &str) -> bool {
    LEGACY_ESCAPE_REGEX
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

/// Decode an extended escape such as `§x§f§f§0§0§0§0` to its color.
///
/// Sentinels among the twelve payload characters are dropped; exactly six
/// hex digits must remain.
pub fn decode_hex_escape(escape: &str) -> Result<RgbColor, TranscodeError> {
    let malformed = || TranscodeError::MalformedColorEscape {
        escape: escape.to_string(),
    };

    let mut chars = escape.chars();
    match (chars.next(), chars.next()) {
        (Some(SENTINEL), Some('x' | 'X')) => {}
        _ => return Err(malformed()),
    }

    let digits: String = chars.filter(|c| *c != SENTINEL).collect();
    RgbColor::from_hex(&digits).ok_or_else(malformed)
}
