//! Tag vocabulary of the nested markup dialect.

use crate::color::{NamedColor, RgbColor};
use crate::legacy::StyleCode;

use super::parser::RawTag;
use super::ParseError;

/// A color as written in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupColor {
    Named(NamedColor),
    Exact(RgbColor),
}

/// Text decorations, in legacy emission order (`k l m n o`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    pub const fn tag_name(self) -> &'static str {
        match self {
            Decoration::Obfuscated => "obfuscated",
            Decoration::Bold => "bold",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Underlined => "underlined",
            Decoration::Italic => "italic",
        }
    }

    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "obfuscated" | "obf" => Some(Decoration::Obfuscated),
            "bold" | "b" => Some(Decoration::Bold),
            "strikethrough" | "st" => Some(Decoration::Strikethrough),
            "underlined" | "u" => Some(Decoration::Underlined),
            "italic" | "i" | "em" => Some(Decoration::Italic),
            _ => None,
        }
    }

    /// Matching legacy style code.
    pub const fn code(self) -> StyleCode {
        match self {
            Decoration::Obfuscated => StyleCode::Obfuscate,
            Decoration::Bold => StyleCode::Bold,
            Decoration::Strikethrough => StyleCode::Strikethrough,
            Decoration::Underlined => StyleCode::Underline,
            Decoration::Italic => StyleCode::Italic,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// What an opening tag applies to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    Color(MarkupColor),
    Decoration(Decoration, bool),
}

/// Effect of a recognized tag on the tree being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TagAction {
    Open { key: String, change: StyleChange },
    Close { key: String },
    Reset,
    Newline,
}

const COLOR_TAGS: [&str; 3] = ["color", "colour", "c"];

/// Interpret a lexed tag. `Ok(None)` means the tag is not part of the
/// vocabulary and stays in the text verbatim.
pub(crate) fn interpret(raw: &RawTag) -> Result<Option<TagAction>, ParseError> {
    if raw.closing {
        return Ok(close_key(&raw.name).map(|key| TagAction::Close { key }));
    }

    let name = raw.name.as_str();
    if COLOR_TAGS.contains(&name) {
        let value = raw.args.first().ok_or_else(|| ParseError::MissingColor {
            tag: raw.name.clone(),
        })?;
        let color = parse_color_value(value).ok_or_else(|| ParseError::UnknownColor {
            tag: raw.name.clone(),
            value: value.clone(),
        })?;
        return Ok(Some(TagAction::Open {
            key: "color".to_string(),
            change: StyleChange::Color(color),
        }));
    }

    match name {
        "reset" => return Ok(Some(TagAction::Reset)),
        "newline" | "br" => return Ok(Some(TagAction::Newline)),
        _ => {}
    }

    if name.starts_with('#') {
        let rgb = RgbColor::from_hex(name).ok_or_else(|| ParseError::InvalidHexColor {
            tag: raw.name.clone(),
        })?;
        return Ok(Some(TagAction::Open {
            key: raw.name.clone(),
            change: StyleChange::Color(MarkupColor::Exact(rgb)),
        }));
    }

    if let Some(named) = NamedColor::from_name(name) {
        return Ok(Some(TagAction::Open {
            key: raw.name.clone(),
            change: StyleChange::Color(MarkupColor::Named(named)),
        }));
    }

    if let Some(decoration) = Decoration::from_tag_name(name) {
        let enabled = parse_flag(raw, raw.args.first())?;
        return Ok(Some(TagAction::Open {
            key: decoration.tag_name().to_string(),
            change: StyleChange::Decoration(decoration, enabled),
        }));
    }

    Ok(None)
}

/// Key that a closing tag matches against open spans.
fn close_key(name: &str) -> Option<String> {
    if COLOR_TAGS.contains(&name) {
        return Some("color".to_string());
    }
    if let Some(decoration) = Decoration::from_tag_name(name) {
        return Some(decoration.tag_name().to_string());
    }
    let known = name.starts_with('#')
        || NamedColor::from_name(name).is_some()
        || matches!(name, "reset" | "newline" | "br");
    known.then(|| name.to_string())
}

fn parse_color_value(value: &str) -> Option<MarkupColor> {
    if value.starts_with('#') {
        RgbColor::from_hex(value).map(MarkupColor::Exact)
    } else {
        NamedColor::from_name(value).map(MarkupColor::Named)
    }
}

fn parse_flag(raw: &RawTag, value: Option<&String>) -> Result<bool, ParseError> {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(_) => Err(ParseError::InvalidFlag {
            tag: raw.name.clone(),
            value: value.cloned().unwrap_or_default(),
        }),
    }
}
