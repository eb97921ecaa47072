//! Legacy style codes: one discriminator character after the sentinel.

use crate::ansi::{AnsiColor, AnsiDirective};
use crate::color::NamedColor;

use super::SENTINEL;

/// A legacy color or style code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Grey,
    DarkGrey,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscate,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl StyleCode {
    /// Every code, in discriminator order.
    pub const ALL: [StyleCode; 22] = [
        StyleCode::Black,
        StyleCode::DarkBlue,
        StyleCode::DarkGreen,
        StyleCode::DarkAqua,
        StyleCode::DarkRed,
        StyleCode::DarkPurple,
        StyleCode::Gold,
        StyleCode::Grey,
        StyleCode::DarkGrey,
        StyleCode::Blue,
        StyleCode::Green,
        StyleCode::Aqua,
        StyleCode::Red,
        StyleCode::LightPurple,
        StyleCode::Yellow,
        StyleCode::White,
        StyleCode::Obfuscate,
        StyleCode::Bold,
        StyleCode::Strikethrough,
        StyleCode::Underline,
        StyleCode::Italic,
        StyleCode::Reset,
    ];

    /// Resolve a discriminator character (case-insensitive).
    ///
    /// Characters outside the table resolve to `Reset` rather than failing.
    pub fn resolve(discriminator: char) -> StyleCode {
        match discriminator.to_ascii_lowercase() {
            '0' => StyleCode::Black,
            '1' => StyleCode::DarkBlue,
            '2' => StyleCode::DarkGreen,
            '3' => StyleCode::DarkAqua,
            '4' => StyleCode::DarkRed,
            '5' => StyleCode::DarkPurple,
            '6' => StyleCode::Gold,
            '7' => StyleCode::Grey,
            '8' => StyleCode::DarkGrey,
            '9' => StyleCode::Blue,
            'a' => StyleCode::Green,
            'b' => StyleCode::Aqua,
            'c' => StyleCode::Red,
            'd' => StyleCode::LightPurple,
            'e' => StyleCode::Yellow,
            'f' => StyleCode::White,
            'k' => StyleCode::Obfuscate,
            'l' => StyleCode::Bold,
            'm' => StyleCode::Strikethrough,
            'n' => StyleCode::Underline,
            'o' => StyleCode::Italic,
            _ => StyleCode::Reset,
        }
    }

    /// Resolve a whole matched token such as `§6`. Anything that is not
    /// sentinel + one character resolves to `Reset`.
    pub fn from_token(token: &str) -> StyleCode {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(SENTINEL), Some(discriminator), None) => Self::resolve(discriminator),
            _ => StyleCode::Reset,
        }
    }

    /// Canonical (lower-case) discriminator.
    pub const fn discriminator(self) -> char {
        match self {
            StyleCode::Black => '0',
            StyleCode::DarkBlue => '1',
            StyleCode::DarkGreen => '2',
            StyleCode::DarkAqua => '3',
            StyleCode::DarkRed => '4',
            StyleCode::DarkPurple => '5',
            StyleCode::Gold => '6',
            StyleCode::Grey => '7',
            StyleCode::DarkGrey => '8',
            StyleCode::Blue => '9',
            StyleCode::Green => 'a',
            StyleCode::Aqua => 'b',
            StyleCode::Red => 'c',
            StyleCode::LightPurple => 'd',
            StyleCode::Yellow => 'e',
            StyleCode::White => 'f',
            StyleCode::Obfuscate => 'k',
            StyleCode::Bold => 'l',
            StyleCode::Strikethrough => 'm',
            StyleCode::Underline => 'n',
            StyleCode::Italic => 'o',
            StyleCode::Reset => 'r',
        }
    }

    /// Sentinel followed by the canonical discriminator.
    pub fn token(self) -> String {
        format!("{SENTINEL}{}", self.discriminator())
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            StyleCode::Black => "black",
            StyleCode::DarkBlue => "dark blue",
            StyleCode::DarkGreen => "dark green",
            StyleCode::DarkAqua => "dark aqua",
            StyleCode::DarkRed => "dark red",
            StyleCode::DarkPurple => "dark purple",
            StyleCode::Gold => "gold",
            StyleCode::Grey => "grey",
            StyleCode::DarkGrey => "dark grey",
            StyleCode::Blue => "blue",
            StyleCode::Green => "green",
            StyleCode::Aqua => "aqua",
            StyleCode::Red => "red",
            StyleCode::LightPurple => "light purple",
            StyleCode::Yellow => "yellow",
            StyleCode::White => "white",
            StyleCode::Obfuscate => "obfuscate",
            StyleCode::Bold => "bold",
            StyleCode::Strikethrough => "strikethrough",
            StyleCode::Underline => "underline",
            StyleCode::Italic => "italic",
            StyleCode::Reset => "reset",
        }
    }

    /// Terminal directive for this code.
    ///
    /// Grey shares bright black with dark grey, and light purple shares plain
    /// magenta with dark purple. Obfuscation has no terminal equivalent and
    /// maps to reverse video.
    #[rustfmt::skip]
    pub const fn directive(self) -> AnsiDirective {
        use AnsiDirective::Foreground as Fg;
        match self {
            StyleCode::Black         => Fg(AnsiColor::Black),
            StyleCode::DarkBlue      => Fg(AnsiColor::Blue),
            StyleCode::DarkGreen     => Fg(AnsiColor::Green),
            StyleCode::DarkAqua      => Fg(AnsiColor::Cyan),
            StyleCode::DarkRed       => Fg(AnsiColor::Red),
            StyleCode::DarkPurple    => Fg(AnsiColor::Magenta),
            StyleCode::Gold          => Fg(AnsiColor::Yellow),
            StyleCode::Grey          => Fg(AnsiColor::BrightBlack),
            StyleCode::DarkGrey      => Fg(AnsiColor::BrightBlack),
            StyleCode::Blue          => Fg(AnsiColor::BrightBlue),
            StyleCode::Green         => Fg(AnsiColor::BrightGreen),
            StyleCode::Aqua          => Fg(AnsiColor::BrightCyan),
            StyleCode::Red           => Fg(AnsiColor::BrightRed),
            StyleCode::LightPurple   => Fg(AnsiColor::Magenta),
            StyleCode::Yellow        => Fg(AnsiColor::BrightYellow),
            StyleCode::White         => Fg(AnsiColor::White),
            StyleCode::Obfuscate     => AnsiDirective::Reverse,
            StyleCode::Bold          => AnsiDirective::Bold,
            StyleCode::Strikethrough => AnsiDirective::Strikethrough,
            StyleCode::Underline     => AnsiDirective::Underline,
            StyleCode::Italic        => AnsiDirective::Italic,
            StyleCode::Reset         => AnsiDirective::Reset,
        }
    }

    /// Palette color for color codes, `None` for style codes.
    pub fn color(self) -> Option<NamedColor> {
        let index = Self::ALL.iter().position(|code| *code == self)?;
        NamedColor::ALL.get(index).copied()
    }

    pub fn is_color(self) -> bool {
        self.color().is_some()
    }
}

impl From<StyleCode> for AnsiDirective {
    fn from(code: StyleCode) -> Self {
        code.directive()
    }
}

impl From<NamedColor> for StyleCode {
    fn from(color: NamedColor) -> Self {
        StyleCode::resolve(color.discriminator())
    }
}
