//! ANSI SGR (Select Graphic Rendition) directives.
//!
//! An `AnsiDirective` renders through `Display` as `ESC [ <params> m`.
//! Only the foreground subset the transcoder emits is modelled.

use std::fmt;

use crate::color::RgbColor;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// The 16 standard terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// SGR foreground parameter (30-37, 90-97).
    pub const fn foreground_code(self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
            AnsiColor::BrightBlack => 90,
            AnsiColor::BrightRed => 91,
            AnsiColor::BrightGreen => 92,
            AnsiColor::BrightYellow => 93,
            AnsiColor::BrightBlue => 94,
            AnsiColor::BrightMagenta => 95,
            AnsiColor::BrightCyan => 96,
            AnsiColor::BrightWhite => 97,
        }
    }
}

/// A single terminal styling directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiDirective {
    Reset,
    Bold,
    Italic,
    Underline,
    Reverse,
    Strikethrough,
    Foreground(AnsiColor),
    ForegroundRgb(RgbColor),
}

impl fmt::Display for AnsiDirective {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AnsiDirective::Reset             => write!(f, "{CSI}0m"),
            AnsiDirective::Bold              => write!(f, "{CSI}1m"),
            AnsiDirective::Italic            => write!(f, "{CSI}3m"),
            AnsiDirective::Underline         => write!(f, "{CSI}4m"),
            AnsiDirective::Reverse           => write!(f, "{CSI}7m"),
            AnsiDirective::Strikethrough     => write!(f, "{CSI}9m"),
            AnsiDirective::Foreground(color) => write!(f, "{CSI}{}m", color.foreground_code()),
            AnsiDirective::ForegroundRgb(RgbColor { red, green, blue }) => {
                write!(f, "{CSI}38;2;{red};{green};{blue}m")
            }
        }
    }
}

/// Wrap `text` in a 24-bit foreground color, followed by a reset.
pub fn colorize_rgb(color: RgbColor, text: &str) -> String {
    format!("{}{}{}", AnsiDirective::ForegroundRgb(color), text, ANSI_RESET)
}
