//! Color types shared by the transcoder and the palette helpers.
//!
//! - `RgbColor`: a 24-bit color, packable as `0xRRGGBB`
//! - `NamedColor`: the 16 colors of the legacy palette, each with its
//!   canonical RGB value and legacy discriminator

use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Unpack from `0xRRGGBB`. Bits above the low 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            red: ((packed >> 16) & 0xff) as u8,
            green: ((packed >> 8) & 0xff) as u8,
            blue: (packed & 0xff) as u8,
        }
    }

    /// Pack as `0xRRGGBB`.
    pub const fn packed(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_packed)
    }

    /// Lower-case `rrggbb` without a leading `#`.
    pub fn hex_digits(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Hue, saturation and value, each in `[0, 1]` (hue in `[0, 1)`).
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let r = f32::from(self.red) / 255.0;
        let g = f32::from(self.green) / 255.0;
        let b = f32::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        (hue, saturation, max)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

/// The 16 colors of the legacy palette, in discriminator order `0..f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Canonical RGB value of the palette entry.
    #[rustfmt::skip]
    pub const fn rgb(self) -> RgbColor {
        match self {
            NamedColor::Black       => RgbColor::from_packed(0x000000),
            NamedColor::DarkBlue    => RgbColor::from_packed(0x0000aa),
            NamedColor::DarkGreen   => RgbColor::from_packed(0x00aa00),
            NamedColor::DarkAqua    => RgbColor::from_packed(0x00aaaa),
            NamedColor::DarkRed     => RgbColor::from_packed(0xaa0000),
            NamedColor::DarkPurple  => RgbColor::from_packed(0xaa00aa),
            NamedColor::Gold        => RgbColor::from_packed(0xffaa00),
            NamedColor::Gray        => RgbColor::from_packed(0xaaaaaa),
            NamedColor::DarkGray    => RgbColor::from_packed(0x555555),
            NamedColor::Blue        => RgbColor::from_packed(0x5555ff),
            NamedColor::Green       => RgbColor::from_packed(0x55ff55),
            NamedColor::Aqua        => RgbColor::from_packed(0x55ffff),
            NamedColor::Red         => RgbColor::from_packed(0xff5555),
            NamedColor::LightPurple => RgbColor::from_packed(0xff55ff),
            NamedColor::Yellow      => RgbColor::from_packed(0xffff55),
            NamedColor::White       => RgbColor::from_packed(0xffffff),
        }
    }

    /// Legacy discriminator character (`0-9`, `a-f`).
    pub const fn discriminator(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    /// Markup tag name (snake case).
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Look up a palette color by markup name. Accepts the `grey` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "grey" => Some(NamedColor::Gray),
            "dark_grey" => Some(NamedColor::DarkGray),
            other => Self::ALL.into_iter().find(|c| c.name() == other),
        }
    }

    /// Nearest palette color by hue-weighted HSV distance.
    ///
    /// Hue differences are wrapped around the color wheel and weighted three
    /// times as heavily as saturation and value. Ties keep the earliest
    /// palette entry.
    pub fn nearest_to(color: RgbColor) -> Self {
        let target = color.to_hsv();
        let mut best = NamedColor::Black;
        let mut best_distance = f32::MAX;
        for candidate in Self::ALL {
            let distance = hsv_distance(target, candidate.rgb().to_hsv());
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
            if distance == 0.0 {
                break;
            }
        }
        best
    }
}

fn hsv_distance(a: (f32, f32, f32), b: (f32, f32, f32)) -> f32 {
    let raw_hue = (a.0 - b.0).abs();
    let hue = 3.0 * raw_hue.min(1.0 - raw_hue);
    let saturation = a.1 - b.1;
    let value = a.2 - b.2;
    hue * hue + saturation * saturation + value * value
}
