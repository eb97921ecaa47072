//! mcansi library
//!
//! Converts Minecraft-style text styling into ANSI terminal escapes:
//! markup tags (`<red>`, `<#ff8800>`, `<bold>`) are first rewritten into
//! section-sign codes, then every `§x` hex escape and `§<c>` legacy code is
//! replaced with its SGR directive.
//!
//! ```
//! let out = mcansi::to_ansi("§6Gold §lBold", false).unwrap();
//! assert_eq!(out, "\x1b[33mGold \x1b[1mBold\x1b[0m");
//! ```

pub mod ansi;
pub mod cli;
pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod legacy;
pub mod markup;
pub mod palette;
pub mod transcode;

pub use ansi::{colorize_rgb, AnsiDirective, ANSI_RESET};
pub use color::{NamedColor, RgbColor};
pub use config::Config;
pub use error::TranscodeError;
pub use legacy::{contains_legacy_codes, StyleCode};
pub use palette::{ColorSampleTable, PixelBuffer};
pub use transcode::{to_ansi, Transcoder};

/// Git commit the binary was built from, or "unknown" for release builds.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};
