//! CLI definitions for mcansi
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "mcansi")]
#[command(about = "Translate Minecraft-style color codes and markup into ANSI terminal escapes")]
#[command(
    long_about = "mcansi - Translate Minecraft-style color codes and markup into ANSI escapes.

Text may contain legacy section-sign codes (§a, §l, §x§f§f§0§0§0§0) and
markup tags (<red>, <#ff8800>, <bold>...</bold>). Both are rewritten into
ANSI SGR sequences that a terminal understands.

QUICK START:
    mcansi render '§6Gold §lBold'          Legacy codes
    mcansi render '<red>alert</red>'       Markup tags
    mcansi render --legacy '<#ff8800>hi'   Collapse colors to 16-color palette
    mcansi codes                           Show the code table"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transcode text into ANSI escapes
    #[command(long_about = "Transcode markup and legacy color codes into ANSI escapes.

Input comes from the TEXT arguments (joined with spaces), from --file, or
from standard input when neither is given. The rendering mode defaults to
the `render.mode` config value.

EXAMPLES:
    mcansi render '§aGreen §r§cRed'
    mcansi render '<gold><b>Title</b></gold>'
    mcansi render --legacy '<#123456>nearest palette color'
    mcansi render --file motd.txt
    echo '§9blue' | mcansi render")]
    Render {
        /// Text to transcode
        #[arg(help = "Text to transcode (stdin when omitted)")]
        text: Vec<String>,
        /// Collapse colors to the 16-color legacy palette
        #[arg(long, conflicts_with = "rich")]
        legacy: bool,
        /// Keep exact 24-bit colors
        #[arg(long)]
        rich: bool,
        /// Read input from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Do not print a trailing newline
        #[arg(long, short = 'n')]
        no_newline: bool,
    },

    /// Check whether text contains legacy color codes
    #[command(long_about = "Check whether text contains legacy color codes.

Exits with status 0 when at least one section-sign code is present,
1 otherwise. Nothing is printed.

EXAMPLES:
    mcansi check '§aHello' && echo colored")]
    Check {
        /// Text to inspect
        text: String,
    },

    /// List every legacy code with a rendered sample
    #[command(long_about = "List every legacy code with its label and a rendered sample.

EXAMPLES:
    mcansi codes
    mcansi codes --json")]
    Codes {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print text in the current chroma (rainbow) color
    #[command(long_about = "Print text in the current chroma color.

The hue cycles with wall-clock time; X, Y and SCALE shift the phase so that
neighbouring positions get neighbouring hues. Period, saturation and
brightness come from the [chroma] config section.

EXAMPLES:
    mcansi chroma 'rainbow'
    mcansi chroma --x 4 --scale 2 'shifted'")]
    Chroma {
        /// Horizontal position
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        /// Vertical position
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
        /// Phase offset scale
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Text to colorize (prints the color when omitted)
        text: Option<String>,
    },

    /// Average color of a raw RGB image
    #[command(long_about = "Compute the average color of a raw RGB image.

FILE must hold exactly WIDTH * HEIGHT * 3 bytes of packed RGB data.
The result is printed as #rrggbb.

EXAMPLES:
    mcansi average stone.rgb --width 16 --height 16")]
    Average {
        /// Raw RGB file
        file: PathBuf,
        /// Image width in pixels
        #[arg(long)]
        width: u32,
        /// Image height in pixels
        #[arg(long)]
        height: u32,
    },

    /// Find the sampled name nearest to a color
    #[command(long_about = "Find the sampled name nearest to a color.

Each --sample NAME=COLOR entry is recorded into a sample table (the first
name recorded for a color wins), then the name nearest to COLOR is printed.

EXAMPLES:
    mcansi nearest '#7f7f7f' --sample stone=#7d7d7d --sample dirt=#866043")]
    Nearest {
        /// Query color (#rrggbb)
        color: String,
        /// Sample entry as NAME=#rrggbb
        #[arg(long = "sample", short, value_name = "NAME=COLOR")]
        samples: Vec<String>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and initialize the mcansi configuration file.

Configuration is stored in ~/.config/mcansi/config.toml and holds the
default render mode, retry budget and chroma settings.

EXAMPLES:
    mcansi config show       Display current configuration
    mcansi config path       Print the config file location
    mcansi config init       Write a default config file"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    #[command(long_about = "Write a default configuration file.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    mcansi config init")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
