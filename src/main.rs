//! mcansi - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use mcansi::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "MCANSI_LOG";

/// Default filter directive for a `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `MCANSI_LOG` overrides `-v` when set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = mcansi::GIT_SHA,
        "starting"
    );

    if !mcansi::console::enable_virtual_terminal_processing() {
        warn!("console does not support ANSI escapes, output may show raw sequences");
    }

    match cli.command {
        Commands::Render {
            text,
            legacy,
            rich,
            file,
            no_newline,
        } => commands::render::handle(&text, legacy, rich, file.as_deref(), no_newline),
        Commands::Check { text } => commands::check::handle(&text),
        Commands::Codes { json } => commands::codes::handle(json),
        Commands::Chroma { x, y, scale, text } => {
            commands::chroma::handle(x, y, scale, text.as_deref())
        }
        Commands::Average {
            file,
            width,
            height,
        } => commands::average::handle(&file, width, height),
        Commands::Nearest { color, samples } => commands::nearest::handle(&color, &samples),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
