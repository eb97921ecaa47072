//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Write the completion script for `shell` into `out`.
pub fn write_completions<C: CommandFactory>(shell: CompletionShell, out: &mut dyn Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "mcansi", out);
}

/// Handle completions command.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completions::<C>(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}
