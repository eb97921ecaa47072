//! Terminal preparation for ANSI output.

/// Make sure the attached console interprets ANSI escape sequences.
///
/// On Windows this switches the console into virtual terminal processing
/// mode. Other platforms always support ANSI, so this just returns `true`.
#[cfg(windows)]
pub fn enable_virtual_terminal_processing() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
pub fn enable_virtual_terminal_processing() -> bool {
    true
}
