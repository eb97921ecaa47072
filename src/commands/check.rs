//! Check command handler

use mcansi::contains_legacy_codes;

/// Exit status for the check command: 0 when codes are present.
pub fn exit_code(text: &str) -> i32 {
    if contains_legacy_codes(text) {
        0
    } else {
        1
    }
}

/// Handle the check command.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str) -> ! {
    std::process::exit(exit_code(text))
}
