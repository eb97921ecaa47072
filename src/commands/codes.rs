//! Codes command handler

use anyhow::Result;
use serde::Serialize;

use mcansi::{AnsiDirective, StyleCode, ANSI_RESET};

/// One row of the code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub code: char,
    pub token: String,
    pub label: &'static str,
    pub kind: &'static str,
    /// SGR sequence the code becomes
    pub ansi: String,
}

impl From<StyleCode> for CodeEntry {
    fn from(code: StyleCode) -> Self {
        Self {
            code: code.discriminator(),
            token: code.token(),
            label: code.label(),
            kind: if code.is_color() { "color" } else { "format" },
            ansi: AnsiDirective::from(code).to_string(),
        }
    }
}

/// Every legacy code in table order.
pub fn code_table() -> Vec<CodeEntry> {
    StyleCode::ALL.iter().copied().map(CodeEntry::from).collect()
}

/// Render the table as aligned text with a styled sample per row.
pub fn format_table(entries: &[CodeEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{}  {:<14} {:<7} {}{}{}\n",
            entry.token, entry.label, entry.kind, entry.ansi, entry.label, ANSI_RESET
        ));
    }
    out
}

/// Handle the codes command.
#[cfg(not(tarpaulin_include))]
pub fn handle(json: bool) -> Result<()> {
    let entries = code_table();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format_table(&entries));
    }
    Ok(())
}
