//! The legacy inline dialect.
//!
//! Every escape starts with the section sign. Two forms exist:
//! - `§` + one discriminator (`0-9`, `a-f` colors; `k-o`, `r` styles)
//! - `§x` + twelve characters encoding a 24-bit color, usually written with
//!   a sentinel before each hex digit (`§x§f§f§0§0§0§0`)

pub mod code;
pub mod matcher;

pub use code::StyleCode;
pub use matcher::{
    contains_legacy_codes, decode_hex_escape, find_escapes, EscapeMatch, EscapeMatches,
    EscapePattern,
};

/// The section sign that prefixes every legacy escape.
pub const SENTINEL: char = '\u{00A7}';
