//! Transcoding errors.

/// Errors that can occur while converting legacy text to ANSI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscodeError {
    #[error("Malformed color escape '{escape}': expected 6 hex digits after removing section signs")]
    MalformedColorEscape { escape: String },
}
