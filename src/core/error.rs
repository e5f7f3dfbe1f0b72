//! Error types.
//!
//! None of these is fatal to a running session:
//! - `InputClosed` ends the session cleanly
//! - `RecordError` is reported as a warning, the round result stands
//! - `ConfigError` only occurs at start-up

use std::path::Path;

use derive_more::{Display, Error};

/// The human's input stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("input closed")]
pub struct InputClosed;

/// A record could not be written.
#[derive(Debug, Clone, Display, Error)]
#[display("Record error: {} at {}:{}", message, file, line)]
pub struct RecordError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl RecordError {
    /// Create a new record error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RecordError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}

/// A configuration could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid configuration {}: {}", origin, reason)]
pub struct ConfigError {
    /// Where the configuration came from: a file path, or `<inline>` for text.
    pub origin: String,
    pub reason: String,
}

impl ConfigError {
    pub fn new(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Re-attribute the error to a file.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        Self {
            origin: path.display().to_string(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_tracks_location() {
        let err = RecordError::new("disk full");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Record error: disk full at "));
    }

    #[test]
    fn test_record_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RecordError = io.into();
        assert!(err.message.contains("denied"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("<inline>", "bad seed").in_file(Path::new("game.toml"));
        assert_eq!(err.origin, "game.toml");
        assert_eq!(err.to_string(), "Invalid configuration game.toml: bad seed");
    }
}
