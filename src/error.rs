//! Error handling module for calctui
//!
//! Errors of the terminal front end and the command line driver. Calculator
//! errors such as division by zero are not here: they are part of the engine
//! state and show up on the display (see [`crate::engine::CalcError`]).

use crate::engine::IntentParseError;
use thiserror::Error;

/// Main error type for calctui
#[derive(Error, Debug)]
pub enum CalcTuiError {
    /// IO errors (files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown token passed to `eval`
    #[error("Invalid input: {0}")]
    Intent(#[from] IntentParseError),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

impl CalcTuiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> CalcTuiError {
    CalcTuiError::General(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcTuiError::config("swipe threshold must be at least 1");
        assert_eq!(
            err.to_string(),
            "Configuration error: swipe threshold must be at least 1"
        );

        let err = CalcTuiError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CalcTuiError = io_err.into();
        assert!(matches!(err, CalcTuiError::Io(_)));
    }

    #[test]
    fn test_intent_error_conversion() {
        let err: CalcTuiError = IntentParseError::UnknownToken("%".to_string()).into();
        assert_eq!(err.to_string(), "Invalid input: unknown key '%'");
    }

    #[test]
    fn test_general_error() {
        let err = general_error("boom");
        assert!(matches!(err, CalcTuiError::General(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
