//! Error types for the stream player.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Errors that can occur while configuring the player or resolving a viewer token.
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed viewer token: {0}")]
    TokenFormat(String),

    #[error("Token provider error: {0}")]
    Provider(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Logic thread is not running")]
    ChannelClosed,

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_player_error_display() {
        let err = PlayerError::Provider("token service unreachable".to_string());
        assert_eq!(
            err.to_string(),
            "Token provider error: token service unreachable"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "file not found");
        let err: PlayerError = io_err.into();

        match err {
            PlayerError::Io(_) => {}
            _ => panic!("Expected PlayerError::Io"),
        }
    }
}
