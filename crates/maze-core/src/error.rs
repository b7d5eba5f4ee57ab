// crates/maze-core/src/error.rs

use thiserror::Error;

/// Protocol-wide error types for the Maze staking platform.
///
/// Every failed operation aborts as a whole; the variant tells the caller
/// which class of precondition was violated and the message names it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Malformed input: zero address, zero amount, zero duration, rate out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller lacks the required role, or the account is blacklisted / the system paused.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// The operation is not allowed in the account's current state.
    #[error("Invalid state: {0}")]
    State(String),

    /// Fixed-point overflow or underflow. Unreachable under the documented bounds.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Token collaborator refused a transfer.
    #[error("Token error: {0}")]
    Token(String),

    /// Configuration file could not be read or is invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MazeError {
    /// Shorthand for an overflow in a named computation.
    pub fn overflow(context: &str) -> Self {
        MazeError::Arithmetic(format!("overflow in {}", context))
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(e: serde_json::Error) -> Self {
        MazeError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for MazeError {
    fn from(e: toml::de::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}

impl From<std::io::Error> for MazeError {
    fn from(e: std::io::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}
