//! Error types for the adversary crate

use thiserror::Error;

/// Main error type for the adversary crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {action} in state '{state}'")]
    InvalidAction { action: String, state: String },

    #[error("utility is undefined for non-terminal state '{state}'")]
    UndefinedUtility { state: String },

    #[error("malformed state: {message}")]
    MalformedState { message: String },

    #[error("game already over")]
    GameOver,

    #[error("non-terminal state '{state}' has no legal actions")]
    NoLegalActions { state: String },

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
