//! Error types shared across the mathkit crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MathError {
    /// A grid dimension was zero or negative.
    #[error("Invalid configuration: {axis} must be positive, got {value}")]
    InvalidConfiguration { axis: &'static str, value: i64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Invalid digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MathError>;
