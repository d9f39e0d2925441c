//! Error types for butterfly-maxspeed
//!
//! Missing or malformed tag values are never errors; they resolve to "no value"
//! and flow through the fallback logic. What remains are configuration problems,
//! detected when encoded values and parsers are set up, and range violations at
//! the encoder boundary.

use thiserror::Error;

/// Result type for butterfly-maxspeed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or writing encoded edge attributes
#[derive(Error, Debug)]
pub enum Error {
    /// A parser needs a field with separate forward and backward storage
    #[error("encoded value '{name}' must be able to store two directions")]
    NotTwoDirections { name: String },

    /// Bit positions are assigned once and never move afterwards
    #[error("encoded value '{name}' is already initialized")]
    AlreadyInitialized { name: String },

    /// The encoded value was used before it was given a position in the record
    #[error("encoded value '{name}' is not initialized")]
    NotInitialized { name: String },

    /// Value cannot be represented by the field
    #[error("value {value} for '{name}' is outside the encodable range [{min}, {max}]")]
    ValueOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Record was built for a smaller layout than the field expects
    #[error("edge flags hold {len} words but '{name}' lives in word {word}")]
    RecordTooSmall {
        name: String,
        word: usize,
        len: usize,
    },

    /// Invalid layout or parser configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}
