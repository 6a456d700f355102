//! Error types for sortreplay.

use sr_trace::ParseAlgorithmError;
use thiserror::Error;

/// Result type alias for sortreplay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for sortreplay.
///
/// Navigation never fails; only configuration, input parsing and I/O do.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown algorithm '{0}' (expected one of: bubble, selection, insertion, quick, merge)")]
    UnknownAlgorithm(String),

    #[error("speed {speed_ms}ms out of range (allowed {min}..={max})")]
    SpeedOutOfRange { speed_ms: u64, min: u64, max: u64 },

    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("invalid configuration file {path}: {reason}")]
    InvalidConfigFile { path: String, reason: String },

    // Input errors (20-29)
    #[error("invalid input array: {0}")]
    InvalidInput(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::UnknownAlgorithm(_) => 11,
            Error::SpeedOutOfRange { .. } => 12,
            Error::InvalidSize(_) => 13,
            Error::InvalidConfigFile { .. } => 14,
            Error::InvalidInput(_) => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::TomlParse(_) => 62,
            Error::TomlSerialize(_) => 63,
        }
    }

    /// Whether this error came from configuration rather than I/O.
    pub fn is_config(&self) -> bool {
        (10..20).contains(&self.code())
    }
}

impl From<ParseAlgorithmError> for Error {
    fn from(err: ParseAlgorithmError) -> Self {
        Error::UnknownAlgorithm(err.0)
    }
}
