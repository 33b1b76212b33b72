//! Error handling for the lanescan library
//!
//! Searches themselves never fail: a missing needle is reported as the
//! haystack length. Errors only arise while choosing a backend or loading
//! configuration.

use thiserror::Error;

/// Main error type for the lanescan library
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid data format
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Feature not supported by this build or this CPU
    #[error("Not supported: {feature}")]
    NotSupported {
        /// Description of the unsupported feature
        feature: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ScanError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData { message: message.into() }
    }

    /// Create a not supported error
    pub fn not_supported<S: Into<String>>(feature: S) -> Self {
        Self::NotSupported { feature: feature.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if the error is recoverable
    ///
    /// An unsupported backend can always be replaced by auto-detection, so it
    /// is the only recoverable kind.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NotSupported { .. } => true,
            Self::Io(_) | Self::InvalidData { .. } | Self::Configuration { .. } => false,
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidData { .. } => "data",
            Self::NotSupported { .. } => "unsupported",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for lanescan operations
pub type Result<T> = std::result::Result<T, ScanError>;
