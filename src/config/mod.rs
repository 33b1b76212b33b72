//! Configuration for backend selection
//!
//! The [`Config`] trait gives every configuration type validation, environment
//! initialization, presets, and JSON persistence. [`SearchConfig`] is the one
//! implementation: it decides which vector backend a
//! [`SimdSearcher`](crate::SimdSearcher) uses.
//!
//! # Environment Initialization
//!
//! ```rust
//! use lanescan::config::{Config, SearchConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads LANESCAN_SIMD_ENABLE, LANESCAN_SIMD_WIDTH, LANESCAN_SIMD_AVX2, ...
//! let config = SearchConfig::from_env()?;
//!
//! // Same keys under a custom prefix
//! let config = SearchConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Presets
//!
//! ```rust
//! use lanescan::config::{Config, SearchConfig};
//!
//! let fastest = SearchConfig::performance_preset();
//! let portable = SearchConfig::portable_preset();
//! let scalar = SearchConfig::scalar_preset();
//! assert!(!scalar.enable_simd);
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod search;

pub use search::SearchConfig;

/// Default prefix for environment variables
pub const ENV_PREFIX: &str = "LANESCAN_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `LANESCAN_{COMPONENT}_{FIELD}`,
    /// for example `LANESCAN_SIMD_WIDTH=256`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Fastest configuration the machine supports.
    fn performance_preset() -> Self;

    /// Configuration that behaves the same on every machine with a vector unit.
    fn portable_preset() -> Self;

    /// Configuration with vector code disabled.
    fn scalar_preset() -> Self;

    /// Balanced configuration, the default.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load configuration from a file.
    ///
    /// The loaded configuration is validated before it is returned.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Configuration validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The invalid value
    pub value: String,
    /// Description of why the value is invalid
    pub reason: String,
    /// Suggested valid values or ranges
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: &str, value: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Add a suggestion for valid values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid configuration for field '{}': value '{}' is invalid ({})",
            self.field, self.value, self.reason
        )?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". Suggested values: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::error::ScanError {
    fn from(err: ValidationError) -> Self {
        crate::error::ScanError::configuration(err.to_string())
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_bool() {
        std::env::set_var("LANESCAN_UNIT_BOOL_ON", "Yes");
        std::env::set_var("LANESCAN_UNIT_BOOL_OFF", "nope");
        assert!(parse_env_bool("LANESCAN_UNIT_BOOL_ON", false));
        assert!(!parse_env_bool("LANESCAN_UNIT_BOOL_OFF", true));
        assert!(parse_env_bool("LANESCAN_UNIT_BOOL_UNSET", true));
    }

    #[test]
    fn test_parse_env_var() {
        std::env::set_var("LANESCAN_UNIT_NUM", "42");
        std::env::set_var("LANESCAN_UNIT_NUM_BAD", "forty-two");
        assert_eq!(parse_env_var("LANESCAN_UNIT_NUM", 0usize), 42);
        assert_eq!(parse_env_var("LANESCAN_UNIT_NUM_BAD", 7usize), 7);
        assert_eq!(parse_env_var("LANESCAN_UNIT_NUM_UNSET", 9usize), 9);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("pinned_width", "512", "AVX-512 disabled")
            .with_suggestion("128, 256");
        let text = err.to_string();
        assert!(text.contains("pinned_width"));
        assert!(text.contains("Suggested values: 128, 256"));

        let scan: crate::error::ScanError = err.into();
        assert_eq!(scan.category(), "config");
    }
}
