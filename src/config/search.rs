//! Backend selection configuration.

use super::{parse_env_bool, Config, ValidationError};
use crate::error::{Result, ScanError};
use crate::simd::{Backend, VectorWidth};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which vector backend a searcher may use.
///
/// With no pin, the widest supported backend whose toggle is on wins. A pin
/// selects exactly one width and is an error if that backend is unavailable.
///
/// | Variable | Field | Values |
/// |---|---|---|
/// | `{prefix}SIMD_ENABLE` | `enable_simd` | bool |
/// | `{prefix}SIMD_WIDTH` | `pinned_width` | `128`, `256`, `512`, `scalar`, `auto` |
/// | `{prefix}SIMD_SSE41` | `enable_sse41` | bool |
/// | `{prefix}SIMD_AVX2` | `enable_avx2` | bool |
/// | `{prefix}SIMD_AVX512` | `enable_avx512` | bool |
/// | `{prefix}SIMD_NEON` | `enable_neon` | bool |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Enable vectorized search at all
    pub enable_simd: bool,
    /// Force one register width instead of auto-detecting
    pub pinned_width: Option<VectorWidth>,
    /// Enable the SSE4.1 backend if available
    pub enable_sse41: bool,
    /// Enable the AVX2 backend if available
    pub enable_avx2: bool,
    /// Enable the AVX-512 backend if available
    pub enable_avx512: bool,
    /// Enable the NEON backend if available
    pub enable_neon: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable_simd: true,
            pinned_width: None,
            enable_sse41: true,
            enable_avx2: true,
            enable_avx512: true,
            enable_neon: true,
        }
    }
}

impl SearchConfig {
    /// A configuration pinned to `width`
    pub fn pinned(width: VectorWidth) -> Self {
        Self { pinned_width: Some(width), ..Self::default() }
    }

    /// Whether this configuration permits `backend`, ignoring the pin
    pub fn allows(&self, backend: Backend) -> bool {
        match backend {
            Backend::Scalar => true,
            Backend::Sse41 => self.enable_simd && self.enable_sse41,
            Backend::Avx2 => self.enable_simd && self.enable_avx2,
            Backend::Avx512 => self.enable_simd && self.enable_avx512,
            Backend::Neon => self.enable_simd && self.enable_neon,
        }
    }

    /// Apply a width override string: a width, `scalar`, or `auto`.
    pub fn apply_width_override(&mut self, value: &str) -> Result<()> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => self.pinned_width = None,
            "scalar" | "none" | "off" => {
                self.enable_simd = false;
                self.pinned_width = None;
            }
            other => {
                self.pinned_width = Some(other.parse()?);
                self.enable_simd = true;
            }
        }
        Ok(())
    }
}

impl Config for SearchConfig {
    fn validate(&self) -> Result<()> {
        let Some(width) = self.pinned_width else {
            return Ok(());
        };

        if !self.enable_simd {
            return Err(ValidationError::new(
                "pinned_width",
                &width.to_string(),
                "a width is pinned but SIMD is disabled",
            )
            .into());
        }

        if let Some(backend) = width.backend() {
            if !self.allows(backend) {
                return Err(ValidationError::new(
                    "pinned_width",
                    &width.to_string(),
                    &format!("the {} backend is disabled", backend.name()),
                )
                .with_suggestion("enable the backend or unpin the width")
                .into());
            }
        }

        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.enable_simd = parse_env_bool(&format!("{}SIMD_ENABLE", prefix), config.enable_simd);
        config.enable_sse41 = parse_env_bool(&format!("{}SIMD_SSE41", prefix), config.enable_sse41);
        config.enable_avx2 = parse_env_bool(&format!("{}SIMD_AVX2", prefix), config.enable_avx2);
        config.enable_avx512 = parse_env_bool(&format!("{}SIMD_AVX512", prefix), config.enable_avx512);
        config.enable_neon = parse_env_bool(&format!("{}SIMD_NEON", prefix), config.enable_neon);
        if let Ok(width) = std::env::var(format!("{}SIMD_WIDTH", prefix)) {
            config.apply_width_override(&width)?;
        }
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self::default()
    }

    fn portable_preset() -> Self {
        Self::pinned(VectorWidth::W128)
    }

    fn scalar_preset() -> Self {
        Self {
            enable_simd: false,
            pinned_width: None,
            enable_sse41: false,
            enable_avx2: false,
            enable_avx512: false,
            enable_neon: false,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::configuration(format!("Failed to serialize search config: {}", e)))?;
        std::fs::write(path, serialized)
            .map_err(|e| ScanError::configuration(format!("Failed to write search config file: {}", e)))?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScanError::configuration(format!("Failed to read search config file: {}", e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ScanError::configuration(format!("Failed to parse search config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.allows(Backend::Avx2));
        assert_eq!(SearchConfig::balanced_preset(), config);
    }

    #[test]
    fn test_presets() {
        assert!(SearchConfig::performance_preset().validate().is_ok());
        assert!(SearchConfig::portable_preset().validate().is_ok());
        let scalar = SearchConfig::scalar_preset();
        assert!(scalar.validate().is_ok());
        assert!(!scalar.allows(Backend::Sse41));
        assert!(scalar.allows(Backend::Scalar));
    }

    #[test]
    fn test_pin_without_simd_is_invalid() {
        let config = SearchConfig {
            enable_simd: false,
            ..SearchConfig::pinned(VectorWidth::W256)
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_pin_with_disabled_isa_is_invalid() {
        let config = SearchConfig {
            enable_avx2: false,
            ..SearchConfig::pinned(VectorWidth::W256)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_width_override() {
        let mut config = SearchConfig::default();
        config.apply_width_override("256").unwrap();
        assert_eq!(config.pinned_width, Some(VectorWidth::W256));

        config.apply_width_override("Scalar").unwrap();
        assert!(!config.enable_simd);
        assert_eq!(config.pinned_width, None);

        config.apply_width_override("128").unwrap();
        assert!(config.enable_simd);
        assert_eq!(config.pinned_width, Some(VectorWidth::W128));

        config.apply_width_override("auto").unwrap();
        assert_eq!(config.pinned_width, None);

        assert!(config.apply_width_override("64").is_err());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&SearchConfig::pinned(VectorWidth::W512)).unwrap();
        assert!(json.contains("\"pinned_width\":\"512\""));

        // missing fields take their defaults
        let config: SearchConfig = serde_json::from_str(r#"{"enable_avx2": false}"#).unwrap();
        assert!(!config.enable_avx2);
        assert!(config.enable_simd);
        assert_eq!(config.pinned_width, None);
    }
}
