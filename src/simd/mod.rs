//! # SIMD backends
//!
//! Vector widths, the backends that implement them, and the primitive
//! operations ([`Vector`], [`Lane`]) the search kernels are written against.
//!
//! ## Backend selection order
//!
//! | Backend | Width | Requires |
//! |---|---|---|
//! | [`Backend::Avx512`] | 512 | x86_64, feature `avx512`, AVX-512F + AVX-512BW |
//! | [`Backend::Avx2`] | 256 | x86_64, AVX2 |
//! | [`Backend::Sse41`] | 128 | x86_64, SSE4.1 |
//! | [`Backend::Neon`] | 128 | aarch64, NEON |
//! | [`Backend::Scalar`] | none | always available |
//!
//! Every backend except `Scalar` also needs the `simd` cargo feature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::system::cpu_features::get_cpu_features;

pub(crate) mod lane;
pub(crate) mod macros;
pub(crate) mod vector;

#[cfg(lanescan_simd_x86)]
mod x86;

#[cfg(lanescan_simd_neon)]
mod neon;

pub(crate) use lane::{Lane, Lane32, Lane64, Lane8};
pub(crate) use vector::Vector;

/// Register width of a vector backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VectorWidth {
    /// 128-bit registers (SSE4.1, NEON)
    #[serde(rename = "128")]
    W128,
    /// 256-bit registers (AVX2)
    #[serde(rename = "256")]
    W256,
    /// 512-bit registers (AVX-512)
    #[serde(rename = "512")]
    W512,
}

impl VectorWidth {
    /// All widths, narrowest first
    pub const ALL: [VectorWidth; 3] = [VectorWidth::W128, VectorWidth::W256, VectorWidth::W512];

    /// Width in bits
    pub const fn bits(self) -> usize {
        match self {
            Self::W128 => 128,
            Self::W256 => 256,
            Self::W512 => 512,
        }
    }

    /// Width in bytes
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// The backend implementing this width on the current architecture, if any
    pub fn backend(self) -> Option<Backend> {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::W128 => Some(Backend::Sse41),
            #[cfg(target_arch = "aarch64")]
            Self::W128 => Some(Backend::Neon),
            #[cfg(target_arch = "x86_64")]
            Self::W256 => Some(Backend::Avx2),
            #[cfg(target_arch = "x86_64")]
            Self::W512 => Some(Backend::Avx512),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl fmt::Display for VectorWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for VectorWidth {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "128" => Ok(Self::W128),
            "256" => Ok(Self::W256),
            "512" => Ok(Self::W512),
            other => Err(ScanError::configuration(format!(
                "unknown vector width {:?}, expected 128, 256 or 512",
                other
            ))),
        }
    }
}

/// A search implementation: one instruction set at one register width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable linear scan
    Scalar,
    /// SSE4.1, 128-bit (x86_64)
    Sse41,
    /// AVX2, 256-bit (x86_64)
    Avx2,
    /// AVX-512F + BW, 512-bit (x86_64, feature `avx512`)
    Avx512,
    /// Advanced SIMD, 128-bit (aarch64)
    Neon,
}

impl Backend {
    /// Vector backends in preference order, widest first
    pub const PREFERENCE: [Backend; 4] = [Backend::Avx512, Backend::Avx2, Backend::Sse41, Backend::Neon];

    /// Register width, `None` for the scalar backend
    pub const fn width(self) -> Option<VectorWidth> {
        match self {
            Self::Scalar => None,
            Self::Sse41 | Self::Neon => Some(VectorWidth::W128),
            Self::Avx2 => Some(VectorWidth::W256),
            Self::Avx512 => Some(VectorWidth::W512),
        }
    }

    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse41 => "sse4.1",
            Self::Avx2 => "avx2",
            Self::Avx512 => "avx512",
            Self::Neon => "neon",
        }
    }

    /// Whether this backend is compiled in and the running CPU can execute it
    pub fn is_supported(self) -> bool {
        self.is_compiled() && self.cpu_has_isa()
    }

    /// Whether this build contains code for the backend
    pub const fn is_compiled(self) -> bool {
        match self {
            Self::Scalar => true,
            Self::Sse41 | Self::Avx2 => cfg!(lanescan_simd_x86),
            Self::Avx512 => cfg!(lanescan_avx512),
            Self::Neon => cfg!(lanescan_simd_neon),
        }
    }

    fn cpu_has_isa(self) -> bool {
        let features = get_cpu_features();
        match self {
            Self::Scalar => true,
            Self::Sse41 => features.has_sse41,
            Self::Avx2 => features.has_avx2,
            Self::Avx512 => features.has_avx512_search(),
            Self::Neon => features.has_neon,
        }
    }

    /// The widest supported backend, ignoring any configuration
    pub fn detect() -> Backend {
        Self::PREFERENCE
            .into_iter()
            .find(|backend| backend.is_supported())
            .unwrap_or(Backend::Scalar)
    }

    /// Every backend usable on this machine, widest first, ending with `Scalar`
    pub fn available() -> Vec<Backend> {
        Self::PREFERENCE
            .into_iter()
            .filter(|backend| backend.is_supported())
            .chain(std::iter::once(Backend::Scalar))
            .collect()
    }

    /// `Ok(self)` when supported, `NotSupported` otherwise
    pub fn ensure_supported(self) -> Result<Backend> {
        if !self.is_compiled() {
            return Err(ScanError::not_supported(format!(
                "{} backend is not compiled into this build",
                self.name()
            )));
        }
        if !self.cpu_has_isa() {
            return Err(ScanError::not_supported(format!(
                "{} backend needs instructions this CPU lacks",
                self.name()
            )));
        }
        Ok(self)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width() {
            Some(width) => write!(f, "{} ({}-bit)", self.name(), width.bits()),
            None => f.write_str(self.name()),
        }
    }
}

impl FromStr for Backend {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" => Ok(Self::Scalar),
            "sse4.1" | "sse41" => Ok(Self::Sse41),
            "avx2" => Ok(Self::Avx2),
            "avx512" | "avx-512" => Ok(Self::Avx512),
            "neon" => Ok(Self::Neon),
            other => Err(ScanError::configuration(format!("unknown backend {:?}", other))),
        }
    }
}
