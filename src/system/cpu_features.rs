//! # CPU Feature Detection
//!
//! Runtime detection of the instruction sets the search backends need.
//! Detection runs once per process and the result is cached.

use std::fmt;
use std::sync::OnceLock;

/// Instruction set support relevant to vectorized search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuFeatures {
    /// SSE4.1 (128-bit backend, needs `pcmpeqq`)
    pub has_sse41: bool,
    /// AVX2 (256-bit backend)
    pub has_avx2: bool,
    /// AVX-512 Foundation
    pub has_avx512f: bool,
    /// AVX-512 Byte and Word (byte lane compares on 512-bit registers)
    pub has_avx512bw: bool,
    /// ARM NEON / Advanced SIMD (128-bit backend on AArch64)
    pub has_neon: bool,
    /// CPU vendor (GenuineIntel, AuthenticAMD, ARM, ...)
    pub vendor: String,
    /// CPU brand string when the processor reports one
    pub brand: String,
}

impl CpuFeatures {
    /// Probe the running CPU
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut features = Self::baseline();

        #[cfg(target_arch = "x86_64")]
        {
            features.has_sse41 = is_x86_feature_detected!("sse4.1");
            features.has_avx2 = is_x86_feature_detected!("avx2");
            features.has_avx512f = is_x86_feature_detected!("avx512f");
            features.has_avx512bw = is_x86_feature_detected!("avx512bw");

            let cpuid = raw_cpuid::CpuId::new();
            if let Some(vendor) = cpuid.get_vendor_info() {
                features.vendor = vendor.as_str().to_string();
            }
            if let Some(brand) = cpuid.get_processor_brand_string() {
                features.brand = brand.as_str().trim().to_string();
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            features.has_neon = std::arch::is_aarch64_feature_detected!("neon");
            features.vendor = "ARM".to_string();
        }

        features
    }

    /// A feature set with every instruction set turned off
    pub fn baseline() -> Self {
        Self {
            has_sse41: false,
            has_avx2: false,
            has_avx512f: false,
            has_avx512bw: false,
            has_neon: false,
            vendor: "unknown".to_string(),
            brand: String::new(),
        }
    }

    /// Both AVX-512 subsets the 512-bit backend relies on
    pub fn has_avx512_search(&self) -> bool {
        self.has_avx512f && self.has_avx512bw
    }
}

impl fmt::Display for CpuFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut isa = Vec::new();
        if self.has_sse41 {
            isa.push("sse4.1");
        }
        if self.has_avx2 {
            isa.push("avx2");
        }
        if self.has_avx512_search() {
            isa.push("avx512bw");
        }
        if self.has_neon {
            isa.push("neon");
        }
        if isa.is_empty() {
            isa.push("none");
        }

        write!(f, "{}", self.vendor)?;
        if !self.brand.is_empty() {
            write!(f, " ({})", self.brand)?;
        }
        write!(f, " [{}]", isa.join(", "))
    }
}

static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// Get the global CPU feature set (detected once on first call)
pub fn get_cpu_features() -> &'static CpuFeatures {
    CPU_FEATURES.get_or_init(CpuFeatures::detect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_feature_detection() {
        let features = get_cpu_features();
        assert!(!features.vendor.is_empty());

        // AVX2 implies SSE4.1 on every shipping x86_64 part
        if features.has_avx2 {
            assert!(features.has_sse41);
        }

        println!("CPU: {}", features);
    }

    #[test]
    fn test_detection_is_cached() {
        let a = get_cpu_features() as *const CpuFeatures;
        let b = get_cpu_features() as *const CpuFeatures;
        assert_eq!(a, b);
    }

    #[test]
    fn test_baseline_display() {
        let features = CpuFeatures::baseline();
        assert!(!features.has_avx512_search());
        assert_eq!(features.to_string(), "unknown [none]");
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_neon_on_aarch64() {
        assert!(get_cpu_features().has_neon);
    }
}
