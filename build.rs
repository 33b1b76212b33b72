//! Build-time configuration for the vectorized search backends.
//!
//! - Emits `lanescan_simd_x86` / `lanescan_simd_neon` when the `simd` feature is on
//!   and the target architecture has a backend
//! - Emits `lanescan_avx512` when the `avx512` feature is on for x86_64
//! - Captures `LANESCAN_BUILD_WIDTH` as a build-time backend pin
//!   (`128`, `256`, `512` or `scalar`), exposed to the crate as
//!   `LANESCAN_BUILD_BACKEND`

use std::env;

const CFGS: &[&str] = &["lanescan_simd_x86", "lanescan_simd_neon", "lanescan_avx512", "lanescan_scalar_only"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LANESCAN_BUILD_WIDTH");

    for cfg in CFGS {
        println!("cargo:rustc-check-cfg=cfg({})", cfg);
    }

    configure_backends();
    configure_build_pin();
}

/// Decide which vector backends are compiled in for the target architecture.
fn configure_backends() {
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let simd = env::var_os("CARGO_FEATURE_SIMD").is_some();
    let avx512 = env::var_os("CARGO_FEATURE_AVX512").is_some();

    if !simd {
        println!("cargo:rustc-cfg=lanescan_scalar_only");
        return;
    }

    match target_arch.as_str() {
        "x86_64" => {
            println!("cargo:rustc-cfg=lanescan_simd_x86");
            if avx512 {
                println!("cargo:rustc-cfg=lanescan_avx512");
            }
        }
        "aarch64" => {
            println!("cargo:rustc-cfg=lanescan_simd_neon");
            if avx512 {
                println!("cargo:warning=feature `avx512` has no effect on aarch64");
            }
        }
        _ => {
            println!(
                "cargo:warning=SIMD search not available for target architecture: {}",
                target_arch
            );
            println!("cargo:rustc-cfg=lanescan_scalar_only");
        }
    }
}

/// Forward a validated build-time backend pin to the crate.
fn configure_build_pin() {
    let Ok(raw) = env::var("LANESCAN_BUILD_WIDTH") else {
        return;
    };

    let value = raw.trim().to_ascii_lowercase();
    match value.as_str() {
        "" | "auto" => {}
        "128" | "256" | "512" | "scalar" => {
            println!("cargo:rustc-env=LANESCAN_BUILD_BACKEND={}", value);
        }
        other => {
            println!(
                "cargo:warning=ignoring LANESCAN_BUILD_WIDTH={:?}, expected 128, 256, 512 or scalar",
                other
            );
        }
    }
}
