//! System utilities: runtime CPU capability detection.

pub mod cpu_features;

pub use cpu_features::{get_cpu_features, CpuFeatures};
