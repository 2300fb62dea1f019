//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifelog_core` linkage.
//! - Keep output deterministic enough for quick local sanity checks.

fn main() {
    println!("lifelog_core version={}", lifelog_core::core_version());
    println!("lifelog_core today={}", lifelog_core::today());
}
