//! Build script for the FM beacon
//!
//! Handles:
//! - Memory layout configuration
//! - defmt linker script for the embedded binary

fn main() {
    // Tell Cargo to re-run this if the linker script changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Link memory.x from project directory
    println!("cargo:rustc-link-search={}", std::env::var("CARGO_MANIFEST_DIR").unwrap());

    // Only the target binary links against defmt; host test builds must not
    if std::env::var("CARGO_FEATURE_EMBEDDED").is_ok() {
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
