//! UniFFI bindings crate for the signin library
//!
//! This crate wraps the signin crate for UniFFI library mode binding
//! generation. It re-exports the FFI module and UniFFI scaffolding from the
//! signin crate.
//!
//! ## Building for Android
//!
//! 1. Build the library for Android targets:
//!    ```bash
//!    cargo build --release -p signin-ffi --target aarch64-linux-android
//!    ```
//!
//! 2. Generate Kotlin bindings:
//!    ```bash
//!    cargo run -p signin-ffi --features bindgen --bin uniffi-bindgen generate \
//!        --library target/aarch64-linux-android/release/libsignin_ffi.so \
//!        --language kotlin \
//!        --out-dir generated/kotlin
//!    ```
//!
//! Swift builds work the same way with the Apple targets and
//! `--language swift`.

// Re-export everything from the signin crate's FFI module
pub use signin::ffi::*;

// Re-export the uniffi scaffolding from the signin crate
// This is needed for library mode to work correctly
signin::uniffi_reexport_scaffolding!();
