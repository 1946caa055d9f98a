//! FFI bindings for UniFFI export
//!
//! This module provides Swift/Kotlin bindings for the signin crate via UniFFI.
//!
//! ## Usage from Kotlin
//!
//! ```kotlin
//! import uniffi.signin.*
//!
//! // Initialize logging first
//! initializeLogging(callback = myLogCallback, maxLevel = FfiLogLevel.INFO)
//!
//! // Drive an account-switch confirmation
//! val handle = ConfirmationFlowHandle(
//!     oldAccount = "old@example.com",
//!     newAccount = "new@example.com",
//!     delegate = dialogDelegate,
//!     listener = outcomeListener,
//! )
//! handle.start()
//! // ...forward dialog results, lookup resolution, and timer expiry:
//! handle.importDataChosen(wipeData = false)
//! handle.managementStatusResolved(managed = true)
//!
//! // Filter credentials for the all-passwords sheet
//! val sorted = sortCredentialsForDisplay(credentials)
//! val shown = buildCredentialDisplayList(sorted, query, isPasswordField)
//! ```

mod logging;
mod service;
mod types;

// Re-export all FFI types, the flow handle, and the filter facade
pub use logging::{clear_log_callback, initialize_logging, set_log_level};
pub use service::*;
pub use types::*;
