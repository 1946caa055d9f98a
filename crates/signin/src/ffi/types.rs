//! FFI-friendly type wrappers for UniFFI export
//!
//! These types convert internal Rust types to FFI-compatible versions and
//! declare the callback interfaces the host implements: dialog presentation,
//! timer scheduling, the managed-account lookup, and logging.

use crate::flow::FlowState;
use crate::models::Credential;

// ============================================================================
// Error Types
// ============================================================================

/// FFI-friendly error type
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SigninError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Config error: {message}")]
    Config { message: String },
}

impl From<anyhow::Error> for SigninError {
    fn from(e: anyhow::Error) -> Self {
        SigninError::InvalidArgument {
            message: e.to_string(),
        }
    }
}

// ============================================================================
// Credential Types
// ============================================================================

/// FFI-friendly credential representation
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCredential {
    pub username: String,
    pub password: String,
    pub formatted_username: String,
    pub origin_url: String,
    pub is_android_credential: bool,
    pub app_display_name: String,
    pub is_plus_address_username: bool,
}

impl From<Credential> for FfiCredential {
    fn from(c: Credential) -> Self {
        Self {
            username: c.username,
            password: c.password,
            formatted_username: c.formatted_username,
            origin_url: c.origin_url,
            is_android_credential: c.is_android_credential,
            app_display_name: c.app_display_name,
            is_plus_address_username: c.is_plus_address_username,
        }
    }
}

impl From<FfiCredential> for Credential {
    fn from(c: FfiCredential) -> Self {
        Self {
            username: c.username,
            password: c.password,
            formatted_username: c.formatted_username,
            origin_url: c.origin_url,
            is_android_credential: c.is_android_credential,
            app_display_name: c.app_display_name,
            is_plus_address_username: c.is_plus_address_username,
        }
    }
}

// ============================================================================
// Flow Types
// ============================================================================

/// FFI-friendly flow stage
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiFlowState {
    BeforeOldAccountDialog,
    BeforeNewAccountDialog,
    AfterNewAccountDialog,
    Done,
}

impl From<FlowState> for FfiFlowState {
    fn from(state: FlowState) -> Self {
        match state {
            FlowState::BeforeOldAccountDialog => FfiFlowState::BeforeOldAccountDialog,
            FlowState::BeforeNewAccountDialog => FfiFlowState::BeforeNewAccountDialog,
            FlowState::AfterNewAccountDialog => FfiFlowState::AfterNewAccountDialog,
            FlowState::Done => FfiFlowState::Done,
        }
    }
}

// ============================================================================
// Callback Traits
// ============================================================================

/// Callback interface for dialog and scheduling primitives
///
/// Implemented by the host UI. Each show call replaces whatever dialog was
/// previously visible; the flow always issues `dismiss_all_dialogs` first.
#[uniffi::export(callback_interface)]
pub trait ConfirmationDelegate: Send + Sync {
    /// Show the import-data dialog for a switch from `old_account` to
    /// `new_account`; report the choice via `import_data_chosen` or
    /// `dialog_cancelled`
    fn show_import_data_dialog(&self, old_account: String, new_account: String);
    /// Show the managed-account dialog; report via
    /// `managed_account_confirmed` or `dialog_cancelled`
    fn show_managed_account_dialog(&self, domain: String);
    /// Show the indeterminate progress dialog; report `dialog_cancelled` if
    /// the user backs out
    fn show_progress_dialog(&self);
    /// Show the timeout dialog; report `retry_requested` or
    /// `dialog_cancelled`
    fn show_timeout_dialog(&self);
    /// Dismiss any dialog the delegate is currently showing
    fn dismiss_all_dialogs(&self);
    /// Start the asynchronous managed-account lookup for `email`; deliver
    /// the result via `management_status_resolved`
    fn start_management_lookup(&self, email: String);
    /// Arm a one-shot timer; report expiry via `timer_fired(generation)`
    fn start_timer(&self, delay_ms: u64, generation: u32);
    /// Disarm the pending timer, if any
    fn cancel_timer(&self);
}

/// Callback interface for the terminal flow outcome
#[uniffi::export(callback_interface)]
pub trait ConfirmationListener: Send + Sync {
    /// The switch was confirmed after all applicable dialogs
    fn on_confirm(&self, wipe_data: bool, account_is_managed: bool);
    /// The flow was cancelled by the user
    fn on_cancel(&self);
}

// ============================================================================
// Log Callback
// ============================================================================

/// Log level for FFI callback
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<log::Level> for FfiLogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => FfiLogLevel::Error,
            log::Level::Warn => FfiLogLevel::Warn,
            log::Level::Info => FfiLogLevel::Info,
            log::Level::Debug => FfiLogLevel::Debug,
            log::Level::Trace => FfiLogLevel::Trace,
        }
    }
}

impl From<FfiLogLevel> for log::Level {
    fn from(level: FfiLogLevel) -> Self {
        match level {
            FfiLogLevel::Error => log::Level::Error,
            FfiLogLevel::Warn => log::Level::Warn,
            FfiLogLevel::Info => log::Level::Info,
            FfiLogLevel::Debug => log::Level::Debug,
            FfiLogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Callback interface for receiving log messages from Rust
///
/// Swift should implement this with os_log/Logger; Kotlin with android.util.Log.
#[uniffi::export(callback_interface)]
pub trait LogCallback: Send + Sync {
    /// Called when a log message is emitted
    ///
    /// # Arguments
    /// * `level` - The log level (error, warn, info, debug, trace)
    /// * `target` - The logging target (typically module path, e.g., "signin::flow")
    /// * `message` - The log message
    fn on_log(&self, level: FfiLogLevel, target: String, message: String);
}
