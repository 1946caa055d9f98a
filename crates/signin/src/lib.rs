//! Signin crate - Business logic for account sign-in surfaces
//!
//! This crate provides the platform-independent pieces of a sign-in UI:
//! - Domain models (AccountSwitchRequest, Credential, ManagementStatus)
//! - The account-switch confirmation flow (dialog sequencing state machine)
//! - Credential list sorting and filtering for searchable password sheets
//! - Flow tuning loaded from the shared config directory
//!
//! This crate has zero UI dependencies and is designed to be UniFFI-ready:
//! all dialogs, timers, and the managed-account lookup are host concerns
//! reached through callback interfaces in the `ffi` module.

uniffi::setup_scaffolding!();

pub mod config;
pub mod ffi;
pub mod filter;
pub mod flow;
pub mod models;

pub use config::FlowSettings;
pub use filter::{build_display_list, sort_for_display};
pub use flow::{
    // Flow execution
    Command, ConfirmationFlow, Event, FlowOutcome, FlowState,
    // Timing helpers (for host timer bookkeeping)
    MANAGEMENT_LOOKUP_TIMEOUT_MS, lookup_timed_out,
};
pub use models::{
    AccountSwitchRequest, Credential, CredentialBuilder, ManagementStatus, extract_domain_name,
};
