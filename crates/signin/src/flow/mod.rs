//! Account-switch confirmation flow
//!
//! Sequences up to three dialogs (import-data, progress/timeout,
//! managed-account) before confirming an account switch. The core is a pure
//! state machine: operations return a list of [`Command`]s for the host to
//! execute, so the sequencing logic is testable with no UI attached.

mod machine;
mod state;
mod timing;

pub use machine::{ConfirmationFlow, FlowOutcome};
pub use state::{Command, Event, FlowState};
pub use timing::{MANAGEMENT_LOOKUP_TIMEOUT_MS, lookup_timed_out};
