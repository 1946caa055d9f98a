//! State, event, and command types for the confirmation flow

/// Stage of the confirmation flow
///
/// Transitions are monotonic; the only jump allowed is cancellation, which
/// moves any state directly to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Import-data dialog not yet passed
    #[default]
    BeforeOldAccountDialog,
    /// Waiting on the managed-account lookup and, if needed, its dialog
    BeforeNewAccountDialog,
    /// All dialogs passed; outcome about to be reported
    AfterNewAccountDialog,
    /// Flow finished (confirmed or cancelled)
    Done,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Host-originated events fed into the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User confirmed the import-data dialog, choosing whether to wipe
    ImportDataChosen { wipe_data: bool },
    /// User acknowledged the managed-account dialog
    ManagedAccountConfirmed,
    /// User cancelled whichever dialog is currently showing
    DialogCancelled,
    /// The asynchronous managed-account lookup completed
    ManagementResolved { managed: bool },
    /// The armed lookup timer fired
    TimerFired { generation: u32 },
    /// User chose retry in the timeout dialog
    RetryRequested,
}

/// Side effects for the host to execute, in order
///
/// Every dialog-showing command is preceded by [`Command::DismissAllDialogs`],
/// so the host holds at most one live dialog at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Kick off the asynchronous managed-account lookup for an email
    StartManagementLookup { email: String },
    /// Dismiss any dialog currently showing
    DismissAllDialogs,
    /// Show the import-data dialog for an account switch
    ShowImportDataDialog {
        old_account: String,
        new_account: String,
    },
    /// Show the indeterminate progress dialog
    ShowProgressDialog,
    /// Show the lookup timeout dialog (retry/cancel)
    ShowTimeoutDialog,
    /// Show the managed-account dialog for a domain
    ShowManagedAccountDialog { domain: String },
    /// Arm a one-shot timer; the host reports expiry via `Event::TimerFired`
    StartTimer { delay_ms: u64, generation: u32 },
    /// Disarm the pending timer (a no-op if none is armed)
    CancelTimer,
    /// Terminal success: the switch is confirmed
    Confirm {
        wipe_data: bool,
        account_is_managed: bool,
    },
    /// Terminal cancellation
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_done_is_terminal() {
        assert!(!FlowState::BeforeOldAccountDialog.is_terminal());
        assert!(!FlowState::BeforeNewAccountDialog.is_terminal());
        assert!(!FlowState::AfterNewAccountDialog.is_terminal());
        assert!(FlowState::Done.is_terminal());
    }

    #[test]
    fn test_default_state_is_first_stage() {
        assert_eq!(FlowState::default(), FlowState::BeforeOldAccountDialog);
    }
}
