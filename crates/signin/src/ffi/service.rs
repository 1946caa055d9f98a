//! Flow handle and filter facade for UniFFI export
//!
//! Wraps the pure confirmation flow behind an object the host drives: UI
//! results and async callbacks come in as method calls, and the resulting
//! commands are executed against the host's delegate and listener.

use std::sync::{Arc, Mutex};

use log::warn;

use crate::config::FlowSettings;
use crate::ffi::types::*;
use crate::flow::{Command, ConfirmationFlow, Event};
use crate::models::{AccountSwitchRequest, extract_domain_name};

/// Host-facing handle for one account-switch confirmation run
///
/// Construct it when the user picks a new account, call [`start`], then
/// forward dialog results, the lookup resolution, and timer expiry. The
/// delegate and listener are called back on whichever thread invokes the
/// handle; hosts keep all calls on their UI thread.
///
/// [`start`]: ConfirmationFlowHandle::start
#[derive(uniffi::Object)]
pub struct ConfirmationFlowHandle {
    flow: Mutex<ConfirmationFlow>,
    delegate: Box<dyn ConfirmationDelegate>,
    listener: Box<dyn ConfirmationListener>,
}

#[uniffi::export]
impl ConfirmationFlowHandle {
    /// Create a handle for a switch from `old_account` to `new_account`
    ///
    /// Flow tuning is read from the shared config directory; a missing
    /// settings file falls back to defaults.
    ///
    /// # Arguments
    /// * `old_account` - Previously syncing account email, if any
    /// * `new_account` - Account being switched to (must be non-empty)
    /// * `delegate` - Host dialog/timer/lookup primitives
    /// * `listener` - Receiver of the terminal outcome
    #[uniffi::constructor]
    pub fn new(
        old_account: Option<String>,
        new_account: String,
        delegate: Box<dyn ConfirmationDelegate>,
        listener: Box<dyn ConfirmationListener>,
    ) -> Result<Arc<Self>, SigninError> {
        let request = AccountSwitchRequest::new(old_account, new_account)?;
        let settings = FlowSettings::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable flow settings: {}", e);
            FlowSettings::default()
        });
        Ok(Arc::new(Self {
            flow: Mutex::new(ConfirmationFlow::with_settings(request, settings)),
            delegate,
            listener,
        }))
    }

    /// Begin the flow; call exactly once after construction
    pub fn start(&self) {
        self.drive(|flow| flow.start());
    }

    /// The user confirmed the import-data dialog
    pub fn import_data_chosen(&self, wipe_data: bool) {
        self.drive(|flow| flow.handle(Event::ImportDataChosen { wipe_data }));
    }

    /// The user acknowledged the managed-account dialog
    pub fn managed_account_confirmed(&self) {
        self.drive(|flow| flow.handle(Event::ManagedAccountConfirmed));
    }

    /// The user cancelled whichever dialog is showing
    pub fn dialog_cancelled(&self) {
        self.drive(|flow| flow.handle(Event::DialogCancelled));
    }

    /// The managed-account lookup completed
    pub fn management_status_resolved(&self, managed: bool) {
        self.drive(|flow| flow.handle(Event::ManagementResolved { managed }));
    }

    /// The timer armed via `start_timer` expired
    pub fn timer_fired(&self, generation: u32) {
        self.drive(|flow| flow.handle(Event::TimerFired { generation }));
    }

    /// The user chose retry in the timeout dialog
    pub fn retry_requested(&self) {
        self.drive(|flow| flow.handle(Event::RetryRequested));
    }

    /// Cancel the flow; pass `is_being_destroyed` when the owning UI is
    /// tearing down so `on_cancel` is suppressed
    pub fn cancel(&self, is_being_destroyed: bool) {
        self.drive(|flow| flow.cancel(is_being_destroyed));
    }

    /// Current stage of the flow
    pub fn state(&self) -> FfiFlowState {
        match self.flow.lock() {
            Ok(flow) => FfiFlowState::from(flow.state()),
            Err(_) => FfiFlowState::Done,
        }
    }
}

impl ConfirmationFlowHandle {
    /// Run a flow operation and execute the commands it returns
    ///
    /// The flow lock is released before any callback fires, so a delegate
    /// that re-enters the handle synchronously does not deadlock.
    fn drive<F: FnOnce(&mut ConfirmationFlow) -> Vec<Command>>(&self, operation: F) {
        let commands = match self.flow.lock() {
            Ok(mut flow) => operation(&mut flow),
            Err(_) => {
                warn!("Confirmation flow lock poisoned; dropping event");
                return;
            }
        };
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        match command {
            Command::StartManagementLookup { email } => {
                self.delegate.start_management_lookup(email)
            }
            Command::DismissAllDialogs => self.delegate.dismiss_all_dialogs(),
            Command::ShowImportDataDialog {
                old_account,
                new_account,
            } => self
                .delegate
                .show_import_data_dialog(old_account, new_account),
            Command::ShowProgressDialog => self.delegate.show_progress_dialog(),
            Command::ShowTimeoutDialog => self.delegate.show_timeout_dialog(),
            Command::ShowManagedAccountDialog { domain } => {
                self.delegate.show_managed_account_dialog(domain)
            }
            Command::StartTimer {
                delay_ms,
                generation,
            } => self.delegate.start_timer(delay_ms, generation),
            Command::CancelTimer => self.delegate.cancel_timer(),
            Command::Confirm {
                wipe_data,
                account_is_managed,
            } => self.listener.on_confirm(wipe_data, account_is_managed),
            Command::Cancel => self.listener.on_cancel(),
        }
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Sort credentials by display origin for presentation
#[uniffi::export]
pub fn sort_credentials_for_display(credentials: Vec<FfiCredential>) -> Vec<FfiCredential> {
    let mut credentials: Vec<crate::models::Credential> =
        credentials.into_iter().map(Into::into).collect();
    crate::filter::sort_for_display(&mut credentials);
    credentials.into_iter().map(FfiCredential::from).collect()
}

/// Filter a sorted credential batch for the current search query
///
/// Re-invoke on every keystroke; passing the previous output is not
/// required since filtering is pure.
#[uniffi::export]
pub fn build_credential_display_list(
    credentials: Vec<FfiCredential>,
    query: Option<String>,
    is_password_field: bool,
) -> Vec<FfiCredential> {
    let credentials: Vec<crate::models::Credential> =
        credentials.into_iter().map(Into::into).collect();
    crate::filter::build_display_list(&credentials, query.as_deref(), is_password_field)
        .into_iter()
        .map(FfiCredential::from)
        .collect()
}

/// Get the domain portion of an account email for dialog titles
#[uniffi::export]
pub fn get_account_domain(email: String) -> String {
    extract_domain_name(&email)
}
