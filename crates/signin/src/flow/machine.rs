//! The confirmation flow state machine
//!
//! Drives the import-data dialog, the managed-account lookup (with progress
//! dialog, timeout, and user-mediated retry), and the managed-account dialog,
//! then reports a single terminal outcome.
//!
//! All mutation happens on one logical thread: the host delivers dialog
//! results, the lookup resolution, and timer expiry as [`Event`]s, and
//! executes the returned [`Command`]s in order.

use log::{debug, info, warn};

use super::state::{Command, Event, FlowState};
use crate::config::FlowSettings;
use crate::models::{AccountSwitchRequest, ManagementStatus, extract_domain_name};

/// Terminal outcome of a finished flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The switch was confirmed
    Confirmed {
        wipe_data: bool,
        account_is_managed: bool,
    },
    /// The flow was cancelled (by the user or by the owner tearing down)
    Cancelled,
}

/// Sequencer for the account-switch confirmation dialogs
///
/// Construct with a validated [`AccountSwitchRequest`], call [`start`], then
/// feed host events through [`handle`] until the flow emits
/// [`Command::Confirm`] or [`Command::Cancel`].
///
/// [`start`]: ConfirmationFlow::start
/// [`handle`]: ConfirmationFlow::handle
#[derive(Debug)]
pub struct ConfirmationFlow {
    request: AccountSwitchRequest,
    settings: FlowSettings,
    state: FlowState,
    management_status: ManagementStatus,
    wipe_data: bool,
    managed_acknowledged: bool,
    /// True while the flow sits in the progress/timeout sub-flow waiting on
    /// the lookup
    awaiting_lookup: bool,
    /// True while a timer is armed; cleared when it fires or is cancelled
    timer_armed: bool,
    /// Bumped on every retry so a stale expiry can be told apart
    timer_generation: u32,
    retries_used: u32,
    started: bool,
    outcome: Option<FlowOutcome>,
}

impl ConfirmationFlow {
    /// Create a flow with default settings (30 s timeout, unbounded retries)
    pub fn new(request: AccountSwitchRequest) -> Self {
        Self::with_settings(request, FlowSettings::default())
    }

    /// Create a flow with explicit tuning
    pub fn with_settings(request: AccountSwitchRequest, settings: FlowSettings) -> Self {
        Self {
            request,
            settings,
            state: FlowState::default(),
            management_status: ManagementStatus::Unknown,
            wipe_data: false,
            managed_acknowledged: false,
            awaiting_lookup: false,
            timer_armed: false,
            timer_generation: 0,
            retries_used: 0,
            started: false,
            outcome: None,
        }
    }

    /// Current stage of the flow
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The terminal outcome, once the flow has finished
    pub fn outcome(&self) -> Option<FlowOutcome> {
        self.outcome
    }

    /// Begin the flow
    ///
    /// Kicks off the managed-account lookup and steps past the import-data
    /// stage when it does not apply. Must be called exactly once.
    pub fn start(&mut self) -> Vec<Command> {
        assert!(!self.started, "confirmation flow started twice");
        self.started = true;

        info!(
            "Starting account switch confirmation: {:?} -> {}",
            self.request.old_account, self.request.new_account
        );

        let mut commands = vec![Command::StartManagementLookup {
            email: self.request.new_account.clone(),
        }];

        if self.request.same_or_no_old_account() {
            // Fast path: nothing to import, no dialog for the old account.
            commands.extend(self.enter_new_account_stage());
        } else {
            commands.push(Command::DismissAllDialogs);
            commands.push(Command::ShowImportDataDialog {
                old_account: self
                    .request
                    .old_account
                    .clone()
                    .unwrap_or_default(),
                new_account: self.request.new_account.clone(),
            });
        }
        commands
    }

    /// Feed a host event into the flow
    ///
    /// Asynchronous events (`ManagementResolved`, `TimerFired`,
    /// `DialogCancelled`) arriving after the flow finished are ignored;
    /// user-progression events after `Done` indicate a host bug and panic.
    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        debug!("Flow event in state {:?}: {:?}", self.state, event);
        match event {
            Event::ManagementResolved { managed } => self.on_management_resolved(managed),
            Event::TimerFired { generation } => self.on_timer_fired(generation),
            Event::DialogCancelled => self.cancel(false),
            Event::ImportDataChosen { wipe_data } => self.on_import_data_chosen(wipe_data),
            Event::ManagedAccountConfirmed => self.on_managed_account_confirmed(),
            Event::RetryRequested => self.on_retry_requested(),
        }
    }

    /// Cancel the flow from any state
    ///
    /// Idempotent. Disarms the timer, dismisses any open dialog, and moves to
    /// `Done`. `Command::Cancel` is emitted unless the owning UI is being
    /// torn down.
    pub fn cancel(&mut self, is_being_destroyed: bool) -> Vec<Command> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        info!("Cancelling account switch confirmation");

        let mut commands = Vec::new();
        if self.timer_armed {
            self.timer_armed = false;
            commands.push(Command::CancelTimer);
        }
        commands.push(Command::DismissAllDialogs);

        self.state = FlowState::Done;
        self.outcome = Some(FlowOutcome::Cancelled);
        if !is_being_destroyed {
            commands.push(Command::Cancel);
        }
        commands
    }

    fn on_management_resolved(&mut self, managed: bool) -> Vec<Command> {
        if self.management_status.is_resolved() {
            // Resolves at most once per run; later invocations are stale.
            debug!("Ignoring duplicate management resolution");
            return Vec::new();
        }
        if self.state.is_terminal() {
            debug!("Ignoring management resolution after flow completion");
            return Vec::new();
        }
        self.management_status = ManagementStatus::from(managed);
        info!(
            "Management lookup resolved: {} is {}",
            self.request.new_account,
            if managed { "managed" } else { "not managed" }
        );

        if self.state == FlowState::BeforeNewAccountDialog && self.awaiting_lookup {
            self.awaiting_lookup = false;
            let mut commands = Vec::new();
            if self.timer_armed {
                self.timer_armed = false;
                commands.push(Command::CancelTimer);
            }
            commands.extend(self.resolve_management_stage());
            return commands;
        }
        // Resolved ahead of the stage that needs it; the value is recorded
        // and the progress dialog will never show.
        Vec::new()
    }

    fn on_timer_fired(&mut self, generation: u32) -> Vec<Command> {
        if self.state != FlowState::BeforeNewAccountDialog
            || !self.awaiting_lookup
            || !self.timer_armed
            || generation != self.timer_generation
        {
            debug!("Ignoring stale timer expiry (generation {})", generation);
            return Vec::new();
        }
        self.timer_armed = false;
        warn!(
            "Management lookup for {} timed out after {} ms",
            self.request.new_account, self.settings.management_lookup_timeout_ms
        );
        vec![Command::DismissAllDialogs, Command::ShowTimeoutDialog]
    }

    fn on_import_data_chosen(&mut self, wipe_data: bool) -> Vec<Command> {
        assert_eq!(
            self.state,
            FlowState::BeforeOldAccountDialog,
            "import-data choice delivered out of sequence"
        );
        self.wipe_data = wipe_data;
        self.enter_new_account_stage()
    }

    fn on_managed_account_confirmed(&mut self) -> Vec<Command> {
        assert_eq!(
            self.state,
            FlowState::BeforeNewAccountDialog,
            "managed-account confirmation delivered out of sequence"
        );
        self.managed_acknowledged = true;
        self.finish()
    }

    fn on_retry_requested(&mut self) -> Vec<Command> {
        assert_eq!(
            self.state,
            FlowState::BeforeNewAccountDialog,
            "retry requested out of sequence"
        );
        if let Some(max) = self.settings.max_lookup_retries
            && self.retries_used >= max
        {
            warn!("Management lookup retry limit ({}) reached, cancelling", max);
            return self.cancel(false);
        }
        self.retries_used += 1;
        self.timer_generation += 1;
        self.timer_armed = true;
        info!(
            "Retrying management lookup for {} (attempt {})",
            self.request.new_account,
            self.retries_used + 1
        );
        vec![
            Command::StartManagementLookup {
                email: self.request.new_account.clone(),
            },
            Command::DismissAllDialogs,
            Command::ShowProgressDialog,
            Command::StartTimer {
                delay_ms: self.settings.management_lookup_timeout_ms,
                generation: self.timer_generation,
            },
        ]
    }

    /// Enter `BeforeNewAccountDialog`: branch on the lookup if it already
    /// resolved, otherwise show progress and arm the timeout.
    fn enter_new_account_stage(&mut self) -> Vec<Command> {
        self.state = FlowState::BeforeNewAccountDialog;
        if self.management_status.is_resolved() {
            return self.resolve_management_stage();
        }
        self.awaiting_lookup = true;
        self.timer_armed = true;
        vec![
            Command::DismissAllDialogs,
            Command::ShowProgressDialog,
            Command::StartTimer {
                delay_ms: self.settings.management_lookup_timeout_ms,
                generation: self.timer_generation,
            },
        ]
    }

    /// Branch on the resolved lookup: show the managed-account dialog when
    /// needed, otherwise complete.
    fn resolve_management_stage(&mut self) -> Vec<Command> {
        if self.management_status.is_managed() && !self.managed_acknowledged {
            return vec![
                Command::DismissAllDialogs,
                Command::ShowManagedAccountDialog {
                    domain: extract_domain_name(&self.request.new_account),
                },
            ];
        }
        self.finish()
    }

    fn finish(&mut self) -> Vec<Command> {
        let account_is_managed = self.management_status.is_managed();
        info!(
            "Account switch confirmed: wipe_data={}, managed={}",
            self.wipe_data, account_is_managed
        );
        self.state = FlowState::Done;
        self.outcome = Some(FlowOutcome::Confirmed {
            wipe_data: self.wipe_data,
            account_is_managed,
        });
        vec![
            Command::DismissAllDialogs,
            Command::Confirm {
                wipe_data: self.wipe_data,
                account_is_managed,
            },
        ]
    }
}
