//! Timing helpers for the managed-account lookup
//!
//! Pure functions that can be tested without a host timer.

use chrono::{DateTime, Utc};

/// How long the progress dialog waits on the lookup before the timeout
/// dialog replaces it.
pub const MANAGEMENT_LOOKUP_TIMEOUT_MS: u64 = 30_000;

/// Check whether an armed lookup has outlived its timeout.
///
/// Useful for hosts whose timers can be delayed past their deadline (app
/// backgrounding): on resume they can compare wall-clock time instead of
/// trusting the timer to have fired.
///
/// # Arguments
/// * `armed_at` - When the timer was armed (None if no lookup is pending)
/// * `timeout_ms` - The armed timeout duration
pub fn lookup_timed_out(armed_at: Option<DateTime<Utc>>, timeout_ms: u64) -> bool {
    match armed_at {
        Some(armed) => {
            let elapsed = Utc::now() - armed;
            elapsed.num_milliseconds() >= timeout_ms as i64
        }
        None => false,
    }
}
