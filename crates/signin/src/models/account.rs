//! Account models for the account-switch confirmation flow

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// A request to switch the signed-in (syncing) account
///
/// Immutable input to the confirmation flow. `new_account` is the account
/// the user is switching to and must be non-empty; `old_account` is the
/// previously syncing account, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSwitchRequest {
    /// Previously syncing account email (None if there was none)
    pub old_account: Option<String>,
    /// Account email the user is switching to
    pub new_account: String,
}

impl AccountSwitchRequest {
    /// Create a new switch request
    ///
    /// Returns an error if `new_account` is empty; an empty `old_account`
    /// is normalized to None.
    pub fn new(old_account: Option<String>, new_account: impl Into<String>) -> Result<Self> {
        let new_account = new_account.into();
        ensure!(!new_account.is_empty(), "new account must be non-empty");
        Ok(Self {
            old_account: old_account.filter(|a| !a.is_empty()),
            new_account,
        })
    }

    /// Whether the import-data dialog can be skipped entirely
    ///
    /// True when there is no prior account or when the user re-selected the
    /// account that was already syncing.
    pub fn same_or_no_old_account(&self) -> bool {
        match &self.old_account {
            Some(old) => old == &self.new_account,
            None => true,
        }
    }
}

/// Outcome of the asynchronous managed-account lookup
///
/// Starts as `Unknown` and resolves at most once per flow run; the flow
/// ignores duplicate resolutions after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ManagementStatus {
    /// Lookup still in flight
    #[default]
    Unknown,
    /// Account is subject to enterprise policy
    Managed,
    /// Account is not managed
    NotManaged,
}

impl ManagementStatus {
    /// Whether the lookup has completed
    pub fn is_resolved(self) -> bool {
        self != Self::Unknown
    }

    /// Whether the account is known to be managed
    pub fn is_managed(self) -> bool {
        self == Self::Managed
    }
}

impl From<bool> for ManagementStatus {
    fn from(managed: bool) -> Self {
        if managed { Self::Managed } else { Self::NotManaged }
    }
}

/// Extract the domain portion of an account email for display
///
/// Used as the title of the managed-account dialog ("managed by example.com").
/// Returns the full input when it contains no '@'.
pub fn extract_domain_name(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => domain.to_string(),
        _ => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_request_requires_new_account() {
        assert!(AccountSwitchRequest::new(None, "").is_err());
        assert!(AccountSwitchRequest::new(None, "new@example.com").is_ok());
    }

    #[test]
    fn test_switch_request_normalizes_empty_old_account() {
        let request =
            AccountSwitchRequest::new(Some(String::new()), "new@example.com").unwrap();
        assert_eq!(request.old_account, None);
        assert!(request.same_or_no_old_account());
    }

    #[test]
    fn test_same_or_no_old_account() {
        let same = AccountSwitchRequest::new(
            Some("user@example.com".to_string()),
            "user@example.com",
        )
        .unwrap();
        assert!(same.same_or_no_old_account());

        let different = AccountSwitchRequest::new(
            Some("old@example.com".to_string()),
            "new@example.com",
        )
        .unwrap();
        assert!(!different.same_or_no_old_account());
    }

    #[test]
    fn test_management_status_resolution() {
        assert!(!ManagementStatus::Unknown.is_resolved());
        assert!(ManagementStatus::Managed.is_resolved());
        assert!(ManagementStatus::NotManaged.is_resolved());
        assert!(ManagementStatus::from(true).is_managed());
        assert!(!ManagementStatus::from(false).is_managed());
    }

    #[test]
    fn test_extract_domain_name() {
        assert_eq!(extract_domain_name("user@corp.example.com"), "corp.example.com");
        assert_eq!(extract_domain_name("no-at-sign"), "no-at-sign");
        assert_eq!(extract_domain_name("trailing@"), "trailing@");
    }
}
