//! Domain models for sign-in surfaces

mod account;
mod credential;

pub use account::{AccountSwitchRequest, ManagementStatus, extract_domain_name};
pub use credential::{Credential, CredentialBuilder};
