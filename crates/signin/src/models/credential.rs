//! Credential model for the all-passwords sheet

use serde::{Deserialize, Serialize};
use url::Url;

/// A stored credential as supplied by the password store
///
/// Immutable value created by the host for one sheet presentation and
/// discarded on dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Raw username (may be empty for username-less credentials)
    pub username: String,
    /// Stored password (may be empty)
    pub password: String,
    /// Username as prepared for display by the store
    pub formatted_username: String,
    /// Origin the credential was saved for (URL, or package id for apps)
    pub origin_url: String,
    /// Whether this credential belongs to an Android app rather than a site
    pub is_android_credential: bool,
    /// Human-readable app name (empty for web credentials)
    pub app_display_name: String,
    /// Whether the username is a plus-address alias
    pub is_plus_address_username: bool,
}

impl Credential {
    /// Create a new credential builder
    pub fn builder(
        username: impl Into<String>,
        origin_url: impl Into<String>,
    ) -> CredentialBuilder {
        CredentialBuilder::new(username, origin_url)
    }

    /// The origin key used to order credentials in the sheet
    ///
    /// App credentials sort by their ASCII-lowercased display name; web
    /// credentials sort by the lowercased host of their origin URL, with a
    /// leading "www." stripped so mirror entries group with the bare domain.
    /// Falls back to the lowercased raw origin when it is not a parseable URL.
    pub fn display_origin(&self) -> String {
        if self.is_android_credential {
            return self.app_display_name.to_ascii_lowercase();
        }
        match Url::parse(&self.origin_url).ok().and_then(|url| {
            url.host_str().map(|host| host.to_ascii_lowercase())
        }) {
            Some(host) => host.strip_prefix("www.").unwrap_or(&host).to_string(),
            None => self.origin_url.to_ascii_lowercase(),
        }
    }
}

/// Builder for creating Credential instances
pub struct CredentialBuilder {
    username: String,
    password: String,
    formatted_username: String,
    origin_url: String,
    is_android_credential: bool,
    app_display_name: String,
    is_plus_address_username: bool,
}

impl CredentialBuilder {
    fn new(username: impl Into<String>, origin_url: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            formatted_username: username.clone(),
            username,
            password: String::new(),
            origin_url: origin_url.into(),
            is_android_credential: false,
            app_display_name: String::new(),
            is_plus_address_username: false,
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn formatted_username(mut self, formatted_username: impl Into<String>) -> Self {
        self.formatted_username = formatted_username.into();
        self
    }

    pub fn android_app(mut self, app_display_name: impl Into<String>) -> Self {
        self.is_android_credential = true;
        self.app_display_name = app_display_name.into();
        self
    }

    pub fn plus_address_username(mut self, is_plus_address: bool) -> Self {
        self.is_plus_address_username = is_plus_address;
        self
    }

    pub fn build(self) -> Credential {
        Credential {
            username: self.username,
            password: self.password,
            formatted_username: self.formatted_username,
            origin_url: self.origin_url,
            is_android_credential: self.is_android_credential,
            app_display_name: self.app_display_name,
            is_plus_address_username: self.is_plus_address_username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_origin_web() {
        let credential = Credential::builder("user", "https://accounts.example.com/login").build();
        assert_eq!(credential.display_origin(), "accounts.example.com");
    }

    #[test]
    fn test_display_origin_strips_www() {
        let credential = Credential::builder("user", "https://www.example.com/").build();
        assert_eq!(credential.display_origin(), "example.com");
    }

    #[test]
    fn test_display_origin_android_app() {
        let credential = Credential::builder("user", "android://hash@com.example.app/")
            .android_app("Example App")
            .build();
        assert_eq!(credential.display_origin(), "example app");
    }

    #[test]
    fn test_display_origin_unparseable_falls_back() {
        let credential = Credential::builder("user", "Not A URL").build();
        assert_eq!(credential.display_origin(), "not a url");
    }

    #[test]
    fn test_builder_defaults() {
        let credential = Credential::builder("user", "https://example.com/").build();
        assert_eq!(credential.formatted_username, "user");
        assert!(credential.password.is_empty());
        assert!(!credential.is_android_credential);
        assert!(!credential.is_plus_address_username);
    }
}
