//! Credential list ordering and filtering for the all-passwords sheet
//!
//! Pure functions over an in-memory credential batch. The host re-invokes
//! [`build_display_list`] on every keystroke of the sheet's search box.

use log::debug;

use crate::models::Credential;

/// Sort credentials by their display origin for presentation
///
/// Stable lexicographic sort on [`Credential::display_origin`]: the
/// ASCII-lowercased app name for Android-app credentials, the origin host
/// otherwise. Credentials sharing an origin keep their supplied order.
pub fn sort_for_display(credentials: &mut [Credential]) {
    credentials.sort_by(|a, b| a.display_origin().cmp(&b.display_origin()));
}

/// Build the list of credentials to display for the current search query
///
/// Drops credentials with an empty password when the focused field is a
/// password field. A query keeps a credential when its origin URL or
/// username contains the query case-insensitively; an empty query matches
/// everything. Relative order of the input is preserved.
pub fn build_display_list(
    credentials: &[Credential],
    query: Option<&str>,
    is_password_field: bool,
) -> Vec<Credential> {
    let query = query.map(str::to_lowercase);
    let result: Vec<Credential> = credentials
        .iter()
        .filter(|credential| !(is_password_field && credential.password.is_empty()))
        .filter(|credential| match &query {
            Some(query) => {
                credential.origin_url.to_lowercase().contains(query)
                    || credential.username.to_lowercase().contains(query)
            }
            None => true,
        })
        .cloned()
        .collect();
    debug!(
        "Built display list: {} of {} credentials match",
        result.len(),
        credentials.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(origin: &str, username: &str, password: &str) -> Credential {
        Credential::builder(username, origin)
            .password(password)
            .build()
    }

    #[test]
    fn test_sort_orders_by_display_origin() {
        let mut credentials = vec![
            credential("https://z.com/", "user", "pw"),
            credential("https://a.com/", "user", "pw"),
        ];
        sort_for_display(&mut credentials);
        assert_eq!(credentials[0].origin_url, "https://a.com/");
        assert_eq!(credentials[1].origin_url, "https://z.com/");
    }

    #[test]
    fn test_sort_interleaves_app_credentials() {
        let mut credentials = vec![
            credential("https://zebra.com/", "user", "pw"),
            Credential::builder("user", "android://hash@com.example.mango/")
                .password("pw")
                .android_app("Mango")
                .build(),
            credential("https://apple.com/", "user", "pw"),
        ];
        sort_for_display(&mut credentials);
        assert_eq!(credentials[0].display_origin(), "apple.com");
        assert_eq!(credentials[1].display_origin(), "mango");
        assert_eq!(credentials[2].display_origin(), "zebra.com");
    }

    #[test]
    fn test_sort_is_stable_for_same_origin() {
        let mut credentials = vec![
            credential("https://a.com/", "first", "pw"),
            credential("https://a.com/", "second", "pw"),
        ];
        sort_for_display(&mut credentials);
        assert_eq!(credentials[0].username, "first");
        assert_eq!(credentials[1].username, "second");
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(build_display_list(&[], None, false).is_empty());
        assert!(build_display_list(&[], Some("query"), true).is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let credentials = vec![
            credential("https://a.com/", "alice", "pw"),
            credential("https://b.com/", "bob", "pw"),
        ];
        let result = build_display_list(&credentials, Some(""), false);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_query_matches_origin_or_username() {
        let credentials = vec![
            credential("https://bank.com/", "alice", "pw"),
            credential("https://shop.com/", "bankteller", "pw"),
            credential("https://news.com/", "carol", "pw"),
        ];
        let result = build_display_list(&credentials, Some("bank"), false);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].origin_url, "https://bank.com/");
        assert_eq!(result[1].username, "bankteller");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let credentials = vec![credential("https://Bank.com/", "Alice", "pw")];
        assert_eq!(build_display_list(&credentials, Some("bank"), false).len(), 1);
        assert_eq!(build_display_list(&credentials, Some("ALICE"), false).len(), 1);
    }

    #[test]
    fn test_empty_password_excluded_for_password_field() {
        // Sorted order: a.com (empty password) then z.com.
        let mut credentials = vec![
            credential("https://z.com/", "user", "pw"),
            credential("https://a.com/", "user", ""),
        ];
        sort_for_display(&mut credentials);

        // The query matches a.com, but its empty password excludes it.
        let result = build_display_list(&credentials, Some("a"), true);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_password_retained_for_username_field() {
        let credentials = vec![credential("https://a.com/", "user", "")];
        let result = build_display_list(&credentials, None, false);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_filter_preserves_sorted_order() {
        let mut credentials = vec![
            credential("https://c.com/", "match", "pw"),
            credential("https://a.com/", "match", "pw"),
            credential("https://b.com/", "other", "pw"),
        ];
        sort_for_display(&mut credentials);
        let result = build_display_list(&credentials, Some("match"), true);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].origin_url, "https://a.com/");
        assert_eq!(result[1].origin_url, "https://c.com/");
    }

    #[test]
    fn test_build_display_list_is_idempotent() {
        let credentials = vec![
            credential("https://a.com/", "alice", "pw"),
            credential("https://b.com/", "bob", ""),
        ];
        let first = build_display_list(&credentials, Some("b"), true);
        let second = build_display_list(&credentials, Some("b"), true);
        assert_eq!(first, second);
    }
}
