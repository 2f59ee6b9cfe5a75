//! First-match credential lookup over an ordered list.
//!
//! The list order is the precedence order: git credentials first, then
//! netrc entries in file order. The scan stops at the first entry that
//! applies, so a default entry placed before a host-specific one shadows it.

use crate::credential::Credential;

/// Find the first credential that applies to `target`, without cloning.
pub fn first_match<'a>(target: &str, credentials: &'a [Credential]) -> Option<&'a Credential> {
    credentials.iter().find(|c| c.applies_to(target))
}

/// Find the credential for `target`, or the zero value if none applies.
///
/// # Examples
///
/// ```
/// use netrc_auth_rs::{find_credential, Credential};
///
/// let creds = vec![
///     Credential::new("foo.com", "bob", "hunter2"),
///     Credential::default_entry("anon", "anon"),
/// ];
///
/// let found = find_credential("https://foo.com/repo", &creds);
/// assert_eq!(found.username(), "bob");
///
/// let fallback = find_credential("https://bar.com/repo", &creds);
/// assert_eq!(fallback.username(), "anon");
/// ```
pub fn find_credential(target: &str, credentials: &[Credential]) -> Credential {
    first_match(target, credentials).cloned().unwrap_or_default()
}
