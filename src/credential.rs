//! The credential record shared by both store parsers and the matcher.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;

/// A username/password pair scoped to a host.
///
/// An empty `scope` marks a default entry that applies to any target. The
/// zero value (`Credential::default()`) is what a lookup returns when nothing
/// matched and should be treated as "unauthenticated".
///
/// # Security Notes
///
/// The `Debug` implementation redacts the password so records can be logged
/// without leaking secrets.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    scope: String,
    username: String,
    password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("scope", &self.scope)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Create a credential scoped to `scope`.
    ///
    /// # Examples
    ///
    /// ```
    /// use netrc_auth_rs::Credential;
    ///
    /// let cred = Credential::new("example.com", "alice", "secret");
    /// assert_eq!(cred.scope(), "example.com");
    /// assert!(!cred.is_default());
    /// ```
    pub fn new(
        scope: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Credential {
            scope: scope.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a default entry, which applies to every target.
    pub fn default_entry(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(String::new(), username, password)
    }

    /// The host (or host substring) this credential applies to.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The login name, possibly empty.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password, possibly empty.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get username and password as a pair.
    pub fn username_password(&self) -> (&str, &str) {
        (&self.username, &self.password)
    }

    /// Whether this is a default entry (empty scope).
    pub fn is_default(&self) -> bool {
        self.scope.is_empty()
    }

    /// Whether this is the zero value returned when no store matched.
    ///
    /// A default entry with empty login and password is indistinguishable
    /// from "no match" and is also reported as empty.
    pub fn is_empty(&self) -> bool {
        self.scope.is_empty() && self.username.is_empty() && self.password.is_empty()
    }

    /// Whether this credential applies to `target`.
    ///
    /// Default entries apply to everything; otherwise the scope must occur
    /// somewhere in the target string.
    ///
    /// ```
    /// use netrc_auth_rs::Credential;
    ///
    /// let cred = Credential::new("github.com", "git", "token");
    /// assert!(cred.applies_to("https://github.com/org/repo.git"));
    /// assert!(!cred.applies_to("https://gitlab.com/org/repo.git"));
    /// ```
    pub fn applies_to(&self, target: &str) -> bool {
        self.scope.is_empty() || target.contains(self.scope.as_str())
    }

    /// Get the base64-encoded `username:password` value for an HTTP Basic
    /// `Authorization` header.
    ///
    /// Returns `None` for the zero value.
    pub fn basic_auth_header(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let auth = format!("{}:{}", self.username, self.password);
        Some(BASE64.encode(auth.as_bytes()))
    }
}
