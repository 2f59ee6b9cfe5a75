//! Parsing for `.netrc` files.
//!
//! The tokenizer follows the behaviour of classic netrc consumers (curl
//! before 7.84.0) rather than a formal grammar:
//!
//! - Tabs become spaces and each trimmed line is split on single spaces, so
//!   two adjacent spaces yield an empty token. An empty token is still a
//!   value when one is expected.
//! - `machine <host>`, `login <user>`, `password <pass>` and
//!   `account <value>` take the following token as their value, even if it
//!   sits on a later line.
//! - `default` starts an entry that applies to every host.
//! - `macdef <name>` starts a macro. The name is discarded and the rest of
//!   that line is still tokenized; the body starts on the next line, runs
//!   until the next empty line and is skipped entirely.
//! - A token starting with `#` comments out the rest of its line, unless a
//!   value is expected, in which case it is the value.
//!
//! Quoted tokens and escapes are not supported.

use crate::credential::Credential;
use std::io::BufRead;

/// Keywords whose next token is a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Machine,
    Login,
    Password,
    Account,
    Macdef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    AwaitingValue(Field),
    /// Skipping a macro body. Holds a value still pending when the macro
    /// began, which resumes once the body ends.
    MacroSkip(Option<Field>),
}

/// What the tokenizer does after a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    /// Comment: drop the rest of the line.
    EndLine,
    /// `macdef`: keep tokenizing, skip from the next line on.
    StartMacro,
}

/// A `machine` or `default` block that has not been flushed yet.
#[derive(Debug, Default)]
struct Entry {
    machine: String,
    login: String,
    password: String,
}

impl Entry {
    fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Machine => &mut self.machine,
            Field::Login => &mut self.login,
            Field::Password => &mut self.password,
            // Accepted but not part of a `Credential`.
            Field::Account | Field::Macdef => return,
        };
        *slot = value.to_string();
    }

    fn into_credential(self) -> Credential {
        Credential::new(self.machine, self.login, self.password)
    }
}

/// Tokenizing state machine over netrc lines.
#[derive(Debug)]
struct NetrcParser {
    state: State,
    current: Option<Entry>,
    credentials: Vec<Credential>,
}

impl NetrcParser {
    fn new() -> Self {
        NetrcParser {
            state: State::Scanning,
            current: None,
            credentials: Vec::new(),
        }
    }

    fn feed_line(&mut self, line: &str) {
        if let State::MacroSkip(pending) = self.state {
            if line.is_empty() {
                self.state = pending.map_or(State::Scanning, State::AwaitingValue);
            }
            return;
        }

        let normalized = line.replace('\t', " ");
        let mut macro_started = false;
        for token in normalized.trim().split(' ') {
            match self.feed_token(token) {
                Step::Next => {}
                Step::StartMacro => macro_started = true,
                Step::EndLine => break,
            }
        }

        if macro_started {
            let pending = match self.state {
                State::AwaitingValue(field) => Some(field),
                _ => None,
            };
            self.state = State::MacroSkip(pending);
        }
    }

    fn feed_token(&mut self, token: &str) -> Step {
        if let State::AwaitingValue(field) = self.state {
            match self.current.as_mut() {
                Some(entry) => entry.set(field, token),
                None => tracing::trace!("dropping netrc value outside of a machine entry"),
            }
            self.state = State::Scanning;
            return Step::Next;
        }

        if token.starts_with('#') {
            return Step::EndLine;
        }

        match token {
            "machine" => {
                self.start_entry();
                self.state = State::AwaitingValue(Field::Machine);
            }
            "default" => {
                self.start_entry();
            }
            "login" => self.state = State::AwaitingValue(Field::Login),
            "password" => self.state = State::AwaitingValue(Field::Password),
            "account" => self.state = State::AwaitingValue(Field::Account),
            "macdef" => {
                self.state = State::AwaitingValue(Field::Macdef);
                return Step::StartMacro;
            }
            _ => {}
        }

        Step::Next
    }

    /// Flush the in-progress entry and begin a fresh one. A fresh entry has
    /// an empty machine, which is exactly a `default` entry until a
    /// `machine` value arrives.
    fn start_entry(&mut self) {
        self.flush();
        self.current = Some(Entry::default());
    }

    fn flush(&mut self) {
        if let Some(entry) = self.current.take() {
            tracing::trace!(machine = %entry.machine, "parsed netrc entry");
            self.credentials.push(entry.into_credential());
        }
    }

    fn finish(mut self) -> Vec<Credential> {
        self.flush();
        self.credentials
    }
}

/// Parse a netrc stream into credentials, one per `machine`/`default` block,
/// in file order.
///
/// Incomplete entries are kept with empty login/password. A read error stops
/// parsing; everything parsed up to that point is kept.
///
/// # Examples
///
/// ```
/// use netrc_auth_rs::parse_netrc;
///
/// let input = "machine foo.com\nlogin bob\npassword hunter2\n";
/// let creds = parse_netrc(input.as_bytes());
/// assert_eq!(creds.len(), 1);
/// assert_eq!(creds[0].scope(), "foo.com");
/// assert_eq!(creds[0].username(), "bob");
/// assert_eq!(creds[0].password(), "hunter2");
/// ```
pub fn parse_netrc<R: BufRead>(reader: R) -> Vec<Credential> {
    let mut parser = NetrcParser::new();

    for line in reader.lines() {
        match line {
            Ok(line) => parser.feed_line(&line),
            Err(e) => {
                tracing::debug!("stopped reading netrc: {}", e);
                break;
            }
        }
    }

    parser.finish()
}
