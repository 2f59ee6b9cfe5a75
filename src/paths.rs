//! Default locations of the credential stores.

use std::path::{Path, PathBuf};

/// File name of git's credential store inside the home directory.
pub const GIT_CREDENTIALS_FILE: &str = ".git-credentials";

/// File name of the netrc store inside the home directory.
pub const NETRC_FILE: &str = ".netrc";

/// Get the path to the user's git credential store (`~/.git-credentials`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn git_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| git_credentials_path_in(&home))
}

/// Get the path to the user's netrc file (`~/.netrc`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn netrc_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| netrc_path_in(&home))
}

/// Get the git credential store path for an explicit home directory.
pub fn git_credentials_path_in(home: &Path) -> PathBuf {
    home.join(GIT_CREDENTIALS_FILE)
}

/// Get the netrc path for an explicit home directory.
pub fn netrc_path_in(home: &Path) -> PathBuf {
    home.join(NETRC_FILE)
}
