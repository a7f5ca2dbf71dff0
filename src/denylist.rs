//! Common-password denylist
//!
//! Ships a fixed list of well-known weak passwords and can optionally be
//! extended from a file. Matching is case-insensitive.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming an extra denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

const COMMON_PASSWORDS: [&str; 12] = [
    "password",
    "123456",
    "password123",
    "admin",
    "qwerty",
    "letmein",
    "welcome",
    "monkey",
    "1234567890",
    "abc123",
    "password1",
    "iloveyou",
];

static BUILTIN: LazyLock<Denylist> = LazyLock::new(|| Denylist {
    entries: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
});

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Set of lowercase passwords considered too common to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Denylist {
    /// The fixed built-in list.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Shared reference to the built-in list, without cloning.
    pub(crate) fn builtin_ref() -> &'static Denylist {
        &BUILTIN
    }

    /// Built-in list extended with one entry per non-empty line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut list = Self::builtin();
        list.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", list.len(), path);

        Ok(list)
    }

    /// Loads the file named by `PWD_DENYLIST_PATH`, or returns the built-in
    /// list when the variable is unset.
    pub fn from_env() -> Result<Self, DenylistError> {
        match std::env::var_os(DENYLIST_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Adds entries, trimming and lowercasing each and skipping blanks.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.extend(
            entries
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty()),
        );
    }

    /// Returns `true` if the lowercased password is listed.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
