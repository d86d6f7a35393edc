//! Read-only view of the host: environment variables and file contents.
//!
//! Segment probes never touch `std::env` or `std::fs` directly.  They receive
//! an [`Environment`] so tests can pin the answers.
//!
//! Neither method fails.  An unset variable reads as `""` and an unreadable
//! file reads as `""`; callers treat empty as "feature unavailable".
//!
//! A [`FakeEnvironment`] is always compiled (not guarded by `#[cfg(test)]`)
//! so tests in downstream crates can use it without touching the real process
//! environment.

use std::collections::HashMap;

/// Host probe injected into segment writers.
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    /// Value of the environment variable `key`, or `""` when unset.
    fn getenv(&self, key: &str) -> String;

    /// Full text content of the file at `path`, or `""` when it cannot be read.
    fn file_content(&self, path: &str) -> String;
}

/// In-memory [`Environment`] with fixed variables and files.
#[derive(Debug, Clone, Default)]
pub struct FakeEnvironment {
    variables: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl Environment for FakeEnvironment {
    fn getenv(&self, key: &str) -> String {
        self.variables.get(key).cloned().unwrap_or_default()
    }

    fn file_content(&self, path: &str) -> String {
        self.files.get(path).cloned().unwrap_or_default()
    }
}
