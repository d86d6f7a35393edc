//! Process-backed [`Environment`] probe.

use promptline_core::Environment;
use tracing::debug;

/// Reads the real process environment and file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl OsEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for OsEnvironment {
    fn getenv(&self, key: &str) -> String {
        std::env::var(key).unwrap_or_default()
    }

    fn file_content(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                // Unreadable files mean "feature unavailable", never a failure.
                debug!(path, error = %e, "probe could not read file");
                String::new()
            }
        }
    }
}
