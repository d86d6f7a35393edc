//! Storage infrastructure: theme document persistence.
//!
//! The `config` sub-module reads the theme file in whichever format its
//! extension names (YAML, TOML, or JSON) and writes it back in the same
//! format, replacing the file atomically.

pub mod config;
