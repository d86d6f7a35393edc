//! promptline-cli library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! The binary offers maintenance commands over a promptline theme:
//!
//! 1. `config toggle <segment>` flips a segment's persisted `enabled` switch
//!    and writes the theme back.
//! 2. `config toggle --list [--sort]` reports every segment's switch.
//! 3. `config probe <segment>` evaluates a segment's runtime probe against
//!    the live environment.

/// Application layer: use cases and the ports they depend on.
pub mod application;

/// Infrastructure layer: theme file, process environment, and terminal adapters.
pub mod infrastructure;
