//! Infrastructure layer for the command-line front end.
//!
//! Contains OS-facing adapters: theme file persistence, the process
//! environment probe, and the terminal status printer.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `promptline_core`, but MUST NOT be imported by the `application` layer.

pub mod environment;
pub mod storage;
pub mod terminal;
