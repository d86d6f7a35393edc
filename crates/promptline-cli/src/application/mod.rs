//! Application layer use cases for the command-line front end.
//!
//! Use cases here orchestrate the domain from `promptline-core` and depend on
//! the ports defined in [`ports`] rather than on files or terminals, so the
//! infrastructure can be swapped (or faked in tests) without touching them.
//!
//! # Sub-modules
//!
//! - **`ports`** – `ConfigStore` (load/save the theme document), `StatusSink`
//!   (report a segment's state to the operator), and the shared error type.
//!
//! - **`toggle_segment`** – Flips a segment's persisted `enabled` switch and
//!   writes the document back, or lists every segment's switch.
//!
//! - **`probe_segment`** – Evaluates a segment's runtime probe against the
//!   live environment without writing anything.

pub mod ports;
pub mod probe_segment;
pub mod toggle_segment;
