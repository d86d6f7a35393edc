//! # promptline-core
//!
//! Shared library for promptline containing the theme document model, the
//! environment probe contract, and the segment probes that decide whether a
//! segment is live in the current shell.
//!
//! This crate performs no file-system or process-environment access of its
//! own.  Everything host-facing goes through the [`Environment`] trait, which
//! the command-line crate implements against the real OS.
//!
//! # Architecture overview
//!
//! A promptline theme is a *document* made of ordered *blocks*, each holding
//! ordered *segments*.  A segment has a type (`aws`, `git`, `oci`, ...), a
//! persisted `enabled` switch, and an open bag of styling parameters.
//!
//! - **`domain`** – The document model and the lookups over it.  Pure data,
//!   serde-friendly, with no opinion about the on-disk format.
//!
//! - **`environment`** – The read-only probe used by segments: environment
//!   variables and file contents.  Never fails; missing data reads as empty.
//!
//! - **`segments`** – Runtime activation logic per segment type.  A probe
//!   answers both "should this segment render" and "what values does it
//!   render" in one pass.

pub mod domain;
pub mod environment;
pub mod segments;

pub use domain::document::{Block, Document, SegmentNotFound};
pub use domain::segment::{ParseSegmentTypeError, Properties, Segment, SegmentType};
pub use environment::{Environment, FakeEnvironment};
pub use segments::{new_writer, SegmentWriter};
