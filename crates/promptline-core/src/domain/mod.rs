//! Domain entities for promptline.
//!
//! This module contains the theme document model with no infrastructure
//! dependencies.  It knows nothing about YAML, TOML, or JSON: the
//! `Serialize`/`Deserialize` derives describe the shape, and the storage
//! adapter in the command-line crate picks the concrete format.
//!
//! Ownership is strictly hierarchical: a [`document::Document`] owns its
//! blocks, and each [`document::Block`] owns its segments.

/// Document and block containers, plus lookup by segment type.
pub mod document;

/// A single configured segment and the closed set of segment types.
pub mod segment;
