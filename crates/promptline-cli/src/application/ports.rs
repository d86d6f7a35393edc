//! Abstractions the use cases depend on, and the errors crossing them.

use std::path::PathBuf;

use promptline_core::{Document, SegmentNotFound, SegmentType};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a command can report to the operator.
#[derive(Debug, Error)]
pub enum ToggleError {
    /// The theme file is missing or cannot be opened.
    #[error("cannot read theme config {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file does not deserialize into blocks of segments.
    #[error("theme config {path} is malformed: {source}")]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The requested type is valid but absent from the document.
    #[error(transparent)]
    SegmentNotFound(#[from] SegmentNotFound),

    /// The toggle happened in memory but the file on disk is unchanged.
    #[error("segment was toggled in memory but {path} was not updated: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The segment type has no runtime probe.
    #[error("segment {0} has no environment probe")]
    ProbeUnavailable(SegmentType),

    /// Writing a status line to the output stream failed.
    #[error("failed to write status output: {0}")]
    Output(#[from] std::io::Error),
}

/// Loads and persists the theme document.
pub trait ConfigStore {
    /// Reads and deserializes the document.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ConfigUnreadable`] or
    /// [`ToggleError::ConfigMalformed`].
    fn load(&self) -> Result<Document, ToggleError>;

    /// Serializes `document` and replaces the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::ConfigWriteFailed`]; the stored copy is left as
    /// it was.
    fn save(&self, document: &Document) -> Result<(), ToggleError>;
}

/// Receives one human-readable status report per segment.
pub trait StatusSink {
    /// Reports `segment_type` as ON or OFF, joined by `message`
    /// (e.g. `"segment turned"` or `"->"`).
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying stream.
    fn segment_status(
        &mut self,
        segment_type: SegmentType,
        enabled: bool,
        message: &str,
    ) -> std::io::Result<()>;

    /// Reports a named runtime value (e.g. a probe's resolved region).
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying stream.
    fn detail(&mut self, name: &str, value: &str) -> std::io::Result<()>;
}
