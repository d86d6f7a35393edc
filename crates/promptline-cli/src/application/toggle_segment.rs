//! ToggleSegmentUseCase: enable/disable a segment, or list every segment's state.
//!
//! One invocation runs exactly one of three paths:
//!
//! ```text
//! Idle ──► validate args ──┬─► Help                      (no I/O)
//!                          ├─► List   load ─► report     (never writes)
//!                          └─► Toggle load ─► find ─► flip ─► report ─► save
//! ```
//!
//! Argument validation (is the type a known segment kind?) happens in the
//! argument parser before this use case is reached.

use std::cmp::Ordering;

use promptline_core::{Document, Segment, SegmentType};
use tracing::{debug, info};

use super::ports::{ConfigStore, StatusSink, ToggleError};

const TOGGLED_MESSAGE: &str = "segment turned";
const LISTED_MESSAGE: &str = "->";

/// What the operator asked for, after argument validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRequest {
    /// Neither a segment nor `--list` was given.
    Help,
    /// Report every segment's persisted switch.
    List { ordered: bool },
    /// Flip the first segment of this type and persist the document.
    Toggle(SegmentType),
}

impl ToggleRequest {
    /// Resolves the parsed arguments.  `--list` wins over a positional segment.
    pub fn from_args(segment: Option<SegmentType>, list: bool, ordered: bool) -> Self {
        match (list, segment) {
            (true, _) => ToggleRequest::List { ordered },
            (false, Some(segment_type)) => ToggleRequest::Toggle(segment_type),
            (false, None) => ToggleRequest::Help,
        }
    }
}

/// Result of a successful invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The caller should print usage help.
    HelpRequested,
    /// `count` segments were reported.
    Listed { count: usize },
    /// The segment now has `enabled` persisted.
    Toggled {
        segment_type: SegmentType,
        enabled: bool,
    },
}

/// Status-list ordering: enabled first, then by type name ascending.
pub fn status_order(a: &Segment, b: &Segment) -> Ordering {
    b.is_enabled()
        .cmp(&a.is_enabled())
        .then_with(|| a.segment_type().as_str().cmp(b.segment_type().as_str()))
}

/// Every segment of `document`, in document order or [`status_order`].
pub fn list_segments(document: &Document, ordered: bool) -> Vec<&Segment> {
    let mut segments: Vec<&Segment> = document.segments().collect();
    if ordered {
        segments.sort_by(|a, b| status_order(a, b));
    }
    segments
}

/// Flips the first segment of `segment_type` and reports its new state.
///
/// # Errors
///
/// Returns [`ToggleError::SegmentNotFound`] (document untouched, nothing
/// reported) or [`ToggleError::Output`].
pub fn toggle_segment(
    document: &mut Document,
    segment_type: SegmentType,
    sink: &mut dyn StatusSink,
) -> Result<bool, ToggleError> {
    let segment = document.find_by_type_mut(segment_type)?;
    let enabled = segment.toggle();
    sink.segment_status(segment_type, enabled, TOGGLED_MESSAGE)?;
    Ok(enabled)
}

/// Orchestrates one `config toggle` invocation.
pub struct ToggleSegmentUseCase<'a, S: ConfigStore> {
    store: &'a S,
}

impl<'a, S: ConfigStore> ToggleSegmentUseCase<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Runs `request`, reporting to `sink`.
    ///
    /// # Errors
    ///
    /// Load failures abort before anything is reported.  A save failure is
    /// returned after the status line was reported, as
    /// [`ToggleError::ConfigWriteFailed`].
    pub fn execute(
        &self,
        request: ToggleRequest,
        sink: &mut dyn StatusSink,
    ) -> Result<ToggleOutcome, ToggleError> {
        match request {
            ToggleRequest::Help => Ok(ToggleOutcome::HelpRequested),
            ToggleRequest::List { ordered } => {
                let document = self.store.load()?;
                let segments = list_segments(&document, ordered);
                for segment in &segments {
                    sink.segment_status(
                        segment.segment_type(),
                        segment.is_enabled(),
                        LISTED_MESSAGE,
                    )?;
                }
                debug!(count = segments.len(), ordered, "listed segments");
                Ok(ToggleOutcome::Listed {
                    count: segments.len(),
                })
            }
            ToggleRequest::Toggle(segment_type) => {
                let mut document = self.store.load()?;
                let enabled = toggle_segment(&mut document, segment_type, sink)?;
                info!(segment = %segment_type, enabled, "segment toggled");
                self.store.save(&document)?;
                Ok(ToggleOutcome::Toggled {
                    segment_type,
                    enabled,
                })
            }
        }
    }
}
