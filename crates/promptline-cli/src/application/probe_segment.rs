//! ProbeSegmentUseCase: evaluate a configured segment against the live environment.
//!
//! Useful when a segment is switched on but does not show up in the prompt:
//! the probe reports whether its preconditions hold and what it resolved.
//! The document is only read.

use std::sync::Arc;

use promptline_core::{new_writer, Environment, SegmentType};
use tracing::debug;

use super::ports::{ConfigStore, StatusSink, ToggleError};

const PROBED_MESSAGE: &str = "segment is";

/// Result of probing one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub segment_type: SegmentType,
    /// The persisted switch.
    pub enabled: bool,
    /// Whether the environment satisfies the segment's preconditions.
    pub active: bool,
    pub template: String,
    pub data: Vec<(&'static str, String)>,
}

pub struct ProbeSegmentUseCase<'a, S: ConfigStore> {
    store: &'a S,
    env: Arc<dyn Environment>,
}

impl<'a, S: ConfigStore> ProbeSegmentUseCase<'a, S> {
    pub fn new(store: &'a S, env: Arc<dyn Environment>) -> Self {
        Self { store, env }
    }

    /// Probes the first segment of `segment_type` and reports the result.
    ///
    /// # Errors
    ///
    /// Returns load errors, [`ToggleError::SegmentNotFound`], or
    /// [`ToggleError::ProbeUnavailable`] when the type has no probe.
    pub fn execute(
        &self,
        segment_type: SegmentType,
        sink: &mut dyn StatusSink,
    ) -> Result<ProbeReport, ToggleError> {
        let document = self.store.load()?;
        let segment = document.find_by_type(segment_type)?;
        let mut writer = new_writer(segment, Arc::clone(&self.env))
            .ok_or(ToggleError::ProbeUnavailable(segment_type))?;

        let active = writer.enabled();
        let data = if active {
            writer.template_data()
        } else {
            Vec::new()
        };
        debug!(segment = %segment_type, active, "segment probed");

        sink.segment_status(segment_type, active, PROBED_MESSAGE)?;
        for (name, value) in &data {
            sink.detail(name, value)?;
        }

        Ok(ProbeReport {
            segment_type,
            enabled: segment.is_enabled(),
            active,
            template: writer.template(),
            data,
        })
    }
}
