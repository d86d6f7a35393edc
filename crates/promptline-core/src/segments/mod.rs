//! Runtime probes for segment types.
//!
//! A [`SegmentWriter`] decides whether a configured segment is live in the
//! current environment and, in the same pass, collects the values it would
//! render.  This is separate from the persisted `enabled` switch on
//! [`Segment`]: a segment can be switched on yet inactive because its
//! preconditions are unmet.
//!
//! New segment kinds register a match arm in [`new_writer`]; nothing else in
//! the workspace needs to change.

use std::sync::Arc;

use crate::domain::segment::{Segment, SegmentType};
use crate::environment::Environment;

pub mod oci;

pub use oci::Oci;

/// Activation check and template data for one segment type.
pub trait SegmentWriter {
    /// Probes the environment.  Returns `true` when the segment should render.
    ///
    /// May populate the values returned by [`SegmentWriter::template_data`];
    /// when it returns `false` those values stay empty.
    fn enabled(&mut self) -> bool;

    /// Template used to render the segment.
    fn template(&self) -> String;

    /// Named values available to the template, in display order.
    fn template_data(&self) -> Vec<(&'static str, String)>;
}

/// Builds the probe for `segment`, or `None` when its type has no probe.
pub fn new_writer(segment: &Segment, env: Arc<dyn Environment>) -> Option<Box<dyn SegmentWriter>> {
    match segment.segment_type() {
        SegmentType::Oci => Some(Box::new(Oci::new(segment.properties().clone(), env))),
        _ => None,
    }
}
