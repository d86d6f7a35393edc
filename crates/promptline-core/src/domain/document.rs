//! The theme document: ordered blocks of ordered segments.
//!
//! Keys the model does not name (block `alignment`, document `final_space`,
//! and so on) are captured into flattened property bags so a load/save cycle
//! keeps them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::segment::{Properties, Segment, SegmentType};

/// No segment of the requested type exists anywhere in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("segment {0} not found")]
pub struct SegmentNotFound(pub SegmentType);

/// An ordered group of segments sharing one layout role (e.g. a prompt line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(flatten)]
    pub properties: Properties,
}

impl Block {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            properties: Properties::new(),
        }
    }
}

/// The top-level persisted theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    #[serde(flatten)]
    pub settings: Properties,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            settings: Properties::new(),
        }
    }

    /// All segments in block order, then segment order within each block.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.blocks.iter().flat_map(|block| block.segments.iter())
    }

    pub fn segments_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.blocks.iter_mut().flat_map(|block| block.segments.iter_mut())
    }

    /// Returns the first segment of `segment_type` in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentNotFound`] when no block contains a segment of that type.
    pub fn find_by_type(&self, segment_type: SegmentType) -> Result<&Segment, SegmentNotFound> {
        self.segments()
            .find(|s| s.segment_type() == segment_type)
            .ok_or(SegmentNotFound(segment_type))
    }

    /// Mutable counterpart of [`Document::find_by_type`].
    ///
    /// # Errors
    ///
    /// Returns [`SegmentNotFound`] when no block contains a segment of that type.
    pub fn find_by_type_mut(
        &mut self,
        segment_type: SegmentType,
    ) -> Result<&mut Segment, SegmentNotFound> {
        self.segments_mut()
            .find(|s| s.segment_type() == segment_type)
            .ok_or(SegmentNotFound(segment_type))
    }
}
