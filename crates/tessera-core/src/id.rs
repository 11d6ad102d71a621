//! Strongly-typed segment identifier.

use std::fmt;

/// Identifies a segment within a message.
///
/// Segment ids are assigned sequentially by the arena; the single-segment
/// arena only ever produces `SegmentId(0)`. The message-building layer keys
/// its segment lookup table by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u32);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SegmentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
