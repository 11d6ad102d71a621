//! The growth abstraction.

use std::fmt;

use tessera_core::{ByteBuffer, SegmentId};

use crate::error::ArenaError;
use crate::map::SegmentMap;

/// Allocation strategy for a message's backing storage.
///
/// The message-building layer calls [`allocate`](Arena::allocate) whenever
/// a segment runs out of room; the arena decides how the storage grows and
/// which segment the new space lives in. Implementations carry one piece of
/// mutable state — their current backing buffer(s) — and must uphold the
/// additive-growth contract: a returned buffer is always at least `min_size`
/// bytes larger than the current contents it preserves.
///
/// The `Display` bound gives every arena a one-line diagnostic description
/// for trace output.
pub trait Arena: fmt::Display {
    /// Grow the storage by at least `min_size` bytes and return the segment
    /// the new space lives in along with its (new) backing buffer.
    ///
    /// `segments` is the caller's current segment table. When it contains
    /// an entry for the returned segment, the grown buffer is seeded from
    /// that entry's contents; otherwise the arena copies forward from its
    /// own current buffer. Either way the existing bytes occupy the front
    /// of the new buffer and the added space is zero-filled.
    fn allocate(&mut self, min_size: usize, segments: &SegmentMap) -> (SegmentId, ByteBuffer);

    /// Look up the current backing buffer for a segment id.
    fn buffer(&self, id: SegmentId) -> Result<ByteBuffer, ArenaError>;

    /// Number of segments this arena currently manages.
    fn segment_count(&self) -> u32;
}
