//! Segment lookup table.

use indexmap::IndexMap;
use tessera_core::{ByteBuffer, SegmentId};

/// Maps segment ids to their backing buffers.
///
/// The message-building layer owns one of these per message and passes it
/// to [`Arena::allocate`](crate::Arena::allocate) so the arena can seed a
/// grown buffer from the caller's current view of segment 0. Backed by an
/// insertion-ordered map, so iteration order is the order segments were
/// registered — which for on-wire framing is also segment id order.
#[derive(Clone, Debug, Default)]
pub struct SegmentMap {
    entries: IndexMap<SegmentId, ByteBuffer>,
}

impl SegmentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `buffer` as the backing storage for `id`, replacing any
    /// previous entry for that id.
    pub fn insert(&mut self, id: SegmentId, buffer: ByteBuffer) {
        self.entries.insert(id, buffer);
    }

    /// Look up the buffer for a segment id.
    pub fn get(&self, id: SegmentId) -> Option<&ByteBuffer> {
        self.entries.get(&id)
    }

    /// Number of registered segments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no segments are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, buffer)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &ByteBuffer)> {
        self.entries.iter().map(|(id, buf)| (*id, buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut map = SegmentMap::new();
        assert!(map.is_empty());
        map.insert(SegmentId(0), ByteBuffer::zeroed(8));
        assert_eq!(map.len(), 1);
        assert!(map.get(SegmentId(0)).is_some());
        assert!(map.get(SegmentId(1)).is_none());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut map = SegmentMap::new();
        let first = ByteBuffer::zeroed(8);
        let second = ByteBuffer::zeroed(16);
        map.insert(SegmentId(0), first.clone());
        map.insert(SegmentId(0), second.clone());
        assert_eq!(map.len(), 1);
        let got = map.get(SegmentId(0)).unwrap();
        assert!(got.same_allocation(&second));
        assert!(!got.same_allocation(&first));
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut map = SegmentMap::new();
        map.insert(SegmentId(2), ByteBuffer::zeroed(1));
        map.insert(SegmentId(0), ByteBuffer::zeroed(1));
        map.insert(SegmentId(1), ByteBuffer::zeroed(1));
        let ids: Vec<SegmentId> = map.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![SegmentId(2), SegmentId(0), SegmentId(1)]);
    }
}
