//! The single-segment allocation strategy.

use std::fmt;

use tracing::trace;

use tessera_core::{
    check_segment_size, checked_pad_to_word, copy_bytes, diag_format, ByteBuffer, DiagArg,
    SegmentId,
};

use crate::arena::Arena;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::map::SegmentMap;

/// An arena that keeps the entire message in one segment.
///
/// Growth reallocates: a new zero-filled buffer is created at the old
/// length plus the growth amount, the old contents are copied to its
/// front, and the arena's current buffer is swapped to the new one. Small
/// requests are rounded up to the configured growth floor so repeated tiny
/// allocations stay amortized; larger requests grow by the request padded
/// to a word boundary.
///
/// Handles to the previous buffer remain valid allocations but no longer
/// reflect the message — after growth, only the returned buffer does.
///
/// A request whose grown length would not fit in the address space panics
/// rather than wrapping to a smaller buffer.
pub struct SingleSegmentArena {
    buffer: ByteBuffer,
    min_growth: usize,
}

impl SingleSegmentArena {
    /// Create an arena with a fresh zero-filled initial buffer.
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            buffer: ByteBuffer::zeroed(config.padded_initial_size()),
            min_growth: config.padded_min_growth(),
        }
    }

    /// Create an arena over an existing buffer, e.g. a received message
    /// being opened for further building.
    pub fn with_buffer(buffer: ByteBuffer, config: &ArenaConfig) -> Self {
        Self {
            buffer,
            min_growth: config.padded_min_growth(),
        }
    }
}

impl Arena for SingleSegmentArena {
    fn allocate(&mut self, min_size: usize, segments: &SegmentMap) -> (SegmentId, ByteBuffer) {
        // Prefer the caller's registered segment 0 as the copy source; the
        // caller may have written through its own handle since the last
        // allocation.
        let src = segments
            .get(SegmentId(0))
            .cloned()
            .unwrap_or_else(|| self.buffer.clone());

        let growth = if min_size < self.min_growth {
            Some(self.min_growth)
        } else {
            checked_pad_to_word(min_size)
        };
        // A wrapped length would silently hand back less room than asked for.
        let Some(new_len) = growth.and_then(|g| src.len().checked_add(g)) else {
            panic!("segment growth overflow: {} + {min_size} bytes", src.len());
        };
        debug_assert!(
            check_segment_size(new_len as u64).is_ok(),
            "segment length {new_len} exceeds the format's segment limit"
        );

        let next = ByteBuffer::zeroed(new_len);
        copy_bytes(&mut next.bytes_mut(), &src.bytes(), None);
        self.buffer = next.clone();

        trace!(min_size, old_len = src.len(), new_len, "grew segment 0");

        (SegmentId(0), next)
    }

    fn buffer(&self, id: SegmentId) -> Result<ByteBuffer, ArenaError> {
        if id != SegmentId(0) {
            return Err(ArenaError::InvalidSegmentId { id });
        }
        Ok(self.buffer.clone())
    }

    fn segment_count(&self) -> u32 {
        1
    }
}

impl fmt::Display for SingleSegmentArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = i64::try_from(self.buffer.len()).unwrap_or(i64::MAX);
        f.write_str(&diag_format(
            "SingleSegmentArena_len:%x",
            &[DiagArg::Int(len)],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_buffer_uses_config_size() {
        let arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(64));
        assert_eq!(arena.buffer(SegmentId(0)).unwrap().len(), 64);
        assert_eq!(arena.segment_count(), 1);
    }

    #[test]
    fn small_request_grows_by_the_floor() {
        let mut arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(8));
        let (id, buf) = arena.allocate(1, &SegmentMap::new());
        assert_eq!(id, SegmentId(0));
        assert_eq!(buf.len(), 8 + ArenaConfig::MIN_SINGLE_SEGMENT_GROWTH);
    }

    #[test]
    fn zero_request_still_grows_by_the_floor() {
        let mut arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(8));
        let (_, buf) = arena.allocate(0, &SegmentMap::new());
        assert_eq!(buf.len(), 8 + ArenaConfig::MIN_SINGLE_SEGMENT_GROWTH);
    }

    #[test]
    fn large_request_grows_by_the_padded_request() {
        let mut arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(8));
        let (_, buf) = arena.allocate(5000, &SegmentMap::new());
        // 5000 padded to a word boundary.
        assert_eq!(buf.len(), 8 + 5000);
        let (_, buf) = arena.allocate(5001, &SegmentMap::new());
        assert_eq!(buf.len(), 8 + 5000 + 5008);
    }

    #[test]
    fn growth_preserves_existing_bytes_and_zero_fills_the_rest() {
        let mut arena = SingleSegmentArena::with_buffer(
            ByteBuffer::from_vec(vec![0xaa; 16]),
            &ArenaConfig::default(),
        );
        let (_, buf) = arena.allocate(1, &SegmentMap::new());
        let bytes = buf.bytes();
        assert!(bytes[..16].iter().all(|&b| b == 0xaa));
        assert!(bytes[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn caller_segment_table_wins_as_copy_source() {
        let mut arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(8));
        let mut segments = SegmentMap::new();
        segments.insert(SegmentId(0), ByteBuffer::from_vec(vec![7; 4]));
        let (_, buf) = arena.allocate(1, &segments);
        // Seeded from the 4-byte registered buffer, not the arena's own.
        assert_eq!(buf.len(), 4 + ArenaConfig::MIN_SINGLE_SEGMENT_GROWTH);
        assert_eq!(&buf.bytes()[..4], &[7, 7, 7, 7]);
    }

    #[test]
    fn old_handle_goes_stale_after_growth() {
        let mut arena = SingleSegmentArena::new(&ArenaConfig::default());
        let before = arena.buffer(SegmentId(0)).unwrap();
        let (_, after) = arena.allocate(1, &SegmentMap::new());
        assert!(!before.same_allocation(&after));
        assert!(arena.buffer(SegmentId(0)).unwrap().same_allocation(&after));
    }

    #[test]
    fn nonzero_segment_id_is_rejected() {
        let arena = SingleSegmentArena::new(&ArenaConfig::default());
        let err = arena.buffer(SegmentId(1)).unwrap_err();
        assert_eq!(err, ArenaError::InvalidSegmentId { id: SegmentId(1) });
    }

    #[test]
    #[should_panic(expected = "segment growth overflow")]
    fn pathological_request_panics_instead_of_wrapping() {
        let mut arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(8));
        let _ = arena.allocate(usize::MAX, &SegmentMap::new());
    }

    #[test]
    fn display_reports_length_in_hex() {
        let arena = SingleSegmentArena::with_buffer(
            ByteBuffer::zeroed(0x1000),
            &ArenaConfig::default(),
        );
        assert_eq!(arena.to_string(), "SingleSegmentArena_len:0x1000");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use tessera_core::pad_to_word;

        proptest! {
            #[test]
            fn growth_arithmetic_holds(
                initial in 0usize..512,
                min_size in 0usize..64 * 1024,
            ) {
                let mut arena =
                    SingleSegmentArena::new(&ArenaConfig::with_initial_size(initial));
                let old_len = arena.buffer(SegmentId(0)).unwrap().len();
                let (_, buf) = arena.allocate(min_size, &SegmentMap::new());
                let expected = if min_size < ArenaConfig::MIN_SINGLE_SEGMENT_GROWTH {
                    ArenaConfig::MIN_SINGLE_SEGMENT_GROWTH
                } else {
                    pad_to_word(min_size)
                };
                prop_assert_eq!(buf.len(), old_len + expected);
                prop_assert_eq!(buf.len() % 8, 0);
            }

            #[test]
            fn growth_preserves_prefix(
                len in 1usize..256,
                min_size in 0usize..8192,
            ) {
                let bytes: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
                let mut arena = SingleSegmentArena::with_buffer(
                    ByteBuffer::from_vec(bytes.clone()),
                    &ArenaConfig::default(),
                );
                let (_, buf) = arena.allocate(min_size, &SegmentMap::new());
                prop_assert_eq!(&buf.bytes()[..len], &bytes[..]);
            }
        }
    }
}
