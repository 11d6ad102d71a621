//! Numeric limits shared across the storage core.

/// Size of one word in bytes. All segment buffer lengths produced by the
/// arena are multiples of this unit, which is what allows word-at-a-time
/// copies during growth.
pub const WORD_SIZE: usize = 8;

/// Largest value accepted by [`check_int32`](crate::num::check_int32).
///
/// The accepted range is symmetric around this bound (`-MAX_INT32` to
/// `MAX_INT32`); see `check_int32` for why `i32::MIN` is excluded.
pub const MAX_INT32: i64 = 0x7fff_ffff;

/// Largest value accepted by [`check_uint32`](crate::num::check_uint32).
pub const MAX_UINT32: i64 = 0xffff_ffff;

/// Largest byte length a single segment may reach.
pub const MAX_SEGMENT_LENGTH: u64 = 0xffff_ffff;
