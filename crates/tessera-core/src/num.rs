//! Checked numeric conversions and word-alignment rounding.

use crate::error::RangeError;
use crate::limits::{MAX_INT32, MAX_SEGMENT_LENGTH, MAX_UINT32, WORD_SIZE};

/// Validate that a value fits the signed 32-bit range used by the format.
///
/// The accepted range is `-MAX_INT32..=MAX_INT32`, symmetric around the
/// positive bound. This deliberately excludes `i32::MIN`: downstream
/// consumers of the format depend on the narrower range, so the asymmetry
/// is part of the contract rather than a bug to fix.
pub fn check_int32(value: i64) -> Result<i64, RangeError> {
    if value > MAX_INT32 || value < -MAX_INT32 {
        return Err(RangeError::Int32Overflow { value });
    }
    Ok(value)
}

/// Validate that a value fits the unsigned 32-bit range used by the format.
pub fn check_uint32(value: i64) -> Result<i64, RangeError> {
    if value < 0 || value > MAX_UINT32 {
        return Err(RangeError::Uint32Overflow { value });
    }
    Ok(value)
}

/// Validate that a byte size does not exceed the maximum segment length.
pub fn check_segment_size(size: u64) -> Result<u64, RangeError> {
    if size > MAX_SEGMENT_LENGTH {
        return Err(RangeError::SizeOverflow {
            size,
            max: MAX_SEGMENT_LENGTH,
        });
    }
    Ok(size)
}

/// Round a size up to the next multiple of the word size (8 bytes).
///
/// Constant-time bit mask, no division. Sizes already on a word boundary
/// are returned unchanged.
pub const fn pad_to_word(size: usize) -> usize {
    (size + (WORD_SIZE - 1)) & !(WORD_SIZE - 1)
}

/// Checked form of [`pad_to_word`].
///
/// Returns `None` when the rounded size would not fit in the address
/// space, i.e. for sizes within seven bytes of `usize::MAX`.
pub const fn checked_pad_to_word(size: usize) -> Option<usize> {
    match size.checked_add(WORD_SIZE - 1) {
        Some(n) => Some(n & !(WORD_SIZE - 1)),
        None => None,
    }
}
