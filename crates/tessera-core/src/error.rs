//! Error types for the buffer primitives.
//!
//! Two kinds live here: numeric-range failures from the checked conversions
//! and view derivation, and malformed-input failures from the UTF-8 decoder.
//! The arena's own error type lives in the arena crate.

use std::error::Error;
use std::fmt;

/// A value failed a checked numeric conversion or bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The value is outside the accepted signed 32-bit range.
    ///
    /// Note the accepted range is `-MAX_INT32..=MAX_INT32`, which excludes
    /// `i32::MIN`; see [`check_int32`](crate::num::check_int32).
    Int32Overflow {
        /// The offending value.
        value: i64,
    },
    /// The value is negative or above the unsigned 32-bit maximum.
    Uint32Overflow {
        /// The offending value.
        value: i64,
    },
    /// A byte size exceeds the maximum segment length.
    SizeOverflow {
        /// The requested size in bytes.
        size: u64,
        /// The maximum permitted size in bytes.
        max: u64,
    },
    /// A requested view window extends past the underlying storage.
    ViewOutOfBounds {
        /// Absolute byte offset of the requested window.
        offset: usize,
        /// Length of the requested window.
        len: usize,
        /// Capacity of the underlying storage.
        capacity: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32Overflow { value } => {
                write!(f, "32-bit signed integer overflow: {value}")
            }
            Self::Uint32Overflow { value } => {
                write!(f, "32-bit unsigned integer overflow: {value}")
            }
            Self::SizeOverflow { size, max } => {
                write!(f, "segment size {size} exceeds maximum {max}")
            }
            Self::ViewOutOfBounds {
                offset,
                len,
                capacity,
            } => {
                write!(
                    f,
                    "view range {offset}+{len} exceeds buffer capacity {capacity}"
                )
            }
        }
    }
}

impl Error for RangeError {}

/// A byte sequence failed UTF-8 decoding.
///
/// All variants are one kind of failure — malformed input — with enough
/// context to point at the offending byte. No best-effort substitution is
/// performed; the first malformed byte aborts the decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Utf8Error {
    /// A leading byte matches none of the four legal sequence shapes.
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the sequence start.
        offset: usize,
    },
    /// A continuation byte's top two bits are not `10`.
    InvalidContinuation {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },
    /// The input ends in the middle of a multi-byte sequence.
    Truncated {
        /// Byte offset of the sequence start.
        offset: usize,
    },
    /// The decoded code point is an unpaired surrogate half or lies past
    /// U+10FFFF.
    CodePointOutOfRange {
        /// The decoded code point value.
        value: u32,
        /// Byte offset of the sequence start.
        offset: usize,
    },
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLeadByte { byte, offset } => {
                write!(f, "invalid utf-8 lead byte 0x{byte:02x} at offset {offset}")
            }
            Self::InvalidContinuation { byte, offset } => {
                write!(
                    f,
                    "invalid utf-8 continuation byte 0x{byte:02x} at offset {offset}"
                )
            }
            Self::Truncated { offset } => {
                write!(f, "utf-8 sequence truncated at offset {offset}")
            }
            Self::CodePointOutOfRange { value, offset } => {
                write!(
                    f,
                    "utf-8 code point 0x{value:x} out of range at offset {offset}"
                )
            }
        }
    }
}

impl Error for Utf8Error {}
