//! Buffer primitives for the Tessera zero-copy message format.
//!
//! This is the leaf crate with zero internal dependencies. It provides the
//! low-level building blocks every higher layer (arena, accessors, encoders)
//! is built from:
//!
//! - [`ByteBuffer`] / [`ByteView`] — shared fixed-size byte storage and
//!   zero-copy windows over it
//! - checked numeric conversions and word-alignment rounding ([`num`])
//! - a hand-rolled UTF-8 codec ([`text`])
//! - a printf-style diagnostic formatter ([`diag`]), never used on a data
//!   path
//!
//! All operations here are pure transformations of their inputs; the only
//! mutable state in the storage core lives in the arena crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod diag;
pub mod error;
pub mod id;
pub mod limits;
pub mod num;
pub mod text;

// Public re-exports for the primary API surface.
pub use buffer::{buffer_to_hex, copy_bytes, memcpy, ByteBuffer, ByteView};
pub use diag::{diag_format, DiagArg};
pub use error::{RangeError, Utf8Error};
pub use id::SegmentId;
pub use num::{check_int32, check_segment_size, check_uint32, checked_pad_to_word, pad_to_word};
pub use text::{decode_utf8, encode_utf8};
