//! Tessera: the storage core of a zero-copy binary message format.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // Build a message's backing storage and grow it as writes land.
//! let mut arena = SingleSegmentArena::new(&ArenaConfig::with_initial_size(64));
//! let mut segments = SegmentMap::new();
//!
//! let (id, buffer) = arena.allocate(128, &segments);
//! segments.insert(id, buffer.clone());
//! assert_eq!(id, SegmentId(0));
//! assert!(buffer.len() >= 64 + 128);
//!
//! // Slice a field out of the segment without copying.
//! let view = ByteView::full(buffer).sub_view(8, Some(16)).unwrap();
//! assert_eq!(view.len(), 16);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Buffers, views, checked conversions, UTF-8 codec, diagnostics |
//! | [`arena`] | `tessera-arena` | The `Arena` growth trait and `SingleSegmentArena` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Buffer primitives (`tessera-core`).
///
/// Raw byte storage ([`types::ByteBuffer`], [`types::ByteView`]), checked
/// numeric conversions, word alignment, the UTF-8 codec, and the
/// diagnostic formatter.
pub use tessera_core as types;

/// Segment allocation and growth (`tessera-arena`).
///
/// The [`arena::Arena`] trait and the single-segment implementation.
pub use tessera_arena as arena;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    pub use tessera_arena::{Arena, ArenaConfig, ArenaError, SegmentMap, SingleSegmentArena};
    pub use tessera_core::{
        decode_utf8, encode_utf8, pad_to_word, ByteBuffer, ByteView, RangeError, SegmentId,
        Utf8Error,
    };
}
