//! Segment allocation and growth for Tessera messages.
//!
//! A message's backing storage is a set of segments, each a contiguous
//! [`ByteBuffer`](tessera_core::ByteBuffer). The [`Arena`] trait is the
//! growth abstraction the message-building layer calls when a segment runs
//! out of room; [`SingleSegmentArena`] is the provided implementation, which
//! keeps the whole message in one segment and grows it by reallocating and
//! copying forward.
//!
//! # Growth model
//!
//! Growth is strictly additive. A segment never shrinks, space is never
//! reclaimed, and an allocation request always produces a buffer at least
//! as large as the current one plus the request. Old buffer handles stay
//! valid as allocations but go stale as views of the message: after growth
//! the arena's current buffer is a new allocation.
//!
//! ```
//! use tessera_arena::{Arena, ArenaConfig, SegmentMap, SingleSegmentArena};
//!
//! let mut arena = SingleSegmentArena::new(&ArenaConfig::default());
//! let segments = SegmentMap::new();
//! let (id, buffer) = arena.allocate(16, &segments);
//! assert_eq!(id.0, 0);
//! assert!(buffer.len() >= 16);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod map;
pub mod single;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use map::SegmentMap;
pub use single::SingleSegmentArena;

pub use tessera_core::SegmentId;
