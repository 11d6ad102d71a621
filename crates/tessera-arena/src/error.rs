//! Arena error types.

use std::error::Error;
use std::fmt;

use tessera_core::SegmentId;

/// Errors from segment lookup and allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The requested segment id does not exist in this arena.
    ///
    /// A single-segment arena only ever has segment 0, so any other id
    /// produces this error.
    InvalidSegmentId {
        /// The id that was requested.
        id: SegmentId,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSegmentId { id } => {
                write!(f, "segment id {id} does not exist in this arena")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_id() {
        let err = ArenaError::InvalidSegmentId { id: SegmentId(3) };
        assert_eq!(err.to_string(), "segment id 3 does not exist in this arena");
    }
}
