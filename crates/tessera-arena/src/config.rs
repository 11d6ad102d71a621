//! Arena configuration parameters.

use tessera_core::pad_to_word;

/// Configuration for segment allocation.
///
/// All values are fixed at construction. Sizes are padded up to a word
/// boundary when the arena is built, so an odd configured size never
/// produces a misaligned segment.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Size in bytes of the first segment buffer.
    ///
    /// Default: 4096.
    pub initial_buffer_size: usize,

    /// Smallest amount a growth step may add, in bytes.
    ///
    /// Allocation requests below this floor still grow the segment by this
    /// much, so a run of tiny allocations does not degenerate into a
    /// reallocation per request. Default: 4096.
    pub min_growth: usize,
}

impl ArenaConfig {
    /// Default size of the first segment buffer.
    pub const DEFAULT_BUFFER_SIZE: usize = 4096;

    /// Default growth floor.
    pub const MIN_SINGLE_SEGMENT_GROWTH: usize = 4096;

    /// Create a config with the given initial buffer size and the default
    /// growth floor.
    pub fn with_initial_size(initial_buffer_size: usize) -> Self {
        Self {
            initial_buffer_size,
            min_growth: Self::MIN_SINGLE_SEGMENT_GROWTH,
        }
    }

    /// The initial buffer size rounded up to a word boundary.
    pub fn padded_initial_size(&self) -> usize {
        pad_to_word(self.initial_buffer_size)
    }

    /// The growth floor rounded up to a word boundary.
    pub fn padded_min_growth(&self) -> usize {
        pad_to_word(self.min_growth)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            initial_buffer_size: Self::DEFAULT_BUFFER_SIZE,
            min_growth: Self::MIN_SINGLE_SEGMENT_GROWTH,
        }
    }
}
