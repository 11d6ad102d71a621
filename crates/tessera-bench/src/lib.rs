//! Benchmark inputs and helpers for the Tessera storage core.
//!
//! Provides deterministic sample data so benchmark runs are comparable
//! across machines and commits:
//!
//! - [`sample_text`]: mixed-plane text of a requested byte budget
//! - [`patterned_buffer`]: a buffer filled with a non-trivial byte pattern

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::ByteBuffer;

/// Build a text sample of roughly `target_bytes` UTF-8 bytes mixing ASCII,
/// two-byte, three-byte, and four-byte sequences.
///
/// Deterministic, so codec benchmarks see the same byte distribution on
/// every run.
pub fn sample_text(target_bytes: usize) -> String {
    const CHUNK: &str = "status: caf\u{e9} \u{263A} ok \u{1F680} latency 12ms\n";
    let mut out = String::with_capacity(target_bytes + CHUNK.len());
    while out.len() < target_bytes {
        out.push_str(CHUNK);
    }
    out
}

/// Build a buffer of `len` bytes filled with a position-dependent pattern.
///
/// The pattern is cheap to verify after a copy and defeats any
/// all-zero-page shortcuts the allocator might take.
pub fn patterned_buffer(len: usize) -> ByteBuffer {
    let bytes: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    ByteBuffer::from_vec(bytes)
}
