//! Shared byte buffers, zero-copy views, and bulk copies.
//!
//! A [`ByteBuffer`] is a contiguous block of raw bytes behind a shared
//! handle: cloning the handle shares the allocation, it never copies bytes.
//! Buffers are fixed-capacity — growth in the storage core is always
//! "allocate a bigger buffer, copy forward" (see the arena crate), never an
//! in-place resize. A [`ByteView`] is an (offset, len) window over a buffer,
//! the unit the accessor layers slice fields out of.
//!
//! The handle is `Rc`-based and deliberately not `Send`: the storage core is
//! single-writer by contract, and borrow conflicts (writing through a handle
//! while another borrow is live) surface as panics at the misuse site.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::error::RangeError;

/// A fixed-capacity block of raw bytes behind a shared handle.
///
/// Cloning shares the underlying allocation; use
/// [`ByteBuffer::same_allocation`] to test identity. Once created a buffer
/// never changes length.
#[derive(Clone)]
pub struct ByteBuffer {
    inner: Rc<RefCell<Box<[u8]>>>,
}

impl ByteBuffer {
    /// Allocate a zero-filled buffer of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(vec![0u8; len].into_boxed_slice())),
        }
    }

    /// Wrap existing bytes in a buffer handle.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(bytes.into_boxed_slice())),
        }
    }

    /// Byte length of the buffer. Fixed for the lifetime of the allocation.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the buffer has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the buffer contents for reading.
    ///
    /// # Panics
    ///
    /// Panics if a mutable borrow of the same buffer is live.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.inner.borrow(), |b| &b[..])
    }

    /// Borrow the buffer contents for writing.
    ///
    /// # Panics
    ///
    /// Panics if any other borrow of the same buffer is live.
    pub fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.inner.borrow_mut(), |b| &mut b[..])
    }

    /// Whether two handles refer to the same allocation.
    ///
    /// This is identity, not content equality: after the arena grows a
    /// segment, the old handle and the new one compare unequal even though
    /// the new buffer starts with the old one's bytes.
    pub fn same_allocation(&self, other: &ByteBuffer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer {{ len: {} }}", self.len())
    }
}

/// An (offset, len) window over a [`ByteBuffer`].
///
/// Views are cheap to clone and never copy bytes. Deriving a sub-view
/// re-slices the same storage; the underlying buffer stays alive for as
/// long as any view over it does.
#[derive(Clone, Debug)]
pub struct ByteView {
    buf: ByteBuffer,
    offset: usize,
    len: usize,
}

impl ByteView {
    /// A view covering the whole buffer.
    pub fn full(buf: ByteBuffer) -> Self {
        let len = buf.len();
        Self {
            buf,
            offset: 0,
            len,
        }
    }

    /// A view over `len` bytes starting at `offset` within `buf`.
    ///
    /// Fails if the window extends past the buffer's capacity.
    pub fn new(buf: ByteBuffer, offset: usize, len: usize) -> Result<Self, RangeError> {
        let capacity = buf.len();
        match offset.checked_add(len) {
            Some(end) if end <= capacity => Ok(Self { buf, offset, len }),
            _ => Err(RangeError::ViewOutOfBounds {
                offset,
                len,
                capacity,
            }),
        }
    }

    /// Derive a new view over the same storage, shifted by `rel_offset`
    /// bytes and with the given length.
    ///
    /// `len = None` means "to the end of this view". Fails if the requested
    /// window would exceed the underlying buffer's bounds.
    pub fn sub_view(&self, rel_offset: usize, len: Option<usize>) -> Result<ByteView, RangeError> {
        let capacity = self.buf.len();
        let out_of_bounds = || RangeError::ViewOutOfBounds {
            offset: self.offset.saturating_add(rel_offset),
            len: len.unwrap_or(0),
            capacity,
        };
        if rel_offset > self.len {
            return Err(out_of_bounds());
        }
        let offset = self.offset + rel_offset;
        let len = len.unwrap_or(self.len - rel_offset);
        ByteView::new(self.buf.clone(), offset, len)
    }

    /// Absolute byte offset of this view within its buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of this view in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buffer this view windows into.
    pub fn buffer(&self) -> &ByteBuffer {
        &self.buf
    }

    /// Borrow the viewed bytes for reading.
    ///
    /// # Panics
    ///
    /// Panics if a mutable borrow of the underlying buffer is live.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.buf.bytes(), |b| &b[self.offset..self.offset + self.len])
    }

    /// Borrow the viewed bytes for writing.
    ///
    /// # Panics
    ///
    /// Panics if any other borrow of the underlying buffer is live.
    pub fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.buf.bytes_mut(), |b| {
            &mut b[self.offset..self.offset + self.len]
        })
    }
}

/// Copy `n` bytes from `src` into the front of `dst`.
///
/// `n = None` copies the full source. The caller must ensure the
/// destination is large enough; the only bounds checking is the slice
/// indexing itself.
pub fn copy_bytes(dst: &mut [u8], src: &[u8], n: Option<usize>) {
    let n = n.unwrap_or(src.len());
    dst[..n].copy_from_slice(&src[..n]);
}

/// Copy `n` bytes from one view into another, starting at each view's own
/// base offset.
///
/// `n = None` copies the full source view. Views over the same underlying
/// buffer are staged through an intermediate copy, so windows of one
/// segment can be copied between each other; if the windows overlap, the
/// destination receives the source bytes as they were before the copy
/// started.
///
/// # Panics
///
/// Panics if either view is too short for `n` bytes.
pub fn memcpy(dst: &ByteView, src: &ByteView, n: Option<usize>) {
    let n = n.unwrap_or(src.len());
    if dst.buffer().same_allocation(src.buffer()) {
        let staged = src.bytes()[..n].to_vec();
        copy_bytes(&mut dst.bytes_mut(), &staged, Some(n));
    } else {
        copy_bytes(&mut dst.bytes_mut(), &src.bytes(), Some(n));
    }
}

/// Render a byte slice as a bracketed hex dump, e.g. `[de ad be ef]`.
///
/// Diagnostics only.
pub fn buffer_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3 + 2);
    out.push('[');
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02x}");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_buffer_is_zero_filled() {
        let buf = ByteBuffer::zeroed(16);
        assert_eq!(buf.len(), 16);
        assert!(buf.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clones_share_the_allocation() {
        let a = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
        let b = a.clone();
        assert!(a.same_allocation(&b));
        b.bytes_mut()[0] = 9;
        assert_eq!(a.bytes()[0], 9);
    }

    #[test]
    fn distinct_buffers_are_not_the_same_allocation() {
        let a = ByteBuffer::zeroed(8);
        let b = ByteBuffer::zeroed(8);
        assert!(!a.same_allocation(&b));
    }

    #[test]
    fn full_view_covers_buffer() {
        let view = ByteView::full(ByteBuffer::from_vec(vec![1, 2, 3]));
        assert_eq!(view.offset(), 0);
        assert_eq!(view.len(), 3);
        assert_eq!(&*view.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn sub_view_shares_storage() {
        let buf = ByteBuffer::from_vec(vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let view = ByteView::full(buf.clone());
        let sub = view.sub_view(2, Some(4)).unwrap();
        assert_eq!(&*sub.bytes(), &[2, 3, 4, 5]);

        // Writes through the sub-view land in the shared buffer.
        sub.bytes_mut()[0] = 0xaa;
        assert_eq!(buf.bytes()[2], 0xaa);
    }

    #[test]
    fn sub_view_without_len_runs_to_the_end() {
        let view = ByteView::full(ByteBuffer::from_vec(vec![0, 1, 2, 3, 4]));
        let sub = view.sub_view(3, None).unwrap();
        assert_eq!(&*sub.bytes(), &[3, 4]);
    }

    #[test]
    fn nested_sub_view_offsets_accumulate() {
        let view = ByteView::full(ByteBuffer::from_vec((0..16).collect()));
        let sub = view.sub_view(4, Some(8)).unwrap();
        let subsub = sub.sub_view(2, Some(2)).unwrap();
        assert_eq!(subsub.offset(), 6);
        assert_eq!(&*subsub.bytes(), &[6, 7]);
    }

    #[test]
    fn sub_view_out_of_bounds_fails() {
        let view = ByteView::full(ByteBuffer::zeroed(8));
        assert!(view.sub_view(0, Some(9)).is_err());
        assert!(view.sub_view(9, None).is_err());
        assert!(matches!(
            view.sub_view(4, Some(5)),
            Err(RangeError::ViewOutOfBounds { capacity: 8, .. })
        ));
    }

    #[test]
    fn copy_bytes_full_and_partial() {
        let src = [1u8, 2, 3, 4];
        let mut dst = [0u8; 8];
        copy_bytes(&mut dst, &src, None);
        assert_eq!(&dst[..4], &[1, 2, 3, 4]);

        let mut dst2 = [0u8; 8];
        copy_bytes(&mut dst2, &src, Some(2));
        assert_eq!(&dst2, &[1, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn memcpy_between_views() {
        let src = ByteView::full(ByteBuffer::from_vec(vec![9, 8, 7]));
        let dst_buf = ByteBuffer::zeroed(8);
        let dst = ByteView::full(dst_buf.clone()).sub_view(4, None).unwrap();
        memcpy(&dst, &src, None);
        assert_eq!(&*dst_buf.bytes(), &[0, 0, 0, 0, 9, 8, 7, 0]);
    }

    #[test]
    fn memcpy_within_one_buffer() {
        let buf = ByteBuffer::from_vec(vec![1, 2, 3, 4, 0, 0, 0, 0]);
        let full = ByteView::full(buf.clone());
        let src = full.sub_view(0, Some(4)).unwrap();
        let dst = full.sub_view(4, Some(4)).unwrap();
        memcpy(&dst, &src, None);
        assert_eq!(&*buf.bytes(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn memcpy_overlapping_windows_snapshot_the_source() {
        let buf = ByteBuffer::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let full = ByteView::full(buf.clone());
        let src = full.sub_view(0, Some(4)).unwrap();
        let dst = full.sub_view(2, Some(4)).unwrap();
        memcpy(&dst, &src, None);
        assert_eq!(&*buf.bytes(), &[1, 2, 1, 2, 3, 4, 7, 8]);
    }

    #[test]
    fn hex_dump_format() {
        assert_eq!(buffer_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "[de ad be ef]");
        assert_eq!(buffer_to_hex(&[]), "[]");
        assert_eq!(buffer_to_hex(&[0x05]), "[05]");
    }
}
