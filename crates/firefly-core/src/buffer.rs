//! Borrowed views over caller-owned memory.
//!
//! The SDK never allocates, copies, or frees the memory behind these types;
//! the host reads exactly `size()` bytes and does not keep the pointer past
//! the call.

use crate::graphics::{Point, Size};

/// A non-owning view over a region of guest memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buffer<'a> {
    bytes: &'a [u8],
}

/// File contents loaded into caller memory.
pub type File<'a> = Buffer<'a>;

/// An image in the host's image format.
pub type Image<'a> = Buffer<'a>;

impl<'a> Buffer<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn size(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Select a rectangular window of this image.
    pub const fn sub(self, point: Point, size: Size) -> SubImage<'a> {
        SubImage {
            image: self,
            point,
            size,
        }
    }
}

impl<'a> From<&'a [u8]> for Buffer<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Buffer<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Buffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

/// A rectangular window into an [`Image`]. The window is not checked
/// against the image bounds here; the host clips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubImage<'a> {
    pub image: Image<'a>,
    /// Upper-left corner of the window.
    pub point: Point,
    pub size: Size,
}
