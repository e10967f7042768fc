//! Image handles.
//!
//! Widgets store and forward these, they never decode them. The `Arc`s are
//! shared with whatever asset system loaded the image.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
    Bgra8,
    Alpha8,
}

/// An already-decoded bitmap descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Bitmap(Arc<Bitmap>),
    /// A path the rendering backend knows how to resolve.
    Path(Arc<str>),
}

impl ImageSource {
    pub fn path(path: impl Into<Arc<str>>) -> Self {
        Self::Path(path.into())
    }

    pub fn bitmap(bitmap: Bitmap) -> Self {
        Self::Bitmap(Arc::new(bitmap))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Bitmap(b) => write!(f, "bitmap {}x{}", b.width, b.height),
            ImageSource::Path(p) => write!(f, "{}", p),
        }
    }
}
