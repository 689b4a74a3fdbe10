//! Borrowed drawing surface over a caller-owned BGRA buffer.
//!
//! Every byte the rasterizer writes goes through [`Surface`]. The buffer
//! length is validated once at construction and every write is still a
//! checked slice access, so no geometry can reach memory outside the buffer.

use crate::color::Rgba;
use crate::dirty::DirtyPixels;
use crate::error::{Error, Result};
use crate::geometry::ClipRect;

/// A mutable view of a packed BGRA8888 pixel buffer.
///
/// Row-major, top-left origin, stride `width * 4`. The surface borrows the
/// buffer for as long as it lives and optionally records every written pixel
/// into a [`DirtyPixels`] list.
#[derive(Debug)]
pub struct Surface<'a> {
    pixels: &'a mut [u8],
    width: i32,
    height: i32,
    dirty: Option<&'a mut DirtyPixels>,
}

impl<'a> Surface<'a> {
    /// Wrap a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if a dimension is zero or does not
    /// fit in an `i32`, and [`Error::BufferTooSmall`] if `pixels` holds fewer
    /// than `width * height * 4` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use chart_raster::surface::Surface;
    ///
    /// let mut buf = vec![0u8; 8 * 4 * 4];
    /// let surface = Surface::new(&mut buf, 8, 4).unwrap();
    /// assert_eq!(surface.stride(), 32);
    /// ```
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let (width, height) = validate(pixels.len(), width, height)?;
        Ok(Self::from_parts(pixels, width, height, None))
    }

    /// Wrap a caller-owned buffer and record every write into `dirty`.
    ///
    /// # Errors
    ///
    /// Same as [`Surface::new`].
    pub fn with_dirty(
        pixels: &'a mut [u8],
        width: u32,
        height: u32,
        dirty: &'a mut DirtyPixels,
    ) -> Result<Self> {
        let (width, height) = validate(pixels.len(), width, height)?;
        Ok(Self::from_parts(pixels, width, height, Some(dirty)))
    }

    /// Build a surface from dimensions that were already validated.
    pub(crate) fn from_parts(
        pixels: &'a mut [u8],
        width: i32,
        height: i32,
        dirty: Option<&'a mut DirtyPixels>,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            dirty,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width as u32
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height as u32
    }

    /// Row stride in bytes.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// The whole surface as a clip rectangle.
    #[must_use]
    pub const fn bounds(&self) -> ClipRect {
        ClipRect::from_size(self.width, self.height)
    }

    /// Effective drawing bounds: the surface intersected with `clip`.
    ///
    /// `None` when nothing can be drawn.
    #[must_use]
    pub fn clip_bounds(&self, clip: Option<ClipRect>) -> Option<ClipRect> {
        match clip {
            Some(clip) => self.bounds().intersect(&clip),
            None => Some(self.bounds()),
        }
    }

    /// The underlying bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        self.pixels
    }

    /// Get the stored (premultiplied) color at a pixel.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.offset(x, y)?;
        let px = self.pixels.get(idx..idx + 4)?;
        Some(Rgba::from_bgra([px[0], px[1], px[2], px[3]]))
    }

    /// Set a pixel to `color` (premultiplied on write).
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.put(x, y, color.premultiplied().to_bgra());
    }

    /// Fill the whole surface with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let bgra = color.premultiplied().to_bgra();
        self.fill_span(0, self.width - 1, 0, bgra);
        for y in 1..self.height {
            self.replicate_row(0, y, 0, self.width);
        }
    }

    /// Byte offset of a pixel, `None` outside the surface.
    #[inline]
    pub(crate) fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Write one pixel.
    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, bgra: [u8; 4]) {
        let Some(idx) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.pixels.get_mut(idx..idx + 4) {
            px.copy_from_slice(&bgra);
            if let Some(dirty) = self.dirty.as_deref_mut() {
                dirty.record(idx);
            }
        }
    }

    /// Write the inclusive span `x0..=x1` on row `y`.
    ///
    /// The span must already be clamped to the surface.
    pub(crate) fn fill_span(&mut self, x0: i32, x1: i32, y: i32, bgra: [u8; 4]) {
        if x1 < x0 {
            return;
        }
        let (Some(start), Some(end)) = (self.offset(x0, y), self.offset(x1, y)) else {
            return;
        };
        let Some(row) = self.pixels.get_mut(start..end + 4) else {
            return;
        };
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&bgra);
        }
        if let Some(dirty) = self.dirty.as_deref_mut() {
            for idx in (start..=end).step_by(4) {
                dirty.record(idx);
            }
        }
    }

    /// Copy `len` pixels starting at column `x` from row `src_y` to row `dst_y`.
    pub(crate) fn replicate_row(&mut self, src_y: i32, dst_y: i32, x: i32, len: i32) {
        if len <= 0 {
            return;
        }
        let (Some(src), Some(dst), Some(_)) = (
            self.offset(x, src_y),
            self.offset(x, dst_y),
            self.offset(x + len - 1, dst_y),
        ) else {
            return;
        };
        let bytes = len as usize * 4;
        if src + bytes > self.pixels.len() || dst + bytes > self.pixels.len() {
            return;
        }
        self.pixels.copy_within(src..src + bytes, dst);
        if let Some(dirty) = self.dirty.as_deref_mut() {
            for idx in (dst..dst + bytes).step_by(4) {
                dirty.record(idx);
            }
        }
    }

    /// Replace a pixel by `f(current)`, working on packed `0xAARRGGBB` words.
    #[inline]
    pub(crate) fn update(&mut self, x: i32, y: i32, f: impl FnOnce(u32) -> u32) {
        let Some(idx) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.pixels.get_mut(idx..idx + 4) {
            let current = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&f(current).to_le_bytes());
            if let Some(dirty) = self.dirty.as_deref_mut() {
                dirty.record(idx);
            }
        }
    }
}

fn validate(len: usize, width: u32, height: u32) -> Result<(i32, i32)> {
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        log::debug!("rejecting surface {width}x{height}: dimensions exceed i32");
        return Err(Error::InvalidDimensions { width, height });
    };
    if w == 0 || h == 0 {
        log::debug!("rejecting surface {width}x{height}: zero dimension");
        return Err(Error::InvalidDimensions { width, height });
    }
    let required = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::InvalidDimensions { width, height })?;
    if len < required {
        log::debug!("rejecting surface {width}x{height}: {len} bytes, {required} required");
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok((w, h))
}
