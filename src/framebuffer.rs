//! Owned BGRA pixel buffer.
//!
//! [`Framebuffer`] owns a packed BGRA8888 buffer and hands out [`Surface`]
//! views for drawing. Use it when the crate should manage the memory; wrap a
//! caller-owned buffer with [`Surface::new`] otherwise.

use crate::color::Rgba;
use crate::dirty::DirtyPixels;
use crate::error::{Error, Result};
use crate::surface::Surface;

/// Framebuffer for rasterizing chart primitives.
///
/// Pixels are stored premultiplied as `[B, G, R, A]`, row-major with a stride
/// of exactly `width * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// BGRA pixels in row-major order.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new transparent framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero, does
    /// not fit in an `i32`, or the byte size overflows `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use chart_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.stride(), 3200);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let fits = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        let size = match size {
            Some(size) if fits && size > 0 => size,
            _ => {
                log::debug!("rejecting framebuffer {width}x{height}");
                return Err(Error::InvalidDimensions { width, height });
            }
        };

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes).
    #[must_use]
    pub const fn stride(&self) -> usize {
        (self.width as usize) * 4
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw BGRA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the raw BGRA bytes mutably.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride();
        self.pixels.get(start..start + self.stride())
    }

    /// Borrow the buffer as a drawing surface.
    pub fn surface(&mut self) -> Surface<'_> {
        Surface::from_parts(&mut self.pixels, self.width as i32, self.height as i32, None)
    }

    /// Borrow the buffer as a drawing surface that records writes into `dirty`.
    pub fn surface_with_dirty<'a>(&'a mut self, dirty: &'a mut DirtyPixels) -> Surface<'a> {
        Surface::from_parts(
            &mut self.pixels,
            self.width as i32,
            self.height as i32,
            Some(dirty),
        )
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.surface().clear(color);
    }

    /// Get the stored (premultiplied) color at a pixel.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * self.stride() + (x as usize) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some(Rgba::from_bgra([px[0], px[1], px[2], px[3]]))
    }

    /// Set the color at a pixel (premultiplied on write).
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.surface().set_pixel(x as i32, y as i32, color);
    }

    /// Convert to straight-alpha RGBA bytes, as image encoders expect.
    #[must_use]
    pub fn to_rgba_pixels(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len());
        for px in self.pixels.chunks_exact(4) {
            let color = Rgba::from_bgra([px[0], px[1], px[2], px[3]]).unpremultiplied();
            out.extend_from_slice(&color.to_array());
        }
        out
    }
}
