//! # chart-raster
//!
//! Software rasterizer for chart primitives on packed BGRA pixel buffers.
//!
//! Lines (aliased and anti-aliased), rectangles, ellipses and polygons are
//! drawn with integer and fixed-point arithmetic straight into a caller-owned
//! buffer or an owned [`Framebuffer`](framebuffer::Framebuffer). Every draw
//! call takes an optional [`ClipRect`](geometry::ClipRect) and can record the
//! pixels it touched into a [`DirtyPixels`](dirty::DirtyPixels) list so an
//! overlay can be erased later.
//!
//! ## Quick Start
//!
//! ```rust
//! use chart_raster::prelude::*;
//!
//! let mut buf = vec![0u8; 64 * 64 * 4];
//! let mut dirty = DirtyPixels::new();
//! {
//!     let mut surface = Surface::with_dirty(&mut buf, 64, 64, &mut dirty)?;
//!     fill_rectangle(&mut surface, 8, 8, 56, 56, Rgba::WHITE, None);
//!     draw_line_aa(&mut surface, 0, 63, 63, 0, Rgba::BLUE, None);
//! }
//! assert!(!dirty.is_empty());
//! # Ok::<(), chart_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `png` (default): PNG output via [`output::PngEncoder`]
//! - `serde`: `Serialize`/`Deserialize` for colors and shapes
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Gupta, S., & Sproull, R. F. (1981). "Filtering edges for gray-scale displays." SIGGRAPH '81.
//! - Kennedy, J. (1996). "A Fast Bresenham Type Algorithm For Drawing Ellipses."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel math converts between signed coordinates and unsigned offsets
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Colors and premultiplied alpha.
pub mod color;

/// Dirty-pixel recording for overlay erase.
pub mod dirty;

/// Owned pixel buffer.
pub mod framebuffer;

/// Clip rectangles and shape values.
pub mod geometry;

/// Borrowed drawing surface.
pub mod surface;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Output encoders (PNG).
#[cfg(feature = "png")]
#[cfg_attr(docsrs, doc(cfg(feature = "png")))]
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chart-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use chart_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::dirty::DirtyPixels;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipRect, Ellipse, Line, Polygon, Rect};
    #[cfg(feature = "png")]
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        draw_ellipse_centered, draw_line, draw_line_aa, draw_line_bresenham, draw_polyline,
        draw_rectangle, fill_ellipse, fill_ellipse_centered, fill_polygon, fill_rectangle,
        fill_triangle, Drawable,
    };
    pub use crate::surface::Surface;
}
