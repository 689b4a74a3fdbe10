//! Rasterization of chart primitives onto a [`Surface`](crate::surface::Surface).
//!
//! Every function takes the surface, integer pixel coordinates, a color and
//! an optional [`ClipRect`](crate::geometry::ClipRect). Nothing is ever
//! written outside the surface or the clip rectangle, whatever the input.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer 1-pixel lines
//! - **DDA Line**: 8-bit fixed-point 1-pixel lines with long-axis pre-clipping
//! - **Gupta-Sproull Line**: 3-pixel anti-aliased lines, 10-bit fixed point
//! - **Midpoint Ellipse**: filled and outlined axis-aligned ellipses
//! - **Scanline Polygon**: odd-even rule fill
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Gupta, S., & Sproull, R. F. (1981). "Filtering edges for gray-scale displays."
//! - Kennedy, J. (1996). "A Fast Bresenham Type Algorithm For Drawing Ellipses."

mod ellipse;
mod line;
mod line_aa;
mod polygon;
mod primitives;
mod rect;

pub use ellipse::{draw_ellipse_centered, fill_ellipse, fill_ellipse_centered};
pub use line::{draw_line, draw_line_bresenham, draw_polyline};
pub use line_aa::{alpha_blend_on_premultiplied, draw_line_aa};
pub use polygon::{fill_polygon, fill_triangle};
pub use primitives::Drawable;
pub use rect::{draw_rectangle, fill_rectangle};
