//! Shape values that know how to rasterize themselves.
//!
//! [`Drawable`] maps each geometry type onto its free rasterizer function so
//! callers can keep a scene as a list of shapes.

use crate::color::Rgba;
use crate::geometry::{ClipRect, Ellipse, Line, Polygon, Rect};
use crate::surface::Surface;

use super::ellipse::fill_ellipse_centered;
use super::line::draw_line_bresenham;
use super::line_aa::draw_line_aa;
use super::polygon::fill_polygon;
use super::rect::fill_rectangle;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive onto a surface.
    fn draw(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>);

    /// Draw this primitive with anti-aliasing if supported.
    fn draw_aa(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>) {
        // Default to non-AA drawing
        self.draw(surface, color, clip);
    }
}

impl Drawable for Line {
    fn draw(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>) {
        draw_line_bresenham(surface, self.x1, self.y1, self.x2, self.y2, color, clip);
    }

    fn draw_aa(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>) {
        draw_line_aa(surface, self.x1, self.y1, self.x2, self.y2, color, clip);
    }
}

impl Drawable for Rect {
    fn draw(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>) {
        fill_rectangle(surface, self.x1, self.y1, self.x2, self.y2, color, clip);
    }
}

impl Drawable for Ellipse {
    fn draw(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>) {
        fill_ellipse_centered(
            surface,
            self.xc,
            self.yc,
            self.x_diameter,
            self.y_diameter,
            color,
            clip,
        );
    }
}

impl Drawable for Polygon {
    fn draw(&self, surface: &mut Surface<'_>, color: Rgba, clip: Option<ClipRect>) {
        fill_polygon(surface, &self.points, color, clip);
    }
}

// ============================================================================
// Tests
// ============================================================================
