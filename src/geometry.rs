//! Geometric primitives for rasterization.
//!
//! Integer pixel geometry: the clip rectangle and the shape types consumed by
//! [`Drawable`](crate::render::Drawable).

/// Axis-aligned clip rectangle in pixels.
///
/// Half-open: a pixel `(x, y)` is inside when `left <= x < right` and
/// `top <= y < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect {
    /// First row inside the clip.
    pub top: i32,
    /// First row below the clip.
    pub bottom: i32,
    /// First column inside the clip.
    pub left: i32,
    /// First column right of the clip.
    pub right: i32,
}

impl ClipRect {
    /// Create a clip rectangle from its edges.
    #[must_use]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Clip rectangle covering a `width x height` surface.
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, height, 0, width)
    }

    /// Width in pixels (zero when inverted).
    #[must_use]
    pub const fn width(&self) -> i32 {
        if self.right > self.left {
            self.right - self.left
        } else {
            0
        }
    }

    /// Height in pixels (zero when inverted).
    #[must_use]
    pub const fn height(&self) -> i32 {
        if self.bottom > self.top {
            self.bottom - self.top
        } else {
            0
        }
    }

    /// True when no pixel lies inside.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Check whether a pixel lies inside.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Overlap of two rectangles, `None` when they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let r = Self::new(
            self.top.max(other.top),
            self.bottom.min(other.bottom),
            self.left.max(other.left),
            self.right.min(other.right),
        );
        (!r.is_empty()).then_some(r)
    }
}

/// A line segment between two integer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Start x.
    pub x1: i32,
    /// Start y.
    pub y1: i32,
    /// End x.
    pub x2: i32,
    /// End y.
    pub y2: i32,
}

impl Line {
    /// Create a line from coordinates.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// True when both endpoints coincide.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

/// A rectangle given by two corners, filled as `[x1, x2) x [y1, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// First corner x.
    pub x1: i32,
    /// First corner y.
    pub y1: i32,
    /// Second corner x.
    pub x2: i32,
    /// Second corner y.
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from two corners.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }
}

/// An axis-aligned ellipse around a center, sized by its diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// Center x.
    pub xc: i32,
    /// Center y.
    pub yc: i32,
    /// Horizontal diameter.
    pub x_diameter: i32,
    /// Vertical diameter.
    pub y_diameter: i32,
}

impl Ellipse {
    /// Create an ellipse from its center and diameters.
    #[must_use]
    pub const fn new(xc: i32, yc: i32, x_diameter: i32, y_diameter: i32) -> Self {
        Self {
            xc,
            yc,
            x_diameter,
            y_diameter,
        }
    }

    /// Create a circle from its center and diameter.
    #[must_use]
    pub const fn circle(xc: i32, yc: i32, diameter: i32) -> Self {
        Self::new(xc, yc, diameter, diameter)
    }
}

/// A polygon stored as a flat `[x0, y0, x1, y1, ...]` vertex list.
///
/// Edges join consecutive vertices only; repeat the first vertex at the end
/// for a closed outline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    /// Alternating x and y coordinates.
    pub points: Vec<i32>,
}

impl Polygon {
    /// Create an empty polygon.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon from a flat coordinate list.
    #[must_use]
    pub fn from_points(points: Vec<i32>) -> Self {
        Self { points }
    }

    /// Append a vertex.
    pub fn push(&mut self, x: i32, y: i32) {
        self.points.push(x);
        self.points.push(y);
    }

    /// Append a copy of the first vertex unless the outline is already closed.
    pub fn close(&mut self) {
        if self.points.len() >= 4 {
            let (x0, y0) = (self.points[0], self.points[1]);
            let n = self.points.len() & !1;
            if self.points[n - 2] != x0 || self.points[n - 1] != y0 {
                self.push(x0, y0);
            }
        }
    }

    /// Number of complete vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len() / 2
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
