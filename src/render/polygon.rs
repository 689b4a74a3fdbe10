//! Scanline polygon fill (odd-even rule).
//!
//! For every scanline between the polygon's lowest and highest vertex, the
//! crossings with each edge are collected, sorted, and filled pairwise.
//!
//! # References
//!
//! - Finley, D. R. (2007). "Efficient Polygon Fill Algorithm With C Code Sample."

use crate::color::Rgba;
use crate::geometry::ClipRect;
use crate::surface::Surface;

/// Fill a polygon given as a flat `[x0, y0, x1, y1, ...]` vertex list.
///
/// Edges join vertex `i` to `i + 1` only; the polygon is not closed for you,
/// so repeat the first vertex at the end for a closed shape. Regions are
/// filled by the odd-even rule. A trailing odd coordinate is ignored and
/// fewer than two vertices draw nothing.
pub fn fill_polygon(
    surface: &mut Surface<'_>,
    points: &[i32],
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let n = points.len() & !1;
    if n < 4 {
        log::trace!("polygon with {} vertices not filled", n / 2);
        return;
    }
    let Some(b) = surface.clip_bounds(clip) else {
        return;
    };
    let points = &points[..n];

    let (mut y_min, mut y_max) = (i32::MAX, i32::MIN);
    for &y in points.iter().skip(1).step_by(2) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let y_min = y_min.max(b.top);
    let y_max = y_max.min(b.bottom - 1);

    let bgra = color.premultiplied().to_bgra();
    let mut crossings: Vec<i32> = Vec::with_capacity(n / 2);

    for y in y_min..=y_max {
        scanline_crossings(points, y, &mut crossings);
        insertion_sort(&mut crossings);

        for span in crossings.chunks_exact(2) {
            let (x0, x1) = (span[0], span[1]);
            if x1 >= b.left && x0 < b.right {
                surface.fill_span(x0.max(b.left), x1.min(b.right - 1), y, bgra);
            }
        }
    }
}

/// Fill the triangle with the given corners.
pub fn fill_triangle(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    fill_polygon(surface, &[x1, y1, x2, y2, x3, y3, x1, y1], color, clip);
}

/// Collect the x positions where the edges of `points` cross scanline `y`.
///
/// An edge counts when `y` lies in `(min_y, max_y]` of its endpoints, so a
/// vertex shared by two edges is counted once.
pub(crate) fn scanline_crossings(points: &[i32], y: i32, out: &mut Vec<i32>) {
    out.clear();
    let mut vertices = points.chunks_exact(2);
    let Some(first) = vertices.next() else {
        return;
    };
    let (mut xi, mut yi) = (first[0], first[1]);

    for v in vertices {
        let (xj, yj) = (v[0], v[1]);
        if (yi < y && yj >= y) || (yj < y && yi >= y) {
            // xi + (y - yi) * (xj - xi) / (yj - yi) as one quotient, so the
            // division truncates toward zero exactly once
            let den = i128::from(yj) - i128::from(yi);
            let num = i128::from(xi) * den
                + (i128::from(y) - i128::from(yi)) * (i128::from(xj) - i128::from(xi));
            out.push((num / den) as i32);
        }
        xi = xj;
        yi = yj;
    }
}

/// Sort in place; crossing lists are short, where insertion sort wins.
fn insertion_sort(values: &mut [i32]) {
    for i in 1..values.len() {
        let t = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > t {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = t;
    }
}
