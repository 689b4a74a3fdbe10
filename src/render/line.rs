//! Aliased line rasterization.
//!
//! Two 1-pixel line walkers: an integer Bresenham walker and a fixed-point
//! DDA walker that pre-clips the long axis to the drawable range.

use crate::color::Rgba;
use crate::geometry::ClipRect;
use crate::surface::Surface;

// ============================================================================
// Bresenham
// ============================================================================

/// Draw a line using Bresenham's algorithm.
///
/// The endpoints are walked in the positive direction of the major axis
/// regardless of argument order, so swapping them yields the same pixels.
/// Pixels outside the surface or `clip` are skipped one by one.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
pub fn draw_line_bresenham(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let Some(bounds) = surface.clip_bounds(clip) else {
        return;
    };
    if x1.max(x2) < bounds.left
        || x1.min(x2) >= bounds.right
        || y1.max(y2) < bounds.top
        || y1.min(y2) >= bounds.bottom
    {
        log::trace!("bresenham line ({x1},{y1})-({x2},{y2}) outside clip");
        return;
    }

    let bgra = color.premultiplied().to_bgra();

    let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
    let (mut x2, mut y2) = (i64::from(x2), i64::from(y2));
    let x_major = (x2 - x1).abs() > (y2 - y1).abs();
    if (x_major && x1 > x2) || (!x_major && y1 > y2) {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut y1, &mut y2);
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let incx = (x2 - x1).signum();
    let incy = (y2 - y1).signum();

    // Parallel step, diagonal step, short and long deltas
    let (pdx, pdy, es, el) = if x_major {
        (incx, 0, dy, dx)
    } else {
        (0, incy, dx, dy)
    };

    // Only steps whose major coordinate is visible are walked
    let (major, lo, hi) = if x_major {
        (x1, i64::from(bounds.left), i64::from(bounds.right) - 1)
    } else {
        (y1, i64::from(bounds.top), i64::from(bounds.bottom) - 1)
    };
    let first = (lo - major).max(0);
    let last = (hi - major).min(el);
    if first > last {
        return;
    }

    let mut x = x1;
    let mut y = y1;
    let mut error = el >> 1;
    if first > 0 {
        // Closed form of `first` steps: error stays in [0, el)
        let acc = i128::from(error) - i128::from(first) * i128::from(es);
        let diagonal = (-acc.div_euclid(i128::from(el))) as i64;
        error = acc.rem_euclid(i128::from(el)) as i64;
        x += (first - diagonal) * pdx + diagonal * incx;
        y += (first - diagonal) * pdy + diagonal * incy;
    }

    for step in first..=last {
        plot(surface, &bounds, x, y, bgra);
        if step == last {
            break;
        }
        error -= es;
        if error < 0 {
            error += el;
            x += incx;
            y += incy;
        } else {
            x += pdx;
            y += pdy;
        }
    }
}

#[inline]
fn plot(surface: &mut Surface<'_>, bounds: &ClipRect, x: i64, y: i64, bgra: [u8; 4]) {
    if x >= i64::from(bounds.left)
        && x < i64::from(bounds.right)
        && y >= i64::from(bounds.top)
        && y < i64::from(bounds.bottom)
    {
        surface.put(x as i32, y as i32, bgra);
    }
}

// ============================================================================
// Fixed-point DDA
// ============================================================================

/// Draw a line with a fixed-point DDA walk (8 fractional bits).
///
/// The long axis advances one pixel per step; the short axis position is
/// accumulated as `(start << 8) + ((delta_short << 8) / delta_long) * step`
/// and read back with `>> 8`. The long axis is clipped before walking, with
/// the accumulator advanced to the same lattice point, so clipping never
/// changes which pixels a visible part of the line lands on.
///
/// A zero-length line draws nothing.
pub fn draw_line(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    const PRECISION_SHIFT: u32 = 8;

    let Some(bounds) = surface.clip_bounds(clip) else {
        return;
    };
    let bgra = color.premultiplied().to_bgra();

    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
    let len_x = (x2 - x1).abs();
    let len_y = (y2 - y1).abs();

    if len_x == 0 && len_y == 0 {
        log::trace!("zero-length line at ({x1},{y1})");
        return;
    }

    let (left, right) = (i64::from(bounds.left), i64::from(bounds.right));
    let (top, bottom) = (i64::from(bounds.top), i64::from(bounds.bottom));

    if len_x > len_y {
        // x advances by one per step
        let (x1, y1, x2, y2) = if x2 < x1 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        let inc = ((y2 - y1) << PRECISION_SHIFT) / (x2 - x1);
        let start = x1.max(left);
        let end = x2.min(right - 1);
        if start > end {
            return;
        }
        let mut ys = (y1 << PRECISION_SHIFT) + inc * (start - x1);
        for x in start..=end {
            let y = ys >> PRECISION_SHIFT;
            if y >= top && y < bottom {
                surface.put(x as i32, y as i32, bgra);
            }
            ys += inc;
        }
    } else {
        // y advances by one per step
        let (x1, y1, x2, y2) = if y2 < y1 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        let inc = ((x2 - x1) << PRECISION_SHIFT) / (y2 - y1);
        let start = y1.max(top);
        let end = y2.min(bottom - 1);
        if start > end {
            return;
        }
        let mut xs = (x1 << PRECISION_SHIFT) + inc * (start - y1);
        for y in start..=end {
            let x = xs >> PRECISION_SHIFT;
            if x >= left && x < right {
                surface.put(x as i32, y as i32, bgra);
            }
            xs += inc;
        }
    }
}

/// Draw connected DDA segments through a flat `[x0, y0, x1, y1, ...]` list.
///
/// The outline is left open; repeat the first point to close it. A trailing
/// odd coordinate is ignored.
pub fn draw_polyline(
    surface: &mut Surface<'_>,
    points: &[i32],
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let n = points.len() & !1;
    if n < 4 {
        return;
    }
    for seg in points[..n].windows(4).step_by(2) {
        draw_line(surface, seg[0], seg[1], seg[2], seg[3], color, clip);
    }
}
