//! Anti-aliased line rasterization (Gupta-Sproull).
//!
//! Each step along the major axis blends three pixels across the line: the
//! center pixel and its two perpendicular neighbours, with coverage derived
//! from the distance to the ideal line. All per-pixel math is fixed point.
//!
//! # References
//!
//! - Gupta, S., & Sproull, R. F. (1981). "Filtering edges for gray-scale
//!   displays." SIGGRAPH '81.

use crate::color::Rgba;
use crate::geometry::ClipRect;
use crate::surface::Surface;

/// Draw a 3-pixel-wide anti-aliased line.
///
/// The segment is clipped against the surface (and `clip`) first. A
/// zero-length segment, before or after clipping, draws nothing.
pub fn draw_line_aa(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    const PRECISION_SHIFT: u32 = 10;
    const PRECISION_MULTIPLIER: f64 = (1 << PRECISION_SHIFT) as f64;

    if x1 == x2 && y1 == y2 {
        log::trace!("degenerate anti-aliased line at ({x1},{y1})");
        return;
    }
    let Some(bounds) = surface.clip_bounds(clip) else {
        return;
    };
    let Some((x1, y1, x2, y2)) = clip_segment(&bounds, x1, y1, x2, y2) else {
        log::trace!("anti-aliased line ({x1},{y1})-({x2},{y2}) clipped away");
        return;
    };

    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let (adx, ady) = (dx.abs(), dy.abs());
    let sx = if dx < 0 { -1 } else { 1 };
    let sy = if dy < 0 { -1 } else { 1 };

    // (u, v) folds all eight octants into one: u is the major axis
    let (du, dv, ustep, vstep) = if adx > ady {
        (adx, ady, (sx, 0), (0, sy))
    } else {
        (ady, adx, (0, sy), (sx, 0))
    };
    if du == 0 {
        return;
    }

    let color = color.premultiplied();
    let a = i64::from(color.a);
    let argb = color.to_argb();
    let srb = argb & 0x00FF_00FF;
    let sg = (argb >> 8) & 0xFF;

    let mut d = (dv << 1) - du;
    let incr_s = dv << 1;
    let incr_d = (dv - du) << 1;

    let inv_d_float = 1.0 / (4.0 * ((du * du + dv * dv) as f64).sqrt());
    let inv_d2du_float = 0.75 - 2.0 * (du as f64 * inv_d_float);

    let inv_d = (inv_d_float * PRECISION_MULTIPLIER) as i64;
    let inv_d2du = (inv_d2du_float * PRECISION_MULTIPLIER * a as f64) as i64;
    let zero_dot75 = (0.75 * PRECISION_MULTIPLIER * a as f64) as i64;

    let inv_d_mul_alpha = inv_d * a;
    let du_mul_inv_d = du * inv_d_mul_alpha;
    let mut d_mul_inv_d = d * inv_d_mul_alpha;
    let mut twovdu_mul_inv_d = 0;
    let incr_s_mul_inv_d = incr_s * inv_d_mul_alpha;
    let incr_d_mul_inv_d = incr_d * inv_d_mul_alpha;

    let (mut x, mut y) = (x1, y1);
    for _ in 0..=du {
        let center = (zero_dot75 - twovdu_mul_inv_d) >> PRECISION_SHIFT;
        let above = (inv_d2du + twovdu_mul_inv_d) >> PRECISION_SHIFT;
        let below = (inv_d2du - twovdu_mul_inv_d) >> PRECISION_SHIFT;

        blend_at(surface, &bounds, x, y, center, srb, sg);
        blend_at(surface, &bounds, x + vstep.0, y + vstep.1, above, srb, sg);
        blend_at(surface, &bounds, x - vstep.0, y - vstep.1, below, srb, sg);

        if d < 0 {
            // straight step along u
            twovdu_mul_inv_d = d_mul_inv_d + du_mul_inv_d;
            d += incr_s;
            d_mul_inv_d += incr_s_mul_inv_d;
        } else {
            // diagonal step along u and v
            twovdu_mul_inv_d = d_mul_inv_d - du_mul_inv_d;
            d += incr_d;
            d_mul_inv_d += incr_d_mul_inv_d;
            x += vstep.0;
            y += vstep.1;
        }
        x += ustep.0;
        y += ustep.1;
    }
}

#[inline]
fn blend_at(
    surface: &mut Surface<'_>,
    bounds: &ClipRect,
    x: i32,
    y: i32,
    coverage: i64,
    srb: u32,
    sg: u32,
) {
    if coverage <= 0 || !bounds.contains(x, y) {
        return;
    }
    let sa = coverage.min(255) as u32;
    surface.update(x, y, |dst| alpha_blend_on_premultiplied(dst, sa, srb, sg));
}

/// Blend a premultiplied source over a premultiplied `0xAARRGGBB` pixel.
///
/// `sa` is the source coverage-scaled alpha (0-255), `srb` the source red and
/// blue packed as `0x00RR00BB`, `sg` the source green. Alpha is blended at
/// full precision; red, green and blue use the packed shortcut that may be
/// one step off. The arithmetic wraps exactly like 32-bit unsigned math.
#[must_use]
#[inline]
pub fn alpha_blend_on_premultiplied(dst: u32, sa: u32, srb: u32, sg: u32) -> u32 {
    let da = dst >> 24;
    let dg = (dst >> 8) & 0xFF;
    let drb = dst & 0x00FF_00FF;

    let a = (sa + ((da * (255 - sa) * 0x8081) >> 23)) << 24;
    let g = sg
        .wrapping_sub(dg)
        .wrapping_mul(sa)
        .wrapping_add(dg << 8)
        & 0xFFFF_FF00;
    let rb = (srb.wrapping_sub(drb).wrapping_mul(sa) >> 8).wrapping_add(drb) & 0x00FF_00FF;

    a | g | rb
}

// ============================================================================
// Segment clipping
// ============================================================================

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(b: &ClipRect, x: f64, y: f64) -> u8 {
    let mut code = INSIDE;
    if x < f64::from(b.left) {
        code |= LEFT;
    } else if x > f64::from(b.right - 1) {
        code |= RIGHT;
    }
    if y < f64::from(b.top) {
        code |= TOP;
    } else if y > f64::from(b.bottom - 1) {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland clip of a segment to the inclusive pixel range of `b`.
///
/// Crossings are solved on `y = m x + b`; vertical segments keep their `x`.
/// Returns `None` when the segment misses the rectangle.
pub(crate) fn clip_segment(
    b: &ClipRect,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Option<(i32, i32, i32, i32)> {
    let (xmin, xmax) = (f64::from(b.left), f64::from(b.right - 1));
    let (ymin, ymax) = (f64::from(b.top), f64::from(b.bottom - 1));

    let (mut x0, mut y0) = (f64::from(x1), f64::from(y1));
    let (mut x1, mut y1) = (f64::from(x2), f64::from(y2));
    let slope = (y1 - y0) / (x1 - x0);

    let mut code0 = outcode(b, x0, y0);
    let mut code1 = outcode(b, x1, y1);

    // Each pass resolves at least one outside bit, four passes per endpoint
    for _ in 0..8 {
        if (code0 | code1) == INSIDE {
            return Some((x0 as i32, y0 as i32, x1 as i32, y1 as i32));
        }
        if (code0 & code1) != INSIDE {
            return None;
        }

        let out = if code0 == INSIDE { code1 } else { code0 };
        let (x, y) = if out & TOP != 0 {
            (x_at(x0, y0, slope, ymin), ymin)
        } else if out & BOTTOM != 0 {
            (x_at(x0, y0, slope, ymax), ymax)
        } else if out & RIGHT != 0 {
            (xmax, (y0 + slope * (xmax - x0)).round())
        } else {
            (xmin, (y0 + slope * (xmin - x0)).round())
        };

        if out == code0 {
            (x0, y0) = (x, y);
            code0 = outcode(b, x0, y0);
        } else {
            (x1, y1) = (x, y);
            code1 = outcode(b, x1, y1);
        }
    }
    None
}

#[inline]
fn x_at(x0: f64, y0: f64, slope: f64, y: f64) -> f64 {
    if slope.is_infinite() {
        x0
    } else {
        (x0 + (y - y0) / slope).round()
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
