//! Midpoint ellipse fill and outline.
//!
//! The ellipse is walked in two passes: first where the tangent slope is
//! steeper than -1 (stepping y outward), then where it is shallower (stepping
//! x outward). Each step covers all four quadrants by symmetry.

use crate::color::Rgba;
use crate::geometry::ClipRect;
use crate::surface::Surface;

/// Largest radius the `i64` error terms can walk without overflowing.
const MAX_RADIUS: i64 = 1 << 16;

/// Walk one quadrant of an ellipse with radii `xr`, `yr`, calling `visit(x, y)`
/// with the offsets from the center at every step.
fn midpoint_ellipse(xr: i64, yr: i64, mut visit: impl FnMut(i64, i64)) {
    let xr_sq_two = (xr * xr) << 1;
    let yr_sq_two = (yr * yr) << 1;

    // Pass 1: slope magnitude >= 1
    let mut x = xr;
    let mut y = 0;
    let mut x_chg = yr * yr * (1 - (xr << 1));
    let mut y_chg = xr * xr;
    let mut err = 0;
    let mut x_stopping = yr_sq_two * xr;
    let mut y_stopping = 0;
    while x_stopping >= y_stopping {
        visit(x, y);
        y += 1;
        y_stopping += xr_sq_two;
        err += y_chg;
        y_chg += xr_sq_two;
        if x_chg + (err << 1) > 0 {
            x -= 1;
            x_stopping -= yr_sq_two;
            err += x_chg;
            x_chg += yr_sq_two;
        }
    }

    // Pass 2: slope magnitude < 1
    x = 0;
    y = yr;
    x_chg = yr * yr;
    y_chg = xr * xr * (1 - (yr << 1));
    err = 0;
    x_stopping = 0;
    y_stopping = xr_sq_two * yr;
    while x_stopping <= y_stopping {
        visit(x, y);
        x += 1;
        x_stopping += yr_sq_two;
        err += x_chg;
        x_chg += yr_sq_two;
        if y_chg + (err << 1) > 0 {
            y -= 1;
            y_stopping -= xr_sq_two;
            err += y_chg;
            y_chg += xr_sq_two;
        }
    }
}

fn fill_with_radii(
    surface: &mut Surface<'_>,
    xc: i64,
    yc: i64,
    xr: i64,
    yr: i64,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    if xr < 1 || yr < 1 || xr > MAX_RADIUS || yr > MAX_RADIUS {
        log::trace!("ellipse radii {xr}x{yr} out of range, not filled");
        return;
    }
    let Some(b) = surface.clip_bounds(clip) else {
        return;
    };
    let (left, right) = (i64::from(b.left), i64::from(b.right));
    let (top, bottom) = (i64::from(b.top), i64::from(b.bottom));
    if xc + xr < left || xc - xr >= right || yc + yr < top || yc - yr >= bottom {
        return;
    }

    let bgra = color.premultiplied().to_bgra();
    midpoint_ellipse(xr, yr, |x, y| {
        let lx = (xc - x).max(left);
        let rx = (xc + x).min(right - 1);
        if lx > rx {
            return;
        }
        // Upper and lower mirrored scanlines; the center row is written twice
        for row in [yc + y, yc - y] {
            if row >= top && row < bottom {
                surface.fill_span(lx as i32, rx as i32, row as i32, bgra);
            }
        }
    });
}

/// Fill an axis-aligned ellipse centered on `(xc, yc)`.
///
/// `x_diameter` and `y_diameter` are halved to radii; a radius below one
/// pixel or above 65536 draws nothing. Rows outside the surface or `clip`
/// are dropped, not clamped onto the edge row, and spans are clamped to it.
pub fn fill_ellipse_centered(
    surface: &mut Surface<'_>,
    xc: i32,
    yc: i32,
    x_diameter: i32,
    y_diameter: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    fill_with_radii(
        surface,
        i64::from(xc),
        i64::from(yc),
        i64::from(x_diameter >> 1),
        i64::from(y_diameter >> 1),
        color,
        clip,
    );
}

/// Fill the ellipse inscribed in the box with corners `(x1, y1)`, `(x2, y2)`.
pub fn fill_ellipse(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let (x1, x2) = (i64::from(x1.min(x2)), i64::from(x1.max(x2)));
    let (y1, y2) = (i64::from(y1.min(y2)), i64::from(y1.max(y2)));
    let xr = (x2 - x1) >> 1;
    let yr = (y2 - y1) >> 1;
    fill_with_radii(surface, x1 + xr, y1 + yr, xr, yr, color, clip);
}

/// Draw the outline of an axis-aligned ellipse centered on `(xc, yc)`.
///
/// Same diameter convention as [`fill_ellipse_centered`].
pub fn draw_ellipse_centered(
    surface: &mut Surface<'_>,
    xc: i32,
    yc: i32,
    x_diameter: i32,
    y_diameter: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let (xr, yr) = (i64::from(x_diameter >> 1), i64::from(y_diameter >> 1));
    if xr < 1 || yr < 1 || xr > MAX_RADIUS || yr > MAX_RADIUS {
        log::trace!("ellipse radii {xr}x{yr} out of range, not outlined");
        return;
    }
    let Some(b) = surface.clip_bounds(clip) else {
        return;
    };
    let (xc, yc) = (i64::from(xc), i64::from(yc));
    let bgra = color.premultiplied().to_bgra();
    let inside = |x: i64, y: i64| {
        x >= i64::from(b.left)
            && x < i64::from(b.right)
            && y >= i64::from(b.top)
            && y < i64::from(b.bottom)
    };

    midpoint_ellipse(xr, yr, |x, y| {
        let quadrants = [(xc + x, yc + y), (xc - x, yc + y), (xc + x, yc - y), (xc - x, yc - y)];
        for (px, py) in quadrants {
            if inside(px, py) {
                surface.put(px as i32, py as i32, bgra);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dirty::DirtyPixels;
    use std::collections::BTreeSet;

    fn lit(buf: &[u8], width: i32) -> BTreeSet<(i32, i32)> {
        buf.chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px.iter().any(|&b| b != 0))
            .map(|(i, _)| (i as i32 % width, i as i32 / width))
            .collect()
    }

    #[test]
    fn test_circle_is_point_symmetric() {
        let mut buf = vec![0u8; 40 * 40 * 4];
        {
            let mut s = Surface::new(&mut buf, 40, 40).unwrap();
            fill_ellipse_centered(&mut s, 20, 20, 22, 22, Rgba::BLUE, None);
        }
        let pixels = lit(&buf, 40);
        assert!(!pixels.is_empty());
        for &(x, y) in &pixels {
            assert!(pixels.contains(&(40 - x, 40 - y)), "missing mirror of ({x},{y})");
        }
    }

    #[test]
    fn test_circle_extent() {
        let mut buf = vec![0u8; 40 * 40 * 4];
        {
            let mut s = Surface::new(&mut buf, 40, 40).unwrap();
            fill_ellipse_centered(&mut s, 20, 20, 20, 20, Rgba::BLUE, None);
        }
        let pixels = lit(&buf, 40);
        // Radius 10: extremes on the axes, nothing beyond
        assert!(pixels.contains(&(20, 20)));
        assert!(pixels.contains(&(30, 20)));
        assert!(pixels.contains(&(10, 20)));
        assert!(pixels.contains(&(20, 10)));
        assert!(pixels.contains(&(20, 30)));
        assert!(pixels.iter().all(|&(x, y)| (10..=30).contains(&x) && (10..=30).contains(&y)));
        assert!(!pixels.contains(&(11, 11)));
    }

    #[test]
    fn test_ellipse_wider_than_tall() {
        let mut buf = vec![0u8; 40 * 40 * 4];
        {
            let mut s = Surface::new(&mut buf, 40, 40).unwrap();
            fill_ellipse_centered(&mut s, 20, 20, 30, 10, Rgba::BLUE, None);
        }
        let pixels = lit(&buf, 40);
        assert!(pixels.contains(&(35, 20)));
        assert!(pixels.contains(&(20, 25)));
        assert!(!pixels.contains(&(20, 27)));
        assert!(!pixels.contains(&(36, 20)));
    }

    #[test]
    fn test_small_diameter_is_noop() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            fill_ellipse_centered(&mut s, 5, 5, 1, 8, Rgba::BLUE, None);
            fill_ellipse_centered(&mut s, 5, 5, 8, 0, Rgba::BLUE, None);
            fill_ellipse_centered(&mut s, 5, 5, -6, 6, Rgba::BLUE, None);
        }
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_center_row_recorded_twice() {
        let mut buf = vec![0u8; 20 * 20 * 4];
        let mut dirty = DirtyPixels::new();
        {
            let mut s = Surface::with_dirty(&mut buf, 20, 20, &mut dirty).unwrap();
            fill_ellipse_centered(&mut s, 10, 10, 8, 8, Rgba::BLUE, None);
        }
        let center = (10 * 20 + 10) * 4;
        assert!(dirty.pixel_offsets().filter(|&o| o == center).count() >= 2);
    }

    #[test]
    fn test_partially_offscreen_does_not_smear_edges() {
        let mut buf = vec![0u8; 20 * 20 * 4];
        {
            let mut s = Surface::new(&mut buf, 20, 20).unwrap();
            fill_ellipse_centered(&mut s, 10, -2, 12, 12, Rgba::BLUE, None);
        }
        let pixels = lit(&buf, 20);
        // Radius 6 around y = -2 reaches row 4 at most
        assert!(pixels.contains(&(10, 4)));
        assert!(pixels.iter().all(|&(_, y)| y <= 4));
        // Row 0 is covered only as wide as the ellipse is there
        assert!(!pixels.contains(&(3, 0)));
    }

    #[test]
    fn test_clip_bounds_respected() {
        let mut buf = vec![0u8; 20 * 20 * 4];
        let clip = ClipRect::new(0, 10, 0, 10);
        {
            let mut s = Surface::new(&mut buf, 20, 20).unwrap();
            fill_ellipse_centered(&mut s, 10, 10, 16, 16, Rgba::BLUE, Some(clip));
        }
        let pixels = lit(&buf, 20);
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|&(x, y)| clip.contains(x, y)));
    }

    #[test]
    fn test_fill_ellipse_bounding_box() {
        let mut a = vec![0u8; 30 * 30 * 4];
        let mut b = vec![0u8; 30 * 30 * 4];
        {
            let mut s = Surface::new(&mut a, 30, 30).unwrap();
            fill_ellipse(&mut s, 5, 8, 25, 20, Rgba::GREEN, None);
        }
        {
            let mut s = Surface::new(&mut b, 30, 30).unwrap();
            // xr = 10, yr = 6 around (15, 14)
            fill_ellipse_centered(&mut s, 15, 14, 20, 12, Rgba::GREEN, None);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_outline_hollow() {
        let mut buf = vec![0u8; 30 * 30 * 4];
        {
            let mut s = Surface::new(&mut buf, 30, 30).unwrap();
            draw_ellipse_centered(&mut s, 15, 15, 20, 20, Rgba::WHITE, None);
        }
        let pixels = lit(&buf, 30);
        assert!(pixels.contains(&(25, 15)));
        assert!(pixels.contains(&(5, 15)));
        assert!(pixels.contains(&(15, 5)));
        assert!(pixels.contains(&(15, 25)));
        assert!(!pixels.contains(&(15, 15)));
    }
}
