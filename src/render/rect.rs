//! Rectangle fill and outline.

use crate::color::Rgba;
use crate::geometry::ClipRect;
use crate::surface::Surface;

/// Corners sorted so that `x1 <= x2` and `y1 <= y2`.
fn normalize(x1: i32, y1: i32, x2: i32, y2: i32) -> (i64, i64, i64, i64) {
    (
        i64::from(x1.min(x2)),
        i64::from(y1.min(y2)),
        i64::from(x1.max(x2)),
        i64::from(y1.max(y2)),
    )
}

/// Fill the rectangle `[x1, x2) x [y1, y2)`.
///
/// Corners may be given in any order. A zero-width or zero-height rectangle
/// is widened to one pixel on that axis, so it still paints a 1-pixel line.
/// The first scanline is written pixel by pixel and copied down to the
/// remaining rows.
pub fn fill_rectangle(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let Some(b) = surface.clip_bounds(clip) else {
        return;
    };
    let (x1, y1, mut x2, mut y2) = normalize(x1, y1, x2, y2);
    if x1 == x2 {
        x2 += 1;
    }
    if y1 == y2 {
        y2 += 1;
    }

    let (left, right) = (i64::from(b.left), i64::from(b.right));
    let (top, bottom) = (i64::from(b.top), i64::from(b.bottom));
    if x2 <= left || x1 >= right || y2 <= top || y1 >= bottom {
        log::trace!("rectangle ({x1},{y1})-({x2},{y2}) outside clip");
        return;
    }

    let x1 = x1.max(left) as i32;
    let x2 = x2.min(right) as i32;
    let y1 = y1.max(top) as i32;
    let y2 = y2.min(bottom) as i32;

    surface.fill_span(x1, x2 - 1, y1, color.premultiplied().to_bgra());
    for y in y1 + 1..y2 {
        surface.replicate_row(y1, y, x1, x2 - x1);
    }
}

/// Draw the outline of the rectangle with corners `(x1, y1)` and `(x2, y2)`.
///
/// Both corners are on the outline: rows `y1` and `y2`, columns `x1` and
/// `x2`. Edges that fall outside the surface or `clip` are not drawn; the
/// visible parts of the others are.
pub fn draw_rectangle(
    surface: &mut Surface<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
    clip: Option<ClipRect>,
) {
    let Some(b) = surface.clip_bounds(clip) else {
        return;
    };
    let (x1, y1, x2, y2) = normalize(x1, y1, x2, y2);

    let (left, right) = (i64::from(b.left), i64::from(b.right));
    let (top, bottom) = (i64::from(b.top), i64::from(b.bottom));
    if x2 < left || x1 >= right || y2 < top || y1 >= bottom {
        log::trace!("rectangle outline ({x1},{y1})-({x2},{y2}) outside clip");
        return;
    }

    let bgra = color.premultiplied().to_bgra();
    let in_x = |x: i64| x >= left && x < right;
    let in_y = |y: i64| y >= top && y < bottom;

    // Top and bottom scanlines
    let span_start = x1.max(left) as i32;
    let span_end = x2.min(right - 1) as i32;
    if in_y(y1) {
        surface.fill_span(span_start, span_end, y1 as i32, bgra);
    }
    if y2 != y1 && in_y(y2) {
        surface.fill_span(span_start, span_end, y2 as i32, bgra);
    }

    // Left and right columns between them
    let first = (y1 + 1).max(top);
    let last = (y2 - 1).min(bottom - 1);
    for y in first..=last {
        if in_x(x1) {
            surface.put(x1 as i32, y as i32, bgra);
        }
        if x2 != x1 && in_x(x2) {
            surface.put(x2 as i32, y as i32, bgra);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dirty::DirtyPixels;

    fn filled(buf: &[u8], width: usize) -> Vec<(usize, usize)> {
        buf.chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px.iter().any(|&b| b != 0))
            .map(|(i, _)| (i % width, i / width))
            .collect()
    }

    #[test]
    fn test_fill_half_open() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            fill_rectangle(&mut s, 2, 2, 5, 5, Rgba::RED, None);
        }
        let pixels = filled(&buf, 10);
        assert_eq!(pixels.len(), 9);
        assert!(pixels.iter().all(|&(x, y)| (2..5).contains(&x) && (2..5).contains(&y)));
        assert_eq!(&buf[(3 * 10 + 3) * 4..][..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn test_fill_twice_is_idempotent() {
        let mut once = vec![0u8; 10 * 10 * 4];
        let mut twice = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut once, 10, 10).unwrap();
            fill_rectangle(&mut s, 2, 2, 5, 5, Rgba::RED, None);
        }
        {
            let mut s = Surface::new(&mut twice, 10, 10).unwrap();
            fill_rectangle(&mut s, 2, 2, 5, 5, Rgba::RED, None);
            fill_rectangle(&mut s, 2, 2, 5, 5, Rgba::RED, None);
        }
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fill_swapped_corners() {
        let mut a = vec![0u8; 10 * 10 * 4];
        let mut b = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut a, 10, 10).unwrap();
            fill_rectangle(&mut s, 1, 2, 7, 8, Rgba::GREEN, None);
        }
        {
            let mut s = Surface::new(&mut b, 10, 10).unwrap();
            fill_rectangle(&mut s, 7, 8, 1, 2, Rgba::GREEN, None);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_zero_width_paints_column() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            fill_rectangle(&mut s, 4, 1, 4, 6, Rgba::WHITE, None);
        }
        let pixels = filled(&buf, 10);
        assert_eq!(pixels, (1..6).map(|y| (4, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_fill_zero_height_paints_row() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            fill_rectangle(&mut s, 1, 3, 4, 3, Rgba::WHITE, None);
        }
        assert_eq!(filled(&buf, 10), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_fill_touching_edge_outside_is_noop() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            fill_rectangle(&mut s, -3, 2, 0, 5, Rgba::WHITE, None);
            fill_rectangle(&mut s, 10, 2, 14, 5, Rgba::WHITE, None);
        }
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_clamped_and_clipped() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut dirty = DirtyPixels::new();
        let clip = ClipRect::new(0, 3, 0, 3);
        {
            let mut s = Surface::with_dirty(&mut buf, 10, 10, &mut dirty).unwrap();
            fill_rectangle(&mut s, -100, -100, 100, 100, Rgba::WHITE, Some(clip));
        }
        let pixels = filled(&buf, 10);
        assert_eq!(pixels.len(), 9);
        assert!(pixels.iter().all(|&(x, y)| x < 3 && y < 3));
        assert_eq!(dirty.pixel_offsets().count(), 9);
    }

    #[test]
    fn test_outline_inclusive_corners() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            draw_rectangle(&mut s, 2, 2, 6, 5, Rgba::WHITE, None);
        }
        let pixels = filled(&buf, 10);
        // 2 rows of 5 plus 2 columns of 2
        assert_eq!(pixels.len(), 14);
        for &(x, y) in &[(2, 2), (6, 2), (2, 5), (6, 5), (2, 3), (6, 4)] {
            assert!(pixels.contains(&(x, y)));
        }
        assert!(!pixels.contains(&(4, 3)));
    }

    #[test]
    fn test_outline_zero_width_is_line() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            draw_rectangle(&mut s, 3, 1, 3, 4, Rgba::WHITE, None);
        }
        assert_eq!(filled(&buf, 10), (1..=4).map(|y| (3, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_outline_partially_outside() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        {
            let mut s = Surface::new(&mut buf, 10, 10).unwrap();
            draw_rectangle(&mut s, -5, 2, 4, 20, Rgba::WHITE, None);
        }
        let pixels = filled(&buf, 10);
        // Top row 0..=4 and right column 3..=9; left and bottom edges are off-surface
        assert_eq!(pixels.len(), 5 + 7);
        assert!(pixels.contains(&(0, 2)));
        assert!(pixels.contains(&(4, 9)));
        assert!(!pixels.contains(&(0, 3)));
    }

    #[test]
    fn test_outline_matches_fill_border() {
        // Outline (x1, y1)-(x2, y2) covers the border of fill (x1, y1)-(x2+1, y2+1)
        let mut outline = vec![0u8; 12 * 12 * 4];
        let mut fill = vec![0u8; 12 * 12 * 4];
        {
            let mut s = Surface::new(&mut outline, 12, 12).unwrap();
            draw_rectangle(&mut s, 1, 2, 9, 10, Rgba::WHITE, None);
        }
        {
            let mut s = Surface::new(&mut fill, 12, 12).unwrap();
            fill_rectangle(&mut s, 1, 2, 10, 11, Rgba::WHITE, None);
            fill_rectangle(&mut s, 2, 3, 9, 10, Rgba::TRANSPARENT, None);
        }
        assert_eq!(outline, fill);
    }
}
