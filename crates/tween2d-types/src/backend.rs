//! Shape backend trait.
//!
//! The animation engine never paints pixels itself. Frames are handed to a
//! draw sink, and the stock sink forwards them to a `ShapeBackend`, which
//! each host implements for its surface (canvas, framebuffer, GPU batch).

use crate::color::Rgb;
use crate::error::Result;

/// A recorded draw command.
///
/// Draw commands capture all parameters needed to replay a draw call, which
/// lets headless hosts log or diff what a frame would have painted.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgb,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u32,
        color: Rgb,
    },
    FillTriangle {
        points: [(i32, i32); 3],
        color: Rgb,
    },
}

/// Raster surface the shapes are painted onto.
///
/// # Core Methods (required)
///
/// `clear` and `fill_rect`.
///
/// # Extended Primitives (optional, with defaults)
///
/// `fill_circle` and `fill_triangle` fall back to coarse approximations built
/// on `fill_rect`, so a minimal backend still shows something for every
/// shape. Backends with native primitives should override them.
pub trait ShapeBackend {
    /// Clear the surface to a solid color.
    fn clear(&mut self, color: Rgb) -> Result<()>;

    /// Draw a filled axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) -> Result<()>;

    /// Draw a filled circle.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) -> Result<()> {
        // Default: bounding square, clamped to the i32/u32 ranges.
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        let side = radius.saturating_mul(2);
        self.fill_rect(cx.saturating_sub(r), cy.saturating_sub(r), side, side, color)
    }

    /// Draw a filled triangle defined by three vertices.
    fn fill_triangle(&mut self, points: [(i32, i32); 3], color: Rgb) -> Result<()> {
        // Default: bounding box.
        let xs = points.map(|p| p.0);
        let ys = points.map(|p| p.1);
        let (min_x, max_x) = (min3(xs), max3(xs));
        let (min_y, max_y) = (min3(ys), max3(ys));
        self.fill_rect(
            min_x,
            min_y,
            max_x.abs_diff(min_x),
            max_y.abs_diff(min_y),
            color,
        )
    }
}

fn min3(v: [i32; 3]) -> i32 {
    v[0].min(v[1]).min(v[2])
}

fn max3(v: [i32; 3]) -> i32 {
    v[0].max(v[1]).max(v[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RectOnly {
        rects: Vec<(i32, i32, u32, u32)>,
    }

    impl ShapeBackend for RectOnly {
        fn clear(&mut self, _color: Rgb) -> Result<()> {
            self.rects.clear();
            Ok(())
        }

        fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, _color: Rgb) -> Result<()> {
            self.rects.push((x, y, w, h));
            Ok(())
        }
    }

    #[test]
    fn default_circle_fills_bounding_square() {
        let mut b = RectOnly { rects: Vec::new() };
        b.fill_circle(10, 20, 5, Rgb::BLACK).unwrap();
        assert_eq!(b.rects, vec![(5, 15, 10, 10)]);
    }

    #[test]
    fn default_triangle_fills_bounding_box() {
        let mut b = RectOnly { rects: Vec::new() };
        b.fill_triangle([(0, 0), (10, -4), (5, 10)], Rgb::WHITE)
            .unwrap();
        assert_eq!(b.rects, vec![(0, -4, 10, 14)]);
    }

    #[test]
    fn default_circle_saturates_huge_radius() {
        let mut b = RectOnly { rects: Vec::new() };
        b.fill_circle(0, 0, u32::MAX, Rgb::BLACK).unwrap();
        b.fill_circle(i32::MIN + 1, 5, 10, Rgb::BLACK).unwrap();
        assert_eq!(
            b.rects,
            vec![
                (-i32::MAX, -i32::MAX, u32::MAX, u32::MAX),
                (i32::MIN, -5, 20, 20),
            ]
        );
    }

    #[test]
    fn default_triangle_spans_full_i32_range() {
        let mut b = RectOnly { rects: Vec::new() };
        b.fill_triangle([(i32::MIN, 0), (i32::MAX, 0), (0, 1)], Rgb::WHITE)
            .unwrap();
        assert_eq!(b.rects, vec![(i32::MIN, 0, u32::MAX, 1)]);
    }
}
