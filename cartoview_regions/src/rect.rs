// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Integer axis-aligned rectangle in content pixels.
///
/// The rectangle is half-open: it contains `x0 <= x < x1` and `y0 <= y < y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RegionRect {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl RegionRect {
    /// Creates a rectangle from its edges.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square of side `2 * radius` centered on `center`.
    ///
    /// Marker regions are always squares; a negative radius yields an empty
    /// rectangle. Edges saturate at the `i32` range.
    #[must_use]
    pub const fn square(center: (i32, i32), radius: i32) -> Self {
        let r = if radius < 0 { 0 } else { radius };
        Self {
            x0: center.0.saturating_sub(r),
            y0: center.1.saturating_sub(r),
            x1: center.0.saturating_add(r),
            y1: center.1.saturating_add(r),
        }
    }

    /// Returns `true` if the rectangle has no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Returns `true` if the pixel `(x, y)` lies inside.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }
}

/// Integer pixel containing a content-space point.
///
/// Coordinates are floored; values beyond the `i32` range saturate.
/// Returns `None` for non-finite input.
#[must_use]
pub fn content_pixel(pt: Point) -> Option<(i32, i32)> {
    if !pt.is_finite() {
        return None;
    }
    let pt = pt.floor();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "floored and finite; `as` saturates out-of-range values"
    )]
    let pixel = (pt.x as i32, pt.y as i32);
    Some(pixel)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{RegionRect, content_pixel};

    #[test]
    fn square_is_half_open() {
        let r = RegionRect::square((100, 100), 10);
        assert_eq!(r, RegionRect::new(90, 90, 110, 110));
        assert_eq!((r.width(), r.height()), (20, 20));
        assert!(r.contains(90, 90));
        assert!(r.contains(109, 109));
        assert!(!r.contains(110, 100));
        assert!(!r.contains(100, 89));
    }

    #[test]
    fn degenerate_squares_are_empty() {
        assert!(RegionRect::square((5, 5), 0).is_empty());
        assert!(RegionRect::square((5, 5), -3).is_empty());
        assert!(!RegionRect::square((5, 5), 0).contains(5, 5));
    }

    #[test]
    fn extreme_centers_saturate() {
        let r = RegionRect::square((i32::MAX, i32::MIN), 10);
        assert_eq!(r.x1, i32::MAX);
        assert_eq!(r.y0, i32::MIN);
    }

    #[test]
    fn content_points_are_floored() {
        assert_eq!(content_pixel(Point::new(103.9, 103.1)), Some((103, 103)));
        assert_eq!(content_pixel(Point::new(-0.5, 2.0)), Some((-1, 2)));
        assert_eq!(content_pixel(Point::new(f64::NAN, 0.0)), None);
    }
}
