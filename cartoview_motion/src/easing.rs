// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Ease-in/ease-out curve sampled at 23 evenly spaced steps.
///
/// Values are `t²(3 − 2t)` for `t = (i + 1) / 23`, rounded to four places.
/// The sequence is strictly increasing and ends at exactly `1.0`.
pub const EASING: [f64; 23] = [
    0.0055, 0.0214, 0.0466, 0.0802, 0.1212, 0.1687, 0.2215, 0.2788, 0.3395, 0.4027, 0.4674,
    0.5326, 0.5973, 0.6605, 0.7212, 0.7785, 0.8313, 0.8788, 0.9198, 0.9534, 0.9786, 0.9945, 1.0,
];

/// Number of steps in an animated navigation.
pub const ANIMATION_STEPS: usize = EASING.len();

/// Linear interpolation that lands on `b` exactly when `t == 1.0`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Component-wise [`lerp`] of two points.
#[must_use]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{EASING, lerp, lerp_point};

    #[test]
    fn easing_is_strictly_increasing_within_unit_range() {
        assert!(EASING[0] > 0.0);
        for pair in EASING.windows(2) {
            assert!(pair[0] < pair[1], "not increasing: {pair:?}");
        }
        assert_eq!(EASING[EASING.len() - 1], 1.0);
    }

    #[test]
    fn easing_is_symmetric() {
        // t²(3 − 2t) is point-symmetric about (0.5, 0.5); the table skips t = 0.
        for i in 0..EASING.len() - 1 {
            let mirrored = EASING[EASING.len() - 2 - i];
            assert!((EASING[i] + mirrored - 1.0).abs() < 1e-3, "step {i}");
        }
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let (a, b) = (0.37, 4.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        let p = lerp_point(Point::new(1.1, 2.2), Point::new(-3.3, 7.7), 1.0);
        assert_eq!(p, Point::new(-3.3, 7.7));
    }
}
