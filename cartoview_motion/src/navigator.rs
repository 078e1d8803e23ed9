// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated "fly to point" navigation.
//!
//! A flight moves the camera center from where it is to a target in
//! [`ANIMATION_STEPS`] ticks, sampling [`EASING`] at each step. When asked to
//! zoom in, the zoom factor is interpolated towards the maximum with the
//! same curve, applied before the center on each step.
//!
//! The target is resolved through [`Camera::bounded_center`] when the flight
//! starts, so the last step always lands on a reachable center.

use cartoview_camera::Camera;
use kurbo::Point;

use crate::easing::{ANIMATION_STEPS, EASING, lerp, lerp_point};

/// An in-progress navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    /// Next step to apply, in `0..ANIMATION_STEPS`.
    pub step: usize,
    /// Camera center when the flight started.
    pub center_from: Point,
    /// Clamped target center.
    pub center_to: Point,
    /// `(from, to)` zoom factors when the flight also zooms.
    pub zoom: Option<(f64, f64)>,
}

/// Outcome of a [`Navigator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigatorTick {
    /// No flight in progress.
    Idle,
    /// A step was applied and more remain.
    Stepped {
        /// Index of the step just applied.
        step: usize,
        /// The step changed the zoom factor.
        zoom_changed: bool,
    },
    /// The flight finished on this tick.
    Completed {
        /// The final step changed the zoom factor.
        zoom_changed: bool,
    },
}

/// Drives at most one [`Flight`] at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Navigator {
    flight: Option<Flight>,
}

impl Navigator {
    /// Creates an idle navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts flying to `target` (content pixels), replacing any flight in
    /// progress.
    ///
    /// With `zoom_to_max` the zoom is animated to the camera's maximum;
    /// otherwise the flight is position-only. Returns `false` (and stays
    /// idle) when the camera has no content.
    pub fn start(&mut self, camera: &Camera, target: Point, zoom_to_max: bool) -> bool {
        let (Some(center_from), Some(center_to)) =
            (camera.center(), camera.bounded_center(target, zoom_to_max))
        else {
            self.flight = None;
            return false;
        };
        self.flight = Some(Flight {
            step: 0,
            center_from,
            center_to,
            zoom: zoom_to_max.then(|| (camera.zoom(), camera.max_zoom())),
        });
        true
    }

    /// Abandons the current flight. Returns `true` if one was in progress.
    pub fn cancel(&mut self) -> bool {
        self.flight.take().is_some()
    }

    /// Returns `true` while a flight is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flight.is_some()
    }

    /// Returns the current flight, if any.
    #[must_use]
    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    /// Applies the next step to `camera`.
    pub fn tick(&mut self, camera: &mut Camera) -> NavigatorTick {
        let Some(flight) = self.flight.as_mut() else {
            return NavigatorTick::Idle;
        };
        let Some(&t) = EASING.get(flight.step) else {
            // Overran the curve; finish without touching the camera.
            self.flight = None;
            return NavigatorTick::Completed {
                zoom_changed: false,
            };
        };

        let zoom_changed = match flight.zoom {
            Some((from, to)) => camera.set_zoom(lerp(from, to, t), camera.viewport_center()),
            None => false,
        };
        camera.set_center(lerp_point(flight.center_from, flight.center_to, t));

        let step = flight.step;
        flight.step += 1;
        if flight.step >= ANIMATION_STEPS {
            self.flight = None;
            NavigatorTick::Completed { zoom_changed }
        } else {
            NavigatorTick::Stepped { step, zoom_changed }
        }
    }
}

#[cfg(test)]
mod tests {
    use cartoview_camera::Camera;
    use kurbo::{Point, Size};

    use super::{Navigator, NavigatorTick};
    use crate::ANIMATION_STEPS;

    fn camera() -> Camera {
        let mut camera = Camera::new(Size::new(800.0, 600.0));
        camera.load_content(4000, 3000);
        camera
    }

    #[test]
    fn flight_completes_after_all_steps() {
        let mut camera = camera();
        let mut navigator = Navigator::new();
        assert!(navigator.start(&camera, Point::new(1000.0, 900.0), false));

        for step in 0..ANIMATION_STEPS - 1 {
            assert_eq!(
                navigator.tick(&mut camera),
                NavigatorTick::Stepped {
                    step,
                    zoom_changed: false
                }
            );
        }
        assert_eq!(
            navigator.tick(&mut camera),
            NavigatorTick::Completed {
                zoom_changed: false
            }
        );
        assert!(!navigator.is_active());
        assert_eq!(navigator.tick(&mut camera), NavigatorTick::Idle);

        let center = camera.center().unwrap();
        assert!((center.x - 1000.0).abs() < 1e-9);
        assert!((center.y - 900.0).abs() < 1e-9);
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn zooming_flight_is_monotonic_and_exact() {
        let mut camera = camera();
        let mut navigator = Navigator::new();
        navigator.start(&camera, Point::new(1200.0, 1000.0), true);
        let target = navigator.flight().unwrap().center_to;
        assert_eq!(target, Point::new(1200.0, 1000.0));

        let (mut last_zoom, mut last_center) = (camera.zoom(), camera.center().unwrap());
        loop {
            let tick = navigator.tick(&mut camera);
            let (zoom, center) = (camera.zoom(), camera.center().unwrap());
            assert!(zoom >= last_zoom, "zoom went backwards: {last_zoom} -> {zoom}");
            assert!(center.x <= last_center.x + 1e-9, "x went backwards");
            assert!(center.y <= last_center.y + 1e-9, "y went backwards");
            (last_zoom, last_center) = (zoom, center);
            if let NavigatorTick::Completed { .. } = tick {
                break;
            }
        }
        assert_eq!(camera.zoom(), camera.max_zoom());
        assert!((last_center.x - target.x).abs() < 1e-9);
        assert!((last_center.y - target.y).abs() < 1e-9);
    }

    #[test]
    fn target_is_clamped_at_the_flight_zoom() {
        let camera = camera();
        let mut navigator = Navigator::new();
        navigator.start(&camera, Point::new(-500.0, 5000.0), true);
        let flight = navigator.flight().unwrap();
        // At 4x the visible span is 200x150.
        assert_eq!(flight.center_to, Point::new(100.0, 2925.0));
        assert_eq!(flight.zoom, Some((1.0, 4.0)));
    }

    #[test]
    fn start_without_content_stays_idle() {
        let camera = Camera::new(Size::new(800.0, 600.0));
        let mut navigator = Navigator::new();
        assert!(!navigator.start(&camera, Point::ZERO, true));
        assert!(!navigator.cancel());
    }

    #[test]
    fn overrun_step_completes() {
        let mut camera = camera();
        let mut navigator = Navigator::new();
        navigator.start(&camera, Point::ZERO, false);
        navigator.flight.as_mut().unwrap().step = ANIMATION_STEPS + 3;
        let before = camera.center();
        assert_eq!(
            navigator.tick(&mut camera),
            NavigatorTick::Completed {
                zoom_changed: false
            }
        );
        assert_eq!(camera.center(), before);
    }
}
