// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum (inertial) scrolling after a drag release.
//!
//! ## Usage
//!
//! 1) When a drag ends, call [`Momentum::release`] with the last two sampled
//!    pointer positions. If the pointer was still moving, scrolling starts.
//! 2) On every tick call [`Momentum::tick`]; it moves the camera center and
//!    decays the velocity by one pixel.
//! 3) Scrolling stops by itself once the velocity drops below one pixel per
//!    tick, or as soon as the camera refuses to move (a content edge or
//!    corner has been reached).

use cartoview_camera::Camera;
use kurbo::{Point, Vec2};

/// Release distance, in screen pixels, above which momentum starts.
pub const DEFAULT_MOMENTUM_THRESHOLD: f64 = 1.0;

/// Momentum engine state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum MomentumState {
    /// Not moving.
    #[default]
    Idle,
    /// Moving the camera center every tick.
    Scrolling {
        /// Remaining speed, in screen pixels per tick.
        velocity: f64,
        /// Direction the camera center travels, in radians.
        angle: f64,
    },
}

/// Why scrolling stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The camera could not move any further.
    Boundary,
    /// The velocity decayed below one pixel per tick.
    Exhausted,
}

/// Outcome of a [`Momentum::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MomentumTick {
    /// Nothing was scrolling.
    Idle,
    /// The camera moved and scrolling continues.
    Moved,
    /// Scrolling ended on this tick.
    Stopped(StopReason),
}

/// Inertial scrolling state machine: `Idle → Scrolling → Idle`.
#[derive(Clone, Copy, Debug)]
pub struct Momentum {
    state: MomentumState,
    threshold: f64,
    reduced_motion: bool,
}

impl Default for Momentum {
    fn default() -> Self {
        Self::new()
    }
}

impl Momentum {
    /// Creates an idle engine with [`DEFAULT_MOMENTUM_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_MOMENTUM_THRESHOLD)
    }

    /// Creates an idle engine that starts only for releases longer than
    /// `threshold` screen pixels.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            state: MomentumState::Idle,
            threshold: threshold.max(0.0),
            reduced_motion: false,
        }
    }

    /// Disables inertia entirely (reduced motion / high performance mode).
    ///
    /// Turning it on also stops any scrolling in progress.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.cancel();
        }
    }

    /// Returns whether reduced motion is on.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> MomentumState {
        self.state
    }

    /// Returns `true` while scrolling.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, MomentumState::Scrolling { .. })
    }

    /// Handles the end of a drag.
    ///
    /// `previous` and `last` are the last two pointer positions sampled during
    /// the drag, in screen pixels. If they are more than the threshold apart,
    /// scrolling starts with that distance as its velocity. The camera center
    /// travels from `last` towards `previous`, so the content keeps sliding
    /// the way the pointer moved.
    ///
    /// Returns `true` if scrolling started.
    pub fn release(&mut self, previous: Point, last: Point) -> bool {
        self.state = MomentumState::Idle;
        if self.reduced_motion {
            return false;
        }
        let travel: Vec2 = previous - last;
        let velocity = travel.length();
        if velocity.is_nan() || velocity <= self.threshold {
            return false;
        }
        self.state = MomentumState::Scrolling {
            velocity,
            angle: travel.atan2(),
        };
        true
    }

    /// Stops scrolling. Returns `true` if it was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = MomentumState::Idle;
        was_active
    }

    /// Advances one tick, moving `camera`.
    ///
    /// The center moves `velocity` screen pixels (`velocity / zoom` content
    /// pixels) along the scroll angle.
    pub fn tick(&mut self, camera: &mut Camera) -> MomentumTick {
        let MomentumState::Scrolling { velocity, angle } = self.state else {
            return MomentumTick::Idle;
        };
        let Some(center) = camera.center() else {
            self.state = MomentumState::Idle;
            return MomentumTick::Stopped(StopReason::Boundary);
        };

        let offset = Vec2::from_angle(angle) * (velocity / camera.zoom());
        if !camera.set_center(center + offset) {
            self.state = MomentumState::Idle;
            return MomentumTick::Stopped(StopReason::Boundary);
        }

        let velocity = velocity - 1.0;
        if velocity < 1.0 {
            self.state = MomentumState::Idle;
            return MomentumTick::Stopped(StopReason::Exhausted);
        }
        self.state = MomentumState::Scrolling { velocity, angle };
        MomentumTick::Moved
    }
}
