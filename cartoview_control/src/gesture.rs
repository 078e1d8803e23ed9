// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture tracking for panning.
//!
//! A [`PanGesture`] remembers the content point grabbed on pointer-down, the
//! last two pointer samples (for momentum on release), and whether the
//! pointer travelled far enough to suppress the click that follows.
//!
//! ```
//! use cartoview_control::gesture::PanGesture;
//! use kurbo::Point;
//!
//! let mut pan = PanGesture::default();
//! pan.start(Point::new(10.0, 20.0), Point::new(500.0, 400.0));
//! assert!(pan.is_dragging());
//!
//! let delta = pan.update(Point::new(15.0, 25.0), 0.0).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//! assert!(pan.moved());
//!
//! let (previous, last) = pan.end().unwrap();
//! assert_eq!(previous, Point::new(10.0, 20.0));
//! assert_eq!(last, Point::new(15.0, 25.0));
//! ```

use cartoview_camera::AxisFlags;
use kurbo::{Point, Vec2};

/// Pointer state of an in-progress pan.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanGesture {
    start_pos: Option<Point>,
    previous_pos: Option<Point>,
    last_pos: Option<Point>,
    grab: Option<Point>,
    moved: bool,
}

impl PanGesture {
    /// Records a button press of any kind.
    ///
    /// Drops a stale pan and clears the moved flag, so a click only counts
    /// as a drag if the pointer travelled during its own press.
    pub fn press(&mut self) {
        *self = Self::default();
    }

    /// Starts a pan at screen point `pos`, holding content point `grab`
    /// under the pointer.
    pub fn start(&mut self, pos: Point, grab: Point) {
        self.start_pos = Some(pos);
        self.previous_pos = Some(pos);
        self.last_pos = Some(pos);
        self.grab = Some(grab);
        self.moved = false;
    }

    /// Records a pointer sample, returning the delta since the last one.
    ///
    /// Travel beyond `slop` from the start marks the gesture as moved.
    pub fn update(&mut self, pos: Point, slop: f64) -> Option<Vec2> {
        let start = self.start_pos?;
        let last = self.last_pos?;
        self.previous_pos = Some(last);
        self.last_pos = Some(pos);
        if (pos - start).hypot() > slop {
            self.moved = true;
        }
        Some(pos - last)
    }

    /// Offset of `pos` from the drag start.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Most recent pointer sample.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Content point held under the pointer.
    #[must_use]
    pub fn grab(&self) -> Option<Point> {
        self.grab
    }

    /// Replaces the grabbed coordinate on the axes in `axes`.
    ///
    /// Used after the camera clamped a pan, so that reversing direction
    /// moves the map immediately instead of first unwinding the overshoot.
    pub fn regrab(&mut self, axes: AxisFlags, content: Point) {
        if let Some(grab) = self.grab.as_mut() {
            if axes.x {
                grab.x = content.x;
            }
            if axes.y {
                grab.y = content.y;
            }
        }
    }

    /// Whether the pointer left the click slop during the last gesture.
    ///
    /// Survives [`PanGesture::end`] until the next start, since the click
    /// arrives after the release.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Ends the pan, returning the `(previous, last)` pointer samples.
    pub fn end(&mut self) -> Option<(Point, Point)> {
        let samples = self.previous_pos.zip(self.last_pos);
        self.start_pos = None;
        self.previous_pos = None;
        self.last_pos = None;
        self.grab = None;
        samples
    }

    /// Drops the pan and forgets the moved flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
