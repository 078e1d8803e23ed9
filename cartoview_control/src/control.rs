// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::{self, Debug};
use std::vec::Drain;

use cartoview_camera::Camera;
use cartoview_motion::{Momentum, MomentumTick, Navigator, NavigatorTick, TickScheduler};
use cartoview_regions::{Layer, RegionLayers};
use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace, warn};

use crate::compositor::{Compositor, QualityMode};
use crate::config::ViewerConfig;
use crate::error::{AllocationError, ConfigError};
use crate::gesture::PanGesture;
use crate::input::{Notification, PointerButton, WHEEL_NOTCH, ZoomKey};

/// Timers driven by [`MapControl::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Momentum,
    Navigation,
    QualitySettle,
}

/// An interactive map view.
///
/// `MapControl` owns a [`Camera`] and the state that moves it (drag, momentum,
/// fly-to navigation), two [`RegionLayers`] for marker hit-testing, and a
/// [`Compositor`] it redraws through after every camera change. The host
/// forwards input events and elapsed time, and drains [`Notification`]s.
///
/// `K` is the region tag type, returned in hover notifications.
pub struct MapControl<C, K> {
    config: ViewerConfig,
    camera: Camera,
    momentum: Momentum,
    navigator: Navigator,
    timers: TickScheduler<Timer>,
    regions: RegionLayers<K>,
    pan: PanGesture,
    quality: QualityMode,
    compositor: C,
    notifications: Vec<Notification<K>>,
    overlay_generation: u64,
}

impl<C, K> Debug for MapControl<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapControl")
            .field("camera", &self.camera)
            .field("momentum", &self.momentum.state())
            .field("navigating", &self.navigator.is_active())
            .field("dragging", &self.pan.is_dragging())
            .field("quality", &self.quality)
            .field("pending_notifications", &self.notifications.len())
            .field("overlay_generation", &self.overlay_generation)
            .finish_non_exhaustive()
    }
}

impl<C: Compositor, K: Clone> MapControl<C, K> {
    /// Creates a control with no content.
    pub fn new(viewport: Size, config: ViewerConfig, compositor: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut camera = Camera::new(viewport);
        camera.set_zoom_limits(config.min_zoom, config.max_zoom);
        camera.set_fill_viewport(config.fill_viewport);
        let mut momentum = Momentum::with_threshold(config.momentum_threshold);
        momentum.set_reduced_motion(config.reduced_motion);
        Ok(Self {
            config,
            camera,
            momentum,
            navigator: Navigator::new(),
            timers: TickScheduler::new(),
            regions: RegionLayers::new(),
            pan: PanGesture::default(),
            quality: QualityMode::HighQuality,
            compositor,
            notifications: Vec::new(),
            overlay_generation: 0,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The region layers.
    #[must_use]
    pub fn regions(&self) -> &RegionLayers<K> {
        &self.regions
    }

    /// The region layers, for repopulating after the overlay changes.
    pub fn regions_mut(&mut self) -> &mut RegionLayers<K> {
        &mut self.regions
    }

    /// The compositor.
    #[must_use]
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// The compositor, mutably.
    pub fn compositor_mut(&mut self) -> &mut C {
        &mut self.compositor
    }

    /// Current interpolation quality.
    #[must_use]
    pub fn quality(&self) -> QualityMode {
        self.quality
    }

    /// Returns `true` while momentum scrolling is running.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.momentum.is_active()
    }

    /// Returns `true` while a fly-to navigation is running.
    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.navigator.is_active()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pan.is_dragging()
    }

    /// Number of successful overlay refreshes.
    #[must_use]
    pub fn overlay_generation(&self) -> u64 {
        self.overlay_generation
    }

    /// Queued notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Drain<'_, Notification<K>> {
        self.notifications.drain(..)
    }

    /// Loads content of the given pixel size and redraws.
    ///
    /// Cancels momentum and navigation. A zero dimension unloads.
    pub fn load_content(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            self.unload();
            return;
        }
        self.stop_motion();
        let zoom = self.camera.zoom();
        if self.camera.load_content(width, height) {
            debug!(width, height, "content loaded");
            self.notify_zoom_if_changed(zoom);
        }
        self.redraw();
    }

    /// Releases the content, clears both region layers and stops every timer.
    pub fn unload(&mut self) {
        self.stop_motion();
        self.timers.cancel_all();
        self.pan.reset();
        self.regions.clear_all();
        self.quality = QualityMode::HighQuality;
        if self.camera.has_content() {
            debug!("content unloaded");
        }
        self.camera.unload_content();
        self.redraw();
    }

    /// Resizes the viewport, keeping the current center.
    pub fn resize(&mut self, viewport: Size) {
        let zoom = self.camera.zoom();
        self.camera.set_viewport_size(viewport);
        self.notify_zoom_if_changed(zoom);
        self.redraw();
    }

    /// Switches fill-viewport mode, used while the view is detached into an
    /// oversized window.
    pub fn set_fill_viewport(&mut self, fill: bool) {
        self.config.fill_viewport = fill;
        let zoom = self.camera.zoom();
        self.camera.set_fill_viewport(fill);
        self.notify_zoom_if_changed(zoom);
        self.redraw();
    }

    /// Switches reduced-motion mode; turning it on stops any momentum.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.config.reduced_motion = reduced;
        self.momentum.set_reduced_motion(reduced);
        if self.timers.cancel(Timer::Momentum) {
            self.schedule_settle();
        }
    }

    /// Asks the compositor to re-render the overlay and redraws.
    ///
    /// On failure the error is logged and returned; the previous overlay
    /// stays on screen.
    pub fn refresh_overlay(&mut self) -> Result<(), AllocationError> {
        let Some(size) = self.camera.content_size() else {
            return Ok(());
        };
        if let Err(err) = self.compositor.render_overlay(size) {
            warn!(width = err.width, height = err.height, error = %err, "overlay refresh failed");
            return Err(err);
        }
        self.overlay_generation += 1;
        self.redraw();
        Ok(())
    }

    /// Paints the current view, or the placeholder when there is no content.
    pub fn redraw(&mut self) {
        match self.camera.visible_rect().zip(self.camera.dest_rect()) {
            Some((src, dest)) => {
                self.compositor.draw_background(dest);
                self.compositor.draw_composited(src, dest, self.quality);
            }
            None => self.compositor.draw_empty(self.camera.viewport_rect()),
        }
    }

    /// Sets the zoom around a screen anchor.
    ///
    /// Returns `true` if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64, anchor: Point) -> bool {
        if !self.camera.set_zoom(zoom, anchor) {
            return false;
        }
        self.notifications
            .push(Notification::ZoomChanged(self.camera.zoom()));
        self.enter_fast();
        self.schedule_settle();
        self.redraw();
        true
    }

    /// Starts an animated flight to a content point.
    ///
    /// With `zoom_to_max` the zoom is animated to the maximum as well. Any
    /// momentum is cancelled and a drag in progress is ended, so the
    /// release that follows cannot start momentum against the flight.
    /// Returns `false` without content.
    pub fn navigate_to(&mut self, target: Point, zoom_to_max: bool) -> bool {
        if self.momentum.cancel() {
            self.timers.cancel(Timer::Momentum);
        }
        if !self.navigator.start(&self.camera, target, zoom_to_max) {
            return false;
        }
        // Keeps the moved flag for click suppression.
        self.pan.end();
        debug!(x = target.x, y = target.y, zoom_to_max, "navigation started");
        self.timers
            .schedule(Timer::Navigation, self.config.tick_interval_ms);
        self.enter_fast();
        true
    }

    /// Advances timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for timer in self.timers.advance(elapsed_ms) {
            match timer {
                Timer::Momentum => self.tick_momentum(),
                Timer::Navigation => self.tick_navigation(),
                Timer::QualitySettle => self.settle(),
            }
        }
    }

    /// Pointer pressed at screen point `pos`.
    ///
    /// The primary button starts a pan and cancels momentum and navigation.
    pub fn pointer_down(&mut self, pos: Point, button: PointerButton) {
        self.pan.press();
        if button != PointerButton::Primary {
            return;
        }
        let Some(grab) = self.camera.screen_to_content(pos) else {
            return;
        };
        self.stop_motion();
        self.pan.start(pos, grab);
    }

    /// Pointer moved to screen point `pos`.
    ///
    /// Pans while a drag is active; otherwise hit-tests the region layers and
    /// queues a [`Notification::PointerMoved`].
    pub fn pointer_move(&mut self, pos: Point) {
        if self.pan.is_dragging() {
            self.drag_to(pos);
            return;
        }
        let Some(content) = self.camera.screen_to_content(pos) else {
            return;
        };
        let hit = self
            .regions
            .query_content_point(content)
            .map(|(layer, tag)| (layer, tag.clone()));
        self.notifications
            .push(Notification::PointerMoved { content, hit });
    }

    /// Pointer released at screen point `pos`.
    ///
    /// Ending a pan with enough travel between the last two samples starts
    /// momentum scrolling.
    pub fn pointer_up(&mut self, pos: Point, button: PointerButton) {
        if button != PointerButton::Primary || !self.pan.is_dragging() {
            return;
        }
        if self.pan.last_pos().is_some_and(|last| last != pos) {
            self.drag_to(pos);
        }
        let Some((previous, last)) = self.pan.end() else {
            return;
        };
        if !self.navigator.is_active() && self.momentum.release(previous, last) {
            debug!(state = ?self.momentum.state(), "momentum started");
            self.timers
                .schedule(Timer::Momentum, self.config.tick_interval_ms);
        } else if self.quality == QualityMode::Fast {
            self.schedule_settle();
        }
    }

    /// Click at screen point `pos`; ignored if it ended a drag.
    pub fn click(&mut self, pos: Point, button: PointerButton) {
        if let Some(content) = self.click_target(pos) {
            self.notifications
                .push(Notification::Clicked { content, button });
        }
    }

    /// Double click at screen point `pos`; ignored if it ended a drag.
    pub fn double_click(&mut self, pos: Point, button: PointerButton) {
        if let Some(content) = self.click_target(pos) {
            self.notifications
                .push(Notification::DoubleClicked { content, button });
        }
    }

    /// Mouse wheel at screen point `pos`.
    ///
    /// Each [`WHEEL_NOTCH`] of `delta` multiplies the zoom by the configured
    /// step around the pointer; negative deltas zoom out.
    pub fn wheel(&mut self, pos: Point, delta: f64) -> bool {
        if delta == 0.0 || !delta.is_finite() {
            return false;
        }
        let factor = self.config.zoom_step.powf(delta / WHEEL_NOTCH);
        self.set_zoom(self.camera.zoom() * factor, pos)
    }

    /// Zoom key, applied around the viewport center.
    pub fn key(&mut self, key: ZoomKey) -> bool {
        let factor = match key {
            ZoomKey::In => self.config.zoom_step,
            ZoomKey::Out => self.config.zoom_step.recip(),
        };
        let anchor = self.camera.viewport_center();
        self.set_zoom(self.camera.zoom() * factor, anchor)
    }

    /// First region hit under a screen point.
    #[must_use]
    pub fn hit_test(&self, pos: Point) -> Option<(Layer, &K)> {
        let content = self.camera.screen_to_content(pos)?;
        self.regions.query_content_point(content)
    }

    fn drag_to(&mut self, pos: Point) {
        let Some(delta) = self.pan.update(pos, self.config.click_slop) else {
            return;
        };
        if delta == Vec2::ZERO {
            return;
        }
        let Some(grab_screen) = self.pan.grab().and_then(|g| self.camera.content_to_screen(g))
        else {
            return;
        };
        let clamped = self.camera.pan_by(grab_screen - pos);
        if clamped.any()
            && let Some(content) = self.camera.screen_to_content(pos)
        {
            self.pan.regrab(clamped, content);
        }
        self.enter_fast();
        self.redraw();
    }

    fn click_target(&self, pos: Point) -> Option<Point> {
        if self.pan.moved() {
            return None;
        }
        self.camera.screen_to_content(pos)
    }

    fn tick_momentum(&mut self) {
        match self.momentum.tick(&mut self.camera) {
            MomentumTick::Idle => {
                self.timers.cancel(Timer::Momentum);
            }
            MomentumTick::Moved => {
                trace!(state = ?self.momentum.state(), "momentum tick");
                self.enter_fast();
                self.redraw();
            }
            MomentumTick::Stopped(reason) => {
                debug!(?reason, "momentum stopped");
                self.timers.cancel(Timer::Momentum);
                self.schedule_settle();
                self.redraw();
            }
        }
    }

    fn tick_navigation(&mut self) {
        match self.navigator.tick(&mut self.camera) {
            NavigatorTick::Idle => {
                self.timers.cancel(Timer::Navigation);
            }
            NavigatorTick::Stepped { step, zoom_changed } => {
                trace!(step, "navigation tick");
                if zoom_changed {
                    self.notifications
                        .push(Notification::ZoomChanged(self.camera.zoom()));
                }
                self.redraw();
            }
            NavigatorTick::Completed { zoom_changed } => {
                debug!(center = ?self.camera.center(), "navigation completed");
                self.timers.cancel(Timer::Navigation);
                if zoom_changed {
                    self.notifications
                        .push(Notification::ZoomChanged(self.camera.zoom()));
                }
                self.notifications
                    .push(Notification::ScrollAnimationCompleted);
                self.schedule_settle();
                self.redraw();
            }
        }
    }

    fn settle(&mut self) {
        self.timers.cancel(Timer::QualitySettle);
        if self.pan.is_dragging() || self.momentum.is_active() || self.navigator.is_active() {
            return;
        }
        if self.quality == QualityMode::Fast {
            self.quality = QualityMode::HighQuality;
            self.redraw();
        }
    }

    fn enter_fast(&mut self) {
        self.quality = QualityMode::Fast;
        self.timers.cancel(Timer::QualitySettle);
    }

    fn schedule_settle(&mut self) {
        self.timers
            .schedule(Timer::QualitySettle, self.config.settle_delay_ms);
    }

    fn stop_motion(&mut self) {
        let scrolling = self.momentum.cancel();
        let navigating = self.navigator.cancel();
        self.timers.cancel(Timer::Momentum);
        self.timers.cancel(Timer::Navigation);
        if scrolling || navigating {
            debug!(scrolling, navigating, "motion cancelled");
            self.schedule_settle();
        }
    }

    fn notify_zoom_if_changed(&mut self, before: f64) {
        let zoom = self.camera.zoom();
        if (zoom - before).abs() >= f64::EPSILON {
            self.notifications.push(Notification::ZoomChanged(zoom));
        }
    }
}
