// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::anchor;
use crate::layout::{AxisFlags, AxisLayout, layout_axis};

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.25;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// Camera over a bounded background image.
///
/// `Camera` tracks the viewport size, the content (image) size, and a uniform
/// zoom factor, and derives from them:
/// - the **visible rect**: the part of the content currently shown, in
///   content pixels;
/// - the **dest rect**: where that part is painted inside the viewport, in
///   screen pixels. It covers the whole viewport unless an axis is
///   letterboxed.
///
/// After every operation the visible rect lies inside the content bounds.
#[derive(Clone, Debug)]
pub struct Camera {
    viewport: Size,
    content: Option<Size>,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    fill_viewport: bool,
    visible: Rect,
    dest: Rect,
    letterboxed: AxisFlags,
    last_clamp: AxisFlags,
}

impl Camera {
    /// Creates a camera for a viewport of the given size, with no content.
    ///
    /// - Initial zoom is `1.0`.
    /// - Zoom is clamped to `[DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM]`.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            content: None,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            fill_viewport: false,
            visible: Rect::ZERO,
            dest: Rect::ZERO,
            letterboxed: AxisFlags::NONE,
            last_clamp: AxisFlags::NONE,
        }
    }

    /// Returns the viewport size in screen pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the viewport as a rectangle anchored at the screen origin.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        self.viewport.to_rect()
    }

    /// Returns the center of the viewport in screen pixels.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        self.viewport_rect().center()
    }

    /// Returns the content size, or `None` when nothing is loaded.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Returns `true` when content is loaded.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Returns the current zoom factor (screen pixels per content pixel).
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the configured minimum zoom.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the configured maximum zoom.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Returns the lowest zoom [`Camera::set_zoom`] will accept.
    ///
    /// Normally this is the configured minimum. With
    /// [`Camera::set_fill_viewport`] enabled it is raised so that the content
    /// always fills the viewport: `max(min_zoom, vw / cw, vh / ch)`. It never
    /// exceeds the configured maximum.
    #[must_use]
    pub fn effective_min_zoom(&self) -> f64 {
        let mut min = self.min_zoom;
        if self.fill_viewport
            && let Some(content) = self.content
        {
            if content.width > 0.0 {
                min = min.max(self.viewport.width / content.width);
            }
            if content.height > 0.0 {
                min = min.max(self.viewport.height / content.height);
            }
        }
        min.min(self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`.
    /// Non-positive bounds are ignored. The current zoom is clamped into the
    /// new range around the viewport center.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if min_zoom.is_nan() || max_zoom.is_nan() || min_zoom <= 0.0 || max_zoom <= 0.0 {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.reclamp_zoom();
    }

    /// Allows the viewport to outgrow the content at the minimum zoom.
    ///
    /// When enabled (for example when the map is detached into a window larger
    /// than its default footprint) the effective minimum zoom is raised so
    /// the content keeps filling the viewport.
    pub fn set_fill_viewport(&mut self, fill: bool) {
        if self.fill_viewport != fill {
            self.fill_viewport = fill;
            self.reclamp_zoom();
        }
    }

    /// Returns whether the effective minimum zoom tracks the viewport.
    #[must_use]
    pub fn fill_viewport(&self) -> bool {
        self.fill_viewport
    }

    /// Returns the visible part of the content, in content pixels.
    #[must_use]
    pub fn visible_rect(&self) -> Option<Rect> {
        self.content.map(|_| self.visible)
    }

    /// Returns where the visible rect is painted, in screen pixels.
    #[must_use]
    pub fn dest_rect(&self) -> Option<Rect> {
        self.content.map(|_| self.dest)
    }

    /// Returns which axes are currently letterboxed.
    #[must_use]
    pub fn letterboxed(&self) -> AxisFlags {
        self.letterboxed
    }

    /// Returns which axes were clamped by the last [`Camera::pan_by`].
    #[must_use]
    pub fn last_clamp(&self) -> AxisFlags {
        self.last_clamp
    }

    /// Returns the content point at the center of the visible rect.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.content.map(|_| self.visible.center())
    }

    /// Loads content of the given pixel size.
    ///
    /// The first load centers the content. Reloading with a different size
    /// keeps the same *relative* view position: the previous center is scaled
    /// onto the new size. A zero width or height unloads instead.
    ///
    /// Returns `true` if the camera changed.
    pub fn load_content(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            let had_content = self.content.is_some();
            self.unload_content();
            return had_content;
        }
        let size = Size::new(f64::from(width), f64::from(height));
        let center = match self.content {
            Some(old) if old == size => return false,
            Some(old) => {
                let center = self.visible.center();
                Point::new(
                    center.x / old.width * size.width,
                    center.y / old.height * size.height,
                )
            }
            None => size.to_rect().center(),
        };
        self.content = Some(size);
        self.zoom = self.zoom.clamp(self.effective_min_zoom(), self.max_zoom);
        self.center_on(center);
        true
    }

    /// Releases the content; the camera becomes "not visible".
    pub fn unload_content(&mut self) {
        self.content = None;
        self.visible = Rect::ZERO;
        self.dest = Rect::ZERO;
        self.letterboxed = AxisFlags::NONE;
        self.last_clamp = AxisFlags::NONE;
    }

    /// Resizes the viewport, keeping the current center.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport == size {
            return;
        }
        let center = self.center();
        self.viewport = size;
        if self.content.is_none() {
            return;
        }
        self.zoom = self.zoom.clamp(self.effective_min_zoom(), self.max_zoom);
        if let Some(center) = center {
            self.center_on(center);
        }
    }

    /// Sets the zoom factor, keeping the content under `anchor` fixed.
    ///
    /// `new_zoom` is clamped into `[effective_min_zoom, max_zoom]`. `anchor`
    /// is in screen pixels, typically the pointer or the viewport center.
    /// After the zoom the visible rect is clamped into the content bounds,
    /// which can move the anchor at the content edges.
    ///
    /// Returns `true` if the zoom changed; callers raise their zoom-changed
    /// notification from that.
    pub fn set_zoom(&mut self, new_zoom: f64, anchor: Point) -> bool {
        let Some(content) = self.content else {
            return false;
        };
        if new_zoom.is_nan() || new_zoom <= 0.0 {
            return false;
        }
        let clamped = new_zoom.clamp(self.effective_min_zoom(), self.max_zoom);
        if (clamped - self.zoom).abs() < f64::EPSILON {
            return false;
        }

        let anchor_content =
            anchor::content_under_anchor(self.visible.origin(), self.dest.origin(), self.zoom, anchor);
        self.zoom = clamped;

        // Letterboxing at the new zoom decides where the painted area starts.
        let probe_x = layout_axis(self.viewport.width, content.width, clamped, 0.0);
        let probe_y = layout_axis(self.viewport.height, content.height, clamped, 0.0);
        let dest_origin = Point::new(probe_x.dest_origin, probe_y.dest_origin);
        let origin = anchor::origin_keeping_anchor(anchor_content, dest_origin, clamped, anchor);
        self.relayout(origin);
        true
    }

    /// Pans by a delta in screen pixels.
    ///
    /// The visible rect moves by `delta / zoom` content pixels on every axis
    /// that is not letterboxed, then is clamped into the content bounds. A
    /// positive delta moves the view towards larger content coordinates.
    ///
    /// Returns (and records, see [`Camera::last_clamp`]) which axes were
    /// clamped. Drag handlers use this to re-grab the content on a pinned axis
    /// instead of letting the pointer run ahead of it.
    pub fn pan_by(&mut self, delta: Vec2) -> AxisFlags {
        if self.content.is_none() {
            return AxisFlags::NONE;
        }
        let desired = self.visible.origin() + delta / self.zoom;
        let flags = self.relayout(desired);
        self.last_clamp = flags;
        flags
    }

    /// Centers the view on a content point, clamped into the content bounds.
    ///
    /// Returns `true` if the visible rect moved.
    pub fn set_center(&mut self, center: Point) -> bool {
        if self.content.is_none() {
            return false;
        }
        let before = self.visible;
        self.center_on(center);
        self.visible != before
    }

    /// Returns the center the camera would have after centering on `point`.
    ///
    /// The result accounts for clamping. With `at_max_zoom` it is evaluated
    /// at the maximum zoom instead of the current one. Nothing is mutated;
    /// this is how animated navigation precomputes a reachable target.
    #[must_use]
    pub fn bounded_center(&self, point: Point, at_max_zoom: bool) -> Option<Point> {
        let content = self.content?;
        let zoom = if at_max_zoom { self.max_zoom } else { self.zoom };
        let (x, y) = self.layout_centered(content, zoom, point);
        Some(Point::new(x.origin + x.extent * 0.5, y.origin + y.extent * 0.5))
    }

    /// Converts a screen point into content coordinates.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Option<Point> {
        self.content?;
        Some(anchor::content_under_anchor(
            self.visible.origin(),
            self.dest.origin(),
            self.zoom,
            pt,
        ))
    }

    /// Converts a content point into screen coordinates.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Option<Point> {
        self.content?;
        Some(self.dest.origin() + (pt - self.visible.origin()) * self.zoom)
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            viewport: self.viewport,
            content: self.content,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            effective_min_zoom: self.effective_min_zoom(),
            max_zoom: self.max_zoom,
            visible_rect: self.visible_rect(),
            dest_rect: self.dest_rect(),
            letterboxed: self.letterboxed,
            last_clamp: self.last_clamp,
        }
    }

    fn reclamp_zoom(&mut self) {
        let clamped = self.zoom.clamp(self.effective_min_zoom(), self.max_zoom);
        if self.content.is_none() {
            self.zoom = clamped;
            return;
        }
        let anchor = self.viewport_center();
        self.set_zoom(clamped, anchor);
    }

    fn layout_centered(&self, content: Size, zoom: f64, center: Point) -> (AxisLayout, AxisLayout) {
        let probe_x = layout_axis(self.viewport.width, content.width, zoom, 0.0);
        let probe_y = layout_axis(self.viewport.height, content.height, zoom, 0.0);
        (
            layout_axis(
                self.viewport.width,
                content.width,
                zoom,
                center.x - probe_x.extent * 0.5,
            ),
            layout_axis(
                self.viewport.height,
                content.height,
                zoom,
                center.y - probe_y.extent * 0.5,
            ),
        )
    }

    fn center_on(&mut self, center: Point) {
        if let Some(content) = self.content {
            let (x, y) = self.layout_centered(content, self.zoom, center);
            self.apply(x, y);
        }
    }

    fn relayout(&mut self, desired_origin: Point) -> AxisFlags {
        let Some(content) = self.content else {
            return AxisFlags::NONE;
        };
        let x = layout_axis(self.viewport.width, content.width, self.zoom, desired_origin.x);
        let y = layout_axis(self.viewport.height, content.height, self.zoom, desired_origin.y);
        self.apply(x, y)
    }

    fn apply(&mut self, x: AxisLayout, y: AxisLayout) -> AxisFlags {
        self.visible = Rect::new(x.origin, y.origin, x.origin + x.extent, y.origin + y.extent);
        self.dest = Rect::new(
            x.dest_origin,
            y.dest_origin,
            x.dest_origin + x.dest_extent,
            y.dest_origin + y.dest_extent,
        );
        self.letterboxed = AxisFlags::new(x.letterboxed, y.letterboxed);
        AxisFlags::new(x.clamped, y.clamped)
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Viewport size in screen pixels.
    pub viewport: Size,
    /// Loaded content size, if any.
    pub content: Option<Size>,
    /// Current zoom factor.
    pub zoom: f64,
    /// Configured minimum zoom.
    pub min_zoom: f64,
    /// Minimum zoom after viewport filling is applied.
    pub effective_min_zoom: f64,
    /// Configured maximum zoom.
    pub max_zoom: f64,
    /// Visible content rectangle.
    pub visible_rect: Option<Rect>,
    /// Screen rectangle the visible content is painted into.
    pub dest_rect: Option<Rect>,
    /// Letterboxed axes.
    pub letterboxed: AxisFlags,
    /// Axes clamped by the last pan.
    pub last_clamp: AxisFlags,
}
