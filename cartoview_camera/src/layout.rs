// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A pair of per-axis booleans.
///
/// Used for letterbox state and for reporting which axes were clamped by the
/// last pan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AxisFlags {
    /// Horizontal axis.
    pub x: bool,
    /// Vertical axis.
    pub y: bool,
}

impl AxisFlags {
    /// Both flags cleared.
    pub const NONE: Self = Self { x: false, y: false };

    /// Creates flags from the two axis values.
    #[must_use]
    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    /// Returns `true` if either axis is set.
    #[must_use]
    pub const fn any(self) -> bool {
        self.x || self.y
    }

    /// Returns `true` if both axes are set.
    #[must_use]
    pub const fn both(self) -> bool {
        self.x && self.y
    }
}

/// Placement of one axis of the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    /// Start of the visible span, in content pixels.
    pub origin: f64,
    /// Length of the visible span, in content pixels.
    pub extent: f64,
    /// Where the visible span starts inside the viewport, in screen pixels.
    pub dest_origin: f64,
    /// Painted length of the visible span, in screen pixels.
    pub dest_extent: f64,
    /// The whole content extent fits inside the viewport on this axis.
    pub letterboxed: bool,
    /// The requested origin had to be moved to stay inside the content.
    pub clamped: bool,
}

/// Lays out a single axis.
///
/// `desired_origin` is where the caller would like the visible span to
/// start. If the zoomed content is narrower than the viewport
/// (`viewport > content * zoom`) the axis is letterboxed: the whole content
/// extent is shown, centered, and `desired_origin` is ignored. Otherwise the
/// visible extent is `viewport / zoom` and the origin is clamped into
/// `[0, content - extent]`.
///
/// A non-positive `content` extent is always letterboxed. `zoom` must be
/// positive.
#[must_use]
pub fn layout_axis(viewport: f64, content: f64, zoom: f64, desired_origin: f64) -> AxisLayout {
    debug_assert!(zoom > 0.0, "zoom must be positive, got {zoom}");
    let viewport = viewport.max(0.0);
    let content = content.max(0.0);
    let scaled = content * zoom;

    if content <= 0.0 || viewport > scaled {
        return AxisLayout {
            origin: 0.0,
            extent: content,
            dest_origin: (viewport - scaled) * 0.5,
            dest_extent: scaled,
            letterboxed: true,
            clamped: desired_origin != 0.0,
        };
    }

    let extent = viewport / zoom;
    // `viewport <= scaled` here, so this is never negative.
    let max_origin = (content - extent).max(0.0);
    let origin = if desired_origin.is_nan() {
        0.0
    } else {
        desired_origin.clamp(0.0, max_origin)
    };
    AxisLayout {
        origin,
        extent,
        dest_origin: 0.0,
        dest_extent: viewport,
        letterboxed: false,
        clamped: origin != desired_origin,
    }
}
