// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cartoview_regions::Layer;
use kurbo::Point;

/// Wheel delta of one detent.
pub const WHEEL_NOTCH: f64 = 120.0;

/// Mouse button of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button; drags pan the map.
    Primary,
    /// Right button.
    Secondary,
    /// Middle button.
    Auxiliary,
}

/// Keys the control responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomKey {
    /// `+`: zoom in around the viewport center.
    In,
    /// `-`: zoom out around the viewport center.
    Out,
}

/// Events queued for the host, drained with
/// [`MapControl::drain_notifications`](crate::MapControl::drain_notifications).
#[derive(Clone, Debug, PartialEq)]
pub enum Notification<K> {
    /// The zoom factor changed.
    ZoomChanged(f64),
    /// The pointer hovered over a content point.
    PointerMoved {
        /// Content point under the pointer.
        content: Point,
        /// First region hit, markers before the secondary layer.
        hit: Option<(Layer, K)>,
    },
    /// A click that was not part of a drag.
    Clicked {
        /// Content point under the pointer.
        content: Point,
        /// Button that clicked.
        button: PointerButton,
    },
    /// A double click that was not part of a drag.
    DoubleClicked {
        /// Content point under the pointer.
        content: Point,
        /// Button that clicked.
        button: PointerButton,
    },
    /// A fly-to navigation reached its target.
    ScrollAnimationCompleted,
}
