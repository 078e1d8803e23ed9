// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartoview Camera: a pan/zoom camera over a bounded background image.
//!
//! This crate models the view of a large map image shown inside a smaller
//! viewport. It focuses on:
//! - Camera state: zoom factor, visible content rectangle, and where that
//!   rectangle is painted inside the viewport.
//! - Letterboxing: an axis on which the zoomed content is smaller than the
//!   viewport shows the full content extent, centered, and cannot be panned.
//! - Edge clamping: the visible rectangle never leaves the content bounds.
//! - Anchor-preserving zoom (see [`anchor`]).
//! - Conversion between content (image pixel) and screen (viewport pixel)
//!   coordinates.
//!
//! It does **not** own any pixels or rendering backend. Callers are expected
//! to feed [`Camera::visible_rect`] and [`Camera::dest_rect`] into whatever
//! compositor they use, and to drive gestures at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use cartoview_camera::Camera;
//!
//! // 800x600 viewport over a 4000x3000 map.
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//! camera.load_content(4000, 3000);
//! assert_eq!(camera.center(), Some(Point::new(2000.0, 1500.0)));
//!
//! // Zoom in around the viewport center; the center stays put.
//! camera.set_zoom(2.0, Point::new(400.0, 300.0));
//! let visible = camera.visible_rect().unwrap();
//! assert_eq!((visible.x0, visible.y0), (1800.0, 1350.0));
//! assert_eq!((visible.x1, visible.y1), (2200.0, 1650.0));
//!
//! // Convert a pointer position into map coordinates for hit testing.
//! let on_map = camera.screen_to_content(Point::new(0.0, 0.0)).unwrap();
//! assert_eq!(on_map, Point::new(1800.0, 1350.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; there is no rotation.
//! - With no content loaded every operation is a no-op and every query
//!   returns `None`.
//! - A zero-sized content or viewport axis is treated as fully letterboxed
//!   rather than divided by.
//!
//! This crate is `no_std`.

#![no_std]

pub mod anchor;
mod camera;
mod layout;

pub use camera::{Camera, CameraDebugInfo, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
pub use layout::{AxisFlags, AxisLayout, layout_axis};
