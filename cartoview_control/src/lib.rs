// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartoview Control: an interactive map view over a [`Compositor`].
//!
//! [`MapControl`] ties together the pieces of a map viewer:
//! - a [`Camera`](cartoview_camera::Camera) over the background image,
//! - drag panning with momentum and animated fly-to navigation
//!   ([`cartoview_motion`]),
//! - marker hit-testing over two region layers ([`cartoview_regions`]),
//! - a [`QualityMode`] that drops to fast interpolation while the view
//!   moves and settles back afterwards.
//!
//! The host forwards pointer, wheel and key events, calls
//! [`MapControl::tick`] with elapsed time, and drains [`Notification`]s.
//! Every camera change is followed by a redraw through the compositor.
//!
//! Lifecycle events are logged with [`tracing`]: `debug` for loads,
//! navigation and momentum, `trace` for animation ticks, `warn` for overlay
//! allocation failures.
//!
//! ## Example
//!
//! ```
//! use cartoview_control::{
//!     AllocationError, Compositor, MapControl, Notification, QualityMode, ViewerConfig,
//! };
//! use kurbo::{Point, Rect, Size};
//!
//! #[derive(Default)]
//! struct Frames(usize);
//!
//! impl Compositor for Frames {
//!     fn draw_background(&mut self, _dest: Rect) {}
//!     fn draw_composited(&mut self, _src: Rect, _dest: Rect, _quality: QualityMode) {
//!         self.0 += 1;
//!     }
//!     fn draw_empty(&mut self, _viewport: Rect) {}
//!     fn render_overlay(&mut self, _content: Size) -> Result<(), AllocationError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut map: MapControl<Frames, u32> =
//!     MapControl::new(Size::new(800.0, 600.0), ViewerConfig::default(), Frames::default())
//!         .unwrap();
//! map.load_content(4000, 3000);
//! map.navigate_to(Point::new(3900.0, 100.0), true);
//!
//! while map.is_navigating() {
//!     map.tick(30);
//! }
//! let notes: Vec<_> = map.drain_notifications().collect();
//! assert_eq!(notes.last(), Some(&Notification::ScrollAnimationCompleted));
//! assert_eq!(map.camera().zoom(), 4.0);
//! ```

mod compositor;
mod config;
mod control;
mod error;
pub mod gesture;
mod input;

pub use compositor::{Compositor, QualityMode};
pub use config::{DEFAULT_SETTLE_DELAY_MS, DEFAULT_ZOOM_STEP, ViewerConfig};
pub use control::MapControl;
pub use error::{AllocationError, ConfigError};
pub use input::{Notification, PointerButton, WHEEL_NOTCH, ZoomKey};
