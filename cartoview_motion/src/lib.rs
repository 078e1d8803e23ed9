// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartoview Motion: tick-driven movement of a [`Camera`].
//!
//! Everything here is advanced by the host, one fixed-interval tick at a
//! time, on the same thread that delivers input:
//!
//! - [`TickScheduler`]: independent, cancellable periodic tasks keyed by a
//!   caller-chosen type. The host feeds it elapsed milliseconds and runs the
//!   handlers for whatever is due.
//! - [`Momentum`]: inertial scrolling after a drag is released. The velocity
//!   decays by one pixel per tick and stops early at a content edge.
//! - [`Navigator`]: a fixed number of eased steps flying the camera center
//!   to a target, optionally zooming to the maximum at the same time.
//! - [`EASING`]: the precomputed ease-in/ease-out curve the navigator
//!   samples.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use cartoview_camera::Camera;
//! use cartoview_motion::{Navigator, NavigatorTick, TickScheduler, DEFAULT_TICK_INTERVAL_MS};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Timer {
//!     Navigation,
//! }
//!
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//! camera.load_content(4000, 3000);
//!
//! let mut navigator = Navigator::new();
//! let mut timers = TickScheduler::new();
//! navigator.start(&camera, Point::new(1000.0, 1000.0), false);
//! timers.schedule(Timer::Navigation, DEFAULT_TICK_INTERVAL_MS);
//!
//! let mut done = false;
//! while !done {
//!     for timer in timers.advance(DEFAULT_TICK_INTERVAL_MS) {
//!         match timer {
//!             Timer::Navigation => {
//!                 if let NavigatorTick::Completed { .. } = navigator.tick(&mut camera) {
//!                     timers.cancel(Timer::Navigation);
//!                     done = true;
//!                 }
//!             }
//!         }
//!     }
//! }
//! let center = camera.center().unwrap();
//! assert!((center.x - 1000.0).abs() < 1e-9 && (center.y - 1000.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`Camera`]: cartoview_camera::Camera

#![no_std]

extern crate alloc;

mod easing;
mod momentum;
mod navigator;
mod scheduler;

pub use easing::{ANIMATION_STEPS, EASING, lerp, lerp_point};
pub use momentum::{DEFAULT_MOMENTUM_THRESHOLD, Momentum, MomentumState, MomentumTick, StopReason};
pub use navigator::{Flight, Navigator, NavigatorTick};
pub use scheduler::{DEFAULT_TICK_INTERVAL_MS, DueTasks, TickScheduler};
