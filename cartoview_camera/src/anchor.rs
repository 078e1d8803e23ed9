// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom-anchor solver.
//!
//! When the zoom factor changes, the content point under an anchor (usually
//! the pointer or the viewport center) should stay under that anchor. Per
//! axis, with the anchor measured from the start of the painted area:
//!
//! ```text
//! anchor_content = origin + anchor / old_zoom
//! new_origin     = anchor_content - anchor / new_zoom
//! ```
//!
//! The solution is closed-form: it is recomputed from the current origin on
//! every call instead of being accumulated from the previous frame's zoom, so
//! repeated or skipped calls cannot drift. Clamping into the content bounds
//! is applied by the camera afterwards and may break the fixed-anchor
//! property at the content edges only.

use kurbo::Point;

/// Content point currently shown under `anchor`.
///
/// `dest_origin` is the screen position where the visible rectangle starts
/// (non-zero only on letterboxed axes).
#[must_use]
pub fn content_under_anchor(origin: Point, dest_origin: Point, zoom: f64, anchor: Point) -> Point {
    origin + (anchor - dest_origin) / zoom
}

/// Visible-rectangle origin that places `anchor_content` under `anchor` at
/// `zoom`.
#[must_use]
pub fn origin_keeping_anchor(
    anchor_content: Point,
    dest_origin: Point,
    zoom: f64,
    anchor: Point,
) -> Point {
    anchor_content - (anchor - dest_origin) / zoom
}

/// Solves for the new visible-rectangle origin across a zoom change.
///
/// `anchor` is relative to the painted area's origin. This is the
/// single-step form for cameras whose painted area starts at the viewport
/// origin on both axes before and after the change.
#[must_use]
pub fn solve(origin: Point, old_zoom: f64, new_zoom: f64, anchor: Point) -> Point {
    let anchor_content = content_under_anchor(origin, Point::ZERO, old_zoom, anchor);
    origin_keeping_anchor(anchor_content, Point::ZERO, new_zoom, anchor)
}
