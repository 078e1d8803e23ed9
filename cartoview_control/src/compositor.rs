// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::error::AllocationError;

/// Interpolation quality for scaled blits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualityMode {
    /// Nearest-neighbor or similar; used while the view is moving.
    Fast,
    /// Smooth interpolation once the view settles.
    #[default]
    HighQuality,
}

/// Drawing backend driven by a [`MapControl`](crate::MapControl).
///
/// Rectangles passed to the draw calls come straight from the camera:
/// `src` in content pixels, `dest` and `viewport` in screen pixels.
pub trait Compositor {
    /// Clears `dest` before the content is composited onto it.
    fn draw_background(&mut self, dest: Rect);

    /// Blits `src` of the composited content (base image plus overlay) into
    /// `dest`.
    fn draw_composited(&mut self, src: Rect, dest: Rect, quality: QualityMode);

    /// Paints the no-content placeholder over the whole viewport.
    fn draw_empty(&mut self, viewport: Rect);

    /// Re-renders the overlay for content of the given size.
    ///
    /// On failure the compositor must keep its previous overlay.
    fn render_overlay(&mut self, content_size: Size) -> Result<(), AllocationError>;
}
