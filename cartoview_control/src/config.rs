// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cartoview_camera::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use cartoview_motion::{DEFAULT_MOMENTUM_THRESHOLD, DEFAULT_TICK_INTERVAL_MS};

use crate::error::ConfigError;

/// Default zoom multiplier per wheel notch or key press.
pub const DEFAULT_ZOOM_STEP: f64 = 1.25;

/// Default delay before rendering quality reverts after a gesture.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 250;

/// Tunables for a [`MapControl`](crate::MapControl).
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewerConfig {
    /// Interval of the momentum and navigation ticks.
    pub tick_interval_ms: u32,
    /// Lowest zoom factor.
    pub min_zoom: f64,
    /// Highest zoom factor; fly-to navigation zooms here.
    pub max_zoom: f64,
    /// Zoom multiplier per wheel notch or `+`/`-` key press.
    pub zoom_step: f64,
    /// Release distance, in screen pixels, above which momentum starts.
    pub momentum_threshold: f64,
    /// Reduced motion / high performance mode: no inertia after drags.
    pub reduced_motion: bool,
    /// Keep the content filling the viewport at the minimum zoom (detached,
    /// oversized windows).
    pub fill_viewport: bool,
    /// Delay before fast rendering reverts to high quality.
    pub settle_delay_ms: u32,
    /// Pointer travel, in screen pixels, that turns a press into a drag and
    /// suppresses the click.
    pub click_slop: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            momentum_threshold: DEFAULT_MOMENTUM_THRESHOLD,
            reduced_motion: false,
            fill_viewport: false,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            click_slop: 0.0,
        }
    }
}

impl ViewerConfig {
    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        let zoom_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom;
        if !zoom_ok {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        for (name, value) in [
            ("momentum_threshold", self.momentum_threshold),
            ("click_slop", self.click_slop),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}
