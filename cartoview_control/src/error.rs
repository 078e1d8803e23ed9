// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error as StdError;

/// The compositor could not allocate a surface for the overlay.
///
/// The previous overlay stays in use; retrying (for example after the host
/// frees memory or shrinks the content) is always safe.
#[derive(Debug, thiserror::Error)]
#[error("failed to allocate a {width}x{height} overlay surface")]
pub struct AllocationError {
    /// Requested surface width in pixels.
    pub width: u32,
    /// Requested surface height in pixels.
    pub height: u32,
    #[source]
    cause: Box<dyn StdError + Send + Sync + 'static>,
}

impl AllocationError {
    /// Wraps the underlying cause of a failed allocation.
    pub fn new(
        width: u32,
        height: u32,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            width,
            height,
            cause: cause.into(),
        }
    }

    /// The underlying cause.
    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }
}

/// A [`ViewerConfig`](crate::ViewerConfig) value is out of range.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Ticks must have a positive interval.
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    /// Zoom bounds must be finite, positive and ordered.
    #[error("invalid zoom range [{min}, {max}]")]
    InvalidZoomRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The zoom step must be greater than one.
    #[error("zoom step must be greater than 1, got {0}")]
    InvalidZoomStep(f64),
    /// A distance must be finite and non-negative.
    #[error("{name} must be a non-negative number, got {value}")]
    Negative {
        /// Offending field.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
