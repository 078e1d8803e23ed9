// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartoview Regions: hit-test regions for markers placed on a map.
//!
//! A [`RegionIndex`] is an ordered list of tagged, axis-aligned squares in
//! content (image pixel) space. Point queries scan the list **in insertion
//! order** and return the first region that contains the point, so when
//! regions overlap the one added first always wins. Callers such as
//! "click a marker to open its alert" rely on that being deterministic; it
//! is a first-match index, not a nearest-match one.
//!
//! Indexes are rebuilt rather than patched: clear, then add every region
//! again whenever the marker data refreshes.
//!
//! [`RegionLayers`] bundles the two independent indexes a map keeps: one for
//! the main markers and one for a secondary overlay layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use cartoview_regions::RegionIndex;
//!
//! let mut index = RegionIndex::new();
//! index.add_region((100, 100), 10, "cp-1");
//! index.add_region((105, 105), 10, "cp-2");
//!
//! // Inside both squares: the first one added wins.
//! assert_eq!(index.query_point(103, 103), Some(&"cp-1"));
//! // Only inside the second.
//! assert_eq!(index.query_point(112, 112), Some(&"cp-2"));
//! // Inside neither.
//! assert_eq!(index.query_point(0, 0), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod index;
mod layers;
mod rect;

pub use index::{Region, RegionIndex};
pub use layers::{Layer, RegionLayers};
pub use rect::{RegionRect, content_pixel};
