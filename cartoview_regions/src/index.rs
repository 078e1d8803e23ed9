// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered region list with linear first-match scans.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use kurbo::Point;

use crate::rect::{RegionRect, content_pixel};

/// A tagged hit-test region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region<K> {
    /// Bounding square in content pixels.
    pub rect: RegionRect,
    /// Caller-defined identifier, for example the marker's subject.
    pub tag: K,
}

/// Insertion-ordered list of tagged regions.
pub struct RegionIndex<K> {
    regions: Vec<Region<K>>,
}

impl<K> Default for RegionIndex<K> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<K> Debug for RegionIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionIndex")
            .field("regions", &self.regions.len())
            .finish_non_exhaustive()
    }
}

impl<K: Clone> Clone for RegionIndex<K> {
    fn clone(&self) -> Self {
        Self {
            regions: self.regions.clone(),
        }
    }
}

impl<K> RegionIndex<K> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every region.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Appends a square region of side `2 * radius` around `center`.
    pub fn add_region(&mut self, center: (i32, i32), radius: i32, tag: K) {
        self.add_rect(RegionRect::square(center, radius), tag);
    }

    /// Appends a region with an explicit bounding rectangle.
    pub fn add_rect(&mut self, rect: RegionRect, tag: K) {
        self.regions.push(Region { rect, tag });
    }

    /// Returns the tag of the first region, in insertion order, containing
    /// the pixel `(x, y)`.
    #[must_use]
    pub fn query_point(&self, x: i32, y: i32) -> Option<&K> {
        self.regions
            .iter()
            .find(|region| region.rect.contains(x, y))
            .map(|region| &region.tag)
    }

    /// Like [`RegionIndex::query_point`], for a fractional content point.
    ///
    /// The point is floored to the pixel that contains it.
    #[must_use]
    pub fn query_content_point(&self, pt: Point) -> Option<&K> {
        let (x, y) = content_pixel(pt)?;
        self.query_point(x, y)
    }

    /// Visits every region containing `(x, y)`, in insertion order.
    pub fn visit_point<F: FnMut(&Region<K>)>(&self, x: i32, y: i32, mut f: F) {
        for region in &self.regions {
            if region.rect.contains(x, y) {
                f(region);
            }
        }
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if there are no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in insertion order.
    #[must_use]
    pub fn regions(&self) -> &[Region<K>] {
        &self.regions
    }

    /// Iterates regions in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Region<K>> {
        self.regions.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::RegionIndex;
    use crate::RegionRect;

    #[test]
    fn overlapping_regions_resolve_to_first_inserted() {
        let mut index = RegionIndex::new();
        index.add_region((100, 100), 10, "cp-1");
        index.add_region((105, 105), 10, "cp-2");
        assert_eq!(index.query_point(103, 103), Some(&"cp-1"));

        // Reverse insertion order flips the winner.
        let mut index = RegionIndex::new();
        index.add_region((105, 105), 10, "cp-2");
        index.add_region((100, 100), 10, "cp-1");
        assert_eq!(index.query_point(103, 103), Some(&"cp-2"));
    }

    #[test]
    fn miss_returns_none() {
        let mut index = RegionIndex::new();
        assert_eq!(index.query_point(0, 0), None);
        index.add_region((50, 50), 5, 7_u32);
        assert_eq!(index.query_point(0, 0), None);
        assert_eq!(index.query_point(55, 50), None);
    }

    #[test]
    fn later_regions_do_not_change_earlier_answers() {
        let mut index = RegionIndex::new();
        index.add_region((10, 10), 4, 'a');
        let before = index.query_point(11, 11).copied();
        index.add_region((11, 11), 8, 'b');
        index.add_rect(RegionRect::new(0, 0, 100, 100), 'c');
        assert_eq!(index.query_point(11, 11).copied(), before);
        assert_eq!(index.query_point(50, 50), Some(&'c'));
    }

    #[test]
    fn visit_reports_all_hits_in_order() {
        let mut index = RegionIndex::new();
        index.add_region((0, 0), 10, 1);
        index.add_region((100, 100), 10, 2);
        index.add_region((2, 2), 10, 3);
        let mut hits = Vec::new();
        index.visit_point(1, 1, |r| hits.push(r.tag));
        assert_eq!(hits, [1, 3]);
    }

    #[test]
    fn clear_then_repopulate() {
        let mut index = RegionIndex::new();
        index.add_region((0, 0), 10, "old");
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.query_point(0, 0), None);
        index.add_region((0, 0), 10, "new");
        assert_eq!(index.len(), 1);
        assert_eq!(index.query_content_point(Point::new(0.7, -0.2)), Some(&"new"));
        assert_eq!(index.regions()[0].tag, "new");
        assert_eq!(index.iter().map(|r| r.tag).collect::<Vec<_>>(), ["new"]);
    }
}
