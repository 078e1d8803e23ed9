// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::index::RegionIndex;

/// The two region layers a map keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// General map markers.
    Markers,
    /// A secondary overlay layer, such as death markers.
    Secondary,
}

impl Layer {
    /// Both layers, in query priority order.
    pub const ALL: [Self; 2] = [Self::Markers, Self::Secondary];
}

/// Two independent [`RegionIndex`] instances, one per [`Layer`].
#[derive(Debug)]
pub struct RegionLayers<K> {
    markers: RegionIndex<K>,
    secondary: RegionIndex<K>,
}

impl<K> Default for RegionLayers<K> {
    fn default() -> Self {
        Self {
            markers: RegionIndex::new(),
            secondary: RegionIndex::new(),
        }
    }
}

impl<K> RegionLayers<K> {
    /// Creates two empty layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns one layer's index.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> &RegionIndex<K> {
        match layer {
            Layer::Markers => &self.markers,
            Layer::Secondary => &self.secondary,
        }
    }

    /// Returns one layer's index for repopulation.
    pub fn layer_mut(&mut self, layer: Layer) -> &mut RegionIndex<K> {
        match layer {
            Layer::Markers => &mut self.markers,
            Layer::Secondary => &mut self.secondary,
        }
    }

    /// Clears both layers.
    pub fn clear_all(&mut self) {
        self.markers.clear();
        self.secondary.clear();
    }

    /// Returns `true` if both layers are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.secondary.is_empty()
    }

    /// First hit for a content point, checking markers before the secondary
    /// layer.
    #[must_use]
    pub fn query_content_point(&self, pt: Point) -> Option<(Layer, &K)> {
        Layer::ALL
            .into_iter()
            .find_map(|layer| self.layer(layer).query_content_point(pt).map(|tag| (layer, tag)))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Layer, RegionLayers};

    #[test]
    fn layers_are_independent() {
        let mut layers = RegionLayers::new();
        layers.layer_mut(Layer::Secondary).add_region((10, 10), 5, "death");
        assert!(layers.layer(Layer::Markers).is_empty());
        assert_eq!(layers.layer(Layer::Secondary).len(), 1);

        layers.layer_mut(Layer::Markers).clear();
        assert_eq!(layers.layer(Layer::Secondary).len(), 1);
    }

    #[test]
    fn markers_win_over_secondary() {
        let mut layers = RegionLayers::new();
        layers.layer_mut(Layer::Secondary).add_region((10, 10), 5, "death");
        layers.layer_mut(Layer::Markers).add_region((12, 12), 5, "base");

        let pt = Point::new(11.5, 11.5);
        assert_eq!(layers.query_content_point(pt), Some((Layer::Markers, &"base")));
        assert_eq!(
            layers.query_content_point(Point::new(6.0, 6.0)),
            Some((Layer::Secondary, &"death"))
        );
        assert_eq!(layers.query_content_point(Point::new(60.0, 6.0)), None);

        layers.clear_all();
        assert!(layers.is_empty());
    }
}
