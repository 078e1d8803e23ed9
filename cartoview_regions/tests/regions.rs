// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cartoview_regions` crate.
//!
//! These exercise the first-match contract across a full refresh cycle
//! (clear, repopulate, query) on both layers.

use cartoview_regions::{Layer, RegionIndex, RegionLayers};
use kurbo::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Checkpoint(u32),
    Death(u32),
}

#[test]
fn documented_overlap_scenario() {
    let mut index = RegionIndex::new();
    index.add_region((100, 100), 10, "cp-1");
    index.add_region((105, 105), 10, "cp-2");
    assert_eq!(index.query_point(103, 103), Some(&"cp-1"));
}

#[test]
fn first_match_holds_across_a_dense_grid() {
    let mut index = RegionIndex::new();
    // Heavily overlapping squares, one every 4px with radius 10.
    for i in 0..50 {
        index.add_region((i * 4, i * 4), 10, i);
    }
    for p in 0..200 {
        let expected = (0..50).find(|i| {
            let c = i * 4;
            p >= c - 10 && p < c + 10
        });
        assert_eq!(index.query_point(p, p).copied(), expected, "at {p}");
    }
}

#[test]
fn refresh_cycle_replaces_answers() {
    let mut layers = RegionLayers::new();
    let refresh = |layers: &mut RegionLayers<Marker>, offset: i32| {
        layers.clear_all();
        for id in 0..3_u32 {
            let step = i32::try_from(id).unwrap() * 100;
            layers
                .layer_mut(Layer::Markers)
                .add_region((step + offset, 50), 8, Marker::Checkpoint(id));
            layers
                .layer_mut(Layer::Secondary)
                .add_region((step + offset, 150), 8, Marker::Death(id));
        }
    };

    refresh(&mut layers, 0);
    assert_eq!(
        layers.query_content_point(Point::new(101.0, 52.0)),
        Some((Layer::Markers, &Marker::Checkpoint(1)))
    );
    assert_eq!(
        layers.query_content_point(Point::new(199.0, 149.0)),
        Some((Layer::Secondary, &Marker::Death(2)))
    );

    refresh(&mut layers, 30);
    assert_eq!(layers.query_content_point(Point::new(101.0, 52.0)), None);
    assert_eq!(
        layers.query_content_point(Point::new(131.0, 52.0)),
        Some((Layer::Markers, &Marker::Checkpoint(1)))
    );
    assert_eq!(layers.layer(Layer::Markers).len(), 3);
    assert_eq!(layers.layer(Layer::Secondary).len(), 3);
}
