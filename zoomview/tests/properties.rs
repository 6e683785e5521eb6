// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the geometric invariants of the view.
//!
//! 1. Pinching never leaves the configured zoom bounds
//! 2. A pinch keeps the content under its anchor fixed on screen
//! 3. An anchored `zoom_to` keeps the anchor fixed on every frame
//! 4. Static-pin mapping and `offset_for_pin` agree with each other

mod common;

use common::{SIZE, approx_point, fingers, layer_under, measured};
use kurbo::{Point, Rect, Size, Vec2};
use proptest::prelude::*;
use zoomview::{TouchSample, ZoomableViewConfig};
use zoomview_gesture::{PinchConfig, PinchSample, pinch_step};
use zoomview_transform::{
    Transform, ViewportGeometry, ZoomBounds, ZoomableViewEvent, pin, screen_to_layer,
};

fn geometry() -> ViewportGeometry {
    ViewportGeometry::from_layout(Rect::new(0.0, 0.0, 400.0, 300.0))
}

fn under(anchor: Point, t: Transform, size: Size) -> Point {
    Point::new(
        screen_to_layer(anchor.x, size.width, t.zoom, t.offset.x),
        screen_to_layer(anchor.y, size.height, t.zoom, t.offset.y),
    )
}

fn close(a: Point, b: Point, scale: f64) -> bool {
    (a - b).hypot() <= 1e-9 * scale.max(1.0)
}

#[test]
fn pinch_doubling_at_center_keeps_offset() {
    let g = geometry();
    let sample = PinchSample {
        center: g.center(),
        distance: 200.0,
        previous_center: Some(g.center()),
        previous_distance: Some(100.0),
    };
    let config = PinchConfig {
        zoom_in_sensitivity: 0.0,
        ..PinchConfig::default()
    };
    let out = pinch_step(
        &sample,
        Transform::IDENTITY,
        ZoomBounds::UNBOUNDED,
        &g,
        None,
        &config,
    )
    .unwrap();
    assert_eq!(out.zoom, 2.0);
    assert_eq!(out.offset, Vec2::ZERO);
}

#[test]
fn pin_mapping_round_trips_on_a_grid() {
    let g = ViewportGeometry::from_layout(Rect::new(0.0, 0.0, SIZE, SIZE));
    let image = Size::new(800.0, 400.0);
    let pin = Point::new(120.0, 260.0);
    for zoom in [0.5, 1.0, 2.0] {
        for offset in [Vec2::ZERO, Vec2::new(50.0, -30.0)] {
            let event = ZoomableViewEvent::new(Transform::new(zoom, offset), &g);
            let content = pin::viewport_to_content(pin, image, &event).unwrap();
            let back = pin::content_to_viewport(content, image, &event).unwrap();
            assert!(
                approx_point(back, pin),
                "zoom {zoom}, offset {offset:?}: {back:?} != {pin:?}"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn pinch_stays_within_bounds(
        distances in prop::collection::vec(1.0f64..1_000.0, 1..30),
        zoom_in in 0.0f64..10.0,
        zoom_out in 0.0f64..10.0,
    ) {
        let mut view = measured(ZoomableViewConfig {
            min_zoom: Some(0.5),
            max_zoom: Some(3.0),
            pinch_to_zoom_in_sensitivity: zoom_in,
            pinch_to_zoom_out_sensitivity: zoom_out,
            ..ZoomableViewConfig::default()
        });
        let c = Point::new(SIZE / 2.0, SIZE / 2.0);
        view.handle_touch(&TouchSample::down(0, &fingers(c, 100.0)));
        for (i, d) in distances.iter().enumerate() {
            let time = 16 * (i as u64 + 1);
            view.handle_touch(&TouchSample::moved(time, &fingers(c, *d)));
            let zoom = view.transform().zoom;
            prop_assert!((0.5..=3.0).contains(&zoom), "zoom {} escaped bounds", zoom);
        }
    }

    #[test]
    fn pinch_keeps_anchor_fixed(
        zoom in 0.25f64..4.0,
        ox in -200.0f64..200.0,
        oy in -200.0f64..200.0,
        ax in 0.0f64..400.0,
        ay in 0.0f64..300.0,
        previous in 20.0f64..400.0,
        current in 20.0f64..400.0,
        sensitivity in 0.0f64..10.0,
    ) {
        let g = geometry();
        let anchor = Point::new(ax, ay);
        let before = Transform::new(zoom, Vec2::new(ox, oy));
        let sample = PinchSample {
            center: anchor,
            distance: current,
            previous_center: Some(anchor),
            previous_distance: Some(previous),
        };
        let config = PinchConfig {
            zoom_in_sensitivity: sensitivity,
            zoom_out_sensitivity: sensitivity,
            movement_sensibility: 1.0,
        };
        let after = pinch_step(&sample, before, ZoomBounds::UNBOUNDED, &g, None, &config).unwrap();
        let fixed = under(anchor, before, g.size);
        let moved = under(anchor, after, g.size);
        prop_assert!(
            close(fixed, moved, 1_000.0),
            "anchor drifted from {:?} to {:?}", fixed, moved
        );
    }

    #[test]
    fn zoom_to_keeps_anchor_on_every_frame(
        level in 0.5f64..1.5,
        ax in 0.0f64..400.0,
        ay in 0.0f64..400.0,
    ) {
        let mut view = measured(ZoomableViewConfig::default());
        let anchor = Point::new(ax, ay);
        let fixed = layer_under(&view, anchor);
        prop_assert!(view.zoom_to(level, Some(anchor)));
        let mut now = 0;
        while view.frame(now) {
            prop_assert!(approx_point(layer_under(&view, anchor), fixed));
            now += 16;
        }
        prop_assert!((view.transform().zoom - level).abs() < 1e-12);
        prop_assert!(approx_point(layer_under(&view, anchor), fixed));
    }

    #[test]
    fn offset_for_pin_lands_content_under_pin(
        zoom in 0.5f64..3.0,
        cx in 0.0f64..800.0,
        cy in 0.0f64..400.0,
        px in 0.0f64..400.0,
        py in 0.0f64..400.0,
    ) {
        let g = ViewportGeometry::from_layout(Rect::new(0.0, 0.0, SIZE, SIZE));
        let image = Size::new(800.0, 400.0);
        let content = Point::new(cx, cy);
        let pin_at = Point::new(px, py);
        let offset = pin::offset_for_pin(content, pin_at, image, g.size, zoom).unwrap();
        let event = ZoomableViewEvent::new(Transform::new(zoom, offset), &g);
        let seen = pin::viewport_to_content(pin_at, image, &event).unwrap();
        prop_assert!(approx_point(seen, content), "{:?} != {:?}", seen, content);
    }
}
