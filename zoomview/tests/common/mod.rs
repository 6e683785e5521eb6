// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `zoomview` integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test binary uses every helper."
)]

use kurbo::{Point, Rect, Vec2};
use zoomview::{
    Intercept, Millis, TapCandidate, TouchSample, ViewportGeometry, ZoomableView,
    ZoomableViewConfig, ZoomableViewEvent, ZoomableViewHandler,
};

/// One recorded callback.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    GestureGrant,
    GestureMove,
    GestureEnd,
    ZoomBefore,
    ZoomAfter,
    ZoomEnd,
    ShiftingBefore,
    ShiftingAfter,
    ShiftingEnd,
    SingleTap(Point),
    DoubleTapBefore(Point),
    DoubleTapAfter(f64),
    LongPress(Point),
    PinChange(Point),
    PinMove(Point),
    Layout,
    Transform { zoom: f64, offset: Vec2 },
}

/// Handler that records every callback and can veto on request.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<Call>,
    pub(crate) veto_zoom: bool,
    pub(crate) veto_shift: bool,
    pub(crate) intercept_moves: bool,
}

impl Recorder {
    pub(crate) fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(c)).count()
    }

    pub(crate) fn last_pin_change(&self) -> Option<Point> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::PinChange(p) => Some(*p),
            _ => None,
        })
    }

    pub(crate) fn clear(&mut self) {
        self.calls.clear();
    }
}

fn veto(stop: bool) -> Intercept {
    if stop {
        Intercept::Stop
    } else {
        Intercept::Continue
    }
}

impl ZoomableViewHandler for Recorder {
    fn on_gesture_grant(&mut self, _: &ZoomableViewEvent, _: &TouchSample) {
        self.calls.push(Call::GestureGrant);
    }

    fn on_gesture_move(&mut self, _: &ZoomableViewEvent, _: &TouchSample) -> Intercept {
        self.calls.push(Call::GestureMove);
        veto(self.intercept_moves)
    }

    fn on_gesture_end(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) {
        self.calls.push(Call::GestureEnd);
    }

    fn on_zoom_before(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) -> Intercept {
        self.calls.push(Call::ZoomBefore);
        veto(self.veto_zoom)
    }

    fn on_zoom_after(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) {
        self.calls.push(Call::ZoomAfter);
    }

    fn on_zoom_end(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) {
        self.calls.push(Call::ZoomEnd);
    }

    fn on_shifting_before(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) -> Intercept {
        self.calls.push(Call::ShiftingBefore);
        veto(self.veto_shift)
    }

    fn on_shifting_after(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) {
        self.calls.push(Call::ShiftingAfter);
    }

    fn on_shifting_end(&mut self, _: &ZoomableViewEvent, _: Option<&TouchSample>) {
        self.calls.push(Call::ShiftingEnd);
    }

    fn on_single_tap(&mut self, _: &ZoomableViewEvent, tap: &TapCandidate) {
        self.calls.push(Call::SingleTap(tap.position));
    }

    fn on_double_tap_before(&mut self, _: &ZoomableViewEvent, tap: &TapCandidate) {
        self.calls.push(Call::DoubleTapBefore(tap.position));
    }

    fn on_double_tap_after(&mut self, event: &ZoomableViewEvent, _: &TapCandidate) {
        self.calls.push(Call::DoubleTapAfter(event.zoom_level));
    }

    fn on_long_press(&mut self, _: &ZoomableViewEvent, position: Point) {
        self.calls.push(Call::LongPress(position));
    }

    fn on_static_pin_position_change(&mut self, position: Point) {
        self.calls.push(Call::PinChange(position));
    }

    fn on_static_pin_position_move(&mut self, position: Point) {
        self.calls.push(Call::PinMove(position));
    }

    fn on_layout(&mut self, _: &ZoomableViewEvent, _: &ViewportGeometry) {
        self.calls.push(Call::Layout);
    }

    fn on_transform(&mut self, event: &ZoomableViewEvent) {
        self.calls.push(Call::Transform {
            zoom: event.zoom_level,
            offset: event.offset(),
        });
    }
}

pub(crate) const SIZE: f64 = 400.0;

/// A view measured as a `SIZE` x `SIZE` container at the page origin.
pub(crate) fn measured(config: ZoomableViewConfig) -> ZoomableView<Recorder> {
    let mut view = ZoomableView::new(config, Recorder::default());
    view.set_layout(Rect::new(0.0, 0.0, SIZE, SIZE));
    view.handler_mut().clear();
    view
}

/// A still single-finger tap: down at `at`, up 30 ms later.
pub(crate) fn tap(view: &mut ZoomableView<Recorder>, at: Millis, position: Point) {
    view.handle_touch(&TouchSample::down(at, &[position]));
    view.handle_touch(&TouchSample::up(at + 30, position, &[]));
}

/// Calls `frame` every 16 ms from `from` up to and including `to`.
pub(crate) fn run_frames(view: &mut ZoomableView<Recorder>, from: Millis, to: Millis) {
    let mut now = from;
    while now < to {
        view.frame(now);
        now += 16;
    }
    view.frame(to);
}

/// The two touches of a horizontal pinch around `center`.
pub(crate) fn fingers(center: Point, distance: f64) -> [Point; 2] {
    [
        Point::new(center.x - distance / 2.0, center.y),
        Point::new(center.x + distance / 2.0, center.y),
    ]
}

/// Content-layer point under the container-relative screen point `screen`.
pub(crate) fn layer_under(view: &ZoomableView<Recorder>, screen: Point) -> Point {
    let t = view.transform();
    Point::new(
        zoomview_transform::screen_to_layer(screen.x, SIZE, t.zoom, t.offset.x),
        zoomview_transform::screen_to_layer(screen.y, SIZE, t.zoom, t.offset.y),
    )
}

pub(crate) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub(crate) fn approx_point(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}
