// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use zoomview_gesture::{TapCandidate, TouchSample};
use zoomview_transform::{ViewportGeometry, ZoomableViewEvent};

/// Whether a `*_before` or move hook lets the default handling proceed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intercept {
    /// Run the default handling.
    #[default]
    Continue,
    /// Skip the default handling for this step.
    Stop,
}

/// Host callbacks of a [`ZoomableView`](crate::ZoomableView).
///
/// Every method has a no-op default, so implementors only override what they
/// need. `()` implements the trait for hosts that only read state back.
///
/// Callbacks run synchronously inside the view call that triggered them and
/// receive a fresh [`ZoomableViewEvent`]. Hooks tied to touch input get the
/// sample; programmatic paths pass `None`.
pub trait ZoomableViewHandler {
    /// A touch sequence started.
    fn on_gesture_grant(&mut self, event: &ZoomableViewEvent, sample: &TouchSample) {
        let _ = (event, sample);
    }

    /// A move sample arrived in a live session.
    ///
    /// Returning [`Intercept::Stop`] skips pinch and shift handling for it.
    fn on_gesture_move(&mut self, event: &ZoomableViewEvent, sample: &TouchSample) -> Intercept {
        let _ = (event, sample);
        Intercept::Continue
    }

    /// A touch sequence ended, for any reason.
    fn on_gesture_end(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        let _ = (event, sample);
    }

    /// A zoom step is about to be applied. [`Intercept::Stop`] vetoes it.
    fn on_zoom_before(
        &mut self,
        event: &ZoomableViewEvent,
        sample: Option<&TouchSample>,
    ) -> Intercept {
        let _ = (event, sample);
        Intercept::Continue
    }

    /// A pinch step was committed, or a `zoom_to` animation started.
    fn on_zoom_after(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        let _ = (event, sample);
    }

    /// A pinch gesture ended.
    fn on_zoom_end(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        let _ = (event, sample);
    }

    /// A pan step is about to be applied. [`Intercept::Stop`] vetoes it.
    fn on_shifting_before(
        &mut self,
        event: &ZoomableViewEvent,
        sample: Option<&TouchSample>,
    ) -> Intercept {
        let _ = (event, sample);
        Intercept::Continue
    }

    /// A pan step was committed.
    fn on_shifting_after(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        let _ = (event, sample);
    }

    /// A shift gesture ended.
    fn on_shifting_end(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        let _ = (event, sample);
    }

    /// A tap resolved as a single tap.
    fn on_single_tap(&mut self, event: &ZoomableViewEvent, tap: &TapCandidate) {
        let _ = (event, tap);
    }

    /// A double tap was recognized; its zoom has not started yet.
    fn on_double_tap_before(&mut self, event: &ZoomableViewEvent, tap: &TapCandidate) {
        let _ = (event, tap);
    }

    /// A double tap was handled. `event.zoom_level` is the zoom it targets.
    fn on_double_tap_after(&mut self, event: &ZoomableViewEvent, tap: &TapCandidate) {
        let _ = (event, tap);
    }

    /// A touch was held still for the long-press duration.
    ///
    /// `position` is container-relative.
    fn on_long_press(&mut self, event: &ZoomableViewEvent, position: Point) {
        let _ = (event, position);
    }

    /// Debounced: the content point under the static pin settled.
    fn on_static_pin_position_change(&mut self, position: Point) {
        let _ = position;
    }

    /// The content point under the static pin moved. Fires on every commit.
    fn on_static_pin_position_move(&mut self, position: Point) {
        let _ = position;
    }

    /// New container geometry was applied.
    fn on_layout(&mut self, event: &ZoomableViewEvent, geometry: &ViewportGeometry) {
        let _ = (event, geometry);
    }

    /// The transform changed. Fires once per committed update.
    fn on_transform(&mut self, event: &ZoomableViewEvent) {
        let _ = event;
    }
}

impl ZoomableViewHandler for () {}

impl<H: ZoomableViewHandler + ?Sized> ZoomableViewHandler for &mut H {
    fn on_gesture_grant(&mut self, event: &ZoomableViewEvent, sample: &TouchSample) {
        (**self).on_gesture_grant(event, sample);
    }

    fn on_gesture_move(&mut self, event: &ZoomableViewEvent, sample: &TouchSample) -> Intercept {
        (**self).on_gesture_move(event, sample)
    }

    fn on_gesture_end(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        (**self).on_gesture_end(event, sample);
    }

    fn on_zoom_before(
        &mut self,
        event: &ZoomableViewEvent,
        sample: Option<&TouchSample>,
    ) -> Intercept {
        (**self).on_zoom_before(event, sample)
    }

    fn on_zoom_after(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        (**self).on_zoom_after(event, sample);
    }

    fn on_zoom_end(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        (**self).on_zoom_end(event, sample);
    }

    fn on_shifting_before(
        &mut self,
        event: &ZoomableViewEvent,
        sample: Option<&TouchSample>,
    ) -> Intercept {
        (**self).on_shifting_before(event, sample)
    }

    fn on_shifting_after(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        (**self).on_shifting_after(event, sample);
    }

    fn on_shifting_end(&mut self, event: &ZoomableViewEvent, sample: Option<&TouchSample>) {
        (**self).on_shifting_end(event, sample);
    }

    fn on_single_tap(&mut self, event: &ZoomableViewEvent, tap: &TapCandidate) {
        (**self).on_single_tap(event, tap);
    }

    fn on_double_tap_before(&mut self, event: &ZoomableViewEvent, tap: &TapCandidate) {
        (**self).on_double_tap_before(event, tap);
    }

    fn on_double_tap_after(&mut self, event: &ZoomableViewEvent, tap: &TapCandidate) {
        (**self).on_double_tap_after(event, tap);
    }

    fn on_long_press(&mut self, event: &ZoomableViewEvent, position: Point) {
        (**self).on_long_press(event, position);
    }

    fn on_static_pin_position_change(&mut self, position: Point) {
        (**self).on_static_pin_position_change(position);
    }

    fn on_static_pin_position_move(&mut self, position: Point) {
        (**self).on_static_pin_position_move(position);
    }

    fn on_layout(&mut self, event: &ZoomableViewEvent, geometry: &ViewportGeometry) {
        (**self).on_layout(event, geometry);
    }

    fn on_transform(&mut self, event: &ZoomableViewEvent) {
        (**self).on_transform(event);
    }
}
