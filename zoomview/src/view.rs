// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;
use zoomview_gesture::{
    EndReason, GestureClassifier, GestureEnd, GestureStep, GestureType, PinchSample, ShiftSample,
    TapCandidate, TapOutcome, TapResolver, TouchPhase, TouchSample, next_zoom_step, pinch_step,
    shift_step,
};
use zoomview_timing::{Debounce, Millis, TimerId, TimerQueue};
use zoomview_transform::{Transform, TransformState, ViewportGeometry, ZoomableViewEvent, pin};

use crate::animation::{PAN_TO_TAP_DURATION, PanAnimation, PanCompletion, ZoomAnimation};
use crate::{Intercept, Rejection, TouchFeedback, ZoomableViewConfig, ZoomableViewHandler};

/// Work the view defers to a later point in logical time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    SingleTap,
    LongPress,
    StaticPinChange,
    FeedbackExpired(u64),
}

/// Headless pan/zoom/pinch controller for one content subject.
///
/// The host drives it with three inputs:
/// - [`handle_touch`](Self::handle_touch) for every multi-touch sample,
/// - [`set_layout`](Self::set_layout) whenever the container is measured,
/// - [`frame`](Self::frame) on its presentation cadence while
///   [`is_animating`](Self::is_animating) is `true`, or when
///   [`next_deadline`](Self::next_deadline) is reached.
///
/// Each of these carries or reuses a logical millisecond timestamp; timers
/// due at or before it fire first, in deadline order. All state changes are
/// reported synchronously through the [`ZoomableViewHandler`].
///
/// After [`teardown`](Self::teardown) every call is a no-op.
#[derive(Debug)]
pub struct ZoomableView<H> {
    config: ZoomableViewConfig,
    handler: H,
    state: TransformState,
    geometry: ViewportGeometry,
    gestures: GestureClassifier,
    taps: TapResolver,
    timers: TimerQueue<Deferred>,
    single_tap: Option<TimerId>,
    long_press: Option<TimerId>,
    pin_change: Debounce,
    zoom_animation: Option<ZoomAnimation>,
    pan_animation: Option<PanAnimation>,
    feedback: Vec<TouchFeedback>,
    next_feedback_id: u64,
    gesture_points: SmallVec<[Point; 2]>,
    now: Millis,
    live: bool,
}

impl<H: ZoomableViewHandler> ZoomableView<H> {
    /// Creates a view seeded from `config`.
    ///
    /// A non-finite or non-positive `initial_zoom` falls back to `1.0`, and a
    /// non-finite initial offset to zero.
    pub fn new(config: ZoomableViewConfig, handler: H) -> Self {
        let zoom = if config.initial_zoom > 0.0 && config.initial_zoom.is_finite() {
            config.initial_zoom
        } else {
            1.0
        };
        let offset = Some(config.initial_offset())
            .filter(|o| o.is_finite())
            .unwrap_or(Vec2::ZERO);
        Self {
            state: TransformState::new(zoom, offset, config.bounds()),
            geometry: ViewportGeometry::UNMEASURED,
            gestures: GestureClassifier::new(config.classifier()),
            taps: TapResolver::new(config.double_tap_delay),
            timers: TimerQueue::new(),
            single_tap: None,
            long_press: None,
            pin_change: Debounce::new(),
            zoom_animation: None,
            pan_animation: None,
            feedback: Vec::new(),
            next_feedback_id: 0,
            gesture_points: SmallVec::new(),
            now: 0,
            live: true,
            config,
            handler,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomableViewConfig {
        &self.config
    }

    /// The host handler.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the host handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the view and returns the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Current zoom and offset.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.read()
    }

    /// Latest measured container geometry.
    #[must_use]
    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    /// A fresh snapshot of the view.
    #[must_use]
    pub fn event(&self) -> ZoomableViewEvent {
        ZoomableViewEvent::new(self.state.read(), &self.geometry)
    }

    /// Latest logical time seen.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Returns `true` while a touch session is live.
    #[must_use]
    pub fn gesture_started(&self) -> bool {
        self.gestures.is_started()
    }

    /// Returns `true` while a zoom or pan animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom_animation.is_some() || self.pan_animation.is_some()
    }

    /// Returns `false` once the view has been torn down.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Earliest pending timer deadline; call [`frame`](Self::frame) by then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Taps whose feedback is still visible.
    #[must_use]
    pub fn touch_feedback(&self) -> &[TouchFeedback] {
        &self.feedback
    }

    /// Gesture and zoom-anchor points to draw in debug mode.
    ///
    /// Empty unless `debug` is set.
    #[must_use]
    pub fn debug_points(&self) -> SmallVec<[Point; 4]> {
        let mut points = SmallVec::new();
        if !self.config.debug {
            return points;
        }
        points.extend(self.gesture_points.iter().copied());
        if let Some(anchor) = self.zoom_animation.as_ref().and_then(ZoomAnimation::anchor) {
            points.push(anchor);
        }
        points
    }

    /// The content-image point currently under the static pin.
    ///
    /// `None` without a pin, a content size, or a measured container.
    #[must_use]
    pub fn static_pin_content_position(&self) -> Option<Point> {
        let pin = self.config.static_pin_position?;
        let content = self.config.content_size()?;
        pin::viewport_to_content(pin, content, &self.event())
    }

    /// Applies a new container layout rectangle in page coordinates.
    pub fn set_layout(&mut self, layout: Rect) {
        if !self.live {
            return;
        }
        let geometry = ViewportGeometry::from_layout(layout);
        if geometry == self.geometry {
            return;
        }
        tracing::debug!(
            width = geometry.size.width,
            height = geometry.size.height,
            "container measured"
        );
        self.geometry = geometry;
        let event = self.event();
        self.handler.on_layout(&event, &geometry);
        // Border binding depends on the container size.
        let current = self.state.read();
        self.commit(current);
        self.notify_static_pin_now();
    }

    /// Replaces the configuration.
    ///
    /// Bounds apply immediately and may clamp the current zoom. Switching
    /// zoom off stops any zoom animation and returns to `initial_zoom`.
    pub fn set_config(&mut self, config: ZoomableViewConfig) {
        if !self.live {
            return;
        }
        let mut target = self.state.read();
        if !config.zoom_enabled {
            self.zoom_animation = None;
            if config.initial_zoom > 0.0 && config.initial_zoom.is_finite() {
                target.zoom = config.initial_zoom;
            }
        }
        self.gestures.set_config(config.classifier());
        self.taps.set_double_tap_delay(config.double_tap_delay);
        let bounds_moved = self.state.set_bounds(config.bounds());
        self.config = config;
        if !self.commit(target) && bounds_moved {
            self.transform_changed();
        }
    }

    /// Feeds one touch sample.
    pub fn handle_touch(&mut self, sample: &TouchSample) {
        if !self.live {
            return;
        }
        self.advance(sample.time);

        let was_started = self.gestures.is_started();
        let steps = self.gestures.process(sample);
        let intercepted = sample.phase == TouchPhase::Move
            && was_started
            && self.gestures.is_started()
            && {
                let event = self.event();
                self.handler.on_gesture_move(&event, sample) == Intercept::Stop
            };

        for step in steps {
            match step {
                GestureStep::Granted { first_touch } => self.grant(sample, first_touch),
                GestureStep::CancelLongPress => self.cancel_long_press(),
                GestureStep::Pinch(pinch) if !intercepted => self.pinch(sample, pinch),
                GestureStep::Shift(shift) if !intercepted => self.shift(sample, shift),
                GestureStep::Pinch(_) | GestureStep::Shift(_) => {}
                GestureStep::Ended(end) => self.end(sample, end),
            }
        }
    }

    /// Advances logical time: fires due timers and steps animations.
    ///
    /// Returns `true` while an animation is still in flight.
    pub fn frame(&mut self, now: Millis) -> bool {
        if !self.live {
            return false;
        }
        self.advance(now);
        if self.is_animating() {
            self.step_animations();
        }
        self.is_animating()
    }

    /// Animates the zoom to `level`, keeping `center` fixed on screen.
    ///
    /// `center` is container-relative; `None` zooms about the container
    /// center. Returns `false` if the call was rejected; see
    /// [`try_zoom_to`](Self::try_zoom_to).
    pub fn zoom_to(&mut self, level: f64, center: Option<Point>) -> bool {
        self.try_zoom_to(level, center)
            .inspect_err(|rejection| tracing::debug!(%rejection, "zoom_to rejected"))
            .is_ok()
    }

    /// Like [`zoom_to`](Self::zoom_to), reporting why a call was rejected.
    ///
    /// # Errors
    ///
    /// Rejects when torn down, while a touch session is live, when zoom is
    /// disabled, when `level` is not finite and positive or lies outside the
    /// bounds, and when `on_zoom_before` returns [`Intercept::Stop`].
    pub fn try_zoom_to(&mut self, level: f64, center: Option<Point>) -> Result<(), Rejection> {
        self.check_live()?;
        self.check_no_gesture()?;
        if !self.config.zoom_enabled {
            return Err(Rejection::ZoomDisabled);
        }
        if !(level.is_finite() && level > 0.0) {
            return Err(Rejection::InvalidLevel);
        }
        let bounds = self.state.bounds();
        if !bounds.contains(level) {
            return Err(Rejection::OutOfRange {
                level,
                min: bounds.min,
                max: bounds.max,
            });
        }
        let event = self.event();
        if self.handler.on_zoom_before(&event, None) == Intercept::Stop {
            return Err(Rejection::Intercepted);
        }

        if center.is_some() {
            self.pan_animation = None;
        }
        let from = self.state.zoom();
        tracing::debug!(from, to = level, ?center, "zoom animation started");
        self.zoom_animation = Some(ZoomAnimation::new(
            from,
            level,
            center,
            self.config.zoom_animation_duration,
        ));
        // The tween starts on the next `frame`.
        let event = self.event();
        self.handler.on_zoom_after(&event, None);
        Ok(())
    }

    /// Zooms by `delta` relative to the current zoom.
    ///
    /// `None` or `0` uses the configured `zoom_step`.
    pub fn zoom_by(&mut self, delta: Option<f64>) -> bool {
        self.try_zoom_by(delta)
            .inspect_err(|rejection| tracing::debug!(%rejection, "zoom_by rejected"))
            .is_ok()
    }

    /// Like [`zoom_by`](Self::zoom_by), reporting why a call was rejected.
    ///
    /// # Errors
    ///
    /// As [`try_zoom_to`](Self::try_zoom_to); also
    /// [`Rejection::InvalidLevel`] when no delta and no `zoom_step` is set.
    pub fn try_zoom_by(&mut self, delta: Option<f64>) -> Result<(), Rejection> {
        self.check_live()?;
        let delta = match delta {
            Some(d) if d != 0.0 => d,
            _ => self.config.zoom_step.ok_or(Rejection::InvalidLevel)?,
        };
        self.try_zoom_to(self.state.zoom() + delta, None)
    }

    /// Pans so that the container point `(x, y)` at zoom 1 sits in the
    /// container center. Immediate.
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        self.try_move_to(x, y)
            .inspect_err(|rejection| tracing::debug!(%rejection, "move_to rejected"))
            .is_ok()
    }

    /// Like [`move_to`](Self::move_to), reporting why a call was rejected.
    ///
    /// # Errors
    ///
    /// Rejects when torn down, before the container is measured, and when
    /// `on_shifting_before` returns [`Intercept::Stop`].
    pub fn try_move_to(&mut self, x: f64, y: f64) -> Result<(), Rejection> {
        self.check_live()?;
        if !self.geometry.is_ready() {
            return Err(Rejection::GeometryNotReady);
        }
        let half = self.geometry.center();
        let zoom = self.state.zoom();
        self.write_offset(-(Point::new(x, y) - half) / zoom)
    }

    /// Pans the view by a screen-space delta. Immediate.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> bool {
        self.try_move_by(dx, dy)
            .inspect_err(|rejection| tracing::debug!(%rejection, "move_by rejected"))
            .is_ok()
    }

    /// Like [`move_by`](Self::move_by), reporting why a call was rejected.
    ///
    /// # Errors
    ///
    /// Rejects when torn down and when `on_shifting_before` returns
    /// [`Intercept::Stop`].
    pub fn try_move_by(&mut self, dx: f64, dy: f64) -> Result<(), Rejection> {
        self.check_live()?;
        let t = self.state.read();
        self.write_offset(t.offset - Vec2::new(dx, dy) / t.zoom)
    }

    /// Pans so that the content-image point `position` lands under the
    /// static pin.
    ///
    /// Animated over `duration` milliseconds when it is positive, immediate
    /// otherwise.
    pub fn move_static_pin_to(&mut self, position: Point, duration: Option<Millis>) -> bool {
        self.try_move_static_pin_to(position, duration)
            .inspect_err(|rejection| tracing::debug!(%rejection, "move_static_pin_to rejected"))
            .is_ok()
    }

    /// Like [`move_static_pin_to`](Self::move_static_pin_to), reporting why a
    /// call was rejected.
    ///
    /// # Errors
    ///
    /// Rejects when torn down, without a static pin or content size, before
    /// the container is measured, (animated moves only) while a touch session
    /// is live, and (immediate moves only) when `on_shifting_before` returns
    /// [`Intercept::Stop`].
    pub fn try_move_static_pin_to(
        &mut self,
        position: Point,
        duration: Option<Millis>,
    ) -> Result<(), Rejection> {
        self.check_live()?;
        let pin = self.config.static_pin_position.ok_or(Rejection::NoStaticPin)?;
        let content = self
            .config
            .content_size()
            .ok_or(Rejection::ContentSizeUnknown)?;
        if !self.geometry.is_ready() {
            return Err(Rejection::GeometryNotReady);
        }
        let offset = pin::offset_for_pin(position, pin, content, self.geometry.size, self.state.zoom())
            .ok_or(Rejection::ContentSizeUnknown)?;
        match duration {
            Some(duration) if duration > 0 => {
                self.check_no_gesture()?;
                self.start_pan(offset, duration, PanCompletion::Nothing);
                Ok(())
            }
            _ => self.write_offset(offset),
        }
    }

    /// Cancels every timer and animation and drops all gesture state.
    ///
    /// Every later call is a no-op. Calling it twice is harmless.
    pub fn teardown(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        self.pin_change.cancel(&mut self.timers);
        self.timers.clear();
        self.single_tap = None;
        self.long_press = None;
        self.zoom_animation = None;
        self.pan_animation = None;
        self.gestures.reset();
        self.taps.reset();
        self.feedback.clear();
        self.gesture_points.clear();
        tracing::debug!("zoomable view torn down");
    }

    fn check_live(&self) -> Result<(), Rejection> {
        if self.live {
            Ok(())
        } else {
            Err(Rejection::TornDown)
        }
    }

    fn check_no_gesture(&self) -> Result<(), Rejection> {
        if self.gestures.is_started() {
            Err(Rejection::GestureActive)
        } else {
            Ok(())
        }
    }

    fn advance(&mut self, now: Millis) {
        self.now = self.now.max(now);
        while let Some(due) = self.timers.pop_due(self.now) {
            self.fire(due.id, due.payload);
        }
    }

    fn fire(&mut self, id: TimerId, deferred: Deferred) {
        match deferred {
            Deferred::SingleTap => {
                if self.single_tap.take_if(|t| *t == id).is_some()
                    && let Some(tap) = self.taps.resolve_single()
                {
                    self.single_tap_resolved(tap);
                }
            }
            Deferred::LongPress => {
                if self.long_press.take_if(|t| *t == id).is_some() {
                    self.long_pressed();
                }
            }
            Deferred::StaticPinChange => {
                if self.pin_change.fired(id) {
                    self.emit_static_pin_change();
                }
            }
            Deferred::FeedbackExpired(feedback) => self.feedback.retain(|f| f.id != feedback),
        }
    }

    /// Writes `next` (clamped) and reports it when it changed anything.
    fn commit(&mut self, next: Transform) -> bool {
        let zoom = self.state.bounds().clamp(next.zoom);
        let offset = self
            .config
            .clamp_mode()
            .apply(next.offset, zoom, self.geometry.size);
        if !self.state.set(Transform::new(zoom, offset)) {
            return false;
        }
        self.transform_changed();
        true
    }

    fn transform_changed(&mut self) {
        let event = self.event();
        self.handler.on_transform(&event);
        if let Some(position) = self.static_pin_content_position() {
            self.handler.on_static_pin_position_move(position);
            self.pin_change.trigger(
                &mut self.timers,
                self.now,
                self.config.static_pin_debounce,
                Deferred::StaticPinChange,
            );
        }
    }

    fn notify_static_pin_now(&mut self) {
        self.pin_change.cancel(&mut self.timers);
        self.emit_static_pin_change();
    }

    fn emit_static_pin_change(&mut self) {
        if let Some(position) = self.static_pin_content_position() {
            self.handler.on_static_pin_position_change(position);
        }
    }

    fn write_offset(&mut self, offset: Vec2) -> Result<(), Rejection> {
        let event = self.event();
        if self.handler.on_shifting_before(&event, None) == Intercept::Stop {
            return Err(Rejection::Intercepted);
        }
        self.pan_animation = None;
        let zoom = self.state.zoom();
        if self.commit(Transform::new(zoom, offset)) {
            let event = self.event();
            self.handler.on_shifting_after(&event, None);
        }
        Ok(())
    }

    fn start_pan(&mut self, to: Vec2, duration: Millis, completion: PanCompletion) {
        if let Some(zoom) = self.zoom_animation.as_mut() {
            zoom.detach_anchor();
        }
        self.pan_animation = Some(PanAnimation::new(
            self.state.offset(),
            to,
            duration,
            completion,
        ));
    }

    fn step_animations(&mut self) {
        let now = self.now;
        let mut next = self.state.read();

        let mut zoom_done = false;
        if let Some(anim) = self.zoom_animation.as_mut() {
            let (stepped, finished) = anim.step(now, next, self.geometry.size);
            next = stepped;
            zoom_done = finished;
        }
        let mut landed = None;
        if let Some(anim) = self.pan_animation.as_mut() {
            let (offset, finished) = anim.step(now);
            next.offset = offset;
            if finished {
                landed = Some(anim.completion());
            }
        }

        if zoom_done {
            tracing::debug!(zoom = next.zoom, "zoom animation finished");
            self.zoom_animation = None;
        }
        if landed.is_some() {
            self.pan_animation = None;
        }
        self.commit(next);
        if landed == Some(PanCompletion::NotifyStaticPin) {
            self.notify_static_pin_now();
        }
    }

    fn stop_animations(&mut self) {
        let zoom = self.zoom_animation.take().is_some();
        let pan = self.pan_animation.take().is_some();
        if zoom || pan {
            tracing::debug!(zoom, pan, "animation preempted by gesture");
        }
    }

    fn cancel_long_press(&mut self) {
        if let Some(id) = self.long_press.take() {
            self.timers.cancel(id);
        }
    }

    fn grant(&mut self, sample: &TouchSample, first_touch: Point) {
        self.stop_animations();
        self.cancel_long_press();
        let deadline = self.now.saturating_add(self.config.long_press_duration);
        self.long_press = Some(self.timers.schedule(deadline, Deferred::LongPress));
        if self.config.debug {
            self.gesture_points.clear();
            self.gesture_points.push(self.geometry.to_local(first_touch));
        }
        let event = self.event();
        self.handler.on_gesture_grant(&event, sample);
    }

    fn long_pressed(&mut self) {
        let Some(session) = self.gestures.session() else {
            return;
        };
        if !session.long_press_armed {
            return;
        }
        let position = self.geometry.to_local(session.first_touch);
        tracing::debug!(x = position.x, y = position.y, "long press");
        let event = self.event();
        self.handler.on_long_press(&event, position);
    }

    fn pinch(&mut self, sample: &TouchSample, mut pinch: PinchSample) {
        if !self.config.zoom_enabled {
            tracing::trace!("pinch sample ignored: zoom disabled");
            return;
        }
        if self.config.debug {
            self.gesture_points.clear();
            self.gesture_points.push(self.geometry.to_local(pinch.center));
            if let Some(pin) = self.config.static_pin_position {
                self.gesture_points.push(pin);
            }
        }
        let event = self.event();
        if self.handler.on_zoom_before(&event, Some(sample)) == Intercept::Stop {
            return;
        }
        if !self.config.pan_enabled {
            pinch.previous_center = None;
        }
        let Some(next) = pinch_step(
            &pinch,
            self.state.read(),
            self.state.bounds(),
            &self.geometry,
            self.config.static_pin_position,
            &self.config.pinch(),
        ) else {
            return;
        };
        if self.commit(next) {
            let event = self.event();
            self.handler.on_zoom_after(&event, Some(sample));
        }
    }

    fn shift(&mut self, sample: &TouchSample, shift: ShiftSample) {
        if self.config.debug {
            self.gesture_points.clear();
            self.gesture_points.push(self.geometry.to_local(shift.center));
        }
        let Some(next) = shift_step(
            &shift,
            self.state.read(),
            &self.config.shift_policy(),
            self.config.movement_sensibility,
        ) else {
            return;
        };
        let event = self.event();
        if self.handler.on_shifting_before(&event, Some(sample)) == Intercept::Stop {
            return;
        }
        if self.commit(next) {
            let event = self.event();
            self.handler.on_shifting_after(&event, Some(sample));
        }
    }

    fn end(&mut self, sample: &TouchSample, end: GestureEnd) {
        self.cancel_long_press();
        self.gesture_points.clear();
        match end.gesture_type {
            None => {
                // Cancellation carries no position; fall back to where it began.
                let page = if end.reason == EndReason::Released {
                    end.release
                } else {
                    end.first_touch
                };
                self.tap_released(self.geometry.to_local(page));
            }
            Some(GestureType::Pinch) => {
                let event = self.event();
                self.handler.on_zoom_end(&event, Some(sample));
                self.notify_static_pin_now();
            }
            Some(GestureType::Shift) => {
                let event = self.event();
                self.handler.on_shifting_end(&event, Some(sample));
                self.notify_static_pin_now();
            }
        }
        let event = self.event();
        self.handler.on_gesture_end(&event, Some(sample));
    }

    fn tap_released(&mut self, position: Point) {
        let now = self.now;
        if self.config.visual_touch_feedback_enabled {
            let id = self.next_feedback_id;
            self.next_feedback_id += 1;
            let expires_at = now.saturating_add(self.config.double_tap_delay);
            self.feedback.push(TouchFeedback {
                id,
                position,
                started_at: now,
                expires_at,
            });
            self.timers
                .schedule(expires_at, Deferred::FeedbackExpired(id));
        }

        match self.taps.release(position, now) {
            TapOutcome::Pending(tap) => {
                if let Some(stale) = self.single_tap.take() {
                    self.timers.cancel(stale);
                }
                let deadline = tap
                    .released_at
                    .saturating_add(self.taps.double_tap_delay());
                self.single_tap = Some(self.timers.schedule(deadline, Deferred::SingleTap));
            }
            TapOutcome::DoubleTap { second, .. } => {
                if let Some(pending) = self.single_tap.take() {
                    self.timers.cancel(pending);
                }
                self.double_tap(second);
            }
        }
    }

    fn double_tap(&mut self, tap: TapCandidate) {
        let event = self.event();
        self.handler.on_double_tap_before(&event, &tap);

        let current = self.state.zoom();
        let next = next_zoom_step(
            current,
            self.config.initial_zoom,
            self.config.max_zoom,
            self.config.zoom_step,
        );
        if let Some(level) = next {
            let anchor = if self.config.double_tap_zoom_to_center {
                self.geometry.center()
            } else {
                tap.position
            };
            if let Err(rejection) = self.try_zoom_to(level, Some(anchor)) {
                tracing::debug!(%rejection, "double-tap zoom rejected");
            }
        }

        let event = self.event().with_zoom_level(next.unwrap_or(current));
        self.handler.on_double_tap_after(&event, &tap);
    }

    fn single_tap_resolved(&mut self, tap: TapCandidate) {
        if let Some(pin) = self.config.static_pin_position
            && self.geometry.is_ready()
            && !self.gestures.is_started()
        {
            let t = self.state.read();
            let target = t.offset + (pin - tap.position) / t.zoom;
            self.start_pan(target, PAN_TO_TAP_DURATION, PanCompletion::NotifyStaticPin);
        }
        let event = self.event();
        self.handler.on_single_tap(&event, &tap);
    }
}
