// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-flight programmatic transitions.
//!
//! Each slot on the view is an `Option`: `None` is idle, and a slot is
//! cleared as soon as its tween reports the final frame.

use kurbo::{Point, Size, Vec2};
use zoomview_timing::{Easing, Millis, Tween};
use zoomview_transform::{Transform, zoom_centered_offset_2d};

/// Duration of the pan that aligns the static pin under a single tap.
pub(crate) const PAN_TO_TAP_DURATION: Millis = 200;

/// What to do once a pan animation lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PanCompletion {
    Nothing,
    NotifyStaticPin,
}

/// Animated zoom toward a target level, optionally anchored.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ZoomAnimation {
    tween: Tween,
    from: f64,
    to: f64,
    anchor: Option<Point>,
}

impl ZoomAnimation {
    pub(crate) fn new(from: f64, to: f64, anchor: Option<Point>, duration: Millis) -> Self {
        Self {
            tween: Tween::new(duration, Easing::EaseOut),
            from,
            to,
            anchor,
        }
    }

    pub(crate) fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Drops the anchor so the animation no longer moves the offset.
    pub(crate) fn detach_anchor(&mut self) {
        self.anchor = None;
    }

    /// Advances to `now` and applies the step to `current`.
    ///
    /// The centering correction is computed from the zoom of `current`, i.e.
    /// the previous frame, so the anchor holds on every intermediate frame.
    /// Returns the new transform and whether this was the final frame.
    pub(crate) fn step(&mut self, now: Millis, current: Transform, size: Size) -> (Transform, bool) {
        let frame = self.tween.sample(now);
        let zoom = frame.lerp(self.from, self.to);
        let offset = self
            .anchor
            .and_then(|anchor| zoom_centered_offset_2d(current.offset, size, current.zoom, zoom, anchor))
            .unwrap_or(current.offset);
        (Transform::new(zoom, offset), frame.finished)
    }
}

/// Animated offset change at constant zoom.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PanAnimation {
    tween: Tween,
    from: Vec2,
    to: Vec2,
    completion: PanCompletion,
}

impl PanAnimation {
    pub(crate) fn new(from: Vec2, to: Vec2, duration: Millis, completion: PanCompletion) -> Self {
        Self {
            tween: Tween::new(duration, Easing::EaseOut),
            from,
            to,
            completion,
        }
    }

    pub(crate) fn completion(&self) -> PanCompletion {
        self.completion
    }

    /// Advances to `now`; returns the offset and whether this was the final frame.
    pub(crate) fn step(&mut self, now: Millis) -> (Vec2, bool) {
        let frame = self.tween.sample(now);
        let offset = Vec2::new(
            frame.lerp(self.from.x, self.to.x),
            frame.lerp(self.from.y, self.to.y),
        );
        (offset, frame.finished)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use zoomview_transform::{Transform, screen_to_layer};

    use super::{PanAnimation, PanCompletion, ZoomAnimation};

    #[test]
    fn zoom_animation_holds_anchor_every_frame() {
        let size = Size::new(400.0, 300.0);
        let anchor = Point::new(100.0, 60.0);
        let mut anim = ZoomAnimation::new(1.0, 2.0, Some(anchor), 250);
        let mut current = Transform::IDENTITY;
        let under = |t: Transform| {
            Point::new(
                screen_to_layer(anchor.x, size.width, t.zoom, t.offset.x),
                screen_to_layer(anchor.y, size.height, t.zoom, t.offset.y),
            )
        };
        let start = under(current);
        for now in (0..=250).step_by(25) {
            let (next, finished) = anim.step(now, current, size);
            current = next;
            assert!((under(current) - start).hypot() < 1e-9);
            assert_eq!(finished, now == 250);
        }
        assert!((current.zoom - 2.0).abs() < 1e-12);
    }

    #[test]
    fn detached_zoom_animation_keeps_offset() {
        let mut anim = ZoomAnimation::new(1.0, 1.5, Some(Point::new(10.0, 10.0)), 100);
        anim.detach_anchor();
        let start = Transform::new(1.0, Vec2::new(5.0, 5.0));
        let (next, _) = anim.step(0, start, Size::new(100.0, 100.0));
        let (next, _) = anim.step(50, next, Size::new(100.0, 100.0));
        assert_eq!(next.offset, Vec2::new(5.0, 5.0));
        assert!(anim.anchor().is_none());
    }

    #[test]
    fn pan_animation_lands_on_target() {
        let mut anim = PanAnimation::new(
            Vec2::ZERO,
            Vec2::new(30.0, -10.0),
            200,
            PanCompletion::NotifyStaticPin,
        );
        let (first, done) = anim.step(1_000);
        assert_eq!(first, Vec2::ZERO);
        assert!(!done);
        let (last, done) = anim.step(1_200);
        assert!(done);
        assert!((last - Vec2::new(30.0, -10.0)).hypot() < 1e-12);
        assert_eq!(anim.completion(), PanCompletion::NotifyStaticPin);
    }
}
