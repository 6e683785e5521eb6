// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-touch-sequence gesture bookkeeping.

use kurbo::{Point, Vec2};

/// The kind of gesture a session has been classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureType {
    /// Single-finger panning.
    Shift,
    /// Two-finger pinch (zoom plus incidental pan).
    Pinch,
}

/// State of one continuous touch sequence, from first contact to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Classified gesture, or `None` while the sequence could still be a tap.
    pub gesture_type: Option<GestureType>,
    /// Where the sequence started (centroid of the initial touches).
    pub first_touch: Point,
    /// Gesture center recorded on the previous sample.
    pub last_center: Option<Point>,
    /// Two-finger distance recorded on the previous pinch sample.
    pub last_distance: Option<f64>,
    /// `true` until the long-press candidate is disqualified.
    pub long_press_armed: bool,
}

impl GestureSession {
    /// Starts a new, unclassified session at `first_touch`.
    #[must_use]
    pub fn start(first_touch: Point) -> Self {
        Self {
            gesture_type: None,
            first_touch,
            last_center: None,
            last_distance: None,
            long_press_armed: true,
        }
    }

    /// Switches the session to `gesture_type`.
    ///
    /// When the type actually changes, the recorded center and distance are
    /// cleared so the next delta is not computed against a point from the
    /// previous gesture. Returns `true` if the type changed.
    pub fn enter(&mut self, gesture_type: GestureType) -> bool {
        if self.gesture_type == Some(gesture_type) {
            return false;
        }
        self.gesture_type = Some(gesture_type);
        self.last_center = None;
        self.last_distance = None;
        true
    }

    /// Total movement from the first touch to `current`.
    #[must_use]
    pub fn movement(&self, current: Point) -> Vec2 {
        current - self.first_touch
    }

    /// Records `center` and returns the previously recorded one.
    pub fn update_center(&mut self, center: Point) -> Option<Point> {
        self.last_center.replace(center)
    }

    /// Records `distance` and returns the previously recorded one.
    pub fn update_distance(&mut self, distance: f64) -> Option<f64> {
        self.last_distance.replace(distance)
    }

    /// Disarms the long-press candidate. Returns `true` if it was armed.
    pub fn disarm_long_press(&mut self) -> bool {
        core::mem::replace(&mut self.long_press_armed, false)
    }
}
