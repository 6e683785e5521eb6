// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-finger panning.

use kurbo::{Point, Vec2};
use zoomview_transform::Transform;

use crate::classifier::ShiftSample;

/// Converts the movement of a gesture center into a pre-scale offset delta.
///
/// The screen movement is divided by the current zoom (so the content tracks
/// the finger) and by `movement_sensibility`. A non-positive or non-finite
/// sensibility is treated as `1`. Returns `None` for a non-positive zoom or a
/// non-finite result.
#[must_use]
pub fn shift_delta(
    center: Point,
    previous: Point,
    zoom: f64,
    movement_sensibility: f64,
) -> Option<Vec2> {
    if zoom.is_nan() || zoom <= 0.0 {
        return None;
    }
    let sensibility = if movement_sensibility > 0.0 && movement_sensibility.is_finite() {
        movement_sensibility
    } else {
        1.0
    };
    let delta = (center - previous) / zoom / sensibility;
    delta.is_finite().then_some(delta)
}

/// Whether single-finger panning is currently allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftPolicy {
    /// Global pan switch.
    pub pan_enabled: bool,
    /// Suppresses panning while the zoom is exactly `initial_zoom`.
    pub disable_pan_on_initial_zoom: bool,
    /// The zoom the view was mounted with.
    pub initial_zoom: f64,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            pan_enabled: true,
            disable_pan_on_initial_zoom: false,
            initial_zoom: 1.0,
        }
    }
}

impl ShiftPolicy {
    /// Returns `true` if panning is allowed at `zoom`.
    #[must_use]
    pub fn allows(&self, zoom: f64) -> bool {
        // Exact comparison: any zoom away from the initial one unlocks panning.
        let at_initial = zoom == self.initial_zoom;
        self.pan_enabled && !(self.disable_pan_on_initial_zoom && at_initial)
    }
}

/// Applies one shift sample to `current`.
///
/// Returns `None` when the policy forbids panning, the sample is the first of
/// a shift (no previous center), or the delta is unusable.
#[must_use]
pub fn shift_step(
    sample: &ShiftSample,
    current: Transform,
    policy: &ShiftPolicy,
    movement_sensibility: f64,
) -> Option<Transform> {
    if !policy.allows(current.zoom) {
        tracing::trace!(zoom = current.zoom, "shift sample skipped: panning not allowed");
        return None;
    }
    let previous = sample.previous_center?;
    let delta = shift_delta(sample.center, previous, current.zoom, movement_sensibility)?;
    Some(Transform::new(current.zoom, current.offset + delta))
}
