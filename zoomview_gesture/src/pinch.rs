// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-to-zoom math.

use kurbo::Point;
use zoomview_transform::{Transform, ViewportGeometry, ZoomBounds, zoom_centered_offset_2d};

use crate::classifier::PinchSample;
use crate::shift::shift_delta;

/// Largest accepted sensitivity; it maps to 90% resistance.
pub const MAX_SENSITIVITY: f64 = 10.0;

/// Pinch tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchConfig {
    /// Resistance when the fingers spread apart, from 0 (none) to 10 (90%).
    pub zoom_in_sensitivity: f64,
    /// Resistance when the fingers move together, from 0 (none) to 10 (90%).
    pub zoom_out_sensitivity: f64,
    /// Divisor applied to the incidental pan of the two-finger center.
    pub movement_sensibility: f64,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            zoom_in_sensitivity: 1.0,
            zoom_out_sensitivity: 1.0,
            movement_sensibility: 1.0,
        }
    }
}

impl PinchConfig {
    /// Scales the raw growth factor by the configured resistance.
    ///
    /// Returns `(growth - 1) * (1 - s * 9 / 100)`, where `s` is the zoom-out
    /// sensitivity when `growth < 1` and the zoom-in sensitivity otherwise.
    /// Sensitivities are clamped to `0..=10`.
    #[must_use]
    pub fn adjusted_growth_delta(&self, growth: f64) -> f64 {
        let sensitivity = if growth < 1.0 {
            self.zoom_out_sensitivity
        } else {
            self.zoom_in_sensitivity
        };
        let sensitivity = if sensitivity.is_finite() {
            sensitivity.clamp(0.0, MAX_SENSITIVITY)
        } else {
            0.0
        };
        (growth - 1.0) * (1.0 - sensitivity * 9.0 / 100.0)
    }
}

/// Applies one pinch sample to `current`.
///
/// The zoom changes by the sensitivity-adjusted growth of the finger
/// distance and is clamped to `bounds`. The offset is corrected so the anchor
/// stays fixed on screen: the two-finger center by default, or
/// `anchor_override` (container-relative) when a static pin is configured.
/// Finally the drift of the two-finger center since the previous sample is
/// added as a pan.
///
/// Returns `None` when the sample has no previous distance (the first sample
/// of a pinch), a distance is not positive and finite, or the container has
/// not been measured. Nothing should be committed in that case.
#[must_use]
pub fn pinch_step(
    sample: &PinchSample,
    current: Transform,
    bounds: ZoomBounds,
    geometry: &ViewportGeometry,
    anchor_override: Option<Point>,
    config: &PinchConfig,
) -> Option<Transform> {
    let previous = sample.previous_distance?;
    if !usable_distance(previous) || !usable_distance(sample.distance) {
        tracing::trace!(previous, current = sample.distance, "pinch sample skipped");
        return None;
    }
    if !geometry.is_ready() {
        tracing::trace!("pinch sample skipped: container not measured");
        return None;
    }

    let growth = sample.distance / previous;
    let delta = config.adjusted_growth_delta(growth);
    let zoom = bounds.clamp(current.zoom * (1.0 + delta));
    if !(zoom.is_finite() && zoom > 0.0) {
        return None;
    }

    let anchor = anchor_override.unwrap_or_else(|| geometry.to_local(sample.center));
    let mut offset =
        zoom_centered_offset_2d(current.offset, geometry.size, current.zoom, zoom, anchor)?;

    if let Some(previous_center) = sample.previous_center
        && let Some(drift) =
            shift_delta(sample.center, previous_center, zoom, config.movement_sensibility)
    {
        offset += drift;
    }

    Some(Transform::new(zoom, offset))
}

fn usable_distance(d: f64) -> bool {
    d.is_finite() && d > 0.0
}
