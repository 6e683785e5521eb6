// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom-centering correction.
//!
//! The content layer is scaled about the container center and translated by
//! `offset` before scaling, so a content-layer coordinate `c` appears at
//! `extent / 2 + (c - extent / 2 + offset) * zoom` on each axis. Changing the
//! zoom alone therefore keeps the container center fixed; to keep any other
//! anchor fixed the offset has to move as well.

use kurbo::{Point, Size, Vec2};

/// Returns the offset that keeps `anchor` fixed on screen across a zoom change.
///
/// All values are for a single axis: `old_offset` is the pre-scale offset,
/// `extent` the container's original width or height, and `anchor` the
/// container-relative screen coordinate that must not move.
///
/// Returns `old_offset` unchanged when either zoom is not positive.
#[must_use]
pub fn zoom_centered_offset(
    old_offset: f64,
    extent: f64,
    old_zoom: f64,
    new_zoom: f64,
    anchor: f64,
) -> f64 {
    if old_zoom.is_nan() || old_zoom <= 0.0 || new_zoom.is_nan() || new_zoom <= 0.0 {
        return old_offset;
    }
    let from_center = anchor - extent / 2.0;
    old_offset + from_center * (1.0 / new_zoom - 1.0 / old_zoom)
}

/// Two-axis form of [`zoom_centered_offset`].
///
/// Returns `None` when the container size is not known yet (zero or
/// non-finite) or either zoom is not positive, so callers skip the
/// correction for that step instead of dividing by zero.
#[must_use]
pub fn zoom_centered_offset_2d(
    old_offset: Vec2,
    size: Size,
    old_zoom: f64,
    new_zoom: f64,
    anchor: Point,
) -> Option<Vec2> {
    if !size.is_finite() || size.width <= 0.0 || size.height <= 0.0 {
        return None;
    }
    if old_zoom.is_nan() || old_zoom <= 0.0 || new_zoom.is_nan() || new_zoom <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        zoom_centered_offset(old_offset.x, size.width, old_zoom, new_zoom, anchor.x),
        zoom_centered_offset(old_offset.y, size.height, old_zoom, new_zoom, anchor.y),
    ))
}

/// Maps a container-relative screen point to content-layer coordinates.
#[must_use]
pub fn screen_to_layer(screen: f64, extent: f64, zoom: f64, offset: f64) -> f64 {
    (screen - extent / 2.0) / zoom + extent / 2.0 - offset
}
