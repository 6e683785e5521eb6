// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

use crate::{Transform, ViewportGeometry};

/// Snapshot of the view handed to host callbacks.
///
/// This is never stored: it is synthesized from the transform state and the
/// latest measured geometry at the moment of emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomableViewEvent {
    /// Current zoom factor.
    pub zoom_level: f64,
    /// Pre-scale horizontal offset.
    pub offset_x: f64,
    /// Pre-scale vertical offset.
    pub offset_y: f64,
    /// Measured container width (zero until measured).
    pub original_width: f64,
    /// Measured container height (zero until measured).
    pub original_height: f64,
}

impl ZoomableViewEvent {
    /// Builds a snapshot from a transform and the container geometry.
    #[must_use]
    pub fn new(transform: Transform, geometry: &ViewportGeometry) -> Self {
        Self {
            zoom_level: transform.zoom,
            offset_x: transform.offset.x,
            offset_y: transform.offset.y,
            original_width: geometry.size.width,
            original_height: geometry.size.height,
        }
    }

    /// Returns a copy with a different zoom level.
    #[must_use]
    pub fn with_zoom_level(mut self, zoom_level: f64) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    /// The pre-scale offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// The measured container size.
    #[must_use]
    pub fn original_size(&self) -> Size {
        Size::new(self.original_width, self.original_height)
    }

    /// Transform from content-layer coordinates to container-relative
    /// viewport coordinates.
    ///
    /// Returns `None` until the container has been measured or when the
    /// zoom level is not positive.
    #[must_use]
    pub fn content_layer_transform(&self) -> Option<Affine> {
        let size = self.original_size();
        if size.width.is_nan()
            || size.width <= 0.0
            || size.height.is_nan()
            || size.height <= 0.0
            || self.zoom_level.is_nan()
            || self.zoom_level <= 0.0
        {
            return None;
        }
        let half = Vec2::new(size.width / 2.0, size.height / 2.0);
        Some(
            Affine::translate(half)
                * Affine::scale(self.zoom_level)
                * Affine::translate(self.offset() - half),
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::ZoomableViewEvent;
    use crate::{Transform, ViewportGeometry};

    #[test]
    fn unmeasured_event_has_no_transform() {
        let e = ZoomableViewEvent::new(Transform::IDENTITY, &ViewportGeometry::UNMEASURED);
        assert!(e.content_layer_transform().is_none());
    }

    #[test]
    fn layer_transform_scales_about_center() {
        let g = ViewportGeometry::from_layout(Rect::new(0.0, 0.0, 200.0, 100.0));
        let e = ZoomableViewEvent::new(Transform::new(2.0, Vec2::ZERO), &g);
        let t = e.content_layer_transform().unwrap();

        // The container center is the fixed point of a pure zoom.
        let c = t * Point::new(100.0, 50.0);
        assert!((c.x - 100.0).abs() < 1e-9 && (c.y - 50.0).abs() < 1e-9);

        // The on-screen translation is `offset * zoom`.
        let e = ZoomableViewEvent::new(Transform::new(2.0, Vec2::new(10.0, -5.0)), &g);
        let t = e.content_layer_transform().unwrap();
        let c = t * Point::new(100.0, 50.0);
        assert!((c.x - 120.0).abs() < 1e-9 && (c.y - 40.0).abs() < 1e-9);
    }
}
