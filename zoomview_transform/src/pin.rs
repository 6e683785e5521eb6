// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static-pin coordinate mapping.
//!
//! A static pin is a marker fixed at a container-relative viewport position.
//! As the content is panned and zoomed underneath it, hosts usually want to
//! know which point of the content subject (for example, which pixel of an
//! image) the pin currently sits on.
//!
//! The content subject is laid out "contain"-style inside the content layer:
//! scaled uniformly to fit the container and centered, with letterboxing on
//! the axis with spare room. The content layer is then transformed by the
//! current pan/zoom (see [`ZoomableViewEvent::content_layer_transform`]).
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use zoomview_transform::{Transform, ViewportGeometry, ZoomableViewEvent, pin};
//!
//! let geometry = ViewportGeometry::from_layout(Rect::new(0.0, 0.0, 400.0, 400.0));
//! let event = ZoomableViewEvent::new(Transform::new(2.0, Vec2::ZERO), &geometry);
//!
//! // An 800x400 image is letterboxed to 400x200, centered vertically.
//! let image = Size::new(800.0, 400.0);
//! let at = pin::viewport_to_content(Point::new(200.0, 200.0), image, &event).unwrap();
//! assert!((at.x - 400.0).abs() < 1e-9 && (at.y - 200.0).abs() < 1e-9);
//! ```

use kurbo::{Affine, Point, Size, Vec2};

use crate::ZoomableViewEvent;

/// How the content subject is fitted into the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainFit {
    /// Uniform scale from content units to content-layer units.
    pub scale: f64,
    /// Letterbox padding on each axis, in content-layer units.
    pub padding: Vec2,
}

impl ContainFit {
    /// Computes the "contain" fit of `content` inside `container`.
    ///
    /// Returns `None` if either size has a non-positive or non-finite extent.
    #[must_use]
    pub fn new(content: Size, container: Size) -> Option<Self> {
        if !usable(content) || !usable(container) {
            return None;
        }
        let scale = (container.width / content.width).min(container.height / content.height);
        let fitted = Size::new(content.width * scale, content.height * scale);
        Some(Self {
            scale,
            padding: Vec2::new(
                (container.width - fitted.width) / 2.0,
                (container.height - fitted.height) / 2.0,
            ),
        })
    }

    /// Transform from content coordinates to content-layer coordinates.
    #[must_use]
    pub fn to_layer(&self) -> Affine {
        Affine::translate(self.padding) * Affine::scale(self.scale)
    }
}

fn usable(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

fn content_to_viewport_transform(content_size: Size, event: &ZoomableViewEvent) -> Option<Affine> {
    let layer = event.content_layer_transform()?;
    let fit = ContainFit::new(content_size, event.original_size())?;
    Some(layer * fit.to_layer())
}

/// Maps a container-relative viewport position to content coordinates.
///
/// This undoes the current pan/zoom and the letterboxing. Returns `None`
/// when the container has not been measured or the content size is unknown.
#[must_use]
pub fn viewport_to_content(
    viewport: Point,
    content_size: Size,
    event: &ZoomableViewEvent,
) -> Option<Point> {
    let t = content_to_viewport_transform(content_size, event)?;
    Some(t.inverse() * viewport)
}

/// Maps a content coordinate to its container-relative viewport position.
///
/// The inverse of [`viewport_to_content`].
#[must_use]
pub fn content_to_viewport(
    content: Point,
    content_size: Size,
    event: &ZoomableViewEvent,
) -> Option<Point> {
    let t = content_to_viewport_transform(content_size, event)?;
    Some(t * content)
}

/// Solves for the offset that places `content` under the viewport point `pin`
/// at the given zoom.
///
/// Returns `None` when the container or content size is unusable or `zoom`
/// is not positive.
#[must_use]
pub fn offset_for_pin(
    content: Point,
    pin: Point,
    content_size: Size,
    container: Size,
    zoom: f64,
) -> Option<Vec2> {
    if zoom.is_nan() || zoom <= 0.0 {
        return None;
    }
    let fit = ContainFit::new(content_size, container)?;
    let layer = fit.to_layer() * content;
    let half = Vec2::new(container.width / 2.0, container.height / 2.0);
    Some((pin.to_vec2() - half) / zoom + half - layer.to_vec2())
}
