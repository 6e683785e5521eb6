// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// On-screen geometry of the zoom container, as reported by the host layout.
///
/// The core never measures anything itself: the host feeds the latest layout
/// rectangle in, and every computation that divides by the container size
/// checks [`ViewportGeometry::is_ready`] first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    /// Original (un-zoomed) width and height of the container.
    pub size: Size,
    /// Page position of the container's top-left corner.
    pub origin: Point,
}

impl ViewportGeometry {
    /// Geometry that has not been measured yet.
    pub const UNMEASURED: Self = Self {
        size: Size::ZERO,
        origin: Point::ORIGIN,
    };

    /// Creates geometry from a page-space layout rectangle.
    #[must_use]
    pub fn from_layout(rect: Rect) -> Self {
        Self {
            size: rect.size(),
            origin: rect.origin(),
        }
    }

    /// Returns `true` once both extents are known, finite and positive.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.size.width.is_finite()
            && self.size.height.is_finite()
            && self.size.width > 0.0
            && self.size.height > 0.0
    }

    /// Center of the container in container-relative coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Converts a page-space point into container-relative coordinates.
    #[must_use]
    pub fn to_local(&self, page: Point) -> Point {
        page - self.origin.to_vec2()
    }

    /// Converts a container-relative point back into page space.
    #[must_use]
    pub fn to_page(&self, local: Point) -> Point {
        local + self.origin.to_vec2()
    }

    /// Offset from the container center to `local`.
    #[must_use]
    pub fn from_center(&self, local: Point) -> Vec2 {
        local - self.center()
    }
}
