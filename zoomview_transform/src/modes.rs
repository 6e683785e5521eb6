// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Clamp behavior for the pan offset relative to the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the content may be panned freely.
    #[default]
    None,
    /// Keep the zoomed content covering the container.
    ///
    /// While zoomed in, the offset on each axis is limited so that no edge of
    /// the content layer moves inside the container. At or below zoom `1.0`
    /// the content cannot cover the container, so it is kept centered.
    BindToBorders,
}

impl ClampMode {
    /// Applies this mode to `offset` for the given zoom and container size.
    ///
    /// Returns `offset` unchanged for [`ClampMode::None`] or when the size or
    /// zoom is not usable.
    #[must_use]
    pub fn apply(self, offset: Vec2, zoom: f64, size: Size) -> Vec2 {
        match self {
            Self::None => offset,
            Self::BindToBorders => {
                if !(zoom.is_finite() && zoom > 0.0) {
                    return offset;
                }
                Vec2::new(
                    bind_axis(offset.x, zoom, size.width),
                    bind_axis(offset.y, zoom, size.height),
                )
            }
        }
    }
}

fn bind_axis(offset: f64, zoom: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 {
        return offset;
    }
    if zoom <= 1.0 {
        return 0.0;
    }
    // Content half-overflow on screen, expressed in pre-scale units.
    let limit = (extent * zoom - extent) / 2.0 / zoom;
    offset.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::ClampMode;

    #[test]
    fn none_is_passthrough() {
        let offset = Vec2::new(1_000.0, -1_000.0);
        assert_eq!(
            ClampMode::None.apply(offset, 3.0, Size::new(100.0, 100.0)),
            offset
        );
    }

    #[test]
    fn bind_to_borders_limits_offset_when_zoomed_in() {
        // At zoom 2 a 100px container shows 200px of content: 50px of
        // overflow per side on screen, i.e. 25 pre-scale units.
        let bound = ClampMode::BindToBorders.apply(
            Vec2::new(80.0, -80.0),
            2.0,
            Size::new(100.0, 100.0),
        );
        assert!((bound.x - 25.0).abs() < 1e-9);
        assert!((bound.y + 25.0).abs() < 1e-9);
    }

    #[test]
    fn bind_to_borders_centers_when_zoomed_out() {
        let bound =
            ClampMode::BindToBorders.apply(Vec2::new(10.0, 5.0), 0.75, Size::new(100.0, 60.0));
        assert_eq!(bound, Vec2::ZERO);
    }

    #[test]
    fn bind_to_borders_ignores_unmeasured_container() {
        let offset = Vec2::new(10.0, 5.0);
        assert_eq!(
            ClampMode::BindToBorders.apply(offset, 2.0, Size::ZERO),
            offset
        );
    }
}
