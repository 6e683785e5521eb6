// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Optional lower and upper zoom limits.
///
/// Either bound may be unset, in which case zoom is unclamped on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomBounds {
    /// Smallest allowed zoom factor, if any.
    pub min: Option<f64>,
    /// Largest allowed zoom factor, if any.
    pub max: Option<f64>,
}

impl ZoomBounds {
    /// No limits on either side.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates bounds from optional limits.
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Clamps `zoom` into the configured bounds, skipping unset ones.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        let mut zoom = zoom;
        if let Some(max) = self.max
            && zoom > max
        {
            zoom = max;
        }
        if let Some(min) = self.min
            && zoom < min
        {
            zoom = min;
        }
        zoom
    }

    /// Returns `true` if `zoom` lies within the configured bounds (inclusive).
    #[must_use]
    pub fn contains(&self, zoom: f64) -> bool {
        self.min.is_none_or(|min| zoom >= min) && self.max.is_none_or(|max| zoom <= max)
    }
}

/// A snapshot of the pan/zoom transform.
///
/// `offset` is expressed in content units before scaling, so the on-screen
/// translation is `offset * zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub zoom: f64,
    /// Pre-scale translation of the content layer.
    pub offset: Vec2,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from a zoom factor and offset.
    #[must_use]
    pub const fn new(zoom: f64, offset: Vec2) -> Self {
        Self { zoom, offset }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The authoritative pan/zoom state of one zoomable view.
///
/// All writes go through this type so that zoom is clamped at every mutation
/// site. A revision counter bumps whenever a write changes the stored value,
/// which lets observers cheaply detect changes between frames.
///
/// ```rust
/// use kurbo::Vec2;
/// use zoomview_transform::{TransformState, ZoomBounds};
///
/// let mut state = TransformState::new(1.0, Vec2::ZERO, ZoomBounds::new(Some(0.5), Some(3.0)));
/// state.set_zoom(10.0);
/// assert_eq!(state.read().zoom, 3.0);
/// assert_eq!(state.revision(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TransformState {
    zoom: f64,
    offset: Vec2,
    bounds: ZoomBounds,
    revision: u64,
}

impl TransformState {
    /// Creates state seeded with an initial zoom and offset.
    ///
    /// The initial zoom is clamped like any other write.
    #[must_use]
    pub fn new(zoom: f64, offset: Vec2, bounds: ZoomBounds) -> Self {
        Self {
            zoom: bounds.clamp(zoom),
            offset,
            bounds,
            revision: 0,
        }
    }

    /// Returns the current zoom and offset.
    #[must_use]
    pub fn read(&self) -> Transform {
        Transform {
            zoom: self.zoom,
            offset: self.offset,
        }
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pre-scale offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Configured zoom bounds.
    #[must_use]
    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Number of effective writes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the zoom bounds and re-clamps the current zoom.
    ///
    /// Returns `true` if the stored zoom changed as a result.
    pub fn set_bounds(&mut self, bounds: ZoomBounds) -> bool {
        self.bounds = bounds;
        self.set_zoom(self.zoom)
    }

    /// Writes the zoom factor, clamped into the bounds.
    ///
    /// Non-finite or non-positive values are ignored. Returns `true` if the
    /// stored value changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.set(Transform {
            zoom,
            offset: self.offset,
        })
    }

    /// Writes the pre-scale offset. Returns `true` if the stored value changed.
    pub fn set_offset(&mut self, offset: Vec2) -> bool {
        self.set(Transform {
            zoom: self.zoom,
            offset,
        })
    }

    /// Writes zoom and offset together as one update.
    ///
    /// The zoom is clamped; a write with a non-finite or non-positive zoom, or
    /// a non-finite offset, is dropped. Returns `true` if the stored value
    /// changed.
    pub fn set(&mut self, transform: Transform) -> bool {
        if !(transform.zoom.is_finite() && transform.zoom > 0.0) || !transform.offset.is_finite() {
            return false;
        }
        let zoom = self.bounds.clamp(transform.zoom);
        if zoom == self.zoom && transform.offset == self.offset {
            return false;
        }
        self.zoom = zoom;
        self.offset = transform.offset;
        self.revision += 1;
        true
    }
}
