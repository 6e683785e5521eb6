// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use zoomview_gesture::{ClassifierConfig, DistanceMetric, PinchConfig, ShiftPolicy};
use zoomview_timing::Millis;
use zoomview_transform::{ClampMode, ZoomBounds};

/// Options for a [`ZoomableView`](crate::ZoomableView).
///
/// Every field is public; start from [`Default`] and override what you need.
///
/// ```rust
/// use zoomview::ZoomableViewConfig;
///
/// let config = ZoomableViewConfig {
///     max_zoom: Some(4.0),
///     double_tap_zoom_to_center: true,
///     ..ZoomableViewConfig::default()
/// };
/// assert_eq!(config.min_zoom, Some(0.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomableViewConfig {
    /// Enables pinch and programmatic zoom.
    pub zoom_enabled: bool,
    /// Enables single-finger panning.
    pub pan_enabled: bool,
    /// Zoom at mount, and the target double taps wrap back to.
    pub initial_zoom: f64,
    /// Horizontal offset at mount.
    pub initial_offset_x: f64,
    /// Vertical offset at mount.
    pub initial_offset_y: f64,
    /// Lower zoom bound; `None` leaves zoom unbounded below.
    pub min_zoom: Option<f64>,
    /// Upper zoom bound; `None` leaves zoom unbounded above.
    pub max_zoom: Option<f64>,
    /// Relative increment for [`zoom_by`](crate::ZoomableView::zoom_by) and
    /// double-tap stepping.
    pub zoom_step: Option<f64>,
    /// Pinch resistance when spreading, from 0 (none) to 10 (90%).
    pub pinch_to_zoom_in_sensitivity: f64,
    /// Pinch resistance when closing, from 0 (none) to 10 (90%).
    pub pinch_to_zoom_out_sensitivity: f64,
    /// Divisor on pan speed; larger is less sensitive. Values `<= 0` count as `1`.
    pub movement_sensibility: f64,
    /// Tap pairing window, also the lifetime of tap feedback.
    pub double_tap_delay: Millis,
    /// Anchor double-tap zoom at the container center instead of the tap.
    pub double_tap_zoom_to_center: bool,
    /// Hold time before a still touch counts as a long press.
    pub long_press_duration: Millis,
    /// Suppresses panning while the zoom is exactly `initial_zoom`.
    pub disable_pan_on_initial_zoom: bool,
    /// Logical width of the content subject, for static-pin mapping.
    pub content_width: Option<f64>,
    /// Logical height of the content subject, for static-pin mapping.
    pub content_height: Option<f64>,
    /// Container-relative position of the static pin, if there is one.
    pub static_pin_position: Option<Point>,
    /// Records tap feedback for the host to draw.
    pub visual_touch_feedback_enabled: bool,
    /// Records gesture debug points for the host to draw.
    pub debug: bool,
    /// Keeps the zoomed content covering the container while panning.
    pub bind_to_borders: bool,
    /// How two-finger distance is measured.
    ///
    /// Defaults to [`DistanceMetric::Euclidean`], the true distance between
    /// the touches. [`DistanceMetric::LegacyHorizontal`] keeps the older
    /// measure that counts the horizontal difference twice; pick it only to
    /// match that behavior.
    pub distance_metric: DistanceMetric,
    /// Duration of [`zoom_to`](crate::ZoomableView::zoom_to) animations.
    pub zoom_animation_duration: Millis,
    /// Quiet period before the static-pin change notification fires.
    pub static_pin_debounce: Millis,
}

impl Default for ZoomableViewConfig {
    fn default() -> Self {
        Self {
            zoom_enabled: true,
            pan_enabled: true,
            initial_zoom: 1.0,
            initial_offset_x: 0.0,
            initial_offset_y: 0.0,
            min_zoom: Some(0.5),
            max_zoom: Some(1.5),
            zoom_step: Some(0.5),
            pinch_to_zoom_in_sensitivity: 1.0,
            pinch_to_zoom_out_sensitivity: 1.0,
            movement_sensibility: 1.0,
            double_tap_delay: 300,
            double_tap_zoom_to_center: false,
            long_press_duration: 700,
            disable_pan_on_initial_zoom: false,
            content_width: None,
            content_height: None,
            static_pin_position: None,
            visual_touch_feedback_enabled: true,
            debug: false,
            bind_to_borders: false,
            distance_metric: DistanceMetric::Euclidean,
            zoom_animation_duration: 250,
            static_pin_debounce: 100,
        }
    }
}

impl ZoomableViewConfig {
    /// Zoom bounds from `min_zoom`/`max_zoom`.
    #[must_use]
    pub fn bounds(&self) -> ZoomBounds {
        ZoomBounds::new(self.min_zoom, self.max_zoom)
    }

    /// Initial offset as a vector.
    #[must_use]
    pub fn initial_offset(&self) -> Vec2 {
        Vec2::new(self.initial_offset_x, self.initial_offset_y)
    }

    /// Content subject size, once both extents are known.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        Some(Size::new(self.content_width?, self.content_height?))
    }

    /// Offset clamping policy.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        if self.bind_to_borders {
            ClampMode::BindToBorders
        } else {
            ClampMode::None
        }
    }

    pub(crate) fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig {
            distance_metric: self.distance_metric,
            ..ClassifierConfig::default()
        }
    }

    pub(crate) fn pinch(&self) -> PinchConfig {
        PinchConfig {
            zoom_in_sensitivity: self.pinch_to_zoom_in_sensitivity,
            zoom_out_sensitivity: self.pinch_to_zoom_out_sensitivity,
            movement_sensibility: self.movement_sensibility,
        }
    }

    pub(crate) fn shift_policy(&self) -> ShiftPolicy {
        ShiftPolicy {
            pan_enabled: self.pan_enabled,
            disable_pan_on_initial_zoom: self.disable_pan_on_initial_zoom,
            initial_zoom: self.initial_zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use zoomview_gesture::DistanceMetric;
    use zoomview_transform::{ClampMode, ZoomBounds};

    use super::ZoomableViewConfig;

    #[test]
    fn defaults() {
        let c = ZoomableViewConfig::default();
        assert!(c.zoom_enabled && c.pan_enabled);
        assert_eq!(c.bounds(), ZoomBounds::new(Some(0.5), Some(1.5)));
        assert_eq!(c.double_tap_delay, 300);
        assert_eq!(c.long_press_duration, 700);
        assert_eq!(c.clamp_mode(), ClampMode::None);
        assert!(c.content_size().is_none());
        assert_eq!(c.classifier().distance_metric, DistanceMetric::Euclidean);
    }

    #[test]
    fn content_size_needs_both_extents() {
        let c = ZoomableViewConfig {
            content_width: Some(800.0),
            ..ZoomableViewConfig::default()
        };
        assert!(c.content_size().is_none());
        let c = ZoomableViewConfig {
            content_height: Some(600.0),
            ..c
        };
        assert_eq!(c.content_size(), Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn derived_engine_configs() {
        let c = ZoomableViewConfig {
            pinch_to_zoom_in_sensitivity: 3.0,
            movement_sensibility: 2.0,
            disable_pan_on_initial_zoom: true,
            bind_to_borders: true,
            ..ZoomableViewConfig::default()
        };
        assert_eq!(c.pinch().zoom_in_sensitivity, 3.0);
        assert_eq!(c.pinch().movement_sensibility, 2.0);
        assert!(!c.shift_policy().allows(1.0));
        assert_eq!(c.clamp_mode(), ClampMode::BindToBorders);
        assert_eq!(c.classifier().shift_threshold, 2.0);
    }
}
