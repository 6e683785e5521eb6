// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw multi-touch input.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use smallvec::SmallVec;
use zoomview_timing::Millis;

/// What caused a [`TouchSample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched the surface.
    Down,
    /// One or more fingers moved.
    Move,
    /// A finger was lifted.
    Up,
    /// The host input system took the touch sequence away.
    Cancel,
}

/// One sample from the host's multi-touch stream.
///
/// Samples are expected in delivery order; `time` is the host's logical
/// clock in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// Event kind.
    pub phase: TouchPhase,
    /// Page positions of the touches still active after this sample.
    pub touches: SmallVec<[Point; 2]>,
    /// Page position of the touch that produced the sample; for
    /// [`TouchPhase::Up`] this is where the finger was lifted.
    pub changed: Point,
    /// Logical timestamp.
    pub time: Millis,
}

impl TouchSample {
    /// A touch-down with the given active touches (the last one is new).
    #[must_use]
    pub fn down(time: Millis, touches: &[Point]) -> Self {
        Self::with_touches(TouchPhase::Down, time, touches)
    }

    /// A move of the given active touches.
    #[must_use]
    pub fn moved(time: Millis, touches: &[Point]) -> Self {
        Self::with_touches(TouchPhase::Move, time, touches)
    }

    /// A finger lifted at `released`, leaving `remaining` active.
    #[must_use]
    pub fn up(time: Millis, released: Point, remaining: &[Point]) -> Self {
        Self {
            phase: TouchPhase::Up,
            touches: SmallVec::from_slice(remaining),
            changed: released,
            time,
        }
    }

    /// The sequence was cancelled by the host.
    #[must_use]
    pub fn cancel(time: Millis) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            touches: SmallVec::new(),
            changed: Point::ORIGIN,
            time,
        }
    }

    fn with_touches(phase: TouchPhase, time: Millis, touches: &[Point]) -> Self {
        Self {
            phase,
            touches: SmallVec::from_slice(touches),
            changed: touches.last().copied().unwrap_or(Point::ORIGIN),
            time,
        }
    }

    /// Number of active touches.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}

/// Average position of `touches`, or `None` if there are none.
#[must_use]
pub fn centroid(touches: &[Point]) -> Option<Point> {
    if touches.is_empty() {
        return None;
    }
    let sum = touches
        .iter()
        .fold(kurbo::Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let n = touches.len() as f64;
    Some((sum / n).to_point())
}

/// How the distance between two pinching fingers is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    /// True Euclidean distance.
    #[default]
    Euclidean,
    /// `sqrt(dx² + dx²)`: the horizontal separation counted on both axes.
    ///
    /// Vertical-only pinches register no change under this metric. It exists
    /// to reproduce tuning made against that behavior.
    LegacyHorizontal,
}

impl DistanceMetric {
    /// Distance between `a` and `b` under this metric.
    #[must_use]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Euclidean => a.distance(b),
            Self::LegacyHorizontal => (a.x - b.x).abs() * core::f64::consts::SQRT_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{DistanceMetric, TouchPhase, TouchSample, centroid};

    #[test]
    fn constructors_fill_changed() {
        let s = TouchSample::down(5, &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(s.phase, TouchPhase::Down);
        assert_eq!(s.changed, Point::new(3.0, 4.0));
        assert_eq!(s.touch_count(), 2);

        let s = TouchSample::up(6, Point::new(9.0, 9.0), &[]);
        assert_eq!(s.touch_count(), 0);
        assert_eq!(s.changed, Point::new(9.0, 9.0));
    }

    #[test]
    fn centroid_of_two_is_midpoint() {
        let c = centroid(&[Point::new(0.0, 0.0), Point::new(10.0, 20.0)]).unwrap();
        assert_eq!(c, Point::new(5.0, 10.0));
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn euclidean_distance() {
        let d = DistanceMetric::Euclidean.distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn legacy_metric_ignores_vertical_separation() {
        let m = DistanceMetric::LegacyHorizontal;
        let a = m.distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let b = m.distance(Point::new(0.0, 0.0), Point::new(3.0, 400.0));
        assert!((a - b).abs() < 1e-12);
        assert!((a - 3.0 * core::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
