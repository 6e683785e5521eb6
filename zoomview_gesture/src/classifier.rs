// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: turns raw touch samples into gesture steps.
//!
//! ## State machine
//!
//! ```text
//! Idle ──first touch──▶ Started ──1 finger past threshold──▶ Shift
//!                          │  ╲                              ▲  │
//!                          │   ╲──2 fingers──▶ Pinch ◀───────┼──┘
//!                          │                    │  └─────────┘
//!                          ▼                    ▼
//!                        Ended ◀── release / cancel / >2 fingers
//! ```
//!
//! - A session starts on the first sample with one or two touches and emits
//!   [`GestureStep::Granted`].
//! - Two touches classify as a pinch. Entering the pinch records the current
//!   center and distance, so the first pinch sample carries no previous
//!   values and produces no delta.
//! - One touch classifies as a shift once it has moved more than the
//!   threshold from the first touch on either axis. Smaller movement leaves
//!   the session unclassified, so jitter does not turn a tap into a pan.
//! - More than two touches abandon the session. The rest of that physical
//!   sequence is ignored until every finger is lifted.
//! - Ending clears the session, so ending twice only reports once.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use smallvec::SmallVec;

use crate::session::{GestureSession, GestureType};
use crate::touch::{DistanceMetric, TouchPhase, TouchSample, centroid};

/// Largest number of simultaneous touches a gesture may use.
pub const MAX_TOUCHES: usize = 2;

/// Tuning for [`GestureClassifier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Movement (per axis) a single touch must exceed to become a shift.
    pub shift_threshold: f64,
    /// How two-finger distance is measured.
    ///
    /// Defaults to [`DistanceMetric::Euclidean`], the true distance between
    /// the touches. [`DistanceMetric::LegacyHorizontal`] keeps the older
    /// measure that counts the horizontal difference twice; pick it only to
    /// match that behavior.
    pub distance_metric: DistanceMetric,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            shift_threshold: 2.0,
            distance_metric: DistanceMetric::Euclidean,
        }
    }
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Every finger was lifted.
    Released,
    /// The host cancelled the sequence.
    Cancelled,
    /// More than [`MAX_TOUCHES`] fingers touched the surface.
    TooManyTouches,
}

/// Summary of a finished session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEnd {
    /// The type the session was classified as, if any.
    pub gesture_type: Option<GestureType>,
    /// Page position where the session started.
    pub first_touch: Point,
    /// Page position of the touch that ended the session. Meaningless for
    /// [`EndReason::Cancelled`], which carries no position.
    pub release: Point,
    /// Why the session ended.
    pub reason: EndReason,
}

/// One two-finger sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Page-space midpoint of the two touches.
    pub center: Point,
    /// Distance between the two touches.
    pub distance: f64,
    /// Midpoint on the previous pinch sample, if one was recorded.
    pub previous_center: Option<Point>,
    /// Distance on the previous pinch sample, if one was recorded.
    pub previous_distance: Option<f64>,
}

/// One single-finger pan sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftSample {
    /// Page position of the touch.
    pub center: Point,
    /// Position on the previous shift sample, if one was recorded.
    pub previous_center: Option<Point>,
}

/// Output of [`GestureClassifier::process`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureStep {
    /// A new session started at the given page position.
    Granted {
        /// Centroid of the touches that started the session.
        first_touch: Point,
    },
    /// The long-press candidate was disqualified by movement or a second finger.
    CancelLongPress,
    /// A two-finger sample.
    Pinch(PinchSample),
    /// A single-finger pan sample.
    Shift(ShiftSample),
    /// The session ended.
    Ended(GestureEnd),
}

/// Steps produced by a single sample.
pub type GestureSteps = SmallVec<[GestureStep; 4]>;

/// Stateful classifier for one zoomable view.
///
/// ```rust
/// use kurbo::Point;
/// use zoomview_gesture::{ClassifierConfig, GestureClassifier, GestureStep, TouchSample};
///
/// let mut gestures = GestureClassifier::new(ClassifierConfig::default());
///
/// let steps = gestures.process(&TouchSample::down(0, &[Point::new(10.0, 10.0)]));
/// assert!(matches!(steps[0], GestureStep::Granted { .. }));
///
/// // One unit of jitter is not a shift.
/// let steps = gestures.process(&TouchSample::moved(16, &[Point::new(11.0, 10.0)]));
/// assert!(steps.is_empty());
///
/// let steps = gestures.process(&TouchSample::up(80, Point::new(11.0, 10.0), &[]));
/// let GestureStep::Ended(end) = steps[0] else { unreachable!() };
/// assert_eq!(end.gesture_type, None); // a tap
/// ```
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    config: ClassifierConfig,
    session: Option<GestureSession>,
    abandoned: bool,
}

impl GestureClassifier {
    /// Creates an idle classifier.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            session: None,
            abandoned: false,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next sample.
    pub fn set_config(&mut self, config: ClassifierConfig) {
        self.config = config;
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session is live.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    /// Classification of the live session.
    #[must_use]
    pub fn gesture_type(&self) -> Option<GestureType> {
        self.session.as_ref().and_then(|s| s.gesture_type)
    }

    /// Processes one sample and returns the resulting steps, in order.
    pub fn process(&mut self, sample: &TouchSample) -> GestureSteps {
        let mut out = GestureSteps::new();
        match sample.phase {
            TouchPhase::Cancel => {
                self.abandoned = false;
                self.finish(EndReason::Cancelled, sample.changed, &mut out);
            }
            TouchPhase::Up if sample.touches.is_empty() => {
                self.abandoned = false;
                self.finish(EndReason::Released, sample.changed, &mut out);
            }
            TouchPhase::Down | TouchPhase::Move | TouchPhase::Up => {
                self.classify(sample, &mut out);
            }
        }
        out
    }

    /// Drops all state without reporting anything.
    pub fn reset(&mut self) {
        self.session = None;
        self.abandoned = false;
    }

    fn finish(&mut self, reason: EndReason, release: Point, out: &mut GestureSteps) {
        let Some(session) = self.session.take() else {
            return;
        };
        tracing::debug!(
            gesture_type = ?session.gesture_type,
            ?reason,
            "gesture ended"
        );
        out.push(GestureStep::Ended(GestureEnd {
            gesture_type: session.gesture_type,
            first_touch: session.first_touch,
            release,
            reason,
        }));
    }

    fn classify(&mut self, sample: &TouchSample, out: &mut GestureSteps) {
        if self.abandoned {
            return;
        }
        let touches = sample.touches.as_slice();
        if touches.len() > MAX_TOUCHES {
            self.finish(EndReason::TooManyTouches, sample.changed, out);
            self.abandoned = true;
            return;
        }

        if self.session.is_none() {
            let Some(first_touch) = centroid(touches) else {
                return;
            };
            tracing::debug!(touches = touches.len(), "gesture granted");
            self.session = Some(GestureSession::start(first_touch));
            out.push(GestureStep::Granted { first_touch });
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match *touches {
            [a, b] => {
                if session.disarm_long_press() {
                    out.push(GestureStep::CancelLongPress);
                }
                let center = a.midpoint(b);
                let distance = self.config.distance_metric.distance(a, b);
                if session.enter(GestureType::Pinch) {
                    tracing::debug!("gesture classified as pinch");
                }
                out.push(GestureStep::Pinch(PinchSample {
                    center,
                    distance,
                    previous_center: session.update_center(center),
                    previous_distance: session.update_distance(distance),
                }));
            }
            [p] => {
                let moved = session.movement(p);
                let threshold = self.config.shift_threshold;
                let beyond = moved.x.abs() > threshold || moved.y.abs() > threshold;
                if beyond && session.disarm_long_press() {
                    out.push(GestureStep::CancelLongPress);
                }
                if beyond || session.gesture_type == Some(GestureType::Shift) {
                    if session.enter(GestureType::Shift) {
                        tracing::debug!("gesture classified as shift");
                    }
                    out.push(GestureStep::Shift(ShiftSample {
                        center: p,
                        previous_center: session.update_center(p),
                    }));
                }
            }
            _ => {}
        }
    }
}
