// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Gesture: multi-touch classification and per-sample transform math.
//!
//! This crate turns a stream of [`TouchSample`]s into gesture steps and
//! applies them to a [`Transform`](zoomview_transform::Transform):
//!
//! - [`GestureClassifier`]: the session state machine. One or two fingers
//!   start a session; two fingers pinch; one finger shifts once it moves
//!   past a small threshold; more than two fingers abandon the session.
//! - [`pinch_step`]: zoom by finger-distance growth with a resistance curve,
//!   keeping the anchor fixed and following the drift of the pinch center.
//! - [`shift_step`]: single-finger panning in content units.
//! - [`TapResolver`] and [`next_zoom_step`]: tap pairing and double-tap zoom
//!   stepping.
//!
//! It holds no timers. Owners schedule the single-tap and long-press
//! deadlines themselves (see `zoomview_timing`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use zoomview_gesture::{
//!     ClassifierConfig, GestureClassifier, GestureStep, PinchConfig, TouchSample, pinch_step,
//! };
//! use zoomview_transform::{Transform, ViewportGeometry, ZoomBounds};
//!
//! let geometry = ViewportGeometry::from_layout(Rect::new(0.0, 0.0, 400.0, 400.0));
//! let mut gestures = GestureClassifier::new(ClassifierConfig::default());
//! let mut transform = Transform::IDENTITY;
//!
//! let frames = [
//!     TouchSample::down(0, &[Point::new(150.0, 200.0), Point::new(250.0, 200.0)]),
//!     TouchSample::moved(16, &[Point::new(100.0, 200.0), Point::new(300.0, 200.0)]),
//! ];
//! for sample in &frames {
//!     for step in gestures.process(sample) {
//!         if let GestureStep::Pinch(pinch) = step {
//!             let config = PinchConfig { zoom_in_sensitivity: 0.0, ..PinchConfig::default() };
//!             if let Some(next) =
//!                 pinch_step(&pinch, transform, ZoomBounds::UNBOUNDED, &geometry, None, &config)
//!             {
//!                 transform = next;
//!             }
//!         }
//!     }
//! }
//! assert!((transform.zoom - 2.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classifier;
mod pinch;
mod session;
mod shift;
mod tap;
mod touch;

pub use classifier::{
    ClassifierConfig, EndReason, GestureClassifier, GestureEnd, GestureStep, GestureSteps,
    MAX_TOUCHES, PinchSample, ShiftSample,
};
pub use pinch::{MAX_SENSITIVITY, PinchConfig, pinch_step};
pub use session::{GestureSession, GestureType};
pub use shift::{ShiftPolicy, shift_delta, shift_step};
pub use tap::{TapCandidate, TapOutcome, TapResolver, next_zoom_step};
pub use touch::{DistanceMetric, TouchPhase, TouchSample, centroid};
