// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview: a headless pan/zoom/pinch viewport controller.
//!
//! [`ZoomableView`] turns raw multi-touch samples into a uniform scale plus
//! translation for one content subject, and exposes a programmatic control
//! surface ([`zoom_to`](ZoomableView::zoom_to), [`zoom_by`](ZoomableView::zoom_by),
//! [`move_to`](ZoomableView::move_to), [`move_by`](ZoomableView::move_by),
//! [`move_static_pin_to`](ZoomableView::move_static_pin_to)).
//!
//! It draws nothing and reads no clock. The host:
//! - reports the container rectangle with [`ZoomableView::set_layout`],
//! - forwards every [`TouchSample`] to [`ZoomableView::handle_touch`],
//! - calls [`ZoomableView::frame`] on its presentation cadence,
//! - applies [`ZoomableView::event`] (or the `on_transform` callback) to its
//!   content layer: a content-layer point `c` appears at
//!   `W / 2 + (c - W / 2 + offset) * zoom` on each axis.
//!
//! Everything the view decides is reported through a
//! [`ZoomableViewHandler`]: gesture lifecycle, zoom and shift hooks (some of
//! which may veto), taps, long presses and static-pin movement.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use zoomview::{TouchSample, ZoomableView, ZoomableViewConfig, ZoomableViewEvent, ZoomableViewHandler};
//!
//! #[derive(Default)]
//! struct Host {
//!     last: Option<ZoomableViewEvent>,
//! }
//!
//! impl ZoomableViewHandler for Host {
//!     fn on_transform(&mut self, event: &ZoomableViewEvent) {
//!         self.last = Some(*event);
//!     }
//! }
//!
//! let config = ZoomableViewConfig { max_zoom: Some(3.0), ..ZoomableViewConfig::default() };
//! let mut view = ZoomableView::new(config, Host::default());
//! view.set_layout(Rect::new(0.0, 0.0, 400.0, 400.0));
//!
//! // Two quick taps: a double tap zooms in by one step around the tap.
//! for t in [0, 150] {
//!     view.handle_touch(&TouchSample::down(t, &[Point::new(100.0, 100.0)]));
//!     view.handle_touch(&TouchSample::up(t + 40, Point::new(100.0, 100.0), &[]));
//! }
//! let mut now = 190;
//! while view.frame(now) {
//!     now += 16;
//! }
//! assert!((view.transform().zoom - 1.5).abs() < 1e-9);
//! assert_eq!(view.handler().last.map(|e| e.zoom_level), Some(1.5));
//! ```
//!
//! The geometry, timing and gesture building blocks live in
//! `zoomview_transform`, `zoomview_timing` and `zoomview_gesture`; the types a
//! host needs are re-exported here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod error;
mod feedback;
mod handler;
mod view;

pub use config::ZoomableViewConfig;
pub use error::Rejection;
pub use feedback::TouchFeedback;
pub use handler::{Intercept, ZoomableViewHandler};
pub use view::ZoomableView;

pub use zoomview_gesture::{DistanceMetric, TapCandidate, TouchPhase, TouchSample};
pub use zoomview_timing::Millis;
pub use zoomview_transform::{Transform, ViewportGeometry, ZoomableViewEvent, pin};
