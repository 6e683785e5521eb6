// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Transform: pan/zoom state and geometry for a single zoomable view.
//!
//! This crate holds the small, headless pieces of math behind an interactive
//! pan/zoom container:
//! - [`TransformState`]: the authoritative zoom + offset, clamped on every write.
//! - [`ViewportGeometry`]: the container size and page position reported by
//!   the host layout, with a "not ready" state.
//! - [`zoom_centered_offset`]: the offset correction that keeps an anchor
//!   point fixed on screen across a zoom change.
//! - [`ZoomableViewEvent`]: the snapshot handed to host callbacks.
//! - [`pin`]: mapping a viewport-fixed static pin to content coordinates.
//!
//! It does **not** interpret input or run animations; see `zoomview_gesture`
//! and `zoomview_timing` for those.
//!
//! ## Coordinate model
//!
//! The content layer has the same original size as the container. It is
//! scaled by `zoom` about the container center and translated by `offset`
//! *before* scaling, so the on-screen translation is `offset * zoom`:
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use zoomview_transform::{Transform, ViewportGeometry, ZoomableViewEvent, zoom_centered_offset_2d};
//!
//! let geometry = ViewportGeometry::from_layout(Rect::new(0.0, 0.0, 400.0, 300.0));
//! let before = Transform::new(1.0, Vec2::ZERO);
//!
//! // Zoom to 2x while keeping the point under (100, 100) in place.
//! let anchor = Point::new(100.0, 100.0);
//! let offset = zoom_centered_offset_2d(before.offset, geometry.size, 1.0, 2.0, anchor).unwrap();
//! let after = Transform::new(2.0, offset);
//!
//! let t0 = ZoomableViewEvent::new(before, &geometry).content_layer_transform().unwrap();
//! let t1 = ZoomableViewEvent::new(after, &geometry).content_layer_transform().unwrap();
//! let a0 = t0.inverse() * anchor;
//! let a1 = t1.inverse() * anchor;
//! assert!((a0 - a1).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod centering;
mod event;
mod geometry;
mod modes;
pub mod pin;
mod state;

pub use centering::{screen_to_layer, zoom_centered_offset, zoom_centered_offset_2d};
pub use event::ZoomableViewEvent;
pub use geometry::ViewportGeometry;
pub use modes::ClampMode;
pub use state::{Transform, TransformState, ZoomBounds};
