// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Timing: host-agnostic deferred-execution primitives.
//!
//! Nothing in this crate reads a clock or spawns anything. Hosts own the
//! notion of time and pass it in as logical milliseconds, which keeps every
//! timer and animation deterministic and lets tests step time synchronously.
//!
//! - [`TimerQueue`]: one-shot timers with idempotent cancellation.
//! - [`Debounce`]: a trailing-edge debounce slot on top of a queue.
//! - [`Tween`] and [`Easing`]: eased progress driven by frame samples.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoomview_timing::{Debounce, Easing, TimerQueue, Tween};
//!
//! #[derive(Debug, PartialEq)]
//! enum Deferred { Notify }
//!
//! let mut timers = TimerQueue::new();
//! let mut notify = Debounce::new();
//! let mut zoom = Tween::new(250, Easing::EaseOut);
//!
//! for now in (0..=300).step_by(16) {
//!     // Continuous motion keeps re-arming the notification.
//!     let frame = zoom.sample(now);
//!     let _value = frame.lerp(1.0, 2.0);
//!     if !frame.finished {
//!         notify.trigger(&mut timers, now, 100, Deferred::Notify);
//!     }
//!     while let Some(due) = timers.pop_due(now) {
//!         assert!(notify.fired(due.id));
//!     }
//! }
//! assert!(zoom.is_finished());
//! assert_eq!(timers.next_deadline(), Some(340));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod easing;
mod queue;
mod tween;

pub use debounce::Debounce;
pub use easing::Easing;
pub use queue::{Expired, Millis, TimerId, TimerQueue};
pub use tween::{Tween, TweenFrame, TweenPhase};
