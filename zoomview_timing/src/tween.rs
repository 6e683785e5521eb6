// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Easing, Millis};

/// Lifecycle of a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenPhase {
    /// Created but not yet sampled; the first sample fixes the start time.
    Pending,
    /// Sampling in progress.
    Running {
        /// Time of the first sample.
        start: Millis,
    },
    /// The final value has been produced; the owner should run its
    /// completion hook and drop the tween.
    Completing,
}

/// One sample of a running [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenFrame {
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    /// `true` on the sample that reached the end.
    pub finished: bool,
}

impl TweenFrame {
    /// Interpolates between `from` and `to` at this frame's progress.
    #[must_use]
    pub fn lerp(&self, from: f64, to: f64) -> f64 {
        if self.finished {
            to
        } else {
            from + (to - from) * self.progress
        }
    }
}

/// Eased progress over a fixed duration, driven by an external frame clock.
///
/// A tween never reads time on its own: each call to [`Tween::sample`] is one
/// frame. Because the start time is taken from the first sample, a tween can
/// be created outside the frame loop (for example from a host API call) and
/// still start smoothly on the next frame.
///
/// ```rust
/// use zoomview_timing::{Easing, Tween, TweenPhase};
///
/// let mut tween = Tween::new(100, Easing::Linear);
/// assert_eq!(tween.sample(1_000).progress, 0.0);
/// assert_eq!(tween.sample(1_050).progress, 0.5);
/// let last = tween.sample(1_100);
/// assert!(last.finished);
/// assert_eq!(tween.phase(), TweenPhase::Completing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    duration: Millis,
    easing: Easing,
    phase: TweenPhase,
}

impl Tween {
    /// Creates a pending tween.
    #[must_use]
    pub const fn new(duration: Millis, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            phase: TweenPhase::Pending,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    /// Configured duration.
    #[must_use]
    pub fn duration(&self) -> Millis {
        self.duration
    }

    /// Returns `true` once the final frame has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == TweenPhase::Completing
    }

    /// Advances to `now` and returns the frame to present.
    pub fn sample(&mut self, now: Millis) -> TweenFrame {
        let start = match self.phase {
            TweenPhase::Completing => return Self::done(),
            TweenPhase::Pending => {
                self.phase = TweenPhase::Running { start: now };
                now
            }
            TweenPhase::Running { start } => start,
        };

        let elapsed = now.saturating_sub(start);
        if elapsed >= self.duration {
            self.phase = TweenPhase::Completing;
            return Self::done();
        }

        let t = elapsed as f64 / self.duration as f64;
        TweenFrame {
            progress: self.easing.apply(t),
            finished: false,
        }
    }

    fn done() -> TweenFrame {
        TweenFrame {
            progress: 1.0,
            finished: true,
        }
    }
}
