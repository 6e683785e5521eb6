// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use zoomview_timing::Millis;

/// A tap the host may draw visual feedback for.
///
/// Entries appear when a tap is released (with
/// `visual_touch_feedback_enabled`) and disappear once `expires_at` passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchFeedback {
    /// Unique id for keying the host's visuals.
    pub id: u64,
    /// Container-relative tap position.
    pub position: Point,
    /// Release time of the tap.
    pub started_at: Millis,
    /// Time the entry is removed.
    pub expires_at: Millis,
}

impl TouchFeedback {
    /// Linear progress of the feedback at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Millis) -> f64 {
        let span = self.expires_at.saturating_sub(self.started_at);
        if span == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at).min(span);
        elapsed as f64 / span as f64
    }
}
