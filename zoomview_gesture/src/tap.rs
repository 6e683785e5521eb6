// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap resolution.
//!
//! A session that ends without ever being classified is a tap. The resolver
//! holds the first tap for `double_tap_delay` milliseconds: a second tap
//! inside that window pairs with it into a double tap, otherwise the owner
//! resolves it as a single tap when its timer fires.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use zoomview_timing::Millis;

/// A released tap waiting to be resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapCandidate {
    /// Unique, increasing id.
    pub id: u64,
    /// Container-relative release position.
    pub position: Point,
    /// Logical release time.
    pub released_at: Millis,
    /// `true` if this tap completed a double tap.
    pub is_second_tap: bool,
}

/// Result of [`TapResolver::release`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    /// First tap of a potential pair. Resolve it as a single tap once the
    /// delay has passed without another release.
    Pending(TapCandidate),
    /// The release completed a double tap.
    DoubleTap {
        /// The held first tap.
        first: TapCandidate,
        /// The tap that completed the pair.
        second: TapCandidate,
    },
}

/// Pairs tap releases into single and double taps.
#[derive(Clone, Debug)]
pub struct TapResolver {
    double_tap_delay: Millis,
    first: Option<TapCandidate>,
    next_id: u64,
}

impl TapResolver {
    /// Creates a resolver with the given pairing window.
    #[must_use]
    pub fn new(double_tap_delay: Millis) -> Self {
        Self {
            double_tap_delay,
            first: None,
            next_id: 0,
        }
    }

    /// Pairing window in milliseconds.
    #[must_use]
    pub fn double_tap_delay(&self) -> Millis {
        self.double_tap_delay
    }

    /// Changes the pairing window. A held tap keeps its candidacy.
    pub fn set_double_tap_delay(&mut self, delay: Millis) {
        self.double_tap_delay = delay;
    }

    /// The held first tap, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&TapCandidate> {
        self.first.as_ref()
    }

    /// Records a tap release at `position` and time `now`.
    ///
    /// Pairs with the held tap when it was released strictly less than the
    /// delay ago; otherwise the new tap replaces it as the held candidate.
    pub fn release(&mut self, position: Point, now: Millis) -> TapOutcome {
        let id = self.next_id;
        self.next_id += 1;

        if let Some(first) = self
            .first
            .take_if(|first| now.saturating_sub(first.released_at) < self.double_tap_delay)
        {
            let second = TapCandidate {
                id,
                position,
                released_at: now,
                is_second_tap: true,
            };
            tracing::debug!(first = first.id, second = second.id, "double tap");
            return TapOutcome::DoubleTap { first, second };
        }

        let candidate = TapCandidate {
            id,
            position,
            released_at: now,
            is_second_tap: false,
        };
        self.first = Some(candidate);
        TapOutcome::Pending(candidate)
    }

    /// Takes the held tap, resolving it as a single tap.
    pub fn resolve_single(&mut self) -> Option<TapCandidate> {
        self.first.take()
    }

    /// Forgets the held tap.
    pub fn reset(&mut self) {
        self.first = None;
    }
}

/// The zoom a double tap should step to.
///
/// At `max` (compared at two-decimal precision) this wraps back to
/// `initial`, so repeated double taps toggle between the two. Otherwise the
/// zoom grows by `step` and is capped at `max`. Returns `None` when `max` or
/// `step` is unset.
#[must_use]
pub fn next_zoom_step(zoom: f64, initial: f64, max: Option<f64>, step: Option<f64>) -> Option<f64> {
    let (max, step) = (max?, step?);
    if round2(zoom) == round2(max) {
        return Some(initial);
    }
    Some((zoom * (1.0 + step)).min(max))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;

    use super::{TapOutcome, TapResolver, next_zoom_step};

    #[test]
    fn two_quick_taps_pair() {
        let mut r = TapResolver::new(300);
        let TapOutcome::Pending(first) = r.release(Point::new(10.0, 10.0), 1_000) else {
            panic!("first tap should be pending");
        };
        assert!(!first.is_second_tap);
        match r.release(Point::new(11.0, 10.0), 1_200) {
            TapOutcome::DoubleTap { first: a, second } => {
                assert_eq!(a.id, first.id);
                assert!(second.is_second_tap);
            }
            other => panic!("expected a double tap, got {other:?}"),
        }
        assert!(r.pending().is_none());
        assert!(r.resolve_single().is_none());
    }

    #[test]
    fn pairing_window_is_exclusive() {
        let mut r = TapResolver::new(300);
        r.release(Point::ORIGIN, 0);
        assert!(matches!(r.release(Point::ORIGIN, 300), TapOutcome::Pending(_)));
        assert_eq!(r.pending().map(|c| c.released_at), Some(300));
    }

    #[test]
    fn slow_taps_resolve_singly() {
        let mut r = TapResolver::new(300);
        r.release(Point::ORIGIN, 0);
        let single = r.resolve_single().unwrap();
        assert_eq!(single.released_at, 0);
        assert!(matches!(r.release(Point::ORIGIN, 400), TapOutcome::Pending(_)));
    }

    #[test]
    fn ids_increase() {
        let mut r = TapResolver::new(300);
        let TapOutcome::Pending(a) = r.release(Point::ORIGIN, 0) else {
            unreachable!()
        };
        r.reset();
        let TapOutcome::Pending(b) = r.release(Point::ORIGIN, 1) else {
            unreachable!()
        };
        assert!(b.id > a.id);
    }

    #[test]
    fn next_step_toggles_between_initial_and_max() {
        let (initial, max, step) = (1.0, Some(2.0), Some(0.5));
        let mut zoom = initial;
        let mut seen = vec![zoom];
        for _ in 0..4 {
            zoom = next_zoom_step(zoom, initial, max, step).unwrap();
            seen.push(zoom);
        }
        // 1.5 * 1.5 = 2.25 is capped at 2.
        assert_eq!(seen, [1.0, 1.5, 2.0, 1.0, 1.5]);
    }

    #[test]
    fn next_step_rounds_before_comparing() {
        assert_eq!(next_zoom_step(1.996, 1.0, Some(2.0), Some(0.5)), Some(1.0));
        assert_eq!(next_zoom_step(1.99, 1.0, Some(2.0), Some(0.5)), Some(2.0));
    }

    #[test]
    fn next_step_needs_max_and_step() {
        assert_eq!(next_zoom_step(1.0, 1.0, None, Some(0.5)), None);
        assert_eq!(next_zoom_step(1.0, 1.0, Some(2.0), None), None);
    }
}
