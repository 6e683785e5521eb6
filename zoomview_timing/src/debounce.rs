// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Millis, TimerId, TimerQueue};

/// A trailing-edge debounce slot on top of a [`TimerQueue`].
///
/// Each [`Debounce::trigger`] replaces any pending timer, so only the last
/// trigger in a burst fires, `delay` after it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debounce {
    pending: Option<TimerId>,
}

impl Debounce {
    /// Creates an idle debounce slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// (Re)arms the slot to fire `delay` after `now`.
    pub fn trigger<T>(&mut self, timers: &mut TimerQueue<T>, now: Millis, delay: Millis, payload: T) {
        self.cancel(timers);
        self.pending = Some(timers.schedule(now.saturating_add(delay), payload));
    }

    /// Cancels the pending timer, if any. Safe to call repeatedly.
    pub fn cancel<T>(&mut self, timers: &mut TimerQueue<T>) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
    }

    /// Marks `id` as fired if it belongs to this slot.
    ///
    /// Returns `true` when `id` was this slot's pending timer.
    pub fn fired(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` while a timer is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;
    use crate::TimerQueue;

    #[test]
    fn burst_fires_once_after_last_trigger() {
        let mut q = TimerQueue::new();
        let mut d = Debounce::new();
        d.trigger(&mut q, 0, 100, 1);
        d.trigger(&mut q, 40, 100, 2);
        d.trigger(&mut q, 80, 100, 3);
        assert_eq!(q.len(), 1);

        assert!(q.pop_due(179).is_none());
        let e = q.pop_due(180).unwrap();
        assert_eq!(e.payload, 3);
        assert!(d.fired(e.id));
        assert!(!d.is_pending());
    }

    #[test]
    fn foreign_ids_are_not_claimed() {
        let mut q = TimerQueue::new();
        let mut d = Debounce::new();
        let other = q.schedule(5, 0);
        d.trigger(&mut q, 0, 10, 1);
        assert!(!d.fired(other));
        assert!(d.is_pending());
    }

    #[test]
    fn cancel_twice_is_safe() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        let mut d = Debounce::new();
        d.trigger(&mut q, 0, 10, ());
        d.cancel(&mut q);
        d.cancel(&mut q);
        assert!(q.is_empty());
    }
}
