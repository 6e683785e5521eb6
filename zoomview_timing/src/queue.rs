// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Logical time in milliseconds, supplied by the host.
pub type Millis = u64;

/// Handle to a scheduled timer.
///
/// Ids are allocated from a monotonically increasing counter and never
/// reused, so a stale handle can never cancel a newer timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A timer that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// The handle returned by [`TimerQueue::schedule`].
    pub id: TimerId,
    /// The deadline the timer was scheduled for.
    pub deadline: Millis,
    /// The caller's payload.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: Millis,
    payload: T,
}

/// A queue of one-shot timers keyed by logical deadline.
///
/// The queue does not read a clock. Hosts call [`TimerQueue::pop_due`] with
/// the current time and handle each expired payload in order: earliest
/// deadline first, and in scheduling order among equal deadlines.
///
/// ```rust
/// use zoomview_timing::TimerQueue;
///
/// let mut timers = TimerQueue::new();
/// let tap = timers.schedule(300, "single-tap");
/// let press = timers.schedule(700, "long-press");
///
/// // Releasing the finger cancels the long press; cancelling twice is fine.
/// assert!(timers.cancel(press));
/// assert!(!timers.cancel(press));
///
/// assert!(timers.pop_due(299).is_none());
/// let due = timers.pop_due(300).unwrap();
/// assert_eq!((due.id, due.payload), (tap, "single-tap"));
/// assert!(timers.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by (deadline, id).
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to expire at `deadline`.
    pub fn schedule(&mut self, deadline: Millis, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Ids grow monotonically, so inserting after every entry with an equal
        // or earlier deadline keeps (deadline, id) order.
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            at,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was pending. Cancelling a timer that has
    /// already fired or was already cancelled is a no-op.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<Expired<T>> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let Entry {
            id,
            deadline,
            payload,
        } = self.entries.remove(0);
        Some(Expired {
            id,
            deadline,
            payload,
        })
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TimerQueue;

    #[test]
    fn pops_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(20, 'c');
        q.schedule(10, 'a');
        q.schedule(10, 'b');
        q.schedule(5, 'z');

        let mut order = Vec::new();
        while let Some(e) = q.pop_due(100) {
            order.push(e.payload);
        }
        assert_eq!(order, ['z', 'a', 'b', 'c']);
    }

    #[test]
    fn pop_due_respects_now() {
        let mut q = TimerQueue::new();
        q.schedule(50, ());
        assert!(q.pop_due(49).is_none());
        assert_eq!(q.next_deadline(), Some(50));
        assert!(q.pop_due(50).is_some());
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10, ());
        assert!(q.is_pending(id));
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        assert!(!q.is_pending(id));
    }

    #[test]
    fn cancelling_a_fired_timer_is_a_no_op() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10, ());
        let other = q.schedule(20, ());
        assert_eq!(q.pop_due(10).map(|e| e.id), Some(id));
        assert!(!q.cancel(id));
        assert!(q.is_pending(other));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut q = TimerQueue::new();
        let first = q.schedule(10, ());
        q.cancel(first);
        let second = q.schedule(10, ());
        assert_ne!(first, second);
        assert!(!q.cancel(first));
        assert!(q.is_pending(second));
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        q.schedule(1, ());
        q.schedule(2, ());
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }
}
