// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// Payloads waiting for a deadline.
///
/// Entries with equal deadlines fire in the order they were scheduled. A
/// deadline equal to the current time fires on the next [`pop_due`](Self::pop_due),
/// which is how "after the current event tick" work is expressed.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by deadline, then by scheduling order.
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to fire once `now >= deadline`.
    pub fn schedule_at(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let index = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            index,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Removes a pending timer, returning its payload.
    ///
    /// Returns `None` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Returns `true` if `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Removes and returns every payload whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Vec<T> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries.drain(..due).map(|e| e.payload).collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
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

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule_at(30, "c");
        q.schedule_at(10, "a");
        q.schedule_at(20, "b");

        assert_eq!(q.next_deadline(), Some(10));
        assert_eq!(q.pop_due(25), vec!["a", "b"]);
        assert_eq!(q.pop_due(25), Vec::<&str>::new());
        assert_eq!(q.pop_due(30), vec!["c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule_at(5, 1);
        q.schedule_at(5, 2);
        q.schedule_at(5, 3);

        assert_eq!(q.pop_due(5), vec![1, 2, 3]);
    }

    #[test]
    fn deadline_now_fires_on_next_pop() {
        let mut q = TimerQueue::new();
        let now = 1_000;
        q.schedule_at(now, "deferred");

        assert_eq!(q.pop_due(now), vec!["deferred"]);
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut q = TimerQueue::new();
        let keep = q.schedule_at(10, "keep");
        let drop = q.schedule_at(10, "drop");

        assert_eq!(q.cancel(drop), Some("drop"));
        assert_eq!(q.cancel(drop), None);
        assert!(q.is_pending(keep));
        assert!(!q.is_pending(drop));
        assert_eq!(q.pop_due(10), vec!["keep"]);
        assert_eq!(q.cancel(keep), None);
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        q.schedule_at(1, ());
        q.schedule_at(2, ());
        assert_eq!(q.len(), 2);

        q.clear();

        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
    }
}
