//! Cooperative, single-threaded timer queue on a virtual millisecond clock.
//!
//! The host drives time forward; every due timer is handed back one at a time
//! so its callback runs to completion before the next one is looked at.
//! Timers due at the same instant fire in the order they were scheduled.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<T> {
    payload: T,
    period_ms: Option<u64>,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    next_seq: u64,
    timers: HashMap<TimerId, Timer<T>>,
    // (due, scheduling order, id). Entries of cleared timers are skipped lazily.
    queue: BinaryHeap<Reverse<(u64, u64, TimerId)>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            next_seq: 0,
            timers: HashMap::new(),
            queue: BinaryHeap::new(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fires every `period_ms` (at least 1 ms) until cleared.
    pub fn set_interval(&mut self, period_ms: u64, payload: T) -> TimerId {
        let period_ms = period_ms.max(1);
        self.insert(period_ms, Some(period_ms), payload)
    }

    /// Fires once after `delay_ms`.
    pub fn set_timeout(&mut self, delay_ms: u64, payload: T) -> TimerId {
        self.insert(delay_ms, None, payload)
    }

    /// Cancels a timer. Returns `false` if it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancels every timer whose payload does not satisfy `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.timers.retain(|_, timer| keep(&timer.payload));
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Due time of the next live timer.
    pub fn next_due(&mut self) -> Option<u64> {
        self.drop_stale();
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Pops the next timer due at or before `until_ms` and moves the clock to
    /// its due time. Intervals are rescheduled before they are returned.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, T)> {
        self.drop_stale();
        let Reverse((due, _, id)) = *self.queue.peek()?;
        if due > until_ms {
            return None;
        }
        self.queue.pop();
        self.now_ms = self.now_ms.max(due);

        let timer = self.timers.get(&id)?;
        match timer.period_ms {
            Some(period) => {
                let payload = timer.payload.clone();
                let seq = self.bump_seq();
                self.queue.push(Reverse((due + period, seq, id)));
                Some((id, payload))
            }
            None => self.timers.remove(&id).map(|timer| (id, timer.payload)),
        }
    }

    /// Moves the clock forward without firing anything.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn insert(&mut self, delay_ms: u64, period_ms: Option<u64>, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.insert(id, Timer { payload, period_ms });
        self.queue.push(Reverse((self.now_ms + delay_ms, seq, id)));
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn drop_stale(&mut self) {
        while let Some(Reverse((_, _, id))) = self.queue.peek() {
            if self.timers.contains_key(id) {
                break;
            }
            self.queue.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler<&'static str>, until: u64) -> Vec<(u64, &'static str)> {
        let mut fired = Vec::new();
        while let Some((_, payload)) = s.pop_due(until) {
            fired.push((s.now_ms(), payload));
        }
        s.advance_to(until);
        fired
    }

    #[test]
    fn interval_fires_periodically() {
        let mut s = Scheduler::new();
        s.set_interval(3, "tick");
        let fired = drain(&mut s, 10);
        assert_eq!(fired, vec![(3, "tick"), (6, "tick"), (9, "tick")]);
        assert_eq!(s.now_ms(), 10);
    }

    #[test]
    fn timeout_fires_once_and_is_released() {
        let mut s = Scheduler::new();
        let id = s.set_timeout(5, "once");
        assert!(s.is_active(id));
        assert_eq!(drain(&mut s, 100), vec![(5, "once")]);
        assert!(!s.is_active(id));
        assert_eq!(s.active_timers(), 0);
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut s = Scheduler::new();
        let id = s.set_interval(2, "tick");
        assert!(s.clear(id));
        assert!(!s.clear(id));
        assert!(drain(&mut s, 50).is_empty());
        assert_eq!(s.next_due(), None);
    }

    #[test]
    fn same_instant_keeps_scheduling_order() {
        let mut s = Scheduler::new();
        s.set_timeout(4, "first");
        s.set_interval(2, "tick");
        s.set_timeout(4, "second");
        let fired = drain(&mut s, 4);
        assert_eq!(fired, vec![(2, "tick"), (4, "first"), (4, "second"), (4, "tick")]);
    }

    #[test]
    fn retain_cancels_matching_timers() {
        let mut s = Scheduler::new();
        s.set_interval(1, "a");
        s.set_interval(1, "b");
        s.retain(|p| *p != "a");
        assert_eq!(s.active_timers(), 1);
        assert_eq!(drain(&mut s, 2), vec![(1, "b"), (2, "b")]);
    }
}
