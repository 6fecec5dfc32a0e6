use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

/// Opaque identifier for a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// "Run this after N elapsed time." Fired handles are routed back to their
/// owner by whoever drives the scheduler.
pub trait Scheduler {
    fn after(&mut self, delay: Duration) -> TimerHandle;

    /// Returns false if the timer already fired or was never scheduled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Single-threaded deadline queue driven by the UI loop.
///
/// The queue keeps its own notion of "now", moved forward by [`advance`].
/// Delays passed to [`Scheduler::after`] are measured from that instant, so
/// callers must advance the queue before dispatching the event that
/// schedules work.
///
/// [`advance`]: TimerQueue::advance
#[derive(Debug)]
pub struct TimerQueue {
    now: Instant,
    next_id: u64,
    // (deadline, id) keeps ties in scheduling order
    pending: BTreeSet<(Instant, u64)>,
    deadlines: HashMap<u64, Instant>,
}

impl TimerQueue {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 0,
            pending: BTreeSet::new(),
            deadlines: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the clock to `now` and return every timer that is due, earliest
    /// deadline first. The clock never moves backwards.
    pub fn advance(&mut self, now: Instant) -> Vec<TimerHandle> {
        if now > self.now {
            self.now = now;
        }

        let mut fired = Vec::new();
        while let Some(&(deadline, id)) = self.pending.first() {
            if deadline > self.now {
                break;
            }
            self.pending.pop_first();
            self.deadlines.remove(&id);
            fired.push(TimerHandle(id));
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn after(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = self.now + delay;
        self.pending.insert((deadline, id));
        self.deadlines.insert(id, deadline);
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => {
                self.pending.remove(&(deadline, handle.0));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timer_fires_after_delay() {
        let start = Instant::now();
        let mut queue = TimerQueue::new(start);
        let handle = queue.after(ms(2000));

        assert!(queue.advance(start + ms(1999)).is_empty());
        assert_eq!(queue.advance(start + ms(2000)), vec![handle]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_timer_fires_only_once() {
        let start = Instant::now();
        let mut queue = TimerQueue::new(start);
        queue.after(ms(10));

        assert_eq!(queue.advance(start + ms(20)).len(), 1);
        assert!(queue.advance(start + ms(30)).is_empty());
    }

    #[test]
    fn test_fires_in_scheduling_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::new(start);
        let first = queue.after(ms(100));
        let second = queue.after(ms(100));
        queue.advance(start + ms(50));
        let third = queue.after(ms(100));

        assert_eq!(queue.advance(start + ms(500)), vec![first, second, third]);
    }

    #[test]
    fn test_delay_measured_from_queue_now() {
        let start = Instant::now();
        let mut queue = TimerQueue::new(start);
        queue.advance(start + ms(500));
        let handle = queue.after(ms(2000));

        assert_eq!(queue.next_deadline(), Some(start + ms(2500)));
        assert!(queue.advance(start + ms(2400)).is_empty());
        assert_eq!(queue.advance(start + ms(2500)), vec![handle]);
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut queue = TimerQueue::new(start);
        let cancelled = queue.after(ms(100));
        let kept = queue.after(ms(200));

        assert!(queue.cancel(cancelled));
        assert!(!queue.cancel(cancelled));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.advance(start + ms(300)), vec![kept]);
        assert!(!queue.cancel(kept));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let start = Instant::now();
        let mut queue = TimerQueue::new(start + ms(100));
        queue.advance(start);

        assert_eq!(queue.now(), start + ms(100));
    }
}
