//! Deferred callbacks: the [`Scheduler`] seam and a virtual-clock [`TimerQueue`].
//!
//! Scheduling never runs the callback inline; control returns to the caller
//! right away. The queue fires callbacks when its clock is advanced past their
//! deadline, earliest deadline first and in scheduling order on ties.

use std::fmt;
use std::time::Duration;

/// A deferred unit of work.
pub type Callback = Box<dyn FnOnce()>;

/// Something that can run a callback after a delay.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, callback: Callback);
}

struct Timer {
    deadline: Duration,
    seq: u64,
    callback: Callback,
}

/// Virtual-clock timer queue.
#[derive(Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl TimerQueue {
    /// An empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of callbacks waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Delay until the earliest pending callback, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.deadline.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward by `elapsed` and fire everything that came due.
    ///
    /// Returns the number of callbacks fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.now.saturating_add(elapsed);
        let mut fired = 0;
        while let Some(index) = self.earliest_due(target) {
            let timer = self.timers.remove(index);
            self.now = self.now.max(timer.deadline);
            (timer.callback)();
            fired += 1;
        }
        self.now = target;
        fired
    }

    /// Fire everything, advancing the clock as far as needed.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(delay) = self.next_deadline() {
            fired += self.advance(delay);
        }
        fired
    }

    fn earliest_due(&self, target: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= target)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(index, _)| index)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, callback: Callback) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            deadline: self.now.saturating_add(delay),
            seq,
            callback,
        });
    }
}

impl fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("pending", &self.timers.len())
            .finish()
    }
}
