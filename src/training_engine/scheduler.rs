//! Cancellable scheduled work over a clock the host drives.
//!
//! Each logical session owns one [`Schedule`] slot. Scheduling again or
//! cancelling retires the previous [`TaskHandle`], so a stale callback can
//! never fire against newer state.

use std::time::Duration;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TaskHandle,
    due: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    issued: u64,
    pending: Option<Pending>,
}

impl Schedule {
    fn issue(&mut self, due: Duration, period: Option<Duration>) -> TaskHandle {
        self.issued += 1;
        let handle = TaskHandle(self.issued);
        self.pending = Some(Pending { handle, due, period });
        handle
    }

    /// Fire once, `delay` after `now`.
    pub fn once(&mut self, now: Duration, delay: Duration) -> TaskHandle {
        self.issue(now + delay, None)
    }

    /// Fire every `period` starting one period after `now`.
    pub fn every(&mut self, now: Duration, period: Duration) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        self.issue(now + period, Some(period))
    }

    pub fn cancel(&mut self) -> Option<TaskHandle> {
        self.pending.take().map(|p| p.handle)
    }

    pub fn pending(&self) -> Option<TaskHandle> {
        self.pending.map(|p| p.handle)
    }

    /// Take one firing that is due at or before `now`.
    ///
    /// One-shot tasks are retired; periodic tasks move to their next slot.
    /// Call in a loop to drain every firing covered by a long `now` jump.
    pub fn poll(&mut self, now: Duration) -> Option<TaskHandle> {
        let pending = self.pending?;
        if pending.due > now {
            return None;
        }
        self.pending = pending.period.map(|period| Pending {
            due: pending.due + period,
            ..pending
        });
        Some(pending.handle)
    }
}
