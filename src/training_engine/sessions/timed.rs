use std::time::Duration;

use crate::training_engine::{
    models::DrillSummary,
    scheduler::Schedule,
    stats::SessionStats,
};

const TICK: Duration = Duration::from_secs(1);

/// Countdown that observes counting stats and freezes a summary at zero.
///
/// It never gates input and never resets the stats it reads.
#[derive(Debug, Clone, Default)]
pub struct TimedDrill {
    active: bool,
    seconds_remaining: u32,
    summary: Option<DrillSummary>,
    clock: Duration,
    ticker: Schedule,
}

impl TimedDrill {
    /// Arm a new countdown, replacing any drill already running.
    pub fn start(&mut self, duration_seconds: u32) {
        if duration_seconds == 0 {
            log::warn!("ignoring zero-length timed drill");
            return;
        }
        log::info!("timed drill started: {}s", duration_seconds);
        self.seconds_remaining = duration_seconds;
        self.summary = None;
        self.active = true;
        self.ticker.every(self.clock, TICK);
    }

    /// Stop the countdown without producing a summary.
    pub fn cancel(&mut self) {
        if self.ticker.cancel().is_some() {
            log::info!("timed drill cancelled with {}s left", self.seconds_remaining);
        }
        self.active = false;
        self.seconds_remaining = 0;
    }

    /// Move the drill clock forward, applying every one-second tick that
    /// elapsed. Returns the summary if the drill finished during this call.
    pub fn advance(&mut self, elapsed: Duration, stats: &SessionStats) -> Option<DrillSummary> {
        self.clock += elapsed;
        while self.ticker.poll(self.clock).is_some() {
            self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
            if self.seconds_remaining == 0 {
                return Some(self.finish(stats));
            }
        }
        None
    }

    fn finish(&mut self, stats: &SessionStats) -> DrillSummary {
        self.ticker.cancel();
        self.active = false;
        let summary = DrillSummary {
            attempts: stats.attempts,
            corrects: stats.corrects,
            accuracy: stats.accuracy(),
        };
        log::info!(
            "timed drill finished: {}/{} correct ({}%)",
            summary.corrects,
            summary.attempts,
            summary.accuracy
        );
        self.summary = Some(summary);
        summary
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn summary(&self) -> Option<DrillSummary> {
        self.summary
    }
}
