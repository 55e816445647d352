//! Score keeping shared by both drills.

use std::collections::VecDeque;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_CAP: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub attempts: u32,
    pub corrects: u32,
    pub streak: u32,
}

impl SessionStats {
    pub fn record(&mut self, is_correct: bool) {
        self.attempts += 1;
        if is_correct {
            self.corrects += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }

    /// Whole-percent accuracy, 0 before the first attempt.
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        (100.0 * self.corrects as f64 / self.attempts as f64).round() as u32
    }
}

/// Most-recent-first log that drops its oldest entry past `cap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History<T> {
    entries: VecDeque<T>,
    cap: usize,
}

impl<T> History<T> {
    pub fn with_cap(cap: usize) -> Self {
        let cap = cap.max(1);
        History { entries: VecDeque::with_capacity(cap.min(DEFAULT_HISTORY_CAP)), cap }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }
}
