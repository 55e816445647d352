use std::time::{Duration, SystemTime, UNIX_EPOCH};
use rand::rngs::StdRng;
use serde::Serialize;

use crate::training_engine::{
    config::TrainerConfig,
    evaluator::evaluate_hand,
    generator::{generate_scenario, make_rng},
    models::{Action, Feedback, HandValue, Scenario, StrategyRecord, Variant},
    scheduler::{Schedule, TaskHandle},
    stats::{History, SessionStats},
    strategy::resolve_action,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrategyPhase {
    AwaitingAnswer,
    Feedback(Feedback),
}

/// Basic-strategy quiz: one hand at a time, answer, feedback, next hand.
///
/// A correct answer schedules an automatic move to a new hand after the
/// configured delay; a miss waits for [`StrategySession::next_scenario`].
#[derive(Debug)]
pub struct StrategySession {
    rng: StdRng,
    variant: Variant,
    scenario: Scenario,
    phase: StrategyPhase,
    stats: SessionStats,
    history: History<StrategyRecord>,
    clock: Duration,
    auto_advance_delay: Duration,
    auto_advance: Schedule,
}

impl StrategySession {
    pub fn new(config: &TrainerConfig) -> Self {
        let mut rng = make_rng(config.rng_seed);
        let scenario = generate_scenario(&mut rng);
        StrategySession {
            rng,
            variant: config.variant,
            scenario,
            phase: StrategyPhase::AwaitingAnswer,
            stats: SessionStats::default(),
            history: History::with_cap(config.history_cap),
            clock: Duration::ZERO,
            auto_advance_delay: config.auto_advance(),
            auto_advance: Schedule::default(),
        }
    }

    pub fn current_scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn hand(&self) -> HandValue {
        evaluate_hand(&self.scenario.player)
    }

    /// Chart answer for the current hand under the current variant.
    pub fn correct_action(&self) -> Action {
        resolve_action(&self.hand(), self.scenario.upcard, self.variant)
    }

    /// Judge `chosen` against the chart.
    ///
    /// Returns `None` and changes nothing when the current hand has already
    /// been answered.
    pub fn answer(&mut self, chosen: Action) -> Option<Feedback> {
        if self.phase != StrategyPhase::AwaitingAnswer {
            log::warn!("ignoring {} while feedback is showing", chosen);
            return None;
        }

        let hand = self.hand();
        let correct = resolve_action(&hand, self.scenario.upcard, self.variant);
        let is_correct = chosen == correct;

        self.stats.record(is_correct);
        self.history.push(StrategyRecord {
            timestamp_ms: now_ms(),
            variant: self.variant,
            player: self.scenario.player,
            upcard: self.scenario.upcard,
            hand,
            chosen,
            correct,
        });

        let feedback = Feedback { chosen, correct, is_correct };
        self.phase = StrategyPhase::Feedback(feedback);

        if is_correct {
            self.auto_advance.once(self.clock, self.auto_advance_delay);
        } else {
            self.auto_advance.cancel();
        }
        Some(feedback)
    }

    /// Deal a new hand now, dropping any pending automatic advance.
    pub fn next_scenario(&mut self) {
        self.auto_advance.cancel();
        self.deal();
    }

    fn deal(&mut self) {
        self.scenario = generate_scenario(&mut self.rng);
        self.phase = StrategyPhase::AwaitingAnswer;
    }

    /// Move the session clock forward; returns true if a new hand was dealt.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.clock += elapsed;
        if self.auto_advance.poll(self.clock).is_some() {
            self.deal();
            return true;
        }
        false
    }

    /// Affects future resolutions only; score and history are kept.
    pub fn set_variant(&mut self, variant: Variant) {
        if variant == self.variant {
            return;
        }
        log::info!("strategy variant {} -> {}", self.variant, variant);
        self.variant = variant;
    }

    /// Clear score, history and feedback. The hand on the table stays.
    pub fn reset_session(&mut self) {
        log::info!("strategy session reset after {} attempts", self.stats.attempts);
        self.auto_advance.cancel();
        self.stats = SessionStats::default();
        self.history.clear();
        self.phase = StrategyPhase::AwaitingAnswer;
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn phase(&self) -> StrategyPhase {
        self.phase
    }

    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            StrategyPhase::Feedback(feedback) => Some(feedback),
            StrategyPhase::AwaitingAnswer => None,
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn history(&self) -> &History<StrategyRecord> {
        &self.history
    }

    pub fn pending_advance(&self) -> Option<TaskHandle> {
        self.auto_advance.pending()
    }

    #[cfg(test)]
    pub(crate) fn force_scenario(
        &mut self,
        player: [crate::training_engine::models::Rank; 2],
        upcard: crate::training_engine::models::Rank,
    ) {
        self.scenario = Scenario { player, upcard: upcard.normalize() };
        self.phase = StrategyPhase::AwaitingAnswer;
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
