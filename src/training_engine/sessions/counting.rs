use std::time::Duration;
use rand::rngs::StdRng;

use crate::training_engine::{
    config::{TrainerConfig, MAX_DECKS},
    deck::Shoe,
    evaluator::{hi_lo_value, true_count},
    generator::make_rng,
    models::{CountGuess, CountRecord, CountResult, DrillSummary, ErrorTally, Rank},
    sessions::timed::TimedDrill,
    stats::{History, SessionStats},
};

/// Everything tied to one physical shoe. Replaced in a single assignment so
/// a reshuffle is never half applied.
#[derive(Debug, Clone)]
struct ShoeState {
    shoe: Shoe,
    running_count: i32,
    true_count: i32,
    current: Option<Rank>,
}

impl ShoeState {
    fn fresh(deck_count: u8, rng: &mut StdRng) -> Self {
        ShoeState {
            shoe: Shoe::new_shuffled(deck_count, rng),
            running_count: 0,
            true_count: 0,
            current: None,
        }
    }
}

/// Hi-Lo drill: reveal a card, guess its increment, keep the count.
///
/// Each [`CountingSession::submit`] judges the card on show and deals the
/// next one in the same step.
#[derive(Debug)]
pub struct CountingSession {
    rng: StdRng,
    deck_count: u8,
    state: ShoeState,
    stats: SessionStats,
    history: History<CountRecord>,
    errors: ErrorTally,
    last_result: Option<CountResult>,
    drill_seconds: u32,
    drill: TimedDrill,
}

impl CountingSession {
    pub fn new(config: &TrainerConfig) -> Self {
        let mut rng = make_rng(config.rng_seed);
        let deck_count = config.deck_count.clamp(1, MAX_DECKS);
        if deck_count != config.deck_count {
            log::warn!("deck count {} out of range; using {}", config.deck_count, deck_count);
        }
        let state = ShoeState::fresh(deck_count, &mut rng);
        CountingSession {
            rng,
            deck_count,
            state,
            stats: SessionStats::default(),
            history: History::with_cap(config.history_cap),
            errors: ErrorTally::default(),
            last_result: None,
            drill_seconds: config.drill_seconds,
            drill: TimedDrill::default(),
        }
    }

    /// Draw the next card, or swap in a fresh shoe if this one is spent.
    fn draw_or_reshuffle(&mut self) -> Option<Rank> {
        if self.state.shoe.is_exhausted() {
            log::info!("{}-deck shoe exhausted; reshuffling", self.deck_count);
            self.state = ShoeState::fresh(self.deck_count, &mut self.rng);
            return None;
        }
        self.state.current = self.state.shoe.draw();
        self.state.current
    }

    /// Show the next card. After an exhausted shoe is replaced no card is
    /// shown; the caller deals again to continue.
    pub fn deal_next(&mut self) -> Option<Rank> {
        self.draw_or_reshuffle()
    }

    /// Judge `guess` against the card on show, update the count and deal the
    /// next card. Does nothing when no card is showing.
    pub fn submit(&mut self, guess: CountGuess) -> Option<CountResult> {
        let card = self.state.current?;

        let delta = hi_lo_value(card);
        let correct = CountGuess::from_delta(delta);
        let is_correct = guess == correct;

        self.stats.record(is_correct);
        if !is_correct {
            self.errors.record(guess);
        }

        self.state.running_count += delta;
        self.state.true_count = true_count(self.state.running_count, self.state.shoe.remaining_decks());

        self.history.push(CountRecord {
            card,
            guess,
            correct,
            running_count: self.state.running_count,
            true_count: self.state.true_count,
        });

        let result = CountResult { card, guess, correct, is_correct };
        self.last_result = Some(result);

        self.draw_or_reshuffle();
        Some(result)
    }

    /// A different deck count starts over from scratch; the same one is a no-op.
    pub fn set_deck_count(&mut self, deck_count: u8) {
        if deck_count == self.deck_count {
            return;
        }
        if deck_count == 0 || deck_count > MAX_DECKS {
            log::warn!("ignoring deck count {}", deck_count);
            return;
        }
        log::info!("counting deck count {} -> {}", self.deck_count, deck_count);
        self.deck_count = deck_count;
        self.reset_session();
    }

    /// Fresh shoe with zeroed counts, score, history and error tally.
    pub fn reset_session(&mut self) {
        log::info!("counting session reset ({} decks)", self.deck_count);
        self.state = ShoeState::fresh(self.deck_count, &mut self.rng);
        self.stats = SessionStats::default();
        self.history.clear();
        self.errors = ErrorTally::default();
        self.last_result = None;
    }

    pub fn start_timed_drill(&mut self, duration_seconds: u32) {
        self.drill.start(duration_seconds);
    }

    /// Start a timed drill of the configured length.
    pub fn start_default_timed_drill(&mut self) {
        self.drill.start(self.drill_seconds);
    }

    /// Move the drill clock forward. Returns the summary if the drill ended.
    pub fn advance(&mut self, elapsed: Duration) -> Option<DrillSummary> {
        self.drill.advance(elapsed, &self.stats)
    }

    pub fn current_card(&self) -> Option<Rank> {
        self.state.current
    }

    pub fn running_count(&self) -> i32 {
        self.state.running_count
    }

    pub fn true_count(&self) -> i32 {
        self.state.true_count
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn history(&self) -> &History<CountRecord> {
        &self.history
    }

    pub fn error_tally(&self) -> &ErrorTally {
        &self.errors
    }

    pub fn last_result(&self) -> Option<CountResult> {
        self.last_result
    }

    pub fn shoe(&self) -> &Shoe {
        &self.state.shoe
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    pub fn timed_drill(&self) -> &TimedDrill {
        &self.drill
    }
}
