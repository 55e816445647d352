//! # blackjack_drill
//!
//! The rules engine behind a blackjack skills trainer: a basic-strategy
//! decision quiz and a Hi-Lo card-counting drill.
//!
//! Everything here is presentation-free. A UI keeps the session objects,
//! forwards player input to them, drives time with `advance(elapsed)`, and
//! renders what they expose (directly, or through the JSON snapshots in
//! [`view`]).
//!
//! ## How it works
//!
//! 1. Build a [`TrainerConfig`] (or load one with [`TrainerConfig::from_json`]).
//! 2. **Strategy drill** — [`StrategySession`] deals a two-card hand against a
//!    dealer upcard (never a natural). [`StrategySession::answer`] checks the
//!    choice with [`resolve_action`], which walks the chart in fixed order:
//!    pairs, then soft totals, then hard totals with the two-deck tweaks on
//!    top. A correct answer moves on by itself after a short delay.
//! 3. **Counting drill** — [`CountingSession`] deals from a shuffled
//!    multi-deck [`Shoe`]. Each [`CountingSession::submit`] judges the Hi-Lo
//!    guess for the card on show, updates the running and true count, and
//!    deals the next card. A spent shoe is replaced and the count restarts.
//!    A timed drill can run on top and freezes a summary when it expires.
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed: Some(u64)` to replay the same hands and
//!   the same shoe order every time.
//! - **Total operations**: drill calls never fail. Bad input is ignored and an
//!   empty shoe reshuffles.
//! - **Explicit timers**: delayed work lives in cancellable handles, so a stale
//!   tick can never touch a session that has moved on.
//!
//! ## Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use blackjack_drill::{
//!     evaluate_hand, resolve_action, Action, CountGuess, CountingSession, Rank,
//!     StrategySession, TrainerConfig, Variant,
//! };
//!
//! // The chart on its own:
//! let hand = evaluate_hand(&[Rank::Ace, Rank::Ace]);
//! assert_eq!(resolve_action(&hand, Rank::Six, Variant::SixDeck), Action::Split);
//!
//! // Strategy drill with a fixed seed:
//! let config = TrainerConfig::seeded(42);
//! let mut strategy = StrategySession::new(&config);
//! let feedback = strategy.answer(strategy.correct_action()).unwrap();
//! assert!(feedback.is_correct);
//! strategy.advance(Duration::from_millis(1200)); // next hand dealt
//!
//! // Counting drill:
//! let mut counting = CountingSession::new(&config);
//! counting.start_timed_drill(60);
//! counting.deal_next();
//! let result = counting.submit(CountGuess::Plus).unwrap();
//! println!("{} was {}", result.card, result.correct);
//! println!("running count {}", counting.running_count());
//! ```

pub mod training_engine;
pub mod view;

// Convenience re-exports so callers can use `blackjack_drill::resolve_action`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    card_value, evaluate_hand, generate_scenario, hi_lo_value, normalize_rank, random_rank,
    resolve, resolve_action, true_count, Action, CountGuess, CountRecord, CountResult,
    CountingSession, DrillSummary, ErrorTally, Feedback, HandValue, History, Rank, Resolution,
    Scenario, SessionStats, Shoe, StrategyPhase, StrategyRecord, StrategySession, Tier,
    TimedDrill, TrainerConfig, TrainerError, Variant,
};
pub use view::{counting_view, strategy_view};

#[cfg(test)]
mod tests;
