//! Core training engine — chart resolution, shoe handling, and the drills.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: ranks, actions, variants, guesses, records |
//! | `evaluator` | Rank normalization, hand totals, Hi-Lo values, true count |
//! | `strategy`  | Ordered basic-strategy tables and `resolve_action()` |
//! | `generator` | Random ranks and natural-free strategy scenarios |
//! | `deck`      | Multi-deck shoe with Fisher-Yates shuffle and a dealing cursor |
//! | `stats`     | Attempts/corrects/streak and the capped history log |
//! | `scheduler` | Cancellable one-shot and periodic tasks on a host-driven clock |
//! | `sessions`  | Strategy session, counting session, timed drill |
//! | `config`    | `TrainerConfig` defaults, JSON loading, validation |
//! | `error`     | `TrainerError` for config and label parsing |

pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod sessions;
pub mod stats;
pub mod strategy;

// Re-export the public API surface so callers can use
// `training_engine::resolve_action` without reaching into sub-modules.
pub use config::TrainerConfig;
pub use deck::Shoe;
pub use error::TrainerError;
pub use evaluator::{card_value, evaluate_hand, hi_lo_value, normalize_rank, true_count};
pub use generator::{generate_scenario, random_rank};
pub use models::{
    Action, CountGuess, CountRecord, CountResult, DrillSummary, ErrorTally, Feedback,
    HandValue, Rank, Scenario, StrategyRecord, Variant,
};
pub use sessions::{CountingSession, StrategyPhase, StrategySession, TimedDrill};
pub use stats::{History, SessionStats};
pub use strategy::{resolve, resolve_action, Resolution, Tier};
