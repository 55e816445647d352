//! Drill state machines.
//!
//! Each session is a plain state object: the host keeps it, calls its
//! operations, and drives time through `advance(elapsed)`.

/// Strategy quiz: AwaitingAnswer -> Feedback -> AwaitingAnswer.
pub mod strategy;
/// Hi-Lo drill: NoCard -> CardShown -> CardShown, reshuffling on exhaustion.
pub mod counting;
/// One-second countdown over counting stats.
pub mod timed;

pub use counting::CountingSession;
pub use strategy::{StrategyPhase, StrategySession};
pub use timed::TimedDrill;
