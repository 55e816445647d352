use thiserror::Error;

/// Failures at the edges of the trainer: configuration and label parsing.
///
/// Drill operations themselves never fail; bad inputs there are no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainerError {
    #[error("deck count must be between 1 and 8 (got {0})")]
    InvalidDeckCount(u8),
    #[error("timed drill must last at least one second")]
    InvalidDrillDuration,
    #[error("history cap must be at least 1")]
    InvalidHistoryCap,
    #[error("unknown rank: {0}")]
    UnknownRank(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
    #[error("unknown count guess: {0}")]
    UnknownGuess(String),
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TrainerError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
