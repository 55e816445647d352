use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::training_engine::{error::TrainerError, models::Variant};

pub const MAX_DECKS: u8 = 8;

/// Tunables shared by both drills.
///
/// Every field is optional in JSON; missing fields take the defaults below.
///
/// ```rust
/// use blackjack_drill::{TrainerConfig, Variant};
///
/// let config = TrainerConfig::from_json(r#"{ "variant": "2-deck", "deck_count": 2 }"#).unwrap();
/// assert_eq!(config.variant, Variant::TwoDeck);
/// assert_eq!(config.drill_seconds, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub variant: Variant,
    /// Decks in the counting shoe.
    pub deck_count: u8,
    pub drill_seconds: u32,
    /// Delay before a correctly answered strategy hand is replaced.
    pub auto_advance_ms: u64,
    pub history_cap: usize,
    /// `Some` makes every shuffle and deal reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::SixDeck,
            deck_count: 6,
            drill_seconds: 60,
            auto_advance_ms: 1200,
            history_cap: 200,
            rng_seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { rng_seed: Some(seed), ..Self::default() }
    }

    pub fn from_json(text: &str) -> Result<Self, TrainerError> {
        let config: TrainerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TrainerError> {
        if self.deck_count == 0 || self.deck_count > MAX_DECKS {
            return Err(TrainerError::InvalidDeckCount(self.deck_count));
        }
        if self.drill_seconds == 0 {
            return Err(TrainerError::InvalidDrillDuration);
        }
        if self.history_cap == 0 {
            return Err(TrainerError::InvalidHistoryCap);
        }
        Ok(())
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}
