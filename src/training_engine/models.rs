use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// A card rank. Suits are never modelled; only rank multiplicity matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// The 13-rank alphabet in shoe-building order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five,
        Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten,
        Rank::Jack, Rank::Queen, Rank::King,
    ];

    /// Every normalized upcard, in chart column order (2..10, A).
    pub const UPCARDS: [Rank; 10] = [
        Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six,
        Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Ace,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace   => "A",
            Rank::Two   => "2",
            Rank::Three => "3",
            Rank::Four  => "4",
            Rank::Five  => "5",
            Rank::Six   => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine  => "9",
            Rank::Ten   => "10",
            Rank::Jack  => "J",
            Rank::Queen => "Q",
            Rank::King  => "K",
        }
    }

    /// J, Q and K collapse to 10; every other rank is unchanged.
    pub fn normalize(self) -> Rank {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => Rank::Ten,
            other => other,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.symbol().eq_ignore_ascii_case(trimmed))
            .or_else(|| match trimmed {
                "T" | "t" => Some(Rank::Ten),
                _ => None,
            })
            .ok_or_else(|| TrainerError::UnknownRank(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Strategy primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Hit, Action::Stand, Action::Double, Action::Split];

    /// Single-letter chart key (`H`, `S`, `D`, `P`).
    pub fn key(self) -> &'static str {
        match self {
            Action::Hit    => "H",
            Action::Stand  => "S",
            Action::Double => "D",
            Action::Split  => "P",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Hit    => "Hit",
            Action::Stand  => "Stand",
            Action::Double => "Double",
            Action::Split  => "Split",
        };
        f.pad(s)
    }
}

impl FromStr for Action {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.key().eq_ignore_ascii_case(trimmed) || a.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TrainerError::UnknownAction(s.to_string()))
    }
}

/// House-rule variant the strategy chart is resolved under.
///
/// Both variants assume S17, double after split, no surrender. `TwoDeck`
/// layers the double-down tweaks on top of the six-deck baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "2-deck", alias = "2D")]
    TwoDeck,
    #[default]
    #[serde(rename = "6-deck", alias = "6D")]
    SixDeck,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::TwoDeck => "2-deck",
            Variant::SixDeck => "6-deck",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Variant {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2-deck" | "2d" => Ok(Variant::TwoDeck),
            "6-deck" | "6d" => Ok(Variant::SixDeck),
            _ => Err(TrainerError::UnknownVariant(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Hand evaluation
// ---------------------------------------------------------------------------

/// Derived view of a hand; never stored independently of its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    pub total: u8,
    pub soft: bool,
    /// Normalized rank of a two-card pair (any two ten-valued cards pair as 10).
    pub pair_rank: Option<Rank>,
}

impl HandValue {
    pub fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// "Soft 18" / "Hard 16".
    pub fn describe(&self) -> String {
        if self.soft {
            format!("Soft {}", self.total)
        } else {
            format!("Hard {}", self.total)
        }
    }
}

/// A two-card player hand against a dealer upcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub player: [Rank; 2],
    /// Always normalized.
    pub upcard: Rank,
}

// ---------------------------------------------------------------------------
// Counting primitives
// ---------------------------------------------------------------------------

/// One of the three Hi-Lo answers a player can give for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountGuess {
    #[serde(rename = "+1")]
    Plus,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "-1")]
    Minus,
}

impl CountGuess {
    pub const ALL: [CountGuess; 3] = [CountGuess::Plus, CountGuess::Zero, CountGuess::Minus];

    pub fn label(self) -> &'static str {
        match self {
            CountGuess::Plus  => "+1",
            CountGuess::Zero  => "0",
            CountGuess::Minus => "-1",
        }
    }

    /// Sign label of a Hi-Lo increment.
    pub fn from_delta(delta: i32) -> CountGuess {
        match delta.signum() {
            1 => CountGuess::Plus,
            -1 => CountGuess::Minus,
            _ => CountGuess::Zero,
        }
    }
}

impl fmt::Display for CountGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for CountGuess {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+1" | "+" | "1" => Ok(CountGuess::Plus),
            "0"              => Ok(CountGuess::Zero),
            "-1" | "-"       => Ok(CountGuess::Minus),
            _ => Err(TrainerError::UnknownGuess(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Session records
// ---------------------------------------------------------------------------

/// Outcome of a single strategy answer, shown while the session is in feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub chosen: Action,
    pub correct: Action,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecord {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    pub variant: Variant,
    pub player: [Rank; 2],
    pub upcard: Rank,
    pub hand: HandValue,
    pub chosen: Action,
    pub correct: Action,
}

/// Outcome of judging one counting card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub card: Rank,
    pub guess: CountGuess,
    pub correct: CountGuess,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub card: Rank,
    pub guess: CountGuess,
    pub correct: CountGuess,
    pub running_count: i32,
    pub true_count: i32,
}

/// Misses keyed by the label the player guessed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTally {
    #[serde(rename = "+1")]
    pub plus: u32,
    #[serde(rename = "0")]
    pub zero: u32,
    #[serde(rename = "-1")]
    pub minus: u32,
}

impl ErrorTally {
    pub fn get(&self, guess: CountGuess) -> u32 {
        match guess {
            CountGuess::Plus  => self.plus,
            CountGuess::Zero  => self.zero,
            CountGuess::Minus => self.minus,
        }
    }

    pub fn record(&mut self, guess: CountGuess) {
        match guess {
            CountGuess::Plus  => self.plus += 1,
            CountGuess::Zero  => self.zero += 1,
            CountGuess::Minus => self.minus += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.plus + self.zero + self.minus
    }
}

/// Frozen snapshot taken when a timed drill expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSummary {
    pub attempts: u32,
    pub corrects: u32,
    /// Rounded to the nearest whole percent.
    pub accuracy: u32,
}
