//! Basic-strategy chart for S17, double after split, no surrender.
//!
//! The chart is four ordered tables of [`Rule`] records. Lookups walk the
//! tiers in a fixed order and take the first matching rule inside a tier:
//!
//! 1. pairs
//! 2. soft totals 13-20
//! 3. two-deck tweaks (only under [`Variant::TwoDeck`]), then hard totals
//!
//! A pair decision pre-empts the total it also forms, so A,A reaches the
//! pair table and splits instead of being read as soft 12. A pair whose row
//! does not list the upcard falls through to the later tiers on its total.

use serde::Serialize;

use crate::training_engine::models::{Action, HandValue, Rank, Variant};

use crate::training_engine::models::Action::{Double as D, Hit as H, Split as P, Stand as S};
use crate::training_engine::models::Rank::{Ace, Eight, Five, Four, Nine, Seven, Six, Ten, Three, Two};

/// What a rule matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Pair(Rank),
    Soft(u8),
    Hard(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub condition: Condition,
    pub upcards: &'static [Rank],
    pub action: Action,
}

impl Rule {
    const fn new(condition: Condition, upcards: &'static [Rank], action: Action) -> Self {
        Rule { condition, upcards, action }
    }

    fn covers(&self, upcard: Rank) -> bool {
        self.upcards.contains(&upcard)
    }
}

/// Which tier of the chart produced an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Pair,
    Soft,
    VariantTweak,
    Hard,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub action: Action,
    pub tier: Tier,
}

// ---------------------------------------------------------------------------
// Upcard sets
// ---------------------------------------------------------------------------

const ALL: &[Rank] = &Rank::UPCARDS;
const TWO_TO_SIX: &[Rank] = &[Two, Three, Four, Five, Six];
const TWO_TO_SEVEN: &[Rank] = &[Two, Three, Four, Five, Six, Seven];
const TWO_TO_NINE: &[Rank] = &[Two, Three, Four, Five, Six, Seven, Eight, Nine];
const TWO_TO_TEN: &[Rank] = &[Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten];
const THREE_TO_SIX: &[Rank] = &[Three, Four, Five, Six];
const FOUR_TO_SIX: &[Rank] = &[Four, Five, Six];
const FIVE_SIX: &[Rank] = &[Five, Six];
const SEVEN_TO_ACE: &[Rank] = &[Seven, Eight, Nine, Ten, Ace];
const NINE_TO_ACE: &[Rank] = &[Nine, Ten, Ace];
const TEN_ACE: &[Rank] = &[Ten, Ace];
const ACE: &[Rank] = &[Ace];

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

pub static PAIRS: &[Rule] = &[
    Rule::new(Condition::Pair(Ace),   ALL, P),
    Rule::new(Condition::Pair(Eight), ALL, P),
    Rule::new(Condition::Pair(Ten),   ALL, S),
    Rule::new(Condition::Pair(Nine),  &[Two, Three, Four, Five, Six, Eight, Nine], P),
    Rule::new(Condition::Pair(Seven), TWO_TO_SEVEN, P),
    Rule::new(Condition::Pair(Six),   TWO_TO_SIX, P),
    Rule::new(Condition::Pair(Five),  TWO_TO_NINE, D),
    Rule::new(Condition::Pair(Four),  FIVE_SIX, P),
    Rule::new(Condition::Pair(Three), TWO_TO_SEVEN, P),
    Rule::new(Condition::Pair(Two),   TWO_TO_SEVEN, P),
];

pub static SOFT: &[Rule] = &[
    Rule::new(Condition::Soft(20), ALL, S),
    Rule::new(Condition::Soft(19), ALL, S),
    Rule::new(Condition::Soft(18), TWO_TO_SIX, D),
    Rule::new(Condition::Soft(18), &[Seven, Eight], S),
    Rule::new(Condition::Soft(18), NINE_TO_ACE, H),
    Rule::new(Condition::Soft(17), THREE_TO_SIX, D),
    Rule::new(Condition::Soft(17), &[Two, Seven, Eight, Nine, Ten, Ace], H),
    Rule::new(Condition::Soft(16), FOUR_TO_SIX, D),
    Rule::new(Condition::Soft(16), &[Two, Three, Seven, Eight, Nine, Ten, Ace], H),
    Rule::new(Condition::Soft(15), FOUR_TO_SIX, D),
    Rule::new(Condition::Soft(15), &[Two, Three, Seven, Eight, Nine, Ten, Ace], H),
    Rule::new(Condition::Soft(14), FIVE_SIX, D),
    Rule::new(Condition::Soft(14), &[Two, Three, Four, Seven, Eight, Nine, Ten, Ace], H),
    Rule::new(Condition::Soft(13), FIVE_SIX, D),
    Rule::new(Condition::Soft(13), &[Two, Three, Four, Seven, Eight, Nine, Ten, Ace], H),
];

pub static HARD: &[Rule] = &[
    Rule::new(Condition::Hard(20), ALL, S),
    Rule::new(Condition::Hard(19), ALL, S),
    Rule::new(Condition::Hard(18), ALL, S),
    Rule::new(Condition::Hard(17), ALL, S),
    Rule::new(Condition::Hard(16), TWO_TO_SIX, S),
    Rule::new(Condition::Hard(16), SEVEN_TO_ACE, H),
    Rule::new(Condition::Hard(15), TWO_TO_SIX, S),
    Rule::new(Condition::Hard(15), SEVEN_TO_ACE, H),
    Rule::new(Condition::Hard(14), TWO_TO_SIX, S),
    Rule::new(Condition::Hard(14), SEVEN_TO_ACE, H),
    Rule::new(Condition::Hard(13), TWO_TO_SIX, S),
    Rule::new(Condition::Hard(13), SEVEN_TO_ACE, H),
    Rule::new(Condition::Hard(12), FOUR_TO_SIX, S),
    Rule::new(Condition::Hard(12), &[Two, Three, Seven, Eight, Nine, Ten, Ace], H),
    Rule::new(Condition::Hard(11), TWO_TO_TEN, D),
    Rule::new(Condition::Hard(11), ACE, H),
    Rule::new(Condition::Hard(10), TWO_TO_NINE, D),
    Rule::new(Condition::Hard(10), TEN_ACE, H),
    Rule::new(Condition::Hard(9),  THREE_TO_SIX, D),
    Rule::new(Condition::Hard(9),  &[Two, Seven, Eight, Nine, Ten, Ace], H),
    Rule::new(Condition::Hard(8),  ALL, H),
    Rule::new(Condition::Hard(7),  ALL, H),
    Rule::new(Condition::Hard(6),  ALL, H),
    Rule::new(Condition::Hard(5),  ALL, H),
    // 2,2 against 8-A falls through to here.
    Rule::new(Condition::Hard(4),  ALL, H),
];

/// Two-deck overrides of the hard table.
pub static TWO_DECK_TWEAKS: &[Rule] = &[
    Rule::new(Condition::Hard(9), &[Two], D),
];

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

fn first_match(table: &[Rule], condition: Condition, upcard: Rank) -> Option<Action> {
    table
        .iter()
        .find(|rule| rule.condition == condition && rule.covers(upcard))
        .map(|rule| rule.action)
}

/// Resolve the chart action and report which tier answered.
pub fn resolve(hand: &HandValue, upcard: Rank, variant: Variant) -> Resolution {
    let up = upcard.normalize();

    if let Some(pair) = hand.pair_rank {
        if let Some(action) = first_match(PAIRS, Condition::Pair(pair.normalize()), up) {
            return Resolution { action, tier: Tier::Pair };
        }
    }

    if hand.soft && (13..=20).contains(&hand.total) {
        if let Some(action) = first_match(SOFT, Condition::Soft(hand.total), up) {
            return Resolution { action, tier: Tier::Soft };
        }
    }

    if variant == Variant::TwoDeck {
        if let Some(action) = first_match(TWO_DECK_TWEAKS, Condition::Hard(hand.total), up) {
            return Resolution { action, tier: Tier::VariantTweak };
        }
    }
    if let Some(action) = first_match(HARD, Condition::Hard(hand.total), up) {
        return Resolution { action, tier: Tier::Hard };
    }

    log::warn!(
        "no chart rule for {} vs {} ({}); defaulting to Hit",
        hand.describe(),
        up,
        variant
    );
    Resolution { action: Action::Hit, tier: Tier::Fallback }
}

/// The single textbook-correct action. Total: unmatched hands get Hit.
pub fn resolve_action(hand: &HandValue, upcard: Rank, variant: Variant) -> Action {
    resolve(hand, upcard, variant).action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::evaluator::evaluate_hand;
    use crate::training_engine::models::Rank::*;

    fn hard(total: u8) -> HandValue {
        HandValue { total, soft: false, pair_rank: None }
    }

    fn soft(total: u8) -> HandValue {
        HandValue { total, soft: true, pair_rank: None }
    }

    #[test]
    fn aces_split_before_soft_logic() {
        let hand = evaluate_hand(&[Ace, Ace]);
        let res = resolve(&hand, Six, Variant::SixDeck);
        assert_eq!(res, Resolution { action: Action::Split, tier: Tier::Pair });
    }

    #[test]
    fn hard_sixteen_against_seven_and_six() {
        assert_eq!(resolve_action(&hard(16), Seven, Variant::SixDeck), Action::Hit);
        assert_eq!(resolve_action(&hard(16), Six, Variant::SixDeck), Action::Stand);
    }

    #[test]
    fn two_deck_tweak_doubles_nine_against_two() {
        let res = resolve(&hard(9), Two, Variant::TwoDeck);
        assert_eq!(res, Resolution { action: Action::Double, tier: Tier::VariantTweak });
        assert_eq!(resolve_action(&hard(9), Two, Variant::SixDeck), Action::Hit);
        // The tweak only touches 9 vs 2.
        assert_eq!(resolve_action(&hard(9), Seven, Variant::TwoDeck), Action::Hit);
    }

    #[test]
    fn soft_eighteen_in_both_variants() {
        for variant in [Variant::TwoDeck, Variant::SixDeck] {
            assert_eq!(resolve_action(&soft(18), Nine, variant), Action::Hit);
            assert_eq!(resolve_action(&soft(18), Four, variant), Action::Double);
            assert_eq!(resolve_action(&soft(18), Seven, variant), Action::Stand);
        }
    }

    #[test]
    fn face_upcards_read_as_ten() {
        assert_eq!(resolve_action(&hard(10), King, Variant::SixDeck), Action::Hit);
        assert_eq!(resolve_action(&hard(11), Queen, Variant::SixDeck), Action::Double);
    }

    #[test]
    fn uncovered_pair_falls_through_to_totals() {
        let nines = evaluate_hand(&[Nine, Nine]);
        assert_eq!(resolve(&nines, Seven, Variant::SixDeck), Resolution { action: Action::Stand, tier: Tier::Hard });

        let fives = evaluate_hand(&[Five, Five]);
        assert_eq!(resolve_action(&fives, Ten, Variant::SixDeck), Action::Hit);
        assert_eq!(resolve_action(&fives, Six, Variant::SixDeck), Action::Double);

        let fours = evaluate_hand(&[Four, Four]);
        assert_eq!(resolve(&fours, Two, Variant::SixDeck).tier, Tier::Hard);

        let twos = evaluate_hand(&[Two, Two]);
        assert_eq!(resolve(&twos, Nine, Variant::SixDeck), Resolution { action: Action::Hit, tier: Tier::Hard });
    }

    #[test]
    fn face_card_pairs_stand() {
        let hand = evaluate_hand(&[Jack, Queen]);
        assert_eq!(resolve(&hand, Six, Variant::TwoDeck), Resolution { action: Action::Stand, tier: Tier::Pair });
    }

    #[test]
    fn out_of_range_total_falls_back_to_hit() {
        let res = resolve(&hard(21), Ten, Variant::SixDeck);
        assert_eq!(res, Resolution { action: Action::Hit, tier: Tier::Fallback });
    }

    #[test]
    fn tables_are_complete_for_modelled_hands() {
        for variant in [Variant::TwoDeck, Variant::SixDeck] {
            for &up in Rank::UPCARDS.iter() {
                for total in 4..=20 {
                    assert_ne!(resolve(&hard(total), up, variant).tier, Tier::Fallback, "hard {total} vs {up}");
                }
                for total in 13..=20 {
                    assert_eq!(resolve(&soft(total), up, variant).tier, Tier::Soft, "soft {total} vs {up}");
                }
            }
        }
    }

    #[test]
    fn no_rule_overlaps_inside_a_tier() {
        for table in [PAIRS, SOFT, HARD, TWO_DECK_TWEAKS] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    if a.condition == b.condition {
                        assert!(
                            a.upcards.iter().all(|u| !b.covers(*u)),
                            "overlapping rules for {:?}",
                            a.condition
                        );
                    }
                }
            }
        }
    }
}
