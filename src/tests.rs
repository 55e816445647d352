//! Cross-module tests for the `blackjack_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Chart priority | Pairs beat soft/hard; soft beats hard; two-deck tweak beats hard |
//! | Chart coverage | Every dealable two-card hand resolves without the fallback |
//! | Scenarios | No naturals; sessions replay identically from a seed |
//! | Shoe & count | Rank multiplicity, exhaustion, true-count truncation |
//! | Idempotence | Re-applying the current variant / deck count changes nothing |
//! | Timers | Stale advances and ticks never fire |

use std::time::Duration;

use crate::training_engine::{
    config::TrainerConfig,
    deck::Shoe,
    evaluator::{evaluate_hand, hi_lo_value, true_count},
    generator::{generate_scenario, make_rng},
    models::{Action, CountGuess, Rank, Variant},
    sessions::{CountingSession, StrategySession},
    strategy::{resolve, resolve_action, Tier},
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

const VARIANTS: [Variant; 2] = [Variant::TwoDeck, Variant::SixDeck];

fn counting(decks: u8, seed: u64) -> CountingSession {
    CountingSession::new(&TrainerConfig { deck_count: decks, ..TrainerConfig::seeded(seed) })
}

// ── chart priority ───────────────────────────────────────────────────────────

#[test]
fn pair_tier_precedes_totals() {
    let aces = evaluate_hand(&[Rank::Ace, Rank::Ace]);
    for variant in VARIANTS {
        for up in Rank::UPCARDS {
            let res = resolve(&aces, up, variant);
            assert_eq!(res.tier, Tier::Pair, "A,A vs {up} ({variant})");
            assert_eq!(res.action, Action::Split);
        }
    }
}

#[test]
fn documented_chart_cells() {
    use Rank::*;
    let cells = [
        ([Ten, Six],   Seven, Variant::SixDeck, Action::Hit),
        ([Ten, Six],   Six,   Variant::SixDeck, Action::Stand),
        ([Six, Three], Two,   Variant::TwoDeck, Action::Double),
        ([Six, Three], Two,   Variant::SixDeck, Action::Hit),
        ([Ace, Seven], Nine,  Variant::SixDeck, Action::Hit),
        ([Ace, Seven], Nine,  Variant::TwoDeck, Action::Hit),
        ([Ace, Seven], Four,  Variant::SixDeck, Action::Double),
        ([Ace, Seven], Four,  Variant::TwoDeck, Action::Double),
        ([Eight, Eight], Ace, Variant::SixDeck, Action::Split),
        ([King, Jack], Five,  Variant::SixDeck, Action::Stand),
        ([Seven, Four], Ace,  Variant::SixDeck, Action::Hit),
        ([Seven, Four], King, Variant::SixDeck, Action::Double),
    ];
    for (player, up, variant, expected) in cells {
        let hand = evaluate_hand(&player);
        assert_eq!(
            resolve_action(&hand, up, variant),
            expected,
            "{}{} vs {up} ({variant})",
            player[0],
            player[1]
        );
    }
}

#[test]
fn every_dealable_hand_resolves_from_the_chart() {
    for variant in VARIANTS {
        for a in Rank::ALL {
            for b in Rank::ALL {
                let hand = evaluate_hand(&[a, b]);
                if hand.total == 21 {
                    continue;
                }
                for up in Rank::ALL {
                    let res = resolve(&hand, up, variant);
                    assert_ne!(res.tier, Tier::Fallback, "{a}{b} vs {up} ({variant}) hit the fallback");
                }
            }
        }
    }
}

#[test]
fn variants_differ_only_on_the_tweak_cell() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            let hand = evaluate_hand(&[a, b]);
            for up in Rank::UPCARDS {
                let two = resolve_action(&hand, up, Variant::TwoDeck);
                let six = resolve_action(&hand, up, Variant::SixDeck);
                if two != six {
                    assert_eq!((hand.total, hand.soft, up), (9, false, Rank::Two));
                }
            }
        }
    }
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn generated_scenarios_never_total_21() {
    for seed in SEEDS {
        let mut rng = make_rng(Some(seed));
        for _ in 0..1_000 {
            let s = generate_scenario(&mut rng);
            assert_ne!(evaluate_hand(&s.player).total, 21, "seed={seed} dealt {:?}", s.player);
        }
    }
}

#[test]
fn strategy_session_replays_from_seed() {
    for seed in SEEDS {
        let mut a = StrategySession::new(&TrainerConfig::seeded(seed));
        let mut b = StrategySession::new(&TrainerConfig::seeded(seed));
        for _ in 0..10 {
            assert_eq!(a.current_scenario(), b.current_scenario(), "seed={seed}");
            a.next_scenario();
            b.next_scenario();
        }
    }
}

#[test]
fn auto_advance_deals_a_fresh_hand() {
    let mut s = StrategySession::new(&TrainerConfig::seeded(1));
    let mut reference = StrategySession::new(&TrainerConfig::seeded(1));
    s.answer(s.correct_action());
    assert!(s.advance(Duration::from_millis(1200)));
    reference.next_scenario();
    assert_eq!(s.current_scenario(), reference.current_scenario());
}

#[test]
fn custom_auto_advance_delay_is_honoured() {
    let config = TrainerConfig { auto_advance_ms: 300, ..TrainerConfig::seeded(5) };
    let mut s = StrategySession::new(&config);
    s.answer(s.correct_action());
    assert!(!s.advance(Duration::from_millis(299)));
    assert!(s.advance(Duration::from_millis(1)));
}

#[test]
fn strategy_history_is_capped() {
    let config = TrainerConfig { history_cap: 5, ..TrainerConfig::seeded(8) };
    let mut s = StrategySession::new(&config);
    for _ in 0..12 {
        s.answer(Action::Hit);
        s.next_scenario();
    }
    assert_eq!(s.stats().attempts, 12);
    assert_eq!(s.history().len(), 5);
}

// ── shoe & count ─────────────────────────────────────────────────────────────

#[test]
fn fresh_shoe_multiplicity() {
    for decks in 1..=8u8 {
        let mut rng = make_rng(Some(u64::from(decks)));
        let mut shoe = Shoe::new_shuffled(decks, &mut rng);
        assert_eq!(shoe.remaining_cards(), 52 * decks as usize);
        let mut counts = [0usize; 13];
        while let Some(card) = shoe.draw() {
            let idx = Rank::ALL.iter().position(|&r| r == card).unwrap();
            counts[idx] += 1;
        }
        assert!(counts.iter().all(|&n| n == 4 * decks as usize), "{decks} decks: {counts:?}");
        assert_eq!(shoe.remaining_cards(), 0);
        assert_eq!(shoe.draw(), None);
    }
}

#[test]
fn true_count_examples() {
    // Six full decks remaining, running count +3.
    assert_eq!(true_count(3, 312.0 / 52.0), 0);
    // Two decks (rounded) remaining, running count -5: truncation, not floor.
    assert_eq!(true_count(-5, 2.0), -2);
    assert_eq!(true_count(-5, 2.4), -2);
}

#[test]
fn counting_session_survives_many_shoes() {
    let mut s = counting(1, 77);
    let mut reshuffles = 0;
    s.deal_next();
    for _ in 0..500 {
        match s.current_card() {
            Some(card) => {
                let guess = CountGuess::from_delta(hi_lo_value(card));
                assert!(s.submit(guess).unwrap().is_correct);
            }
            None => {
                reshuffles += 1;
                assert_eq!(s.running_count(), 0);
                s.deal_next();
            }
        }
    }
    assert!(reshuffles >= 5, "expected several reshuffles, saw {reshuffles}");
    assert_eq!(s.stats().corrects, s.stats().attempts);
}

// ── idempotence ──────────────────────────────────────────────────────────────

#[test]
fn reapplying_settings_changes_nothing() {
    let mut strategy = StrategySession::new(&TrainerConfig::seeded(4));
    strategy.answer(Action::Stand);
    let stats = *strategy.stats();
    let scenario = strategy.current_scenario();
    strategy.set_variant(Variant::SixDeck);
    assert_eq!(*strategy.stats(), stats);
    assert_eq!(strategy.current_scenario(), scenario);
    assert_eq!(strategy.history().len(), 1);

    let mut count = counting(6, 4);
    count.deal_next();
    count.submit(CountGuess::Zero);
    let (rc, tc, attempts) = (count.running_count(), count.true_count(), count.stats().attempts);
    let card = count.current_card();
    count.set_deck_count(6);
    assert_eq!((count.running_count(), count.true_count(), count.stats().attempts), (rc, tc, attempts));
    assert_eq!(count.current_card(), card);
    assert_eq!(count.history().len(), 1);
}

// ── timers ───────────────────────────────────────────────────────────────────

#[test]
fn stale_auto_advance_never_fires_after_reset() {
    let mut s = StrategySession::new(&TrainerConfig::seeded(12));
    s.answer(s.correct_action());
    s.reset_session();
    let table = s.current_scenario();
    assert!(!s.advance(Duration::from_secs(60)));
    assert_eq!(s.current_scenario(), table);
}

#[test]
fn timed_drill_restarts_cleanly() {
    let mut s = counting(6, 21);
    s.start_timed_drill(60);
    assert!(s.advance(Duration::from_secs(30)).is_none());
    assert_eq!(s.timed_drill().seconds_remaining(), 30);

    s.start_timed_drill(5);
    assert_eq!(s.timed_drill().seconds_remaining(), 5);
    let summary = s.advance(Duration::from_secs(5)).expect("drill should finish");
    assert_eq!(summary.attempts, 0);
    assert!(!s.timed_drill().is_active());
    assert_eq!(s.timed_drill().summary(), Some(summary));
    assert!(s.advance(Duration::from_secs(60)).is_none());
}
