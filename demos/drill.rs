//! Console walk-through of both drills.
//!
//! Run with: `cargo run --example drill`
//! Set `RUST_LOG=debug` to watch deals, reshuffles and timer events.
//!
//! 1. **Strategy drill**: ten seeded hands, answered with a deliberately
//!    naive "hit below 17" policy so both feedback paths show up. Correct
//!    answers move on through the auto-advance timer, misses through
//!    `next_scenario()`.
//!
//! 2. **Counting drill**: a one-deck shoe counted perfectly for a 30-second
//!    timed drill (one card per simulated second), with a JSON snapshot at
//!    the end.

use std::time::Duration;

use blackjack_drill::{
    counting_view, Action, CountGuess, CountingSession, StrategySession, TrainerConfig, Variant,
};

/// Hit below 17, stand otherwise. Often wrong, which is the point.
fn naive_policy(total: u8) -> Action {
    if total < 17 { Action::Hit } else { Action::Stand }
}

fn strategy_demo(config: &TrainerConfig) {
    let mut session = StrategySession::new(config);
    session.set_variant(Variant::TwoDeck);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Basic strategy — {} (S17 / DAS / no surrender)", session.variant());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for _ in 0..10 {
        let scenario = session.current_scenario();
        let hand = session.hand();
        let choice = naive_policy(hand.total);
        let Some(fb) = session.answer(choice) else { continue };

        let marker = if fb.is_correct { "✓" } else { "✗" };
        println!(
            "  [{marker}] {} {} vs {:<2}  {:<8}  you: {:<6}  chart: {}",
            scenario.player[0], scenario.player[1], scenario.upcard,
            hand.describe(), fb.chosen, fb.correct
        );

        if fb.is_correct {
            session.advance(config.auto_advance());
        } else {
            session.next_scenario();
        }
    }

    let stats = session.stats();
    println!();
    println!("  Score {}/{}  accuracy {}%  streak {}", stats.corrects, stats.attempts, stats.accuracy(), stats.streak);
    println!();
}

fn counting_demo(config: &TrainerConfig) {
    let mut session = CountingSession::new(config);
    session.set_deck_count(1);
    session.start_timed_drill(30);
    session.deal_next();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Hi-Lo counting — {} deck, 30s timed drill", session.deck_count());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    loop {
        let Some(card) = session.current_card() else {
            session.deal_next();
            continue;
        };
        let guess = CountGuess::from_delta(blackjack_drill::hi_lo_value(card));
        session.submit(guess);
        println!(
            "  {:<2} {:>2}   RC {:>3}   TC {:>3}   {:>2} cards left",
            card, guess, session.running_count(), session.true_count(),
            session.shoe().remaining_cards()
        );

        if let Some(summary) = session.advance(Duration::from_secs(1)) {
            println!();
            println!(
                "  Timed drill complete: {} cards, {} correct ({}% accuracy)",
                summary.attempts, summary.corrects, summary.accuracy
            );
            break;
        }
    }

    println!();
    match serde_json::to_string_pretty(&counting_view(&session)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not render view: {e}"),
    }
}

fn main() {
    env_logger::init();
    let config = TrainerConfig::seeded(2024);
    strategy_demo(&config);
    counting_demo(&config);
}
