use serde_json::{json, Value};
use crate::training_engine::{
    models::{CountRecord, HandValue, StrategyRecord},
    sessions::{CountingSession, StrategySession},
    stats::SessionStats,
};

/// How many history rows a view carries.
const VIEW_HISTORY: usize = 20;

/// Badge text for a pair, e.g. "Pair of 8s".
fn pair_badge(hand: &HandValue) -> Value {
    match hand.pair_rank {
        Some(rank) => Value::String(format!("Pair of {}s", rank)),
        None => Value::Null,
    }
}

fn stats_block(stats: &SessionStats) -> Value {
    json!({
        "attempts": stats.attempts,
        "corrects": stats.corrects,
        "streak":   stats.streak,
        "accuracy": stats.accuracy()
    })
}

fn strategy_row(r: &StrategyRecord) -> Value {
    json!({
        "ts":      r.timestamp_ms,
        "deck":    r.variant.label(),
        "player":  [r.player[0].symbol(), r.player[1].symbol()],
        "up":      r.upcard.symbol(),
        "hand":    r.hand.describe(),
        "pair":    pair_badge(&r.hand),
        "chosen":  r.chosen.to_string(),
        "correct": r.correct.to_string()
    })
}

fn counting_row(r: &CountRecord) -> Value {
    json!({
        "card":    r.card.symbol(),
        "your":    r.guess.label(),
        "correct": r.correct.label(),
        "rc":      r.running_count,
        "tc":      r.true_count
    })
}

/// Render-ready snapshot of a strategy session.
pub fn strategy_view(session: &StrategySession) -> Value {
    let scenario = session.current_scenario();
    let hand = session.hand();

    let feedback = match session.feedback() {
        Some(fb) => {
            let headline = if fb.is_correct { "Correct" } else { "Not quite" };
            json!({
                "is_correct": fb.is_correct,
                "headline":   headline,
                "text": format!("You chose {}. The chart says {} for this spot.", fb.chosen, fb.correct)
            })
        }
        None => Value::Null,
    };

    let history: Vec<Value> = session.history().iter().take(VIEW_HISTORY).map(strategy_row).collect();

    json!({
        "player":   [scenario.player[0].symbol(), scenario.player[1].symbol()],
        "up":       scenario.upcard.symbol(),
        "hand":     hand.describe(),
        "pair":     pair_badge(&hand),
        "variant":  session.variant().label(),
        "rules":    "S17 / DAS / No Surrender",
        "stats":    stats_block(session.stats()),
        "feedback": feedback,
        "history":  history
    })
}

/// Render-ready snapshot of a counting session, including the timed drill.
pub fn counting_view(session: &CountingSession) -> Value {
    let drill = session.timed_drill();
    let summary = match drill.summary() {
        Some(s) => json!({ "attempts": s.attempts, "corrects": s.corrects, "accuracy": s.accuracy }),
        None => Value::Null,
    };

    let last = match session.last_result() {
        Some(r) => json!({
            "card":       r.card.symbol(),
            "guess":      r.guess.label(),
            "correct":    r.correct.label(),
            "is_correct": r.is_correct
        }),
        None => Value::Null,
    };

    let history: Vec<Value> = session.history().iter().take(VIEW_HISTORY).map(counting_row).collect();

    json!({
        "card":            session.current_card().map(|c| c.symbol()),
        "decks":           session.deck_count(),
        "remaining_cards": session.shoe().remaining_cards(),
        "running_count":   session.running_count(),
        "true_count":      session.true_count(),
        "stats":           stats_block(session.stats()),
        "errors":          session.error_tally(),
        "last_result":     last,
        "timer": {
            "active":            drill.is_active(),
            "seconds_remaining": drill.seconds_remaining(),
            "summary":           summary
        },
        "history": history
    })
}
