use crate::training_engine::models::{HandValue, Rank};

/// J, Q and K count as 10 for every chart lookup.
pub fn normalize_rank(rank: Rank) -> Rank {
    rank.normalize()
}

/// Blackjack point value with an Ace counted high.
pub fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace   => 11,
        Rank::Two   => 2,
        Rank::Three => 3,
        Rank::Four  => 4,
        Rank::Five  => 5,
        Rank::Six   => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine  => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Classify a hand: best total, softness and pair rank.
///
/// Aces start at 11 and are demoted to 1 one at a time only while the total
/// exceeds 21. The hand is soft iff an Ace is still counted high afterwards.
pub fn evaluate_hand(cards: &[Rank]) -> HandValue {
    let mut total: u32 = cards.iter().map(|&c| u32::from(card_value(c))).sum();
    let mut high_aces = cards.iter().filter(|&&c| c == Rank::Ace).count();

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    let pair_rank = match cards {
        [a, b] if a.normalize() == b.normalize() => Some(a.normalize()),
        _ => None,
    };

    HandValue {
        total: u8::try_from(total).unwrap_or(u8::MAX),
        soft: high_aces > 0,
        pair_rank,
    }
}

/// Hi-Lo increment: +1 for 2-6, 0 for 7-9, -1 for tens and Aces.
pub fn hi_lo_value(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Convert a running count to a true count.
///
/// The divisor is the remaining deck estimate rounded to whole decks and never
/// below one; integer division truncates toward zero.
pub fn true_count(running_count: i32, remaining_decks: f64) -> i32 {
    let divisor = remaining_decks.round().max(1.0) as i32;
    running_count / divisor
}
