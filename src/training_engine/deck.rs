use rand::Rng;
use crate::training_engine::models::Rank;

pub const CARDS_PER_DECK: usize = 52;

/// Smallest deck estimate used for true-count conversion.
pub const MIN_REMAINING_DECKS: f64 = 0.25;

/// A multi-deck shoe dealt front to back.
///
/// Cards before the cursor have been dealt; cards at or after it remain.
/// A shoe is never refilled in place: exhaustion or a reset swaps in a new one.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Rank>,
    cursor: usize,
    deck_count: u8,
}

impl Shoe {
    /// Build `deck_count` decks (four of every rank per deck) and shuffle with `rng`.
    pub fn new_shuffled<R: Rng>(deck_count: u8, rng: &mut R) -> Self {
        let mut cards: Vec<Rank> = (0..deck_count)
            .flat_map(|_| Rank::ALL.iter().flat_map(|&r| std::iter::repeat(r).take(4)))
            .collect();

        // Fisher-Yates shuffle
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }

        log::debug!("shuffled a {}-deck shoe ({} cards)", deck_count, cards.len());
        Shoe { cards, cursor: 0, deck_count }
    }

    /// Replace this shoe with a freshly shuffled one.
    pub fn reset<R: Rng>(&mut self, deck_count: u8, rng: &mut R) {
        *self = Shoe::new_shuffled(deck_count, rng);
    }

    /// Deal the next card, or `None` once the shoe is exhausted.
    pub fn draw(&mut self) -> Option<Rank> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Remaining cards in decks, floored so a near-empty shoe still divides sanely.
    pub fn remaining_decks(&self) -> f64 {
        (self.remaining_cards() as f64 / CARDS_PER_DECK as f64).max(MIN_REMAINING_DECKS)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All dealt cards so far.
    pub fn dealt_cards(&self) -> &[Rank] {
        &self.cards[..self.cursor]
    }
}
