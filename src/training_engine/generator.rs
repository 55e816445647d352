use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    evaluator::evaluate_hand,
    models::{Rank, Scenario},
};

/// Seeded when `Some`, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Uniform draw from the 13-rank alphabet. Independent of any shoe.
pub fn random_rank<R: Rng>(rng: &mut R) -> Rank {
    Rank::ALL[rng.gen_range(0..Rank::ALL.len())]
}

/// Deal a two-card hand and a normalized dealer upcard.
///
/// Naturals are not quizzed, so any hand totalling 21 is redrawn.
pub fn generate_scenario<R: Rng>(rng: &mut R) -> Scenario {
    loop {
        let player = [random_rank(rng), random_rank(rng)];
        let upcard = random_rank(rng).normalize();
        if evaluate_hand(&player).total == 21 {
            log::trace!("rejected natural {}{}", player[0], player[1]);
            continue;
        }
        log::debug!("dealt {} {} vs {}", player[0], player[1], upcard);
        return Scenario { player, upcard };
    }
}
