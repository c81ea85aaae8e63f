//! Random card sampling without replacement.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use arcana_core::Card;

use crate::error::{EngineError, EngineResult};

/// Draw `count` distinct cards from `deck` and assign each an orientation.
///
/// The whole deck is shuffled with a uniform Fisher-Yates pass, then the
/// first `count` cards are kept, so no card can appear twice in one draw.
/// Each kept card is independently reversed with probability
/// `reversed_chance`.
pub fn draw(
    deck: &[Card],
    count: usize,
    reversed_chance: f64,
    rng: &mut StdRng,
) -> EngineResult<Vec<(Card, bool)>> {
    if count == 0 || count > deck.len() {
        return Err(EngineError::InvalidCardCount {
            requested: count,
            deck_size: deck.len(),
        });
    }

    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);

    Ok(shuffled
        .into_iter()
        .map(|card| {
            let reversed = rng.random_bool(reversed_chance);
            (card, reversed)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{DECK_SIZE, standard_deck};
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn draws_are_duplicate_free_for_every_count() {
        let deck = standard_deck();
        let mut rng = StdRng::seed_from_u64(11);
        for count in 1..=DECK_SIZE {
            let drawn = draw(&deck, count, 0.3, &mut rng).unwrap();
            assert_eq!(drawn.len(), count);
            let ids: HashSet<u8> = drawn.iter().map(|(c, _)| c.arcana_id).collect();
            assert_eq!(ids.len(), count);
        }
    }

    #[test]
    fn rejects_zero_and_oversized_counts() {
        let deck = standard_deck();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            draw(&deck, 0, 0.3, &mut rng),
            Err(EngineError::InvalidCardCount { requested: 0, .. })
        ));
        assert!(matches!(
            draw(&deck, DECK_SIZE + 1, 0.3, &mut rng),
            Err(EngineError::InvalidCardCount { requested: 23, .. })
        ));
    }

    #[test]
    fn reversed_rate_tracks_the_configured_chance() {
        let deck = standard_deck();
        let mut rng = StdRng::seed_from_u64(99);
        let mut reversed = 0u32;
        let mut total = 0u32;
        for _ in 0..2_000 {
            for (_, is_reversed) in draw(&deck, 5, 0.3, &mut rng).unwrap() {
                total += 1;
                if is_reversed {
                    reversed += 1;
                }
            }
        }
        let rate = f64::from(reversed) / f64::from(total);
        assert!((rate - 0.3).abs() < 0.05, "observed rate {rate}");
    }

    #[test]
    fn extreme_chances_pin_the_orientation() {
        let deck = standard_deck();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(draw(&deck, 10, 0.0, &mut rng)
            .unwrap()
            .iter()
            .all(|(_, r)| !r));
        assert!(draw(&deck, 10, 1.0, &mut rng)
            .unwrap()
            .iter()
            .all(|(_, r)| *r));
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let deck = standard_deck();
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        let da = draw(&deck, 10, 0.3, &mut a).unwrap();
        let db = draw(&deck, 10, 0.3, &mut b).unwrap();
        for ((ca, ra), (cb, rb)) in da.iter().zip(db.iter()) {
            assert_eq!(ca.arcana_id, cb.arcana_id);
            assert_eq!(ra, rb);
        }
    }
}
