use super::*;
use alloc::vec::Vec;

/// Deals a board by duplicating the value pool and permuting it in place with
/// a seeded Fisher-Yates shuffle, so every permutation is equally likely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, config: GameConfig) -> CardDeck {
        use rand::prelude::*;

        let pair_count = config.pair_count();
        let mut pool: Vec<CardValue> = Vec::with_capacity(config.dealt_cards() as usize);
        pool.extend(1..=pair_count);
        pool.extend(1..=pair_count);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..pool.len()).rev() {
            let j = rng.random_range(0..=i);
            pool.swap(i, j);
        }

        log::debug!(
            "dealt {} cards ({} pairs) from seed {}",
            pool.len(),
            pair_count,
            self.seed
        );

        // the pool is built from whole pairs, so validation cannot fail
        CardDeck::from_values(pool).expect("pool should be whole pairs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn config(side: u8) -> GameConfig {
        GameConfig::new(GridSize::new(side).unwrap())
    }

    #[test]
    fn deal_covers_every_value_exactly_twice() {
        for side in GridSize::MIN..=GridSize::MAX {
            let config = config(side);
            let deck = ShuffledDeckGenerator::new(7).generate(config);

            assert_eq!(deck.total_cards(), config.dealt_cards());
            assert_eq!(deck.pair_count(), config.pair_count());

            let mut copies = alloc::vec![0u32; config.pair_count() as usize];
            for value in deck.iter_values() {
                copies[(value - 1) as usize] += 1;
            }
            assert!(copies.iter().all(|&count| count == 2));
        }
    }

    #[test]
    fn odd_grid_deals_one_card_short_of_the_square() {
        let deck = ShuffledDeckGenerator::new(3).generate(config(3));
        assert_eq!(deck.total_cards(), 8);
    }

    #[test]
    fn same_seed_deals_the_same_board() {
        let first = ShuffledDeckGenerator::new(42).generate(config(6));
        let second = ShuffledDeckGenerator::new(42).generate(config(6));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_permute_the_pool() {
        let decks: Vec<CardDeck> = (0..16)
            .map(|seed| ShuffledDeckGenerator::new(seed).generate(config(6)))
            .collect();
        // 36 cards have far too many permutations for 16 seeds to collide
        assert!(decks.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
