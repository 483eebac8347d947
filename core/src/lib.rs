#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: GridSize,
}

impl GameConfig {
    pub const fn new(grid_size: GridSize) -> Self {
        Self { grid_size }
    }

    pub const fn total_cells(&self) -> CardCount {
        let side = self.grid_size.get() as CardCount;
        side * side
    }

    pub const fn pair_count(&self) -> CardCount {
        self.total_cells() / 2
    }

    /// Cards actually dealt. The value pool holds every pair value exactly
    /// twice, so an odd grid leaves its last cell empty.
    pub const fn dealt_cards(&self) -> CardCount {
        self.pair_count() * 2
    }
}

/// One game's worth of cards in deal order. Immutable once dealt; the engine
/// only ever reads values and validates ids against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDeck {
    values: Vec<CardValue>,
    pair_count: CardCount,
}

impl CardDeck {
    /// Builds a deck from values in deal order, checking that the deal is made
    /// of whole pairs: every value in `1..=pair_count` appears exactly twice.
    pub fn from_values(values: Vec<CardValue>) -> Result<Self> {
        let pair_count: CardCount = (values.len() / 2)
            .try_into()
            .map_err(|_| GameError::UnbalancedDeal)?;

        if values.is_empty() || values.len() != 2 * pair_count as usize {
            return Err(GameError::UnbalancedDeal);
        }

        let mut copies = alloc::vec![0u8; pair_count as usize];
        for &value in &values {
            let Some(slot) = value
                .checked_sub(1)
                .and_then(|v| copies.get_mut(v as usize))
            else {
                return Err(GameError::UnbalancedDeal);
            };
            if *slot == 2 {
                return Err(GameError::UnbalancedDeal);
            }
            *slot += 1;
        }
        // len == 2 * pair_count and no value occurs more than twice, so every
        // value in 1..=pair_count occurs exactly twice

        Ok(Self { values, pair_count })
    }

    pub fn total_cards(&self) -> CardCount {
        self.values.len() as CardCount
    }

    pub fn pair_count(&self) -> CardCount {
        self.pair_count
    }

    pub fn validate_id(&self, id: CardId) -> Result<CardId> {
        if (id as usize) < self.values.len() {
            Ok(id)
        } else {
            Err(GameError::InvalidCard)
        }
    }

    pub fn value_at(&self, id: CardId) -> Result<CardValue> {
        self.values
            .get(id as usize)
            .copied()
            .ok_or(GameError::InvalidCard)
    }

    pub fn iter_values(&self) -> impl Iterator<Item = CardValue> + '_ {
        self.values.iter().copied()
    }
}

/// Result of a single card selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Flipped,
    Dismissed,
    Matched,
    Mismatched,
    Won,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            Dismissed => true,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }

    /// True when this selection completed a two-card comparison.
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Matched | Self::Mismatched | Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConcealOutcome {
    NoChange,
    Concealed,
}

impl ConcealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Concealed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn config_totals_follow_grid_size() {
        let even = GameConfig::new(GridSize::new(4).unwrap());
        assert_eq!(even.total_cells(), 16);
        assert_eq!(even.pair_count(), 8);
        assert_eq!(even.dealt_cards(), 16);

        let odd = GameConfig::new(GridSize::new(3).unwrap());
        assert_eq!(odd.total_cells(), 9);
        assert_eq!(odd.pair_count(), 4);
        assert_eq!(odd.dealt_cards(), 8);
    }

    #[test]
    fn deck_accepts_whole_pairs_in_any_order() {
        let deck = CardDeck::from_values(vec![2, 1, 1, 3, 3, 2]).unwrap();
        assert_eq!(deck.total_cards(), 6);
        assert_eq!(deck.pair_count(), 3);
        assert_eq!(deck.value_at(0), Ok(2));
        assert_eq!(deck.value_at(5), Ok(2));
    }

    #[test]
    fn deck_rejects_broken_compositions() {
        assert_eq!(CardDeck::from_values(vec![]), Err(GameError::UnbalancedDeal));
        assert_eq!(
            CardDeck::from_values(vec![1, 1, 2]),
            Err(GameError::UnbalancedDeal)
        );
        assert_eq!(
            CardDeck::from_values(vec![1, 1, 1, 1]),
            Err(GameError::UnbalancedDeal)
        );
        assert_eq!(
            CardDeck::from_values(vec![0, 0]),
            Err(GameError::UnbalancedDeal)
        );
        // value 3 is out of range for a two-pair deck
        assert_eq!(
            CardDeck::from_values(vec![1, 1, 3, 3]),
            Err(GameError::UnbalancedDeal)
        );
    }

    #[test]
    fn deck_validates_ids_against_deal_length() {
        let deck = CardDeck::from_values(vec![1, 2, 1, 2]).unwrap();
        assert_eq!(deck.validate_id(3), Ok(3));
        assert_eq!(deck.validate_id(4), Err(GameError::InvalidCard));
        assert_eq!(deck.value_at(4), Err(GameError::InvalidCard));
    }
}
