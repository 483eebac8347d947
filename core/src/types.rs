use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Stable 0-based position of a card in deal order.
pub type CardId = u16;

/// Hidden number printed on a card, in `1..=pair_count`.
pub type CardValue = u16;

/// Count type used for deck and pair totals.
pub type CardCount = u16;

/// Playable board dimension, validated into `[GridSize::MIN, GridSize::MAX]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 10;

    pub const fn new(size: u8) -> Result<Self> {
        if size >= Self::MIN && size <= Self::MAX {
            Ok(Self(size))
        } else {
            Err(GameError::InvalidGridSize)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GameError;

    fn try_from(size: u8) -> Result<Self> {
        Self::new(size)
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.get()
    }
}

impl core::fmt::Display for GridSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_accepts_full_playable_range() {
        for size in GridSize::MIN..=GridSize::MAX {
            assert_eq!(GridSize::new(size).map(GridSize::get), Ok(size));
        }
    }

    #[test]
    fn grid_size_rejects_out_of_range_values() {
        assert_eq!(GridSize::new(0), Err(GameError::InvalidGridSize));
        assert_eq!(GridSize::new(1), Err(GameError::InvalidGridSize));
        assert_eq!(GridSize::new(11), Err(GameError::InvalidGridSize));
        assert_eq!(GridSize::new(u8::MAX), Err(GameError::InvalidGridSize));
    }
}
