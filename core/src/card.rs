use serde::{Deserialize, Serialize};

/// Canonical player-visible state of a single card.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardState {
    Down,
    Up,
    Solved,
}

impl CardState {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Up | Self::Solved)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::Down
    }
}
