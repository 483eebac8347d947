use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Card id out of range")]
    InvalidCard,
    #[error("Grid size out of range")]
    InvalidGridSize,
    #[error("Deal is not made of whole value pairs")]
    UnbalancedDeal,
}

pub type Result<T> = core::result::Result<T, GameError>;
