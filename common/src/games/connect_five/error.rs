use std::fmt;

use super::types::{GameOutcome, Player, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds => write!(f, "position out of bounds"),
            InvalidMoveReason::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at {position}: {reason}")]
    InvalidMove {
        position: Position,
        reason: InvalidMoveReason,
    },

    #[error("game is already over ({0})")]
    GameAlreadyOver(GameOutcome),

    #[error("invalid game settings: {0}")]
    InvalidSettings(String),

    #[error("{0} has no move to play")]
    NoMoveSelected(Player),
}
