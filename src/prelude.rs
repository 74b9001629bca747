//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Board, CellState, Difficulty, Game, GameError, Orientation, Phase, Position,
    Seat, ShipClass, Team, TeamAttackOutcome, TeamGame,
};

#[cfg(feature = "std")]
pub use crate::{GameApi, PauseHandle, Session, TeamSession};
