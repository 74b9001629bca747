//! Common types: positions, phases, attack results and engine errors.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::ship::{ShipClass, ShipId};

/// A cell coordinate, `0..BOARD_SIZE` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when both coordinates are on the board.
    pub const fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Offset by `(dr, dc)`, or `None` if the result leaves the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let pos = Position::new(row, col);
        pos.is_valid().then_some(pos)
    }

    /// Orthogonal neighbours in up, down, left, right order, clipped to the board.
    pub fn neighbours(&self) -> impl Iterator<Item = Position> {
        let origin = *self;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| origin.offset(dr, dc))
    }
}

/// Formats as column letter plus 1-based row, e.g. `E5` for (4, 4).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars
            .next()
            .ok_or(BoardError::InvalidCoordinate)?
            .to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(BoardError::InvalidCoordinate);
        }
        let col = (col_ch as u8 - b'A') as usize;
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| BoardError::InvalidCoordinate)?;
        if row == 0 {
            return Err(BoardError::InvalidCoordinate);
        }
        let pos = Position::new(row - 1, col);
        if !pos.is_valid() {
            return Err(BoardError::InvalidCoordinate);
        }
        Ok(pos)
    }
}

/// Lifecycle phase shared by the 1v1 and 2v2 controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Playing,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Playing => write!(f, "playing"),
            Phase::GameOver => write!(f, "game-over"),
        }
    }
}

/// Result of resolving one attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed on water.
    Miss,
    /// Attack damaged a ship that is still afloat.
    Hit { ship: ShipId, class: ShipClass },
    /// Attack sank a ship.
    Sunk { ship: ShipId, class: ShipClass },
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackResult::Sunk { .. })
    }

    /// Class of the ship sunk by this attack, if any.
    pub fn sunk_class(&self) -> Option<ShipClass> {
        match self {
            AttackResult::Sunk { class, .. } => Some(*class),
            _ => None,
        }
    }

    pub fn ship(&self) -> Option<ShipId> {
        match self {
            AttackResult::Miss => None,
            AttackResult::Hit { ship, .. } | AttackResult::Sunk { ship, .. } => Some(*ship),
        }
    }
}

/// Errors returned by board, placement, attack and AI operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Position lies outside the board.
    OutOfBounds(Position),
    /// Coordinate text could not be parsed.
    InvalidCoordinate,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps an occupied cell.
    ShipOverlaps,
    /// Cell was already resolved by an earlier attack.
    AlreadyAttacked(Position),
    /// A cell references a ship id missing from the fleet.
    UnknownShipHit(ShipId),
    /// Random placement exhausted its attempts for this class.
    UnableToPlaceShip(ShipClass),
    /// Trap position is off the board, already trapped, or already resolved.
    TrapNotPlaceable(Position),
    /// Every cell of the board has been attacked.
    NoMovesAvailable,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds(pos) => {
                write!(f, "Position ({}, {}) is off the board", pos.row, pos.col)
            }
            BoardError::InvalidCoordinate => {
                write!(f, "Invalid coordinate, expected a letter A-J and a row 1-10")
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyAttacked(pos) => write!(f, "Cell {} was already attacked", pos),
            BoardError::UnknownShipHit(id) => write!(f, "Ship {} not found in fleet", id.0),
            BoardError::UnableToPlaceShip(class) => write!(
                f,
                "Failed to place {} after {} attempts",
                class,
                crate::config::MAX_PLACEMENT_ATTEMPTS
            ),
            BoardError::TrapNotPlaceable(pos) => write!(f, "Cannot place a trap at {}", pos),
            BoardError::NoMovesAvailable => write!(f, "No valid moves available"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Rejections raised by the game controllers. A rejected call never
/// changes game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Operation not allowed in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// Caller attempted to act out of turn.
    NotYourTurn,
    /// Attacks are blocked while the game is paused.
    Paused,
    /// Target board belongs to the attacker's own team.
    FriendlyFire,
    /// This ship class has already been placed.
    AlreadyPlaced(ShipClass),
    /// Ship class cannot be placed through this entry point.
    WrongShipClass(ShipClass),
    /// Board is not one the caller may set up.
    NotAlliedBoard,
    /// The team already placed all of its traps.
    TrapLimitReached,
    /// Setup cannot be confirmed yet.
    SetupIncomplete {
        what: &'static str,
        placed: usize,
        required: usize,
    },
    /// Stats are only available once the game is over.
    NotFinished,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::Board(BoardError::BitBoardError(err))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {}, game is in {}", expected, actual)
            }
            GameError::NotYourTurn => write!(f, "Not your turn"),
            GameError::Paused => write!(f, "Game is paused"),
            GameError::FriendlyFire => write!(f, "Cannot attack your own team's board"),
            GameError::AlreadyPlaced(class) => write!(f, "{} is already placed", class),
            GameError::WrongShipClass(class) => {
                write!(f, "{} cannot be placed here", class)
            }
            GameError::NotAlliedBoard => write!(f, "Board does not belong to the allied team"),
            GameError::TrapLimitReached => write!(f, "All traps have been placed"),
            GameError::SetupIncomplete {
                what,
                placed,
                required,
            } => write!(f, "Must place {} {} ({} placed)", required, what, placed),
            GameError::NotFinished => write!(f, "Game is not over yet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
