//! 1v1 controller: the user against one AI opponent.
//!
//! `Game` is the sole writer of its [`GameState`]. Entry points validate
//! first and mutate second, so a rejected call leaves the state untouched.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::ai::{self, Difficulty};
use crate::attack::{is_valid_attack, process_attack};
use crate::board::Board;
use crate::clock::Clock;
use crate::common::{AttackResult, BoardError, GameError, Phase, Position};
use crate::config::{NUM_SHIPS, SHIPS};
use crate::moves::{MoveLog, MoveRecord};
use crate::placement::{place_new_ship, place_player_ships_randomly, place_ships_randomly};
use crate::ship::{all_sunk, count_sunk, remaining_lengths, Orientation, Ship, ShipClass, ShipId};
use crate::stats::{duration_secs, ActorStats, GameStats};

/// Participant in a 1v1 game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    User,
    Ai,
}

impl Actor {
    pub fn opponent(self) -> Actor {
        match self {
            Actor::User => Actor::Ai,
            Actor::Ai => Actor::User,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::User => write!(f, "user"),
            Actor::Ai => write!(f, "ai"),
        }
    }
}

/// Serializable state of a 1v1 game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,
    pub turn: Actor,
    pub user_board: Board,
    pub ai_board: Board,
    pub user_ships: Vec<Ship>,
    pub ai_ships: Vec<Ship>,
    pub moves: MoveLog<Actor>,
    pub winner: Option<Actor>,
    pub started_at_ms: Option<u64>,
    pub ended_at_ms: Option<u64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game in the placement phase with the user to move first.
    pub fn new() -> Self {
        Self {
            phase: Phase::Placement,
            turn: Actor::User,
            user_board: Board::new(),
            ai_board: Board::new(),
            user_ships: Vec::new(),
            ai_ships: Vec::new(),
            moves: MoveLog::new(),
            winner: None,
            started_at_ms: None,
            ended_at_ms: None,
        }
    }

    pub fn board(&self, owner: Actor) -> &Board {
        match owner {
            Actor::User => &self.user_board,
            Actor::Ai => &self.ai_board,
        }
    }

    pub fn ships(&self, owner: Actor) -> &[Ship] {
        match owner {
            Actor::User => &self.user_ships,
            Actor::Ai => &self.ai_ships,
        }
    }

    fn side_mut(&mut self, owner: Actor) -> (&mut Board, &mut Vec<Ship>) {
        match owner {
            Actor::User => (&mut self.user_board, &mut self.user_ships),
            Actor::Ai => (&mut self.ai_board, &mut self.ai_ships),
        }
    }
}

/// Game controller owning state, difficulty, pause flag, RNG and clock.
pub struct Game {
    state: GameState,
    difficulty: Difficulty,
    paused: bool,
    rng: SmallRng,
    clock: Box<dyn Clock>,
}

impl Game {
    /// Build a controller from explicit parts; the only constructor
    /// available without `std`.
    pub fn with_parts(difficulty: Difficulty, rng: SmallRng, clock: Box<dyn Clock>) -> Self {
        Self::restore_with(GameState::new(), difficulty, rng, clock)
    }

    /// Resume a controller around a previously saved state.
    pub fn restore_with(
        state: GameState,
        difficulty: Difficulty,
        rng: SmallRng,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            state,
            difficulty,
            paused: false,
            rng,
            clock,
        }
    }

    /// New game with a fixed seed; identical inputs replay identically.
    #[cfg(feature = "std")]
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        use rand::SeedableRng;
        Self::with_parts(
            difficulty,
            SmallRng::seed_from_u64(seed),
            Box::new(crate::clock::SystemClock),
        )
    }

    #[cfg(feature = "std")]
    pub fn restore(state: GameState, difficulty: Difficulty, seed: u64) -> Self {
        use rand::SeedableRng;
        Self::restore_with(
            state,
            difficulty,
            SmallRng::seed_from_u64(seed),
            Box::new(crate::clock::SystemClock),
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn turn(&self) -> Actor {
        self.state.turn
    }

    pub fn winner(&self) -> Option<Actor> {
        self.state.winner
    }

    pub fn moves(&self) -> &[MoveRecord<Actor>] {
        self.state.moves.records()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fog-of-war view of `owner`'s board, as the other side sees it.
    pub fn view_of(&self, owner: Actor) -> Board {
        self.state.board(owner).fog_view()
    }

    /// Lengths of `owner`'s ships still afloat.
    pub fn remaining_lengths(&self, owner: Actor) -> Vec<usize> {
        remaining_lengths(self.state.ships(owner))
    }

    /// Throw the current game away and start over in placement.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.paused = false;
    }

    /// Manually place one of the user's regular ships.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        origin: Position,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        self.expect_phase(Phase::Placement)?;
        if !SHIPS.contains(&class) {
            return Err(GameError::WrongShipClass(class));
        }
        if self.state.user_ships.iter().any(|s| s.class() == class) {
            return Err(GameError::AlreadyPlaced(class));
        }
        let id = place_new_ship(
            &mut self.state.user_board,
            &mut self.state.user_ships,
            class,
            origin,
            orientation,
        )?;
        debug!("user placed {} at {} {:?}", class, origin, orientation);
        Ok(id)
    }

    /// Replace the user's fleet with a complete random layout.
    pub fn randomize_placement(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let (board, ships) = place_player_ships_randomly(&mut self.rng, &SHIPS);
        self.state.user_board = board;
        self.state.user_ships = ships;
        Ok(())
    }

    /// Start play once the user's fleet is complete. The AI fleet is placed
    /// here; if that fails the game stays in placement.
    pub fn confirm_placement(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let placed = self.state.user_ships.len();
        let covered = SHIPS
            .iter()
            .all(|c| self.state.user_ships.iter().any(|s| s.class() == *c));
        if placed != NUM_SHIPS || !covered {
            return Err(GameError::SetupIncomplete {
                what: "regular ships",
                placed,
                required: NUM_SHIPS,
            });
        }

        let mut ai_board = Board::new();
        let mut ai_ships = Vec::with_capacity(NUM_SHIPS);
        place_ships_randomly(&mut self.rng, &mut ai_board, &mut ai_ships, &SHIPS)?;

        self.state.ai_board = ai_board;
        self.state.ai_ships = ai_ships;
        self.state.phase = Phase::Playing;
        self.state.turn = Actor::User;
        self.state.started_at_ms = Some(self.clock.now_ms());
        info!("placement confirmed, game started ({} AI)", self.difficulty);
        Ok(())
    }

    /// The user's shot at the AI board.
    pub fn user_attack(&mut self, pos: Position) -> Result<AttackResult, GameError> {
        self.resolve(Actor::User, pos)
    }

    /// Let the AI pick and fire its shot. Only valid on the AI's turn.
    pub fn ai_attack(&mut self) -> Result<(Position, AttackResult), GameError> {
        self.check_can_attack(Actor::Ai)?;
        let view = self.view_of(Actor::User);
        let remaining = self.remaining_lengths(Actor::User);
        let pos = ai::choose_move(self.difficulty, &view, &remaining, &mut self.rng)?;
        let result = self.resolve(Actor::Ai, pos)?;
        Ok((pos, result))
    }

    /// Block new attacks. A pending AI reply stays pending.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Concede: the AI wins immediately regardless of the boards. Rejected
    /// before play starts and after it ends.
    pub fn surrender(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Playing)?;
        self.finish(Actor::Ai);
        info!("user surrendered");
        Ok(())
    }

    /// Derived statistics; only available once the game is over.
    pub fn stats(&self) -> Result<GameStats, GameError> {
        if self.state.phase != Phase::GameOver {
            return Err(GameError::NotFinished);
        }
        let moves = self.state.moves.records();
        Ok(GameStats {
            duration_secs: duration_secs(self.state.started_at_ms, self.state.ended_at_ms),
            total_moves: moves.len(),
            user: ActorStats::from_moves(moves, |a| *a == Actor::User),
            ai: ActorStats::from_moves(moves, |a| *a == Actor::Ai),
            user_ships_sunk: count_sunk(&self.state.ai_ships),
            ai_ships_sunk: count_sunk(&self.state.user_ships),
        })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.state.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }

    fn check_can_attack(&self, actor: Actor) -> Result<(), GameError> {
        if self.paused {
            return Err(GameError::Paused);
        }
        self.expect_phase(Phase::Playing)?;
        if self.state.turn != actor {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    // validate -> mutate -> log -> check win on the defender -> flip turn
    fn resolve(&mut self, actor: Actor, pos: Position) -> Result<AttackResult, GameError> {
        self.check_can_attack(actor)?;
        let defender = actor.opponent();
        if !pos.is_valid() {
            return Err(BoardError::OutOfBounds(pos).into());
        }
        if !is_valid_attack(self.state.board(defender), pos) {
            return Err(BoardError::AlreadyAttacked(pos).into());
        }

        let (board, ships) = self.state.side_mut(defender);
        let result = process_attack(board, ships, pos)?;
        let now = self.clock.now_ms();
        self.state
            .moves
            .push(actor, defender, pos, result.into(), result.sunk_class(), now);
        debug!("{} fires at {}: {:?}", actor, pos, result);

        if all_sunk(self.state.ships(defender)) {
            self.finish(actor);
            info!("{} wins after {} moves", actor, self.state.moves.len());
        } else {
            self.state.turn = defender;
        }
        Ok(result)
    }

    fn finish(&mut self, winner: Actor) {
        self.state.phase = Phase::GameOver;
        self.state.winner = Some(winner);
        self.state.ended_at_ms = Some(self.clock.now_ms());
    }
}
