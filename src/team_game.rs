//! 2v2 controller: user and buddy against two enemies.
//!
//! Each team attacks in a pass: every member not skipped gets one shot, in
//! seat order. A team loses as soon as all of its special ships are sunk.
//! Bomb traps absorb the first shot on their cell, reveal the area around
//! them and cost the attacker their next turn.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::ai::{self, Difficulty};
use crate::attack::{is_valid_attack, process_attack};
use crate::board::{Board, CellState};
use crate::clock::Clock;
use crate::common::{AttackResult, BoardError, GameError, Phase, Position};
use crate::config::{
    BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, NUM_SPECIAL_SHIPS, SHIPS, SPECIAL_SHIPS,
    TRAPS_PER_TEAM,
};
use crate::moves::{MoveLog, MoveRecord, MoveResult};
use crate::placement::{
    can_place, place_new_ship, place_randomly, place_ships_randomly, place_ships_with_restart,
    rebuild_with,
};
use crate::seat::{Seat, Team};
use crate::ship::{count_sunk, remaining_lengths, Orientation, Ship, ShipClass, ShipId};
use crate::stats::{duration_secs, ActorStats, TeamStats};
use crate::trap::{can_place_trap, count_active, trap_at, BombTrap, TrapId};

/// One board with the fleet on it. Regular and special ships share the
/// fleet; [`ShipClass::is_special`] tells them apart.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Side {
    pub board: Board,
    pub ships: Vec<Ship>,
    /// Cells exposed by traps going off on this board.
    pub revealed: Vec<Position>,
}

impl Side {
    pub fn regular_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| !s.class().is_special())
    }

    pub fn special_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| s.class().is_special())
    }

    fn has_class(&self, class: ShipClass) -> bool {
        self.ships.iter().any(|s| s.class() == class)
    }
}

/// A special ship together with the board it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialShip {
    pub owner: Seat,
    pub ship: Ship,
}

/// A cell exposed by a trap, as the attacker sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealedCell {
    pub position: Position,
    pub occupied: bool,
}

/// What one 2v2 attack did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamAttackOutcome {
    Shot {
        attacker: Seat,
        target: Seat,
        position: Position,
        result: AttackResult,
    },
    Trap {
        attacker: Seat,
        target: Seat,
        position: Position,
        trap: TrapId,
        revealed: Vec<RevealedCell>,
    },
}

impl TeamAttackOutcome {
    pub fn attacker(&self) -> Seat {
        match self {
            TeamAttackOutcome::Shot { attacker, .. } | TeamAttackOutcome::Trap { attacker, .. } => {
                *attacker
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            TeamAttackOutcome::Shot { position, .. } | TeamAttackOutcome::Trap { position, .. } => {
                *position
            }
        }
    }

    pub fn is_trap(&self) -> bool {
        matches!(self, TeamAttackOutcome::Trap { .. })
    }
}

/// Serializable state of a 2v2 game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamGameState {
    pub phase: Phase,
    pub turn_phase: Team,
    /// Indexed by [`Seat::index`].
    pub sides: [Side; 4],
    pub allied_traps: Vec<BombTrap>,
    pub enemy_traps: Vec<BombTrap>,
    /// Seats that lose their next scheduled attack.
    pub skipped: Vec<Seat>,
    /// Seats still due to attack in the current pass, in order.
    pub pending: Vec<Seat>,
    pub moves: MoveLog<Seat>,
    pub winner: Option<Team>,
    pub started_at_ms: Option<u64>,
    pub ended_at_ms: Option<u64>,
}

impl Default for TeamGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamGameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Placement,
            turn_phase: Team::Allies,
            sides: Default::default(),
            allied_traps: Vec::new(),
            enemy_traps: Vec::new(),
            skipped: Vec::new(),
            pending: Vec::new(),
            moves: MoveLog::new(),
            winner: None,
            started_at_ms: None,
            ended_at_ms: None,
        }
    }

    pub fn side(&self, seat: Seat) -> &Side {
        &self.sides[seat.index()]
    }

    fn side_mut(&mut self, seat: Seat) -> &mut Side {
        &mut self.sides[seat.index()]
    }

    pub fn traps(&self, team: Team) -> &[BombTrap] {
        match team {
            Team::Allies => &self.allied_traps,
            Team::Enemies => &self.enemy_traps,
        }
    }

    fn traps_mut(&mut self, team: Team) -> &mut Vec<BombTrap> {
        match team {
            Team::Allies => &mut self.allied_traps,
            Team::Enemies => &mut self.enemy_traps,
        }
    }

    /// Special ships of `team`, tagged with their board.
    pub fn special_ships(&self, team: Team) -> Vec<SpecialShip> {
        team.seats()
            .into_iter()
            .flat_map(|owner| {
                self.side(owner)
                    .special_ships()
                    .map(move |ship| SpecialShip { owner, ship: *ship })
            })
            .collect()
    }

    pub fn unsunk_special_ships(&self, team: Team) -> Vec<SpecialShip> {
        self.special_ships(team)
            .into_iter()
            .filter(|s| !s.ship.is_sunk())
            .collect()
    }

    /// Regular ships of `team`, tagged with their board.
    pub fn regular_ships(&self, team: Team) -> Vec<(Seat, Ship)> {
        team.seats()
            .into_iter()
            .flat_map(|owner| self.side(owner).regular_ships().map(move |s| (owner, *s)))
            .collect()
    }

    /// `true` once the team has specials and every one of them is sunk.
    pub fn specials_lost(&self, team: Team) -> bool {
        let specials = self.special_ships(team);
        !specials.is_empty() && specials.iter().all(|s| s.ship.is_sunk())
    }

    pub fn is_skipped(&self, seat: Seat) -> bool {
        self.skipped.contains(&seat)
    }
}

/// Game controller for the 2v2 variant.
pub struct TeamGame {
    state: TeamGameState,
    difficulty: Difficulty,
    paused: bool,
    rng: SmallRng,
    clock: Box<dyn Clock>,
}

impl TeamGame {
    pub fn with_parts(difficulty: Difficulty, rng: SmallRng, clock: Box<dyn Clock>) -> Self {
        Self::restore_with(TeamGameState::new(), difficulty, rng, clock)
    }

    pub fn restore_with(
        state: TeamGameState,
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
    pub fn restore(state: TeamGameState, difficulty: Difficulty, seed: u64) -> Self {
        use rand::SeedableRng;
        Self::restore_with(
            state,
            difficulty,
            SmallRng::seed_from_u64(seed),
            Box::new(crate::clock::SystemClock),
        )
    }

    pub fn state(&self) -> &TeamGameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn turn_phase(&self) -> Team {
        self.state.turn_phase
    }

    pub fn winner(&self) -> Option<Team> {
        self.state.winner
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

    pub fn moves(&self) -> &[MoveRecord<Seat>] {
        self.state.moves.records()
    }

    /// Seat due to attack next, or `None` outside of play.
    pub fn next_actor(&self) -> Option<Seat> {
        if self.state.phase != Phase::Playing {
            return None;
        }
        self.state.pending.first().copied()
    }

    pub fn view_of(&self, seat: Seat) -> Board {
        self.state.side(seat).board.fog_view()
    }

    pub fn reset(&mut self) {
        self.state = TeamGameState::new();
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
        if class.is_special() {
            return Err(GameError::WrongShipClass(class));
        }
        let side = self.state.side_mut(Seat::User);
        if side.has_class(class) {
            return Err(GameError::AlreadyPlaced(class));
        }
        Ok(place_new_ship(
            &mut side.board,
            &mut side.ships,
            class,
            origin,
            orientation,
        )?)
    }

    /// Replace the user's regular fleet with a random layout. Special ships
    /// already on the user's board stay where they are.
    pub fn randomize_placement(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let side = self.state.side(Seat::User);
        let specials: Vec<Ship> = side.special_ships().copied().collect();
        let (base, base_ships) = rebuild_with(&specials);
        let (board, ships) = place_ships_with_restart(&mut self.rng, &base, &base_ships, &SHIPS);
        let side = self.state.side_mut(Seat::User);
        side.board = board;
        side.ships = ships;
        Ok(())
    }

    /// Place a special ship on the user's or the buddy's board.
    pub fn place_special_ship(
        &mut self,
        owner: Seat,
        class: ShipClass,
        origin: Position,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        self.expect_phase(Phase::Placement)?;
        if owner.team() != Team::Allies {
            return Err(GameError::NotAlliedBoard);
        }
        if !class.is_special() {
            return Err(GameError::WrongShipClass(class));
        }
        if self
            .state
            .special_ships(Team::Allies)
            .iter()
            .any(|s| s.ship.class() == class)
        {
            return Err(GameError::AlreadyPlaced(class));
        }
        let side = self.state.side_mut(owner);
        let id = place_new_ship(&mut side.board, &mut side.ships, class, origin, orientation)?;
        debug!("{} placed on {}'s board at {}", class, owner, origin);
        Ok(id)
    }

    /// Put one of the allied traps on the user's or the buddy's board.
    pub fn place_trap(&mut self, owner: Seat, pos: Position) -> Result<TrapId, GameError> {
        self.expect_phase(Phase::Placement)?;
        if owner.team() != Team::Allies {
            return Err(GameError::NotAlliedBoard);
        }
        if self.state.allied_traps.len() >= TRAPS_PER_TEAM {
            return Err(GameError::TrapLimitReached);
        }
        let board = &self.state.side(owner).board;
        if !can_place_trap(board, &self.state.allied_traps, owner, pos) {
            return Err(BoardError::TrapNotPlaceable(pos).into());
        }
        let id = TrapId(self.state.allied_traps.len());
        self.state.allied_traps.push(BombTrap::new(id, owner, pos));
        Ok(id)
    }

    /// Fill in whatever allied setup is still missing at random: the user's
    /// regular fleet, the special ships and the traps.
    pub fn auto_setup(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        if self.state.side(Seat::User).regular_ships().count() < NUM_SHIPS {
            self.randomize_placement()?;
        }
        for class in SPECIAL_SHIPS {
            if self
                .state
                .special_ships(Team::Allies)
                .iter()
                .any(|s| s.ship.class() == class)
            {
                continue;
            }
            self.place_special_randomly(class)?;
        }
        while self.state.allied_traps.len() < TRAPS_PER_TEAM {
            let owner = self.random_seat(Team::Allies);
            let pos = random_position(&mut self.rng);
            match self.place_trap(owner, pos) {
                // occupied spots are simply redrawn
                Ok(_) | Err(GameError::Board(BoardError::TrapNotPlaceable(_))) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Start play once the allies have 5 regular ships, 3 special ships
    /// and 3 traps. The buddy's fleet and the whole enemy team are placed
    /// here; if enemy placement fails nothing changes.
    pub fn confirm_setup(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let user = self.state.side(Seat::User);
        let regular = user.regular_ships().count();
        if regular != NUM_SHIPS || !SHIPS.iter().all(|c| user.has_class(*c)) {
            return Err(GameError::SetupIncomplete {
                what: "regular ships",
                placed: regular,
                required: NUM_SHIPS,
            });
        }
        let specials = self.state.special_ships(Team::Allies).len();
        if specials != NUM_SPECIAL_SHIPS {
            return Err(GameError::SetupIncomplete {
                what: "special ships",
                placed: specials,
                required: NUM_SPECIAL_SHIPS,
            });
        }
        let traps = self.state.allied_traps.len();
        if traps != TRAPS_PER_TEAM {
            return Err(GameError::SetupIncomplete {
                what: "traps",
                placed: traps,
                required: TRAPS_PER_TEAM,
            });
        }

        let buddy = self.state.side(Seat::Buddy);
        let (buddy_board, buddy_ships) =
            place_ships_with_restart(&mut self.rng, &buddy.board, &buddy.ships, &SHIPS);
        let (enemy1, enemy2, enemy_traps) = self.enemy_setup()?;

        let buddy = self.state.side_mut(Seat::Buddy);
        buddy.board = buddy_board;
        buddy.ships = buddy_ships;
        *self.state.side_mut(Seat::Enemy1) = enemy1;
        *self.state.side_mut(Seat::Enemy2) = enemy2;
        self.state.enemy_traps = enemy_traps;
        self.state.phase = Phase::Playing;
        self.state.started_at_ms = Some(self.clock.now_ms());
        self.begin_pass(Team::Allies);
        info!("2v2 setup confirmed, game started ({} AI)", self.difficulty);
        Ok(())
    }

    /// Fire `attacker`'s shot at `target`'s board.
    pub fn attack(
        &mut self,
        attacker: Seat,
        target: Seat,
        pos: Position,
    ) -> Result<TeamAttackOutcome, GameError> {
        self.check_gates(attacker, target)?;
        if self.state.pending.first() != Some(&attacker) {
            return Err(GameError::NotYourTurn);
        }
        self.check_cell(target, pos)?;

        let defending = target.team();
        let now = self.clock.now_ms();
        let outcome = match trap_at(self.state.traps(defending), target, pos) {
            Some(trap) => self.spring_trap(attacker, target, pos, trap, now),
            None => {
                let side = self.state.side_mut(target);
                let result = process_attack(&mut side.board, &mut side.ships, pos)?;
                self.state
                    .moves
                    .push(attacker, target, pos, result.into(), result.sunk_class(), now);
                debug!("{} fires at {}'s {}: {:?}", attacker, target, pos, result);
                TeamAttackOutcome::Shot {
                    attacker,
                    target,
                    position: pos,
                    result,
                }
            }
        };

        self.state.pending.retain(|s| *s != attacker);
        if self.state.specials_lost(defending) {
            self.finish(defending.opponent());
            info!(
                "{} win after {} moves",
                defending.opponent(),
                self.state.moves.len()
            );
        } else if self.state.pending.is_empty() {
            self.begin_pass(attacker.team().opponent());
        }
        Ok(outcome)
    }

    /// Let the AI play the next seat's shot, whoever it is. The target
    /// board is picked at random among opposing boards with cells left.
    pub fn play_auto(&mut self) -> Result<TeamAttackOutcome, GameError> {
        if self.paused {
            return Err(GameError::Paused);
        }
        self.expect_phase(Phase::Playing)?;
        let attacker = self.next_actor().ok_or(GameError::NotYourTurn)?;
        let targets: Vec<Seat> = attacker
            .team()
            .opponent()
            .seats()
            .into_iter()
            .filter(|s| !self.state.side(*s).board.untargeted().is_empty())
            .collect();
        if targets.is_empty() {
            return Err(BoardError::NoMovesAvailable.into());
        }
        let target = targets[self.rng.random_range(0..targets.len())];
        let view = self.view_of(target);
        let remaining = remaining_lengths(&self.state.side(target).ships);
        let pos = ai::choose_move(self.difficulty, &view, &remaining, &mut self.rng)?;
        self.attack(attacker, target, pos)
    }

    /// Play automated seats until the user is due or the game ends.
    pub fn play_until_user(&mut self) -> Result<Vec<TeamAttackOutcome>, GameError> {
        let mut outcomes = Vec::new();
        while let Some(seat) = self.next_actor() {
            if seat == Seat::User {
                break;
            }
            outcomes.push(self.play_auto()?);
        }
        Ok(outcomes)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Concede for the allies; the enemies win. Only a game in play can be
    /// conceded.
    pub fn surrender(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Playing)?;
        self.finish(Team::Enemies);
        info!("allies surrendered");
        Ok(())
    }

    pub fn stats(&self) -> Result<TeamStats, GameError> {
        if self.state.phase != Phase::GameOver {
            return Err(GameError::NotFinished);
        }
        let moves = self.state.moves.records();
        let sunk = |team: Team| -> usize {
            team.seats()
                .iter()
                .map(|s| count_sunk(&self.state.side(*s).ships))
                .sum()
        };
        let specials_sunk = |team: Team| -> usize {
            self.state
                .special_ships(team)
                .iter()
                .filter(|s| s.ship.is_sunk())
                .count()
        };
        Ok(TeamStats {
            duration_secs: duration_secs(self.state.started_at_ms, self.state.ended_at_ms),
            total_moves: moves.len(),
            allies: ActorStats::from_moves(moves, |s| s.team() == Team::Allies),
            enemies: ActorStats::from_moves(moves, |s| s.team() == Team::Enemies),
            enemy_ships_sunk: sunk(Team::Enemies),
            allied_ships_sunk: sunk(Team::Allies),
            enemy_specials_sunk: specials_sunk(Team::Enemies),
            allied_specials_sunk: specials_sunk(Team::Allies),
        })
    }

    /// Traps of `team` that have not gone off yet.
    pub fn active_traps(&self, team: Team) -> usize {
        count_active(self.state.traps(team))
    }

    /// Every check [`TeamGame::attack`] makes except whose turn it is.
    pub fn check_target(
        &self,
        attacker: Seat,
        target: Seat,
        pos: Position,
    ) -> Result<(), GameError> {
        self.check_gates(attacker, target)?;
        self.check_cell(target, pos)
    }

    fn check_gates(&self, attacker: Seat, target: Seat) -> Result<(), GameError> {
        if attacker.is_ally_of(target) {
            return Err(GameError::FriendlyFire);
        }
        if self.paused {
            return Err(GameError::Paused);
        }
        self.expect_phase(Phase::Playing)
    }

    fn check_cell(&self, target: Seat, pos: Position) -> Result<(), GameError> {
        if !pos.is_valid() {
            return Err(BoardError::OutOfBounds(pos).into());
        }
        if !is_valid_attack(&self.state.side(target).board, pos) {
            return Err(BoardError::AlreadyAttacked(pos).into());
        }
        Ok(())
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

    fn spring_trap(
        &mut self,
        attacker: Seat,
        target: Seat,
        pos: Position,
        trap: TrapId,
        now: u64,
    ) -> TeamAttackOutcome {
        let traps = self.state.traps_mut(target.team());
        let area = match traps.get_mut(trap.0) {
            Some(t) => {
                t.trigger();
                t.reveal_area()
            }
            None => Vec::new(),
        };
        let side = self.state.side_mut(target);
        let revealed: Vec<RevealedCell> = area
            .iter()
            .map(|p| RevealedCell {
                position: *p,
                occupied: side.board.get(*p).is_some_and(|c| c.ship().is_some()),
            })
            .collect();
        for p in area {
            if !side.revealed.contains(&p) {
                side.revealed.push(p);
            }
        }
        if !self.state.skipped.contains(&attacker) {
            self.state.skipped.push(attacker);
        }
        self.state
            .moves
            .push(attacker, target, pos, MoveResult::Trap, None, now);
        info!("{} hit a trap on {}'s board at {}", attacker, target, pos);
        TeamAttackOutcome::Trap {
            attacker,
            target,
            position: pos,
            trap,
            revealed,
        }
    }

    // Skipped members are bypassed (and their flag cleared); a team with
    // nobody left to shoot hands the turn straight over.
    fn begin_pass(&mut self, team: Team) {
        let mut team = team;
        loop {
            let mut pending = Vec::with_capacity(2);
            for seat in team.seats() {
                if let Some(i) = self.state.skipped.iter().position(|s| *s == seat) {
                    self.state.skipped.remove(i);
                    debug!("{} skips this turn", seat);
                } else {
                    pending.push(seat);
                }
            }
            self.state.turn_phase = team;
            if !pending.is_empty() {
                self.state.pending = pending;
                return;
            }
            warn!("every {} member is skipped, passing the turn", team);
            team = team.opponent();
        }
    }

    fn finish(&mut self, winner: Team) {
        self.state.phase = Phase::GameOver;
        self.state.winner = Some(winner);
        self.state.pending.clear();
        self.state.ended_at_ms = Some(self.clock.now_ms());
    }

    fn random_seat(&mut self, team: Team) -> Seat {
        team.seats()[self.rng.random_range(0..2)]
    }

    fn place_special_randomly(&mut self, class: ShipClass) -> Result<(), GameError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let owner = self.random_seat(Team::Allies);
            let (origin, orientation) = crate::placement::random_origin(&mut self.rng);
            if can_place(&self.state.side(owner).board, origin, class.length(), orientation) {
                self.place_special_ship(owner, class, origin, orientation)?;
                return Ok(());
            }
        }
        Err(BoardError::UnableToPlaceShip(class).into())
    }

    // Enemy fleets go onto scratch sides so a failure leaves no trace.
    fn enemy_setup(&mut self) -> Result<(Side, Side, Vec<BombTrap>), GameError> {
        let mut sides = [Side::default(), Side::default()];
        for side in sides.iter_mut() {
            place_ships_randomly(&mut self.rng, &mut side.board, &mut side.ships, &SHIPS)?;
        }
        for class in SPECIAL_SHIPS {
            let side = &mut sides[self.rng.random_range(0..2)];
            place_randomly(&mut self.rng, &mut side.board, &mut side.ships, class)?;
        }

        let mut traps: Vec<BombTrap> = Vec::with_capacity(TRAPS_PER_TEAM);
        while traps.len() < TRAPS_PER_TEAM {
            let mut last_tried = None;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let i = self.rng.random_range(0..2);
                let owner = Team::Enemies.seats()[i];
                let pos = random_position(&mut self.rng);
                if can_place_trap(&sides[i].board, &traps, owner, pos) {
                    traps.push(BombTrap::new(TrapId(traps.len()), owner, pos));
                    last_tried = None;
                    break;
                }
                last_tried = Some(pos);
            }
            if let Some(pos) = last_tried {
                return Err(BoardError::TrapNotPlaceable(pos).into());
            }
        }

        let [enemy1, enemy2] = sides;
        Ok((enemy1, enemy2, traps))
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    )
}

/// Cells of `seat`'s board the attacker has seen through traps but not
/// attacked yet, with ship presence.
pub fn revealed_intel(state: &TeamGameState, seat: Seat) -> Vec<RevealedCell> {
    let side = state.side(seat);
    side.revealed
        .iter()
        .filter(|p| side.board.is_untargeted(**p))
        .map(|p| RevealedCell {
            position: *p,
            occupied: side.board.state(*p) == Some(CellState::Ship),
        })
        .collect()
}
