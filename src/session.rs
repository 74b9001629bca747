#![cfg(feature = "std")]

//! Paced sessions around the game controllers.
//!
//! A session applies the user's attack, waits the opponent's think time and
//! then applies the response. The wait is cosmetic: the controller's turn
//! flag already refuses a second user attack while the response is pending.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;

use crate::common::{AttackResult, GameError, Phase, Position};
use crate::config::{AI_THINK_MS, BUDDY_THINK_MS, ENEMY_THINK_MS};
use crate::game::{Actor, Game};
use crate::seat::Seat;
use crate::team_game::{TeamAttackOutcome, TeamGame};

/// Shared pause switch. Clones control the same session.
#[derive(Debug, Clone)]
pub struct PauseHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for PauseHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn pause(&self) {
        self.tx.send_replace(true);
    }

    pub fn resume(&self) {
        self.tx.send_replace(false);
    }

    pub fn is_paused(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Waits out a think time, then blocks for as long as the handle is paused.
struct Pacer {
    handle: PauseHandle,
    rx: watch::Receiver<bool>,
}

impl Pacer {
    fn new() -> Self {
        let handle = PauseHandle::new();
        let rx = handle.subscribe();
        Self { handle, rx }
    }

    async fn wait(&mut self, think: Duration) -> anyhow::Result<()> {
        if !think.is_zero() {
            tokio::time::sleep(think).await;
        }
        self.rx.wait_for(|paused| !*paused).await?;
        Ok(())
    }
}

/// Result of one user attack and the AI's reply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Exchange {
    /// Reply owed from an earlier exchange that was dropped mid-wait.
    #[serde(default)]
    pub overdue: Option<(Position, AttackResult)>,
    pub user: AttackResult,
    /// `None` when the user's shot ended the game.
    pub reply: Option<(Position, AttackResult)>,
}

/// 1v1 session: the user against the AI.
pub struct Session {
    game: Game,
    think_time: Duration,
    pacer: Pacer,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            think_time: Duration::from_millis(AI_THINK_MS),
            pacer: Pacer::new(),
        }
    }

    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Setup access. Attacks should go through [`Session::attack`].
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    pub fn pause_handle(&self) -> PauseHandle {
        self.pacer.handle.clone()
    }

    /// Fire at `pos`, then let the AI answer once its think time is up and
    /// the session is not paused. A reply still owed from an interrupted
    /// call is delivered before the shot.
    pub async fn attack(&mut self, pos: Position) -> anyhow::Result<Exchange> {
        let overdue = self.resume_pending().await?;
        self.sync_pause();
        let user = self.game.user_attack(pos)?;
        let reply = self.resume_pending().await?;
        Ok(Exchange {
            overdue,
            user,
            reply,
        })
    }

    /// Apply the AI's reply if it is the AI's turn. `None` when nothing is
    /// owed.
    pub async fn resume_pending(&mut self) -> anyhow::Result<Option<(Position, AttackResult)>> {
        if self.game.phase() != Phase::Playing || self.game.turn() != Actor::Ai {
            return Ok(None);
        }
        self.pacer.wait(self.think_time).await?;
        self.sync_pause();
        let (at, result) = self.game.ai_attack()?;
        debug!("AI answered {} with {:?}", at, result);
        Ok(Some((at, result)))
    }

    pub fn surrender(&mut self) -> anyhow::Result<()> {
        Ok(self.game.surrender()?)
    }

    fn sync_pause(&mut self) {
        if self.pacer.handle.is_paused() {
            self.game.pause();
        } else {
            self.game.resume();
        }
    }
}

/// The user's shot in [`TeamSession::play_round`] was refused after
/// automated seats had already played.
#[derive(Debug)]
pub struct RoundError {
    /// Outcomes that were applied before the refusal.
    pub applied: Vec<TeamAttackOutcome>,
    pub source: GameError,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (after {} automated attacks)",
            self.source,
            self.applied.len()
        )
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// 2v2 session: the user plays, everyone else is automated.
pub struct TeamSession {
    game: TeamGame,
    buddy_think: Duration,
    enemy_think: Duration,
    pacer: Pacer,
}

impl TeamSession {
    pub fn new(game: TeamGame) -> Self {
        Self {
            game,
            buddy_think: Duration::from_millis(BUDDY_THINK_MS),
            enemy_think: Duration::from_millis(ENEMY_THINK_MS),
            pacer: Pacer::new(),
        }
    }

    /// Use the same think time for every automated seat.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.buddy_think = think_time;
        self.enemy_think = think_time;
        self
    }

    pub fn game(&self) -> &TeamGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut TeamGame {
        &mut self.game
    }

    pub fn into_game(self) -> TeamGame {
        self.game
    }

    pub fn pause_handle(&self) -> PauseHandle {
        self.pacer.handle.clone()
    }

    /// The user's shot at `target`, followed by every automated seat up to
    /// the user's next turn. Automated seats due first (the user was
    /// skipped) play before the shot.
    ///
    /// A shot that can be refused up front is refused before anyone plays.
    /// If it is refused only after automated seats played (a teammate took
    /// the cell), the error is a [`RoundError`] carrying their outcomes.
    pub async fn play_round(
        &mut self,
        target: Seat,
        pos: Position,
    ) -> anyhow::Result<Vec<TeamAttackOutcome>> {
        self.sync_pause();
        self.game.check_target(Seat::User, target, pos)?;
        let mut outcomes = self.advance().await?;
        if self.game.phase() != Phase::Playing {
            return Ok(outcomes);
        }
        self.sync_pause();
        match self.game.attack(Seat::User, target, pos) {
            Ok(outcome) => outcomes.push(outcome),
            Err(source) => {
                return Err(RoundError {
                    applied: outcomes,
                    source,
                }
                .into())
            }
        }
        outcomes.extend(self.advance().await?);
        Ok(outcomes)
    }

    /// Play automated seats until the user is due or the game ends.
    pub async fn advance(&mut self) -> anyhow::Result<Vec<TeamAttackOutcome>> {
        let mut outcomes = Vec::new();
        while let Some(seat) = self.game.next_actor() {
            if seat == Seat::User {
                break;
            }
            outcomes.push(self.step().await?);
        }
        Ok(outcomes)
    }

    /// Let the AI play whichever seat is due, the user's included.
    pub async fn step(&mut self) -> anyhow::Result<TeamAttackOutcome> {
        let think = match self.game.next_actor() {
            Some(Seat::User) | None => Duration::ZERO,
            Some(Seat::Buddy) => self.buddy_think,
            Some(_) => self.enemy_think,
        };
        self.pacer.wait(think).await?;
        self.sync_pause();
        Ok(self.game.play_auto()?)
    }

    pub fn surrender(&mut self) -> anyhow::Result<()> {
        Ok(self.game.surrender()?)
    }

    fn sync_pause(&mut self) {
        if self.pacer.handle.is_paused() {
            self.game.pause();
        } else {
            self.game.resume();
        }
    }
}
