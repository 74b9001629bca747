#![cfg(feature = "std")]

//! Async entry points a hosting layer drives a game through.

use crate::common::{Phase, Position};
use crate::seat::Seat;
use crate::session::{Exchange, PauseHandle, Session, TeamSession};
use crate::team_game::TeamAttackOutcome;

#[async_trait::async_trait]
pub trait GameApi: Send {
    /// What the user aims at.
    type Target: Send + 'static;
    /// Everything that happened in response to one user attack.
    type Report: Send;

    async fn attack(&mut self, target: Self::Target) -> anyhow::Result<Self::Report>;
    fn phase(&self) -> Phase;
    fn pause_handle(&self) -> PauseHandle;
    fn surrender(&mut self) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl GameApi for Session {
    type Target = Position;
    type Report = Exchange;

    async fn attack(&mut self, target: Position) -> anyhow::Result<Exchange> {
        Session::attack(self, target).await
    }

    fn phase(&self) -> Phase {
        self.game().phase()
    }

    fn pause_handle(&self) -> PauseHandle {
        Session::pause_handle(self)
    }

    fn surrender(&mut self) -> anyhow::Result<()> {
        Session::surrender(self)
    }
}

#[async_trait::async_trait]
impl GameApi for TeamSession {
    type Target = (Seat, Position);
    type Report = Vec<TeamAttackOutcome>;

    async fn attack(&mut self, target: (Seat, Position)) -> anyhow::Result<Self::Report> {
        let (seat, pos) = target;
        self.play_round(seat, pos).await
    }

    fn phase(&self) -> Phase {
        self.game().phase()
    }

    fn pause_handle(&self) -> PauseHandle {
        TeamSession::pause_handle(self)
    }

    fn surrender(&mut self) -> anyhow::Result<()> {
        TeamSession::surrender(self)
    }
}
