#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod attack;
mod bitboard;
mod board;
mod clock;
mod common;
mod config;
mod game;
mod moves;
mod placement;
mod seat;
mod ship;
mod stats;
mod team_game;
mod trap;
#[cfg(feature = "std")]
mod api;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod snapshot;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use ai::*;
pub use attack::*;
pub use bitboard::{BitBoard, BitBoardError, Mask};
pub use board::*;
pub use clock::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use moves::*;
pub use placement::*;
pub use seat::*;
pub use ship::*;
pub use stats::*;
pub use team_game::*;
pub use trap::*;
#[cfg(feature = "std")]
pub use api::GameApi;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use session::*;
