//! Post-game statistics, derived from the move log on demand.

use crate::moves::{MoveRecord, MoveResult};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStats {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub traps_triggered: usize,
    /// `hits / (hits + misses)` as a percentage; 0 when nothing landed.
    pub accuracy: f64,
}

impl ActorStats {
    /// Tally the moves whose actor satisfies `is_actor`.
    pub fn from_moves<A>(moves: &[MoveRecord<A>], is_actor: impl Fn(&A) -> bool) -> Self {
        let mut stats = ActorStats::default();
        for m in moves.iter().filter(|m| is_actor(&m.actor)) {
            stats.shots += 1;
            match m.result {
                MoveResult::Hit | MoveResult::Sunk => stats.hits += 1,
                MoveResult::Miss => stats.misses += 1,
                MoveResult::Trap => stats.traps_triggered += 1,
            }
        }
        let resolved = stats.hits + stats.misses;
        if resolved > 0 {
            stats.accuracy = stats.hits as f64 / resolved as f64 * 100.0;
        }
        stats
    }
}

/// Whole seconds between two millisecond timestamps.
pub fn duration_secs(started_ms: Option<u64>, ended_ms: Option<u64>) -> u64 {
    match (started_ms, ended_ms) {
        (Some(start), Some(end)) => end.saturating_sub(start) / 1000,
        _ => 0,
    }
}

/// Summary of a finished 1v1 game.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub duration_secs: u64,
    pub total_moves: usize,
    pub user: ActorStats,
    pub ai: ActorStats,
    /// Enemy ships the user sank.
    pub user_ships_sunk: usize,
    /// User ships the AI sank.
    pub ai_ships_sunk: usize,
}

/// Summary of a finished 2v2 game.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStats {
    pub duration_secs: u64,
    pub total_moves: usize,
    pub allies: ActorStats,
    pub enemies: ActorStats,
    /// Enemy ships, regular and special, sunk by the allies.
    pub enemy_ships_sunk: usize,
    /// Allied ships, regular and special, sunk by the enemies.
    pub allied_ships_sunk: usize,
    pub enemy_specials_sunk: usize,
    pub allied_specials_sunk: usize,
}
