// Opponent move selection over the attacker's view of a board.
//
// Every strategy reads only cell states an attacker may know: pass a
// `Board::fog_view()`, never the defender's real board. Nothing here mutates.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::bitboard::Mask;
use crate::board::{Board, CellState};
use crate::common::{BoardError, Position};
use crate::config::{fleet_lengths, BOARD_SIZE};
use crate::ship::{fits, Orientation};

/// Per-cell count of consistent hypothetical placements.
pub type HeatMap = [[u32; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniform random shots.
    Easy,
    /// Hunt on a checkerboard, then finish off open hits.
    #[default]
    Medium,
    /// Placement-counting heat map, then finish off open hits.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("difficulty must be easy, medium or hard"),
        }
    }
}

/// Pick the next target for `difficulty`.
///
/// `remaining` lists the lengths of the defender's ships still afloat; only
/// the hard strategy uses it.
pub fn choose_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    view: &Board,
    remaining: &[usize],
    rng: &mut R,
) -> Result<Position, BoardError> {
    match difficulty {
        Difficulty::Easy => easy_move(view, rng),
        Difficulty::Medium => medium_move(view, rng),
        Difficulty::Hard => hard_move(view, remaining, rng),
    }
}

/// Uniformly random untargeted cell.
pub fn easy_move<R: Rng + ?Sized>(view: &Board, rng: &mut R) -> Result<Position, BoardError> {
    pick(rng, &view.untargeted()).ok_or(BoardError::NoMovesAvailable)
}

/// Hunt/target: finish open hits first, otherwise shoot the parity-0
/// checkerboard, otherwise anything left.
pub fn medium_move<R: Rng + ?Sized>(view: &Board, rng: &mut R) -> Result<Position, BoardError> {
    if let Some(pos) = pick(rng, &finishing_candidates(view)) {
        return Ok(pos);
    }
    if let Some(pos) = pick(rng, &hunt_candidates(view)) {
        return Ok(pos);
    }
    easy_move(view, rng)
}

/// Heat-map search.
///
/// With open hits this defers to the same finishing logic as
/// [`medium_move`]. Otherwise it counts, for every remaining ship length,
/// each in-bounds placement that avoids known misses and sunk cells, and
/// shoots a random cell among the untargeted maxima. Counting placements is
/// a cheap stand-in for the posterior over ship layouts: it ignores that
/// ships cannot overlap each other, so it is a heuristic and not exact
/// inference.
pub fn hard_move<R: Rng + ?Sized>(
    view: &Board,
    remaining: &[usize],
    rng: &mut R,
) -> Result<Position, BoardError> {
    if let Some(pos) = pick(rng, &finishing_candidates(view)) {
        return Ok(pos);
    }

    let heat = if remaining.is_empty() {
        heat_map(view, &fleet_lengths())
    } else {
        heat_map(view, remaining)
    };

    let mut best = Vec::new();
    let mut max = 0u32;
    for pos in view.untargeted() {
        let v = heat[pos.row][pos.col];
        if best.is_empty() || v > max {
            max = v;
            best.clear();
            best.push(pos);
        } else if v == max {
            best.push(pos);
        }
    }
    pick(rng, &best).ok_or(BoardError::NoMovesAvailable)
}

/// Accumulate consistent placements of each length into a per-cell count.
/// A placement is consistent when it stays on the board and covers no cell
/// known to be a miss or part of a sunk ship.
pub fn heat_map(view: &Board, lengths: &[usize]) -> HeatMap {
    let blocked = view.mask_of(&[CellState::Miss, CellState::Sunk]);
    let mut heat = [[0u32; BOARD_SIZE]; BOARD_SIZE];

    for &len in lengths {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let origin = Position::new(row, col);
                    if !fits(origin, len, orientation) {
                        continue;
                    }
                    let footprint = run_mask(origin, len, orientation);
                    if !(footprint & blocked).is_empty() {
                        continue;
                    }
                    for pos in footprint.iter_set_bits() {
                        heat[pos.row][pos.col] += 1;
                    }
                }
            }
        }
    }
    heat
}

/// Cells worth shooting to finish damaged ships.
///
/// Starts from the untargeted neighbours of every open hit. When two or
/// more open hits lie next to each other in a row or column, only the cells
/// extending such a line are kept, so a detected ship axis is followed
/// before branching sideways. Empty when there are no open hits.
pub fn finishing_candidates(view: &Board) -> Vec<Position> {
    let hits = view.open_hits();
    if hits.is_empty() {
        return Vec::new();
    }
    let adjacent = view.adjacent_untargeted(&hits);
    if hits.len() >= 2 {
        let aligned = aligned_candidates(view, &hits);
        if !aligned.is_empty() {
            return aligned;
        }
    }
    adjacent
}

/// Untargeted cells with `(row + col) % 2 == 0`. Every ship of length two
/// or more covers at least one of them.
pub fn hunt_candidates(view: &Board) -> Vec<Position> {
    view.untargeted()
        .into_iter()
        .filter(|p| (p.row + p.col) % 2 == 0)
        .collect()
}

// An open hit `h` with another open hit at `h - d` is the end of a line
// along `d`; the untargeted cell at `h + d` continues it.
fn aligned_candidates(view: &Board, hits: &[Position]) -> Vec<Position> {
    let open = Mask::from_positions(hits.iter().copied()).unwrap_or_default();
    let mut seen = Mask::new();
    let mut out = Vec::new();
    for &h in hits {
        for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
            let behind = h.offset(-dr, -dc);
            if !behind.is_some_and(|b| open.contains(b)) {
                continue;
            }
            if let Some(ahead) = h.offset(dr, dc) {
                if view.is_untargeted(ahead) && !seen.contains(ahead) {
                    let _ = seen.set(ahead);
                    out.push(ahead);
                }
            }
        }
    }
    out
}

fn run_mask(origin: Position, len: usize, orientation: Orientation) -> Mask {
    let mut mask = Mask::new();
    for i in 0..len {
        let _ = mask.set(orientation.segment(origin, i));
    }
    mask
}

fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &[Position]) -> Option<Position> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
