#![cfg(feature = "std")]

//! ASCII rendering of boards and heat maps for the command line.

use std::fmt::Write;

use crate::ai::HeatMap;
use crate::board::{Board, CellState};
use crate::common::Position;
use crate::config::BOARD_SIZE;

fn header(out: &mut String, width: usize) {
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {:>width$}", ch, width = width);
    }
    out.push('\n');
}

fn symbol(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Ship if reveal => 'S',
        CellState::Empty | CellState::Ship | CellState::Unknown => '.',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
    }
}

/// Render `board`. With `reveal` unhit ships show as `S`, otherwise the
/// board is drawn the way the opponent sees it.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    header(&mut out, 1);
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let state = board
                .state(Position::new(r, c))
                .unwrap_or(CellState::Unknown);
            let _ = write!(out, " {}", symbol(state, reveal));
        }
        out.push('\n');
    }
    out
}

/// Heat map scaled to 0-99 so the grid stays aligned.
pub fn render_heat_map(heat: &HeatMap) -> String {
    let max = heat.iter().flatten().copied().max().unwrap_or(0).max(1);
    let mut out = String::new();
    header(&mut out, 3);
    for (r, row) in heat.iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for &v in row {
            let _ = write!(out, " {:>3}", v * 99 / max);
        }
        out.push('\n');
    }
    out
}
