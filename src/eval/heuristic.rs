//! Heuristic evaluation function for Reversi board positions
//!
//! Two additive terms, both signed towards White:
//! - Positional weight of every occupied square
//! - Mobility: empty squares White could play minus those Black could play
//!
//! There is no game-phase weighting; the same table is used from the
//! opening to the last move.

use crate::board::{Board, Cell, Player, Pos};
use crate::rules::is_legal_move;

use super::weights::{Weights, POSITION_WEIGHTS};

/// Evaluate the board, positive = good for White.
///
/// # Arguments
/// * `board` - The board to score (the side to move is ignored)
///
/// # Returns
/// Positional score plus mobility difference
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    positional_score(board) + mobility_score(board)
}

/// Evaluate from `player`'s point of view (positive = good for `player`).
#[must_use]
pub fn evaluate_for(board: &Board, player: Player) -> i32 {
    match player {
        Player::White => evaluate(board),
        Player::Black => -evaluate(board),
    }
}

/// Sum of square weights, added for White discs and subtracted for Black.
pub fn positional_score(board: &Board) -> i32 {
    Pos::all()
        .map(|pos| {
            let w = POSITION_WEIGHTS[pos.row as usize][pos.col as usize];
            match board.get(pos) {
                Cell::White => w,
                Cell::Black => -w,
                Cell::Empty => 0,
            }
        })
        .sum()
}

/// White mobility minus Black mobility.
///
/// Counts squares, not distinct capture lines.
pub fn mobility_score(board: &Board) -> i32 {
    let mut white = 0;
    let mut black = 0;
    for pos in Pos::all() {
        if !board.is_empty(pos) {
            continue;
        }
        if is_legal_move(board, pos, Player::White) {
            white += 1;
        }
        if is_legal_move(board, pos, Player::Black) {
            black += 1;
        }
    }
    white - black
}

/// Final disc difference scaled so it dominates any positional score.
pub fn terminal_score(board: &Board) -> i32 {
    let white = board.count(Player::White) as i32;
    let black = board.count(Player::Black) as i32;
    (white - black) * Weights::TERMINAL_DISC
}
