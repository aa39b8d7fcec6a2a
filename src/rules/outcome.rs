//! End-of-game detection
//!
//! The game ends when the board is full or neither side can move. The side
//! with more discs wins; equal counts are a draw.

use crate::board::{Board, Player};

use super::capture::has_any_move;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Host code: 0 = draw, 1 = black, 2 = white
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            GameOutcome::Winner(player) => player.code(),
            GameOutcome::Draw => 0,
        }
    }
}

/// Check if the game is over: board full, or no legal move for either side.
pub fn is_game_over(board: &Board) -> bool {
    if board.is_full() {
        return true;
    }
    !has_any_move(board, Player::Black) && !has_any_move(board, Player::White)
}

/// Compare disc counts. Does not check whether the game is over.
pub fn compare_discs(black: u32, white: u32) -> GameOutcome {
    use std::cmp::Ordering;

    match black.cmp(&white) {
        Ordering::Greater => GameOutcome::Winner(Player::Black),
        Ordering::Less => GameOutcome::Winner(Player::White),
        Ordering::Equal => GameOutcome::Draw,
    }
}

/// Result of the game, or `None` while it is still in progress.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if !is_game_over(board) {
        return None;
    }
    Some(compare_discs(
        board.count(Player::Black),
        board.count(Player::White),
    ))
}
