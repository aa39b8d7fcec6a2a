//! Capture rules for Reversi
//!
//! A disc placed on an empty square captures every straight run of opponent
//! discs that is closed off by a disc of the mover's own colour. A move is
//! legal only if it captures at least one disc.

use crate::board::{Board, Cell, Player, Pos};

/// Direction vectors for ray tracing (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (-1, 0),  // ↑
    (-1, 1),  // ↗
    (0, -1),  // ←
    (0, 1),   // →
    (1, -1),  // ↙
    (1, 0),   // ↓
    (1, 1),   // ↘
];

/// Opponent discs flanked along one ray, or nothing if the ray is open.
fn ray_captures(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32, out: &mut Vec<Pos>) {
    let own = Cell::from(player);
    let opp = Cell::from(player.opponent());
    let start = out.len();

    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        let cell = board.get(p);
        if cell == opp {
            out.push(p);
        } else if cell == own {
            return;
        } else {
            break;
        }
        cursor = p.step(dr, dc);
    }

    // Ran off the board or hit an empty square: nothing flips this way
    out.truncate(start);
}

/// Find the discs that would flip if `player` placed a disc at `pos`.
///
/// Rays are walked in [`DIRECTIONS`] order and each run is appended nearest
/// first. The board is not modified, so this doubles as the legality check.
///
/// # Returns
/// Captured positions (empty if the move captures nothing, the square is
/// already occupied or off the board)
pub fn flippable(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let mut captured = Vec::new();
    if !pos.on_board() || !board.is_empty(pos) {
        return captured;
    }
    for &(dr, dc) in &DIRECTIONS {
        ray_captures(board, pos, player, dr, dc, &mut captured);
    }
    captured
}

/// Check if a move would capture at least one disc.
///
/// Short-circuits on the first closed ray.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, player: Player) -> bool {
    if !pos.on_board() {
        return false;
    }
    let mut scratch = Vec::with_capacity(8);
    DIRECTIONS.iter().any(|&(dr, dc)| {
        ray_captures(board, pos, player, dr, dc, &mut scratch);
        !scratch.is_empty()
    })
}

/// A square is a legal move iff it is on the board, empty and captures
/// something.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    pos.on_board() && board.is_empty(pos) && has_capture(board, pos, player)
}

/// All legal moves for `player`, in row-major order.
///
/// The order is relied on for AI tie-breaking.
pub fn valid_moves(board: &Board, player: Player) -> Vec<Pos> {
    Pos::all()
        .filter(|&pos| is_legal_move(board, pos, player))
        .collect()
}

/// Check whether `player` has at least one legal move
pub fn has_any_move(board: &Board, player: Player) -> bool {
    Pos::all().any(|pos| is_legal_move(board, pos, player))
}

/// Number of empty squares from which `player` has a legal move
pub fn mobility(board: &Board, player: Player) -> i32 {
    Pos::all()
        .filter(|&pos| is_legal_move(board, pos, player))
        .count() as i32
}

/// Place a disc and flip all captured discs.
///
/// Does nothing and returns an empty vector if the move is illegal.
/// The side to move is left untouched.
///
/// # Returns
/// Positions that were flipped
pub fn execute_move(board: &mut Board, pos: Pos, player: Player) -> Vec<Pos> {
    let captured = flippable(board, pos, player);
    if captured.is_empty() {
        return captured;
    }

    board.place_disc(pos, player);
    for &p in &captured {
        board.place_disc(p, player);
    }
    captured
}
