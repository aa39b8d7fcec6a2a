//! Square weights for Reversi evaluation
//!
//! Corners can never be flipped, so they are worth the most. The squares
//! touching a corner hand it to the opponent and are penalised. Edges are
//! mildly positive; the centre is close to neutral.

/// Named scoring constants
pub struct Weights;

impl Weights {
    /// Value of a corner square
    pub const CORNER: i32 = 100;
    /// Diagonal neighbour of a corner
    pub const X_SQUARE: i32 = -50;
    /// Edge neighbour of a corner
    pub const C_SQUARE: i32 = -20;
    /// Per-disc multiplier once the board is full
    pub const TERMINAL_DISC: i32 = 1000;
}

const K: i32 = Weights::CORNER;
const X: i32 = Weights::X_SQUARE;
const C: i32 = Weights::C_SQUARE;

/// Weight of each square, indexed `[row][col]`
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [K, C, 10, 5, 5, 10, C, K],
    [C, X, -2, -2, -2, -2, X, C],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [C, X, -2, -2, -2, -2, X, C],
    [K, C, 10, 5, 5, 10, C, K],
];
