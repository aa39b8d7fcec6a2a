//! Special squares: corners and the squares touching them

use crate::board::Pos;

/// The four corners, row-major
pub const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// Non-corner squares adjacent (orthogonally or diagonally) to a corner
pub const X_SQUARES: [(u8, u8); 12] = [
    (0, 1), (0, 6),
    (1, 0), (1, 1), (1, 6), (1, 7),
    (6, 0), (6, 1), (6, 6), (6, 7),
    (7, 1), (7, 6),
];

#[inline]
pub fn is_corner(pos: Pos) -> bool {
    (pos.row == 0 || pos.row == 7) && (pos.col == 0 || pos.col == 7)
}

#[inline]
pub fn is_x_square(pos: Pos) -> bool {
    X_SQUARES.contains(&(pos.row, pos.col))
}
