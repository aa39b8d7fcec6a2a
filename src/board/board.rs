//! Board structure: 64 cells plus the side to move

use super::{Cell, Player, Pos, TOTAL_CELLS};

/// Game board.
///
/// Cells are stored flat in row-major order so that cloning a board for a
/// search node is a plain 65-byte copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    /// Side to move
    pub turn: Player,
}

impl Board {
    /// Standard starting position: four discs in the centre, Black to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Pos::new(3, 3), Cell::White);
        board.set(Pos::new(3, 4), Cell::Black);
        board.set(Pos::new(4, 3), Cell::Black);
        board.set(Pos::new(4, 4), Cell::White);
        board
    }

    /// Board with no discs, Black to move
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
            turn: Player::Black,
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Overwrite a cell.
    /// Use `rules::execute_move` for game moves
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Place a disc (without flipping anything)
    #[inline]
    pub fn place_disc(&mut self, pos: Pos, player: Player) {
        self.set(pos, Cell::from(player));
    }

    /// Number of discs owned by `player`
    pub fn count(&self, player: Player) -> u32 {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count() as u32
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Hand the move to the other side
    #[inline]
    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Host encoding: 0 = empty, 1 = black, 2 = white, row-major
    pub fn to_codes(&self) -> [i32; TOTAL_CELLS] {
        let mut out = [0; TOTAL_CELLS];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = cell.code();
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..super::BOARD_SIZE as u8 {
            write!(f, "{}", row + 1)?;
            for col in 0..super::BOARD_SIZE as u8 {
                let ch = match self.get(Pos::new(row, col)) {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
