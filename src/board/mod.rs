//! Board representation for Reversi

pub mod board;


// Re-exports
pub use board::Board;

use crate::error::ReversiError;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Host code: 0 = empty, 1 = black, 2 = white
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    /// Owner of the disc, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

/// Disc colors that can be "to move".
///
/// Black (player A) always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Host code: 1 = black, 2 = white
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Cell {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl TryFrom<i32> for Player {
    type Error = ReversiError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            other => Err(ReversiError::InvalidPlayer(other)),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Bounds-checked constructor for untrusted coordinates
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Whether this position lies on the board. Always true for positions
    /// built through [`Pos::new`] or [`Pos::try_new`]; the fields are public,
    /// so a literal can still point off the board.
    #[inline]
    pub fn on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbouring square one step along `(dr, dc)`, if still on the board
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Pos> {
        Pos::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// All squares in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    /// Algebraic notation, columns a-h and rows 1-8 from the top
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
