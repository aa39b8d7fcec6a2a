//! Game engine: rules orchestration plus undo/redo
//!
//! [`GameEngine`] owns the live board, the cached disc counts and the
//! history log. Every mutating call is all-or-nothing: on rejection the
//! state is left exactly as it was.
//!
//! # Example
//!
//! ```
//! use reversi::{GameEngine, Player, Pos};
//!
//! let mut game = GameEngine::new();
//! assert!(game.make_move(Pos::new(2, 3), Player::Black));
//! assert_eq!(game.scores(), (4, 1));
//! assert!(game.undo());
//! assert_eq!(game.scores(), (2, 2));
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::rules::{self, GameOutcome};

use super::history::{History, Snapshot};

/// Board, scores and history for one game
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    black_score: u32,
    white_score: u32,
    last_move: Option<Pos>,
    history: History,
}

impl GameEngine {
    /// Start a new game from the standard position
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start a game from an arbitrary position.
    ///
    /// The given board becomes the first history entry.
    pub fn from_board(board: Board) -> Self {
        let black_score = board.count(Player::Black);
        let white_score = board.count(Player::White);
        let initial = Snapshot {
            board,
            black_score,
            white_score,
            last_move: None,
        };
        Self {
            board,
            black_score,
            white_score,
            last_move: None,
            history: History::new(initial),
        }
    }

    /// Reset to the starting position and clear history
    pub fn init_game(&mut self) {
        *self = Self::new();
    }

    /// Play a disc for `player` at `pos`.
    ///
    /// `player` need not be the side to move; the turn passes to the
    /// opponent of whoever moved. Returns `false` (and changes nothing) if
    /// the move is not legal for `player`.
    pub fn make_move(&mut self, pos: Pos, player: Player) -> bool {
        let flipped = rules::execute_move(&mut self.board, pos, player);
        if flipped.is_empty() {
            trace!(%pos, player = player.name(), "rejected illegal move");
            return false;
        }

        self.board.turn = player.opponent();
        self.last_move = Some(pos);
        self.update_scores();
        self.save_state();

        debug!(
            %pos,
            player = player.name(),
            flipped = flipped.len(),
            black = self.black_score,
            white = self.white_score,
            "move committed"
        );
        true
    }

    /// Check if a move is legal (for UI highlighting)
    #[inline]
    pub fn can_move(&self, pos: Pos, player: Player) -> bool {
        rules::is_legal_move(&self.board, pos, player)
    }

    /// Check if `player` has any legal move
    #[inline]
    pub fn player_can_move(&self, player: Player) -> bool {
        rules::has_any_move(&self.board, player)
    }

    /// Hand the turn to the other side.
    ///
    /// Not checked against the rules, and consumes a history slot even
    /// though no disc changes.
    pub fn pass_turn(&mut self) {
        self.board.toggle_turn();
        self.last_move = None;
        self.save_state();
        debug!(to_move = self.board.turn.name(), "turn passed");
    }

    /// All legal moves for `player` in row-major order
    #[inline]
    pub fn valid_moves(&self, player: Player) -> Vec<Pos> {
        rules::valid_moves(&self.board, player)
    }

    #[inline]
    pub fn valid_moves_count(&self, player: Player) -> usize {
        self.valid_moves(player).len()
    }

    /// Step back one history entry
    pub fn undo(&mut self) -> bool {
        match self.history.undo().copied() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => {
                trace!("undo at oldest entry");
                false
            }
        }
    }

    /// Step forward one history entry
    pub fn redo(&mut self) -> bool {
        match self.history.redo().copied() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => {
                trace!("redo at newest entry");
                false
            }
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Board full, or neither side can move
    #[inline]
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(&self.board)
    }

    /// Winner by disc count, or `None` while the game is still running
    pub fn winner(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }
        Some(rules::compare_discs(self.black_score, self.white_score))
    }

    /// Live board (read-only)
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell codes in row-major order: 0 = empty, 1 = black, 2 = white
    #[inline]
    pub fn board_state(&self) -> [i32; TOTAL_CELLS] {
        self.board.to_codes()
    }

    /// (black, white) disc counts
    #[inline]
    pub fn scores(&self) -> (u32, u32) {
        (self.black_score, self.white_score)
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.board.turn
    }

    /// Force the side to move. Does not touch history.
    #[inline]
    pub fn set_current_player(&mut self, player: Player) {
        self.board.turn = player;
    }

    /// Square of the move that produced the current state
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Number of history entries, including the start position
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Recount discs from the board
    fn update_scores(&mut self) {
        self.black_score = self.board.count(Player::Black);
        self.white_score = self.board.count(Player::White);
    }

    /// Record the current state as the newest history entry
    fn save_state(&mut self) {
        self.history.commit(Snapshot {
            board: self.board,
            black_score: self.black_score,
            white_score: self.white_score,
            last_move: self.last_move,
        });
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.black_score = snapshot.black_score;
        self.white_score = snapshot.white_score;
        self.last_move = snapshot.last_move;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
