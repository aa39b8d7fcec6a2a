//! AI engine selecting moves at four strength tiers
//!
//! Every tier starts from the legal moves of the AI colour in row-major
//! order. An empty list means the AI must pass.
//!
//! 1. **Easy**: uniform-random legal move
//! 2. **Medium**: first corner if any, otherwise random
//! 3. **Hard / Expert**: first corner if any. Otherwise X-squares are
//!    dropped from the candidates and the rest are searched with
//!    alpha-beta minimax. If every move is an X-square, pick at random.
//!
//! Hard and Expert share the algorithm and differ only in depth.
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Difficulty, GameEngine, Player};
//!
//! let mut game = GameEngine::new();
//! let mut ai = AIEngine::with_seed(Difficulty::Hard, 7);
//!
//! // Human opens as Black, AI answers as White
//! let black = game.valid_moves(Player::Black)[0];
//! game.make_move(black, Player::Black);
//!
//! let result = ai.get_move_with_stats(game.board(), Player::White);
//! println!("AI plays {:?} via {:?}", result.best_move, result.search_type);
//! if let Some(pos) = result.best_move {
//!     assert!(game.make_move(pos, Player::White));
//! }
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::ReversiError;
use crate::game::GameEngine;
use crate::rules::valid_moves;
use crate::search::{is_corner, is_x_square, SearchResult, Searcher};
use crate::settings::GameSettings;

/// Default search depth for [`Difficulty::Hard`]
pub const DEFAULT_HARD_DEPTH: u8 = 3;
/// Default search depth for [`Difficulty::Expert`]
pub const DEFAULT_EXPERT_DEPTH: u8 = 5;
/// Deepest search the engine accepts
pub const MAX_DEPTH: u8 = 8;

/// AI strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Host code 0..=3
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Expert => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl TryFrom<i32> for Difficulty {
    type Error = ReversiError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Difficulty::Easy),
            1 => Ok(Difficulty::Medium),
            2 => Ok(Difficulty::Hard),
            3 => Ok(Difficulty::Expert),
            other => Err(ReversiError::InvalidDifficulty(other)),
        }
    }
}

/// Which rule produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// No legal move; the AI has to pass
    NoMove,
    /// Uniform-random pick
    Random,
    /// Corner taken without search
    Corner,
    /// Alpha-beta minimax
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when the AI must pass
    pub best_move: Option<Pos>,
    /// Minimax score for [`SearchType::AlphaBeta`], 0 otherwise
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn random(pos: Option<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn corner(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Corner,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Move selector for the computer player.
///
/// Owns its random source, so two engines built with the same seed make
/// the same choices on the same positions.
#[derive(Debug, Clone)]
pub struct AIEngine {
    difficulty: Difficulty,
    hard_depth: u8,
    expert_depth: u8,
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine seeded from OS entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use reversi::{AIEngine, Difficulty};
    ///
    /// let engine = AIEngine::new(Difficulty::Expert);
    /// assert_eq!(engine.difficulty(), Difficulty::Expert);
    /// ```
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed for reproducible play
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    /// Create an engine using the difficulty and depths from `settings`
    #[must_use]
    pub fn from_settings(settings: &GameSettings) -> Self {
        let mut engine = Self::new(settings.difficulty);
        engine.set_depths(settings.hard_depth, settings.expert_depth);
        engine
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            hard_depth: DEFAULT_HARD_DEPTH,
            expert_depth: DEFAULT_EXPERT_DEPTH,
            rng,
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Set Hard/Expert depths, clamped to `1..=MAX_DEPTH`
    pub fn set_depths(&mut self, hard: u8, expert: u8) {
        self.hard_depth = hard.clamp(1, MAX_DEPTH);
        self.expert_depth = expert.clamp(1, MAX_DEPTH);
    }

    /// Search depth used by the current difficulty (0 for non-search tiers)
    pub fn depth(&self) -> u8 {
        match self.difficulty {
            Difficulty::Easy | Difficulty::Medium => 0,
            Difficulty::Hard => self.hard_depth,
            Difficulty::Expert => self.expert_depth,
        }
    }

    /// Move for `color` on `board`, or `None` if it has to pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Player) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Move for `color` on the live board of `game`.
    ///
    /// Works on a copy; `game` is never touched.
    #[must_use]
    pub fn best_move(&mut self, game: &GameEngine, color: Player) -> Option<Pos> {
        self.get_move(game.board(), color)
    }

    /// Pick a move for `color` and report how it was found.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Player) -> MoveResult {
        let start = Instant::now();
        let moves = valid_moves(board, color);

        let result = if moves.is_empty() {
            MoveResult::no_move(elapsed_ms(start))
        } else {
            match self.difficulty {
                Difficulty::Easy => MoveResult::random(self.pick_random(&moves), elapsed_ms(start)),
                Difficulty::Medium => match first_corner(&moves) {
                    Some(pos) => MoveResult::corner(pos, elapsed_ms(start)),
                    None => MoveResult::random(self.pick_random(&moves), elapsed_ms(start)),
                },
                Difficulty::Hard | Difficulty::Expert => {
                    self.search_move(board, color, &moves, start)
                }
            }
        };

        debug!(
            difficulty = self.difficulty.name(),
            color = color.name(),
            best_move = ?result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "AI move selected"
        );
        result
    }

    fn search_move(
        &mut self,
        board: &Board,
        color: Player,
        moves: &[Pos],
        start: Instant,
    ) -> MoveResult {
        if let Some(pos) = first_corner(moves) {
            return MoveResult::corner(pos, elapsed_ms(start));
        }

        let candidates: Vec<Pos> = moves.iter().copied().filter(|&p| !is_x_square(p)).collect();
        if candidates.is_empty() {
            return MoveResult::random(self.pick_random(moves), elapsed_ms(start));
        }

        let mut searcher = Searcher::new(color);
        let result = searcher.search(board, &candidates, self.depth());
        MoveResult::from_alphabeta(result, elapsed_ms(start))
    }

    fn pick_random(&mut self, moves: &[Pos]) -> Option<Pos> {
        moves.choose(&mut self.rng).copied()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[inline]
fn first_corner(moves: &[Pos]) -> Option<Pos> {
    moves.iter().copied().find(|&p| is_corner(p))
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::rules::is_legal_move;

    /// White can take (0,0) or play (2,3); Black owns the diagonal run.
    fn corner_board() -> Board {
        let mut board = Board::empty();
        board.place_disc(Pos::new(1, 1), Player::Black);
        board.place_disc(Pos::new(2, 2), Player::White);
        board.place_disc(Pos::new(3, 3), Player::Black);
        board.place_disc(Pos::new(4, 3), Player::White);
        board
    }

    /// White's only moves are X-squares (0,1) and (1,0)
    fn x_square_board() -> Board {
        let mut board = Board::empty();
        board.place_disc(Pos::new(1, 1), Player::Black);
        board.place_disc(Pos::new(2, 1), Player::White);
        board.place_disc(Pos::new(1, 2), Player::White);
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert_eq!(engine.depth(), DEFAULT_HARD_DEPTH);
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn test_difficulty_codes() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::try_from(difficulty.code()).ok(), Some(difficulty));
        }
        assert!(Difficulty::try_from(4).is_err());
        assert!(Difficulty::try_from(-1).is_err());
    }

    #[test]
    fn test_set_depths_clamps() {
        let mut engine = AIEngine::with_seed(Difficulty::Expert, 1);
        engine.set_depths(0, 20);
        assert_eq!(engine.depth(), MAX_DEPTH);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_no_move_for_every_tier() {
        let mut board = Board::empty();
        board.place_disc(Pos::new(0, 0), Player::Black);
        for difficulty in Difficulty::ALL {
            let mut engine = AIEngine::with_seed(difficulty, 3);
            let result = engine.get_move_with_stats(&board, Player::White);
            assert_eq!(result.best_move, None);
            assert_eq!(result.search_type, SearchType::NoMove);
        }
    }

    #[test]
    fn test_easy_returns_legal_move() {
        let board = Board::new();
        let mut engine = AIEngine::with_seed(Difficulty::Easy, 42);
        for _ in 0..20 {
            let result = engine.get_move_with_stats(&board, Player::White);
            assert_eq!(result.search_type, SearchType::Random);
            let pos = result.best_move.expect("opening has moves");
            assert!(is_legal_move(&board, pos, Player::White));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let board = Board::new();
        let mut a = AIEngine::with_seed(Difficulty::Easy, 99);
        let mut b = AIEngine::with_seed(Difficulty::Easy, 99);
        for _ in 0..10 {
            assert_eq!(a.get_move(&board, Player::Black), b.get_move(&board, Player::Black));
        }
    }

    #[test]
    fn test_medium_takes_corner() {
        let board = corner_board();
        let mut engine = AIEngine::with_seed(Difficulty::Medium, 5);
        let result = engine.get_move_with_stats(&board, Player::White);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.search_type, SearchType::Corner);
    }

    #[test]
    fn test_medium_without_corner_is_random() {
        let board = Board::new();
        let mut engine = AIEngine::with_seed(Difficulty::Medium, 5);
        let result = engine.get_move_with_stats(&board, Player::White);
        assert_eq!(result.search_type, SearchType::Random);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_search_tiers_take_corner_without_search() {
        let board = corner_board();
        for difficulty in [Difficulty::Hard, Difficulty::Expert] {
            let mut engine = AIEngine::with_seed(difficulty, 5);
            let result = engine.get_move_with_stats(&board, Player::White);
            assert_eq!(result.best_move, Some(Pos::new(0, 0)));
            assert_eq!(result.search_type, SearchType::Corner);
            assert_eq!(result.nodes, 0);
        }
    }

    #[test]
    fn test_all_x_squares_falls_back_to_random() {
        let board = x_square_board();
        let moves = valid_moves(&board, Player::White);
        assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0)]);

        let mut engine = AIEngine::with_seed(Difficulty::Expert, 11);
        for _ in 0..10 {
            let result = engine.get_move_with_stats(&board, Player::White);
            assert_eq!(result.search_type, SearchType::Random);
            assert!(moves.contains(&result.best_move.expect("has moves")));
        }
    }

    #[test]
    fn test_hard_searches_opening() {
        let mut board = Board::new();
        crate::rules::execute_move(&mut board, Pos::new(2, 3), Player::Black);

        let mut engine = AIEngine::with_seed(Difficulty::Hard, 0);
        let result = engine.get_move_with_stats(&board, Player::White);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.nodes > 0);
        let pos = result.best_move.expect("White has replies");
        assert!(is_legal_move(&board, pos, Player::White));
        assert!(!is_x_square(pos));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let game = GameEngine::new();
        let before = *game.board();
        let mut engine = AIEngine::with_seed(Difficulty::Expert, 0);
        let _ = engine.best_move(&game, Player::White);
        assert_eq!(*game.board(), before);
        assert_eq!(game.board().get(Pos::new(3, 3)), Cell::White);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::new();
        let mut a = AIEngine::with_seed(Difficulty::Hard, 1);
        let mut b = AIEngine::with_seed(Difficulty::Hard, 2);
        // No randomness on the search path
        assert_eq!(a.get_move(&board, Player::White), b.get_move(&board, Player::White));
    }
}
