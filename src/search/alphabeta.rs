//! Minimax search with alpha-beta pruning
//!
//! The searcher maximizes for its own colour and assumes the opponent
//! minimizes. Every node works on its own copy of the board.
//!
//! Child positions are produced by writing the mover's disc on the chosen
//! square *without* flipping the captured discs. This keeps move choices
//! identical to the engine this AI is calibrated against; applying real
//! flips changes which moves are picked.
//!
//! Legality and mobility at each node are computed on that node's own
//! board. The engine this AI is calibrated against asks the live game
//! instead, so deeper nodes there see the root position's moves.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Player, Pos};
//! use reversi::search::Searcher;
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new(Player::White);
//! let candidates = reversi::rules::valid_moves(&board, Player::White);
//!
//! let result = searcher.search(&board, &candidates, 3);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate_for, terminal_score};
use crate::rules::valid_moves;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the best move (from the searcher's side)
    pub score: i32,
    /// Nominal depth of the search (root ply included)
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Depth-limited minimax searcher for one colour
#[derive(Debug, Clone)]
pub struct Searcher {
    player: Player,
    nodes: u64,
}

impl Searcher {
    pub fn new(player: Player) -> Self {
        Self { player, nodes: 0 }
    }

    /// Colour this searcher maximizes for
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score each candidate at `depth - 1` with the opponent to reply.
    ///
    /// The highest score wins; ties go to the earliest candidate, so
    /// candidates should be passed in row-major order.
    pub fn search(&mut self, board: &Board, candidates: &[Pos], depth: u8) -> SearchResult {
        self.nodes = 0;
        let mut best: Option<(Pos, i32)> = None;

        for &mv in candidates {
            let child = self.child(board, mv, self.player);
            let score = self.minimax(&child, depth.saturating_sub(1), i32::MIN, i32::MAX, false);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, s)| s),
            depth,
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` with alpha-beta pruning.
    ///
    /// `maximizing` selects whose turn it is at this node: the searcher's
    /// colour when true, the opponent's when false. A side without moves
    /// passes (costing one ply) unless the board is full.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate_for(board, self.player);
        }

        let side = self.side(maximizing);
        let moves = valid_moves(board, side);

        if moves.is_empty() {
            if board.is_full() {
                return self.terminal(board);
            }
            return self.minimax(board, depth - 1, alpha, beta, !maximizing);
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                let child = self.child(board, mv, side);
                let eval = self.minimax(&child, depth - 1, alpha, beta, false);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let child = self.child(board, mv, side);
                let eval = self.minimax(&child, depth - 1, alpha, beta, true);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Disc difference for a full board, scaled and signed for this searcher
    fn terminal(&self, board: &Board) -> i32 {
        match self.player {
            Player::White => terminal_score(board),
            Player::Black => -terminal_score(board),
        }
    }

    #[inline]
    fn side(&self, maximizing: bool) -> Player {
        if maximizing {
            self.player
        } else {
            self.player.opponent()
        }
    }

    /// Copy of `board` with `side`'s disc written at `mv`, nothing flipped
    #[inline]
    fn child(&self, board: &Board, mv: Pos, side: Player) -> Board {
        let mut next = *board;
        next.place_disc(mv, side);
        next.turn = side.opponent();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use crate::rules::execute_move;

    /// Reference minimax without pruning, same child generation
    fn plain_minimax(searcher: &Searcher, board: &Board, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 {
            return evaluate_for(board, searcher.player);
        }
        let side = searcher.side(maximizing);
        let moves = valid_moves(board, side);
        if moves.is_empty() {
            if board.is_full() {
                return searcher.terminal(board);
            }
            return plain_minimax(searcher, board, depth - 1, !maximizing);
        }
        let scores = moves.into_iter().map(|mv| {
            let child = searcher.child(board, mv, side);
            plain_minimax(searcher, &child, depth - 1, !maximizing)
        });
        if maximizing {
            scores.max().unwrap_or(i32::MIN)
        } else {
            scores.min().unwrap_or(i32::MAX)
        }
    }

    fn midgame_board() -> Board {
        let mut board = Board::new();
        let line = [
            (Pos::new(2, 3), Player::Black),
            (Pos::new(2, 2), Player::White),
            (Pos::new(3, 2), Player::Black),
            (Pos::new(2, 4), Player::White),
            (Pos::new(2, 5), Player::Black),
            (Pos::new(4, 2), Player::White),
        ];
        for (pos, player) in line {
            assert!(!execute_move(&mut board, pos, player).is_empty());
        }
        board.turn = Player::Black;
        board
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let board = midgame_board();
        let mut searcher = Searcher::new(Player::White);
        for maximizing in [true, false] {
            assert_eq!(
                searcher.minimax(&board, 0, i32::MIN, i32::MAX, maximizing),
                evaluate(&board)
            );
        }
        assert_eq!(searcher.nodes(), 2);
    }

    #[test]
    fn test_depth_zero_for_black_is_negated() {
        let board = midgame_board();
        let mut searcher = Searcher::new(Player::Black);
        assert_eq!(
            searcher.minimax(&board, 0, i32::MIN, i32::MAX, true),
            -evaluate(&board)
        );
    }

    #[test]
    fn test_alphabeta_matches_plain_minimax() {
        for board in [Board::new(), midgame_board()] {
            for player in [Player::White, Player::Black] {
                for depth in 1..=4u8 {
                    for maximizing in [true, false] {
                        let mut searcher = Searcher::new(player);
                        let pruned =
                            searcher.minimax(&board, depth, i32::MIN, i32::MAX, maximizing);
                        let plain = plain_minimax(&searcher, &board, depth, maximizing);
                        assert_eq!(pruned, plain, "depth {depth}, {player:?}, max={maximizing}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_root_choice_matches_plain_minimax() {
        let board = midgame_board();
        let candidates = valid_moves(&board, Player::White);
        assert!(!candidates.is_empty());

        for depth in 1..=4u8 {
            let mut searcher = Searcher::new(Player::White);
            let result = searcher.search(&board, &candidates, depth);

            let mut expected: Option<(Pos, i32)> = None;
            for &mv in &candidates {
                let child = searcher.child(&board, mv, Player::White);
                let score = plain_minimax(&searcher, &child, depth - 1, false);
                if expected.map_or(true, |(_, s)| score > s) {
                    expected = Some((mv, score));
                }
            }

            assert_eq!(result.best_move, expected.map(|(mv, _)| mv));
            assert_eq!(Some(result.score), expected.map(|(_, s)| s));
        }
    }

    #[test]
    fn test_children_do_not_flip() {
        let board = Board::new();
        let searcher = Searcher::new(Player::Black);
        let child = searcher.child(&board, Pos::new(2, 3), Player::Black);

        // Placed disc only; d4 stays White
        assert_eq!(child.count(Player::Black), 3);
        assert_eq!(child.count(Player::White), 2);
        assert_eq!(child.turn, Player::White);
    }

    #[test]
    fn test_full_board_returns_terminal_utility() {
        let mut board = Board::empty();
        for pos in Pos::all() {
            let player = if pos.to_index() < 34 { Player::White } else { Player::Black };
            board.place_disc(pos, player);
        }
        let mut searcher = Searcher::new(Player::White);
        // 34 white, 30 black
        assert_eq!(searcher.minimax(&board, 3, i32::MIN, i32::MAX, true), 4000);

        let mut searcher = Searcher::new(Player::Black);
        assert_eq!(searcher.minimax(&board, 3, i32::MIN, i32::MAX, false), -4000);
    }

    #[test]
    fn test_side_without_moves_passes() {
        let mut board = Board::empty();
        // Only White can move: W B _ along row 0
        board.place_disc(Pos::new(0, 0), Player::White);
        board.place_disc(Pos::new(0, 1), Player::Black);

        let mut searcher = Searcher::new(Player::White);
        // Black (minimizing) must pass; White then plays (0,2) at the leaf
        let value = searcher.minimax(&board, 2, i32::MIN, i32::MAX, false);

        let mut after = board;
        after.place_disc(Pos::new(0, 2), Player::White);
        assert_eq!(value, evaluate(&after));
    }

    #[test]
    fn test_search_without_candidates() {
        let mut searcher = Searcher::new(Player::White);
        let result = searcher.search(&Board::new(), &[], 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_search_counts_nodes() {
        let board = Board::new();
        let candidates = valid_moves(&board, Player::White);
        let mut searcher = Searcher::new(Player::White);
        let result = searcher.search(&board, &candidates, 2);
        assert!(result.nodes >= candidates.len() as u64);
        assert_eq!(result.depth, 2);
    }
}
