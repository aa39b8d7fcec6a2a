//! End-to-end scenarios for the rules engine and the AI

use reversi::board::{Board, Cell, Player, Pos};
use reversi::engine::{AIEngine, Difficulty, SearchType};
use reversi::eval::{evaluate, evaluate_for, terminal_score};
use reversi::rules::{self, valid_moves};
use reversi::search::{is_corner, is_x_square, Searcher};
use reversi::{GameEngine, GameOutcome, ReversiHost};

fn pos(row: u8, col: u8) -> Pos {
    Pos::new(row, col)
}

#[test]
fn opening_moves_for_both_sides() {
    let game = GameEngine::new();
    assert_eq!(
        game.valid_moves(Player::Black),
        vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]
    );
    assert_eq!(
        game.valid_moves(Player::White),
        vec![pos(2, 4), pos(3, 5), pos(4, 2), pos(5, 3)]
    );
}

#[test]
fn black_opening_capture() {
    let mut game = GameEngine::new();
    assert!(game.make_move(pos(2, 3), Player::Black));

    let board = game.board();
    for p in [pos(2, 3), pos(3, 3), pos(3, 4), pos(4, 3)] {
        assert_eq!(board.get(p), Cell::Black, "{p}");
    }
    assert_eq!(board.get(pos(4, 4)), Cell::White);
    assert_eq!(game.scores(), (4, 1));
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn occupied_and_non_capturing_squares_are_rejected() {
    let mut game = GameEngine::new();
    let before = game.board_state();

    assert!(!game.make_move(pos(3, 3), Player::Black));
    assert!(!game.make_move(pos(0, 0), Player::Black));

    assert_eq!(game.board_state(), before);
    assert!(!game.can_undo());
}

#[test]
fn random_games_keep_move_and_history_invariants() {
    let mut game = GameEngine::new();
    let mut ai_black = AIEngine::with_seed(Difficulty::Easy, 17);
    let mut ai_white = AIEngine::with_seed(Difficulty::Easy, 18);

    while !game.is_game_over() {
        let side = game.current_player();

        // Legality and the capture set agree on every square, for both sides
        for player in [Player::Black, Player::White] {
            for p in Pos::all() {
                assert_eq!(
                    !rules::flippable(game.board(), p, player).is_empty(),
                    game.can_move(p, player),
                    "{player:?} at {p}"
                );
            }
        }

        let ai = match side {
            Player::Black => &mut ai_black,
            Player::White => &mut ai_white,
        };
        match ai.best_move(&game, side) {
            Some(p) => {
                let (b, w) = game.scores();
                let flips = rules::flippable(game.board(), p, side);
                assert!(game.make_move(p, side));
                let (nb, nw) = game.scores();
                assert_eq!(nb + nw, b + w + 1);
                for f in flips {
                    assert_eq!(game.board().get(f).player(), Some(side));
                }
            }
            None => game.pass_turn(),
        }

        // Undo then redo lands on the identical state
        let state = (game.board_state(), game.scores(), game.current_player(), game.last_move());
        assert!(game.undo());
        assert!(game.redo());
        assert_eq!(
            (game.board_state(), game.scores(), game.current_player(), game.last_move()),
            state
        );
        assert!(!game.can_redo());
    }

    let (black, white) = game.scores();
    let expected = match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(Player::Black),
        std::cmp::Ordering::Less => GameOutcome::Winner(Player::White),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    };
    assert_eq!(game.winner(), Some(expected));
}

#[test]
fn undo_redo_round_trip_and_truncation() {
    let mut game = GameEngine::new();
    game.make_move(pos(2, 3), Player::Black);
    game.make_move(pos(2, 2), Player::White);
    let snapshot = (game.board_state(), game.scores(), game.current_player());

    assert!(game.undo());
    assert!(game.redo());
    assert_eq!((game.board_state(), game.scores(), game.current_player()), snapshot);

    // Undo twice then branch: the redo tail is gone
    game.undo();
    game.undo();
    assert_eq!(game.scores(), (2, 2));
    assert!(game.make_move(pos(5, 4), Player::Black));
    assert!(!game.can_redo());
    assert!(!game.redo());
    assert_eq!(game.history_len(), 2);
}

#[test]
fn game_over_when_neither_side_can_move() {
    let mut board = Board::empty();
    board.place_disc(pos(0, 0), Player::White);
    board.place_disc(pos(7, 7), Player::White);
    board.place_disc(pos(0, 7), Player::Black);
    let game = GameEngine::from_board(board);

    assert!(!game.player_can_move(Player::Black));
    assert!(!game.player_can_move(Player::White));
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(GameOutcome::Winner(Player::White)));
}

#[test]
fn full_board_draw() {
    let mut board = Board::empty();
    for p in Pos::all() {
        let player = if p.row % 2 == 0 { Player::Black } else { Player::White };
        board.place_disc(p, player);
    }
    let game = GameEngine::from_board(board);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(GameOutcome::Draw));
    assert_eq!(game.winner().map(GameOutcome::code), Some(0));
}

#[test]
fn ai_tiers_return_legal_moves_through_a_game() {
    for difficulty in Difficulty::ALL {
        let mut game = GameEngine::new();
        let mut human = AIEngine::with_seed(Difficulty::Easy, 5);
        let mut ai = AIEngine::with_seed(difficulty, 6);
        ai.set_depths(2, 3);

        for _ in 0..20 {
            if game.is_game_over() {
                break;
            }
            let side = game.current_player();
            let engine = if side == Player::White { &mut ai } else { &mut human };
            let result = engine.get_move_with_stats(game.board(), side);
            match result.best_move {
                Some(p) => assert!(game.make_move(p, side), "{difficulty:?} chose {p}"),
                None => {
                    assert_eq!(result.search_type, SearchType::NoMove);
                    game.pass_turn();
                }
            }
        }
    }
}

#[test]
fn search_tiers_prefer_corners_and_avoid_x_squares() {
    // White can reach corner (7,7) and the X-square (6,6) among others
    let mut board = Board::empty();
    board.place_disc(pos(4, 4), Player::White);
    board.place_disc(pos(5, 5), Player::Black);
    board.place_disc(pos(6, 6), Player::Black);
    board.place_disc(pos(3, 5), Player::White);
    board.place_disc(pos(4, 5), Player::Black);

    let moves = valid_moves(&board, Player::White);
    assert!(moves.contains(&pos(7, 7)));

    for difficulty in [Difficulty::Hard, Difficulty::Expert] {
        let mut ai = AIEngine::with_seed(difficulty, 0);
        let result = ai.get_move_with_stats(&board, Player::White);
        assert_eq!(result.best_move, Some(pos(7, 7)));
        assert_eq!(result.search_type, SearchType::Corner);
    }

    // Without the corner the searched move is never an X-square
    board.set(pos(6, 6), Cell::Empty);
    let mut ai = AIEngine::with_seed(Difficulty::Hard, 0);
    let result = ai.get_move_with_stats(&board, Player::White);
    if let Some(p) = result.best_move {
        assert!(!is_corner(p));
        if result.search_type == SearchType::AlphaBeta {
            assert!(!is_x_square(p));
        }
    }
}

/// Unpruned minimax built from the public API, same non-flipping children
fn plain_minimax(board: &Board, me: Player, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 {
        return evaluate_for(board, me);
    }
    let side = if maximizing { me } else { me.opponent() };
    let moves = valid_moves(board, side);
    if moves.is_empty() {
        if board.is_full() {
            return match me {
                Player::White => terminal_score(board),
                Player::Black => -terminal_score(board),
            };
        }
        return plain_minimax(board, me, depth - 1, !maximizing);
    }
    let values = moves.into_iter().map(|m| {
        let mut child = *board;
        child.place_disc(m, side);
        plain_minimax(&child, me, depth - 1, !maximizing)
    });
    if maximizing {
        values.max().unwrap_or(i32::MIN)
    } else {
        values.min().unwrap_or(i32::MAX)
    }
}

#[test]
fn alphabeta_matches_plain_minimax() {
    let mut game = GameEngine::new();
    game.make_move(pos(2, 3), Player::Black);
    game.make_move(pos(2, 2), Player::White);
    game.make_move(pos(3, 2), Player::Black);
    let board = *game.board();

    for me in [Player::White, Player::Black] {
        for depth in 0..=4u8 {
            let mut searcher = Searcher::new(me);
            let pruned = searcher.minimax(&board, depth, i32::MIN, i32::MAX, true);
            assert_eq!(pruned, plain_minimax(&board, me, depth, true), "{me:?} depth {depth}");
        }
    }
}

#[test]
fn depth_zero_is_the_evaluator() {
    let board = Board::new();
    let mut searcher = Searcher::new(Player::White);
    assert_eq!(searcher.minimax(&board, 0, i32::MIN, i32::MAX, false), evaluate(&board));
}

#[test]
fn host_plays_a_short_game() {
    let mut host = ReversiHost::new();
    assert_eq!(host.get_ai_move(), (-1, -1));

    host.reset_game(1, 3);
    assert!(host.make_move(2, 3, 1));
    let (row, col) = host.get_ai_move();
    assert!(host.make_move(row, col, 2));
    assert_eq!(host.get_current_player(), 1);

    let (black, white) = host.get_scores();
    let cells = host.get_board_state();
    assert_eq!(cells.iter().filter(|&&c| c == 1).count() as i32, black);
    assert_eq!(cells.iter().filter(|&&c| c == 2).count() as i32, white);
    assert_eq!(black + white, 6);
}
