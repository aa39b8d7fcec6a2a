//! Reversi (Othello) rules engine and AI
//!
//! An 8x8 disc-flipping game engine:
//! - Black moves first from the standard four-disc centre
//! - A move must flank at least one straight run of opposing discs
//! - Flanked runs in all eight directions are flipped
//! - The game ends when the board is full or neither side can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, cells, players and positions
//! - [`rules`]: Capture resolution, legality, end-of-game detection
//! - [`game`]: Live game state with bounded undo/redo history
//! - [`eval`]: Static evaluation (positional weights + mobility)
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine with four difficulty tiers
//! - [`host`]: Int-coded boundary for host applications
//! - [`settings`]: Persisted user settings
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, Difficulty, GameEngine, Player, Pos};
//!
//! let mut game = GameEngine::new();
//! let mut ai = AIEngine::with_seed(Difficulty::Medium, 1);
//!
//! // Black opens at d3
//! assert!(game.make_move(Pos::new(2, 3), Player::Black));
//!
//! // AI responds as White
//! if let Some(pos) = ai.best_move(&game, Player::White) {
//!     game.make_move(pos, Player::White);
//!     println!("AI plays {pos}");
//! }
//! ```
//!
//! # AI Tiers
//!
//! 1. Easy: uniform-random legal move
//! 2. Medium: first available corner, else random
//! 3. Hard: corner first, then alpha-beta search avoiding X-squares
//! 4. Expert: as Hard, searched deeper

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod host;
pub mod rules;
pub mod search;
pub mod settings;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{AIEngine, Difficulty, MoveResult, SearchType};
pub use error::{ReversiError, ReversiResult};
pub use game::GameEngine;
pub use host::{GameMode, ReversiHost};
pub use rules::GameOutcome;
pub use settings::GameSettings;
