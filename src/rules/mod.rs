//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Capture rules (eight-direction ray tracing, flips)
//! - Move legality and move generation
//! - End-of-game detection and scoring

pub mod capture;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{
    execute_move, flippable, has_any_move, has_capture, is_legal_move, mobility, valid_moves,
    DIRECTIONS,
};
pub use outcome::{compare_discs, is_game_over, outcome, GameOutcome};
