//! Evaluation module for Reversi positions
//!
//! Static scoring of a board snapshot. The evaluation considers:
//! - Positional weights (corners good, squares next to corners bad)
//! - Mobility (squares each side could legally play)
//!
//! Scores are signed towards White: positive favours White.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_for, mobility_score, positional_score, terminal_score};
pub use weights::{Weights, POSITION_WEIGHTS};
