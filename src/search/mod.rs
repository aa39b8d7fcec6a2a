//! Search module for the Reversi AI
//!
//! Contains:
//! - Square classification (corners, X-squares) used for move filtering
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod squares;

pub use alphabeta::{SearchResult, Searcher};
pub use squares::{is_corner, is_x_square, CORNERS, X_SQUARES};
