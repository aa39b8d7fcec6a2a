//! Error types for host-facing conversions and settings persistence
//!
//! Game operations themselves never fail with an error: illegal moves,
//! history boundaries and "no move" are reported through `bool`/`Option`
//! return values. This type covers the edges where untrusted input enters
//! the crate.

use thiserror::Error;

/// Errors that can occur at the crate boundary
#[derive(Error, Debug)]
pub enum ReversiError {
    /// Player code outside {1, 2}
    #[error("invalid player code: {0}")]
    InvalidPlayer(i32),

    /// Difficulty code outside 0..=3
    #[error("invalid difficulty code: {0}")]
    InvalidDifficulty(i32),

    /// Game mode code outside {0, 1}
    #[error("invalid game mode code: {0}")]
    InvalidGameMode(i32),

    /// Coordinates outside the 8x8 board
    #[error("position ({row}, {col}) is off the board")]
    InvalidPosition { row: i32, col: i32 },

    /// Settings file I/O error
    #[error("settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),
}

/// Result type alias for fallible crate operations
pub type ReversiResult<T> = Result<T, ReversiError>;
