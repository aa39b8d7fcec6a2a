//! Game state management: the live game and its undo/redo log

pub mod history;
pub mod state;

pub use history::{History, Snapshot, HISTORY_CAPACITY};
pub use state::GameEngine;
