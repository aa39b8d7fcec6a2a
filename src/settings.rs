//! User settings persisted as JSON
//!
//! Stored as pretty-printed JSON in `reversi_settings.json` next to the
//! working directory. Loading is forgiving: [`GameSettings::load_or_default`]
//! logs and falls back to defaults on a missing or malformed file, so a bad
//! settings file never prevents a game from starting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{Difficulty, DEFAULT_EXPERT_DEPTH, DEFAULT_HARD_DEPTH, MAX_DEPTH};
use crate::error::ReversiResult;
use crate::host::GameMode;

/// Settings filename
pub const SETTINGS_FILENAME: &str = "reversi_settings.json";

/// Preferences chosen in the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Search depth for Hard (root ply included)
    pub hard_depth: u8,
    /// Search depth for Expert (root ply included)
    pub expert_depth: u8,
    /// Highlight legal moves for the side to move
    pub show_valid_moves: bool,
    /// Minimum delay before the AI's move is shown
    pub ai_delay_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            hard_depth: DEFAULT_HARD_DEPTH,
            expert_depth: DEFAULT_EXPERT_DEPTH,
            show_valid_moves: true,
            ai_delay_ms: 300,
        }
    }
}

impl GameSettings {
    /// Default settings file location
    pub fn default_path() -> PathBuf {
        PathBuf::from(SETTINGS_FILENAME)
    }

    /// Read settings from `path`. Depths are clamped to `1..=MAX_DEPTH`.
    pub fn load(path: impl AsRef<Path>) -> ReversiResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let settings: GameSettings = serde_json::from_str(&contents)?;
        Ok(settings.clamped())
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> ReversiResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Load from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    fn clamped(mut self) -> Self {
        self.hard_depth = self.hard_depth.clamp(1, MAX_DEPTH);
        self.expert_depth = self.expert_depth.clamp(1, MAX_DEPTH);
        self
    }
}
