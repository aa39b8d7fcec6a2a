//! Int-coded host boundary
//!
//! [`ReversiHost`] exposes the game and the AI through plain integers, the
//! way a UI written in another language would call into the engine.
//!
//! Codes:
//! - Players: 1 = Black, 2 = White
//! - Cells: 0 = empty, 1 = Black, 2 = White
//! - Difficulty: 0 = Easy, 1 = Medium, 2 = Hard, 3 = Expert
//! - Winner: -1 = game not over, 0 = draw, 1 = Black, 2 = White
//!
//! Every call is total. Before [`ReversiHost::init_game`] the host answers
//! with neutral values (`false`, `0`, an all-zero board, `(-1, -1)` for the
//! AI move) instead of failing.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Player, Pos, TOTAL_CELLS};
use crate::engine::{AIEngine, Difficulty};
use crate::error::{ReversiError, ReversiResult};
use crate::game::GameEngine;
use crate::settings::GameSettings;

/// Colour the computer plays
pub const AI_PLAYER: Player = Player::White;

/// Who controls White
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board
    PlayerVsPlayer,
    /// Human Black against the AI as White
    #[default]
    PlayerVsAi,
}

impl GameMode {
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            GameMode::PlayerVsPlayer => 0,
            GameMode::PlayerVsAi => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsAi => "Player vs AI",
        }
    }
}

impl TryFrom<i32> for GameMode {
    type Error = ReversiError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GameMode::PlayerVsPlayer),
            1 => Ok(GameMode::PlayerVsAi),
            other => Err(ReversiError::InvalidGameMode(other)),
        }
    }
}

/// Engine state owned on behalf of a host application
#[derive(Debug, Default)]
pub struct ReversiHost {
    game: Option<GameEngine>,
    ai: Option<AIEngine>,
    mode: GameMode,
}

impl ReversiHost {
    /// Host with nothing initialized
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose AI and mode come from `settings`; the game still has to
    /// be started with [`init_game`](Self::init_game).
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            game: None,
            ai: Some(AIEngine::from_settings(settings)),
            mode: settings.mode,
        }
    }

    /// Create a fresh game. The AI is created at Medium if there is none.
    pub fn init_game(&mut self) {
        self.game = Some(GameEngine::new());
        if self.ai.is_none() {
            self.ai = Some(AIEngine::new(Difficulty::default()));
        }
        debug!("game initialized");
    }

    /// Start over with a new mode and difficulty.
    ///
    /// Unknown mode codes keep the current mode; unknown difficulty codes
    /// select Medium.
    pub fn reset_game(&mut self, mode: i32, difficulty: i32) {
        match GameMode::try_from(mode) {
            Ok(mode) => self.mode = mode,
            Err(e) => debug!(error = %e, "keeping current game mode"),
        }
        let difficulty = Difficulty::try_from(difficulty).unwrap_or_else(|e| {
            debug!(error = %e, "falling back to Medium");
            Difficulty::Medium
        });

        self.game = Some(GameEngine::new());
        match self.ai.as_mut() {
            Some(ai) => ai.set_difficulty(difficulty),
            None => self.ai = Some(AIEngine::new(difficulty)),
        }
        debug!(mode = self.mode.name(), difficulty = difficulty.name(), "game reset");
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.game.is_some()
    }

    #[inline]
    pub fn game_mode(&self) -> GameMode {
        self.mode
    }

    /// Difficulty code of the AI, Medium when none exists yet
    pub fn difficulty(&self) -> i32 {
        self.ai
            .as_ref()
            .map_or(Difficulty::default(), AIEngine::difficulty)
            .code()
    }

    /// Borrow the underlying game, if initialized
    #[inline]
    pub fn game(&self) -> Option<&GameEngine> {
        self.game.as_ref()
    }

    pub fn make_move(&mut self, row: i32, col: i32, player: i32) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        match decode_move(row, col, player) {
            Ok((pos, player)) => game.make_move(pos, player),
            Err(e) => {
                trace!(error = %e, "rejected move request");
                false
            }
        }
    }

    pub fn can_move(&self, row: i32, col: i32, player: i32) -> bool {
        match (self.game.as_ref(), decode_move(row, col, player)) {
            (Some(game), Ok((pos, player))) => game.can_move(pos, player),
            _ => false,
        }
    }

    pub fn player_can_move(&self, player: i32) -> bool {
        match (self.game.as_ref(), Player::try_from(player)) {
            (Some(game), Ok(player)) => game.player_can_move(player),
            _ => false,
        }
    }

    pub fn pass_turn(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.pass_turn();
        }
    }

    /// 64 cell codes in row-major order
    pub fn get_board_state(&self) -> [i32; TOTAL_CELLS] {
        self.game
            .as_ref()
            .map_or([0; TOTAL_CELLS], GameEngine::board_state)
    }

    /// (black, white) disc counts
    pub fn get_scores(&self) -> (i32, i32) {
        self.game.as_ref().map_or((0, 0), |game| {
            let (black, white) = game.scores();
            (black as i32, white as i32)
        })
    }

    /// Side to move, 0 when uninitialized
    pub fn get_current_player(&self) -> i32 {
        self.game
            .as_ref()
            .map_or(0, |game| game.current_player().code())
    }

    /// Force the side to move. Unknown codes are ignored.
    pub fn set_current_player(&mut self, player: i32) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        match Player::try_from(player) {
            Ok(player) => game.set_current_player(player),
            Err(e) => trace!(error = %e, "ignored set_current_player"),
        }
    }

    pub fn undo(&mut self) -> bool {
        self.game.as_mut().is_some_and(GameEngine::undo)
    }

    pub fn redo(&mut self) -> bool {
        self.game.as_mut().is_some_and(GameEngine::redo)
    }

    pub fn can_undo(&self) -> bool {
        self.game.as_ref().is_some_and(GameEngine::can_undo)
    }

    pub fn can_redo(&self) -> bool {
        self.game.as_ref().is_some_and(GameEngine::can_redo)
    }

    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(GameEngine::is_game_over)
    }

    /// -1 while running (or uninitialized), 0 draw, 1 Black, 2 White
    pub fn get_winner(&self) -> i32 {
        self.game
            .as_ref()
            .and_then(GameEngine::winner)
            .map_or(-1, |outcome| outcome.code())
    }

    /// AI move for White as (row, col), or (-1, -1) if there is none
    pub fn get_ai_move(&mut self) -> (i32, i32) {
        let (Some(game), Some(ai)) = (self.game.as_ref(), self.ai.as_mut()) else {
            return (-1, -1);
        };
        match ai.best_move(game, AI_PLAYER) {
            Some(pos) => (pos.row as i32, pos.col as i32),
            None => (-1, -1),
        }
    }

    pub fn get_valid_moves_count(&self, player: i32) -> i32 {
        match (self.game.as_ref(), Player::try_from(player)) {
            (Some(game), Ok(player)) => game.valid_moves_count(player) as i32,
            _ => 0,
        }
    }
}

fn decode_move(row: i32, col: i32, player: i32) -> ReversiResult<(Pos, Player)> {
    let pos = Pos::try_new(row, col).ok_or(ReversiError::InvalidPosition { row, col })?;
    let player = Player::try_from(player)?;
    Ok((pos, player))
}
