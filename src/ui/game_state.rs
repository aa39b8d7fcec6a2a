//! Game state management for the Reversi GUI
//!
//! Wraps a [`GameEngine`] with the front-end flow: whose turn is human,
//! automatic passes, game-over detection and the AI worker thread.

use crate::host::AI_PLAYER;
use crate::{AIEngine, GameEngine, GameMode, GameOutcome, GameSettings, MoveResult, Player, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: GameEngine,
    pub settings: GameSettings,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    /// Engine is lent to the worker thread while it thinks
    ai: Option<AIEngine>,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            game: GameEngine::new(),
            ai: Some(AIEngine::from_settings(&settings)),
            settings,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start a new game with the current settings
    pub fn reset(&mut self) {
        self.game.init_game();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        if self.ai.is_none() {
            self.ai = Some(AIEngine::from_settings(&self.settings));
        }
        self.sync_ai();
    }

    /// Push difficulty and depths from the settings into the AI, if it is
    /// not lent to a worker
    fn sync_ai(&mut self) {
        if let Some(ai) = self.ai.as_mut() {
            ai.set_difficulty(self.settings.difficulty);
            ai.set_depths(self.settings.hard_depth, self.settings.expert_depth);
        }
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.game.current_player()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game.winner()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode() {
            GameMode::PlayerVsAi => self.current_turn() != AI_PLAYER,
            GameMode::PlayerVsPlayer => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.mode() == GameMode::PlayerVsAi && self.current_turn() == AI_PLAYER
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal squares to highlight for the side to move
    pub fn hints(&self) -> Vec<Pos> {
        if !self.settings.show_valid_moves || !self.is_human_turn() || self.is_game_over() {
            return Vec::new();
        }
        self.game.valid_moves(self.current_turn())
    }

    /// Attempt to place a disc for the side to move
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let player = self.current_turn();
        if !self.game.make_move(pos, player) {
            return Err(format!("{pos} is not a legal move"));
        }

        self.message = None;
        self.advance();
        Ok(())
    }

    /// Pass on behalf of the side to move, only when it has no legal move
    pub fn pass(&mut self) -> Result<(), String> {
        if self.is_game_over() || self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Cannot pass now".to_string());
        }
        let player = self.current_turn();
        if self.game.player_can_move(player) {
            return Err(format!("{} still has a legal move", player.name()));
        }
        self.game.pass_turn();
        self.advance();
        Ok(())
    }

    /// Post-move bookkeeping: report game over, or pass for a side that
    /// cannot move.
    fn advance(&mut self) {
        if let Some(outcome) = self.outcome() {
            let (black, white) = self.game.scores();
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => format!("{} wins {black}-{white}", player.name()),
                GameOutcome::Draw => format!("Draw {black}-{white}"),
            });
            debug!(?outcome, black, white, "game over");
            return;
        }

        let player = self.current_turn();
        if !self.game.player_can_move(player) {
            self.game.pass_turn();
            self.message = Some(format!("{} has no legal move and passes", player.name()));
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }
        let Some(mut ai) = self.ai.take() else {
            return;
        };

        let game = self.game.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = ai.get_move_with_stats(game.board(), AI_PLAYER);
            let _ = tx.send((ai, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once it is ready and the display delay is over
    pub fn check_ai_result(&mut self) {
        let delay = Duration::from_millis(self.settings.ai_delay_ms);
        let received = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => {
                if start_time.elapsed() < delay {
                    return;
                }
                match receiver.try_recv() {
                    Ok(received) => received,
                    Err(TryRecvError::Empty) => return,
                    Err(TryRecvError::Disconnected) => {
                        warn!("AI worker exited without a result");
                        self.ai_state = AiState::Idle;
                        self.ai = Some(AIEngine::from_settings(&self.settings));
                        self.message = Some("AI error".to_string());
                        return;
                    }
                }
            }
            AiState::Idle => return,
        };

        let (ai, result) = received;
        // Settings may have changed while the worker held the engine
        self.ai = Some(ai);
        self.sync_ai();
        self.ai_state = AiState::Idle;

        match result.best_move {
            Some(pos) if self.game.make_move(pos, AI_PLAYER) => {}
            _ => self.game.pass_turn(),
        }
        self.last_ai_result = Some(result);
        self.advance();
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo one step; against the AI, keep undoing until the human is to move
    pub fn undo(&mut self) {
        if self.is_ai_thinking() || !self.game.undo() {
            return;
        }
        while self.is_ai_turn() && self.game.can_undo() {
            self.game.undo();
        }
        self.message = None;
    }

    /// Redo one step; against the AI, also replay the AI's reply
    pub fn redo(&mut self) {
        if self.is_ai_thinking() || !self.game.redo() {
            return;
        }
        while self.is_ai_turn() && self.game.can_redo() {
            self.game.redo();
        }
        self.message = None;
    }

    /// Apply new settings; the AI picks them up immediately
    pub fn apply_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
        self.sync_ai();
    }
}
