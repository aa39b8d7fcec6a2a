//! Main application for the Reversi GUI

use std::path::PathBuf;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::{Difficulty, GameMode, GameOutcome, GameSettings, Player};

/// Main Reversi application
pub struct ReversiApp {
    state: GameState,
    board_view: BoardView,
    settings_path: PathBuf,
    show_debug: bool,
}

impl ReversiApp {
    /// Create the app with settings loaded from `settings_path`
    pub fn new(_cc: &eframe::CreationContext<'_>, settings_path: PathBuf) -> Self {
        let settings = GameSettings::load_or_default(&settings_path);
        Self {
            state: GameState::new(settings),
            board_view: BoardView::default(),
            settings_path,
            show_debug: false,
        }
    }

    /// Persist and apply changed settings
    fn update_settings(&mut self, settings: GameSettings, restart: bool) {
        if let Err(e) = settings.save(&self.settings_path) {
            warn!(error = %e, "could not save settings");
        }
        self.state.apply_settings(settings);
        if restart {
            self.state.reset();
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for mode in [GameMode::PlayerVsAi, GameMode::PlayerVsPlayer] {
                        if ui.button(format!("New Game ({})", mode.name())).clicked() {
                            let settings = GameSettings { mode, ..self.state.settings.clone() };
                            self.update_settings(settings, true);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        let selected = self.state.settings.difficulty == difficulty;
                        if ui.radio(selected, difficulty.name()).clicked() && !selected {
                            let settings = GameSettings { difficulty, ..self.state.settings.clone() };
                            self.update_settings(settings, false);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut hints = self.state.settings.show_valid_moves;
                    if ui.checkbox(&mut hints, "Valid Move Hints (H)").changed() {
                        self.toggle_hints();
                    }
                    ui.checkbox(&mut self.show_debug, "AI Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.mode().name());
                });
            });
        });
    }

    fn toggle_hints(&mut self) {
        let settings = GameSettings {
            show_valid_moves: !self.state.settings.show_valid_moves,
            ..self.state.settings.clone()
        };
        self.update_settings(settings, false);
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (disc_char, accent, glyph_color) = match turn {
                Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::White => ("○", egui::Color32::from_rgb(220, 220, 225), BLACK_DISC),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disc_char,
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.state.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Waiting for AI", STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (black, white) = self.state.game.scores();
            for (symbol, name, count) in [("●", "Black", black), ("○", "White", white)] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(name).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Difficulty: {}", self.state.settings.difficulty.name()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            let action_button = |ui: &mut egui::Ui, text: &str, enabled: bool| -> bool {
                let color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };
                btn_frame
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(text).size(12.0).color(color))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    })
                    .inner
                    && enabled
            };

            let idle = !self.state.is_ai_thinking();
            ui.horizontal(|ui| {
                if action_button(ui, "Undo", idle && self.state.game.can_undo()) {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if action_button(ui, "Redo", idle && self.state.game.can_redo()) {
                    self.state.redo();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if action_button(ui, "Pass", idle) {
                    if let Err(msg) = self.state.pass() {
                        self.state.message = Some(msg);
                    }
                }
                ui.add_space(4.0);
                if action_button(ui, "New Game", true) {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("History: {}", self.state.game.history_len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(20.0)
                        .color(STATUS_BUSY),
                );
            }

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?}", result.search_type))
                            .size(11.0)
                            .strong()
                            .color(STATUS_OK),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Score: {}  {} nodes  {}ms",
                            result.score, result.nodes, result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (black, white) = self.state.game.scores();
        let headline = match outcome {
            GameOutcome::Winner(player) => format!("{} WINS!", player.name().to_uppercase()),
            GameOutcome::Draw => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("{black} - {white}")).size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let hints = self.state.hints();
            let interactive = self.state.is_human_turn()
                && !self.state.is_ai_thinking()
                && !self.state.is_game_over();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.current_turn(),
                self.state.game.last_move(),
                &hints,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_disc(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, redo, pass, new_game, hints, debug) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::D),
            )
        });

        if undo {
            self.state.undo();
        }
        if redo {
            self.state.redo();
        }
        if pass {
            if let Err(msg) = self.state.pass() {
                self.state.message = Some(msg);
            }
        }
        if new_game {
            self.state.reset();
        }
        if hints {
            self.toggle_hints();
        }
        if debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
