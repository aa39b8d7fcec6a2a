//! Board rendering for the Reversi GUI

use crate::{Board, Player, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area (labels included)
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if it is a legal move
    /// for `to_move`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Player,
        last_move: Option<Pos>,
        hints: &[Pos],
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, board);

        for &pos in hints {
            self.draw_hint(&painter, pos);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if !interactive {
            return None;
        }

        let mut clicked_pos = None;
        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(pos) = self.screen_to_board(pointer_pos) {
                let is_valid = crate::rules::is_legal_move(board, pos, to_move);
                self.draw_hover_preview(&painter, board, pos, to_move, is_valid);

                if response.clicked() && is_valid {
                    clicked_pos = Some(pos);
                }
            }
        }

        clicked_pos
    }

    /// The 8x8 square area inside the label margin
    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = Pos2::new(area.min.x + offset, area.min.y);
            let end = Pos2::new(area.min.x + offset, area.max.y);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = Pos2::new(area.min.x, area.min.y + offset);
            let end = Pos2::new(area.max.x, area.min.y + offset);
            painter.line_segment([start, end], stroke);
        }

        painter.rect_stroke(area, CornerRadius::ZERO, stroke, StrokeKind::Middle);
    }

    /// Draw coordinate labels (a-h across, 1-8 down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let area = self.play_area();

        for i in 0..BOARD_SIZE {
            let center = (i as f32 + 0.5) * self.cell_size;

            let letter = (b'a' + i as u8) as char;
            let top = Pos2::new(area.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_TEXT);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, area.min.y + center);
            painter.text(left, egui::Align2::CENTER_CENTER, i + 1, font.clone(), LABEL_TEXT);
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            if let Some(player) = board.get(pos).player() {
                self.draw_disc(painter, pos, player);
            }
        }
    }

    /// Draw a single disc with shadow and highlight
    fn draw_disc(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match player {
            Player::Black => {
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Player::White => {
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Small dot on a square the side to move may play
    fn draw_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, valid_move_hint());
    }

    fn draw_hover_preview(
        &self,
        painter: &Painter,
        board: &Board,
        pos: Pos,
        to_move: Player,
        is_valid: bool,
    ) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        if is_valid {
            let color = match to_move {
                Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
                Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
            };
            painter.circle_filled(center, radius, color);
        } else if board.is_empty(pos) {
            painter.circle_filled(center, radius * 0.5, hover_invalid());
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_area().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }

    /// Centre of the square at `pos`
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let area = self.play_area();
        Pos2::new(
            area.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            area.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}
