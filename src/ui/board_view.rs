//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Player, Pos, BOARD_SIZE};
use crate::engine::Snapshot;

use super::theme::{self, Palette};

/// Board view handles rendering and input for the game board.
///
/// It paints directly from a [`Snapshot`] and resolves pointer clicks to
/// board coordinates; validation is entirely the engine's job.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &Snapshot, palette: &Palette) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y) - 2.0 * theme::BOARD_MARGIN;
        self.cell_size = (board_size - BOARD_SIZE as f32 * theme::CELL_GAP) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );
        self.board_rect = response.rect;

        let hover = if snapshot.status.is_terminal() {
            None
        } else {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        };

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                self.draw_cell(&painter, snapshot, palette, pos, hover == Some(pos));
            }
        }

        if let Some(line) = snapshot.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if response.clicked() {
            return response.hover_pos().and_then(|p| self.screen_to_board(p));
        }
        None
    }

    /// Draw one cell plate and its mark
    fn draw_cell(
        &self,
        painter: &Painter,
        snapshot: &Snapshot,
        palette: &Palette,
        pos: Pos,
        hovered: bool,
    ) {
        let rect = self.cell_rect(pos);
        let cell = snapshot.board.get(pos);

        let fill = if hovered && cell.is_empty() && !snapshot.is_pending(pos) {
            palette.cell_hover
        } else {
            palette.cell_fill
        };
        painter.rect_filled(rect, CornerRadius::same(6), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(6),
            Stroke::new(1.0, palette.cell_border),
            egui::StrokeKind::Inside,
        );

        if let Some(owner) = cell.owner() {
            // A flagged mark keeps its shape but takes the warning color
            let color = if snapshot.is_pending(pos) {
                theme::MARK_PENDING
            } else {
                match owner {
                    Player::X => theme::MARK_X,
                    Player::O => theme::MARK_O,
                }
            };
            self.draw_mark(painter, rect, owner, color);
        }
    }

    /// Draw an X or O glyph inside the cell rect
    fn draw_mark(&self, painter: &Painter, rect: Rect, player: Player, color: Color32) {
        let inset = rect.width() * theme::MARK_INSET_RATIO;
        let stroke = Stroke::new(rect.width() * theme::MARK_STROKE_RATIO, color);
        let inner = rect.shrink(inset);

        match player {
            Player::X => {
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
            }
            Player::O => {
                painter.circle_stroke(rect.center(), inner.width() * 0.5, stroke);
            }
        }
    }

    /// Draw the winning line through the three cell centers
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(theme::WIN_STROKE_WIDTH, theme::WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    /// Screen rect of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let step = self.cell_size + theme::CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                theme::CELL_GAP * 0.5 + pos.col as f32 * step,
                theme::CELL_GAP * 0.5 + pos.row as f32 * step,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board position
    fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                if self.cell_rect(pos).contains(screen_pos) {
                    return Some(pos);
                }
            }
        }
        None
    }
}
