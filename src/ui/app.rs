//! Main application for the tic-tac-toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, RichText, TopBottomPanel};

use log::warn;

use crate::engine::{ClassicEngine, GameStatus, MoveError, QueueEngine, Snapshot};

use super::board_view::BoardView;
use super::theme::Palette;

/// Which rule set is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Queue,
}

/// The active rule engine. The app talks to it through the common
/// move/reset/snapshot surface and never inspects it otherwise.
enum Engine {
    Classic(ClassicEngine),
    Queue(QueueEngine),
}

impl Engine {
    fn new(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Engine::Classic(ClassicEngine::new()),
            Variant::Queue => Engine::Queue(QueueEngine::new()),
        }
    }

    fn attempt_move(&mut self, row: i32, col: i32) -> Result<crate::engine::MoveOutcome, MoveError> {
        match self {
            Engine::Classic(engine) => engine.attempt_move(row, col),
            Engine::Queue(engine) => engine.attempt_move(row, col),
        }
    }

    fn reset(&mut self) {
        match self {
            Engine::Classic(engine) => engine.reset(),
            Engine::Queue(engine) => engine.reset(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        match self {
            Engine::Classic(engine) => engine.snapshot(),
            Engine::Queue(engine) => engine.snapshot(),
        }
    }
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    variant: Variant,
    engine: Engine,
    board_view: BoardView,
    dark_mode: bool,
    /// Transient notice shown in place of the turn text
    notice: Option<String>,
    /// Deadline for the classic variant's automatic reset
    auto_reset_at: Option<Instant>,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            engine: Engine::new(Variant::Classic),
            board_view: BoardView::default(),
            dark_mode: false,
            notice: None,
            auto_reset_at: None,
        }
    }
}

impl TicTacToeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::default()
    }

    fn new_game(&mut self, variant: Variant) {
        self.variant = variant;
        self.engine = Engine::new(variant);
        self.notice = None;
        self.auto_reset_at = None;
    }

    fn reset_game(&mut self) {
        self.engine.reset();
        self.notice = None;
        self.auto_reset_at = None;
    }

    fn set_dark_mode(&mut self, ctx: &Context, dark: bool) {
        self.dark_mode = dark;
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    /// Dispatch a click on a cell into the engine
    fn handle_click(&mut self, pos: crate::board::Pos) {
        match self.engine.attempt_move(pos.row as i32, pos.col as i32) {
            Ok(outcome) => {
                self.notice = None;
                if let Some(delay) = outcome.auto_reset_after {
                    self.auto_reset_at = Some(Instant::now() + delay);
                }
            }
            Err(MoveError::CellLocked(_)) => {
                self.notice = Some("That cell is temporarily blocked this turn.".to_owned());
            }
            Err(MoveError::CellOccupied(_)) | Err(MoveError::GameOver) => {
                // Ignored, as a click on a taken cell or a finished board
                // carries no intent worth reporting
            }
            Err(err @ MoveError::OutOfRange { .. }) => {
                warn!("board view produced an invalid coordinate: {err}");
            }
        }
    }

    /// Fire the delayed auto-reset once its deadline passes
    fn poll_auto_reset(&mut self, ctx: &Context) {
        if let Some(deadline) = self.auto_reset_at {
            let now = Instant::now();
            if now >= deadline {
                self.reset_game();
            } else {
                ctx.request_repaint_after(deadline - now);
            }
        }
    }

    fn status_text(&self, snapshot: &Snapshot) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match snapshot.status {
            GameStatus::InProgress => format!("Player {}'s Turn", snapshot.current_player),
            GameStatus::Won(winner) => format!("Player {} Wins!", winner),
            GameStatus::Draw => "It's a Draw!".to_owned(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Classic)").clicked() {
                        self.new_game(Variant::Classic);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Queue Mode)").clicked() {
                        self.new_game(Variant::Queue);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Reset").clicked() {
                        self.reset_game();
                        ui.close_menu();
                    }
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut dark = self.dark_mode;
                    if ui.checkbox(&mut dark, "Dark Mode (D)").changed() {
                        self.set_dark_mode(ctx, dark);
                    }
                });
            });
        });
    }

    /// Render the status line
    fn render_status(&mut self, ctx: &Context, snapshot: &Snapshot) {
        let palette = Palette::of(self.dark_mode);
        TopBottomPanel::top("status").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(self.status_text(snapshot))
                        .size(18.0)
                        .strong()
                        .color(palette.text),
                );
                let caption = match self.variant {
                    Variant::Classic => "Classic",
                    Variant::Queue => "Queue Mode",
                };
                ui.label(RichText::new(caption).size(11.0).color(palette.text_muted));
            });
            ui.add_space(6.0);
        });
    }

    /// Render the bottom control row
    fn render_controls(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.reset_game();
                }

                let mut dark = self.dark_mode;
                if ui.toggle_value(&mut dark, "Dark Mode").changed() {
                    self.set_dark_mode(ctx, dark);
                }

                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.separator();

                let mut variant = self.variant;
                ui.selectable_value(&mut variant, Variant::Classic, "Classic");
                ui.selectable_value(&mut variant, Variant::Queue, "Queue Mode");
                if variant != self.variant {
                    self.new_game(variant);
                }
            });
            ui.add_space(6.0);
        });
    }

    /// Render the board itself
    fn render_board(&mut self, ctx: &Context, snapshot: &Snapshot) {
        let palette = Palette::of(self.dark_mode);
        CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.window_fill))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let clicked = self.board_view.show(ui, snapshot, palette);
                    if let Some(pos) = clicked {
                        self.handle_click(pos);
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_dark) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::D),
            )
        });

        if new_game {
            self.reset_game();
        }
        if toggle_dark {
            self.set_dark_mode(ctx, !self.dark_mode);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.poll_auto_reset(ctx);

        let snapshot = self.engine.snapshot();

        self.render_menu_bar(ctx);
        self.render_status(ctx, &snapshot);
        self.render_controls(ctx);
        self.render_board(ctx, &snapshot);
    }
}
