//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::warn;

use crate::config::Config;
use crate::game::{GameError, GameState, GameStatus, GameView, MoveEntry};

use super::board_view::BoardView;
use super::theme::*;

/// User intents collected during a frame, applied after rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Cell(usize),
    Jump(usize),
    ToggleOrder,
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            state: GameState::with_order(!config.descending),
            board_view: BoardView::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Forward an intent to the engine
    fn dispatch(&mut self, intent: Intent) {
        let result: Result<(), GameError> = match intent {
            Intent::Cell(index) => self.state.apply_move(index).map(|_| ()),
            Intent::Jump(step) => self.state.jump_to(step),
            Intent::ToggleOrder => {
                self.state.toggle_order();
                Ok(())
            }
        };
        if let Err(err) = result {
            warn!(?intent, %err, "intent rejected");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&self, ctx: &Context, intents: &mut Vec<Intent>) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("History", |ui| {
                    if ui.button("Go to game start (Home)").clicked() {
                        intents.push(Intent::Jump(0));
                        ui.close_menu();
                    }
                    if ui.button("Go to latest move (End)").clicked() {
                        intents.push(Intent::Jump(self.state.last_step()));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Toggle order (O)").clicked() {
                        intents.push(Intent::ToggleOrder);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Step {}/{}",
                        self.state.current_step(),
                        self.state.last_step()
                    ));
                });
            });
        });
    }

    /// Render the side panel with status and move list
    fn render_side_panel(&self, ctx: &Context, view: &GameView, intents: &mut Vec<Intent>) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_status_card(ui, view);
                ui.add_space(10.0);
                self.render_history_card(ui, view, intents);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui, view: &GameView) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match view.status {
                GameStatus::Winner(_) => STATUS_WIN,
                GameStatus::Draw => STATUS_DRAW,
                GameStatus::NextPlayer(_) => TEXT_PRIMARY,
            };
            ui.label(RichText::new(view.status.to_string()).size(20.0).strong().color(color));
        });
    }

    fn render_history_card(&self, ui: &mut egui::Ui, view: &GameView, intents: &mut Vec<Intent>) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if ui.button(view.order_label()).clicked() {
                intents.push(Intent::ToggleOrder);
            }
            ui.add_space(8.0);

            ScrollArea::vertical().show(ui, |ui| {
                for entry in &view.moves {
                    if Self::render_move_button(ui, entry) {
                        intents.push(Intent::Jump(entry.step));
                    }
                }
            });
        });
    }

    /// One history button; the active step is bold
    fn render_move_button(ui: &mut egui::Ui, entry: &MoveEntry) -> bool {
        let text = RichText::new(entry.label()).size(12.0);
        let text = if entry.selected {
            text.strong().color(TEXT_PRIMARY)
        } else {
            text.color(TEXT_SECONDARY)
        };
        ui.button(text).clicked()
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, view: &GameView, intents: &mut Vec<Intent>) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(index) = self.board_view.show(ui, view, self.state.next_mark()) {
                        intents.push(Intent::Cell(index));
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&self, ctx: &Context, intents: &mut Vec<Intent>) {
        let step = self.state.current_step();
        let last = self.state.last_step();

        ctx.input(|i| {
            // O - Toggle move list order
            if i.key_pressed(egui::Key::O) {
                intents.push(Intent::ToggleOrder);
            }

            // Left/Right - Step through history
            if i.key_pressed(egui::Key::ArrowLeft) && step > 0 {
                intents.push(Intent::Jump(step - 1));
            }
            if i.key_pressed(egui::Key::ArrowRight) && step < last {
                intents.push(Intent::Jump(step + 1));
            }

            // Home/End - First and latest step
            if i.key_pressed(egui::Key::Home) {
                intents.push(Intent::Jump(0));
            }
            if i.key_pressed(egui::Key::End) {
                intents.push(Intent::Jump(last));
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let view = self.state.view();
        let mut intents = Vec::new();

        self.handle_input(ctx, &mut intents);

        self.render_menu_bar(ctx, &mut intents);
        self.render_side_panel(ctx, &view, &mut intents);
        self.render_board(ctx, &view, &mut intents);

        let changed = !intents.is_empty();
        for intent in intents {
            self.dispatch(intent);
        }
        if changed {
            ctx.request_repaint();
        }
    }
}
