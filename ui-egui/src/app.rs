// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application state and UI logic.
//!
//! [`App`] is the session controller: it owns the one [`SessionState`] the
//! views render from, talks to the request worker over channels, and maps
//! every response into that state. Requests carry a sequence number so a
//! response overtaken by a newer request is dropped instead of clobbering
//! the state it was not computed from.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use std::thread::JoinHandle;

use mancala_core::session::{Phase, SessionState};

use crate::board_widget::BoardWidget;
use crate::msg::{NetToUi, UiToNet};
use crate::notices::NoticeTracker;
use crate::theme::{self, Palette};
use crate::toast_manager::ToastManager;

/// Main application state
pub struct App {
    /// Channel to send requests to the worker
    ui_tx: Sender<UiToNet>,
    /// Channel to receive responses from the worker
    ui_rx: Receiver<NetToUi>,
    /// Worker thread handle for cleanup
    worker_handle: Option<JoinHandle<()>>,
    /// The session view-state, replaced wholesale per response
    state: SessionState,
    /// Sequence number of the most recently issued request
    seq: u64,
    /// Board widget for rendering
    board_widget: BoardWidget,
    /// Toast notification manager
    toast_manager: ToastManager,
    /// Dispatches a toast only when the derived message changes
    notices: NoticeTracker,
}

impl App {
    pub fn new(ui_tx: Sender<UiToNet>, ui_rx: Receiver<NetToUi>) -> Self {
        Self {
            ui_tx,
            ui_rx,
            worker_handle: None,
            state: SessionState::new(),
            seq: 0,
            board_widget: BoardWidget::new(),
            toast_manager: ToastManager::new(),
            notices: NoticeTracker::new(),
        }
    }

    /// Set the worker thread handle for proper cleanup
    pub fn set_worker_handle(&mut self, handle: JoinHandle<()>) {
        self.worker_handle = Some(handle);
    }

    /// The current session view-state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The toast surface, exposed for assertions in headless tests.
    pub fn toasts(&self) -> &ToastManager {
        &self.toast_manager
    }

    /// Begin a fresh session. Serves both Start and Reset: the service
    /// re-initializes the game from scratch either way.
    pub fn start_game(&mut self) {
        self.seq += 1;
        tracing::info!(seq = self.seq, "requesting new session");
        let _ = self.ui_tx.send(UiToNet::StartGame { seq: self.seq });
    }

    /// Submit a move for the player to act. No-op once the game is over.
    pub fn play_move(&mut self, pit: u32) {
        if self.state.game_over {
            tracing::debug!(pit, "ignoring pit click after game end");
            return;
        }
        self.seq += 1;
        tracing::info!(seq = self.seq, pit, player = %self.state.current_player, "submitting move");
        let _ = self.ui_tx.send(UiToNet::PlayMove {
            seq: self.seq,
            player: self.state.current_player.clone(),
            pit,
        });
    }

    /// Drain pending worker responses and fold them into the state.
    /// Called once per frame, and directly by headless tests.
    pub fn tick(&mut self) {
        while let Ok(msg) = self.ui_rx.try_recv() {
            match msg {
                NetToUi::Status { seq, status } => {
                    if seq != self.seq {
                        tracing::debug!(seq, latest = self.seq, "discarding stale response");
                        continue;
                    }
                    self.state.apply_status(status);
                }
                NetToUi::RequestFailed { seq, message } => {
                    if seq != self.seq {
                        tracing::debug!(seq, latest = self.seq, "discarding stale failure");
                        continue;
                    }
                    tracing::warn!(seq, %message, "request failed");
                    self.state.mark_network_error();
                }
                NetToUi::ShutdownAck => {
                    tracing::debug!("worker acknowledged shutdown");
                }
            }

            if let Some(notice) = self.notices.on_state_change(&self.state) {
                self.toast_manager.add_toast(notice.text(), notice.level());
            }
        }
    }

    fn render_headline(&self, ui: &mut egui::Ui) {
        match self.state.phase() {
            Phase::Welcome => {
                ui.heading("Welcome to Mancala");
            }
            Phase::Playing => {
                ui.heading(format!("Current Player: {}", self.state.current_player));
            }
            Phase::Finished => match &self.state.winner {
                Some(winner) => {
                    ui.heading(format!("Winner: {}", winner.id));
                }
                None => {
                    ui.heading("It's a draw!");
                }
            },
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        if self.state.phase() != Phase::Playing {
            // Empty board shell before the first deal and after game end.
            let palette = Palette::default();
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(640.0, 200.0),
                egui::Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, egui::Rounding::same(12.0), palette.board_bg);
            return;
        }

        let clicked = self
            .board_widget
            .show(ui, &self.state.pits, &self.state.current_player);
        if let Some(pit) = clicked {
            self.play_move(pit);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button(controls_label(&self.state)).clicked() {
            self.start_game();
        }
    }
}

/// The one control button serves both roles; only its label changes.
fn controls_label(state: &SessionState) -> &'static str {
    if state.session_started() {
        "Reset Game"
    } else {
        "Start Game"
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_theme(ctx);

        self.tick();

        egui::TopBottomPanel::top("headline").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| self.render_headline(ui));
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| self.render_controls(ui));
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| self.render_board(ui));
        });

        self.toast_manager.show(ctx);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The worker also exits when the channel disconnects; asking first
        // lets it acknowledge and finish cleanly.
        let _ = self.ui_tx.send(UiToNet::Shutdown);
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
    }
}
