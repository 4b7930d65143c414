// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mancala board widget: two rows of playground pits flanked by the
//! players' home pits.

use eframe::egui::{self, RichText, Vec2};

use mancala_core::board::split_rows;
use mancala_core::{Pit, PitKind};

use crate::theme::Palette;

/// Widget for rendering and interacting with the Mancala board.
pub struct BoardWidget {
    pit_size: Vec2,
    home_size: Vec2,
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardWidget {
    pub fn new() -> Self {
        Self {
            pit_size: Vec2::new(64.0, 64.0),
            home_size: Vec2::new(64.0, 144.0),
        }
    }

    /// Render the board and return the clicked pit id, if any.
    ///
    /// The pit slice is only borrowed; rendering never reorders or consumes
    /// the caller's sequence. Every pit click is reported; legality is the
    /// service's call, not ours.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        pits: &[Pit],
        current_player: &str,
    ) -> Option<u32> {
        let layout = match split_rows(pits) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::warn!(%err, "cannot lay out board");
                return None;
            }
        };

        let palette = Palette::default();
        let mut clicked = None;

        egui::Frame::none()
            .fill(palette.board_bg)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if self.pit_button(ui, &palette, layout.first_home, current_player) {
                        clicked = Some(layout.first_home.id);
                    }
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            for pit in layout.first_row {
                                if self.pit_button(ui, &palette, pit, current_player) {
                                    clicked = Some(pit.id);
                                }
                            }
                        });
                        ui.horizontal(|ui| {
                            for pit in layout.second_row {
                                if self.pit_button(ui, &palette, pit, current_player) {
                                    clicked = Some(pit.id);
                                }
                            }
                        });
                    });
                    if self.pit_button(ui, &palette, layout.second_home, current_player) {
                        clicked = Some(layout.second_home.id);
                    }
                });
            });

        clicked
    }

    fn pit_button(
        &self,
        ui: &mut egui::Ui,
        palette: &Palette,
        pit: &Pit,
        current_player: &str,
    ) -> bool {
        let (fill, size) = match pit.kind {
            PitKind::Home => (palette.home_fill, self.home_size),
            PitKind::Playground if is_pit_active(pit, current_player) => {
                (palette.pit_fill, self.pit_size)
            }
            PitKind::Playground => (palette.pit_idle, self.pit_size),
        };

        let label = RichText::new(pit.stones.to_string())
            .size(20.0)
            .strong()
            .color(palette.text_primary);
        let button = egui::Button::new(label).fill(fill).min_size(size);
        ui.add(button).clicked()
    }
}

/// Could this pit plausibly be played: stones present and owned by the
/// player to move. Display emphasis only; clicks are submitted either way
/// and the service has the final word.
pub fn is_pit_active(pit: &Pit, current_player: &str) -> bool {
    pit.stones > 0
        && pit
            .owner
            .as_ref()
            .is_some_and(|owner| owner.id == current_player)
}
