// SPDX-License-Identifier: MIT OR Apache-2.0

//! Warm wooden palette and app-wide visuals for the Mancala client.

use eframe::egui::{self, Color32};

/// Palette shared by the board widget and the toast surface.
pub struct Palette {
    // Surfaces
    pub background: Color32,
    pub surface: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,

    // Board
    pub board_bg: Color32,
    pub pit_fill: Color32,
    pub pit_idle: Color32,
    pub home_fill: Color32,

    // Accents, reused by toasts
    pub info: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_gray(22),
            surface: Color32::from_gray(32),

            text_primary: Color32::from_gray(235),
            text_secondary: Color32::from_gray(170),

            // Carved-wood board with lighter pits
            board_bg: Color32::from_rgb(94, 62, 34),
            pit_fill: Color32::from_rgb(173, 123, 74),
            pit_idle: Color32::from_rgb(133, 94, 57),
            home_fill: Color32::from_rgb(199, 156, 96),

            info: Color32::from_rgb(59, 130, 246),
            success: Color32::from_rgb(34, 197, 94),
            warning: Color32::from_rgb(251, 146, 60),
            error: Color32::from_rgb(239, 68, 68),
        }
    }
}

/// Apply the app-wide visuals.
pub fn apply_theme(ctx: &egui::Context) {
    let palette = Palette::default();
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = palette.background;
    style.visuals.window_fill = palette.surface;
    style.visuals.override_text_color = Some(palette.text_primary);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);

    ctx.set_style(style);
}
