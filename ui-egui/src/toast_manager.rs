// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transient toast notifications, stacked bottom-center and auto-dismissed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, RichText, Vec2};

use crate::theme::Palette;

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn color(&self, palette: &Palette) -> Color32 {
        match self {
            ToastType::Info => palette.info,
            ToastType::Success => palette.success,
            ToastType::Warning => palette.warning,
            ToastType::Error => palette.error,
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    toast_type: ToastType,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: Duration::from_millis(2000),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    /// 0.0 = fully visible, 1.0 = fully transparent. The toast fades over
    /// its final half second.
    pub fn fade_factor(&self) -> f32 {
        const FADE: Duration = Duration::from_millis(500);
        let elapsed = self.created_at.elapsed();
        if elapsed + FADE > self.duration {
            let time_left = self.duration.saturating_sub(elapsed).as_secs_f32();
            1.0 - (time_left / FADE.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Owns the active toasts and draws them each frame.
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    max_toasts: usize,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            max_toasts: 3,
        }
    }

    /// Queue a toast, dropping the oldest past the cap.
    pub fn add_toast(&mut self, message: impl Into<String>, level: ToastType) {
        self.add(Toast::new(message, level));
    }

    pub fn add(&mut self, toast: Toast) {
        while self.toasts.len() >= self.max_toasts {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Draw all active toasts and drop the expired ones.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.retain(|toast| !toast.is_expired());
        if self.toasts.is_empty() {
            return;
        }
        // Keep repainting while a fade is running.
        ctx.request_repaint();

        let palette = Palette::default();
        for (idx, toast) in self.toasts.iter().enumerate() {
            let opacity = 1.0 - toast.fade_factor();
            let offset_y = -16.0 - (idx as f32) * 48.0;
            let bg = Color32::from_black_alpha((200.0 * opacity) as u8);

            egui::Window::new(format!("##toast_{idx}"))
                .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, offset_y))
                .title_bar(false)
                .resizable(false)
                .movable(false)
                .frame(
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
                )
                .show(ctx, |ui| {
                    ui.label(
                        RichText::new(&toast.message)
                            .color(toast.toast_type.color(&palette).linear_multiply(opacity))
                            .strong(),
                    );
                });
        }
    }
}
