//! User Avatar Component
//!
//! Circular avatar showing the user's initial, ringed in red while live.

use egui::{Align2, Color32, FontId, Sense, Stroke, Vec2};

const LIVE_RING: Color32 = Color32::from_rgb(239, 68, 68);

/// Circular avatar with an initial letter
pub struct UserAvatar {
    size: f32,
    is_live: bool,
    background_color: Color32,
}

impl UserAvatar {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            is_live: false,
            background_color: Color32::from_rgb(59, 130, 246),
        }
    }

    /// Draws the live ring around the avatar
    pub fn live(mut self, is_live: bool) -> Self {
        self.is_live = is_live;
        self
    }

    pub fn show(self, ui: &mut egui::Ui, username: &str) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::hover());
        let radius = self.size / 2.0;
        let painter = ui.painter();

        painter.circle_filled(rect.center(), radius - 3.0, self.background_color);
        if self.is_live {
            painter.circle_stroke(rect.center(), radius - 1.5, Stroke::new(3.0, LIVE_RING));
        }
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            initial(username),
            FontId::proportional(self.size * 0.4),
            Color32::WHITE,
        );

        response
    }
}

/// Uppercased first letter of `username`, `?` when empty
pub(crate) fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
