//! Card Component
//!
//! Rounded container for the panels below the video.

use egui::Color32;

const CARD_FILL: Color32 = Color32::from_rgb(30, 41, 59);
const CARD_INNER_MARGIN: f32 = 16.0;
/// The stroke sits outside the inner margin and adds to the outer size
const CARD_STROKE_WIDTH: f32 = 1.0;

/// A panel container with a fixed width and a minimum height
pub struct Card {
    width: Option<f32>,
    min_height: f32,
}

impl Card {
    pub fn new() -> Self {
        Self {
            width: None,
            min_height: 0.0,
        }
    }

    /// Outer width of the card, margins and border included
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Outer minimum height of the card, margins and border included
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Renders the card with custom content
    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let chrome = (CARD_INNER_MARGIN + CARD_STROKE_WIDTH) * 2.0;

        egui::Frame::new()
            .fill(CARD_FILL)
            .corner_radius(12.0)
            .inner_margin(CARD_INNER_MARGIN)
            .stroke(egui::Stroke::new(
                CARD_STROKE_WIDTH,
                Color32::from_rgb(51, 65, 85),
            ))
            .show(ui, |ui| {
                if let Some(width) = self.width {
                    ui.set_width((width - chrome).max(0.0));
                }
                ui.set_min_height((self.min_height - chrome).max(0.0));
                add_contents(ui)
            })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Skeleton;
    use egui::{Pos2, RawInput, Rect, Vec2};

    #[test]
    fn test_card_outer_size_matches_skeleton() {
        let ctx = egui::Context::default();
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1300.0, 900.0))),
            ..Default::default()
        };

        let mut card_size = Vec2::ZERO;
        let mut skeleton_size = Vec2::ZERO;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::new())
                .show(ctx, |ui| {
                    card_size = Card::new()
                        .width(800.0)
                        .min_height(120.0)
                        .show(ui, |ui| ui.label("Stream info"))
                        .response
                        .rect
                        .size();
                    skeleton_size = Skeleton::new(800.0, 120.0).show(ui).rect.size();
                });
        });

        assert_eq!(card_size, skeleton_size);
        assert_eq!(card_size, Vec2::new(800.0, 120.0));
    }
}
