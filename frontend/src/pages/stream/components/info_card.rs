//! Stream Info Card
//!
//! Stream title and thumbnail. Marked editable when the host is watching.

use crate::components::{Card, Skeleton};
use egui::{Color32, FontId, RichText};

pub const INFO_CARD_HEIGHT: f32 = 120.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCardView {
    pub stream_name: String,
    pub thumbnail_url: Option<String>,
    pub editable: bool,
}

pub fn render_info_card(ui: &mut egui::Ui, view: &InfoCardView, width: f32) {
    Card::new()
        .width(width)
        .min_height(INFO_CARD_HEIGHT)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Stream info")
                        .font(FontId::proportional(16.0))
                        .strong()
                        .color(Color32::WHITE),
                );
                if view.editable {
                    ui.label(
                        RichText::new("You can edit your stream info")
                            .font(FontId::proportional(12.0))
                            .color(Color32::from_rgb(156, 163, 175)),
                    );
                }
            });
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Name: {}", view.stream_name))
                    .font(FontId::proportional(14.0))
                    .color(Color32::LIGHT_GRAY),
            );
            let thumbnail = view.thumbnail_url.as_deref().unwrap_or("No thumbnail");
            ui.label(
                RichText::new(format!("Thumbnail: {}", thumbnail))
                    .font(FontId::proportional(14.0))
                    .color(Color32::LIGHT_GRAY),
            );
        });
}

pub fn render_info_card_skeleton(ui: &mut egui::Ui, width: f32) {
    Skeleton::new(width, INFO_CARD_HEIGHT)
        .corner_radius(12.0)
        .show(ui);
}
