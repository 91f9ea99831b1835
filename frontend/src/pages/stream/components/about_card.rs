//! About Card
//!
//! Host bio and follower count.

use crate::components::{Card, Skeleton};
use egui::{Color32, FontId, RichText};

pub const ABOUT_CARD_HEIGHT: f32 = 160.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutCardView {
    pub host_name: String,
    pub bio: String,
    pub follower_label: String,
    pub viewer_is_host: bool,
}

impl AboutCardView {
    pub fn title(&self) -> String {
        format!("About {}", self.host_name)
    }
}

pub fn render_about_card(ui: &mut egui::Ui, view: &AboutCardView, width: f32) {
    Card::new()
        .width(width)
        .min_height(ABOUT_CARD_HEIGHT)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(view.title())
                        .font(FontId::proportional(16.0))
                        .strong()
                        .color(Color32::WHITE),
                );
                if view.viewer_is_host {
                    ui.label(
                        RichText::new("(you)")
                            .font(FontId::proportional(12.0))
                            .color(Color32::from_rgb(156, 163, 175)),
                    );
                }
            });
            ui.label(
                RichText::new(&view.follower_label)
                    .font(FontId::proportional(13.0))
                    .color(Color32::from_rgb(156, 163, 175)),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&view.bio)
                    .font(FontId::proportional(14.0))
                    .color(Color32::LIGHT_GRAY),
            );
        });
}

pub fn render_about_card_skeleton(ui: &mut egui::Ui, width: f32) {
    Skeleton::new(width, ABOUT_CARD_HEIGHT)
        .corner_radius(12.0)
        .show(ui);
}
