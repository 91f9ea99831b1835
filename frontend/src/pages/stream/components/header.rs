//! Stream Header Component
//!
//! Host avatar, name, stream title and live status.

use crate::components::{Skeleton, UserAvatar};
use egui::{Color32, FontId, RichText};

pub const HEADER_HEIGHT: f32 = 72.0;
const AVATAR_SIZE: f32 = 56.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub host_name: String,
    pub image_url: String,
    pub stream_name: String,
    pub is_following: bool,
    pub is_live: bool,
    /// The viewer is the host watching their own stream
    pub viewer_is_host: bool,
}

impl HeaderView {
    /// Label shown on the right: the follow state, or a host marker
    pub fn relationship_label(&self) -> &'static str {
        match (self.viewer_is_host, self.is_following) {
            (true, _) => "Your stream",
            (false, true) => "Following",
            (false, false) => "Not following",
        }
    }
}

pub fn render_header(ui: &mut egui::Ui, view: &HeaderView, width: f32) {
    ui.allocate_ui(egui::vec2(width, HEADER_HEIGHT), |ui| {
        ui.set_width(width);
        ui.horizontal_centered(|ui| {
            ui.add_space(16.0);
            UserAvatar::new(AVATAR_SIZE)
                .live(view.is_live)
                .show(ui, &view.host_name)
                .on_hover_text(view.image_url.as_str());
            ui.add_space(12.0);

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&view.host_name)
                        .font(FontId::proportional(20.0))
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new(&view.stream_name)
                        .font(FontId::proportional(14.0))
                        .color(Color32::LIGHT_GRAY),
                );
                render_status(ui, view.is_live);
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(16.0);
                ui.label(
                    RichText::new(view.relationship_label())
                        .font(FontId::proportional(14.0))
                        .color(Color32::from_rgb(156, 163, 175)),
                );
            });
        });
    });
}

fn render_status(ui: &mut egui::Ui, is_live: bool) {
    let (text, color) = if is_live {
        ("● LIVE", Color32::from_rgb(239, 68, 68))
    } else {
        ("Offline", Color32::GRAY)
    };
    ui.label(RichText::new(text).font(FontId::proportional(12.0)).color(color));
}

pub fn render_header_skeleton(ui: &mut egui::Ui, width: f32) {
    ui.allocate_ui(egui::vec2(width, HEADER_HEIGHT), |ui| {
        ui.set_width(width);
        ui.horizontal_centered(|ui| {
            ui.add_space(16.0);
            Skeleton::circle(AVATAR_SIZE).show(ui);
            ui.add_space(12.0);
            ui.vertical(|ui| {
                Skeleton::new(200.0, 24.0).show(ui);
                ui.add_space(4.0);
                Skeleton::new(100.0, 16.0).show(ui);
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(viewer_is_host: bool, is_following: bool) -> HeaderView {
        HeaderView {
            host_name: "alice".to_string(),
            image_url: String::new(),
            stream_name: "Speedrun".to_string(),
            is_following,
            is_live: true,
            viewer_is_host,
        }
    }

    #[test]
    fn test_relationship_label() {
        assert_eq!(view(false, true).relationship_label(), "Following");
        assert_eq!(view(false, false).relationship_label(), "Not following");
        assert_eq!(view(true, true).relationship_label(), "Your stream");
    }
}
