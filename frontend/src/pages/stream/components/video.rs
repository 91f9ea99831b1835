//! Video Component
//!
//! 16:9 area where the room provider draws the host's video. Until frames
//! arrive it shows the connection status for the host.

use crate::components::Skeleton;
use egui::{Color32, FontId, RichText, Vec2};

/// Video area contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoView {
    pub host_name: String,
    pub is_live: bool,
}

impl VideoView {
    /// Status text shown until the host's video is available
    pub fn status_text(&self) -> String {
        if self.is_live {
            format!("Waiting for {}'s video...", self.host_name)
        } else {
            format!("{} is offline", self.host_name)
        }
    }
}

/// Height of a 16:9 video area of the given width
pub fn video_height(width: f32) -> f32 {
    width * 9.0 / 16.0
}

pub fn render_video(ui: &mut egui::Ui, view: &VideoView, width: f32) {
    let height = video_height(width);
    let icon = if view.is_live { "📡" } else { "📴" };

    egui::Frame::new()
        .fill(Color32::from_rgb(15, 15, 20))
        .show(ui, |ui| {
            ui.set_min_size(Vec2::new(width, height));
            ui.set_max_width(width);
            ui.vertical_centered(|ui| {
                ui.add_space((height / 2.0 - 32.0).max(0.0));
                ui.label(RichText::new(icon).font(FontId::proportional(28.0)));
                ui.label(
                    RichText::new(view.status_text())
                        .font(FontId::proportional(18.0))
                        .color(Color32::GRAY),
                );
            });
        });
}

pub fn render_video_skeleton(ui: &mut egui::Ui, width: f32) {
    Skeleton::new(width, video_height(width))
        .corner_radius(0.0)
        .show(ui);
}
