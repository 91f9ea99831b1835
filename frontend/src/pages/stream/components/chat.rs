//! Chat Panel
//!
//! Chat column: header with the collapse toggle, the policy notice and the
//! message area. Messages travel over the room provider's data channel.

use super::chat_toggle::{ChatToggleView, render_chat_toggle};
use crate::components::{EmptyState, Skeleton};
use crate::events::UiCommand;
use crate::models::{ChatNotice, ChatPolicy};
use egui::{Color32, FontId, RichText};

const CHAT_HEADER_HEIGHT: f32 = 48.0;
const CHAT_FOOTER_HEIGHT: f32 = 40.0;
const CHAT_FILL: Color32 = Color32::from_rgb(24, 32, 48);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub viewer_name: String,
    pub host_name: String,
    pub is_following: bool,
    pub is_live: bool,
    pub viewer_is_host: bool,
    pub policy: ChatPolicy,
}

impl ChatView {
    pub fn notice(&self) -> ChatNotice {
        self.policy.notice(self.is_live)
    }

    /// Whether the viewer may post under the current policy
    pub fn can_send(&self) -> bool {
        match self.notice() {
            ChatNotice::Disabled => false,
            ChatNotice::FollowersOnly | ChatNotice::FollowersOnlyDelayed => {
                self.is_following || self.viewer_is_host
            }
            ChatNotice::Delayed | ChatNotice::Open => true,
        }
    }

    fn footer_text(&self) -> String {
        if self.can_send() {
            format!("Chatting as {}", self.viewer_name)
        } else if self.notice() == ChatNotice::Disabled {
            "Chat is unavailable".to_string()
        } else {
            format!("Follow {} to chat", self.host_name)
        }
    }
}

/// Renders the chat column. Returns `ToggleChat` when the header toggle is clicked.
pub fn render_chat(
    ui: &mut egui::Ui,
    view: &ChatView,
    width: f32,
    height: f32,
) -> Option<UiCommand> {
    let mut command = None;

    egui::Frame::new().fill(CHAT_FILL).show(ui, |ui| {
        ui.set_width(width);
        ui.set_min_height(height);

        ui.horizontal(|ui| {
            ui.set_height(CHAT_HEADER_HEIGHT);
            command = render_chat_toggle(ui, &ChatToggleView { collapsed: false });
            ui.label(
                RichText::new("Stream Chat")
                    .font(FontId::proportional(16.0))
                    .strong()
                    .color(Color32::WHITE),
            );
        });
        ui.separator();

        if let Some(message) = view.notice().message() {
            ui.label(
                RichText::new(message)
                    .font(FontId::proportional(12.0))
                    .color(Color32::from_rgb(156, 163, 175)),
            );
        }

        let message_area = (height - CHAT_HEADER_HEIGHT - CHAT_FOOTER_HEIGHT).max(0.0);
        EmptyState::new("💬", "Welcome to the chat!")
            .description(format!("{} is streaming", view.host_name))
            .min_height(message_area)
            .show(ui);

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(view.footer_text())
                    .font(FontId::proportional(13.0))
                    .color(Color32::LIGHT_GRAY),
            );
        });
    });

    command
}

pub fn render_chat_skeleton(ui: &mut egui::Ui, width: f32, height: f32) {
    Skeleton::new(width, height).corner_radius(0.0).show(ui);
}
