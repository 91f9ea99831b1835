//! Chat Toggle
//!
//! Collapses the chat from its header, or re-expands it from a control
//! floating over the top-right corner of the window.

use crate::components::{Button, ButtonVariant};
use crate::events::UiCommand;
use egui::{Align2, Id, Order};

/// Distance of the floating control from the right window edge
pub const FLOATING_TOGGLE_RIGHT: f32 = 8.0;
/// Distance of the floating control from the top window edge
pub const FLOATING_TOGGLE_TOP: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatToggleView {
    pub collapsed: bool,
}

impl ChatToggleView {
    pub fn icon(&self) -> &'static str {
        if self.collapsed { "⬅" } else { "➡" }
    }

    pub fn hint(&self) -> &'static str {
        if self.collapsed { "Expand" } else { "Collapse" }
    }
}

/// Toggle button inside the chat header
pub fn render_chat_toggle(ui: &mut egui::Ui, view: &ChatToggleView) -> Option<UiCommand> {
    show_toggle(ui, view, ButtonVariant::Ghost)
}

/// Toggle button in the foreground layer, anchored to the window corner
pub fn render_floating_chat_toggle(
    ctx: &egui::Context,
    view: &ChatToggleView,
) -> Option<UiCommand> {
    egui::Area::new(Id::new("floating_chat_toggle"))
        .order(Order::Foreground)
        .anchor(
            Align2::RIGHT_TOP,
            [-FLOATING_TOGGLE_RIGHT, FLOATING_TOGGLE_TOP],
        )
        .show(ctx, |ui| show_toggle(ui, view, ButtonVariant::Floating))
        .inner
}

fn show_toggle(
    ui: &mut egui::Ui,
    view: &ChatToggleView,
    variant: ButtonVariant,
) -> Option<UiCommand> {
    let clicked = Button::icon(view.icon())
        .variant(variant)
        .hover_text(view.hint())
        .show(ui)
        .clicked();

    clicked.then_some(UiCommand::ToggleChat)
}
