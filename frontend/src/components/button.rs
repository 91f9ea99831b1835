//! Button Component
//!
//! Compact icon buttons used for panel toggles.

use egui::{Color32, FontId, RichText, Vec2};

const ICON_SIZE: f32 = 16.0;

/// Button variant styles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Transparent until hovered, for buttons inside panel headers
    Ghost,
    /// Filled, for buttons floating over other content
    Floating,
}

impl ButtonVariant {
    fn fill(&self) -> Color32 {
        match self {
            ButtonVariant::Ghost => Color32::TRANSPARENT,
            ButtonVariant::Floating => Color32::from_rgb(30, 41, 59),
        }
    }

    fn stroke(&self) -> egui::Stroke {
        match self {
            ButtonVariant::Ghost => egui::Stroke::NONE,
            ButtonVariant::Floating => egui::Stroke::new(1.0, Color32::from_rgb(51, 65, 85)),
        }
    }
}

/// An icon button with an optional tooltip
pub struct Button {
    icon: String,
    min_size: Vec2,
    variant: ButtonVariant,
    hover_text: Option<String>,
}

impl Button {
    /// Creates a ghost button showing `icon`
    pub fn icon(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            min_size: Vec2::splat(32.0),
            variant: ButtonVariant::Ghost,
            hover_text: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Tooltip shown on hover
    pub fn hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    /// Renders the button and returns the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let button = egui::Button::new(
            RichText::new(&self.icon)
                .font(FontId::proportional(ICON_SIZE))
                .color(Color32::from_rgb(226, 232, 240)),
        )
        .fill(self.variant.fill())
        .stroke(self.variant.stroke())
        .corner_radius(6.0)
        .min_size(self.min_size);

        let response = ui.add(button);
        match self.hover_text {
            Some(text) => response.on_hover_text(text),
            None => response,
        }
    }
}
