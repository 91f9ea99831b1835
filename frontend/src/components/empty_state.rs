//! EmptyState Component
//!
//! Centered icon and message filling an otherwise empty area.

use egui::{Color32, RichText, Ui};

pub struct EmptyState {
    icon: String,
    message: String,
    description: Option<String>,
    min_height: f32,
}

impl EmptyState {
    pub fn new(icon: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            message: message.into(),
            description: None,
            min_height: 0.0,
        }
    }

    /// Adds a smaller line below the message
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Height to center the content in
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn show(self, ui: &mut Ui) {
        let content_height = if self.description.is_some() { 96.0 } else { 72.0 };
        let top = ((self.min_height - content_height) / 2.0).max(12.0);

        ui.vertical_centered(|ui| {
            ui.add_space(top);
            ui.label(RichText::new(&self.icon).size(32.0));
            ui.add_space(12.0);
            ui.label(
                RichText::new(&self.message)
                    .size(15.0)
                    .color(Color32::from_rgb(156, 163, 175)),
            );

            if let Some(description) = self.description {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(description)
                        .size(13.0)
                        .color(Color32::from_rgb(107, 114, 128)),
                );
            }
        });
    }
}
