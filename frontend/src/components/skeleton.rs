//! Skeleton Component
//!
//! Muted blocks standing in for content that has not loaded yet.

use egui::{Color32, Sense, Vec2};

const SKELETON_FILL: Color32 = Color32::from_rgb(45, 55, 72);

/// A rounded placeholder block of fixed size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skeleton {
    size: Vec2,
    corner_radius: f32,
}

impl Skeleton {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width.max(0.0), height.max(0.0)),
            corner_radius: 8.0,
        }
    }

    /// A circle of the given diameter
    pub fn circle(diameter: f32) -> Self {
        Self::new(diameter, diameter).corner_radius(diameter / 2.0)
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::hover());
        ui.painter()
            .rect_filled(rect, self.corner_radius, SKELETON_FILL);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_sizes_clamp_to_zero() {
        assert_eq!(Skeleton::new(-4.0, 10.0).size(), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_circle_is_square() {
        assert_eq!(Skeleton::circle(48.0).size(), Vec2::splat(48.0));
    }
}
