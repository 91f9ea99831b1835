//! Placeholder Page
//!
//! Loading layout mirroring the expanded live layout panel for panel.

use super::render::render_page;
use super::view::{MAIN_PANEL_ORDER, PageView, SkeletonLayout};
use crate::layout::{GridSpec, ViewportClass};

pub struct StreamPlayerSkeleton;

impl StreamPlayerSkeleton {
    /// Expanded grid for `viewport` with a skeleton in every panel slot
    pub fn view(viewport: ViewportClass) -> PageView {
        PageView::Skeleton(SkeletonLayout {
            grid: GridSpec::expanded(viewport),
            main: MAIN_PANEL_ORDER.to_vec(),
            chat: true,
        })
    }

    pub fn show(ui: &mut egui::Ui) {
        let viewport = ViewportClass::from_width(ui.available_width());
        // Skeletons have no interactive parts
        let _ = render_page(ui, &Self::view(viewport));
    }
}
