//! Grid Template
//!
//! The watch page is a grid whose column count depends on the viewport and on
//! whether the chat panel is collapsed. The main region (video, header, info,
//! about) spans all columns but the chat column; a collapsed chat is removed
//! from the grid instead of being narrowed.
//!
//! | viewport  | expanded (cols/main/chat) | collapsed (cols/main) |
//! |-----------|---------------------------|-----------------------|
//! | narrow    | 1 / 1 / 1 (stacked)       | 1 / 1                 |
//! | medium    | 3 / 2 / 1                 | 2 / 2                 |
//! | extra-wide| 3 / 2 / 1                 | 2 / 2                 |
//! | widest    | 6 / 5 / 1                 | 2 / 2                 |

use super::viewport::ViewportClass;

/// Height of the top navigation bar; the grid fills the window below it.
pub const HEADER_OFFSET: f32 = 80.0;
/// Vertical gap between the stacked main panels.
pub const PANEL_SPACING: f32 = 16.0;
/// Padding below the last main panel.
pub const MAIN_BOTTOM_PADDING: f32 = 40.0;

/// Column allocation for the watch page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    /// Number of grid columns.
    pub columns: u8,
    /// Columns spanned by the main content region.
    pub main_span: u8,
    /// Columns spanned by the chat region, `None` when chat is not part of the grid.
    pub chat_span: Option<u8>,
}

impl GridSpec {
    /// Computes the grid for a viewport and chat collapse state.
    pub fn for_viewport(viewport: ViewportClass, collapsed: bool) -> Self {
        if collapsed {
            return Self::collapsed(viewport);
        }
        Self::expanded(viewport)
    }

    /// Grid used while the chat panel is shown. Also the loading-state grid.
    pub fn expanded(viewport: ViewportClass) -> Self {
        let (columns, main_span) = match viewport {
            ViewportClass::Narrow => (1, 1),
            ViewportClass::Medium => (3, 2),
            ViewportClass::ExtraWide => (3, 2),
            ViewportClass::Widest => (6, 5),
        };

        Self {
            columns,
            main_span,
            chat_span: Some(1),
        }
    }

    /// Grid used while the chat panel is collapsed.
    pub fn collapsed(viewport: ViewportClass) -> Self {
        let columns = match viewport {
            ViewportClass::Narrow => 1,
            ViewportClass::Medium | ViewportClass::ExtraWide | ViewportClass::Widest => 2,
        };

        Self {
            columns,
            main_span: columns,
            chat_span: None,
        }
    }

    /// True when the regions do not fit side by side and wrap onto separate rows.
    pub fn is_stacked(&self) -> bool {
        self.main_span + self.chat_span.unwrap_or(0) > self.columns
    }

    /// Whether the main region scrolls on its own instead of with the page.
    pub fn main_scrolls_independently(&self) -> bool {
        !self.is_stacked() && self.columns > 1
    }

    /// Splits `total_width` into (main width, chat width).
    ///
    /// Stacked regions each take the full width.
    pub fn column_widths(&self, total_width: f32) -> (f32, Option<f32>) {
        let total_width = total_width.max(0.0);

        if self.is_stacked() {
            return (total_width, self.chat_span.map(|_| total_width));
        }

        let column = total_width / f32::from(self.columns);
        let main = column * f32::from(self.main_span);
        let chat = self.chat_span.map(|span| column * f32::from(span));
        (main, chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_templates() {
        assert_eq!(
            GridSpec::for_viewport(ViewportClass::Narrow, false),
            GridSpec {
                columns: 1,
                main_span: 1,
                chat_span: Some(1)
            }
        );
        assert_eq!(
            GridSpec::for_viewport(ViewportClass::Medium, false),
            GridSpec {
                columns: 3,
                main_span: 2,
                chat_span: Some(1)
            }
        );
        assert_eq!(
            GridSpec::for_viewport(ViewportClass::ExtraWide, false),
            GridSpec {
                columns: 3,
                main_span: 2,
                chat_span: Some(1)
            }
        );
        assert_eq!(
            GridSpec::for_viewport(ViewportClass::Widest, false),
            GridSpec {
                columns: 6,
                main_span: 5,
                chat_span: Some(1)
            }
        );
    }

    #[test]
    fn test_collapsed_templates_drop_chat() {
        for viewport in [
            ViewportClass::Medium,
            ViewportClass::ExtraWide,
            ViewportClass::Widest,
        ] {
            let grid = GridSpec::for_viewport(viewport, true);
            assert_eq!(grid.columns, 2);
            assert_eq!(grid.main_span, 2);
            assert_eq!(grid.chat_span, None);
        }

        let narrow = GridSpec::for_viewport(ViewportClass::Narrow, true);
        assert_eq!(narrow.columns, 1);
        assert_eq!(narrow.chat_span, None);
    }

    #[test]
    fn test_narrow_expanded_is_stacked() {
        let grid = GridSpec::expanded(ViewportClass::Narrow);
        assert!(grid.is_stacked());
        assert!(!grid.main_scrolls_independently());
        assert_eq!(grid.column_widths(600.0), (600.0, Some(600.0)));
    }

    #[test]
    fn test_column_widths_side_by_side() {
        let grid = GridSpec::expanded(ViewportClass::Medium);
        assert!(!grid.is_stacked());
        assert!(grid.main_scrolls_independently());

        let (main, chat) = grid.column_widths(1200.0);
        assert!((main - 800.0).abs() < f32::EPSILON);
        assert_eq!(chat, Some(400.0));

        let (main, chat) = GridSpec::expanded(ViewportClass::Widest).column_widths(1800.0);
        assert!((main - 1500.0).abs() < 0.01);
        assert_eq!(chat, Some(300.0));
    }

    #[test]
    fn test_collapsed_main_takes_full_width() {
        let (main, chat) = GridSpec::collapsed(ViewportClass::Widest).column_widths(1600.0);
        assert!((main - 1600.0).abs() < f32::EPSILON);
        assert_eq!(chat, None);
    }
}
