//! Viewport Breakpoints
//!
//! Classifies the window width into the breakpoints the page layout reacts to.

/// Minimum width of the "large" breakpoint (the first multi-column layout).
pub const MEDIUM_MIN_WIDTH: f32 = 1024.0;
/// Minimum width of the extra-wide breakpoint.
pub const EXTRA_WIDE_MIN_WIDTH: f32 = 1280.0;
/// Minimum width of the widest breakpoint.
pub const WIDEST_MIN_WIDTH: f32 = 1536.0;

/// Window width breakpoints, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewportClass {
    /// Below the large breakpoint (< 1024 px). Single column.
    Narrow,
    /// Large breakpoint (1024-1279 px).
    Medium,
    /// Extra-wide breakpoint (1280-1535 px).
    ExtraWide,
    /// Widest breakpoint (>= 1536 px).
    Widest,
}

impl ViewportClass {
    /// Determines the breakpoint for a window width in logical pixels.
    pub fn from_width(width: f32) -> Self {
        match width {
            w if w >= WIDEST_MIN_WIDTH => ViewportClass::Widest,
            w if w >= EXTRA_WIDE_MIN_WIDTH => ViewportClass::ExtraWide,
            w if w >= MEDIUM_MIN_WIDTH => ViewportClass::Medium,
            _ => ViewportClass::Narrow,
        }
    }

    /// Whether this viewport is at or above the large breakpoint.
    pub fn is_large(self) -> bool {
        self >= ViewportClass::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width_boundaries() {
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(1023.9), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(1279.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::from_width(1280.0), ViewportClass::ExtraWide);
        assert_eq!(ViewportClass::from_width(1535.0), ViewportClass::ExtraWide);
        assert_eq!(ViewportClass::from_width(1536.0), ViewportClass::Widest);
        assert_eq!(ViewportClass::from_width(4000.0), ViewportClass::Widest);
    }

    #[test]
    fn test_is_large() {
        assert!(!ViewportClass::Narrow.is_large());
        assert!(ViewportClass::Medium.is_large());
        assert!(ViewportClass::ExtraWide.is_large());
        assert!(ViewportClass::Widest.is_large());
    }
}
