//! Layout Module
//!
//! Framework-independent layout rules for the watch page.
//!
//! - `viewport.rs`: width breakpoints
//! - `grid.rs`: column template as a function of breakpoint and chat collapse

mod grid;
mod viewport;

pub use grid::{GridSpec, HEADER_OFFSET, MAIN_BOTTOM_PADDING, PANEL_SPACING};
pub use viewport::ViewportClass;
