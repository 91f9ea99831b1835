//! Chat Sidebar Context
//!
//! Stores whether the chat panel is collapsed. One instance lives for the
//! viewing session and is passed to the page by reference, so the floating
//! toggle and the grid always read the same value within a frame.

/// Chat panel visibility for the current session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatSidebar {
    collapsed: bool,
}

impl ChatSidebar {
    /// Creates an expanded chat sidebar
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flips the collapse flag
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn collapse(&mut self) {
        self.collapsed = true;
    }

    pub fn expand(&mut self) {
        self.collapsed = false;
    }
}
