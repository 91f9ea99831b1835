//! Context Module
//!
//! Page-scoped UI state shared between components.

mod chat_sidebar;

pub use chat_sidebar::ChatSidebar;
