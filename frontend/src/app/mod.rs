//! Application Module - MVU Controller
//!
//! Coordinates the watch page view with the background logic thread.
//!
//! # Structure
//!
//! - `state.rs`: application state and the MVU loop
//! - `ui_handler.rs`: applies UI commands from the page
//! - `logic_handler.rs`: applies events from the logic thread
//!
//! # Communication Flow
//!
//! ```text
//! StreamPlayer --> UiCommand --> ui_handler --> ChatSidebar
//!
//! SessionGate --> LogicCommand --> Logic thread --> ViewerTokenProvider
//! Logic thread --> LogicEvent --> logic_handler --> SessionGate
//! ```

mod logic_handler;
mod state;
mod ui_handler;

pub use state::App;
