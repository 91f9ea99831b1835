//! Live-stream watch page.
//!
//! Waits for a viewer identity from a token provider, then lays out the
//! host's video, header, info, about and chat panels in a responsive grid
//! with a collapsible chat column. Until the identity is known a skeleton of
//! the same layout is shown.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod layout;
pub mod logging;
pub mod logic;
pub mod models;
pub mod pages;
pub mod session;

pub use error::{PlayerError, Result};
pub use pages::{StreamPlayer, StreamPlayerSkeleton};
