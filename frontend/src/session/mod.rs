//! Session Module
//!
//! Resolves the viewer identity that gates access to the live room.
//!
//! - `gate.rs`: per-page readiness state machine
//! - `provider.rs`: token provider seam and its configured implementations
//! - `claims.rs`: reads identity and display name out of a viewer token

mod claims;
mod gate;
mod provider;

pub use claims::credentials_from_token;
pub use gate::{SessionGate, SessionState};
pub use provider::{StaticTokenProvider, ViewerTokenProvider, provider_from_config};
