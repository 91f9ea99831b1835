//! Infrastructure Layer
//!
//! Network clients for the external services the player depends on.
//!
//! # Components
//!
//! - `token_client`: framed request/response client for the viewer token service
//! - `tls_client`: TLS connection utilities

pub mod tls_client;
pub mod token_client;

pub use token_client::TokenClient;
