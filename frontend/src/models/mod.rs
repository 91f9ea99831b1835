//! Data models for the watch page
//!
//! Caller-supplied page data (stream, host, relationship) and the viewer
//! credentials produced by the token provider.

mod host;
mod page;
mod stream;
mod viewer;

pub use host::HostDescriptor;
pub use page::StreamPageData;
pub use stream::{CHAT_DELAY_SECONDS, ChatNotice, ChatPolicy, StreamDescriptor};
pub use viewer::{ViewerCredentials, ViewerIdentity};
