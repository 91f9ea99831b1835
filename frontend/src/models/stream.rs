//! Stream Descriptor Model
//!
//! The stream being watched and its chat policy flags.

use serde::{Deserialize, Serialize};

/// Delay applied to chat messages when slow mode is on.
pub const CHAT_DELAY_SECONDS: u32 = 3;

/// Stream metadata resolved by the caller before the page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    pub id: String,
    pub is_live: bool,
    pub is_chat_delayed: bool,
    pub is_chat_enabled: bool,
    pub is_chat_followers_only: bool,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub name: String,
}

impl StreamDescriptor {
    /// Chat policy flags, passed through to the chat panel as-is
    pub fn chat_policy(&self) -> ChatPolicy {
        ChatPolicy {
            enabled: self.is_chat_enabled,
            delayed: self.is_chat_delayed,
            followers_only: self.is_chat_followers_only,
        }
    }
}

/// Chat policy owned by the chat subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatPolicy {
    pub enabled: bool,
    pub delayed: bool,
    pub followers_only: bool,
}

/// Notice shown above the chat area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatNotice {
    /// Chat is off, or the stream is offline
    Disabled,
    FollowersOnly,
    Delayed,
    FollowersOnlyDelayed,
    /// No restriction to announce
    Open,
}

impl ChatPolicy {
    /// Picks the notice for the current stream status
    pub fn notice(&self, is_live: bool) -> ChatNotice {
        if !self.enabled || !is_live {
            return ChatNotice::Disabled;
        }

        match (self.followers_only, self.delayed) {
            (true, true) => ChatNotice::FollowersOnlyDelayed,
            (true, false) => ChatNotice::FollowersOnly,
            (false, true) => ChatNotice::Delayed,
            (false, false) => ChatNotice::Open,
        }
    }
}

impl ChatNotice {
    /// Text for the notice, `None` when there is nothing to show
    pub fn message(&self) -> Option<String> {
        let delayed = format!("Messages are delayed by {} seconds", CHAT_DELAY_SECONDS);
        match self {
            ChatNotice::Disabled => Some("Chat is disabled".to_string()),
            ChatNotice::FollowersOnly => Some("Only followers can chat".to_string()),
            ChatNotice::Delayed => Some(delayed),
            ChatNotice::FollowersOnlyDelayed => {
                Some(format!("Only followers can chat. {}", delayed))
            }
            ChatNotice::Open => None,
        }
    }
}
