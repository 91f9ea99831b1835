//! Host Descriptor Model

use serde::{Deserialize, Serialize};

const DEFAULT_BIO: &str = "This user prefers to keep an air of mystery about them.";

/// The streamer who owns the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDescriptor {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub image_url: String,
    pub follower_count: u64,
}

impl HostDescriptor {
    /// Identity a viewer token carries when the host watches their own stream
    pub fn identity_as_viewer(&self) -> String {
        format!("host-{}", self.id)
    }

    /// Bio text, falling back to a default line when the host has none
    pub fn bio_or_default(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.trim().is_empty() => bio,
            _ => DEFAULT_BIO,
        }
    }

    /// "1 follower" / "N followers"
    pub fn follower_label(&self) -> String {
        let noun = if self.follower_count == 1 {
            "follower"
        } else {
            "followers"
        };
        format!("{} {}", self.follower_count, noun)
    }
}
