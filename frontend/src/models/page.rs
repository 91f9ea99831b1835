//! Stream Page Data
//!
//! Everything the caller resolves before the watch page renders.

use super::{HostDescriptor, StreamDescriptor};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Host, stream, and follow relationship for one watch page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamPageData {
    pub host: HostDescriptor,
    pub stream: StreamDescriptor,
    pub is_following: bool,
}

impl StreamPageData {
    /// Reads page data from a JSON document
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    const PAGE: &str = r#"{
        "host": {
            "id": "u1",
            "username": "alice",
            "bio": null,
            "imageUrl": "https://img.example/alice.png",
            "followerCount": 3
        },
        "stream": {
            "id": "s1",
            "isLive": true,
            "isChatDelayed": false,
            "isChatEnabled": true,
            "isChatFollowersOnly": false,
            "thumbnailUrl": null,
            "name": "Test"
        },
        "isFollowing": true
    }"#;

    #[test]
    fn test_from_json() {
        let page = StreamPageData::from_json(PAGE).unwrap();
        assert_eq!(page.host.id, "u1");
        assert_eq!(page.host.follower_count, 3);
        assert_eq!(page.stream.name, "Test");
        assert!(page.is_following);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let result = StreamPageData::from_json(r#"{"isFollowing": false}"#);
        assert!(matches!(result, Err(PlayerError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, PAGE).unwrap();

        let page = StreamPageData::load_from_file(&path).unwrap();
        assert_eq!(page.host.username, "alice");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StreamPageData::load_from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(PlayerError::Io(_))));
    }
}
