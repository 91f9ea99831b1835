//! Application Configuration
//!
//! Manages player configuration: the room server endpoint, the viewer token
//! source, the page data file, and logging settings.

use crate::error::{PlayerError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

const CONFIG_FILE_NAME: &str = "stream-player.conf";
const CONFIG_PATH_ENV: &str = "STREAM_PLAYER_CONFIG";
const ROOM_SERVER_URL_ENV: &str = "ROOM_SERVER_URL";

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Real-time room server endpoint handed to the room provider
    pub room_server_url: String,
    /// Token service address (host:port)
    pub token_service_address: Option<String>,
    /// Fixed viewer token, used when no token service is configured
    pub viewer_token: Option<String>,
    /// JSON file with the host, stream, and follow relationship
    pub page_data_path: PathBuf,
    /// Log file, `None` logs to stderr
    pub log_path: Option<PathBuf>,
    /// Logging level
    pub log_level: Level,
    /// Keys present in the file that the player does not know
    pub ignored_keys: Vec<String>,
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            room_server_url: "ws://127.0.0.1:7880".to_string(),
            token_service_address: None,
            viewer_token: None,
            page_data_path: PathBuf::from("stream_page.json"),
            log_path: Some(PathBuf::from("stream-player.log")),
            log_level: Level::INFO,
            ignored_keys: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from `key=value` lines
    ///
    /// Format:
    /// ```text
    /// room_server_url=wss://rooms.example.com
    /// token_service_address=127.0.0.1:9443
    /// page_data_path=stream_page.json
    /// log_path=stream-player.log
    /// log_level=info
    /// ```
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                config.ignored_keys.push(line.to_string());
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "room_server_url" => config.room_server_url = value.to_string(),
                "token_service_address" => {
                    config.token_service_address = non_empty(value);
                }
                "viewer_token" => config.viewer_token = non_empty(value),
                "page_data_path" => config.page_data_path = PathBuf::from(value),
                "log_path" => config.log_path = non_empty(value).map(PathBuf::from),
                "log_level" => {
                    config.log_level = value.to_lowercase().parse().unwrap_or(Level::INFO);
                }
                // Ignore unknown keys for forward compatibility
                _ => config.ignored_keys.push(key.to_string()),
            }
        }

        config
    }

    /// Loads configuration from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PlayerError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::parse(&content))
    }

    /// Loads configuration from the first file found in the search path,
    /// falling back to defaults, then applies environment overrides.
    pub fn load() -> (Self, ConfigSource) {
        let (mut config, source) = Self::candidate_paths()
            .into_iter()
            .find_map(|path| {
                Self::load_from_file(&path)
                    .ok()
                    .map(|config| (config, ConfigSource::File(path)))
            })
            .unwrap_or_else(|| (Self::default(), ConfigSource::Defaults));

        config.apply_env_overrides();
        (config, source)
    }

    /// Search order: `$STREAM_PLAYER_CONFIG`, working directory, `frontend/`,
    /// then the user config directory.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths.push(PathBuf::from("frontend").join(CONFIG_FILE_NAME));
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("stream-player").join(CONFIG_FILE_NAME));
        }

        paths
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env::var(ROOM_SERVER_URL_ENV)
            .ok()
            .and_then(|v| non_empty(&v))
        {
            self.room_server_url = url;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.room_server_url, "ws://127.0.0.1:7880");
        assert_eq!(config.page_data_path, PathBuf::from("stream_page.json"));
        assert_eq!(config.log_path, Some(PathBuf::from("stream-player.log")));
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.token_service_address.is_none());
        assert!(config.viewer_token.is_none());
    }

    #[test]
    fn test_parse_content() {
        let content = "\
            # Player config\n\
            room_server_url=wss://rooms.example.com\n\
            token_service_address=10.0.0.5:9443\n\
            page_data_path=/srv/page.json\n\
            log_path=\n\
            log_level=Debug\n\
        ";

        let config = AppConfig::parse(content);
        assert_eq!(config.room_server_url, "wss://rooms.example.com");
        assert_eq!(
            config.token_service_address.as_deref(),
            Some("10.0.0.5:9443")
        );
        assert_eq!(config.page_data_path, PathBuf::from("/srv/page.json"));
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.ignored_keys.is_empty());
    }

    #[test]
    fn test_unknown_keys_and_bad_level() {
        let config = AppConfig::parse("theme=dark\nlog_level=loud\n");
        assert_eq!(config.ignored_keys, vec!["theme".to_string()]);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "viewer_token=h.e30.s\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.viewer_token.as_deref(), Some("h.e30.s"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("absent.conf"));
        assert!(matches!(result, Err(PlayerError::Config(_))));
    }
}
