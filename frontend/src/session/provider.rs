//! Viewer Token Providers
//!
//! The token issuer is an external service. The logic thread calls it through
//! [`ViewerTokenProvider`] so the UI never blocks on it.

use super::claims::credentials_from_token;
use crate::config::AppConfig;
use crate::error::{PlayerError, Result};
use crate::infrastructure::TokenClient;
use crate::models::ViewerCredentials;
use tracing::info;

/// Source of viewer credentials for a host's room
pub trait ViewerTokenProvider: Send {
    /// Resolves credentials for `host_id`. Blocking; called off the UI thread.
    fn resolve(&self, host_id: &str) -> Result<ViewerCredentials>;
}

/// Hands out one preconfigured token, useful for local runs
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl ViewerTokenProvider for StaticTokenProvider {
    fn resolve(&self, _host_id: &str) -> Result<ViewerCredentials> {
        credentials_from_token(&self.token)
    }
}

/// Picks the provider described by the configuration
///
/// A token service address wins over a fixed token.
pub fn provider_from_config(config: &AppConfig) -> Result<Box<dyn ViewerTokenProvider>> {
    if let Some(address) = &config.token_service_address {
        info!("[TOKEN] Using token service at {}", address);
        return Ok(Box::new(TokenClient::new(address.clone())));
    }

    if let Some(token) = &config.viewer_token {
        info!("[TOKEN] Using fixed viewer token from configuration");
        return Ok(Box::new(StaticTokenProvider::new(token.clone())));
    }

    Err(PlayerError::Config(
        "either token_service_address or viewer_token must be set".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    #[test]
    fn test_static_provider_decodes_its_token() {
        let token = format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode(r#"{"jti":"v1","name":"Viewer1"}"#)
        );
        let provider = StaticTokenProvider::new(token.clone());

        let credentials = provider.resolve("u1").unwrap();
        assert_eq!(
            credentials,
            ViewerCredentials::new("v1", "Viewer1", token)
        );
    }

    #[test]
    fn test_provider_from_config_requires_a_source() {
        let config = AppConfig::default();
        assert!(matches!(
            provider_from_config(&config),
            Err(PlayerError::Config(_))
        ));
    }

    #[test]
    fn test_provider_from_config_accepts_fixed_token() {
        let config = AppConfig {
            viewer_token: Some("h.e30.s".to_string()),
            ..AppConfig::default()
        };
        assert!(provider_from_config(&config).is_ok());
    }
}
