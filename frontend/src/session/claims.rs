//! Viewer Token Claims
//!
//! Viewer tokens are JWTs. The identity travels in the `jti` claim and the
//! display name in `name`. Only the payload is decoded here; the signature
//! belongs to the room server.

use crate::error::{PlayerError, Result};
use crate::models::ViewerCredentials;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ViewerClaims {
    #[serde(default)]
    jti: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Extracts viewer credentials from a raw token
pub fn credentials_from_token(token: &str) -> Result<ViewerCredentials> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
        _ => {
            return Err(PlayerError::TokenFormat(
                "expected three dot-separated segments".to_string(),
            ));
        }
    };

    // Some issuers keep the padding
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| PlayerError::TokenFormat(format!("payload is not base64url: {}", e)))?;

    let claims: ViewerClaims = serde_json::from_slice(&bytes)
        .map_err(|e| PlayerError::TokenFormat(format!("payload is not JSON: {}", e)))?;

    Ok(ViewerCredentials {
        identity: claims.jti,
        display_name: claims.name,
        token: Some(token.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_reads_identity_and_name() {
        let token = make_token(r#"{"jti":"v1","name":"Viewer1","video":{"room":"u1"}}"#);
        let credentials = credentials_from_token(&token).unwrap();

        assert_eq!(credentials.identity.as_deref(), Some("v1"));
        assert_eq!(credentials.display_name.as_deref(), Some("Viewer1"));
        assert_eq!(credentials.token.as_deref(), Some(token.as_str()));
    }

    #[test]
    fn test_missing_name_leaves_credentials_incomplete() {
        let token = make_token(r#"{"jti":"v1"}"#);
        let credentials = credentials_from_token(&token).unwrap();

        assert_eq!(credentials.display_name, None);
        assert!(credentials.into_identity().is_none());
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert!(matches!(
            credentials_from_token("only.two"),
            Err(PlayerError::TokenFormat(_))
        ));
        assert!(matches!(
            credentials_from_token("a.b.c.d"),
            Err(PlayerError::TokenFormat(_))
        ));
    }

    #[test]
    fn test_rejects_non_json_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(
            credentials_from_token(&token),
            Err(PlayerError::TokenFormat(_))
        ));
    }
}
