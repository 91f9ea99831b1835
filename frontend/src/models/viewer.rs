//! Viewer Identity Model
//!
//! A viewer may join the room only once identity, display name, and token are
//! all known. Providers report what they have as [`ViewerCredentials`]; the
//! session gate turns them into a [`ViewerIdentity`] when complete.

/// Resolved viewer identity authorizing a connection to the live room
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewerIdentity {
    identity: String,
    display_name: String,
    token: String,
}

impl ViewerIdentity {
    /// Builds an identity when every part is present and non-empty
    pub fn from_parts(
        identity: Option<String>,
        display_name: Option<String>,
        token: Option<String>,
    ) -> Option<Self> {
        let identity = identity.filter(|s| !s.is_empty())?;
        let display_name = display_name.filter(|s| !s.is_empty())?;
        let token = token.filter(|s| !s.is_empty())?;

        Some(Self {
            identity,
            display_name,
            token,
        })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Raw provider output; any part may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerCredentials {
    pub identity: Option<String>,
    pub display_name: Option<String>,
    pub token: Option<String>,
}

impl ViewerCredentials {
    pub fn new(
        identity: impl Into<String>,
        display_name: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            identity: Some(identity.into()),
            display_name: Some(display_name.into()),
            token: Some(token.into()),
        }
    }

    /// Converts into a complete identity, `None` if anything is missing
    pub fn into_identity(self) -> Option<ViewerIdentity> {
        ViewerIdentity::from_parts(self.identity, self.display_name, self.token)
    }
}
