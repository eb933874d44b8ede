//! Credential-verification seam for the user service.
//!
//! Login handlers depend on `Arc<dyn CredentialVerifier>` only, so the mock
//! credentials can be replaced with a real identity backend without touching
//! route logic.

use async_trait::async_trait;

/// Opaque session token handed back on a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Verifies a username/password pair.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// `Some(token)` on a match, `None` otherwise. A mismatch is not an
    /// error; the mock login contract returns an empty object for it.
    async fn verify(&self, username: &str, password: &str) -> Option<SessionToken>;
}

/// Single hardcoded credential triple. Placeholder, no security contract.
pub struct StaticCredentials {
    username: String,
    password: String,
    token: String,
}

impl StaticCredentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: token.into(),
        }
    }

    /// The demo credentials the PoC ships with.
    pub fn demo() -> Self {
        Self::new("user", "password", "abcdefg")
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> Option<SessionToken> {
        if username == self.username && password == self.password {
            Some(SessionToken(self.token.clone()))
        } else {
            None
        }
    }
}
