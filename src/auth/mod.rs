// src/auth/mod.rs — Identity provider seam used by login
//
// The client never handles tokens itself: an IdentityProvider takes the
// sign-in request and hands back who the user is, or an AuthError.

pub mod simulated;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the sign-in screen hands to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// OAuth provider id, e.g. "google".
    pub provider: String,
    /// Optional account hint (pre-filled email).
    #[serde(default)]
    pub login_hint: Option<String>,
}

impl Credentials {
    pub fn oauth(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            login_hint: None,
        }
    }

    pub fn with_login_hint(mut self, hint: impl Into<String>) -> Self {
        self.login_hint = Some(hint.into());
        self
    }
}

/// Who the identity provider says the user is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

impl Identity {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Sign-in rejected by '{provider}': {message}")]
    Rejected { provider: String, message: String },

    #[error("Network error during sign-in: {0}")]
    Network(String),

    #[error("Sign-in timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Sign-in cancelled")]
    Cancelled,

    /// The session was reset while the login was in flight.
    #[error("Sign-in superseded by a logout")]
    Superseded,
}

impl AuthError {
    /// Transient failures worth offering a retry for.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            AuthError::Network(_) | AuthError::TimedOut(_) | AuthError::Superseded
        )
    }
}

/// External identity provider consumed by `EntitlementManager::login`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn id(&self) -> &str;

    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}
