// src/auth/simulated.rs — Stand-in identity provider
//
// Waits a fixed latency, then returns the configured identity. Scripted
// failures are served first, one per call, so retry paths can be exercised.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::{AuthError, Credentials, Identity, IdentityProvider};
use crate::infra::config::Config;

pub struct SimulatedIdentityProvider {
    identity: Identity,
    latency: Duration,
    failures: Mutex<VecDeque<AuthError>>,
}

impl SimulatedIdentityProvider {
    pub fn new(identity: Identity, latency: Duration) -> Self {
        Self {
            identity,
            latency,
            failures: Mutex::new(VecDeque::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Identity::new(&config.identity.display_name, &config.identity.email),
            Duration::from_millis(config.simulation.login_latency_ms),
        )
    }

    /// Fail the next `errors.len()` calls with these errors, in order.
    pub fn with_failures(self, errors: impl IntoIterator<Item = AuthError>) -> Self {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(errors);
        self
    }

    fn next_failure(&self) -> Option<AuthError> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

#[async_trait]
impl IdentityProvider for SimulatedIdentityProvider {
    fn id(&self) -> &str {
        "simulated"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        tracing::debug!(provider = %credentials.provider, "Simulated sign-in started");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(err) = self.next_failure() {
            return Err(err);
        }

        let email = credentials
            .login_hint
            .clone()
            .unwrap_or_else(|| self.identity.email.clone());
        Ok(Identity::new(self.identity.display_name.clone(), email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_identity() {
        let provider = SimulatedIdentityProvider::from_config(&Config::default());
        let provider = SimulatedIdentityProvider {
            latency: Duration::ZERO,
            ..provider
        };
        let identity = provider
            .authenticate(&Credentials::oauth("google"))
            .await
            .unwrap();
        assert_eq!(identity.display_name, "Alex Johnson");
        assert_eq!(identity.email, "alex@example.com");
    }

    #[tokio::test]
    async fn test_login_hint_overrides_email() {
        let provider =
            SimulatedIdentityProvider::new(Identity::new("Alex", "a@x.io"), Duration::ZERO);
        let identity = provider
            .authenticate(&Credentials::oauth("google").with_login_hint("b@x.io"))
            .await
            .unwrap();
        assert_eq!(identity.email, "b@x.io");
    }

    #[tokio::test]
    async fn test_scripted_failures_then_success() {
        let provider =
            SimulatedIdentityProvider::new(Identity::new("Alex", "a@x.io"), Duration::ZERO)
                .with_failures([AuthError::Network("offline".into())]);
        let creds = Credentials::oauth("google");

        let first = provider.authenticate(&creds).await;
        assert_eq!(first, Err(AuthError::Network("offline".into())));
        assert!(provider.authenticate(&creds).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_latency() {
        let provider =
            SimulatedIdentityProvider::new(Identity::new("Alex", "a@x.io"), Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        provider
            .authenticate(&Credentials::oauth("google"))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
