// src/entitlement/manager.rs — Owner of the session and its mutation points
//
// All reads and writes go through one mutex. The lock is never held across
// an await: login authenticates first, then takes the lock to publish the
// identity, and only if no logout happened in between (epoch check). Flows
// that await a collaborator before mutating capture `session_epoch()` first
// and use the `*_in` mutations, which apply only to that same session.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::session::{EntitlementStatus, Session};
use crate::auth::{AuthError, Credentials, Identity, IdentityProvider};
use crate::infra::config::Config;

struct Inner {
    session: Session,
    /// Bumped on every logout so in-flight logins can tell they are stale.
    epoch: u64,
}

pub struct EntitlementManager {
    inner: Mutex<Inner>,
    login_timeout: Option<Duration>,
}

impl Default for EntitlementManager {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_FREE_USAGE)
    }
}

impl EntitlementManager {
    pub fn new(max_free_usage: u32) -> Self {
        Self {
            inner: Mutex::new(Inner {
                session: Session::new(max_free_usage),
                epoch: 0,
            }),
            login_timeout: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut manager = Self::new(config.entitlement.max_free_usage);
        manager.login_timeout = config.auth.timeout();
        manager
    }

    pub fn with_login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = Some(timeout);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every critical section leaves the session consistent, so a poisoned
        // lock still guards valid data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ─── Reads ──────────────────────────────────────────────────────────────

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.lock().session.is_logged_in
    }

    pub fn is_pro(&self) -> bool {
        self.lock().session.is_pro
    }

    pub fn usage_count(&self) -> u32 {
        self.lock().session.usage_count
    }

    pub fn max_free_usage(&self) -> u32 {
        self.lock().session.max_free_usage
    }

    pub fn can_use(&self) -> bool {
        self.lock().session.can_use()
    }

    pub fn status(&self) -> EntitlementStatus {
        self.lock().session.status()
    }

    /// Token for the current signed-in session, `None` when signed out.
    /// Every logout invalidates previously returned tokens.
    pub fn session_epoch(&self) -> Option<u64> {
        let inner = self.lock();
        inner.session.is_logged_in.then_some(inner.epoch)
    }

    // ─── Mutations ──────────────────────────────────────────────────────────

    /// Authenticate through `provider` and mark the session logged in.
    ///
    /// On failure the session is untouched and the error is returned so the
    /// caller can offer a retry. If a logout lands while authentication is in
    /// flight, the result is discarded with [`AuthError::Superseded`].
    /// Dropping the returned future abandons the login without side effects.
    pub async fn login(
        &self,
        provider: &dyn IdentityProvider,
        credentials: &Credentials,
    ) -> Result<Identity, AuthError> {
        let epoch = self.lock().epoch;

        let outcome = match self.login_timeout {
            Some(limit) => tokio::time::timeout(limit, provider.authenticate(credentials))
                .await
                .unwrap_or(Err(AuthError::TimedOut(limit))),
            None => provider.authenticate(credentials).await,
        };

        let identity = match outcome {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(provider = provider.id(), "Login failed: {}", e);
                return Err(e);
            }
        };

        let mut inner = self.lock();
        if inner.epoch != epoch {
            tracing::warn!(
                provider = provider.id(),
                "Login finished after logout, discarding identity"
            );
            return Err(AuthError::Superseded);
        }
        inner.session.is_logged_in = true;
        inner.session.user_name = identity.display_name.clone();
        inner.session.user_email = identity.email.clone();
        tracing::info!(email = %identity.email, "Logged in");
        Ok(identity)
    }

    /// Like [`login`](Self::login), but gives up with [`AuthError::Cancelled`]
    /// as soon as `cancel` resolves.
    pub async fn login_or_cancel<C>(
        &self,
        provider: &dyn IdentityProvider,
        credentials: &Credentials,
        cancel: C,
    ) -> Result<Identity, AuthError>
    where
        C: Future<Output = ()>,
    {
        tokio::select! {
            result = self.login(provider, credentials) => result,
            () = cancel => {
                tracing::info!("Login cancelled");
                Err(AuthError::Cancelled)
            }
        }
    }

    /// Reset the session to its logged-out default. Usage progress is discarded.
    pub fn logout(&self) {
        let mut inner = self.lock();
        let max_free_usage = inner.session.max_free_usage;
        inner.session = Session::new(max_free_usage);
        inner.epoch = inner.epoch.wrapping_add(1);
        tracing::info!("Logged out");
    }

    /// Consume one free run if allowed.
    ///
    /// Returns `true` for pro users (no mutation) or when a free run was
    /// consumed, `false` once the ceiling is reached. Check and increment
    /// share one critical section.
    pub fn increment_usage(&self) -> bool {
        consume_free_run(&mut self.lock().session)
    }

    /// [`increment_usage`](Self::increment_usage) for the session identified
    /// by `epoch`. Returns `None` without touching anything if that session
    /// has since been logged out.
    pub fn increment_usage_in(&self, epoch: u64) -> Option<bool> {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            tracing::debug!("Usage increment for a logged-out session ignored");
            return None;
        }
        Some(consume_free_run(&mut inner.session))
    }

    pub fn upgrade_to_pro(&self) {
        self.lock().session.is_pro = true;
        tracing::info!("Upgraded to Pro");
    }

    /// [`upgrade_to_pro`](Self::upgrade_to_pro) for the session identified
    /// by `epoch`. Returns `false` if that session has since been logged out.
    pub fn upgrade_to_pro_in(&self, epoch: u64) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            tracing::debug!("Upgrade for a logged-out session ignored");
            return false;
        }
        inner.session.is_pro = true;
        tracing::info!("Upgraded to Pro");
        true
    }
}

fn consume_free_run(session: &mut Session) -> bool {
    if session.is_pro {
        return true;
    }
    if session.usage_count >= session.max_free_usage {
        tracing::debug!(
            usage = session.usage_count,
            max = session.max_free_usage,
            "Free usage exhausted"
        );
        return false;
    }
    session.usage_count += 1;
    tracing::debug!(
        usage = session.usage_count,
        max = session.max_free_usage,
        "Free usage consumed"
    );
    true
}
