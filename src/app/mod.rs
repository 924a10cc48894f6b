// src/app/mod.rs — Screen-level flows over the entitlement manager
//
// Each method is what one screen does when the user acts: sign in, open a
// tool, run it, subscribe, sign out. Navigation outcomes are returned as
// values; rendering is left to the caller.

pub mod home;

use std::future::Future;
use std::sync::Arc;

use crate::auth::simulated::SimulatedIdentityProvider;
use crate::auth::{Credentials, Identity, IdentityProvider};
use crate::billing::simulated::SimulatedBillingProvider;
use crate::billing::{BillingProvider, Plan, Receipt};
use crate::entitlement::EntitlementManager;
use crate::infra::config::Config;
use crate::infra::errors::ToolNestError;
use crate::tools::simulated::SimulatedProcessor;
use crate::tools::{self, InputFile, ProcessingError, ResultArtifact, Tool, ToolProcessor};

pub use home::HomeSummary;

/// Where the UI should go after a gating decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Tool(&'static Tool),
    Paywall,
}

/// Outcome of a tool run that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRun {
    Completed(ResultArtifact),
    /// Free usage is exhausted; send the user to the paywall.
    UpgradeRequired,
}

pub struct App {
    entitlements: Arc<EntitlementManager>,
    identity: Arc<dyn IdentityProvider>,
    billing: Arc<dyn BillingProvider>,
    processor: Arc<dyn ToolProcessor>,
    credentials: Credentials,
}

impl App {
    pub fn new(
        entitlements: Arc<EntitlementManager>,
        identity: Arc<dyn IdentityProvider>,
        billing: Arc<dyn BillingProvider>,
        processor: Arc<dyn ToolProcessor>,
    ) -> Self {
        Self {
            entitlements,
            identity,
            billing,
            processor,
            credentials: Credentials::oauth("google"),
        }
    }

    /// Wire every collaborator to its simulated implementation.
    pub fn simulated(config: &Config) -> Self {
        let mut app = Self::new(
            Arc::new(EntitlementManager::from_config(config)),
            Arc::new(SimulatedIdentityProvider::from_config(config)),
            Arc::new(SimulatedBillingProvider::from_config(config)),
            Arc::new(SimulatedProcessor::from_config(config)),
        );
        app.credentials = Credentials::oauth(&config.auth.provider);
        app
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn entitlements(&self) -> &Arc<EntitlementManager> {
        &self.entitlements
    }

    pub fn home(&self) -> HomeSummary {
        HomeSummary::from_session(&self.entitlements.snapshot())
    }

    pub async fn sign_in(&self) -> Result<Identity, ToolNestError> {
        let identity = self
            .entitlements
            .login(self.identity.as_ref(), &self.credentials)
            .await?;
        Ok(identity)
    }

    /// Sign in, abandoning the attempt once `cancel` resolves.
    pub async fn sign_in_or_cancel<C>(&self, cancel: C) -> Result<Identity, ToolNestError>
    where
        C: Future<Output = ()>,
    {
        let identity = self
            .entitlements
            .login_or_cancel(self.identity.as_ref(), &self.credentials, cancel)
            .await?;
        Ok(identity)
    }

    pub fn sign_out(&self) {
        self.entitlements.logout();
    }

    /// Gate taken when a tool card is tapped on the home screen.
    pub fn open_tool(&self, tool_id: &str) -> Result<Navigation, ToolNestError> {
        self.require_login()?;
        let tool =
            tools::find(tool_id).ok_or_else(|| ProcessingError::UnknownTool(tool_id.into()))?;
        if self.entitlements.can_use() {
            Ok(Navigation::Tool(tool))
        } else {
            Ok(Navigation::Paywall)
        }
    }

    /// Process `file` with the tool, consuming one free run on success.
    ///
    /// Gated users are turned away before processing. A failed run consumes
    /// nothing. If another caller takes the last free run while this one is
    /// processing, the result is withheld and the paywall is requested. A
    /// sign-out during processing withholds the result and consumes nothing.
    pub async fn run_tool(
        &self,
        tool_id: &str,
        file: &InputFile,
    ) -> Result<ToolRun, ToolNestError> {
        let epoch = self.require_login()?;
        let tool =
            tools::find(tool_id).ok_or_else(|| ProcessingError::UnknownTool(tool_id.into()))?;

        if !self.entitlements.can_use() {
            return Ok(ToolRun::UpgradeRequired);
        }

        let artifact = match self.processor.process(tool, file).await {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::warn!(
                    tool = tool.id,
                    processor = self.processor.id(),
                    "Processing failed: {}",
                    e
                );
                return Err(e.into());
            }
        };

        match self.entitlements.increment_usage_in(epoch) {
            Some(true) => {}
            Some(false) => {
                tracing::info!(tool = tool.id, "Free usage ran out during processing");
                return Ok(ToolRun::UpgradeRequired);
            }
            None => {
                tracing::warn!(tool = tool.id, "Signed out during processing, result discarded");
                return Err(ToolNestError::SessionEnded);
            }
        }

        tracing::info!(tool = tool.id, file = %file.name, "Tool run completed");
        Ok(ToolRun::Completed(artifact))
    }

    /// Checkout through the billing provider and unlock Pro on success.
    ///
    /// Pro is granted only to the session that started the checkout; if it
    /// was signed out meanwhile, nothing is unlocked.
    pub async fn subscribe(&self, plan: Plan) -> Result<Receipt, ToolNestError> {
        let epoch = self.require_login()?;
        let receipt = match self.billing.subscribe(plan).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(plan = %plan, billing = self.billing.id(), "Checkout failed: {}", e);
                return Err(e.into());
            }
        };
        if !self.entitlements.upgrade_to_pro_in(epoch) {
            tracing::warn!(
                plan = %plan,
                receipt = %receipt.id,
                "Signed out during checkout, subscription not applied"
            );
            return Err(ToolNestError::SessionEnded);
        }
        tracing::info!(plan = %plan, receipt = %receipt.id, "Subscription active");
        Ok(receipt)
    }

    /// Epoch of the signed-in session, or `NotLoggedIn`.
    fn require_login(&self) -> Result<u64, ToolNestError> {
        self.entitlements
            .session_epoch()
            .ok_or(ToolNestError::NotLoggedIn)
    }
}
