// src/billing/simulated.rs — Stand-in billing provider
//
// Always succeeds after a fixed latency unless a decline is configured.

use std::time::Duration;

use async_trait::async_trait;

use super::{BillingError, BillingProvider, Plan, Receipt};
use crate::infra::config::Config;

pub struct SimulatedBillingProvider {
    latency: Duration,
    decline: Option<BillingError>,
}

impl SimulatedBillingProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            decline: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_millis(config.simulation.billing_latency_ms))
    }

    /// Fail every checkout with `error`.
    pub fn declining(mut self, error: BillingError) -> Self {
        self.decline = Some(error);
        self
    }
}

#[async_trait]
impl BillingProvider for SimulatedBillingProvider {
    fn id(&self) -> &str {
        "simulated"
    }

    async fn subscribe(&self, plan: Plan) -> Result<Receipt, BillingError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(ref err) = self.decline {
            return Err(err.clone());
        }
        let receipt = Receipt::new(plan);
        tracing::debug!(receipt = %receipt.id, plan = %plan, "Simulated checkout complete");
        Ok(receipt)
    }
}
