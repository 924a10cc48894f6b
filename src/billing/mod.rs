// src/billing/mod.rs — Subscription plans and the billing provider seam

pub mod simulated;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Monthly,
    Yearly,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Monthly, Plan::Yearly];

    /// Price in minor units (paise).
    pub fn price_minor(&self) -> u64 {
        match self {
            Plan::Monthly => 9_900,
            Plan::Yearly => 79_900,
        }
    }

    pub fn currency(&self) -> &'static str {
        "INR"
    }

    /// Price as shown on the plan toggle, e.g. "₹99/mo".
    pub fn price_label(&self) -> String {
        let suffix = match self {
            Plan::Monthly => "mo",
            Plan::Yearly => "yr",
        };
        format!("\u{20B9}{}/{}", self.price_minor() / 100, suffix)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Monthly => write!(f, "Monthly"),
            Plan::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for Plan {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "mo" => Ok(Plan::Monthly),
            "yearly" | "year" | "yr" | "annual" => Ok(Plan::Yearly),
            other => Err(BillingError::UnknownPlan(other.to_string())),
        }
    }
}

/// Proof of a completed subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub plan: Plan,
    pub amount_minor: u64,
    pub currency: String,
    pub purchased_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(plan: Plan) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            plan,
            amount_minor: plan.price_minor(),
            currency: plan.currency().to_string(),
            purchased_at: Utc::now(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Network error during checkout: {0}")]
    Network(String),

    #[error("Unknown plan '{0}' (expected monthly or yearly)")]
    UnknownPlan(String),
}

impl BillingError {
    pub fn is_retriable(&self) -> bool {
        matches!(self, BillingError::Network(_))
    }
}

/// External subscription provider consumed by the upgrade flow.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    fn id(&self) -> &str;

    async fn subscribe(&self, plan: Plan) -> Result<Receipt, BillingError>;
}
