// src/entitlement/session.rs — The single login/entitlement record

use serde::{Deserialize, Serialize};

use super::DEFAULT_MAX_FREE_USAGE;

/// Login and entitlement state for the one active user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_logged_in: bool,
    pub is_pro: bool,
    /// Free-tier runs consumed since the last reset.
    pub usage_count: u32,
    /// Ceiling on free-tier runs. Configuration, not session data: survives logout.
    pub max_free_usage: u32,
    pub user_name: String,
    pub user_email: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FREE_USAGE)
    }
}

/// Entitlement as seen by a consumer. Derived on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementStatus {
    LoggedOut,
    Free,
    Gated,
    Pro,
}

impl Session {
    /// A logged-out session with zero usage.
    pub fn new(max_free_usage: u32) -> Self {
        Self {
            is_logged_in: false,
            is_pro: false,
            usage_count: 0,
            max_free_usage,
            user_name: String::new(),
            user_email: String::new(),
        }
    }

    pub fn can_use(&self) -> bool {
        self.is_pro || self.usage_count < self.max_free_usage
    }

    pub fn status(&self) -> EntitlementStatus {
        if !self.is_logged_in {
            EntitlementStatus::LoggedOut
        } else if self.is_pro {
            EntitlementStatus::Pro
        } else if self.can_use() {
            EntitlementStatus::Free
        } else {
            EntitlementStatus::Gated
        }
    }

    /// Free runs left, or `None` for pro users.
    pub fn remaining_free_uses(&self) -> Option<u32> {
        if self.is_pro {
            None
        } else {
            Some(self.max_free_usage.saturating_sub(self.usage_count))
        }
    }

    /// Progress bar fill for the usage card, 0..=100. Pro users show no bar.
    pub fn usage_percent(&self) -> f32 {
        if self.is_pro || self.max_free_usage == 0 {
            return 0.0;
        }
        (self.usage_count as f32 / self.max_free_usage as f32 * 100.0).min(100.0)
    }

    /// First word of the display name, for the greeting.
    pub fn first_name(&self) -> &str {
        self.user_name.split_whitespace().next().unwrap_or("")
    }
}
