// src/app/home.rs — Data behind the home screen header and usage card

use serde::Serialize;

use crate::entitlement::{EntitlementStatus, Session};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSummary {
    pub first_name: String,
    pub email: String,
    pub status: EntitlementStatus,
    pub is_pro: bool,
    pub usage_count: u32,
    pub max_free_usage: u32,
    pub usage_percent: f32,
    /// "Unlimited access" for Pro, otherwise "N of M free uses".
    pub usage_label: String,
}

impl HomeSummary {
    pub fn from_session(session: &Session) -> Self {
        let usage_label = if session.is_pro {
            "Unlimited access".to_string()
        } else {
            format!(
                "{} of {} free uses",
                session.usage_count, session.max_free_usage
            )
        };
        Self {
            first_name: session.first_name().to_string(),
            email: session.user_email.clone(),
            status: session.status(),
            is_pro: session.is_pro,
            usage_count: session.usage_count,
            max_free_usage: session.max_free_usage,
            usage_percent: session.usage_percent(),
            usage_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_summary() {
        let session = Session {
            is_logged_in: true,
            usage_count: 2,
            user_name: "Alex Johnson".into(),
            user_email: "alex@example.com".into(),
            ..Session::default()
        };
        let home = HomeSummary::from_session(&session);
        assert_eq!(home.first_name, "Alex");
        assert_eq!(home.usage_label, "2 of 3 free uses");
        assert_eq!(home.status, EntitlementStatus::Free);
        assert!(home.usage_percent > 66.0 && home.usage_percent < 67.0);
    }

    #[test]
    fn test_pro_summary() {
        let session = Session {
            is_logged_in: true,
            is_pro: true,
            usage_count: 3,
            user_name: "Alex".into(),
            ..Session::default()
        };
        let home = HomeSummary::from_session(&session);
        assert_eq!(home.usage_label, "Unlimited access");
        assert_eq!(home.usage_percent, 0.0);
        assert_eq!(home.status, EntitlementStatus::Pro);
    }
}
