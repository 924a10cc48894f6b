// src/cli/render.rs — Plain-text rendering of the home card and results

use crate::app::HomeSummary;
use crate::tools::ResultArtifact;

const BAR_WIDTH: usize = 20;

/// Usage bar, e.g. `[#######-------------]`.
pub fn usage_bar(percent: f32) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn home_card(home: &HomeSummary) -> String {
    let mut out = format!("Hi, {}\n  {}", home.first_name, home.usage_label);
    if home.is_pro {
        out.push_str("  [PRO]");
    } else {
        out.push('\n');
        out.push_str("  ");
        out.push_str(&usage_bar(home.usage_percent));
    }
    out
}

pub fn result_card(artifact: &ResultArtifact) -> String {
    format!("  {}\n  {}", artifact.title, artifact.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitlement::Session;

    #[test]
    fn test_usage_bar_bounds() {
        assert_eq!(usage_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(usage_bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(usage_bar(250.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(usage_bar(50.0).matches('#').count(), 10);
    }

    #[test]
    fn test_home_card_free_and_pro() {
        let mut session = Session {
            is_logged_in: true,
            usage_count: 1,
            user_name: "Alex Johnson".into(),
            ..Session::default()
        };
        let card = home_card(&HomeSummary::from_session(&session));
        assert!(card.starts_with("Hi, Alex"));
        assert!(card.contains("1 of 3 free uses"));
        assert!(card.contains('['));

        session.is_pro = true;
        let card = home_card(&HomeSummary::from_session(&session));
        assert!(card.contains("[PRO]"));
        assert!(card.contains("Unlimited access"));
    }
}
