// tests/entitlement_test.rs — Integration test: free-usage gate and session lifecycle

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use toolnest::auth::simulated::SimulatedIdentityProvider;
use toolnest::auth::{AuthError, Credentials, Identity};
use toolnest::entitlement::{EntitlementManager, EntitlementStatus, Session};

fn instant_provider() -> SimulatedIdentityProvider {
    SimulatedIdentityProvider::new(
        Identity::new("Alex Johnson", "alex@example.com"),
        Duration::ZERO,
    )
}

#[test]
fn test_increment_never_exceeds_ceiling() {
    for max in 0..6 {
        let m = EntitlementManager::new(max);
        for _ in 0..10 {
            let before = m.usage_count();
            let ok = m.increment_usage();
            // false exactly when the ceiling was already reached
            assert_eq!(ok, before < max);
            assert!(m.usage_count() <= max);
        }
        assert_eq!(m.usage_count(), max);
    }
}

#[test]
fn test_three_then_gated() {
    let m = EntitlementManager::default();
    let results: Vec<bool> = (0..3).map(|_| m.increment_usage()).collect();
    assert_eq!(results, vec![true, true, true]);
    assert_eq!(m.usage_count(), 3);
    assert!(!m.increment_usage());
    assert_eq!(m.usage_count(), 3);
}

#[test]
fn test_pro_runs_are_unlimited() {
    let m = EntitlementManager::default();
    m.upgrade_to_pro();
    let results: Vec<bool> = (0..5).map(|_| m.increment_usage()).collect();
    assert_eq!(results, vec![true; 5]);
    assert!(m.can_use());
}

#[test]
fn test_logout_gives_fresh_session() {
    let m = EntitlementManager::default();
    for _ in 0..3 {
        m.increment_usage();
    }
    assert!(!m.can_use());
    m.logout();
    assert!(m.can_use());
    assert_eq!(m.snapshot(), Session::default());
}

#[tokio::test]
async fn test_full_state_machine() {
    let m = EntitlementManager::default();
    assert_eq!(m.status(), EntitlementStatus::LoggedOut);

    m.login(&instant_provider(), &Credentials::oauth("google"))
        .await
        .unwrap();
    assert_eq!(m.status(), EntitlementStatus::Free);

    while m.increment_usage() {}
    assert_eq!(m.status(), EntitlementStatus::Gated);

    m.upgrade_to_pro();
    assert_eq!(m.status(), EntitlementStatus::Pro);

    m.logout();
    assert_eq!(m.status(), EntitlementStatus::LoggedOut);
    assert_eq!(
        m.snapshot(),
        Session {
            is_logged_in: false,
            is_pro: false,
            usage_count: 0,
            max_free_usage: 3,
            user_name: String::new(),
            user_email: String::new(),
        }
    );
}

#[test]
fn test_concurrent_increments_respect_ceiling() {
    let m = Arc::new(EntitlementManager::new(3));
    let successes: usize = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let m = Arc::clone(&m);
                scope.spawn(move || (0..50).filter(|_| m.increment_usage()).count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });
    assert_eq!(successes, 3);
    assert_eq!(m.usage_count(), 3);
}

#[tokio::test]
async fn test_login_failure_then_retry() {
    let m = EntitlementManager::default();
    let provider = instant_provider().with_failures([
        AuthError::Network("connection reset".into()),
        AuthError::TimedOut(Duration::from_secs(30)),
    ]);
    let creds = Credentials::oauth("google");

    for _ in 0..2 {
        let err = m.login(&provider, &creds).await.unwrap_err();
        assert!(err.is_retriable());
        assert_eq!(m.snapshot(), Session::default());
    }

    let identity = m.login(&provider, &creds).await.unwrap();
    assert_eq!(identity.email, "alex@example.com");
    assert!(m.is_logged_in());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_login_has_no_effect() {
    let provider = SimulatedIdentityProvider::new(
        Identity::new("Alex", "a@x.io"),
        Duration::from_secs(10),
    );
    let m = EntitlementManager::default();
    let creds = Credentials::oauth("google");

    let abandoned = tokio::time::timeout(Duration::from_secs(1), m.login(&provider, &creds)).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert!(!m.is_logged_in());
}

#[tokio::test]
async fn test_relogin_replaces_identity_keeps_entitlement() {
    let m = EntitlementManager::default();
    m.login(&instant_provider(), &Credentials::oauth("google"))
        .await
        .unwrap();
    m.increment_usage();
    m.increment_usage();
    m.upgrade_to_pro();

    let other = SimulatedIdentityProvider::new(
        Identity::new("Sam Rivera", "sam@example.com"),
        Duration::ZERO,
    );
    m.login(&other, &Credentials::oauth("google")).await.unwrap();

    let s = m.snapshot();
    assert!(s.is_logged_in);
    assert_eq!(s.user_name, "Sam Rivera");
    assert_eq!(s.user_email, "sam@example.com");
    assert_eq!(s.usage_count, 2);
    assert!(s.is_pro);
}
