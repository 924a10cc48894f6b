// tests/app_flow_test.rs — Integration test: sign-in, tool runs, paywall, upgrade

use std::sync::Arc;
use std::time::Duration;

use toolnest::app::{App, Navigation, ToolRun};
use toolnest::auth::simulated::SimulatedIdentityProvider;
use toolnest::auth::Identity;
use toolnest::billing::simulated::SimulatedBillingProvider;
use toolnest::billing::Plan;
use toolnest::entitlement::{EntitlementManager, EntitlementStatus};
use toolnest::infra::config::Config;
use toolnest::tools::simulated::SimulatedProcessor;
use toolnest::tools::{InputFile, TOOLS};

fn instant_config() -> Config {
    let mut config = Config::default();
    config.simulation.login_latency_ms = 0;
    config.simulation.processing_latency_ms = 0;
    config.simulation.billing_latency_ms = 0;
    config
}

fn pdf() -> InputFile {
    InputFile::new("sample_document.pdf", 2_516_582)
}

#[tokio::test]
async fn test_free_tier_walkthrough() {
    let app = App::simulated(&instant_config());
    app.sign_in().await.unwrap();

    let home = app.home();
    assert_eq!(home.first_name, "Alex");
    assert_eq!(home.usage_label, "0 of 3 free uses");

    // Each tool counts against the same allowance
    for tool in TOOLS.iter().take(3) {
        let run = app.run_tool(tool.id, &pdf()).await.unwrap();
        assert!(matches!(run, ToolRun::Completed(_)));
    }
    assert_eq!(app.home().usage_label, "3 of 3 free uses");
    assert_eq!(app.open_tool("bg-remove").unwrap(), Navigation::Paywall);

    app.subscribe(Plan::Monthly).await.unwrap();
    assert_eq!(app.home().usage_label, "Unlimited access");
    for _ in 0..5 {
        assert!(matches!(
            app.run_tool("bg-remove", &pdf()).await.unwrap(),
            ToolRun::Completed(_)
        ));
    }

    app.sign_out();
    assert_eq!(app.home().status, EntitlementStatus::LoggedOut);
}

#[tokio::test]
async fn test_configured_ceiling() {
    let mut config = instant_config();
    config.entitlement.max_free_usage = 1;
    let app = App::simulated(&config);
    app.sign_in().await.unwrap();

    assert!(matches!(
        app.run_tool("summary", &pdf()).await.unwrap(),
        ToolRun::Completed(_)
    ));
    assert_eq!(
        app.run_tool("summary", &pdf()).await.unwrap(),
        ToolRun::UpgradeRequired
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_runs_share_one_allowance() {
    let entitlements = Arc::new(EntitlementManager::default());
    let app = Arc::new(App::new(
        Arc::clone(&entitlements),
        Arc::new(SimulatedIdentityProvider::new(
            Identity::new("Alex", "a@x.io"),
            Duration::ZERO,
        )),
        Arc::new(SimulatedBillingProvider::new(Duration::ZERO)),
        Arc::new(SimulatedProcessor::new(Duration::from_millis(20))),
    ));
    app.sign_in().await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let app = Arc::clone(&app);
        handles.push(tokio::spawn(async move {
            app.run_tool("pdf-compress", &pdf()).await
        }));
    }

    let mut completed = 0;
    for handle in handles {
        if let ToolRun::Completed(_) = handle.await.unwrap().unwrap() {
            completed += 1;
        }
    }
    assert_eq!(completed, 3);
    assert_eq!(entitlements.usage_count(), 3);
}
