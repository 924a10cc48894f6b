// src/main.rs — ToolNest entry point

use clap::Parser;

use toolnest::app::App;
use toolnest::auth::Credentials;
use toolnest::cli::{Cli, Commands};
use toolnest::infra::config::Config;
use toolnest::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    if cli.fast {
        config.simulation.login_latency_ms = 0;
        config.simulation.processing_latency_ms = 0;
        config.simulation.billing_latency_ms = 0;
    }

    // Dispatch commands that don't need a session
    match &cli.command {
        Some(Commands::Tools { json }) => {
            return toolnest::cli::catalog::show_tools(*json);
        }
        Some(Commands::Plans) => {
            toolnest::cli::catalog::show_plans();
            return Ok(());
        }
        _ => {}
    }

    let mut app = App::simulated(&config);
    if let Some(email) = &cli.email {
        app = app.with_credentials(
            Credentials::oauth(&config.auth.provider).with_login_hint(email),
        );
    }
    tracing::debug!(
        max_free_usage = config.entitlement.max_free_usage,
        "Session initialized"
    );

    match cli.command {
        Some(Commands::Demo { tool, plan, json }) => {
            toolnest::cli::demo::run_demo(&app, &tool, &plan, json).await
        }
        _ => toolnest::cli::shell::run_shell(&app).await,
    }
}
