// src/cli/demo.rs — Non-interactive walkthrough of the free tier and upgrade

use super::render;
use crate::app::{App, ToolRun};
use crate::billing::Plan;
use crate::tools::{self, InputFile};

/// Sign in, use the free runs, hit the paywall, upgrade, keep going, sign out.
pub async fn run_demo(app: &App, tool_id: &str, plan: &str, json: bool) -> anyhow::Result<()> {
    let plan: Plan = plan.parse()?;
    let tool = tools::find(tool_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown tool '{tool_id}'. Run `toolnest tools`."))?;
    let file = InputFile::new("sample_document.pdf", 2_516_582);

    eprint!("[sign-in] ");
    let identity = app.sign_in().await?;
    eprintln!("{} <{}>", identity.display_name, identity.email);

    let max = app.entitlements().max_free_usage();
    let mut upgraded = false;
    // One run past the ceiling to show the paywall, then two as Pro.
    for attempt in 1..=max + 3 {
        match app.run_tool(tool.id, &file).await? {
            ToolRun::Completed(artifact) => {
                let home = app.home();
                eprintln!("[run {attempt}] {} ({})", artifact.title, home.usage_label);
            }
            ToolRun::UpgradeRequired if !upgraded => {
                eprintln!("[run {attempt}] free uses exhausted -> paywall");
                let receipt = app.subscribe(plan).await?;
                eprintln!(
                    "[paywall] {} {} (receipt {})",
                    receipt.plan,
                    plan.price_label(),
                    receipt.id
                );
                upgraded = true;
            }
            ToolRun::UpgradeRequired => {
                anyhow::bail!("Still gated after upgrading");
            }
        }
    }

    let home = app.home();
    if json {
        println!("{}", serde_json::to_string_pretty(&home)?);
    } else {
        println!("{}", render::home_card(&home));
    }

    app.sign_out();
    eprintln!("[sign-out] {:?}", app.entitlements().status());
    Ok(())
}
