// src/cli/catalog.rs — `toolnest tools` and `toolnest plans`

use crate::billing::Plan;
use crate::tools::TOOLS;

pub fn show_tools(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&TOOLS[..])?);
        return Ok(());
    }

    println!("Tools:");
    for tool in TOOLS.iter() {
        println!("  {:<14} {:<14} {}", tool.id, tool.name, tool.description);
    }
    Ok(())
}

pub fn show_plans() {
    println!("ToolNest Pro:");
    for plan in Plan::ALL {
        println!("  {:<8} {}", plan.to_string(), plan.price_label());
    }
}
