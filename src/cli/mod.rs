// src/cli/mod.rs — CLI definition (clap derive)

pub mod catalog;
pub mod demo;
pub mod render;
pub mod shell;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toolnest", about = "Document and image tools with a free tier", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Skip simulated latencies
    #[arg(long)]
    pub fast: bool,

    /// Account to sign in as (pre-fills the provider's email)
    #[arg(long, global = true)]
    pub email: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session (default)
    Shell,
    /// List available tools
    Tools {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List subscription plans
    Plans,
    /// Walk through sign-in, free runs, paywall and upgrade without prompts
    Demo {
        /// Tool to run during the walkthrough
        #[arg(long, default_value = "summary")]
        tool: String,
        /// Plan to buy when the paywall is hit
        #[arg(long, default_value = "monthly")]
        plan: String,
        /// Print the final home summary as JSON
        #[arg(long)]
        json: bool,
    },
}
