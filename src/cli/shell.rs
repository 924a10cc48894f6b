// src/cli/shell.rs — Interactive session: sign-in, home, tool, paywall
//
// Prompts go through inquire; Esc or Ctrl-C at a menu leaves the screen.
// Ctrl-C while signing in, processing or subscribing abandons that request.

use inquire::InquireError;

use super::render;
use crate::app::{App, Navigation, ToolRun};
use crate::billing::Plan;
use crate::tools::{InputFile, Tool, TOOLS};

/// Size reported for a placeholder file that does not exist on disk.
const SAMPLE_FILE_SIZE: u64 = 2_516_582;

const VALUE_PROPS: [&str; 5] = [
    "Unlimited access to all tools",
    "No daily usage limits",
    "Priority processing speed",
    "Ad-free experience",
    "Early access to new tools",
];

enum HomeChoice {
    Tool(&'static Tool),
    Upgrade,
    SignOut,
    Quit,
}

/// Map a prompt result, turning Esc / Ctrl-C into `None`.
fn prompt<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Resolves on Ctrl-C. Once listened for, SIGINT no longer terminates the
/// process, so every long-running await in the shell races against this.
async fn interrupted() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Trimmed path plus its size on disk, or the sample size if it is missing.
fn input_file(raw: &str) -> InputFile {
    let path = raw.trim();
    let size = std::fs::metadata(path)
        .map(|m| m.len())
        .unwrap_or(SAMPLE_FILE_SIZE);
    InputFile::new(path, size)
}

pub async fn run_shell(app: &App) -> anyhow::Result<()> {
    loop {
        if !app.entitlements().is_logged_in() {
            if !sign_in_screen(app).await? {
                return Ok(());
            }
            continue;
        }

        println!();
        println!("{}", render::home_card(&app.home()));
        match home_screen(app)? {
            HomeChoice::Tool(tool) => tool_screen(app, tool).await?,
            HomeChoice::Upgrade => paywall_screen(app).await?,
            HomeChoice::SignOut => {
                app.sign_out();
                println!("Signed out.");
            }
            HomeChoice::Quit => return Ok(()),
        }
    }
}

/// Returns false when the user chose to quit.
async fn sign_in_screen(app: &App) -> anyhow::Result<bool> {
    println!();
    println!("ToolNest: your essential digital workshop.");
    let options = vec!["Continue with Google", "Quit"];
    let Some(choice) = prompt(inquire::Select::new("Sign in:", options).prompt())? else {
        return Ok(false);
    };
    if choice == "Quit" {
        return Ok(false);
    }

    eprint!("  Signing in... ");
    match app.sign_in_or_cancel(interrupted()).await {
        Ok(identity) => {
            eprintln!("done");
            println!("  Welcome, {} ({})", identity.display_name, identity.email);
        }
        Err(e) => {
            eprintln!("failed");
            eprintln!("  {e}");
            if e.is_retriable() {
                eprintln!("  Try again.");
            }
        }
    }
    Ok(true)
}

fn home_screen(app: &App) -> anyhow::Result<HomeChoice> {
    let mut labels: Vec<String> = TOOLS
        .iter()
        .map(|t| format!("{:<14} {}", t.name, t.description))
        .collect();
    let is_pro = app.entitlements().is_pro();
    if !is_pro {
        labels.push("Upgrade to Pro".into());
    }
    labels.push("Sign out".into());
    labels.push("Quit".into());

    let Some(idx) = prompt(
        inquire::Select::new("Choose a tool:", labels)
            .with_page_size(10)
            .raw_prompt()
            .map(|o| o.index),
    )?
    else {
        return Ok(HomeChoice::Quit);
    };

    let extra = idx.checked_sub(TOOLS.len());
    Ok(match (extra, is_pro) {
        (None, _) => HomeChoice::Tool(&TOOLS[idx]),
        (Some(0), false) => HomeChoice::Upgrade,
        (Some(0), true) | (Some(1), false) => HomeChoice::SignOut,
        _ => HomeChoice::Quit,
    })
}

async fn tool_screen(app: &App, tool: &'static Tool) -> anyhow::Result<()> {
    match app.open_tool(tool.id)? {
        Navigation::Paywall => return paywall_screen(app).await,
        Navigation::Tool(_) => {}
    }

    println!();
    println!("{}: {}", tool.name, tool.description);
    let Some(path) = prompt(
        inquire::Text::new("File to process:")
            .with_default("sample_document.pdf")
            .with_help_message("PDF, TXT, DOCX, PNG, JPG")
            .prompt(),
    )?
    else {
        return Ok(());
    };
    let file = input_file(&path);
    println!("  {} ({})", file.name, file.display_size());

    eprint!("  Processing... ");
    let outcome = tokio::select! {
        outcome = app.run_tool(tool.id, &file) => outcome,
        () = interrupted() => {
            eprintln!("cancelled");
            return Ok(());
        }
    };
    match outcome {
        Ok(ToolRun::Completed(artifact)) => {
            eprintln!("done");
            println!("{}", render::result_card(&artifact));
            Ok(())
        }
        Ok(ToolRun::UpgradeRequired) => {
            eprintln!("free uses exhausted");
            paywall_screen(app).await
        }
        Err(e) => {
            eprintln!("failed");
            eprintln!("  {e}");
            Ok(())
        }
    }
}

async fn paywall_screen(app: &App) -> anyhow::Result<()> {
    println!();
    println!("Go Pro");
    for prop in VALUE_PROPS {
        println!("  * {prop}");
    }

    let mut labels: Vec<String> = Plan::ALL
        .iter()
        .map(|p| format!("{:<8} {}", p.to_string(), p.price_label()))
        .collect();
    labels.push("Not now".into());

    let Some(idx) = prompt(
        inquire::Select::new("Choose a plan:", labels)
            .raw_prompt()
            .map(|o| o.index),
    )?
    else {
        return Ok(());
    };
    let Some(&plan) = Plan::ALL.get(idx) else {
        return Ok(());
    };

    eprint!("  Subscribing... ");
    let outcome = tokio::select! {
        outcome = app.subscribe(plan) => outcome,
        () = interrupted() => {
            eprintln!("cancelled");
            return Ok(());
        }
    };
    match outcome {
        Ok(receipt) => {
            eprintln!("done");
            println!(
                "  {} plan active (receipt {})",
                receipt.plan, receipt.id
            );
        }
        Err(e) => {
            eprintln!("failed");
            eprintln!("  {e}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_input_file_trims_before_stat() {
        let mut tmp = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        tmp.write_all(b"hello").unwrap();
        let path = tmp.path().to_string_lossy().into_owned();

        let file = input_file(&format!("  {path}\n"));
        assert_eq!(file.name, path);
        assert_eq!(file.size_bytes, 5);
    }

    #[test]
    fn test_missing_input_file_uses_sample_size() {
        let file = input_file(" sample_document.pdf ");
        assert_eq!(file.name, "sample_document.pdf");
        assert_eq!(file.size_bytes, SAMPLE_FILE_SIZE);
    }
}
