use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod actions;
mod assets;
mod console;
mod error;
mod menu;
mod privilege;
mod rules;
mod runner;

use actions::{Actions, Settings};
use assets::EmbeddedAssets;
use console::{Console, TerminalConsole};
use runner::SystemRunner;

#[derive(Parser)]
#[command(name = "fika-utils")]
#[command(version, about = "Manage the Windows Firewall rules for a Fika co-op session", long_about = None)]
struct Cli {
    /// Skip the admin-rights and companion-executable checks
    #[arg(long)]
    permissive: bool,
}

fn main() -> Result<()> {
    // Initialize logging; diagnostics stay on stderr so they don't mix
    // with the menu.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let console = TerminalConsole;
    let runner = SystemRunner;
    let settings = Settings::new(!cli.permissive);

    if settings.strict {
        if let Err(e) = privilege::ensure_elevated(&runner) {
            tracing::error!(error = %e, "privilege check failed");
            eprintln!(
                "{}",
                "Executable does not have admin rights! Please run as admin. Quitting..."
                    .bright_red()
                    .bold()
            );
            let _ = console.read_key();
            std::process::exit(1);
        }
    }

    console.line(&format!(
        "Fika Utils loaded! Version {}",
        env!("CARGO_PKG_VERSION")
    ));
    console.line("");

    let assets = EmbeddedAssets;
    let actions = Actions::new(&console, &runner, &assets, &settings);
    menu::run(&console, &actions)?;

    Ok(())
}
