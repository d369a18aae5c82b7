//! Hashgen CLI - Deterministic, shareable identifiers from a passphrase and salt
//!
//! This is the command-line interface for Hashgen. It wraps the core
//! derivation library with prompts, config, and terminal output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use hashgen_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{check, derive, init, misc, watch};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(error = ?e, "command failed");
        let ui_ctx = ctx.fallback_ui_context();

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an explicit "Hint:" line off an error message, or provide a
/// contextual hint for common error types.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            let hint = error[idx + marker.len()..].trim();
            return (&error[..idx], Some(hint.to_string()));
        }
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("hashing unavailable") {
        return (
            error,
            Some("Run `hashgen check` to see which self test failed.".to_string()),
        );
    }

    if error_lower.contains("failed to parse config") {
        return (
            error,
            Some("Fix the file or recreate it with `hashgen init --force`.".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Derive(args)) => {
            derive::handle_derive(ctx, args)?;
        }
        Some(Commands::Watch(args)) => {
            watch::handle_watch(ctx, args)?;
        }
        Some(Commands::Check(args)) => {
            check::handle_check(ctx, args)?;
        }
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Hashgen v{}", VERSION);
            println!("\nQuickstart:");
            println!("  hashgen derive");
            println!("  hashgen derive --passphrase hello --salt world --field alnum");
            println!("  printf 'hello\\tworld\\n' | hashgen watch");
            println!("  hashgen check");
            println!("\nRun `hashgen --help` for full usage.");
        }
    }

    Ok(())
}
