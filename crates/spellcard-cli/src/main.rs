//! Spell card generator CLI
//!
//! Renders LaTeX spell cards from a tab-separated spell database, keeping
//! manual edits made to previously generated cards.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::GenerateArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} spell card generator", "spellcard".green().bold());
            println!();
            println!("Run {} for available commands.", "spellcard --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Generate {
            class,
            spells,
            all,
            source,
            no_overwrite,
            no_preserve,
            fresh_description,
            fresh_links,
            secondary,
            secondary_url,
            english_url,
            interactive,
            json,
        } => commands::run_generate(
            &cwd,
            &GenerateArgs {
                class,
                spells,
                all,
                source,
                no_overwrite,
                no_preserve,
                fresh_description,
                fresh_links,
                secondary,
                secondary_url,
                english_url,
                interactive,
                json,
            },
        ),
        Commands::Scan {
            class,
            source,
            json,
        } => commands::run_scan(&cwd, &class, &source, json),
        Commands::Inspect { file, json } => commands::run_inspect(&cwd, &file, json),
        Commands::Init { path, force } => commands::run_init(&cwd, &path, force),
        Commands::Classes { source } => commands::run_classes(&cwd, &source),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "spellcard", &mut std::io::stdout());
            Ok(())
        }
    }
}
