//! Scan command implementation

use std::path::Path;

use colored::Colorize;
use spellcard_core::{find_existing_cards, summarize_existing};

use crate::cli::SourceArgs;
use crate::context::RunContext;
use crate::error::Result;
use crate::interactive::summary_lines;

/// Run the scan command
pub fn run_scan(cwd: &Path, class: &str, source: &SourceArgs, json: bool) -> Result<()> {
    let context = RunContext::resolve(cwd, source)?;
    let db = context.load_database()?;
    let existing = find_existing_cards(&db, class, &context.resolver())?;
    let summary = summarize_existing(&existing);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{} {}", "Existing cards for".bold(), class.cyan());
    println!();
    if summary.count == 0 {
        println!(
            "  {} (use {} to create some)",
            "None".dimmed(),
            "spellcard generate".cyan()
        );
        return Ok(());
    }
    for line in summary_lines(&summary) {
        println!("  {}", line);
    }
    println!();
    for (name, path) in &existing {
        let analysis = summary.analyses.get(name);
        let marker = match analysis {
            Some(a) if a.is_error() => "unreadable".red(),
            Some(a) if a.has_secondary_language => "secondary".green(),
            _ => "".normal(),
        };
        println!("  {} {} {}", name.cyan(), path.to_string().dimmed(), marker);
    }
    Ok(())
}
