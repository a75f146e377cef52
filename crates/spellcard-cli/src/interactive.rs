//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal confirmation.

use colored::Colorize;
use dialoguer::Confirm;
use spellcard_core::{ExistingCardsSummary, PreserveOptions};

use crate::error::Result;

/// Show what is about to be regenerated and ask whether to go on.
pub fn confirm_overwrite(summary: &ExistingCardsSummary, preserving: bool) -> Result<bool> {
    println!();
    println!("{}", "Existing cards".bold());
    for line in summary_lines(summary) {
        println!("  {}", line);
    }
    if preserving {
        println!(
            "  {}",
            "Annotated manual edits will be kept.".dimmed()
        );
    } else {
        println!("  {}", "Manual edits will be discarded.".red());
    }
    println!();

    Ok(Confirm::new()
        .with_prompt("Regenerate these cards?")
        .default(false)
        .interact()?)
}

/// Ask which parts of one existing card to keep, starting from `base`.
pub fn choose_preservation(name: &str, base: PreserveOptions) -> Result<PreserveOptions> {
    let description = base.description
        && Confirm::new()
            .with_prompt(format!("{}: keep the current description?", name))
            .default(true)
            .interact()?;
    let links = base.links
        && Confirm::new()
            .with_prompt(format!("{}: keep the current reference links?", name))
            .default(true)
            .interact()?;
    Ok(PreserveOptions {
        description,
        links,
        ..base
    })
}

/// Plain-text lines describing the existing cards.
pub fn summary_lines(summary: &ExistingCardsSummary) -> Vec<String> {
    let mut lines = vec![
        format!("{} card(s), {} bytes", summary.count, summary.total_size),
        format!(
            "{} with a secondary-language link",
            summary.secondary_language_count
        ),
    ];
    if let (Some(oldest), Some(newest)) =
        (summary.oldest_modification, summary.newest_modification)
    {
        lines.push(format!(
            "modified between {} and {}",
            oldest.format("%Y-%m-%d %H:%M"),
            newest.format("%Y-%m-%d %H:%M")
        ));
    }
    lines
}
