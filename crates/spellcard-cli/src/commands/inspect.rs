//! Inspect command implementation

use std::path::Path;

use colored::Colorize;
use spellcard_core::analyze_card;
use spellcard_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the inspect command
pub fn run_inspect(cwd: &Path, file: &Path, json: bool) -> Result<()> {
    let path = NormalizedPath::new(cwd.join(file));
    let metadata =
        analyze_card(&path).ok_or_else(|| CliError::user(format!("No such card: {}", path)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    if let Some(error) = &metadata.error {
        println!("{} {}", "Unreadable card:".red().bold(), error);
        return Ok(());
    }

    let format = metadata.format.map(|f| f.as_str()).unwrap_or("unknown");
    println!("{}:       {}", "Path".dimmed(), path);
    println!("{}:     {}", "Format".dimmed(), format.cyan());
    if let Some(header) = &metadata.header {
        println!(
            "{}:       {} ({} {})",
            "Card".dimmed(),
            header.name.cyan(),
            header.class,
            header.level
        );
    }
    println!("{}:    {}", "English".dimmed(), metadata.primary_url);
    println!("{}:  {}", "Secondary".dimmed(), metadata.secondary_url);
    println!(
        "{}: {}",
        "Second QR".dimmed(),
        if metadata.secondary_qr_enabled { "on" } else { "off" }
    );
    if let Some(ratio) = &metadata.width_ratio {
        println!("{}:      {}", "Ratio".dimmed(), ratio);
    }
    println!();

    let edited: Vec<_> = metadata
        .properties
        .iter()
        .filter_map(|(name, p)| p.original.as_deref().map(|orig| (name, &p.value, orig)))
        .collect();
    println!(
        "{}: {} ({} with manual edits)",
        "Properties".bold(),
        metadata.properties.len(),
        edited.len()
    );
    for (name, value, original) in edited {
        println!("  {} {} {}", name.cyan(), value, format!("(DB: {})", original).dimmed());
    }
    Ok(())
}
