//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use spellcard_core::{
    CardGenerator, GenerationItem, GenerationOptions, GenerationReport, LinkOverrides,
    PreserveOptions, SpellDatabase, detect_existing, summarize_existing,
};

use crate::cli::SourceArgs;
use crate::context::RunContext;
use crate::error::{CliError, Result};
use crate::interactive;

/// Parsed `generate` arguments.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub class: String,
    pub spells: Vec<String>,
    pub all: bool,
    pub source: SourceArgs,
    pub no_overwrite: bool,
    pub no_preserve: bool,
    /// Spells whose description is regenerated even when preserving.
    pub fresh_description: Vec<String>,
    /// Spells whose links are reset even when preserving.
    pub fresh_links: Vec<String>,
    pub secondary: bool,
    pub secondary_url: Option<String>,
    pub english_url: Option<String>,
    pub interactive: bool,
    pub json: bool,
}

/// Run the generate command
pub fn run_generate(cwd: &Path, args: &GenerateArgs) -> Result<()> {
    let context = RunContext::resolve(cwd, &args.source)?;
    let db = context.load_database()?;
    let mut items = select_items(&db, args)?;
    let resolver = context.resolver();

    let mut options = GenerationOptions::from_config(&context.config);
    options.overwrite = !args.no_overwrite;
    options.secondary_qr = args.secondary;
    options.preserve = batch_preserve(args);

    if args.interactive && options.overwrite {
        let existing = detect_existing(&items, &resolver)?;
        if !existing.is_empty() {
            let summary = summarize_existing(&existing);
            if !interactive::confirm_overwrite(&summary, options.preserve.properties)? {
                println!("{}", "Aborted, no cards written.".yellow());
                return Ok(());
            }
            if !args.no_preserve {
                for item in items.iter_mut().filter(|i| existing.contains_key(i.name())) {
                    let base = item.preserve.unwrap_or(options.preserve);
                    item.preserve = Some(interactive::choose_preservation(item.name(), base)?);
                }
            }
        }
    }

    let generator = CardGenerator::new(resolver, context.config.converter.build(), options);
    let report = generator.generate(&items, |current, total, message| {
        eprintln!("{} {}", format!("[{}/{}]", current, total).dimmed(), message);
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn batch_preserve(args: &GenerateArgs) -> PreserveOptions {
    if args.no_preserve {
        PreserveOptions::none()
    } else {
        PreserveOptions::all()
    }
}

/// Build generation items for the selected spells.
///
/// Every name is checked against the database and the class list before
/// anything is written. Spells named by `--fresh-description` or
/// `--fresh-links` get their own preservation choice.
fn select_items(db: &SpellDatabase, args: &GenerateArgs) -> Result<Vec<GenerationItem>> {
    db.check_class(&args.class)?;

    let records = if args.all {
        db.spells_for_class(&args.class)?
    } else {
        args.spells
            .iter()
            .map(|name| db.get(name))
            .collect::<std::result::Result<Vec<_>, _>>()?
    };

    for name in args.fresh_description.iter().chain(&args.fresh_links) {
        if !records.iter().any(|record| record.name() == name) {
            return Err(CliError::user(format!("{} is not among the selected spells", name)));
        }
    }

    let links = LinkOverrides {
        english: args.english_url.clone(),
        secondary: args.secondary_url.clone(),
    };
    let base = batch_preserve(args);
    Ok(records
        .into_iter()
        .map(|record| {
            let mut item =
                GenerationItem::new(&args.class, record.clone()).with_links(links.clone());
            let fresh_description = args.fresh_description.iter().any(|n| n == record.name());
            let fresh_links = args.fresh_links.iter().any(|n| n == record.name());
            if fresh_description || fresh_links {
                item = item.with_preserve(PreserveOptions {
                    description: base.description && !fresh_description,
                    links: base.links && !fresh_links,
                    ..base
                });
            }
            item
        })
        .collect())
}

fn print_report(report: &GenerationReport) {
    println!();
    println!(
        "{} {} generated, {} skipped",
        "Done:".green().bold(),
        report.generated.len(),
        report.skipped.len()
    );
    for path in &report.generated {
        println!("  {} {}", "+".green(), path);
    }
    for path in &report.skipped {
        println!("  {} {} {}", "-".yellow(), path, "(exists)".dimmed());
    }

    if report.has_conflicts() {
        println!();
        println!(
            "{} manual edits made against database values that have since changed:",
            "Conflicts".yellow().bold()
        );
        for conflict in &report.conflicts {
            println!("  {} {}", "!".yellow(), conflict);
        }
    }
}
