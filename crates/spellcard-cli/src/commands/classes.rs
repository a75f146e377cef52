//! Classes command implementation

use std::path::Path;

use colored::Colorize;
use spellcard_core::classes::{CLASS_CATEGORIES, EXTRA_CLASSES, display_name};

use crate::cli::SourceArgs;
use crate::context::RunContext;
use crate::error::Result;

/// Run the classes command
pub fn run_classes(cwd: &Path, source: &SourceArgs) -> Result<()> {
    let context = RunContext::resolve(cwd, source)?;
    let db = context.load_database()?;
    let present = |class: &str| db.classes().iter().any(|c| c == class);

    let groups = CLASS_CATEGORIES
        .iter()
        .copied()
        .chain(std::iter::once(("Other", EXTRA_CLASSES)));
    for (category, classes) in groups {
        let available: Vec<&str> = classes.iter().copied().filter(|c| present(*c)).collect();
        if available.is_empty() {
            continue;
        }
        println!("{}:", category.bold());
        for class in available {
            let count = db.spells_for_class(class)?.len();
            println!("  {} {} ({} spells)", format!("{:<20}", class).cyan(), display_name(class), count);
        }
    }
    Ok(())
}
