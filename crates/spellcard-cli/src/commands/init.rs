//! Init command implementation

use std::path::Path;

use colored::Colorize;
use spellcard_core::GeneratorConfig;
use spellcard_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Write a config file holding every default setting.
pub fn run_init(cwd: &Path, path: &Path, force: bool) -> Result<()> {
    let path = NormalizedPath::new(cwd.join(path));
    if path.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists (use --force to replace it)",
            path
        )));
    }

    GeneratorConfig::default().save(&path)?;
    println!("{} Wrote {}", "ok".green().bold(), path);
    Ok(())
}
