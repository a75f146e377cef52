//! Run context: the effective configuration for one invocation.
//!
//! Resolution order, lowest to highest: built-in defaults, the config file
//! (`--config`, else `spellcard.toml` in the working directory), then
//! command-line flags. Relative paths are taken against the working
//! directory.

use std::path::{Path, PathBuf};

use spellcard_core::config::CONFIG_FILE;
use spellcard_core::{GeneratorConfig, PathResolver, SpellDatabase};
use spellcard_fs::NormalizedPath;

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Effective settings for a command.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: GeneratorConfig,
    pub data_file: NormalizedPath,
    pub output_dir: NormalizedPath,
}

impl RunContext {
    /// Resolve settings from `cwd` and the command's source flags.
    pub fn resolve(cwd: &Path, args: &SourceArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => {
                let path = NormalizedPath::new(cwd.join(path));
                if !path.is_file() {
                    return Err(CliError::user(format!("Config file not found: {}", path)));
                }
                GeneratorConfig::load(&path)?
            }
            None => GeneratorConfig::load_or_default(&NormalizedPath::new(cwd.join(CONFIG_FILE)))?,
        };

        let data_file = args
            .tsv
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.data_file));
        let output_dir = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_dir));

        let context = Self {
            data_file: NormalizedPath::new(cwd.join(data_file)),
            output_dir: NormalizedPath::new(cwd.join(output_dir)),
            config,
        };
        tracing::debug!(
            data_file = %context.data_file,
            output_dir = %context.output_dir,
            "resolved run context"
        );
        Ok(context)
    }

    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.output_dir.clone()).with_extension(self.config.extension.clone())
    }

    pub fn load_database(&self) -> Result<SpellDatabase> {
        Ok(SpellDatabase::load(&self.data_file)?)
    }
}
