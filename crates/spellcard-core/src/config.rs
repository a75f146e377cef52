//! Generator settings.
//!
//! Loaded from `spellcard.toml` (or any TOML/JSON/YAML file) through
//! [`spellcard_fs::ConfigStore`]. Every key is optional.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use spellcard_fs::{ConfigStore, NormalizedPath};

use crate::Result;
use crate::convert::CommandConverter;
use crate::paths::PathResolver;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "spellcard.toml";

pub const DEFAULT_ENGLISH_URL_BASE: &str = "https://www.d20pfsrd.com/magic/all-spells";

pub const DEFAULT_SECONDARY_URL: &str =
    "http://prd.5footstep.de/Grundregelwerk/Zauber/<german-spell-name>";

fn default_data_file() -> String {
    "spell_full.tsv".to_string()
}

fn default_output_dir() -> String {
    "src/spells".to_string()
}

fn default_extension() -> String {
    "tex".to_string()
}

fn default_english_url_base() -> String {
    DEFAULT_ENGLISH_URL_BASE.to_string()
}

fn default_secondary_url() -> String {
    DEFAULT_SECONDARY_URL.to_string()
}

fn default_program() -> String {
    "pandoc".to_string()
}

fn default_args() -> Vec<String> {
    ["-f", "html", "-t", "latex"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_timeout_secs() -> u64 {
    30
}

/// External description converter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Seconds before a hung converter is killed
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ConverterConfig {
    pub fn build(&self) -> CommandConverter {
        CommandConverter::new(
            self.program.clone(),
            self.args.clone(),
            Duration::from_secs(self.timeout_secs),
        )
    }
}

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Tab-separated spell database
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Root of the `{class}/{level}/{name}.tex` tree
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_english_url_base")]
    pub english_url_base: String,

    /// Link written for the secondary-language QR code
    #[serde(default = "default_secondary_url")]
    pub secondary_url: String,

    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            output_dir: default_output_dir(),
            extension: default_extension(),
            english_url_base: default_english_url_base(),
            secondary_url: default_secondary_url(),
            converter: ConverterConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load from a TOML, JSON or YAML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config = ConfigStore::new().load(path)?;
        tracing::debug!(path = %path, "loaded generator config");
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &NormalizedPath) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write to a TOML, JSON or YAML file, chosen by extension.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        tracing::debug!(path = %path, "saved generator config");
        Ok(())
    }

    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.output_dir.as_str()).with_extension(self.extension.clone())
    }
}
