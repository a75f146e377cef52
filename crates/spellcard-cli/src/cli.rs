//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Spell card generator - render LaTeX spell cards from a spell database
#[derive(Parser, Debug)]
#[command(name = "spellcard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Data and output locations shared by every command that touches the
/// card tree. Each flag overrides the matching config value.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Config file (TOML, JSON or YAML); defaults to ./spellcard.toml if present
    #[arg(long, env = "SPELLCARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tab-separated spell database
    #[arg(long)]
    pub tsv: Option<PathBuf>,

    /// Root of the card tree
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate spell cards for one class
    ///
    /// Existing cards are regenerated in place. Manual edits marked with a
    /// `% original: {...}` annotation are kept, and edits made against a
    /// database value that has changed since are listed as conflicts.
    ///
    /// Examples:
    ///   spellcard generate wiz Fireball "Magic Missile"
    ///   spellcard generate wiz --all --no-overwrite
    ///   spellcard generate sor Fireball --secondary --secondary-url http://...
    Generate {
        /// Class id (e.g. sor, wiz, cleric)
        class: String,

        /// Spell names, exactly as in the database
        #[arg(required_unless_present = "all")]
        spells: Vec<String>,

        /// Generate every spell on the class list
        #[arg(long, conflicts_with = "spells")]
        all: bool,

        #[command(flatten)]
        source: SourceArgs,

        /// Skip spells whose card already exists
        #[arg(long)]
        no_overwrite: bool,

        /// Regenerate from the database only, discarding manual edits
        #[arg(long)]
        no_preserve: bool,

        /// Regenerate this spell's description even when preserving
        #[arg(long, value_name = "SPELL")]
        fresh_description: Vec<String>,

        /// Reset this spell's reference links even when preserving
        #[arg(long, value_name = "SPELL")]
        fresh_links: Vec<String>,

        /// Enable the secondary-language QR code
        #[arg(long)]
        secondary: bool,

        /// Secondary-language link for every selected spell
        #[arg(long)]
        secondary_url: Option<String>,

        /// English link for every selected spell
        #[arg(long)]
        english_url: Option<String>,

        /// Ask before overwriting existing cards, then per card what to keep
        #[arg(short, long)]
        interactive: bool,

        /// Output the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the existing cards of one class
    Scan {
        /// Class id (e.g. sor, wiz, cleric)
        class: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show what is recorded in one card file
    Inspect {
        /// Card file to analyze
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with every default setting
    ///
    /// The format follows the extension: .toml, .json, .yaml or .yml.
    Init {
        /// Where to write the config
        #[arg(default_value = "spellcard.toml")]
        path: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the class ids found in the spell database
    Classes {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   spellcard completions bash > ~/.local/share/bash-completion/completions/spellcard
    ///   spellcard completions zsh > ~/.zfunc/_spellcard
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
