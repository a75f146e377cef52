//! Reconciling spell card generator
//!
//! Turns rows of a tab-separated spell database into LaTeX spell cards laid
//! out as `{class}/{level}/{name}.tex`. When a card already exists, manual
//! edits recorded with `% original: {...}` annotations are carried over and
//! edits made against a database value that has since changed are reported
//! as conflicts.
//!
//! # Architecture
//!
//! ```text
//!                 spellcard-cli
//!                       |
//!                 spellcard-core
//!                 /            \
//!        spellcard-fs     spellcard-blocks
//! ```
//!
//! `spellcard-blocks` reads and writes the line-level card syntax; this crate
//! owns the data model, path layout, reconciliation and batch orchestration.
//!
//! # Example
//!
//! ```no_run
//! use spellcard_core::{
//!     CardGenerator, GenerationItem, GenerationOptions, GeneratorConfig, SpellDatabase,
//! };
//! use spellcard_fs::NormalizedPath;
//!
//! fn run() -> spellcard_core::Result<()> {
//!     let config = GeneratorConfig::default();
//!     let db = SpellDatabase::load(&NormalizedPath::new(&config.data_file))?;
//!     let items = vec![GenerationItem::new("wiz", db.get("Fireball")?.clone())];
//!     let generator = CardGenerator::new(
//!         config.resolver(),
//!         config.converter.build(),
//!         GenerationOptions::from_config(&config),
//!     );
//!     let report = generator.generate(&items, |_, _, _| {})?;
//!     assert_eq!(report.generated.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod classes;
pub mod config;
pub mod convert;
pub mod database;
pub mod error;
pub mod generator;
pub mod latex;
pub mod model;
pub mod paths;
pub mod reconcile;
pub mod render;
pub mod report;
pub mod scanner;

pub use analyzer::{ArtifactMetadata, CardHeader, analyze_card, analyze_content};
pub use config::{ConverterConfig, GeneratorConfig};
pub use convert::{CommandConverter, ConvertError, PassthroughConverter, TextConverter};
pub use database::SpellDatabase;
pub use error::{Error, Result};
pub use generator::{
    CardGenerator, GenerationItem, GenerationOptions, LinkOverrides, PreserveOptions,
};
pub use model::{PropertyName, SpellRecord};
pub use paths::{PathResolver, sanitize_file_name};
pub use reconcile::{Reconciled, ValueConflict, reconcile_link, reconcile_property};
pub use render::CardState;
pub use report::{
    ConflictRecord, ExistingCardsSummary, GenerationReport, ItemOutcome, ItemState,
    summarize_existing,
};
pub use scanner::{detect_existing, find_existing_cards};
