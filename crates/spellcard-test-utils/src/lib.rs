//! Shared test fixtures for the spellcard workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`data`]: tab-separated spell data builders
//! - [`workspace`]: [`TestWorkspace`](workspace::TestWorkspace) temp directory with data and output tree

pub mod data;
pub mod workspace;

pub use data::{SpellRow, TsvBuilder, sample_tsv};
pub use workspace::TestWorkspace;
