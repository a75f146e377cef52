//! Filesystem helpers for the spell card generator
//!
//! Provides forward-slash normalized paths, atomic card writes and a
//! format-agnostic configuration store.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
