//! Error types for spellcard-core

use std::path::PathBuf;

/// Result type for spellcard-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spellcard-core operations
///
/// Parsing and analysis of existing cards never produce these; malformed
/// cards come back as empty or error-flagged data instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Spell data missing or malformed; raised before any card is processed
    #[error("Failed to load spell data from {path}: {message}")]
    DataAccess { path: PathBuf, message: String },

    /// Class id not present in the loaded data
    #[error("Unknown class: {class}")]
    UnknownClass { class: String },

    /// Spell not present in the loaded data
    #[error("Unknown spell: {name}")]
    UnknownSpell { name: String },

    /// Spell has no level for the requested class
    #[error("Spell {spell} has no level for class {class}")]
    MissingLevel { spell: String, class: String },

    /// Name, class or level that leaves no usable path segment
    #[error("Invalid {kind} for a card path: {value:?}")]
    InvalidPathSegment { kind: &'static str, value: String },

    /// Property name outside the declared set
    #[error("Unknown property: {name}")]
    UnknownProperty { name: String },

    /// Per-item failure; aborts the remaining batch
    #[error("Failed to generate spell card for {item}: {source}")]
    Generation {
        item: String,
        #[source]
        source: Box<Error>,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from spellcard-fs
    #[error(transparent)]
    Fs(#[from] spellcard_fs::Error),
}

impl Error {
    /// Wrap `source` as the failure of one batch item.
    pub fn generation(item: impl Into<String>, source: Error) -> Self {
        Self::Generation {
            item: item.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn data_access(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataAccess {
            path: path.into(),
            message: message.into(),
        }
    }
}
