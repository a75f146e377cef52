//! Deterministic card locations.
//!
//! A card for spell `name` on class `class` lives at
//! `{base}/{class}/{level}/{sanitize(name)}.{ext}`. The same inputs always
//! map to the same path, which is what lets existing files be matched back
//! to database spells.

use regex::Regex;
use std::sync::LazyLock;

use spellcard_fs::NormalizedPath;

use crate::model::SpellRecord;
use crate::{Error, Result};

static FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("Invalid forbidden-char regex"));

static DASH_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid dash regex"));

/// Make a spell name safe to use as a file name.
///
/// Forbidden characters become `-`, dash runs collapse to one, and leading
/// or trailing dashes and whitespace are trimmed. Commas, apostrophes and
/// interior spaces are kept.
///
/// # Example
/// ```
/// use spellcard_core::paths::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("file<name>.txt"), "file-name-.txt");
/// assert_eq!(sanitize_file_name("Mage's Sword, Greater"), "Mage's Sword, Greater");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    let replaced = FORBIDDEN_CHARS.replace_all(name, "-");
    let collapsed = DASH_RUNS.replace_all(&replaced, "-");
    collapsed
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}

/// Sanitize one path segment, rejecting results that name no real file:
/// empty segments and `.`/`..` style dot runs.
fn path_segment(kind: &'static str, raw: &str) -> Result<String> {
    let segment = sanitize_file_name(raw);
    if segment.is_empty() || segment.chars().all(|c| c == '.') {
        return Err(Error::InvalidPathSegment {
            kind,
            value: raw.to_string(),
        });
    }
    Ok(segment)
}

/// Resolves card paths under one output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base: NormalizedPath,
    extension: String,
}

impl PathResolver {
    pub fn new(base: impl Into<NormalizedPath>) -> Self {
        Self {
            base: base.into(),
            extension: "tex".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn base(&self) -> &NormalizedPath {
        &self.base
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Directory holding every level of a class.
    pub fn class_dir(&self, class: &str) -> NormalizedPath {
        self.base.join(&sanitize_file_name(class))
    }

    /// Path for an explicit level.
    ///
    /// Every segment is sanitized, so the result always stays below the
    /// class directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSegment`] if the class, level or name
    /// sanitizes to nothing or to a dot run.
    pub fn path_for_level(&self, class: &str, level: &str, name: &str) -> Result<NormalizedPath> {
        path_segment("class", class)?;
        let level = path_segment("level", level)?;
        let name = path_segment("spell name", name)?;
        Ok(self
            .class_dir(class)
            .join(&level)
            .join(&format!("{}.{}", name, self.extension)))
    }

    /// Path for a spell on a class's list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLevel`] if the spell has no level for `class`,
    /// or [`Error::InvalidPathSegment`] as for [`Self::path_for_level`].
    pub fn resolve(&self, class: &str, name: &str, record: &SpellRecord) -> Result<NormalizedPath> {
        let level = record.level(class).ok_or_else(|| Error::MissingLevel {
            spell: name.to_string(),
            class: class.to_string(),
        })?;
        self.path_for_level(class, level, name)
    }
}
