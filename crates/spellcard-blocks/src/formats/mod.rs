//! Card format detection and property extraction.
//!
//! Cards written before versioning use `\newcommand{\NAME}{VALUE}` lines;
//! versioned cards use `\SpellProp{NAME}{VALUE}`. Both may carry a
//! same-line `% original: {VALUE}` annotation recording the database value
//! a manual edit was made against. Each layout is a [`PropertyFormat`]
//! strategy and callers pick one through [`detect_version`].

pub mod current;
pub mod legacy;

use std::collections::BTreeMap;

use crate::braces::extract_braced;

pub use current::CurrentFormat;
pub use legacy::LegacyFormat;

/// Marker key announcing a versioned card.
pub const VERSION_MARKER: &str = "SPELL-CARD-VERSION:";

/// Version written by this generator.
pub const CURRENT_VERSION: &str = "2.1";

/// Number of leading lines scanned for the version marker.
pub const DETECTION_WINDOW: usize = 20;

/// Serialization layout of a card file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// Unversioned `\newcommand` cards.
    Legacy,
    /// Versioned `\SpellProp` cards.
    Current,
}

impl FormatVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatVersion::Legacy => "legacy",
            FormatVersion::Current => "current",
        }
    }

    /// The parsing strategy for this version.
    pub fn strategy(&self) -> &'static dyn PropertyFormat {
        match self {
            FormatVersion::Legacy => &LegacyFormat,
            FormatVersion::Current => &CurrentFormat,
        }
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property as found in a card: the value in the file and the recorded
/// database value, if annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProperty {
    pub value: String,
    pub original: Option<String>,
}

impl FileProperty {
    pub fn new(value: impl Into<String>, original: Option<String>) -> Self {
        Self {
            value: value.into(),
            original,
        }
    }
}

/// Property name to file state, as parsed from one card.
pub type PropertyMap = BTreeMap<String, FileProperty>;

/// A property-line layout.
pub trait PropertyFormat: Send + Sync {
    /// The version this strategy reads.
    fn version(&self) -> FormatVersion;

    /// Parse one line into a property, or `None` if it is not a property line.
    fn parse_line(&self, line: &str) -> Option<(String, FileProperty)>;

    /// Fill reference links from non-property directives.
    ///
    /// Only called after all property lines are parsed; implementations must
    /// not overwrite links already present.
    fn harvest_links(&self, _content: &str, _properties: &mut PropertyMap) {}

    /// Parse every property of a card.
    ///
    /// Commented-out lines are ignored. When a name repeats, the first
    /// occurrence wins.
    fn parse(&self, content: &str) -> PropertyMap {
        let mut properties = PropertyMap::new();
        for line in content.lines() {
            if is_comment(line) {
                continue;
            }
            if let Some((name, property)) = self.parse_line(line) {
                properties.entry(name).or_insert(property);
            }
        }
        self.harvest_links(content, &mut properties);
        properties
    }
}

/// Sniff the format from the first [`DETECTION_WINDOW`] lines.
pub fn detect_version(content: &str) -> FormatVersion {
    if version_string(content).is_some() {
        FormatVersion::Current
    } else {
        FormatVersion::Legacy
    }
}

/// The declared version identifier, if the header carries one.
pub fn version_string(content: &str) -> Option<String> {
    content.lines().take(DETECTION_WINDOW).find_map(|line| {
        let idx = line.find(VERSION_MARKER)?;
        let value = line[idx + VERSION_MARKER.len()..].trim();
        Some(value.to_string())
    })
}

/// Detect the format and parse all properties with the matching strategy.
pub fn parse_properties(content: &str) -> (FormatVersion, PropertyMap) {
    let version = detect_version(content);
    let properties = version.strategy().parse(content);
    tracing::trace!(%version, count = properties.len(), "parsed card properties");
    (version, properties)
}

/// Whether a line is a LaTeX comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('%')
}

/// Parse a braced value starting at `start`, followed by an optional
/// `% original: {...}` annotation.
///
/// Whitespace around `%`, `original` and `:` is insignificant. A line whose
/// value never closes yields `None`; a malformed annotation is ignored.
pub(crate) fn parse_value_and_original(line: &str, start: usize) -> Option<FileProperty> {
    let value = match extract_braced(line, start) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, line, "skipping property line");
            return None;
        }
    };
    let original = parse_original(&line[value.end..]);
    Some(FileProperty::new(value.value, original))
}

fn parse_original(rest: &str) -> Option<String> {
    let rest = rest.trim_start().strip_prefix('%')?;
    let rest = rest.trim_start().strip_prefix("original")?;
    let rest = rest.trim_start().strip_prefix(':')?;
    let rest = rest.trim_start();
    extract_braced(rest, 0)
        .ok()
        .map(|group| group.value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_version_marker() {
        let content = "%%%\n%%% SPELL-CARD-VERSION: 2.1\n%%%\n";
        assert_eq!(detect_version(content), FormatVersion::Current);
        assert_eq!(version_string(content).as_deref(), Some("2.1"));
    }

    #[test]
    fn test_detect_version_outside_window() {
        let mut content = "%\n".repeat(DETECTION_WINDOW);
        content.push_str("%%% SPELL-CARD-VERSION: 2.1\n");
        assert_eq!(detect_version(&content), FormatVersion::Legacy);
    }

    #[test]
    fn test_original_whitespace_insignificant() {
        assert_eq!(parse_original("  %original:{x}"), Some("x".to_string()));
        assert_eq!(
            parse_original("%   original   :   {a {b}}"),
            Some("a {b}".to_string())
        );
    }

    #[test]
    fn test_other_comment_is_not_original() {
        assert_eq!(parse_original("% changed by hand"), None);
        assert_eq!(parse_original(""), None);
        assert_eq!(parse_original("% original: missing brace"), None);
    }
}
