//! Unversioned `\newcommand` cards.
//!
//! ```text
//! \newcommand{\range}{medium}% original: {100 ft. + 10 ft./level}
//! \newcommand{\urlenglish}{https://...}
//! ```
//! Reference links are ordinary `\newcommand` lines here, so no extra
//! harvesting is needed.

use regex::Regex;
use std::sync::LazyLock;

use super::{FileProperty, FormatVersion, PropertyFormat, parse_value_and_original};

static DEFINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\\newcommand\{\\([A-Za-z]+)\}\s*").expect("Invalid legacy property regex")
});

/// Strategy for `\newcommand{\NAME}{VALUE}` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyFormat;

impl PropertyFormat for LegacyFormat {
    fn version(&self) -> FormatVersion {
        FormatVersion::Legacy
    }

    fn parse_line(&self, line: &str) -> Option<(String, FileProperty)> {
        let caps = DEFINE_REGEX.captures(line)?;
        let name = caps.get(1)?.as_str().to_string();
        let start = caps.get(0)?.end();
        parse_value_and_original(line, start).map(|property| (name, property))
    }
}
