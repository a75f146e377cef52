//! Versioned `\SpellProp` cards.
//!
//! ```text
//! \SpellProp{range}{medium}% original: {100 ft. + 10 ft./level}
//! \SpellCardQR{https://www.d20pfsrd.com/magic/all-spells/a/acid-splash}
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::{
    FileProperty, FormatVersion, PropertyFormat, PropertyMap, is_comment,
    parse_value_and_original,
};
use crate::braces::extract_braced;

static PROP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\\SpellProp\{([A-Za-z]+)\}\s*").expect("Invalid property regex")
});

static QR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\\SpellCardQR\s*").expect("Invalid QR regex"));

/// Properties filled from QR lines when their `\SpellProp` line is missing,
/// in QR line order.
const LINK_PROPERTIES: [&str; 2] = ["urlenglish", "urlsecondary"];

/// Strategy for `\SpellProp{NAME}{VALUE}` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentFormat;

impl PropertyFormat for CurrentFormat {
    fn version(&self) -> FormatVersion {
        FormatVersion::Current
    }

    fn parse_line(&self, line: &str) -> Option<(String, FileProperty)> {
        let caps = PROP_REGEX.captures(line)?;
        let name = caps.get(1)?.as_str().to_string();
        let start = caps.get(0)?.end();
        parse_value_and_original(line, start).map(|property| (name, property))
    }

    fn harvest_links(&self, content: &str, properties: &mut PropertyMap) {
        let urls = qr_urls(content);

        for (name, url) in LINK_PROPERTIES.iter().zip(urls) {
            properties
                .entry((*name).to_string())
                .or_insert_with(|| FileProperty::new(url, None));
        }
    }
}

/// URLs of all uncommented QR lines, in file order.
pub fn qr_urls(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !is_comment(line))
        .filter_map(|line| {
            let start = QR_REGEX.find(line)?.end();
            extract_braced(line, start)
                .ok()
                .map(|group| group.value.to_string())
        })
        .collect()
}
