//! Metadata extraction from existing cards.
//!
//! Analysis never fails: unreadable or undecodable files come back as
//! metadata with `error` set and zeroed numeric fields, and missing pieces
//! are simply empty.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use spellcard_blocks::braces::extract_braced_args;
use spellcard_blocks::formats::current::qr_urls;
use spellcard_blocks::{FormatVersion, PropertyMap, extract_description, parse_properties};
use spellcard_fs::{NormalizedPath, io};

/// Characters kept in [`ArtifactMetadata::content_preview`].
pub const PREVIEW_CHARS: usize = 200;

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\href\{([^}]+)\}").expect("Invalid href regex"));
static LEGACY_QR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\qrcode\{([^}]+)\}").expect("Invalid qrcode regex"));
static WIDTH_RATIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\\spellcardinfo\s*\[([^\]]*)\]").expect("Invalid info regex")
});
static CARD_BEGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\\begin\{spellcard\}").expect("Invalid begin regex"));
static LANGUAGE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)german|deutsch").expect("Invalid keyword regex"));

/// `\begin{SpellCard}{class}{name}{level}` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    pub class: String,
    pub name: String,
    pub level: String,
}

/// Everything known about one card file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtifactMetadata {
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_format")]
    pub format: Option<FormatVersion>,
    pub header: Option<CardHeader>,
    pub primary_url: String,
    pub secondary_url: String,
    pub secondary_language_urls: Vec<String>,
    pub qr_codes: Vec<String>,
    /// Both QR lines are active.
    pub secondary_qr_enabled: bool,
    pub has_secondary_language: bool,
    pub width_ratio: Option<String>,
    pub description: String,
    #[serde(serialize_with = "serialize_properties")]
    pub properties: PropertyMap,
    pub content_preview: String,
    pub error: Option<String>,
}

impl ArtifactMetadata {
    /// Metadata for a file that could not be read or decoded.
    pub fn unreadable(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// File value of a property, if present.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.value.as_str())
    }
}

/// Analyze a card on disk.
///
/// Returns `None` when the file does not exist.
pub fn analyze_card(path: &NormalizedPath) -> Option<ArtifactMetadata> {
    if !path.exists() {
        return None;
    }

    let bytes = match io::read_bytes(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path, %err, "unreadable card");
            return Some(ArtifactMetadata::unreadable(err.to_string()));
        }
    };
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(path = %path, %err, "card is not valid UTF-8");
            return Some(ArtifactMetadata::unreadable(err.to_string()));
        }
    };

    let mut metadata = analyze_content(&content);
    if let Ok(stat) = std::fs::metadata(path.to_native()) {
        metadata.size = stat.len();
        metadata.modified = stat.modified().ok().map(DateTime::<Utc>::from);
    }
    Some(metadata)
}

/// Analyze card text that is already in memory.
///
/// `size` is the byte length of `content`; `modified` stays empty.
pub fn analyze_content(content: &str) -> ArtifactMetadata {
    let (format, properties) = parse_properties(content);
    let active: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim_start().starts_with('%'))
        .collect();

    let hrefs: Vec<String> = active
        .iter()
        .flat_map(|line| HREF.captures_iter(line))
        .map(|caps| caps[1].to_string())
        .collect();

    let mut qr_codes = qr_urls(content);
    qr_codes.extend(
        active
            .iter()
            .flat_map(|line| LEGACY_QR.captures_iter(line))
            .map(|caps| caps[1].to_string()),
    );

    let link = |name: &str, fallback: usize| {
        properties
            .get(name)
            .map(|p| p.value.clone())
            .filter(|value| !value.is_empty())
            .or_else(|| hrefs.get(fallback).cloned())
            .unwrap_or_default()
    };
    let primary_url = link("urlenglish", 0);
    let secondary_url = link("urlsecondary", 1);

    let secondary_language_urls: Vec<String> = hrefs
        .iter()
        .chain(qr_codes.iter())
        .filter(|url| is_secondary_language_url(url))
        .cloned()
        .collect();

    let description = extract_description(content);
    let secondary_qr_enabled = qr_urls(content).len() >= 2;
    let has_secondary_language = secondary_qr_enabled
        || !secondary_language_urls.is_empty()
        || LANGUAGE_KEYWORD.is_match(&description);

    let width_ratio = active
        .iter()
        .find_map(|line| WIDTH_RATIO.captures(line))
        .map(|caps| caps[1].trim().to_string());

    ArtifactMetadata {
        size: content.len() as u64,
        modified: None,
        format: Some(format),
        header: parse_header(content),
        primary_url,
        secondary_url,
        secondary_language_urls,
        qr_codes,
        secondary_qr_enabled,
        has_secondary_language,
        width_ratio,
        description,
        properties,
        content_preview: content_preview(content),
        error: None,
    }
}

/// First [`PREVIEW_CHARS`] characters, with `...` appended when cut.
pub fn content_preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_string(),
    }
}

fn parse_header(content: &str) -> Option<CardHeader> {
    let begin = CARD_BEGIN.find(content)?;
    let args = extract_braced_args(content, begin.end(), 3).ok()?;
    Some(CardHeader {
        class: args[0].to_string(),
        name: args[1].to_string(),
        level: args[2].to_string(),
    })
}

fn is_secondary_language_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    let host = lower
        .split("://")
        .nth(1)
        .unwrap_or(&lower)
        .split('/')
        .next()
        .unwrap_or("");
    host.ends_with(".de") || (lower.contains("german") && !lower.contains("<german"))
}

fn serialize_format<S: serde::Serializer>(
    format: &Option<FormatVersion>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match format {
        Some(format) => serializer.serialize_some(format.as_str()),
        None => serializer.serialize_none(),
    }
}

fn serialize_properties<S: serde::Serializer>(
    properties: &PropertyMap,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let flat: BTreeMap<&str, (&str, Option<&str>)> = properties
        .iter()
        .map(|(name, p)| (name.as_str(), (p.value.as_str(), p.original.as_deref())))
        .collect();
    serde::Serialize::serialize(&flat, serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_cut_at_char_boundary() {
        let content = "ä".repeat(250);
        let preview = content_preview(&content);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(content_preview("short"), "short");
    }

    #[test]
    fn secondary_language_hosts() {
        assert!(is_secondary_language_url("http://prd.5footstep.de/Zauber/Feuerball"));
        assert!(!is_secondary_language_url("https://www.d20pfsrd.com/magic/f/fireball/"));
        assert!(!is_secondary_language_url(
            "http://prd.example.com/Zauber/<german-spell-name>"
        ));
    }

    #[test]
    fn header_arguments() {
        let header = parse_header("\\begin{SpellCard}{wiz}{Fireball}{3}\n").unwrap();
        assert_eq!(header.class, "wiz");
        assert_eq!(header.name, "Fireball");
        assert_eq!(header.level, "3");
    }
}
