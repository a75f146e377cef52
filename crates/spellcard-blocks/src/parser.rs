//! Description block parsing.
//!
//! The free-text part of a card lives between two sentinel comment lines:
//! ```text
//!   % SPELL DESCRIPTION BEGIN
//!   You fire a small orb of acid at the target.
//!   % SPELL DESCRIPTION END
//! ```
//! The indentation of the BEGIN line is the block's base indentation and is
//! removed from every body line that carries it.

use std::borrow::Cow;

/// Opening sentinel of the description block.
pub const BEGIN_MARKER: &str = "% SPELL DESCRIPTION BEGIN";

/// Closing sentinel of the description block.
pub const END_MARKER: &str = "% SPELL DESCRIPTION END";

/// Whether a body line would read as a marker once its extra `%` signs are
/// removed. Such lines carry one more `%` in the file than in the text.
fn is_marker_like(line: &str) -> bool {
    let trimmed = line.trim();
    let bare = trimmed.trim_start_matches('%');
    trimmed.starts_with('%')
        && [BEGIN_MARKER, END_MARKER]
            .iter()
            .any(|marker| bare == &marker[1..])
}

/// Add a `%` in front of body lines that look like a marker.
pub(crate) fn escape_marker_line(line: &str) -> Cow<'_, str> {
    if !is_marker_like(line) {
        return Cow::Borrowed(line);
    }
    let indent = line.len() - line.trim_start().len();
    Cow::Owned(format!("{}%{}", &line[..indent], &line[indent..]))
}

/// Inverse of [`escape_marker_line`].
fn unescape_marker_line(line: &str) -> Cow<'_, str> {
    let indent = line.len() - line.trim_start().len();
    if is_marker_like(line) && line[indent..].starts_with("%%") {
        Cow::Owned(format!("{}{}", &line[..indent], &line[indent + 1..]))
    } else {
        Cow::Borrowed(line)
    }
}

/// A parsed description block with its position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionBlock {
    /// Body text with the base indentation removed.
    pub content: String,
    /// Leading whitespace of the BEGIN line.
    pub indent: String,
    /// The 1-based line number of the BEGIN marker.
    pub start_line: usize,
    /// The 1-based line number of the END marker.
    pub end_line: usize,
}

/// Parse the first description block in `content`.
///
/// Returns `None` when either marker is missing.
///
/// Body lines are normalized as follows:
/// - the exact base indentation is stripped where present
/// - lines indented less than the base are kept unmodified
/// - whitespace-only lines become empty
/// - a marker-like line written with an extra `%` loses it
/// - trailing whitespace of the whole block is trimmed
///
/// # Example
/// ```
/// use spellcard_blocks::parser::parse_description;
///
/// let content = "    % SPELL DESCRIPTION BEGIN\n    First.\n      Second.\n    % SPELL DESCRIPTION END\n";
/// let block = parse_description(content).unwrap();
/// assert_eq!(block.content, "First.\n  Second.");
/// assert_eq!(block.indent, "    ");
/// ```
pub fn parse_description(content: &str) -> Option<DescriptionBlock> {
    let lines: Vec<&str> = content.lines().collect();

    let begin = lines.iter().position(|line| line.trim() == BEGIN_MARKER)?;
    let end = begin
        + 1
        + lines[begin + 1..]
            .iter()
            .position(|line| line.trim() == END_MARKER)?;

    let begin_line = lines[begin];
    let indent = &begin_line[..begin_line.len() - begin_line.trim_start().len()];

    let body: Vec<Cow<'_, str>> = lines[begin + 1..end]
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                Cow::Borrowed("")
            } else {
                unescape_marker_line(line.strip_prefix(indent).unwrap_or(line))
            }
        })
        .collect();

    Some(DescriptionBlock {
        content: body.join("\n").trim_end().to_string(),
        indent: indent.to_string(),
        start_line: begin + 1,
        end_line: end + 1,
    })
}

/// Extract the normalized description text, or an empty string when the
/// content has no description block.
pub fn extract_description(content: &str) -> String {
    parse_description(content)
        .map(|block| block.content)
        .unwrap_or_default()
}
