//! Line formatting for current-format cards.
//!
//! Every function here produces text that the matching parser in this crate
//! reads back unchanged.

use crate::braces::balance;
use crate::parser::{BEGIN_MARKER, END_MARKER, escape_marker_line};

/// Directive used for property lines in the current format.
pub const PROPERTY_DIRECTIVE: &str = r"\SpellProp";

/// Directive used for QR code lines.
pub const QR_DIRECTIVE: &str = r"\SpellCardQR";

/// Formats a single property line without indentation.
///
/// When `original` is given, the recorded database value is appended as a
/// `% original: {...}` annotation directly after the closing brace. Both
/// values go through [`balance`] so the line always parses back.
///
/// # Example
/// ```
/// use spellcard_blocks::writer::format_property;
///
/// assert_eq!(
///     format_property("range", "medium", Some("100 ft.")),
///     r"\SpellProp{range}{medium}% original: {100 ft.}"
/// );
/// ```
pub fn format_property(name: &str, value: &str, original: Option<&str>) -> String {
    let value = balance(value);
    match original.map(balance) {
        Some(original) => format!(
            "{}{{{}}}{{{}}}% original: {{{}}}",
            PROPERTY_DIRECTIVE, name, value, original
        ),
        None => format!("{}{{{}}}{{{}}}", PROPERTY_DIRECTIVE, name, value),
    }
}

/// Formats a QR line, commented out unless `enabled`.
pub fn format_qr_line(url: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{{{}}}", QR_DIRECTIVE, url)
    } else {
        format!("% {}{{{}}}", QR_DIRECTIVE, url)
    }
}

/// Formats a complete description block.
///
/// Both markers and every non-empty body line get `indent`; blank lines
/// stay empty so the block parses back to exactly `description`. Body lines
/// that look like a marker get an extra leading `%`, which the parser
/// removes again.
///
/// # Example
/// ```
/// use spellcard_blocks::writer::format_description;
///
/// let block = format_description("One.\n\nTwo.", "  ");
/// assert_eq!(
///     block,
///     "  % SPELL DESCRIPTION BEGIN\n  One.\n\n  Two.\n  % SPELL DESCRIPTION END\n"
/// );
/// ```
pub fn format_description(description: &str, indent: &str) -> String {
    let mut out = format!("{}{}\n", indent, BEGIN_MARKER);
    let description = description.trim_end();
    if !description.is_empty() {
        for line in description.lines() {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                out.push_str(indent);
                out.push_str(&escape_marker_line(line));
                out.push('\n');
            }
        }
    }
    out.push_str(indent);
    out.push_str(END_MARKER);
    out.push('\n');
    out
}
