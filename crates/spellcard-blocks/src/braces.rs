//! Balanced-brace value extraction.
//!
//! Values such as `1d6 \emph{acid} damage` or `{nested {groups}}` must be
//! read whole, so extraction counts nesting depth instead of stopping at the
//! first `}`. A backslash escapes the following character, which keeps
//! `\{`, `\}` and `\\` out of the depth count.

use std::borrow::Cow;

use crate::{Error, Result};

/// A braced group located in a larger text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Braced<'a> {
    /// Text between the outer braces.
    pub value: &'a str,
    /// Byte offset just past the closing brace.
    pub end: usize,
}

/// Extract the balanced group that opens at byte `start`.
///
/// # Example
/// ```
/// use spellcard_blocks::braces::extract_braced;
///
/// let text = r"{1d6 \emph{acid} damage} rest";
/// let group = extract_braced(text, 0).unwrap();
/// assert_eq!(group.value, r"1d6 \emph{acid} damage");
/// assert_eq!(&text[group.end..], " rest");
/// ```
pub fn extract_braced(text: &str, start: usize) -> Result<Braced<'_>> {
    if text.as_bytes().get(start) != Some(&b'{') {
        return Err(Error::ExpectedBrace { offset: start });
    }

    let mut depth = 0usize;
    let mut escaped = false;
    for (idx, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let close = start + idx;
                    return Ok(Braced {
                        value: &text[start + 1..close],
                        end: close + 1,
                    });
                }
            }
            _ => {}
        }
    }

    Err(Error::UnclosedBrace { offset: start })
}

/// Extract `count` consecutive braced groups starting at byte `start`.
///
/// Whitespace between groups is skipped. Used for multi-argument
/// directives such as `\begin{SpellCard}{sor}{Fireball}{3}`.
pub fn extract_braced_args(text: &str, start: usize, count: usize) -> Result<Vec<&str>> {
    let mut values = Vec::with_capacity(count);
    let mut pos = start;
    for _ in 0..count {
        pos += text[pos..].len() - text[pos..].trim_start().len();
        let group = extract_braced(text, pos)?;
        values.push(group.value);
        pos = group.end;
    }
    Ok(values)
}

/// Whether `{value}` reads back as exactly `value` on one line.
pub fn is_balanced(value: &str) -> bool {
    let mut depth = 0usize;
    let mut escaped = false;
    for ch in value.chars() {
        if ch == '\n' || ch == '\r' {
            return false;
        }
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' if depth == 0 => return false,
            '}' => depth -= 1,
            _ => {}
        }
    }
    depth == 0 && !escaped
}

/// Rewrite `value` so that it can be written as a single braced group.
///
/// Line breaks become spaces, a stray `}` is escaped, open groups are closed
/// and a trailing lone backslash gets a space after it. Balanced values are
/// returned unchanged, so the rewrite is idempotent.
///
/// # Example
/// ```
/// use spellcard_blocks::braces::balance;
///
/// assert_eq!(balance(r"C:\"), r"C:\ ");
/// assert_eq!(balance("a}b{c"), r"a\}b{c}");
/// assert_eq!(balance("1d6 {fire}"), "1d6 {fire}");
/// ```
pub fn balance(value: &str) -> Cow<'_, str> {
    if is_balanced(value) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 2);
    let mut depth = 0usize;
    let mut escaped = false;
    for ch in value.chars() {
        let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
        if escaped {
            escaped = false;
            out.push(ch);
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' if depth == 0 => out.push('\\'),
            '}' => depth -= 1,
            _ => {}
        }
        out.push(ch);
    }
    if escaped {
        out.push(' ');
    }
    out.extend(std::iter::repeat_n('}', depth));
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_matching_brace() {
        let group = extract_braced("{a}{b}", 0).unwrap();
        assert_eq!(group.value, "a");
        assert_eq!(group.end, 3);
    }

    #[test]
    fn escaped_braces_do_not_nest() {
        let group = extract_braced(r"{a \} b}", 0).unwrap();
        assert_eq!(group.value, r"a \} b");
    }

    #[test]
    fn line_break_before_closing_brace() {
        let group = extract_braced(r"{first\\}x", 0).unwrap();
        assert_eq!(group.value, r"first\\");
    }

    #[test]
    fn unclosed_group_is_an_error() {
        assert_eq!(
            extract_braced("{never {closed}", 0),
            Err(Error::UnclosedBrace { offset: 0 })
        );
    }

    #[test]
    fn missing_open_brace_is_an_error() {
        assert_eq!(
            extract_braced("x{a}", 0),
            Err(Error::ExpectedBrace { offset: 0 })
        );
    }

    #[test]
    fn reads_directive_arguments() {
        let text = r"\begin{SpellCard}{sor}{Acid Splash}{0}";
        let start = text.find("}{").unwrap() + 1;
        let args = extract_braced_args(text, start, 3).unwrap();
        assert_eq!(args, vec!["sor", "Acid Splash", "0"]);
    }

    #[test]
    fn balance_leaves_balanced_values_alone() {
        assert!(matches!(balance(r"1d6 \emph{acid}"), Cow::Borrowed(_)));
        assert!(is_balanced(r"a \{ b"));
    }

    #[test]
    fn balance_repairs_values_that_would_not_read_back() {
        assert_eq!(balance("C:\\"), "C:\\ ");
        assert_eq!(balance("}{"), "\\}{}");
        assert_eq!(balance("one\ntwo"), "one two");
        for value in ["C:\\", "}{", "one\ntwo", "{{"] {
            let fixed = balance(value).into_owned();
            let text = format!("{{{fixed}}}");
            assert_eq!(extract_braced(&text, 0).unwrap().value, fixed);
        }
    }
}
