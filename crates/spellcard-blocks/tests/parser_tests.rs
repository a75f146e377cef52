//! Integration tests for description block parsing.

use pretty_assertions::assert_eq;
use spellcard_blocks::parser::{extract_description, parse_description};

fn card_with_body(body: &str) -> String {
    format!(
        "\\begin{{SpellCard}}{{sor}}{{Test Spell}}{{0}}\n  \\newcommand{{\\name}}{{Test Spell}}\n  \\ifprintcard\n    \\SpellCardInfo{{}}\n    %\n    % SPELL DESCRIPTION BEGIN\n{body}    % SPELL DESCRIPTION END\n    %\n  \\fi\n\\end{{SpellCard}}\n"
    )
}

#[test]
fn test_empty_description() {
    assert_eq!(extract_description(&card_with_body("")), "");
}

#[test]
fn test_single_line_at_base_indent() {
    let content = card_with_body("    This is a single line description.\n");
    assert_eq!(
        extract_description(&content),
        "This is a single line description."
    );
}

#[test]
fn test_multiple_lines_same_indent() {
    let content = card_with_body(
        "    You fire a small orb of acid at the target.\n    You must succeed on a ranged touch attack to hit your target.\n    The orb deals 1d3 points of acid damage.\n",
    );
    let description = extract_description(&content);

    assert_eq!(
        description,
        "You fire a small orb of acid at the target.\nYou must succeed on a ranged touch attack to hit your target.\nThe orb deals 1d3 points of acid damage."
    );
    for line in description.lines() {
        assert!(!line.starts_with(' '), "line {line:?} kept base indentation");
    }
}

#[test]
fn test_extra_indentation_preserved() {
    let content = card_with_body(
        "    You can observe magical auras.\n    \\ifprintlongcards\n      An attended object may attempt a Will save.\n    \\fi\n",
    );
    assert_eq!(
        extract_description(&content),
        "You can observe magical auras.\n\\ifprintlongcards\n  An attended object may attempt a Will save.\n\\fi"
    );
}

#[test]
fn test_blank_lines_become_empty() {
    let content = card_with_body("    First paragraph.\n        \n    Second paragraph.\n\n");
    assert_eq!(
        extract_description(&content),
        "First paragraph.\n\nSecond paragraph."
    );
}

#[test]
fn test_under_indented_line_kept_verbatim() {
    let content = card_with_body("    Normal line.\n  Shallow line.\nFlush line.\n");
    assert_eq!(
        extract_description(&content),
        "Normal line.\n  Shallow line.\nFlush line."
    );
}

#[test]
fn test_tab_indentation_is_exact_prefix() {
    let content = "\t% SPELL DESCRIPTION BEGIN\n\tTabbed.\n\t\tDeeper.\n\t% SPELL DESCRIPTION END\n";
    assert_eq!(extract_description(content), "Tabbed.\n\tDeeper.");
}

#[test]
fn test_line_positions() {
    let content = card_with_body("    body\n");
    let block = parse_description(&content).unwrap();
    assert_eq!(block.start_line, 6);
    assert_eq!(block.end_line, 8);
    assert_eq!(block.indent, "    ");
}
