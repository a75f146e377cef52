//! Integration tests for format detection and property extraction.

use pretty_assertions::assert_eq;
use rstest::rstest;
use spellcard_blocks::formats::{
    FileProperty, FormatVersion, PropertyFormat, PropertyMap, detect_version, parse_properties,
};
use spellcard_blocks::writer::{format_property, format_qr_line};

fn prop(value: &str, original: Option<&str>) -> FileProperty {
    FileProperty::new(value, original.map(str::to_string))
}

fn map(entries: &[(&str, FileProperty)]) -> PropertyMap {
    entries
        .iter()
        .map(|(name, property)| (name.to_string(), property.clone()))
        .collect()
}

#[test]
fn test_current_simple_properties() {
    let content = r"%%%
%%% SPELL-CARD-VERSION: 2.1
%%%
\begin{SpellCard}{sor}{Test}{1}
  \SpellProp{name}{Test Spell}
  \SpellProp{school}{evocation}
  \SpellProp{range}{100 ft.}
  \SpellCardInfo{}
\end{SpellCard}
";
    let (version, properties) = parse_properties(content);

    assert_eq!(version, FormatVersion::Current);
    assert_eq!(
        properties,
        map(&[
            ("name", prop("Test Spell", None)),
            ("school", prop("evocation", None)),
            ("range", prop("100 ft.", None)),
        ])
    );
}

#[test]
fn test_current_original_annotations() {
    let content = r"%%%
%%% SPELL-CARD-VERSION: 2.1
%%%
\begin{SpellCard}{sor}{Test}{1}
  \SpellProp{name}{Test Spell}
  \SpellProp{range}{medium}% original: {100 ft. + 10 ft./level}
  \SpellProp{targets}{NULL}% original: {you or creature touched}
  \SpellCardInfo{}
\end{SpellCard}
";
    let (_, properties) = parse_properties(content);

    assert_eq!(
        properties,
        map(&[
            ("name", prop("Test Spell", None)),
            ("range", prop("medium", Some("100 ft. + 10 ft./level"))),
            ("targets", prop("NULL", Some("you or creature touched"))),
        ])
    );
}

#[test]
fn test_current_special_characters() {
    let content = r"%%% SPELL-CARD-VERSION: 2.1
\SpellProp{range}{100 ft.\ + 10 ft./level}
\SpellProp{duration}{1 round/level (D)}
\SpellProp{components}{V, S, M (bat fur)}
";
    let (_, properties) = parse_properties(content);

    assert_eq!(properties["range"], prop(r"100 ft.\ + 10 ft./level", None));
    assert_eq!(properties["duration"], prop("1 round/level (D)", None));
    assert_eq!(properties["components"], prop("V, S, M (bat fur)", None));
}

#[rstest]
#[case::nested(r"\SpellProp{effect}{one {two {three}} four}", "one {two {three}} four")]
#[case::macro_arg(r"\SpellProp{savingthrow}{\textbf{none}}", r"\textbf{none}")]
#[case::escaped(r"\SpellProp{area}{a \{ literal}", r"a \{ literal")]
fn test_nested_braces_extracted_whole(#[case] line: &str, #[case] expected: &str) {
    let content = format!("%%% SPELL-CARD-VERSION: 2.1\n{line}\n");
    let (_, properties) = parse_properties(&content);
    let value = &properties.values().next().unwrap().value;
    assert_eq!(value, expected);
}

#[test]
fn test_nested_braces_in_original() {
    let content = "%%% SPELL-CARD-VERSION: 2.1\n\\SpellProp{savingthrow}{Will negates}% original: {\\textbf{none}}\n";
    let (_, properties) = parse_properties(content);
    assert_eq!(
        properties["savingthrow"],
        prop("Will negates", Some(r"\textbf{none}"))
    );
}

#[test]
fn test_current_qr_links() {
    let content = r"%%%
%%% SPELL-CARD-VERSION: 2.1
%%%
\begin{SpellCard}{sor}{Acid Splash}{0}
  \SpellProp{name}{Acid Splash}
  \SpellCardInfo{}
  \SpellCardQR{https://www.d20pfsrd.com/magic/all-spells/a/acid-splash}
  \SpellCardQR{http://prd.5footstep.de/Grundregelwerk/Zauber/Säurespritzer}
\end{SpellCard}
";
    let (_, properties) = parse_properties(content);

    assert_eq!(
        properties["urlenglish"],
        prop("https://www.d20pfsrd.com/magic/all-spells/a/acid-splash", None)
    );
    assert_eq!(
        properties["urlsecondary"],
        prop("http://prd.5footstep.de/Grundregelwerk/Zauber/Säurespritzer", None)
    );
}

#[test]
fn test_commented_qr_not_harvested() {
    let content = r"%%% SPELL-CARD-VERSION: 2.1
\begin{SpellCard}{sor}{Acid Splash}{0}
  \SpellCardQR{https://www.d20pfsrd.com/magic/all-spells/a/acid-splash}
  % \SpellCardQR{<secondary-url>}
\end{SpellCard}
";
    let (_, properties) = parse_properties(content);

    assert!(properties.contains_key("urlenglish"));
    assert!(!properties.contains_key("urlsecondary"));
}

#[test]
fn test_legacy_properties() {
    let content = r"%%%
%%% file content generated by spell_card_generator.py,
%%%
\begin{spellcard}{wiz}{Fireball}{3}
  \newcommand{\name}{Fireball}
  \newcommand{\range}{long}% original: {400 ft. + 40 ft./level}
  \newcommand{\urlenglish}{https://www.d20pfsrd.com/magic/all-spells/f/fireball/}
  \newcommand{\urlsecondary}{http://prd.5footstep.de/Grundregelwerk/Zauber/Feuerball}
  \spellcardinfo{}
  \spellcardqr{\urlenglish}
\end{spellcard}
";
    let (version, properties) = parse_properties(content);

    assert_eq!(version, FormatVersion::Legacy);
    assert_eq!(properties["name"], prop("Fireball", None));
    assert_eq!(
        properties["range"],
        prop("long", Some("400 ft. + 40 ft./level"))
    );
    assert_eq!(
        properties["urlsecondary"].value,
        "http://prd.5footstep.de/Grundregelwerk/Zauber/Feuerball"
    );
    assert_eq!(properties.len(), 4);
}

#[test]
fn test_legacy_strategy_ignores_current_lines() {
    let content = "\\SpellProp{name}{Fireball}\n";
    assert_eq!(detect_version(content), FormatVersion::Legacy);
    assert!(FormatVersion::Legacy.strategy().parse(content).is_empty());
}

#[test]
fn test_commented_property_lines_skipped() {
    let content = "%%% SPELL-CARD-VERSION: 2.1\n% \\SpellProp{name}{Old}\n\\SpellProp{name}{New}\n";
    let (_, properties) = parse_properties(content);
    assert_eq!(properties["name"].value, "New");
}

#[test]
fn test_malformed_lines_do_not_raise() {
    let content = "%%% SPELL-CARD-VERSION: 2.1\n\\SpellProp{name}{never closed\n\\SpellProp{school}{evocation}\n";
    let (_, properties) = parse_properties(content);
    assert_eq!(properties, map(&[("school", prop("evocation", None))]));
}

#[test]
fn test_written_lines_parse_back() {
    let content = format!(
        "%%% SPELL-CARD-VERSION: 2.1\n  {}\n  {}\n  {}\n  {}\n",
        format_property("range", "medium", Some("100 ft. + 10 ft./level")),
        format_property("effect", r"a {nested} \emph{value}", None),
        format_qr_line("https://example.com/spell", true),
        format_qr_line("https://example.de/spell", false),
    );
    let (_, properties) = parse_properties(&content);

    assert_eq!(
        properties,
        map(&[
            ("range", prop("medium", Some("100 ft. + 10 ft./level"))),
            ("effect", prop(r"a {nested} \emph{value}", None)),
            ("urlenglish", prop("https://example.com/spell", None)),
        ])
    );
}
