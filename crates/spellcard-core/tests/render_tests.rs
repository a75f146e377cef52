//! Rendering cards and reading them back.

use pretty_assertions::assert_eq;
use spellcard_blocks::FormatVersion;
use spellcard_core::{CardState, PropertyName, analyze_content};

fn sample_state() -> CardState {
    let mut state = CardState::new("wiz", "Fireball", "3");
    state.set(PropertyName::Name, "Fireball", None);
    state.set(PropertyName::School, "evocation", None);
    state.set(
        PropertyName::Range,
        "far away",
        Some("long (400 ft. + 40 ft./level)".into()),
    );
    state.set(PropertyName::SavingThrow, r"Reflex \textbf{half}", None);
    state.url_english = "https://www.d20pfsrd.com/magic/all-spells/f/fireball/".into();
    state.url_secondary = "http://prd.5footstep.de/Grundregelwerk/Zauber/Feuerball".into();
    state.width_ratio = Some("0.6".into());
    state.secondary_qr = true;
    state.description = "A searing explosion.\n\n  Indented follow-up.".into();
    state
}

#[test]
fn test_render_then_analyze_restores_state() {
    let state = sample_state();
    let metadata = analyze_content(&state.render());

    assert_eq!(metadata.format, Some(FormatVersion::Current));
    assert_eq!(CardState::from_metadata(&metadata), Some(state));
}

#[test]
fn test_rendering_is_deterministic() {
    let state = sample_state();
    assert_eq!(state.render(), state.render());

    let reparsed = CardState::from_metadata(&analyze_content(&state.render())).unwrap();
    assert_eq!(reparsed.render(), state.render());
}

#[test]
fn test_secondary_qr_line_commented_when_disabled() {
    let mut state = sample_state();
    state.secondary_qr = false;
    let text = state.render();

    assert!(text.contains(
        "  % \\SpellCardQR{http://prd.5footstep.de/Grundregelwerk/Zauber/Feuerball}\n"
    ));
    let metadata = analyze_content(&text);
    assert!(!metadata.secondary_qr_enabled);
    assert_eq!(metadata.qr_codes.len(), 1);
}

#[test]
fn test_annotation_written_after_value() {
    let text = sample_state().render();
    assert!(text.contains(
        "  \\SpellProp{range}{far away}% original: {long (400 ft. + 40 ft./level)}\n"
    ));
}

#[test]
fn test_card_structure() {
    let text = sample_state().render();
    let begin = text.find("\\begin{SpellCard}{wiz}{Fireball}{3}").unwrap();
    let info = text.find("\\SpellCardInfo[0.6]{}").unwrap();
    let desc = text.find("% SPELL DESCRIPTION BEGIN").unwrap();
    let end = text.find("\\end{SpellCard}").unwrap();
    assert!(begin < info && info < desc && desc < end);
    assert!(text.lines().take(20).any(|l| l.contains("SPELL-CARD-VERSION: 2.1")));
}
