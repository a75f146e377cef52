//! Property-based tests for rendering cards and reading them back.

use proptest::prelude::*;
use spellcard_blocks::braces::is_balanced;
use spellcard_core::{CardState, PropertyName, analyze_content};

fn card(value: &str, original: Option<String>, description: &str) -> CardState {
    let mut state = CardState::new("wiz", "Fireball", "3");
    state.set(PropertyName::Name, "Fireball", None);
    state.set(PropertyName::School, value, original);
    state.url_english = "https://www.d20pfsrd.com/magic/all-spells/f/fireball/".into();
    state.url_secondary = "http://prd.5footstep.de/Grundregelwerk/Zauber/Feuerball".into();
    state.description = description.to_string();
    state
}

proptest! {
    #[test]
    fn rendered_card_reads_back_to_the_same_text(
        value in "[ -~\n]{0,24}",
        original in proptest::option::of("[ -~]{0,16}"),
        description in "[a-z %.]{0,12}(\n% SPELL DESCRIPTION (BEGIN|END))?(\n[a-z .]{0,12})?",
    ) {
        let first = card(&value, original, &description).render();
        let reparsed = CardState::from_metadata(&analyze_content(&first)).unwrap();
        prop_assert_eq!(reparsed.render(), first);
    }

    #[test]
    fn balanced_values_read_back_unchanged(value in "[a-z {}\\\\.]{0,24}") {
        prop_assume!(is_balanced(&value));
        let text = card(&value, Some("evocation".into()), "").render();
        let reparsed = CardState::from_metadata(&analyze_content(&text)).unwrap();
        prop_assert_eq!(&reparsed.get(PropertyName::School).value, &value);
        prop_assert_eq!(reparsed.get(PropertyName::School).original.as_deref(), Some("evocation"));
    }
}
