//! Property tests for card path resolution.

use proptest::prelude::*;
use spellcard_core::{PathResolver, SpellRecord, sanitize_file_name};

proptest! {
    #[test]
    fn sanitized_names_have_no_forbidden_chars(name in "\\PC{0,40}") {
        let clean = sanitize_file_name(&name);
        prop_assert!(!clean.contains(['<', '>', ':', '"', '/', '\\', '|', '?', '*']));
        prop_assert!(!clean.contains("--"));
        prop_assert!(!clean.starts_with('-') && !clean.ends_with('-'));
    }

    #[test]
    fn sanitize_is_idempotent(name in "[A-Za-z ,'<>:|?*-]{0,30}") {
        let once = sanitize_file_name(&name);
        prop_assert_eq!(sanitize_file_name(&once), once);
    }

    #[test]
    fn resolution_is_deterministic(
        name in "[A-Za-z][A-Za-z ,']{0,20}",
        level in 0u8..10,
    ) {
        let resolver = PathResolver::new("src/spells");
        let record = SpellRecord::new(name.as_str()).with_level("wiz", &level.to_string());
        let first = resolver.resolve("wiz", &name, &record).unwrap();
        let second = resolver.resolve("wiz", &name, &record).unwrap();
        prop_assert_eq!(&first, &second);
        let expected_prefix = format!("src/spells/wiz/{}/", level);
        prop_assert!(first.as_str().starts_with(&expected_prefix));
        prop_assert_eq!(first.extension(), Some("tex"));
    }
}
