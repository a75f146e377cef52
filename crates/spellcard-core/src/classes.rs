//! Known character classes.

/// Class ids grouped by category, in display order.
pub const CLASS_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Core Classes",
        &["sor", "wiz", "cleric", "druid", "ranger", "bard", "paladin"],
    ),
    (
        "Base Classes",
        &[
            "alchemist",
            "summoner",
            "witch",
            "inquisitor",
            "oracle",
            "antipaladin",
            "magus",
        ],
    ),
    (
        "Hybrid Classes",
        &[
            "bloodrager",
            "hunter",
            "investigator",
            "shaman",
            "skald",
            "summoner_unchained",
        ],
    ),
    (
        "Occult Classes",
        &["psychic", "medium", "mesmerist", "occultist", "spiritualist"],
    ),
];

/// Level columns recognized outside the categories.
pub const EXTRA_CLASSES: &[&str] = &["adept"];

/// Every recognized class id, categories first.
pub fn known_classes() -> impl Iterator<Item = &'static str> {
    CLASS_CATEGORIES
        .iter()
        .flat_map(|(_, classes)| classes.iter().copied())
        .chain(EXTRA_CLASSES.iter().copied())
}

pub fn is_known_class(class: &str) -> bool {
    known_classes().any(|known| known == class)
}

/// Human-readable class name.
pub fn display_name(class: &str) -> String {
    match class {
        "sor" => "Sorcerer".to_string(),
        "wiz" => "Wizard".to_string(),
        "summoner_unchained" => "Summoner (Unchained)".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(display_name("sor"), "Sorcerer");
        assert_eq!(display_name("summoner_unchained"), "Summoner (Unchained)");
        assert_eq!(display_name("cleric"), "Cleric");
    }

    #[test]
    fn adept_is_known() {
        assert!(is_known_class("adept"));
        assert!(!is_known_class("name"));
    }
}
