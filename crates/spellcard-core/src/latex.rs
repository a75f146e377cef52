//! LaTeX-specific value formatting.

use regex::Regex;
use std::sync::LazyLock;

static QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("Invalid quote regex"));
static FEET_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+[ -]?ft\.) ([a-z])").expect("Invalid feet regex"));
static SQUARE_FEET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sq\. ft\.").expect("Invalid square feet regex"));
static EMPH_AFTER_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. \\emph\{").expect("Invalid emph regex"));
static ORDINALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)(st|nd|rd|th)\b").expect("Invalid ordinal regex"));
static NONE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnone\b").expect("Invalid none regex"));
static NO_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bno\b").expect("Invalid no regex"));
static URL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(, Greater| [IVX]+)$").expect("Invalid suffix regex"));
static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// Typographic fixes for database text destined for LaTeX.
///
/// # Example
/// ```
/// use spellcard_core::latex::apply_text_fixes;
///
/// assert_eq!(apply_text_fixes("60 ft. line"), r"60 ft.\ line");
/// assert_eq!(apply_text_fixes("3rd level"), r"3\textsuperscript{rd} level");
/// ```
pub fn apply_text_fixes(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = QUOTES.replace_all(text, "``${1}''");
    let text = FEET_SPACING.replace_all(&text, r"${1}\ ${2}");
    let text = SQUARE_FEET.replace_all(&text, "sq.~ft.");
    let text = EMPH_AFTER_PERIOD.replace_all(&text, r".\@ \emph{");
    let text = ORDINALS.replace_all(&text, r"${1}\textsuperscript{${2}}");
    text.into_owned()
}

/// Saving throw text with `none` emphasized; absent means none.
pub fn format_saving_throw(value: &str) -> String {
    if value.is_empty() {
        return r"\textbf{none}".to_string();
    }
    NONE_WORD.replace_all(value, r"\textbf{none}").into_owned()
}

/// Spell resistance text with `no` emphasized; absent means no.
pub fn format_spell_resistance(value: &str) -> String {
    if value.is_empty() {
        return r"\textbf{no}".to_string();
    }
    NO_WORD.replace_all(value, r"\textbf{no}").into_owned()
}

/// Default English reference link for a spell.
///
/// # Example
/// ```
/// use spellcard_core::latex::english_url;
///
/// assert_eq!(
///     english_url("https://www.d20pfsrd.com/magic/all-spells", "Invisibility, Greater"),
///     "https://www.d20pfsrd.com/magic/all-spells/i/invisibility/"
/// );
/// ```
pub fn english_url(base: &str, spell_name: &str) -> String {
    let first: String = spell_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();
    let stem = URL_SUFFIX.replace(spell_name, "").to_lowercase();
    let slug = NON_ALNUM.replace_all(&stem, "-");
    format!(
        "{}/{}/{}/",
        base.trim_end_matches('/'),
        first,
        slug.trim_matches('-')
    )
}

static RANGED_TOUCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\branged touch attack").expect("Invalid ranged touch regex"));
static MELEE_TOUCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:melee )?touch attack").expect("Invalid melee touch regex")
});
static EXPLICIT_ATTACK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bmakes? an? (?:normal )?(ranged|melee) attack",
        r"(?i)\bsucceed (?:at|on) an? (ranged|melee) attack",
        r"(?i)\bsuccessful (ranged|melee) attack",
        r"(?i)\bstrikes? with an? (ranged|melee) attack",
        r"(?i)\b(ranged|melee) attack to hit",
        r"(?i)\brequires? an? (ranged|melee) attack",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid explicit attack regex"))
    .collect()
});
static NON_ATTACK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bbonus (?:to|on) (?:\w+ )?attack",
        r"(?i)\bpenalty to (?:\w+ )?attack",
        r"(?i)\bto (?:\w+ )?attack rolls",
        r"(?i)\baffects (?:all )?(?:\w+ )?attack",
        r"(?i)\bapplies to (?:all )?(?:\w+ )?attacks",
        r"(?i)\bdeflects? [^.]*attacks",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid non-attack regex"))
    .collect()
});
static ANY_ATTACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)attack").expect("Invalid attack regex"));

/// Kind of attack roll a spell requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRoll {
    RangedTouch,
    MeleeTouch,
    Ranged,
    Melee,
    None,
    Inconclusive,
}

impl AttackRoll {
    /// Classify a plain-text description. First matching rule wins.
    pub fn detect(description: &str) -> Self {
        if description.trim().is_empty() {
            return AttackRoll::Inconclusive;
        }
        if RANGED_TOUCH.is_match(description) {
            return AttackRoll::RangedTouch;
        }
        if MELEE_TOUCH.is_match(description) {
            return AttackRoll::MeleeTouch;
        }
        for pattern in EXPLICIT_ATTACK.iter() {
            if let Some(kind) = pattern.captures(description).and_then(|caps| caps.get(1)) {
                return if kind.as_str().eq_ignore_ascii_case("ranged") {
                    AttackRoll::Ranged
                } else {
                    AttackRoll::Melee
                };
            }
        }
        if NON_ATTACK.iter().any(|pattern| pattern.is_match(description)) {
            return AttackRoll::None;
        }
        if ANY_ATTACK.is_match(description) {
            return AttackRoll::Inconclusive;
        }
        AttackRoll::None
    }

    /// Value as written on the card.
    pub fn as_latex(&self) -> &'static str {
        match self {
            AttackRoll::RangedTouch => "ranged touch",
            AttackRoll::MeleeTouch => "melee touch",
            AttackRoll::Ranged => "ranged",
            AttackRoll::Melee => "melee",
            AttackRoll::None => r"\textbf{none}",
            AttackRoll::Inconclusive => "inconclusive",
        }
    }
}
