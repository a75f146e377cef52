//! Card text assembly.

use std::fmt::Write as _;

use spellcard_blocks::formats::{CURRENT_VERSION, VERSION_MARKER};
use spellcard_blocks::{format_description, format_property, format_qr_line};

use crate::analyzer::ArtifactMetadata;
use crate::model::PropertyName;

const INDENT: &str = "  ";

/// A property line as it will be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyValue {
    pub value: String,
    pub original: Option<String>,
}

/// Fully reconciled content of one card.
///
/// Holds a slot for every [`PropertyName`], so a rendered card always has
/// the complete property set in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub class: String,
    pub name: String,
    pub level: String,
    properties: Vec<PropertyValue>,
    pub url_english: String,
    pub url_secondary: String,
    pub width_ratio: Option<String>,
    pub secondary_qr: bool,
    pub description: String,
}

impl CardState {
    /// A card with every property empty.
    pub fn new(class: impl Into<String>, name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            name: name.into(),
            level: level.into(),
            properties: vec![PropertyValue::default(); PropertyName::ALL.len()],
            url_english: String::new(),
            url_secondary: String::new(),
            width_ratio: None,
            secondary_qr: false,
            description: String::new(),
        }
    }

    pub fn set(&mut self, property: PropertyName, value: impl Into<String>, original: Option<String>) {
        self.properties[property as usize] = PropertyValue {
            value: value.into(),
            original,
        };
    }

    pub fn get(&self, property: PropertyName) -> &PropertyValue {
        &self.properties[property as usize]
    }

    /// Rebuild the state a card was rendered from.
    ///
    /// Returns `None` if the card has no `\begin{SpellCard}` header.
    /// Properties missing from the file stay empty.
    pub fn from_metadata(metadata: &ArtifactMetadata) -> Option<Self> {
        let header = metadata.header.as_ref()?;
        let mut state = Self::new(&header.class, &header.name, &header.level);
        for property in PropertyName::ALL {
            if let Some(found) = metadata.properties.get(property.as_str()) {
                state.set(*property, found.value.clone(), found.original.clone());
            }
        }
        state.url_english = metadata.primary_url.clone();
        state.url_secondary = metadata.secondary_url.clone();
        state.width_ratio = metadata.width_ratio.clone();
        state.secondary_qr = metadata.secondary_qr_enabled;
        state.description = metadata.description.clone();
        Some(state)
    }

    /// Render the card text.
    ///
    /// Output depends only on `self`; rendering the same state twice gives
    /// byte-identical text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("%%%\n");
        out.push_str("%%% file content generated by spellcard,\n");
        out.push_str("%%% meant to be fine-tuned manually (especially the description).\n");
        let _ = writeln!(out, "%%% {} {}", VERSION_MARKER, CURRENT_VERSION);
        out.push_str("%%%\n");
        out.push_str("%\n");
        out.push_str("% open a new SpellCard environment\n");
        let _ = writeln!(
            out,
            "\\begin{{SpellCard}}{{{}}}{{{}}}{{{}}}",
            self.class, self.name, self.level
        );
        let _ = writeln!(out, "{INDENT}% spell properties; a trailing \"% original: {{...}}\" records the");
        let _ = writeln!(out, "{INDENT}% database value a manual edit was made against:");

        for property in PropertyName::ALL {
            let slot = self.get(*property);
            let _ = writeln!(
                out,
                "{INDENT}{}",
                format_property(property.as_str(), &slot.value, slot.original.as_deref())
            );
        }
        let _ = writeln!(out, "{INDENT}{}", format_property("urlenglish", &self.url_english, None));
        let _ = writeln!(
            out,
            "{INDENT}{}",
            format_property("urlsecondary", &self.url_secondary, None)
        );

        let _ = writeln!(out, "{INDENT}% print the tabular information at the top of the card:");
        match &self.width_ratio {
            Some(ratio) => {
                let _ = writeln!(out, "{INDENT}\\SpellCardInfo[{ratio}]{{}}");
            }
            None => {
                let _ = writeln!(out, "{INDENT}\\SpellCardInfo{{}}");
            }
        }

        let _ = writeln!(out, "{INDENT}% draw QR codes pointing at online resources for this spell:");
        let _ = writeln!(out, "{INDENT}{}", format_qr_line(&self.url_english, true));
        let _ = writeln!(
            out,
            "{INDENT}{}",
            format_qr_line(&self.url_secondary, self.secondary_qr)
        );
        let _ = writeln!(out, "{INDENT}%");
        out.push_str(&format_description(&self.description, INDENT));
        let _ = writeln!(out, "{INDENT}%");
        out.push_str("\\end{SpellCard}\n");
        out
    }
}
