//! Batch card generation.
//!
//! For each item the target path is resolved, the prior card (if any) is
//! analyzed, every property is reconciled against the fresh database value
//! and the card is rendered and written atomically. Items are processed in
//! order and the first failure aborts the batch.

use spellcard_blocks::braces::{balance, is_balanced};
use spellcard_fs::{NormalizedPath, io};

use crate::analyzer::{ArtifactMetadata, analyze_card};
use crate::config::GeneratorConfig;
use crate::convert::TextConverter;
use crate::latex::{
    AttackRoll, apply_text_fixes, english_url, format_saving_throw, format_spell_resistance,
};
use crate::model::{PropertyName, SpellRecord, ValueSource};
use crate::paths::PathResolver;
use crate::reconcile::{reconcile_link, reconcile_property};
use crate::render::CardState;
use crate::report::{ConflictRecord, GenerationReport, ItemOutcome, ItemState};
use crate::{Error, Result};

/// Explicit reference links for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOverrides {
    pub english: Option<String>,
    pub secondary: Option<String>,
}

/// One spell to generate for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationItem {
    pub class: String,
    pub record: SpellRecord,
    pub links: LinkOverrides,
    /// Overrides the run's [`GenerationOptions::preserve`] for this spell.
    pub preserve: Option<PreserveOptions>,
}

impl GenerationItem {
    pub fn new(class: impl Into<String>, record: SpellRecord) -> Self {
        Self {
            class: class.into(),
            record,
            links: LinkOverrides::default(),
            preserve: None,
        }
    }

    pub fn with_links(mut self, links: LinkOverrides) -> Self {
        self.links = links;
        self
    }

    pub fn with_preserve(mut self, preserve: PreserveOptions) -> Self {
        self.preserve = Some(preserve);
        self
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }
}

/// Which parts of an existing card survive regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreserveOptions {
    /// Keep annotated manual property edits.
    pub properties: bool,
    /// Keep the description block.
    pub description: bool,
    /// Keep reference links.
    pub links: bool,
}

impl PreserveOptions {
    pub fn all() -> Self {
        Self {
            properties: true,
            description: true,
            links: true,
        }
    }

    pub fn none() -> Self {
        Self {
            properties: false,
            description: false,
            links: false,
        }
    }
}

impl Default for PreserveOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Options for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Regenerate cards that already exist; otherwise they are skipped.
    pub overwrite: bool,
    /// Used for items without their own choice.
    pub preserve: PreserveOptions,
    /// Activate the secondary-language QR line.
    pub secondary_qr: bool,
    pub english_url_base: String,
    pub secondary_url: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl GenerationOptions {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            overwrite: true,
            preserve: PreserveOptions::all(),
            secondary_qr: false,
            english_url_base: config.english_url_base.clone(),
            secondary_url: config.secondary_url.clone(),
        }
    }
}

/// Generates cards under one output tree.
pub struct CardGenerator<C> {
    resolver: PathResolver,
    converter: C,
    options: GenerationOptions,
}

impl<C: TextConverter> CardGenerator<C> {
    pub fn new(resolver: PathResolver, converter: C, options: GenerationOptions) -> Self {
        Self {
            resolver,
            converter,
            options,
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate every item in order.
    ///
    /// `progress` is called with `(current, total, message)` once at the
    /// start, once per item and once at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] naming the first item that failed;
    /// items after it are not processed.
    pub fn generate<F>(&self, items: &[GenerationItem], mut progress: F) -> Result<GenerationReport>
    where
        F: FnMut(usize, usize, &str),
    {
        let total = items.len();
        tracing::info!(total, overwrite = self.options.overwrite, "starting generation");
        progress(0, total, &format!("Generating {} spell card(s)", total));

        let mut report = GenerationReport::default();
        for (idx, item) in items.iter().enumerate() {
            progress(idx + 1, total, &format!("Processing {}...", item.name()));
            let (outcome, conflicts) = self.generate_item(item).map_err(|err| {
                tracing::debug!(item = item.name(), state = ?ItemState::Failed, "item failed");
                Error::generation(item.name(), err)
            })?;
            report.record(outcome, conflicts);
        }

        progress(total, total, "Generation complete");
        tracing::info!(
            generated = report.generated.len(),
            skipped = report.skipped.len(),
            conflicts = report.conflicts.len(),
            "generation finished"
        );
        Ok(report)
    }

    fn generate_item(&self, item: &GenerationItem) -> Result<(ItemOutcome, Vec<ConflictRecord>)> {
        let path = self.resolver.resolve(&item.class, item.name(), &item.record)?;
        let mut state = ItemState::Pending;

        if path.is_file() && !self.options.overwrite {
            advance(&mut state, ItemState::Skipped, item.name());
            return Ok((outcome(item, path, state, 0), Vec::new()));
        }

        let prior = analyze_card(&path).filter(|meta| {
            if let Some(err) = &meta.error {
                tracing::warn!(path = %path, error = %err, "ignoring unreadable prior card");
            }
            !meta.is_error()
        });

        let (card, conflicts) = self.reconcile(item, prior.as_ref())?;
        advance(&mut state, ItemState::Reconciled, item.name());

        io::write_text(&path, &card.render())?;
        advance(&mut state, ItemState::Written, item.name());

        let count = conflicts.len();
        Ok((outcome(item, path, state, count), conflicts))
    }

    /// Build the card state for an item from the database and a prior card.
    pub fn reconcile(
        &self,
        item: &GenerationItem,
        prior: Option<&ArtifactMetadata>,
    ) -> Result<(CardState, Vec<ConflictRecord>)> {
        let record = &item.record;
        let level = record.level(&item.class).ok_or_else(|| Error::MissingLevel {
            spell: item.name().to_string(),
            class: item.class.clone(),
        })?;
        let preserve = item.preserve.unwrap_or(self.options.preserve);

        let mut card = CardState::new(&item.class, item.name(), level);
        let mut conflicts = Vec::new();

        for property in PropertyName::ALL {
            let db = database_value(*property, record, level);
            let file = prior.and_then(|meta| meta.properties.get(property.as_str()));
            let merged = reconcile_property(&db, file, preserve.properties);
            if let Some(conflict) = merged.conflict {
                tracing::debug!(item = item.name(), %property, "conflicting manual edit");
                conflicts.push(ConflictRecord {
                    item: item.name().to_string(),
                    property: property.as_str().to_string(),
                    old_value: conflict.old,
                    new_value: conflict.new,
                });
            }
            card.set(*property, merged.value, merged.original);
        }

        card.url_english = reconcile_link(
            item.links.english.as_deref(),
            prior.map(|meta| meta.primary_url.as_str()),
            preserve.links,
            &english_url(&self.options.english_url_base, item.name()),
        );
        card.url_secondary = reconcile_link(
            item.links.secondary.as_deref(),
            prior.map(|meta| meta.secondary_url.as_str()),
            preserve.links,
            &self.options.secondary_url,
        );

        card.width_ratio = prior.and_then(|meta| meta.width_ratio.clone());
        card.secondary_qr =
            self.options.secondary_qr || prior.is_some_and(|meta| meta.secondary_qr_enabled);

        card.description = match prior {
            Some(meta) if preserve.description && !meta.description.is_empty() => {
                meta.description.clone()
            }
            _ => self.fresh_description(record),
        };

        Ok((card, conflicts))
    }

    fn fresh_description(&self, record: &SpellRecord) -> String {
        let formatted = record.description_formatted();
        if !formatted.is_empty() {
            match self.converter.convert(formatted) {
                Ok(latex) => return apply_text_fixes(latex.trim_end()),
                Err(err) => {
                    tracing::warn!(spell = record.name(), %err, "description conversion failed, using plain text")
                }
            }
        }
        record.description().to_string()
    }
}

/// The formatted database value written for a property.
///
/// The result is always a balanced brace group, so the value recorded in an
/// annotation compares equal to the database on the next run.
pub fn database_value(property: PropertyName, record: &SpellRecord, level: &str) -> String {
    let value = match property.source() {
        ValueSource::ClassLevel => level.to_string(),
        ValueSource::AttackRoll => AttackRoll::detect(record.description())
            .as_latex()
            .to_string(),
        ValueSource::Column(column) => {
            let raw = record.field(column);
            match property {
                PropertyName::SavingThrow => format_saving_throw(raw),
                PropertyName::SpellResistance => format_spell_resistance(raw),
                _ if property.needs_text_fixes() => apply_text_fixes(raw),
                _ => raw.to_string(),
            }
        }
    };
    if is_balanced(&value) {
        value
    } else {
        balance(&value).into_owned()
    }
}

fn advance(state: &mut ItemState, next: ItemState, item: &str) {
    debug_assert!(state.can_become(next), "{state:?} -> {next:?}");
    tracing::debug!(item, from = ?state, to = ?next, "item state");
    *state = next;
}

fn outcome(item: &GenerationItem, path: NormalizedPath, state: ItemState, conflicts: usize) -> ItemOutcome {
    ItemOutcome {
        item: item.name().to_string(),
        path,
        state,
        conflicts,
    }
}
