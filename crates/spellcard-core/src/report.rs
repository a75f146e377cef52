//! Per-run results and summaries of existing cards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use spellcard_fs::NormalizedPath;

use crate::analyzer::{ArtifactMetadata, analyze_card};

/// A property where a manual edit and a database change have both happened
/// since the card was last generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictRecord {
    pub item: String,
    pub property: String,
    /// Database value the edit was made against.
    pub old_value: String,
    /// Current database value.
    pub new_value: String,
}

impl std::fmt::Display for ConflictRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (DB: {:?} -> {:?})",
            self.item, self.property, self.old_value, self.new_value
        )
    }
}

/// Lifecycle of one batch item.
///
/// `Pending -> Skipped`, or `Pending -> Reconciled -> Written`; any step
/// may end in `Failed`, which aborts the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Pending,
    Skipped,
    Reconciled,
    Written,
    Failed,
}

impl ItemState {
    /// Whether `next` is a legal successor of `self`.
    pub fn can_become(self, next: ItemState) -> bool {
        matches!(
            (self, next),
            (ItemState::Pending, ItemState::Skipped)
                | (ItemState::Pending, ItemState::Reconciled)
                | (ItemState::Reconciled, ItemState::Written)
                | (ItemState::Pending, ItemState::Failed)
                | (ItemState::Reconciled, ItemState::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ItemState::Skipped | ItemState::Written | ItemState::Failed
        )
    }
}

/// Final state of one item in a completed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub item: String,
    pub path: NormalizedPath,
    pub state: ItemState,
    pub conflicts: usize,
}

/// Result of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generated: Vec<NormalizedPath>,
    pub skipped: Vec<NormalizedPath>,
    pub conflicts: Vec<ConflictRecord>,
    pub outcomes: Vec<ItemOutcome>,
}

impl GenerationReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub(crate) fn record(&mut self, outcome: ItemOutcome, conflicts: Vec<ConflictRecord>) {
        match outcome.state {
            ItemState::Written => self.generated.push(outcome.path.clone()),
            ItemState::Skipped => self.skipped.push(outcome.path.clone()),
            _ => {}
        }
        self.conflicts.extend(conflicts);
        self.outcomes.push(outcome);
    }
}

/// Pre-run overview of cards that already exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExistingCardsSummary {
    pub count: usize,
    pub secondary_language_count: usize,
    pub total_size: u64,
    pub newest_modification: Option<DateTime<Utc>>,
    pub oldest_modification: Option<DateTime<Utc>>,
    pub analyses: BTreeMap<String, ArtifactMetadata>,
}

/// Analyze every existing card and aggregate the results.
pub fn summarize_existing(existing: &BTreeMap<String, NormalizedPath>) -> ExistingCardsSummary {
    let analyses: BTreeMap<String, ArtifactMetadata> = existing
        .iter()
        .filter_map(|(name, path)| analyze_card(path).map(|analysis| (name.clone(), analysis)))
        .collect();

    let times: Vec<DateTime<Utc>> = analyses.values().filter_map(|a| a.modified).collect();

    ExistingCardsSummary {
        count: existing.len(),
        secondary_language_count: analyses
            .values()
            .filter(|a| a.has_secondary_language)
            .count(),
        total_size: analyses.values().map(|a| a.size).sum(),
        newest_modification: times.iter().max().copied(),
        oldest_modification: times.iter().min().copied(),
        analyses,
    }
}
