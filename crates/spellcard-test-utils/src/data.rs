//! Spell data builders.
//!
//! Rows only need the columns a test cares about; every other column of
//! the header is written as `NULL`.

/// Columns written by [`TsvBuilder`] unless a test adds more.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "name",
    "school",
    "subschool",
    "descriptor",
    "casting_time",
    "components",
    "range",
    "area",
    "effect",
    "targets",
    "duration",
    "saving_throw",
    "spell_resistance",
    "description",
    "description_formatted",
    "source",
    "sor",
    "wiz",
    "cleric",
    "druid",
    "bard",
];

/// One spell row, as column/value pairs.
#[derive(Debug, Clone, Default)]
pub struct SpellRow {
    cells: Vec<(String, String)>,
}

impl SpellRow {
    pub fn new(name: &str) -> Self {
        Self::default().with("name", name)
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.cells.retain(|(c, _)| c != column);
        self.cells.push((column.to_string(), value.to_string()));
        self
    }

    /// Put the spell on a class list.
    pub fn level(self, class: &str, level: u8) -> Self {
        self.with(class, &level.to_string())
    }

    fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds TSV content with a fixed header.
#[derive(Debug, Clone)]
pub struct TsvBuilder {
    columns: Vec<String>,
    rows: Vec<SpellRow>,
}

impl Default for TsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TsvBuilder {
    pub fn new() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a header column if it is not present yet.
    pub fn column(mut self, column: &str) -> Self {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
        self
    }

    /// Add a row; unknown columns are appended to the header.
    pub fn row(mut self, row: SpellRow) -> Self {
        for (column, _) in &row.cells {
            if !self.columns.contains(column) {
                self.columns.push(column.clone());
            }
        }
        self.rows.push(row);
        self
    }

    pub fn build(&self) -> String {
        let mut out = self.columns.join("\t");
        out.push('\n');
        for row in &self.rows {
            let cells: Vec<&str> = self
                .columns
                .iter()
                .map(|column| row.get(column).unwrap_or("NULL"))
                .collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// A small database: Fireball and Magic Missile for wizards, Cure Light
/// Wounds for clerics and druids, Shocking Grasp with a touch attack.
pub fn sample_tsv() -> String {
    TsvBuilder::new()
        .row(
            SpellRow::new("Fireball")
                .with("school", "evocation")
                .with("descriptor", "fire")
                .with("casting_time", "1 standard action")
                .with("components", "V, S, M (a ball of bat guano and sulfur)")
                .with("range", "long (400 ft. + 40 ft./level)")
                .with("area", "20-ft.-radius spread")
                .with("duration", "instantaneous")
                .with("saving_throw", "Reflex half")
                .with("spell_resistance", "yes")
                .with(
                    "description",
                    "A fireball spell generates a searing explosion of flame.",
                )
                .with(
                    "description_formatted",
                    "<p>A fireball spell generates a searing explosion of flame.</p>",
                )
                .with("source", "PFRPG Core")
                .level("sor", 3)
                .level("wiz", 3),
        )
        .row(
            SpellRow::new("Magic Missile")
                .with("school", "evocation")
                .with("descriptor", "force")
                .with("range", "medium (100 ft. + 10 ft./level)")
                .with("targets", "up to five creatures, no two of which can be more than 15 ft. apart")
                .with("duration", "instantaneous")
                .with("saving_throw", "none")
                .with("spell_resistance", "yes")
                .with("description", "A missile of magical energy darts forth and strikes its target.")
                .with("source", "PFRPG Core")
                .level("sor", 1)
                .level("wiz", 1),
        )
        .row(
            SpellRow::new("Cure Light Wounds")
                .with("school", "conjuration")
                .with("subschool", "healing")
                .with("range", "touch")
                .with("targets", "creature touched")
                .with("duration", "instantaneous")
                .with("saving_throw", "Will half (harmless); see text")
                .with("spell_resistance", "yes (harmless); see text")
                .with("description", "When laying your hand upon a living creature, you channel positive energy.")
                .with("source", "PFRPG Core")
                .level("cleric", 1)
                .level("druid", 1)
                .level("bard", 1),
        )
        .row(
            SpellRow::new("Shocking Grasp")
                .with("school", "evocation")
                .with("descriptor", "electricity")
                .with("range", "touch")
                .with("targets", "creature or object touched")
                .with("duration", "instantaneous")
                .with("spell_resistance", "yes")
                .with(
                    "description",
                    "Your successful melee touch attack deals 1d6 points of electricity damage per caster level.",
                )
                .with("source", "PFRPG Core")
                .level("sor", 1)
                .level("wiz", 1),
        )
        .build()
}
