//! Tab-separated spell database loader.
//!
//! The file has one header row; each following row is a spell. Class level
//! columns are recognized by their id, every other column is a descriptive
//! field. Rows are turned into [`SpellRecord`]s once, here, so nothing
//! downstream deals with raw column names or the `NULL` sentinel.

use std::collections::HashMap;

use spellcard_fs::{NormalizedPath, io};

use crate::classes;
use crate::model::SpellRecord;
use crate::{Error, Result};

/// In-memory spell database.
#[derive(Debug, Clone, Default)]
pub struct SpellDatabase {
    classes: Vec<String>,
    spells: Vec<SpellRecord>,
    index: HashMap<String, usize>,
}

impl SpellDatabase {
    /// Load a TSV file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataAccess`] if the file is missing, has no header or
    /// `name` column, or contains a row with the wrong number of cells.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::data_access(
                path.to_native(),
                "spell data file not found",
            ));
        }
        let content =
            io::read_text(path).map_err(|e| Error::data_access(path.to_native(), e.to_string()))?;
        let db = Self::parse(&content).map_err(|message| Error::data_access(path.to_native(), message))?;
        tracing::info!(
            path = %path,
            spells = db.spells.len(),
            classes = db.classes.len(),
            "loaded spell data"
        );
        Ok(db)
    }

    /// Parse TSV text. The error is a human-readable reason.
    ///
    /// Cells may be double-quoted; quoted cells can contain tabs, and the
    /// quotes are removed.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(content.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| row_error(&e))?
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        if columns.iter().all(String::is_empty) {
            return Err("missing header row".to_string());
        }
        let name_idx = columns
            .iter()
            .position(|c| c == "name")
            .ok_or("missing 'name' column")?;

        let classes: Vec<String> = classes::known_classes()
            .filter(|class| columns.iter().any(|c| c == class))
            .map(str::to_string)
            .collect();

        let mut db = Self {
            classes,
            ..Self::default()
        };

        for row in reader.records() {
            let row = row.map_err(|e| row_error(&e))?;
            let line = row.position().map_or(0, |pos| pos.line());

            let name = row.get(name_idx).unwrap_or_default().trim();
            if name.is_empty() {
                return Err(format!("line {line}: empty spell name"));
            }

            let mut record = SpellRecord::new(name);
            for (column, cell) in columns.iter().zip(row.iter()) {
                if column == "name" {
                    continue;
                }
                if db.classes.iter().any(|class| class == column) {
                    record.set_level(column, cell);
                } else {
                    record.set_field(column, cell);
                }
            }

            if db.index.contains_key(name) {
                tracing::warn!(spell = name, line, "duplicate spell name ignored");
                continue;
            }
            db.index.insert(name.to_string(), db.spells.len());
            db.spells.push(record);
        }

        Ok(db)
    }

    /// Look up a spell by exact name.
    pub fn get(&self, name: &str) -> Result<&SpellRecord> {
        self.index
            .get(name)
            .map(|&idx| &self.spells[idx])
            .ok_or_else(|| Error::UnknownSpell {
                name: name.to_string(),
            })
    }

    /// Class ids present in the data, in canonical order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Reject class ids that have no level column.
    pub fn check_class(&self, class: &str) -> Result<()> {
        if self.classes.iter().any(|c| c == class) {
            Ok(())
        } else {
            Err(Error::UnknownClass {
                class: class.to_string(),
            })
        }
    }

    /// Spells on the given class's list, in file order.
    pub fn spells_for_class(&self, class: &str) -> Result<Vec<&SpellRecord>> {
        self.check_class(class)?;
        Ok(self
            .spells
            .iter()
            .filter(|spell| spell.level(class).is_some())
            .collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpellRecord> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

fn row_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => format!(
            "line {}: expected {} cells, found {}",
            pos.as_ref().map_or(0, |pos| pos.line()),
            expected_len,
            len
        ),
        _ => err.to_string(),
    }
}
