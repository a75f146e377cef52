//! A single spell row from the database.

use std::collections::BTreeMap;

/// Placeholder the database uses for "not applicable".
pub const NULL_VALUE: &str = "NULL";

/// Normalize a raw database cell: the sentinel and blank cells are absent.
pub fn normalize_cell(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NULL_VALUE {
        None
    } else {
        Some(raw)
    }
}

/// An immutable spell row.
///
/// Built once at load. Absent cells are simply missing from `fields`, so
/// lookups never see the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpellRecord {
    name: String,
    levels: BTreeMap<String, String>,
    fields: BTreeMap<String, String>,
}

impl SpellRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), name.clone());
        Self {
            name,
            levels: BTreeMap::new(),
            fields,
        }
    }

    /// Builder-style field setter; absent values are dropped.
    pub fn with_field(mut self, column: &str, value: &str) -> Self {
        self.set_field(column, value);
        self
    }

    /// Builder-style level setter; absent values are dropped.
    pub fn with_level(mut self, class: &str, level: &str) -> Self {
        self.set_level(class, level);
        self
    }

    pub(crate) fn set_field(&mut self, column: &str, value: &str) {
        if let Some(value) = normalize_cell(value) {
            self.fields.insert(column.to_string(), value.to_string());
        }
    }

    pub(crate) fn set_level(&mut self, class: &str, level: &str) {
        if let Some(level) = normalize_cell(level) {
            self.levels.insert(class.to_string(), level.trim().to_string());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of a column, empty when absent.
    pub fn field(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Level of this spell for `class`, if it is on that class's list.
    pub fn level(&self, class: &str) -> Option<&str> {
        self.levels.get(class).map(String::as_str)
    }

    /// Classes this spell is available to, with levels.
    pub fn levels(&self) -> &BTreeMap<String, String> {
        &self.levels
    }

    /// Plain-text description.
    pub fn description(&self) -> &str {
        self.field("description")
    }

    /// HTML-formatted description.
    pub fn description_formatted(&self) -> &str {
        self.field("description_formatted")
    }
}
