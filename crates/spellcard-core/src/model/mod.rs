//! Spell data model

pub mod property;
pub mod record;

pub use property::{PropertyName, ValueSource};
pub use record::{NULL_VALUE, SpellRecord, normalize_cell};
