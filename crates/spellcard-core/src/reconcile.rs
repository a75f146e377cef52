//! Three-way merge of database values with a prior card.
//!
//! The only memory of a manual edit is the `% original: {...}` annotation
//! next to it, which records the database value the edit was made against.
//! Comparing that annotation with the current database value tells a stale
//! but untouched value apart from a deliberate customization.

use spellcard_blocks::FileProperty;

/// A manual edit made against a database value that has since changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueConflict {
    /// Database value recorded when the edit was made.
    pub old: String,
    /// Current database value.
    pub new: String,
}

/// Outcome for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Value to write.
    pub value: String,
    /// Database value to record in the annotation, if the user value is kept.
    pub original: Option<String>,
    pub conflict: Option<ValueConflict>,
}

impl Reconciled {
    fn database(db: &str) -> Self {
        Self {
            value: db.to_string(),
            original: None,
            conflict: None,
        }
    }

    fn user(user: &str, db: &str, conflict: Option<ValueConflict>) -> Self {
        Self {
            value: user.to_string(),
            original: Some(db.to_string()),
            conflict,
        }
    }
}

/// Decide the value written for one property.
///
/// | prior file state                        | result                         |
/// |-----------------------------------------|--------------------------------|
/// | no file or preservation off             | db                             |
/// | user == db                              | db                             |
/// | no recorded original                    | db                             |
/// | recorded == db                          | user, annotated with db        |
/// | recorded != db                          | user, annotated, conflict      |
///
/// # Example
/// ```
/// use spellcard_blocks::FileProperty;
/// use spellcard_core::reconcile::reconcile_property;
///
/// let prior = FileProperty::new("medium", Some("100 ft. + 10 ft./level".into()));
/// let merged = reconcile_property("100 ft.", Some(&prior), true);
/// assert_eq!(merged.value, "medium");
/// assert_eq!(merged.original.as_deref(), Some("100 ft."));
/// assert!(merged.conflict.is_some());
/// ```
pub fn reconcile_property(db: &str, prior: Option<&FileProperty>, preserve: bool) -> Reconciled {
    let Some(prior) = prior.filter(|_| preserve) else {
        return Reconciled::database(db);
    };
    if prior.value == db {
        return Reconciled::database(db);
    }
    let Some(recorded) = prior.original.as_deref() else {
        return Reconciled::database(db);
    };
    if recorded == db {
        return Reconciled::user(&prior.value, db, None);
    }
    Reconciled::user(
        &prior.value,
        db,
        Some(ValueConflict {
            old: recorded.to_string(),
            new: db.to_string(),
        }),
    )
}

/// Decide a reference link.
///
/// An explicit override wins; otherwise a non-empty prior value is reused
/// when preserving; otherwise the generated default.
pub fn reconcile_link(
    explicit: Option<&str>,
    prior: Option<&str>,
    preserve: bool,
    default: &str,
) -> String {
    if let Some(explicit) = explicit {
        return explicit.to_string();
    }
    if preserve
        && let Some(prior) = prior.filter(|p| !p.trim().is_empty())
    {
        return prior.to_string();
    }
    default.to_string()
}
