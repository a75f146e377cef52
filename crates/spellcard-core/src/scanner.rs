//! Discovery of cards that already exist on disk.

use std::collections::{BTreeMap, HashMap};

use spellcard_fs::NormalizedPath;

use crate::Result;
use crate::database::SpellDatabase;
use crate::generator::GenerationItem;
use crate::paths::PathResolver;

/// Selected items whose target card already exists, by spell name.
pub fn detect_existing(
    items: &[GenerationItem],
    resolver: &PathResolver,
) -> Result<BTreeMap<String, NormalizedPath>> {
    let mut existing = BTreeMap::new();
    for item in items {
        let path = resolver.resolve(&item.class, item.name(), &item.record)?;
        if path.is_file() {
            existing.insert(item.name().to_string(), path);
        }
    }
    Ok(existing)
}

/// Every card under a class directory that maps back to a database spell.
///
/// Walks `{base}/{class}/{level}/*.{ext}` and keeps files whose path equals
/// the path the spell would be generated at. Files at the wrong level,
/// with unknown names or with another extension are ignored.
pub fn find_existing_cards(
    db: &SpellDatabase,
    class: &str,
    resolver: &PathResolver,
) -> Result<BTreeMap<String, NormalizedPath>> {
    let expected: HashMap<NormalizedPath, &str> = db
        .spells_for_class(class)?
        .into_iter()
        .filter_map(|spell| {
            resolver
                .resolve(class, spell.name(), spell)
                .ok()
                .map(|path| (path, spell.name()))
        })
        .collect();

    let mut found = BTreeMap::new();
    let class_dir = resolver.class_dir(class);
    let Ok(levels) = std::fs::read_dir(class_dir.to_native()) else {
        return Ok(found);
    };

    for level in levels.flatten() {
        if !level.path().is_dir() {
            continue;
        }
        let Ok(files) = std::fs::read_dir(level.path()) else {
            continue;
        };
        for file in files.flatten() {
            let path = NormalizedPath::new(file.path());
            if !path.is_file() || path.extension() != Some(resolver.extension()) {
                continue;
            }
            match expected.get(&path) {
                Some(name) => {
                    found.insert(name.to_string(), path);
                }
                None => tracing::debug!(path = %path, "card does not match a spell"),
            }
        }
    }

    tracing::debug!(class, count = found.len(), "found existing cards");
    Ok(found)
}
