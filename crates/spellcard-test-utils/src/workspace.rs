//! [`TestWorkspace`]: a temp directory holding spell data and a card tree.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::data::sample_tsv;

/// Data file name used inside the workspace.
pub const DATA_FILE: &str = "spell_full.tsv";

/// Output root used inside the workspace.
pub const OUTPUT_DIR: &str = "src/spells";

/// A temporary directory with helpers for card generation tests.
///
/// # Example
///
/// ```rust,no_run
/// use spellcard_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::with_sample_data();
/// ws.write_card("wiz", "3", "Fireball", "% hand written\n");
/// ws.assert_file_contains("src/spells/wiz/3/Fireball.tex", "hand written");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Workspace with [`sample_tsv`] written to [`DATA_FILE`].
    pub fn with_sample_data() -> Self {
        let ws = Self::new();
        ws.write_data(&sample_tsv());
        ws
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_path(&self) -> PathBuf {
        self.root().join(DATA_FILE)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join(OUTPUT_DIR)
    }

    /// Path of a card under the output root.
    pub fn card_path(&self, class: &str, level: &str, file_stem: &str) -> PathBuf {
        self.output_dir()
            .join(class)
            .join(level)
            .join(format!("{file_stem}.tex"))
    }

    pub fn write_data(&self, content: &str) {
        fs::write(self.data_path(), content).unwrap();
    }

    /// Write any file relative to the root, creating parents.
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a card at its generated location.
    pub fn write_card(&self, class: &str, level: &str, file_stem: &str, content: &str) -> PathBuf {
        let path = self.card_path(class, level, file_stem);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a card from its generated location.
    ///
    /// # Panics
    /// Panics if the card does not exist.
    pub fn read_card(&self, class: &str, level: &str, file_stem: &str) -> String {
        let path = self.card_path(class, level, file_stem);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read card: {}", path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to the root) contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
