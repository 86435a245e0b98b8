use std::{
    fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

pub(crate) const CORRUPT_DOCUMENT: &str = "{ not json";

/// A unique path for a transaction document inside a fresh temporary
/// directory. The directory is removed when this value is dropped.
pub(crate) struct TempDataPath {
    dir: PathBuf,
    path: PathBuf,
}

impl TempDataPath {
    pub(crate) fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("finance_tracker_test_{}", Uuid::new_v4()));
        let path = dir.join("transactions.json");

        Self { dir, path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the document with text that is not valid JSON.
    pub(crate) fn corrupt(&self) {
        fs::write(&self.path, CORRUPT_DOCUMENT).expect("could not corrupt document");
    }

    pub(crate) fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("could not read document")
    }
}

impl Drop for TempDataPath {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}
