//! On-disk and in-memory JSON documents.

use appconfig::DocumentOpener;
use std::cell::Cell;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A JSON document written to a temporary directory.
///
/// The directory, and the file with it, is removed on drop.
///
/// ```rust
/// use appconfig_test_utils::TestDocument;
///
/// let doc = TestDocument::new(serde_json::json!({"app": {"port": ":9090"}}));
/// assert!(doc.path().is_file());
/// ```
pub struct TestDocument {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestDocument {
    /// Write `value` as `config.json`.
    pub fn new(value: serde_json::Value) -> Self {
        Self::raw(&value.to_string())
    }

    /// Write `contents` verbatim, valid JSON or not.
    pub fn raw(contents: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, contents).unwrap();
        Self { temp_dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as UTF-8, ready for a `-config=<path>` switch.
    pub fn path_str(&self) -> &str {
        self.path.to_str().unwrap()
    }

    /// A path inside the temporary directory that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.temp_dir.path().join("missing.json")
    }
}

/// Serves documents from memory and counts how often it was asked to.
#[derive(Debug, Default)]
pub struct MemoryOpener {
    documents: HashMap<PathBuf, String>,
    opened: Cell<usize>,
}

impl MemoryOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, value: serde_json::Value) -> Self {
        self.documents.insert(path.into(), value.to_string());
        self
    }

    /// Number of `open` calls so far, successful or not.
    pub fn opened(&self) -> usize {
        self.opened.get()
    }
}

impl DocumentOpener for MemoryOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        self.opened.set(self.opened.get() + 1);
        match self.documents.get(path) {
            Some(contents) => Ok(Box::new(Cursor::new(contents.as_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )),
        }
    }
}
