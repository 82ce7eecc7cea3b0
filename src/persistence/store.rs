//! Persistence for the force matrix
//!
//! The engine delegates saving and loading of the coefficient table to a
//! [`MatrixStore`] injected at construction, so the core never touches the
//! filesystem directly. The table crosses the boundary as a plain row-major
//! nested array.
//!
//! Load failures are non-fatal by design: a missing or malformed store means
//! the engine keeps its default table and says nothing.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Save/load collaborator for the force-matrix table.
pub trait MatrixStore {
    /// Previously persisted table, or `None` when nothing usable is stored.
    fn load(&self) -> Option<Vec<Vec<f64>>>;

    /// Persist the current table. Write failures are swallowed; persistence
    /// is best-effort and never interrupts a running simulation.
    fn save(&self, rows: &[Vec<f64>]);
}

/// Matrix store backed by a YAML file.
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatrixStore for YamlFileStore {
    fn load(&self) -> Option<Vec<Vec<f64>>> {
        let file = File::open(&self.path).ok()?;
        serde_yaml::from_reader(BufReader::new(file)).ok()
    }

    fn save(&self, rows: &[Vec<f64>]) {
        if let Ok(file) = File::create(&self.path) {
            let _ = serde_yaml::to_writer(file, rows);
        }
    }
}
