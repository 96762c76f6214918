//! File-based state repository implementation

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use freight_domain::repository::StateRepository;
use freight_domain::FleetState;
use freight_types::{Error, Result};

use super::StateDocument;

/// File-based implementation of StateRepository
///
/// Stores the clients/vehicles document as pretty JSON on disk.
pub struct FileStateRepository {
    store_path: PathBuf,
}

impl FileStateRepository {
    /// Use `state.json` inside a store directory, creating the directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("state.json"),
        })
    }

    /// Use an explicit document path
    pub fn at_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn read_document(&self) -> Result<StateDocument> {
        if !self.store_path.exists() {
            tracing::debug!(path = %self.store_path.display(), "no state document yet");
            return Ok(StateDocument::default());
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn write_document(&self, document: &StateDocument) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, document)?;
        Ok(())
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self) -> std::result::Result<FleetState, Error> {
        let state = self.read_document()?.into_state()?;
        tracing::debug!(
            path = %self.store_path.display(),
            clients = state.clients.len(),
            vehicles = state.vehicles.len(),
            "state loaded"
        );
        Ok(state)
    }

    fn save(&self, state: &FleetState) -> std::result::Result<(), Error> {
        self.write_document(&StateDocument::from_state(state))?;
        tracing::debug!(
            path = %self.store_path.display(),
            clients = state.clients.len(),
            vehicles = state.vehicles.len(),
            "state saved"
        );
        Ok(())
    }
}
