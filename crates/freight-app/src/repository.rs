//! Repository adapters for persistence layer

use std::path::{Path, PathBuf};

use freight_domain::FleetState;
use freight_infra::fleet_seed_loader::FleetSeedLoader;
use freight_infra::persistence::FileStateRepository;
use freight_types::Result;

use crate::config::Config;

/// Open the file-based state repository configured for this user
pub fn open_state_repo(config: &Config) -> Result<FileStateRepository> {
    Ok(FileStateRepository::at_path(config.state_path()?))
}

/// Open a state repository at a custom document path
pub fn open_state_repo_at(path: PathBuf) -> FileStateRepository {
    FileStateRepository::at_path(path)
}

/// Read and validate a TOML fleet seed
pub fn load_fleet_seed(path: &Path) -> Result<FleetState> {
    FleetSeedLoader::load_from_file(path)?.into_state()
}
