//! Fleet seed loader from TOML
//!
//! Bulk-imports clients and vehicles written by hand:
//!
//! ```toml
//! [[clients]]
//! name = "Anna"
//! cargo_weight = 12.0
//! is_vip = true
//!
//! [[vehicles]]
//! type = "Train"
//! capacity = 100.0
//! number_of_cars = 5
//! ```

use std::fs;
use std::path::Path;

use freight_domain::FleetState;
use freight_types::{ConfigError, Error, Result};

use crate::persistence::StateDocument;

/// Parsed seed file, not yet validated into entities
#[derive(Debug)]
pub struct FleetSeedLoader {
    document: StateDocument,
}

impl FleetSeedLoader {
    /// Load a seed from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet seed file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a seed from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let document: StateDocument = toml::from_str(toml_content)?;
        tracing::debug!(
            clients = document.clients.len(),
            vehicles = document.vehicles.len(),
            "fleet seed parsed"
        );
        Ok(Self { document })
    }

    pub fn client_count(&self) -> usize {
        self.document.clients.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.document.vehicles.len()
    }

    /// Validate every record into entities
    pub fn into_state(self) -> Result<FleetState> {
        self.document.into_state()
    }
}
