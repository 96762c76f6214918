//! Client entity

use serde::Serialize;

use freight_types::{Error, Result};

/// A party requesting cargo transport
///
/// Immutable once built; the only way to get one is through [`Client::new`],
/// so every instance carries a finite, non-negative weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    name: String,
    cargo_weight: f64,
    is_vip: bool,
}

impl Client {
    pub fn new(name: impl Into<String>, cargo_weight: f64, is_vip: bool) -> Result<Self> {
        check_weight(cargo_weight)?;
        Ok(Self {
            name: name.into(),
            cargo_weight,
            is_vip,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cargo_weight(&self) -> f64 {
        self.cargo_weight
    }

    pub fn is_vip(&self) -> bool {
        self.is_vip
    }
}

/// Shared by construction and the ledger's load check
pub(crate) fn check_weight(cargo_weight: f64) -> Result<()> {
    if !cargo_weight.is_finite() {
        return Err(Error::invalid("cargo_weight must be number"));
    }
    if cargo_weight < 0.0 {
        return Err(Error::invalid("cargo_weight must be >= 0"));
    }
    Ok(())
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | cargo: {} | VIP: {}",
            self.name, self.cargo_weight, self.is_vip
        )
    }
}
