//! Error types for freightline

use thiserror::Error;
use uuid::Uuid;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// A vehicle refused a client's cargo.
///
/// Carries everything needed to explain the refusal: the vehicle's capacity,
/// what it already holds and the weight that did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("capacity={capacity}, load={current_load}, cargo={cargo_weight} (vehicle {vehicle_id})")]
pub struct CapacityOverload {
    pub vehicle_id: Uuid,
    pub capacity: f64,
    pub current_load: f64,
    pub cargo_weight: f64,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Capacity overload: {0}")]
    CapacityOverload(#[from] CapacityOverload),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl Error {
    /// Shorthand for an `InvalidArgument` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
