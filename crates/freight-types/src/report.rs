//! Post-allocation report shapes shared by the export and output layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client entry inside a vehicle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedClient {
    pub name: String,
    pub cargo_weight: f64,
    pub vip: bool,
}

/// One vehicle after allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLoadReport {
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub capacity: f64,
    pub current_load: f64,
    pub clients: Vec<LoadedClient>,
}

impl VehicleLoadReport {
    /// `name(weight)` entries joined by `"; "`
    pub fn clients_summary(&self) -> String {
        self.clients
            .iter()
            .map(|c| format!("{}({})", c.name, c.cargo_weight))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Result of a distribution run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionReport {
    pub company: String,
    pub generated_at: DateTime<Utc>,
    pub vehicles: Vec<VehicleLoadReport>,
    /// Names of clients no vehicle could take
    pub unassigned: Vec<String>,
}

impl DistributionReport {
    pub fn total_load(&self) -> f64 {
        self.vehicles.iter().map(|v| v.current_load).sum()
    }

    pub fn total_capacity(&self) -> f64 {
        self.vehicles.iter().map(|v| v.capacity).sum()
    }

    pub fn placed_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.clients.len()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}
