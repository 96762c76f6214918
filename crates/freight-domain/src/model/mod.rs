//! Domain model types

pub mod client;
pub mod vehicle;

pub use client::Client;
pub use vehicle::{Vehicle, VehicleId, VehicleKind};

/// Clients and vehicles detached from a registry, as persisted or restored
#[derive(Debug, Clone, Default)]
pub struct FleetState {
    pub clients: Vec<Client>,
    pub vehicles: Vec<Vehicle>,
}

impl FleetState {
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.vehicles.is_empty()
    }
}
