//! Company registry: owns the client and vehicle collections

use serde::Serialize;

use freight_types::{Error, Result};

use crate::model::{Client, FleetState, Vehicle, VehicleId};
use crate::service::{allocate, AllocationOutcome};

/// Aggregate numbers for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FleetSummary {
    pub client_count: usize,
    pub vip_count: usize,
    pub vehicle_count: usize,
    pub total_cargo: f64,
    pub total_capacity: f64,
    pub total_load: f64,
}

/// A transport company and everything it knows about
///
/// Insertion order is kept for display; allocation works on sorted index
/// views and never reorders the collections.
#[derive(Debug, Clone, Default)]
pub struct TransportCompany {
    name: String,
    vehicles: Vec<Vehicle>,
    clients: Vec<Client>,
}

impl TransportCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_fleet(name, Vec::new(), Vec::new())
    }

    pub fn with_fleet(name: impl Into<String>, vehicles: Vec<Vehicle>, clients: Vec<Client>) -> Self {
        Self {
            name: name.into(),
            vehicles,
            clients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_client(&mut self, client: Client) {
        self.clients.push(client);
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn list_vehicles(&self) -> &[Vehicle] {
        self.vehicles()
    }

    pub fn find_vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == *id)
    }

    /// Replace the client at `index`, returning the old one
    pub fn replace_client(&mut self, index: usize, client: Client) -> Result<Client> {
        let len = self.clients.len();
        let slot = self
            .clients
            .get_mut(index)
            .ok_or_else(|| out_of_range("client", index, len))?;
        Ok(std::mem::replace(slot, client))
    }

    pub fn remove_client(&mut self, index: usize) -> Result<Client> {
        if index >= self.clients.len() {
            return Err(out_of_range("client", index, self.clients.len()));
        }
        Ok(self.clients.remove(index))
    }

    /// Replace the vehicle at `index`, returning the old one
    pub fn replace_vehicle(&mut self, index: usize, vehicle: Vehicle) -> Result<Vehicle> {
        let len = self.vehicles.len();
        let slot = self
            .vehicles
            .get_mut(index)
            .ok_or_else(|| out_of_range("vehicle", index, len))?;
        Ok(std::mem::replace(slot, vehicle))
    }

    pub fn remove_vehicle(&mut self, index: usize) -> Result<Vehicle> {
        if index >= self.vehicles.len() {
            return Err(out_of_range("vehicle", index, self.vehicles.len()));
        }
        Ok(self.vehicles.remove(index))
    }

    /// Empty every vehicle
    pub fn reset_loads(&mut self) {
        for vehicle in &mut self.vehicles {
            vehicle.clear_cargo();
        }
    }

    /// Allocate on top of whatever the vehicles already carry
    pub fn allocate(&mut self) -> Result<AllocationOutcome> {
        allocate(&self.clients, &mut self.vehicles)
    }

    /// Reset all loads, then allocate every client from scratch.
    ///
    /// Re-running is idempotent: the same registry always yields the same
    /// placement.
    pub fn optimize_cargo_distribution(&mut self) -> Result<AllocationOutcome> {
        self.reset_loads();
        self.allocate()
    }

    pub fn snapshot(&self) -> FleetState {
        FleetState {
            clients: self.clients.clone(),
            vehicles: self.vehicles.clone(),
        }
    }

    /// Swap in both collections wholesale
    pub fn restore(&mut self, state: FleetState) {
        self.clients = state.clients;
        self.vehicles = state.vehicles;
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            client_count: self.clients.len(),
            vip_count: self.clients.iter().filter(|c| c.is_vip()).count(),
            vehicle_count: self.vehicles.len(),
            total_cargo: self.clients.iter().map(|c| c.cargo_weight()).sum(),
            total_capacity: self.vehicles.iter().map(|v| v.capacity()).sum(),
            total_load: self.vehicles.iter().map(|v| v.current_load()).sum(),
        }
    }
}

fn out_of_range(what: &str, index: usize, len: usize) -> Error {
    Error::NotFound(format!("{} #{} (have {})", what, index, len))
}
