//! Persisted-state document schema
//!
//! ```json
//! {
//!   "clients":  [{"name": "Anna", "cargo_weight": 12.0, "is_vip": true}],
//!   "vehicles": [{"type": "Train", "capacity": 100.0, "number_of_cars": 5},
//!                {"type": "Airplane", "capacity": 40.0, "max_altitude": 9000},
//!                {"type": "Vehicle", "capacity": 10.0}]
//! }
//! ```
//!
//! Loads and vehicle ids are not stored; every decoded record goes through
//! the entity constructors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freight_domain::{Client, FleetState, Vehicle, VehicleKind};
use freight_types::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    pub cargo_weight: f64,
    #[serde(default)]
    pub is_vip: bool,
}

impl ClientRecord {
    pub fn into_client(self) -> Result<Client> {
        Client::new(self.name, self.cargo_weight, self.is_vip)
    }
}

impl From<&Client> for ClientRecord {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name().to_string(),
            cargo_weight: client.cargo_weight(),
            is_vip: client.is_vip(),
        }
    }
}

fn default_max_altitude() -> u32 {
    1
}

/// Written internally tagged on `type`; read through a flat record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum VehicleRecord {
    Train { capacity: f64, number_of_cars: u32 },
    Airplane { capacity: f64, max_altitude: u32 },
    Vehicle { capacity: f64 },
}

/// Flat read shape; a missing or unrecognised `type` is a plain vehicle
#[derive(Deserialize)]
struct RawVehicleRecord {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    capacity: f64,
    #[serde(default)]
    number_of_cars: u32,
    #[serde(default = "default_max_altitude")]
    max_altitude: u32,
}

impl From<RawVehicleRecord> for VehicleRecord {
    fn from(raw: RawVehicleRecord) -> Self {
        let capacity = raw.capacity;
        match raw.kind.as_deref() {
            Some("Train") => VehicleRecord::Train {
                capacity,
                number_of_cars: raw.number_of_cars,
            },
            Some("Airplane") => VehicleRecord::Airplane {
                capacity,
                max_altitude: raw.max_altitude,
            },
            _ => VehicleRecord::Vehicle { capacity },
        }
    }
}

impl<'de> Deserialize<'de> for VehicleRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawVehicleRecord::deserialize(deserializer).map(Self::from)
    }
}

impl VehicleRecord {
    pub fn into_vehicle(self) -> Result<Vehicle> {
        match self {
            VehicleRecord::Train {
                capacity,
                number_of_cars,
            } => Vehicle::train(capacity, number_of_cars),
            VehicleRecord::Airplane {
                capacity,
                max_altitude,
            } => Vehicle::airplane(capacity, max_altitude),
            VehicleRecord::Vehicle { capacity } => Vehicle::plain(capacity),
        }
    }
}

impl From<&Vehicle> for VehicleRecord {
    fn from(vehicle: &Vehicle) -> Self {
        let capacity = vehicle.capacity();
        match vehicle.kind() {
            VehicleKind::Plain => VehicleRecord::Vehicle { capacity },
            VehicleKind::Train { number_of_cars } => VehicleRecord::Train {
                capacity,
                number_of_cars,
            },
            VehicleKind::Airplane { max_altitude } => VehicleRecord::Airplane {
                capacity,
                max_altitude,
            },
        }
    }
}

/// Top-level document: two arrays plus an optional save timestamp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
}

impl StateDocument {
    pub fn from_state(state: &FleetState) -> Self {
        Self {
            saved_at: Some(Utc::now()),
            clients: state.clients.iter().map(ClientRecord::from).collect(),
            vehicles: state.vehicles.iter().map(VehicleRecord::from).collect(),
        }
    }

    /// Rebuild validated entities; the first invalid record fails the whole document
    pub fn into_state(self) -> Result<FleetState> {
        let clients = self
            .clients
            .into_iter()
            .map(ClientRecord::into_client)
            .collect::<Result<Vec<_>>>()?;
        let vehicles = self
            .vehicles
            .into_iter()
            .map(VehicleRecord::into_vehicle)
            .collect::<Result<Vec<_>>>()?;
        Ok(FleetState { clients, vehicles })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
