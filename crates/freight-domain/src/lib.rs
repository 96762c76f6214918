//! Freightline domain layer
//!
//! Entity model, capacity ledger, allocator and the company registry that
//! ties them together.

pub mod model;
pub mod registry;
pub mod repository;
pub mod service;

pub use model::{Client, FleetState, Vehicle, VehicleId, VehicleKind};
pub use registry::{FleetSummary, TransportCompany};
pub use service::{allocate, AllocationOutcome, Placement, UnassignedClient};
