//! Use cases

pub mod distribution_service;
pub mod fleet_service;

pub use distribution_service::{build_report, distribute, DistributionOptions};
pub use fleet_service::{FleetService, FleetServiceError, ServiceResult};
