//! Distribution Service - run the allocator and describe the result
//!
//! 1. Refuse to run without at least one client and one vehicle
//! 2. Optionally empty every vehicle first
//! 3. Allocate
//! 4. Build the report from post-allocation vehicle state

use chrono::Utc;

use freight_domain::{AllocationOutcome, TransportCompany};
use freight_types::{DistributionReport, LoadedClient, VehicleLoadReport};

use super::fleet_service::{FleetServiceError, ServiceResult};

/// Options for a distribution run
#[derive(Debug, Clone)]
pub struct DistributionOptions {
    /// Empty every vehicle before allocating
    pub reset_before: bool,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self { reset_before: true }
    }
}

impl DistributionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset(mut self, enabled: bool) -> Self {
        self.reset_before = enabled;
        self
    }
}

pub fn distribute(
    company: &mut TransportCompany,
    options: &DistributionOptions,
) -> ServiceResult<DistributionReport> {
    if company.clients().is_empty() || company.vehicles().is_empty() {
        return Err(FleetServiceError::NothingToDistribute(format!(
            "need at least one client and one vehicle (have {} clients, {} vehicles)",
            company.clients().len(),
            company.vehicles().len()
        )));
    }

    let outcome = if options.reset_before {
        company.optimize_cargo_distribution()?
    } else {
        company.allocate()?
    };

    tracing::info!(
        company = company.name(),
        placed = outcome.placed_count(),
        unassigned = outcome.unassigned.len(),
        reset = options.reset_before,
        "distribution finished"
    );
    for client in &outcome.unassigned {
        tracing::warn!(
            client = %client.name,
            cargo_weight = client.cargo_weight,
            "no vehicle can take client"
        );
    }

    Ok(build_report(company, &outcome))
}

/// Snapshot vehicle state into the report shape used by export and output
pub fn build_report(company: &TransportCompany, outcome: &AllocationOutcome) -> DistributionReport {
    let vehicles = company
        .vehicles()
        .iter()
        .map(|v| VehicleLoadReport {
            vehicle_id: v.id().to_string(),
            vehicle_type: v.kind().label().to_string(),
            capacity: v.capacity(),
            current_load: v.current_load(),
            clients: v
                .clients()
                .iter()
                .map(|c| LoadedClient {
                    name: c.name().to_string(),
                    cargo_weight: c.cargo_weight(),
                    vip: c.is_vip(),
                })
                .collect(),
        })
        .collect();

    DistributionReport {
        company: company.name().to_string(),
        generated_at: Utc::now(),
        vehicles,
        unassigned: outcome.unassigned_names(),
    }
}
