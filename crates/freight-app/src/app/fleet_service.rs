//! Fleet Service - registry use cases backed by a state repository
//!
//! Wraps a [`TransportCompany`] with input policy checks and persistence so
//! the CLI and the interactive menu share one code path.

use thiserror::Error;

use freight_domain::repository::StateRepository;
use freight_domain::{Client, FleetState, TransportCompany, Vehicle, VehicleId, VehicleKind};
use freight_types::{DistributionReport, Error};

use super::distribution_service::{distribute, DistributionOptions};
use crate::validation::{validate_capacity, validate_name, validate_weight};

/// Errors specific to the fleet service
#[derive(Debug, Error)]
pub enum FleetServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Nothing to distribute: {0}")]
    NothingToDistribute(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<Error> for FleetServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidArgument(msg) => FleetServiceError::InvalidInput(msg),
            Error::NotFound(msg) | Error::FileNotFound(msg) => FleetServiceError::NotFound(msg),
            Error::Config(e) => FleetServiceError::Config(e.to_string()),
            Error::Export(msg) => FleetServiceError::Export(msg),
            _ => FleetServiceError::Storage(err.to_string()),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, FleetServiceError>;

pub struct FleetService<R: StateRepository> {
    company: TransportCompany,
    repo: R,
    enforce_input_policy: bool,
}

impl<R: StateRepository> FleetService<R> {
    /// Load the stored fleet into a fresh company
    pub fn open(company_name: impl Into<String>, repo: R) -> ServiceResult<Self> {
        let mut company = TransportCompany::new(company_name);
        company.restore(repo.load()?);
        Ok(Self {
            company,
            repo,
            enforce_input_policy: true,
        })
    }

    pub fn with_input_policy(mut self, enabled: bool) -> Self {
        self.enforce_input_policy = enabled;
        self
    }

    pub fn company(&self) -> &TransportCompany {
        &self.company
    }

    pub fn company_mut(&mut self) -> &mut TransportCompany {
        &mut self.company
    }

    fn build_client(&self, name: &str, cargo_weight: f64, is_vip: bool) -> ServiceResult<Client> {
        if self.enforce_input_policy {
            let name = validate_name(name)?;
            let cargo_weight = validate_weight(cargo_weight)?;
            return Ok(Client::new(name, cargo_weight, is_vip)?);
        }
        Ok(Client::new(name, cargo_weight, is_vip)?)
    }

    /// Register a client; returns its index
    pub fn add_client(&mut self, name: &str, cargo_weight: f64, is_vip: bool) -> ServiceResult<usize> {
        let client = self.build_client(name, cargo_weight, is_vip)?;
        tracing::info!(name = client.name(), cargo_weight, is_vip, "client added");
        self.company.add_client(client);
        Ok(self.company.clients().len() - 1)
    }

    /// Replace the client at `index`; unset fields keep their current value
    pub fn edit_client(
        &mut self,
        index: usize,
        name: Option<&str>,
        cargo_weight: Option<f64>,
        is_vip: Option<bool>,
    ) -> ServiceResult<&Client> {
        let current = self
            .company
            .clients()
            .get(index)
            .ok_or_else(|| FleetServiceError::NotFound(format!("client #{}", index)))?;
        let client = self.build_client(
            name.unwrap_or(current.name()),
            cargo_weight.unwrap_or(current.cargo_weight()),
            is_vip.unwrap_or(current.is_vip()),
        )?;
        self.company.replace_client(index, client)?;
        tracing::info!(index, "client updated");
        Ok(&self.company.clients()[index])
    }

    pub fn remove_client(&mut self, index: usize) -> ServiceResult<Client> {
        let removed = self.company.remove_client(index)?;
        tracing::info!(index, name = removed.name(), "client removed");
        Ok(removed)
    }

    /// Clients whose name contains `query` (case-insensitive), with their indices
    pub fn search_clients(&self, query: &str) -> Vec<(usize, &Client)> {
        let query = query.trim().to_lowercase();
        self.company
            .clients()
            .iter()
            .enumerate()
            .filter(|(_, c)| query.is_empty() || c.name().to_lowercase().contains(&query))
            .collect()
    }

    pub fn add_vehicle(&mut self, kind: VehicleKind, capacity: f64) -> ServiceResult<VehicleId> {
        let vehicle = Vehicle::new(kind, validate_capacity(capacity)?)?;
        let id = vehicle.id();
        tracing::info!(%id, kind = kind.label(), capacity, "vehicle added");
        self.company.add_vehicle(vehicle);
        Ok(id)
    }

    /// Replace the vehicle at `index`, keeping its id; the edited vehicle is empty
    pub fn edit_vehicle(
        &mut self,
        index: usize,
        kind: Option<VehicleKind>,
        capacity: Option<f64>,
    ) -> ServiceResult<VehicleId> {
        let current = self
            .company
            .vehicles()
            .get(index)
            .ok_or_else(|| FleetServiceError::NotFound(format!("vehicle #{}", index)))?;
        let capacity = validate_capacity(capacity.unwrap_or(current.capacity()))?;
        let edited = current.revised(kind.unwrap_or(current.kind()), capacity)?;
        let id = edited.id();
        self.company.replace_vehicle(index, edited)?;
        tracing::info!(index, %id, "vehicle updated");
        Ok(id)
    }

    pub fn remove_vehicle(&mut self, index: usize) -> ServiceResult<Vehicle> {
        let removed = self.company.remove_vehicle(index)?;
        tracing::info!(index, id = %removed.id(), "vehicle removed");
        Ok(removed)
    }

    /// Merge or replace the fleet with imported entities; returns (clients, vehicles) imported
    pub fn import(&mut self, state: FleetState, replace: bool) -> (usize, usize) {
        let counts = (state.clients.len(), state.vehicles.len());
        if replace {
            self.company.restore(state);
        } else {
            for client in state.clients {
                self.company.add_client(client);
            }
            for vehicle in state.vehicles {
                self.company.add_vehicle(vehicle);
            }
        }
        tracing::info!(clients = counts.0, vehicles = counts.1, replace, "fleet imported");
        counts
    }

    pub fn distribute(&mut self, options: &DistributionOptions) -> ServiceResult<DistributionReport> {
        distribute(&mut self.company, options)
    }

    /// Write clients and vehicles to the repository
    pub fn save(&self) -> ServiceResult<()> {
        self.repo.save(&self.company.snapshot())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory repository that records the last save
    #[derive(Default)]
    struct MemoryRepo {
        stored: RefCell<Option<FleetState>>,
    }

    impl StateRepository for MemoryRepo {
        fn load(&self) -> Result<FleetState, Error> {
            Ok(self.stored.borrow().clone().unwrap_or_default())
        }

        fn save(&self, state: &FleetState) -> Result<(), Error> {
            *self.stored.borrow_mut() = Some(state.clone());
            Ok(())
        }
    }

    fn service() -> FleetService<MemoryRepo> {
        FleetService::open("Acme", MemoryRepo::default()).unwrap()
    }

    #[test]
    fn test_add_client_applies_policy() {
        let mut service = service();
        assert_eq!(service.add_client(" Anna ", 10.0, true).unwrap(), 0);
        assert_eq!(service.company().clients()[0].name(), "Anna");

        let err = service.add_client("X", 10.0, false).unwrap_err();
        assert!(matches!(err, FleetServiceError::InvalidInput(_)));
        let err = service.add_client("Boris", 0.0, false).unwrap_err();
        assert!(matches!(err, FleetServiceError::InvalidInput(_)));
        assert_eq!(service.company().clients().len(), 1);
    }

    #[test]
    fn test_policy_can_be_disabled() {
        let mut service = service().with_input_policy(false);
        assert!(service.add_client("X", 0.0, false).is_ok());
        let err = service.add_client("Y", -1.0, false).unwrap_err();
        assert!(matches!(err, FleetServiceError::InvalidInput(_)));
    }

    #[test]
    fn test_edit_client_keeps_unset_fields() {
        let mut service = service();
        service.add_client("Anna", 10.0, false).unwrap();
        let edited = service.edit_client(0, None, Some(20.0), None).unwrap();
        assert_eq!(edited.name(), "Anna");
        assert_eq!(edited.cargo_weight(), 20.0);
        assert!(!edited.is_vip());

        assert!(matches!(
            service.edit_client(3, None, None, Some(true)),
            Err(FleetServiceError::NotFound(_))
        ));
    }

    #[test]
    fn test_vehicle_lifecycle() {
        let mut service = service();
        let id = service
            .add_vehicle(VehicleKind::Train { number_of_cars: 3 }, 100.0)
            .unwrap();
        let edited = service.edit_vehicle(0, None, Some(120.0)).unwrap();
        assert_eq!(edited, id);
        assert_eq!(service.company().vehicles()[0].capacity(), 120.0);
        assert_eq!(
            service.company().vehicles()[0].kind(),
            VehicleKind::Train { number_of_cars: 3 }
        );

        assert!(matches!(
            service.add_vehicle(VehicleKind::Airplane { max_altitude: 0 }, 1.0),
            Err(FleetServiceError::InvalidInput(_))
        ));

        let removed = service.remove_vehicle(0).unwrap();
        assert_eq!(removed.id(), id);
        assert!(matches!(service.remove_vehicle(0), Err(FleetServiceError::NotFound(_))));
    }

    #[test]
    fn test_search_clients() {
        let mut service = service();
        service.add_client("Anna Petrova", 1.0, false).unwrap();
        service.add_client("Boris", 1.0, false).unwrap();
        service.add_client("Joanna", 1.0, true).unwrap();

        let hits: Vec<usize> = service.search_clients("ANNA").iter().map(|(i, _)| *i).collect();
        assert_eq!(hits, vec![0, 2]);
        assert_eq!(service.search_clients("").len(), 3);
    }

    #[test]
    fn test_import_merge_and_replace() {
        let mut service = service();
        service.add_client("Anna", 1.0, false).unwrap();
        let state = FleetState {
            clients: vec![Client::new("Boris", 2.0, true).unwrap()],
            vehicles: vec![Vehicle::plain(5.0).unwrap()],
        };

        assert_eq!(service.import(state.clone(), false), (1, 1));
        assert_eq!(service.company().clients().len(), 2);

        service.import(state, true);
        assert_eq!(service.company().clients().len(), 1);
        assert_eq!(service.company().clients()[0].name(), "Boris");
    }

    #[test]
    fn test_save_and_reopen() {
        let mut service = service();
        service.add_client("Anna", 1.0, false).unwrap();
        service.add_vehicle(VehicleKind::Plain, 10.0).unwrap();
        service.save().unwrap();

        let FleetService { repo, .. } = service;
        let reopened = FleetService::open("Acme", repo).unwrap();
        assert_eq!(reopened.company().clients().len(), 1);
        assert_eq!(reopened.company().vehicles().len(), 1);
    }

    #[test]
    fn test_distribute_through_service() {
        let mut service = service();
        service.add_client("Anna", 10.0, false).unwrap();
        service.add_vehicle(VehicleKind::Plain, 10.0).unwrap();
        service.add_vehicle(VehicleKind::Plain, 100.0).unwrap();

        let report = service.distribute(&DistributionOptions::new()).unwrap();
        assert_eq!(report.vehicles[0].current_load, 10.0);
        assert_eq!(report.vehicles[1].current_load, 0.0);
        assert!(report.is_complete());
    }
}
