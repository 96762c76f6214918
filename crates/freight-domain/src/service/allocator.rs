//! Greedy first-fit cargo allocation
//!
//! Clients are taken VIP first, vehicles smallest capacity first. Each client
//! goes to the first vehicle whose ledger accepts it; a client no vehicle
//! accepts is recorded as unassigned. Both orderings are stable, and neither
//! input slice is reordered.

use serde::Serialize;

use freight_types::{Error, Result};

use crate::model::{Client, Vehicle, VehicleId};

/// A client placed onto a vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub client_index: usize,
    pub vehicle_id: VehicleId,
}

/// A client that did not fit anywhere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnassignedClient {
    pub client_index: usize,
    pub name: String,
    pub cargo_weight: f64,
}

/// What an allocation run did
#[derive(Debug, Clone, Default, Serialize)]
pub struct AllocationOutcome {
    /// In processing order (VIP first)
    pub placements: Vec<Placement>,
    pub unassigned: Vec<UnassignedClient>,
}

impl AllocationOutcome {
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    pub fn unassigned_names(&self) -> Vec<String> {
        self.unassigned.iter().map(|u| u.name.clone()).collect()
    }
}

/// Client indices, VIP before non-VIP, original order kept within each group
fn client_order(clients: &[Client]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..clients.len()).collect();
    order.sort_by_key(|&i| !clients[i].is_vip());
    order
}

/// Vehicle indices by ascending capacity, ties in original order
fn vehicle_order(vehicles: &[Vehicle]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..vehicles.len()).collect();
    order.sort_by(|&a, &b| vehicles[a].capacity().total_cmp(&vehicles[b].capacity()));
    order
}

/// Assign clients to vehicles on top of their current loads.
///
/// Only `CapacityOverload` is treated as "try the next vehicle"; any other
/// ledger error aborts the run.
pub fn allocate(clients: &[Client], vehicles: &mut [Vehicle]) -> Result<AllocationOutcome> {
    let vehicle_order = vehicle_order(vehicles);
    let mut outcome = AllocationOutcome::default();

    for client_index in client_order(clients) {
        let client = &clients[client_index];
        let mut placed = None;

        for &vi in &vehicle_order {
            match vehicles[vi].load_cargo(client) {
                Ok(()) => {
                    placed = Some(vehicles[vi].id());
                    break;
                }
                Err(Error::CapacityOverload(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        match placed {
            Some(vehicle_id) => outcome.placements.push(Placement {
                client_index,
                vehicle_id,
            }),
            None => outcome.unassigned.push(UnassignedClient {
                client_index,
                name: client.name().to_string(),
                cargo_weight: client.cargo_weight(),
            }),
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str, weight: f64, vip: bool) -> Client {
        Client::new(name, weight, vip).unwrap()
    }

    #[test]
    fn test_vip_wins_single_slot() {
        let clients = vec![client("A", 50.0, false), client("B", 50.0, true)];
        let mut vehicles = vec![Vehicle::plain(50.0).unwrap()];

        let outcome = allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(vehicles[0].client_names(), vec!["B"]);
        assert_eq!(outcome.unassigned_names(), vec!["A"]);
    }

    #[test]
    fn test_vip_wins_regardless_of_input_order() {
        let clients = vec![client("B", 50.0, true), client("A", 50.0, false)];
        let mut vehicles = vec![Vehicle::plain(50.0).unwrap()];

        let outcome = allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(vehicles[0].client_names(), vec!["B"]);
        assert_eq!(outcome.unassigned_names(), vec!["A"]);
    }

    #[test]
    fn test_smallest_sufficient_vehicle_chosen() {
        let clients = vec![client("A", 10.0, false)];
        let mut vehicles = vec![Vehicle::plain(10.0).unwrap(), Vehicle::plain(100.0).unwrap()];

        let outcome = allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(vehicles[0].current_load(), 10.0);
        assert_eq!(vehicles[1].current_load(), 0.0);
        assert_eq!(outcome.placements[0].vehicle_id, vehicles[0].id());
    }

    #[test]
    fn test_smallest_vehicle_chosen_when_added_last() {
        let clients = vec![client("A", 10.0, false)];
        let mut vehicles = vec![Vehicle::train(100.0, 3).unwrap(), Vehicle::plain(10.0).unwrap()];

        allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(vehicles[0].current_load(), 0.0);
        assert_eq!(vehicles[1].current_load(), 10.0);
    }

    #[test]
    fn test_registry_order_untouched() {
        let clients = vec![client("A", 1.0, false), client("B", 1.0, true)];
        let mut vehicles = vec![Vehicle::plain(100.0).unwrap(), Vehicle::plain(10.0).unwrap()];
        let ids: Vec<_> = vehicles.iter().map(|v| v.id()).collect();

        allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(vehicles.iter().map(|v| v.id()).collect::<Vec<_>>(), ids);
        // VIP first onto the smaller vehicle
        assert_eq!(vehicles[1].client_names(), vec!["B", "A"]);
    }

    #[test]
    fn test_too_heavy_client_changes_nothing() {
        let clients = vec![client("Heavy", 500.0, true)];
        let mut vehicles = vec![Vehicle::plain(10.0).unwrap(), Vehicle::airplane(100.0, 1).unwrap()];

        let outcome = allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(outcome.unassigned.len(), 1);
        assert_eq!(outcome.unassigned[0].client_index, 0);
        assert_eq!(outcome.unassigned[0].cargo_weight, 500.0);
        assert!(vehicles.iter().all(|v| v.current_load() == 0.0 && v.clients().is_empty()));
    }

    #[test]
    fn test_first_fit_spills_to_next_vehicle() {
        let clients = vec![
            client("A", 6.0, false),
            client("B", 6.0, false),
            client("C", 3.0, false),
        ];
        let mut vehicles = vec![Vehicle::plain(10.0).unwrap(), Vehicle::plain(20.0).unwrap()];

        let outcome = allocate(&clients, &mut vehicles).unwrap();

        assert!(outcome.unassigned.is_empty());
        assert_eq!(vehicles[0].client_names(), vec!["A", "C"]);
        assert_eq!(vehicles[1].client_names(), vec!["B"]);
        assert_eq!(outcome.placed_count(), 3);
    }

    #[test]
    fn test_stable_among_equal_capacity() {
        let clients = vec![client("A", 5.0, false)];
        let mut vehicles = vec![Vehicle::plain(10.0).unwrap(), Vehicle::plain(10.0).unwrap()];

        allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(vehicles[0].client_names(), vec!["A"]);
        assert!(vehicles[1].clients().is_empty());
    }

    #[test]
    fn test_no_vehicles_leaves_everyone_unassigned() {
        let clients = vec![client("A", 1.0, false), client("B", 2.0, true)];
        let mut vehicles: Vec<Vehicle> = Vec::new();

        let outcome = allocate(&clients, &mut vehicles).unwrap();

        assert_eq!(outcome.unassigned_names(), vec!["B", "A"]);
    }

    #[test]
    fn test_allocation_keeps_ledger_invariant() {
        let clients: Vec<Client> = (0..30)
            .map(|i| client(&format!("c{i}"), (i % 7) as f64 * 1.3, i % 4 == 0))
            .collect();
        let mut vehicles = vec![
            Vehicle::plain(12.0).unwrap(),
            Vehicle::train(25.5, 4).unwrap(),
            Vehicle::airplane(7.0, 10000).unwrap(),
        ];

        allocate(&clients, &mut vehicles).unwrap();

        for v in &vehicles {
            assert_eq!(v.current_load(), v.loaded_weight());
            assert!(v.current_load() <= v.capacity());
        }
    }
}
