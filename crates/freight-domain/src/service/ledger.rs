//! Capacity ledger: the only mutation path for a vehicle's load

use freight_types::{CapacityOverload, Result};

use crate::model::client::check_weight;
use crate::model::{Client, Vehicle};

impl Vehicle {
    /// Load a client's cargo if it fits in the remaining capacity.
    ///
    /// All-or-nothing: on any error the vehicle is left untouched.
    pub fn load_cargo(&mut self, client: &Client) -> Result<()> {
        let cargo_weight = client.cargo_weight();
        check_weight(cargo_weight)?;

        if cargo_weight + self.current_load > self.capacity {
            return Err(CapacityOverload {
                vehicle_id: self.id.as_uuid(),
                capacity: self.capacity,
                current_load: self.current_load,
                cargo_weight,
            }
            .into());
        }

        self.current_load += cargo_weight;
        self.clients.push(client.clone());
        Ok(())
    }

    /// Drop every loaded client and zero the load
    pub fn clear_cargo(&mut self) {
        self.clients.clear();
        self.current_load = 0.0;
    }

    pub fn remaining_capacity(&self) -> f64 {
        (self.capacity - self.current_load).max(0.0)
    }

    /// Load as a fraction of capacity; 0 for a zero-capacity vehicle
    pub fn utilization(&self) -> f64 {
        if self.capacity > 0.0 {
            self.current_load / self.capacity
        } else {
            0.0
        }
    }

    /// Summed weight of the loaded clients, recomputed from the list
    pub fn loaded_weight(&self) -> f64 {
        self.clients.iter().map(|c| c.cargo_weight()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_types::Error;

    fn client(name: &str, weight: f64) -> Client {
        Client::new(name, weight, false).unwrap()
    }

    #[test]
    fn test_load_within_capacity() {
        let mut v = Vehicle::plain(100.0).unwrap();
        v.load_cargo(&client("Anna", 60.0)).unwrap();
        v.load_cargo(&client("Boris", 40.0)).unwrap();
        assert_eq!(v.current_load(), 100.0);
        assert_eq!(v.client_names(), vec!["Anna", "Boris"]);
        assert_eq!(v.remaining_capacity(), 0.0);
    }

    #[test]
    fn test_overload_is_rejected_without_mutation() {
        let mut v = Vehicle::train(50.0, 2).unwrap();
        v.load_cargo(&client("Anna", 30.0)).unwrap();
        let before_load = v.current_load();
        let before_names: Vec<String> =
            v.client_names().iter().map(|s| s.to_string()).collect();

        let err = v.load_cargo(&client("Boris", 21.0)).unwrap_err();
        match err {
            Error::CapacityOverload(o) => {
                assert_eq!(o.capacity, 50.0);
                assert_eq!(o.current_load, 30.0);
                assert_eq!(o.cargo_weight, 21.0);
                assert_eq!(o.vehicle_id, v.id().as_uuid());
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(v.current_load().to_bits(), before_load.to_bits());
        assert_eq!(v.client_names(), before_names);
    }

    #[test]
    fn test_zero_capacity_accepts_zero_weight_only() {
        let mut v = Vehicle::plain(0.0).unwrap();
        assert!(v.load_cargo(&client("Anna", 0.0)).is_ok());
        assert!(v.load_cargo(&client("Boris", 0.1)).is_err());
        assert_eq!(v.utilization(), 0.0);
    }

    #[test]
    fn test_load_matches_sum_after_many_loads() {
        let weights = [0.1, 0.2, 0.3, 1.7, 2.25, 0.05, 3.3, 0.0, 9.99];
        let mut v = Vehicle::plain(1000.0).unwrap();
        for (i, w) in weights.iter().enumerate() {
            v.load_cargo(&client(&format!("c{i}"), *w)).unwrap();
            assert_eq!(v.current_load(), v.loaded_weight());
            assert!(v.current_load() <= v.capacity());
        }
    }

    #[test]
    fn test_failed_loads_never_drift() {
        let mut v = Vehicle::airplane(10.0, 9000).unwrap();
        for (i, w) in [4.0, 7.0, 3.0, 5.0, 2.5, 0.5].iter().enumerate() {
            let _ = v.load_cargo(&client(&format!("c{i}"), *w));
            assert_eq!(v.current_load(), v.loaded_weight());
            assert!(v.current_load() <= v.capacity());
        }
        assert_eq!(v.current_load(), 10.0);
    }

    #[test]
    fn test_clear_cargo() {
        let mut v = Vehicle::plain(10.0).unwrap();
        v.load_cargo(&client("Anna", 4.0)).unwrap();
        v.clear_cargo();
        assert_eq!(v.current_load(), 0.0);
        assert!(v.clients().is_empty());
        assert!(v.load_cargo(&client("Boris", 10.0)).is_ok());
    }

    #[test]
    fn test_utilization() {
        let mut v = Vehicle::plain(40.0).unwrap();
        v.load_cargo(&client("Anna", 10.0)).unwrap();
        assert!((v.utilization() - 0.25).abs() < 1e-9);
    }
}
