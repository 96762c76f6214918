//! Vehicle entity and its variants

use serde::Serialize;
use uuid::Uuid;

use freight_types::{Error, Result};

use super::Client;

/// Process-unique vehicle identifier (random v4 UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VehicleId(Uuid);

impl VehicleId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vehicle variant with its variant-specific data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum VehicleKind {
    #[serde(rename = "Vehicle")]
    Plain,
    Train { number_of_cars: u32 },
    Airplane { max_altitude: u32 },
}

impl VehicleKind {
    /// Discriminator used in documents and reports
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Plain => "Vehicle",
            VehicleKind::Train { .. } => "Train",
            VehicleKind::Airplane { .. } => "Airplane",
        }
    }

    fn validate(&self) -> Result<()> {
        if let VehicleKind::Airplane { max_altitude: 0 } = self {
            return Err(Error::invalid("max_altitude must be positive"));
        }
        Ok(())
    }
}

/// A capacity-bounded carrier
///
/// `current_load` always equals the summed weight of `clients` and never
/// exceeds `capacity`. Both change only through the ledger operations
/// (`load_cargo` / `clear_cargo`).
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub(crate) id: VehicleId,
    pub(crate) kind: VehicleKind,
    pub(crate) capacity: f64,
    pub(crate) current_load: f64,
    pub(crate) clients: Vec<Client>,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, capacity: f64) -> Result<Self> {
        check_capacity(capacity)?;
        kind.validate()?;
        Ok(Self {
            id: VehicleId::generate(),
            kind,
            capacity,
            current_load: 0.0,
            clients: Vec::new(),
        })
    }

    pub fn plain(capacity: f64) -> Result<Self> {
        Self::new(VehicleKind::Plain, capacity)
    }

    pub fn train(capacity: f64, number_of_cars: u32) -> Result<Self> {
        Self::new(VehicleKind::Train { number_of_cars }, capacity)
    }

    pub fn airplane(capacity: f64, max_altitude: u32) -> Result<Self> {
        Self::new(VehicleKind::Airplane { max_altitude }, capacity)
    }

    /// Rebuild a loaded vehicle, placing each client through the ledger
    pub fn restore(kind: VehicleKind, capacity: f64, clients: Vec<Client>) -> Result<Self> {
        let mut vehicle = Self::new(kind, capacity)?;
        for client in &clients {
            vehicle.load_cargo(client).map_err(|e| match e {
                Error::CapacityOverload(o) => Error::invalid(format!(
                    "restored clients exceed capacity: {}",
                    o
                )),
                other => other,
            })?;
        }
        Ok(vehicle)
    }

    /// Copy with a new kind and capacity, keeping the id; the copy is empty
    pub fn revised(&self, kind: VehicleKind, capacity: f64) -> Result<Self> {
        check_capacity(capacity)?;
        kind.validate()?;
        Ok(Self {
            id: self.id,
            kind,
            capacity,
            current_load: 0.0,
            clients: Vec::new(),
        })
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn client_names(&self) -> Vec<&str> {
        self.clients.iter().map(|c| c.name()).collect()
    }
}

fn check_capacity(capacity: f64) -> Result<()> {
    if !capacity.is_finite() {
        return Err(Error::invalid("capacity must be number"));
    }
    if capacity < 0.0 {
        return Err(Error::invalid("capacity must be >= 0"));
    }
    Ok(())
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Current load: {}", self.current_load)?;
        write!(f, "Clients: [{}]", self.client_names().join(", "))?;
        match self.kind {
            VehicleKind::Plain => Ok(()),
            VehicleKind::Train { number_of_cars } => write!(f, "\nCars: {}", number_of_cars),
            VehicleKind::Airplane { max_altitude } => {
                write!(f, "\nMax altitude: {}", max_altitude)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_is_empty() {
        let v = Vehicle::plain(100.0).unwrap();
        assert_eq!(v.capacity(), 100.0);
        assert_eq!(v.current_load(), 0.0);
        assert!(v.clients().is_empty());
        assert_eq!(v.kind().label(), "Vehicle");
    }

    #[test]
    fn test_negative_capacity_rejected() {
        assert!(matches!(
            Vehicle::plain(-1.0).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            Vehicle::train(f64::NAN, 3).unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_airplane_altitude_must_be_positive() {
        assert!(matches!(
            Vehicle::airplane(10.0, 0).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(Vehicle::airplane(10.0, 1).is_ok());
    }

    #[test]
    fn test_train_with_zero_cars_allowed() {
        let v = Vehicle::train(10.0, 0).unwrap();
        assert_eq!(v.kind(), VehicleKind::Train { number_of_cars: 0 });
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> =
            (0..100).map(|_| Vehicle::plain(1.0).unwrap().id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_instances_do_not_share_client_lists() {
        let client = Client::new("Anna", 1.0, false).unwrap();
        let mut a = Vehicle::plain(10.0).unwrap();
        let b = Vehicle::plain(10.0).unwrap();
        a.load_cargo(&client).unwrap();
        assert_eq!(a.clients().len(), 1);
        assert!(b.clients().is_empty());
    }

    #[test]
    fn test_restore_loads_clients() {
        let clients = vec![
            Client::new("Anna", 3.0, false).unwrap(),
            Client::new("Boris", 4.0, true).unwrap(),
        ];
        let v = Vehicle::restore(VehicleKind::Plain, 10.0, clients).unwrap();
        assert_eq!(v.current_load(), 7.0);
        assert_eq!(v.client_names(), vec!["Anna", "Boris"]);
    }

    #[test]
    fn test_restore_over_capacity_rejected() {
        let clients = vec![Client::new("Anna", 11.0, false).unwrap()];
        let err = Vehicle::restore(VehicleKind::Plain, 10.0, clients).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_revised_keeps_id_and_empties_load() {
        let mut v = Vehicle::train(10.0, 2).unwrap();
        v.load_cargo(&Client::new("Anna", 5.0, false).unwrap()).unwrap();
        let edited = v
            .revised(VehicleKind::Airplane { max_altitude: 9000 }, 20.0)
            .unwrap();
        assert_eq!(edited.id(), v.id());
        assert_eq!(edited.capacity(), 20.0);
        assert_eq!(edited.current_load(), 0.0);
        assert!(v.revised(VehicleKind::Plain, -5.0).is_err());
    }

    #[test]
    fn test_display_includes_variant_field() {
        let mut train = Vehicle::train(50.0, 4).unwrap();
        train
            .load_cargo(&Client::new("Anna", 5.0, false).unwrap())
            .unwrap();
        let text = train.to_string();
        assert!(text.contains(&format!("ID: {}", train.id())));
        assert!(text.contains("Capacity: 50"));
        assert!(text.contains("Current load: 5"));
        assert!(text.contains("Clients: [Anna]"));
        assert!(text.ends_with("Cars: 4"));

        let plane = Vehicle::airplane(50.0, 12000).unwrap();
        assert!(plane.to_string().ends_with("Max altitude: 12000"));
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let json = serde_json::to_value(VehicleKind::Train { number_of_cars: 3 }).unwrap();
        assert_eq!(json["type"], "Train");
        assert_eq!(json["number_of_cars"], 3);
        let json = serde_json::to_value(VehicleKind::Plain).unwrap();
        assert_eq!(json["type"], "Vehicle");
    }
}
