//! Repository trait definitions for data persistence

use freight_types::Error;

use crate::model::FleetState;

/// Storage for the persisted clients/vehicles document
pub trait StateRepository {
    /// Load the stored fleet; an absent store loads as empty
    fn load(&self) -> Result<FleetState, Error>;

    /// Overwrite the stored fleet
    fn save(&self, state: &FleetState) -> Result<(), Error>;
}
