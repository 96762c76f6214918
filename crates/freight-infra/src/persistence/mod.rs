//! Persistence implementations
//!
//! File-based implementation of the state repository and the document schema
//! it reads and writes.

mod file_state_repo;
mod state_document;

pub use file_state_repo::FileStateRepository;
pub use state_document::{ClientRecord, StateDocument, VehicleRecord};
