//! Domain services

pub mod allocator;
pub mod ledger;

pub use allocator::{allocate, AllocationOutcome, Placement, UnassignedClient};
