//! Infrastructure layer - persistence implementations, loaders

pub mod fleet_seed_loader;
pub mod persistence;
