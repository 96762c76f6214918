//! Application service layer - use cases, config, validation, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
pub mod validation;
