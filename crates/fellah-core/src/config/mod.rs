//! Configuration domain module.
//!
//! Pure data only: the DTOs here carry configuration facts, plus the
//! TOML → DTO mapping. Reading the on-disk file is the infrastructure
//! layer's job.

pub mod app_config;

pub use app_config::{AppConfig, TimingConfig};
