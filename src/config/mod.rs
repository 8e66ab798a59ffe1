/// Configuration module - Load and validate shred configuration
pub mod schema;
pub mod loader;

pub use schema::{Config, LogFormat};
pub use loader::{load_config, load_config_from};
