//! Configuration management for nratakit

pub mod loader;
mod schema;

pub use loader::{init_config, load_config, load_config_from_path};
pub use schema::*;
