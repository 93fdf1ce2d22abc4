//! Configuration
//!
//! Defaults, then an optional TOML file, then `ASSEMBLY_`-prefixed
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig};
