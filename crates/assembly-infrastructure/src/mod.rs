//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for Assembly.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`constants`] | Configuration and logging constants |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
