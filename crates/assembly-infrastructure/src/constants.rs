//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `assembly_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "assembly.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "assembly";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ASSEMBLY";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a log filter directive
pub const LOG_FILTER_ENV: &str = "ASSEMBLY_LOG";

/// Log file name stem used when a log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "assembly";
