//! Configuration types

use std::path::PathBuf;

use assembly_application::{Assembler, AssemblerOptions, Comprehension};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Registration and resolution options
    pub resolution: AssemblerOptions,
}

impl AppConfig {
    /// An empty assembler using the configured options
    pub fn assembler(&self) -> Assembler {
        Assembler::create().with_options(self.resolution)
    }

    /// An empty comprehension using the configured options
    pub fn comprehension(&self) -> Comprehension {
        Comprehension::create().with_options(self.resolution)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
