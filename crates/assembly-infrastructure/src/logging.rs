//! Subscriber setup for assembly diagnostics
//!
//! The assembly crates only emit events; nothing is printed until
//! [`init_logging`] installs a subscriber. What they emit, by level:
//!
//! | Level | Target | Event |
//! |-------|--------|-------|
//! | `trace` | `assembly_domain::registry` | producer registered or replaced, with its dependency names |
//! | `trace` | `assembly_application::resolver` | memoized value reused by a dependent |
//! | `debug` | `assembly_domain::registry` | registration ignored because the name is immutable |
//! | `debug` | `assembly_application::resolver` | pass start and end counts, each producer invocation |
//! | `debug` | `assembly_application::{assembler,singleton}` | merges, shared assembler creation |
//! | `info` / `warn` | `assembly_infrastructure` | configuration file loaded or missing |
//!
//! `ASSEMBLY_LOG=assembly_application::resolver=debug` narrows output to
//! resolution alone.

use std::path::Path;

use assembly_domain::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use tracing::{Level, info, warn};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`
///
/// Events go to stdout, and also to a daily rolling file when
/// `file_output` is set; both use JSON when `json_format` is on. A filter
/// directive in `ASSEMBLY_LOG` takes precedence over `level`. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    Registry::default()
        .with(output_layers(config))
        .with(filter)
        .try_init()
        .map_err(|e| Error::configuration_with_source("Failed to install tracing subscriber", e))?;

    info!(%level, json = config.json_format, "Assembly logging enabled");
    Ok(())
}

fn output_layers(config: &LoggingConfig) -> Vec<OutputLayer> {
    let stdout = fmt::layer().with_target(true);
    let mut layers = vec![if config.json_format {
        stdout.json().boxed()
    } else {
        stdout.boxed()
    }];

    if let Some(path) = &config.file_output {
        let file = fmt::layer()
            .with_writer(daily_file(path))
            .with_ansi(false)
            .with_target(true);
        layers.push(if config.json_format {
            file.json().boxed()
        } else {
            file.boxed()
        });
    }
    layers
}

/// Daily rolling appender next to `path`, named after its stem
fn daily_file(path: &Path) -> RollingFileAppender {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_STEM));
    rolling::daily(dir, stem)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
