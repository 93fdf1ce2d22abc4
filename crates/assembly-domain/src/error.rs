//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a fallible producer
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for assemblies
#[derive(Error, Debug)]
pub enum Error {
    /// A producer cannot be called with the dependencies it declares
    #[error("Invalid producer for '{name}': {message}")]
    InvalidProducerKind {
        /// Entry the producer was registered under
        name: String,
        /// Why the producer was rejected
        message: String,
    },

    /// A name was referenced that the registry does not contain
    #[error("Unknown dependency '{name}'{}", required_by_suffix(.required_by.as_deref()))]
    UnknownDependency {
        /// The missing name
        name: String,
        /// The entry whose producer asked for it, if any
        required_by: Option<String>,
    },

    /// The operation is disabled for this kind of assembly
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation {
        /// Description of the rejected operation
        operation: String,
    },

    /// Resolution came back to a name that is still being resolved
    #[error("Cyclic dependency: {}", .cycle.join(" -> "))]
    CyclicDependency {
        /// The resolution path, ending with the repeated name
        cycle: Vec<String>,
    },

    /// Resolution nested deeper than the configured limit
    #[error("Dependency depth limit of {limit} exceeded while resolving '{name}'")]
    DepthExceeded {
        /// Entry that would have exceeded the limit
        name: String,
        /// Configured limit
        limit: usize,
    },

    /// A value did not have the type a producer or caller asked for
    #[error("Type mismatch for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Entry holding the value
        name: String,
        /// Requested type
        expected: &'static str,
        /// Type actually stored
        found: &'static str,
    },

    /// The entry exists but has not been assembled yet
    #[error("Entry '{name}' has not been resolved; call assemble() first")]
    NotResolved {
        /// The pending entry
        name: String,
    },

    /// Strict registration refused to touch an immutable entry
    #[error("Entry '{name}' is immutable")]
    ImmutableEntry {
        /// The immutable entry
        name: String,
    },

    /// A producer returned an error
    #[error("Producer for '{name}' failed: {source}")]
    ProducerFailed {
        /// Entry whose producer failed
        name: String,
        /// The producer's error
        #[source]
        source: BoxError,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registration and resolution errors
impl Error {
    /// Create an invalid producer error
    pub fn invalid_producer<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::InvalidProducerKind {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an unknown dependency error
    pub fn unknown_dependency<S: Into<String>>(name: S) -> Self {
        Self::UnknownDependency {
            name: name.into(),
            required_by: None,
        }
    }

    /// Create an unknown dependency error naming the entry that required it
    pub fn missing_for<S: Into<String>, R: Into<String>>(name: S, required_by: R) -> Self {
        Self::UnknownDependency {
            name: name.into(),
            required_by: Some(required_by.into()),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported<S: Into<String>>(operation: S) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    /// Create a not resolved error
    pub fn not_resolved<S: Into<String>>(name: S) -> Self {
        Self::NotResolved { name: name.into() }
    }

    /// Create an immutable entry error
    pub fn immutable<S: Into<String>>(name: S) -> Self {
        Self::ImmutableEntry { name: name.into() }
    }

    /// Wrap a producer failure
    pub fn producer_failed<S: Into<String>>(name: S, source: BoxError) -> Self {
        Self::ProducerFailed {
            name: name.into(),
            source,
        }
    }
}

// General error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

fn required_by_suffix(required_by: Option<&str>) -> String {
    required_by
        .map(|by| format!(" (required by '{by}')"))
        .unwrap_or_default()
}

impl Error {
    /// Whether the error was raised because a name is missing from the registry
    pub fn is_unknown_dependency(&self) -> bool {
        matches!(self, Self::UnknownDependency { .. })
    }

    /// Whether the error was raised by a disabled operation
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}
