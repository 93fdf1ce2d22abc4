//! # Assembly
//!
//! A fluent builder for named, mutually dependent values. Each value is
//! either a literal supplied up front or a producer that declares the names
//! it depends on. Assembling resolves producers in dependency order, calling
//! each at most once; releasing reads the results back out in whatever order
//! is asked for.
//!
//! ## Example
//!
//! ```
//! use assembly::prelude::*;
//!
//! # fn main() -> assembly::Result<()> {
//! let mut assembler = Assembler::with_literals(Literals::new().with("foo", String::from("bar")));
//! let (twice, foo) = assembler
//!     .register("dosomething", ["foo"], |foo: &String| format!("{foo}{foo}"))?
//!     .assemble()?
//!     .release_into::<(String, String)>(&["dosomething", "foo"])?;
//!
//! assert_eq!(twice.as_str(), "barbar");
//! assert_eq!(foo.as_str(), "bar");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - values, producers, entries, the registry and errors
//! - `application` - resolver, assembler, comprehension and the shared singleton
//! - `infrastructure` - configuration and logging

/// Domain layer - values, producers, registry and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use assembly_domain::*;
}

/// Application layer - assembler surfaces and resolution
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use assembly_application::*;
}

/// Infrastructure layer - configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use assembly_infrastructure::*;
}

/// Commonly used types
pub mod prelude {
    pub use assembly_application::{Assembler, AssemblerOptions, Comprehension};
    pub use assembly_domain::{Error, Literals, NO_DEPENDENCIES, Producer, Result, Value};
}

// Re-export commonly used types at the crate root
pub use application::{
    Assembler, AssemblerOptions, Comprehension, ResolutionReport, Resolver, singleton,
};
pub use domain::{Error, Literals, NO_DEPENDENCIES, Producer, Result, Value};

use assembly_infrastructure::{AppConfig, ConfigLoader, init_logging};

/// Load configuration and install logging
///
/// Returns the loaded configuration; use [`AppConfig::assembler`] to build
/// assemblers with the configured options.
pub fn bootstrap(loader: &ConfigLoader) -> Result<AppConfig> {
    let config = loader.load()?;
    init_logging(&config.logging)?;
    Ok(config)
}
