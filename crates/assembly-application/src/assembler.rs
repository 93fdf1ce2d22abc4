//! Fluent assembler
//!
//! ```ignore
//! let mut assembler = Assembler::create();
//! let (v1, v3) = assembler
//!     .register("var1", NO_DEPENDENCIES, || 1)?
//!     .register("var2", ["var1"], |var1: &i32| 2 + var1)?
//!     .register("var3", ["var1", "var2"], |var1: &i32, var2: &i32| var1 * 10 + var2)?
//!     .assemble()?
//!     .release_into::<(i32, i32)>(&["var1", "var3"])?;
//! assert_eq!((*v1, *v3), (1, 13));
//! ```

use std::any::Any;
use std::sync::{Arc, Mutex};

use assembly_domain::{
    Error, Producer, ProducerFn, Registration, Registry, Result, TryProducerFn, Value,
};
use tracing::debug;

use crate::extract::{Extract, downcast};
use crate::options::AssemblerOptions;
use crate::resolver::{ResolutionReport, Resolver};
use crate::singleton;

/// A set of named, lazily produced values
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    registry: Registry,
    options: AssemblerOptions,
}

impl Assembler {
    /// An empty assembler
    pub fn create() -> Self {
        Self::default()
    }

    /// An assembler seeded with immutable literals
    pub fn with_literals<I, K>(literals: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            registry: Registry::from_literals(literals),
            options: AssemblerOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: AssemblerOptions) -> Self {
        self.options = options;
        self
    }

    /// The process-wide assembler
    ///
    /// See [`singleton::get`].
    pub fn get<I, K>(literals: I) -> &'static Mutex<Assembler>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        singleton::get(literals)
    }

    pub fn options(&self) -> AssemblerOptions {
        self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register an infallible producer depending on `dependencies`
    pub fn register<I, S, Args, F>(
        &mut self,
        name: &str,
        dependencies: I,
        producer: F,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: ProducerFn<Args>,
    {
        self.register_producer(name, Producer::new(dependencies, producer))
    }

    /// Register a producer returning `Result`
    pub fn try_register<I, S, Args, F>(
        &mut self,
        name: &str,
        dependencies: I,
        producer: F,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: TryProducerFn<Args>,
    {
        self.register_producer(name, Producer::try_new(dependencies, producer))
    }

    /// Register a prepared producer
    ///
    /// A name that is already immutable keeps its entry. With strict
    /// registration enabled that is reported as [`Error::ImmutableEntry`].
    pub fn register_producer(&mut self, name: &str, producer: Producer) -> Result<&mut Self> {
        let outcome = self.registry.register(name, producer)?;
        if outcome == Registration::Ignored && self.options.strict_registration {
            return Err(Error::immutable(name));
        }
        Ok(self)
    }

    /// Resolve every pending entry
    pub fn assemble(&mut self) -> Result<&mut Self> {
        self.assemble_with_report()?;
        Ok(self)
    }

    /// Resolve every pending entry and report what ran
    pub fn assemble_with_report(&mut self) -> Result<ResolutionReport> {
        Resolver::new(&mut self.registry, self.options).resolve_all()
    }

    /// Release one resolved value
    pub fn release(&self, name: &str) -> Result<Value> {
        self.registry.value(name).cloned()
    }

    /// Release several resolved values, in the order asked for
    pub fn release_all<I, S>(&self, names: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.release(name.as_ref()))
            .collect()
    }

    /// Release one resolved value as a `T`
    pub fn release_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        downcast::<T>(name, self.registry.value(name)?)
    }

    /// Release several resolved values as a typed tuple
    ///
    /// `release_into::<(i32, String)>(&["count", "label"])` yields
    /// `(Arc<i32>, Arc<String>)`.
    pub fn release_into<T: Extract>(&self, names: &[&str]) -> Result<T::Output> {
        let values = self.release_all(names)?;
        T::extract(names, &values)
    }

    /// Left-biased union with `other`
    ///
    /// Neither source is changed and the result shares no mutable state
    /// with them. The options of `self` are kept.
    pub fn merge(&self, other: &Assembler) -> Assembler {
        debug!(
            left = self.registry.len(),
            right = other.registry.len(),
            "Merging assemblies"
        );
        Assembler {
            registry: self.registry.merge(&other.registry),
            options: self.options,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Whether `name` exists and holds its final value
    pub fn is_resolved(&self, name: &str) -> bool {
        self.registry.get(name).is_some_and(|entry| entry.is_resolved())
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
