//! For-comprehension
//!
//! A comprehension is an assembler meant to be run once and read: it cannot
//! be shared process-wide or merged with another assembly. [`Comprehension::fyield`]
//! assembles and releases in one call.
//!
//! ```ignore
//! let total = Comprehension::create()
//!     .register("a", NO_DEPENDENCIES, || 2)?
//!     .register("b", ["a"], |a: &i32| a * 21)?
//!     .fyield_as::<i32>("b")?;
//! assert_eq!(*total, 42);
//! ```

use std::any::Any;
use std::sync::{Arc, Mutex};

use assembly_domain::constants::{OP_MERGE, OP_SINGLETON};
use assembly_domain::{Error, Producer, ProducerFn, Result, TryProducerFn, Value};

use crate::assembler::Assembler;
use crate::extract::Extract;
use crate::options::AssemblerOptions;

/// A self-contained, non-shareable assembly
#[derive(Debug, Clone, Default)]
pub struct Comprehension {
    inner: Assembler,
}

impl Comprehension {
    pub fn create() -> Self {
        Self::default()
    }

    /// A comprehension seeded with immutable literals
    pub fn with_literals<I, K>(literals: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            inner: Assembler::with_literals(literals),
        }
    }

    /// Replace the options
    pub fn with_options(self, options: AssemblerOptions) -> Self {
        Self {
            inner: self.inner.with_options(options),
        }
    }

    /// Always fails: a comprehension is never shared process-wide
    pub fn get<I, K>(_literals: I) -> Result<&'static Mutex<Assembler>>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Err(Error::unsupported(OP_SINGLETON))
    }

    /// Always fails: a comprehension's bindings are self-contained
    pub fn merge(&self, _other: &Assembler) -> Result<Assembler> {
        Err(Error::unsupported(OP_MERGE))
    }

    /// See [`Assembler::register`]
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
        self.inner.register(name, dependencies, producer)?;
        Ok(self)
    }

    /// See [`Assembler::try_register`]
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
        self.inner.try_register(name, dependencies, producer)?;
        Ok(self)
    }

    /// See [`Assembler::register_producer`]
    pub fn register_producer(&mut self, name: &str, producer: Producer) -> Result<&mut Self> {
        self.inner.register_producer(name, producer)?;
        Ok(self)
    }

    pub fn assemble(&mut self) -> Result<&mut Self> {
        self.inner.assemble()?;
        Ok(self)
    }

    pub fn release(&self, name: &str) -> Result<Value> {
        self.inner.release(name)
    }

    pub fn release_all<I, S>(&self, names: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.release_all(names)
    }

    /// Assemble, then release `name`
    pub fn fyield(&mut self, name: &str) -> Result<Value> {
        self.inner.assemble()?;
        self.inner.release(name)
    }

    /// Assemble, then release `names` in the order given
    pub fn fyield_all<I, S>(&mut self, names: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.assemble()?;
        self.inner.release_all(names)
    }

    /// Assemble, then release `name` as a `T`
    pub fn fyield_as<T: Any + Send + Sync>(&mut self, name: &str) -> Result<Arc<T>> {
        self.inner.assemble()?;
        self.inner.release_as::<T>(name)
    }

    /// Assemble, then release `names` as a typed tuple
    pub fn fyield_into<T: Extract>(&mut self, names: &[&str]) -> Result<T::Output> {
        self.inner.assemble()?;
        self.inner.release_into::<T>(names)
    }

    /// The underlying assembler
    pub fn as_assembler(&self) -> &Assembler {
        &self.inner
    }
}
