//! Deferred producers
//!
//! A producer is a callable paired with the ordered names of the entries it
//! depends on. When the resolver has values for every declared name it calls
//! the producer positionally, in declaration order.
//!
//! ```ignore
//! let producer = Producer::new(["var1", "var2"], |var1: &i32, var2: &i32| var1 * 10 + var2);
//! assert_eq!(producer.dependencies(), ["var1", "var2"]);
//! ```
//!
//! Any closure of arity 0..=8 whose parameters are references to
//! `Send + Sync + 'static` types can be used. Fallible closures returning
//! `Result<R, E>` go through [`Producer::try_new`] so their errors surface
//! as [`Error::ProducerFailed`].

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, Error, Result};
use crate::value::Value;

/// Dependency list for producers that take no arguments
pub const NO_DEPENDENCIES: [&str; 0] = [];

/// Why an erased call could not produce a value
#[derive(Debug)]
pub enum Fault {
    /// Argument at `index` did not downcast to the parameter type
    Argument {
        /// Position in the declared dependency list
        index: usize,
        /// Parameter type the closure expects
        expected: &'static str,
    },
    /// Fewer arguments than the closure takes
    Arity {
        /// Arguments the closure takes
        expected: usize,
        /// Arguments supplied
        found: usize,
    },
    /// The producer itself returned an error
    Failed(BoxError),
}

/// Closures usable as infallible producers
///
/// `Args` is a marker tuple of the parameter types; it lets one closure type
/// be matched against the right arity without annotations at the call site.
pub trait ProducerFn<Args>: Send + Sync + 'static {
    /// Number of parameters the closure takes
    const ARITY: usize;

    /// Call the closure with erased arguments
    fn produce(&self, args: &[Value]) -> std::result::Result<Value, Fault>;
}

/// Closures usable as fallible producers
pub trait TryProducerFn<Args>: Send + Sync + 'static {
    /// Number of parameters the closure takes
    const ARITY: usize;

    /// Call the closure with erased arguments
    fn try_produce(&self, args: &[Value]) -> std::result::Result<Value, Fault>;
}

fn argument<'a, T: Any>(args: &'a [Value], index: usize) -> std::result::Result<&'a T, Fault> {
    args.get(index)
        .ok_or(Fault::Arity {
            expected: index + 1,
            found: args.len(),
        })?
        .downcast_ref::<T>()
        .ok_or(Fault::Argument {
            index,
            expected: type_name::<T>(),
        })
}

macro_rules! one {
    ($arg:ident) => {
        1
    };
}

macro_rules! impl_producer_fn {
    ($($arg:ident => $index:tt),*) => {
        impl<F, R, $($arg,)*> ProducerFn<($($arg,)*)> for F
        where
            F: Fn($(&$arg),*) -> R + Send + Sync + 'static,
            R: Any + Send + Sync,
            $($arg: Any + Send + Sync,)*
        {
            const ARITY: usize = 0 $(+ one!($arg))*;

            #[allow(non_snake_case, unused_variables)]
            fn produce(&self, args: &[Value]) -> std::result::Result<Value, Fault> {
                $(let $arg = argument::<$arg>(args, $index)?;)*
                Ok(Value::new((self)($($arg),*)))
            }
        }

        impl<F, R, E, $($arg,)*> TryProducerFn<($($arg,)*)> for F
        where
            F: Fn($(&$arg),*) -> std::result::Result<R, E> + Send + Sync + 'static,
            R: Any + Send + Sync,
            E: Into<BoxError>,
            $($arg: Any + Send + Sync,)*
        {
            const ARITY: usize = 0 $(+ one!($arg))*;

            #[allow(non_snake_case, unused_variables)]
            fn try_produce(&self, args: &[Value]) -> std::result::Result<Value, Fault> {
                $(let $arg = argument::<$arg>(args, $index)?;)*
                (self)($($arg),*)
                    .map(Value::new)
                    .map_err(|e| Fault::Failed(e.into()))
            }
        }
    };
}

impl_producer_fn!();
impl_producer_fn!(A => 0);
impl_producer_fn!(A => 0, B => 1);
impl_producer_fn!(A => 0, B => 1, C => 2);
impl_producer_fn!(A => 0, B => 1, C => 2, D => 3);
impl_producer_fn!(A => 0, B => 1, C => 2, D => 3, E1 => 4);
impl_producer_fn!(A => 0, B => 1, C => 2, D => 3, E1 => 4, G => 5);
impl_producer_fn!(A => 0, B => 1, C => 2, D => 3, E1 => 4, G => 5, H => 6);
impl_producer_fn!(A => 0, B => 1, C => 2, D => 3, E1 => 4, G => 5, H => 6, I => 7);

type ErasedFn = dyn Fn(&[Value]) -> std::result::Result<Value, Fault> + Send + Sync;

/// A deferred computation and the names it depends on
///
/// Cloning a producer shares the underlying closure.
#[derive(Clone)]
pub struct Producer {
    dependencies: Vec<String>,
    arity: usize,
    call: Arc<ErasedFn>,
}

impl Producer {
    /// Build a producer from an infallible closure
    pub fn new<I, S, Args, F>(dependencies: I, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: ProducerFn<Args>,
    {
        Self {
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            arity: F::ARITY,
            call: Arc::new(move |args: &[Value]| f.produce(args)),
        }
    }

    /// Build a producer from a closure returning `Result`
    pub fn try_new<I, S, Args, F>(dependencies: I, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: TryProducerFn<Args>,
    {
        Self {
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            arity: F::ARITY,
            call: Arc::new(move |args: &[Value]| f.try_produce(args)),
        }
    }

    /// Build a producer that receives its arguments untyped
    ///
    /// The closure is trusted to accept exactly as many values as there are
    /// dependency names.
    pub fn from_values<I, S, F>(dependencies: I, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&[Value]) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
    {
        let dependencies: Vec<String> = dependencies.into_iter().map(Into::into).collect();
        Self {
            arity: dependencies.len(),
            dependencies,
            call: Arc::new(move |args: &[Value]| f(args).map_err(Fault::Failed)),
        }
    }

    /// Names this producer depends on, in parameter order
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Number of parameters the callable takes
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Check the callable can take the declared dependencies
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.arity != self.dependencies.len() {
            return Err(Error::invalid_producer(
                name,
                format!(
                    "callable takes {} argument(s) but {} dependenc{} declared",
                    self.arity,
                    self.dependencies.len(),
                    if self.dependencies.len() == 1 { "y is" } else { "ies are" }
                ),
            ));
        }
        if let Some(empty) = self.dependencies.iter().position(String::is_empty) {
            return Err(Error::invalid_producer(
                name,
                format!("dependency #{empty} has an empty name"),
            ));
        }
        Ok(())
    }

    /// Invoke the producer for entry `name` with resolved arguments
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value> {
        (self.call)(args).map_err(|fault| match fault {
            Fault::Argument { index, expected } => Error::TypeMismatch {
                name: self.dependencies.get(index).cloned().unwrap_or_default(),
                expected,
                found: args.get(index).map_or("<missing>", Value::type_name),
            },
            Fault::Arity { expected, found } => Error::invalid_producer(
                name,
                format!("callable needs {expected} argument(s), got {found}"),
            ),
            Fault::Failed(source) => Error::producer_failed(name, source),
        })
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("dependencies", &self.dependencies)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
