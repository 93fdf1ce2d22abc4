//! # Assembly Domain
//!
//! Core types for lazily assembled, name-bound values.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value`] | Type-erased shared values |
//! | [`producer`] | Deferred callables and their declared dependencies |
//! | [`entry`] | Literal and deferred bindings |
//! | [`registry`] | Ordered, name-indexed entries with immutability rules |
//! | [`literals`] | Construction-time literal sets |
//! | [`error`] | Error and result types |

pub mod constants;
pub mod entry;
pub mod error;
pub mod literals;
pub mod producer;
pub mod registry;
pub mod value;

pub use entry::{Entry, EntryState, Origin};
pub use error::{BoxError, Error, Result};
pub use literals::Literals;
pub use producer::{NO_DEPENDENCIES, Producer, ProducerFn, TryProducerFn};
pub use registry::{Registration, Registry};
pub use value::Value;
