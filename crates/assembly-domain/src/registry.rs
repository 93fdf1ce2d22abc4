//! Ordered entry registry
//!
//! Holds the entries of one assembly, keyed by name and kept in insertion
//! order. Order only decides which pending entry is resolved first; lookups
//! during resolution are always by name.

use indexmap::IndexMap;
use indexmap::map::Entry as Slot;
use tracing::{debug, trace};

use crate::entry::{Entry, EntryState};
use crate::error::{Error, Result};
use crate::producer::Producer;
use crate::value::Value;

/// Outcome of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new deferred entry was added
    Inserted,
    /// A pending deferred entry was replaced
    Replaced,
    /// The name is immutable; the registry was left unchanged
    Ignored,
}

/// Name-indexed, insertion-ordered entries
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from construction-time literals
    pub fn from_literals<I, K>(literals: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let entries = literals
            .into_iter()
            .map(|(name, value)| (name.into(), Entry::literal(value)))
            .collect();
        Self { entries }
    }

    /// Register a producer under `name`
    ///
    /// Immutable names are left as they are. Anything else is inserted, or
    /// replaced if it was still pending.
    ///
    /// The producer is validated before the name is looked at, so a producer
    /// whose arity does not match its dependencies fails with
    /// [`Error::InvalidProducerKind`] even under an immutable name. Only a
    /// well-formed producer is silently ignored there.
    pub fn register(&mut self, name: &str, producer: Producer) -> Result<Registration> {
        if name.is_empty() {
            return Err(Error::invalid_argument("entry name cannot be empty"));
        }
        producer.validate(name)?;

        match self.entries.entry(name.to_string()) {
            Slot::Occupied(slot) if slot.get().is_immutable() => {
                debug!(entry = name, "Ignoring registration of immutable entry");
                Ok(Registration::Ignored)
            }
            Slot::Occupied(mut slot) => {
                trace!(entry = name, "Replacing pending producer");
                slot.insert(Entry::deferred(producer));
                Ok(Registration::Replaced)
            }
            Slot::Vacant(slot) => {
                trace!(entry = name, dependencies = ?producer.dependencies(), "Registered producer");
                slot.insert(Entry::deferred(producer));
                Ok(Registration::Inserted)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether `name` exists and can no longer be replaced
    pub fn is_immutable(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(Entry::is_immutable)
    }

    /// Resolved value of `name`
    pub fn value(&self, name: &str) -> Result<&Value> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| Error::unknown_dependency(name))?;
        entry.value().ok_or_else(|| Error::not_resolved(name))
    }

    /// Store the resolved value of a pending entry
    pub fn settle(&mut self, name: &str, value: Value) -> Result<()> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| Error::unknown_dependency(name))?;
        if !entry.settle(value) {
            return Err(Error::internal(format!("entry '{name}' was resolved twice")));
        }
        Ok(())
    }

    /// Names of entries still waiting on their producer, in insertion order
    pub fn pending(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry.state(), EntryState::Unresolved(_)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Entry names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Left-biased union
    ///
    /// Every entry of `self` is kept as is, in its original order. Entries
    /// of `other` are appended only when their name is not already taken;
    /// colliding entries of `other` are dropped, even when `self`'s entry
    /// is still pending.
    pub fn merge(&self, other: &Registry) -> Registry {
        let mut entries = self.entries.clone();
        for (name, entry) in &other.entries {
            if !entries.contains_key(name) {
                entries.insert(name.clone(), entry.clone());
            }
        }
        Registry { entries }
    }
}
