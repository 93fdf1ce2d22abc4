//! Registry entries

use crate::producer::Producer;
use crate::value::Value;

/// Where an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Supplied when the assembly was created
    Literal,
    /// Supplied by a registration call
    Deferred,
}

/// Resolution state of an entry
#[derive(Debug, Clone)]
pub enum EntryState {
    /// Waiting for its producer to run
    Unresolved(Producer),
    /// Holding its final value
    Resolved(Value),
}

/// A named binding in a registry
#[derive(Debug, Clone)]
pub struct Entry {
    origin: Origin,
    state: EntryState,
}

impl Entry {
    /// A literal entry, resolved from creation
    pub fn literal(value: Value) -> Self {
        Self {
            origin: Origin::Literal,
            state: EntryState::Resolved(value),
        }
    }

    /// A deferred entry waiting on `producer`
    pub fn deferred(producer: Producer) -> Self {
        Self {
            origin: Origin::Deferred,
            state: EntryState::Unresolved(producer),
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn state(&self) -> &EntryState {
        &self.state
    }

    /// Literal and resolved entries can no longer be replaced
    pub fn is_immutable(&self) -> bool {
        self.origin == Origin::Literal || self.is_resolved()
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, EntryState::Resolved(_))
    }

    /// The resolved value, if any
    pub fn value(&self) -> Option<&Value> {
        match &self.state {
            EntryState::Resolved(value) => Some(value),
            EntryState::Unresolved(_) => None,
        }
    }

    /// The pending producer, if any
    pub fn producer(&self) -> Option<&Producer> {
        match &self.state {
            EntryState::Unresolved(producer) => Some(producer),
            EntryState::Resolved(_) => None,
        }
    }

    /// Move to the resolved state.
    ///
    /// Returns `false` and leaves the entry untouched if it was already resolved.
    pub fn settle(&mut self, value: Value) -> bool {
        if self.is_resolved() {
            return false;
        }
        self.state = EntryState::Resolved(value);
        true
    }
}
