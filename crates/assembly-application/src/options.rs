//! Assembler options

use serde::{Deserialize, Serialize};

/// Tunables for registration and resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerOptions {
    /// Deepest chain of pending producers one resolution may walk
    ///
    /// Unbounded when `None`; cycles are caught regardless.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Fail instead of silently ignoring registrations over immutable names
    pub strict_registration: bool,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            strict_registration: false,
        }
    }
}

impl AssemblerOptions {
    /// Bound the depth of a single resolution walk
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Enable or disable strict registration
    pub fn with_strict_registration(mut self, strict: bool) -> Self {
        self.strict_registration = strict;
        self
    }
}
