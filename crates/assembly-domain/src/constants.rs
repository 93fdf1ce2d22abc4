//! Domain constants

/// Operation name reported when a comprehension is asked for the singleton
pub const OP_SINGLETON: &str = "singleton access on a comprehension";

/// Operation name reported when a comprehension is asked to merge
pub const OP_MERGE: &str = "merge of a comprehension";
