//! Construction-time literal values

use std::any::Any;

use crate::value::Value;

/// Ordered set of literals to seed an assembly with
///
/// ```ignore
/// let literals = Literals::new()
///     .with("v1", false)
///     .with("v2", String::from("foo"))
///     .with("v3", 4);
/// let assembler = Assembler::with_literals(literals);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Literals {
    values: Vec<(String, Value)>,
}

impl Literals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal
    ///
    /// A name given twice keeps its first value.
    pub fn with<K: Into<String>, T: Any + Send + Sync>(mut self, name: K, value: T) -> Self {
        self.insert(name, Value::new(value));
        self
    }

    /// Add an already wrapped literal
    pub fn insert<K: Into<String>>(&mut self, name: K, value: Value) {
        let name = name.into();
        if !self.values.iter().any(|(existing, _)| *existing == name) {
            self.values.push((name, value));
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for Literals {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Literals {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut literals = Self::new();
        for (name, value) in iter {
            literals.insert(name, value);
        }
        literals
    }
}
