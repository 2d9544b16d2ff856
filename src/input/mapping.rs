//! The ordered variable mapping handed to the template engine.

use crate::error::{Result, TwigcError};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Legal template variable names.
///
/// ASCII letters or underscore first, then letters, digits or underscore.
/// Any character from U+007F upwards is accepted in every position, so
/// non-ASCII identifiers pass.
static VARIABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_\x{7f}-\x{10FFFF}][a-zA-Z0-9_\x{7f}-\x{10FFFF}]*$")
        .expect("Invalid variable name regex")
});

/// Check a key against the variable name grammar.
pub fn validate_variable_name(name: &str) -> Result<()> {
    if VARIABLE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(TwigcError::UsageError(format!(
            "Illegal variable name: {}",
            name
        )))
    }
}

/// Ordered name → value pairs.
///
/// Insertion order is preserved; overwriting an existing key replaces its
/// value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VariableMapping(Map<String, Value>);

impl VariableMapping {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert or overwrite a single variable.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge another mapping on top of this one.
    pub fn merge(&mut self, other: VariableMapping) {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for VariableMapping {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VariableMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = VariableMapping::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}
