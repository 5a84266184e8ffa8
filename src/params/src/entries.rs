// params/src/entries.rs

//! Insertion-ordered key/value storage for parameter sets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw string entries with unique keys, preserving insertion order.
///
/// Re-inserting an existing key replaces its value in place without
/// disturbing the original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entries {
    /// Values keyed by entry name
    values: HashMap<String, String>,
    /// Order of keys (to preserve insertion order)
    key_order: Vec<String>,
}

impl Entries {
    /// Create a new empty entry map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, preserving the position of an already-present key.
    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        if !self.values.contains_key(key) {
            self.key_order.push(key.to_string());
        }
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    /// Get all keys in insertion order.
    pub fn keys(&self) -> &[String] {
        &self.key_order
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.key_order
            .iter()
            .filter_map(move |key| self.values.get(key).map(|value| (key, value)))
    }

    /// Iterate over entries in reverse insertion order (last-inserted first).
    pub fn iter_rev(&self) -> impl Iterator<Item = (&String, &String)> {
        self.key_order
            .iter()
            .rev()
            .filter_map(move |key| self.values.get(key).map(|value| (key, value)))
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Entries
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for (key, value) in iter {
            entries.insert(key.as_ref(), value.as_ref());
        }
        entries
    }
}

/// Accumulated properties: ordered keys, each holding an ordered sequence of
/// formatted values (multiple appends per key are supported).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Value sequences keyed by property name
    values: HashMap<String, Vec<String>>,
    /// Order of keys (to preserve accumulation order)
    key_order: Vec<String>,
}

impl Properties {
    /// Create a new empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the sequence stored under `key`.
    pub fn append(&mut self, key: &str, value: String) {
        if !self.values.contains_key(key) {
            self.key_order.push(key.to_string());
        }
        self.values.entry(key.to_string()).or_default().push(value);
    }

    /// Get the value sequence for a key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(|v| v.as_slice())
    }

    /// Get all keys in accumulation order.
    pub fn keys(&self) -> &[String] {
        &self.key_order
    }

    /// Iterate over properties in accumulation order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.key_order
            .iter()
            .filter_map(move |key| self.values.get(key).map(|values| (key, values)))
    }

    /// Check if nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
