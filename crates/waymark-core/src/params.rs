//! Captured path parameters.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered string-to-string map of captured path parameters.
///
/// Entries keep first-insertion order; inserting a name that is already
/// present replaces its value in place, so the last write wins without
/// reordering. Lookups scan linearly, which is the right trade for the
/// handful of parameters a route can carry.
///
/// # Example
///
/// ```
/// use waymark_core::PathParams;
///
/// let mut params = PathParams::new();
/// params.insert("action", "hello");
/// params.insert("username", "world");
/// assert_eq!(params.get("action"), Some("hello"));
///
/// params.insert("action", "bye");
/// let entries: Vec<_> = params.iter().collect();
/// assert_eq!(entries, [("action", "bye"), ("username", "world")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries, keeping the allocation for reuse across
    /// requests.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for PathParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
