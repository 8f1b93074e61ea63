//! Properties mapping
//!
//! String-to-string mapping produced by parsing a `.properties` source and by
//! merging layers. Keys iterate in sorted order so diagnostics and output are
//! deterministic.

use crate::error::PropertyError;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub mod parser;

pub use parser::MalformedLine;

/// Key/value mapping with last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `.properties` text. Malformed lines are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        Self::parse_from(text, "<inline>")
    }

    /// Parse text read from `location`, which is only used for diagnostics.
    pub(crate) fn parse_from(text: &str, location: &str) -> Self {
        let mut properties = Self::new();
        for entry in parser::parse_entries(text) {
            match entry {
                Ok((key, value)) => {
                    properties.insert(key, value);
                }
                Err(malformed) => {
                    warn!(
                        location = location,
                        line = malformed.line,
                        reason = %malformed.reason,
                        "Skipping malformed property line"
                    );
                }
            }
        }
        properties
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse the value for `key` into `T`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, PropertyError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => value
                .parse::<T>()
                .map(Some)
                .map_err(|e| PropertyError::InvalidValue {
                    key: key.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copy every entry of `other` over this mapping.
    pub fn merge(&mut self, other: &Properties) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// One `key = value` line per entry, keys padded to a common width.
    pub fn render_aligned(&self) -> String {
        let width = self
            .entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        self.entries
            .iter()
            .map(|(key, value)| format!("{:<width$} = {}", key, value, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_aligned())
    }
}

/// Iterator over `(key, value)` pairs in key order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}
