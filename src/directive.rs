//! # Directives and Metadata
//!
//! Finds `{key: value}` directives anywhere in a document and collects them
//! into an ordered key/value map.
//!
//! ## Matching
//! ```text
//! '{' ws* key ws* ':' ws* value ws* '}'
//! key   := one or more characters other than ':' and '}'
//! value := any characters other than '}' (may be empty)
//! ```
//! The scan is global, so a directive can sit mid-line next to lyrics. Text
//! that misses the pattern (`{title Test}`, `{key: C` without a closing brace)
//! is not a directive and is simply skipped.
//!
//! ## Duplicates
//! Keys are lowercased. When a key repeats, the later value replaces the
//! earlier one but the key keeps the position where it was first seen.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\s*([^:}]+?)\s*:\s*([^}]*?)\s*\}").expect("directive pattern is valid")
});

/// One `{key: value}` occurrence, key lowercased and both sides trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub key: String,
    pub value: String,
}

/// Ordered key/value metadata for a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: IndexMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    ///
    /// Returns the value that was replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> IndexMap<String, String> {
        self.entries
    }

    /// `title`, or its short form `t`
    pub fn title(&self) -> Option<&str> {
        self.get("title").or_else(|| self.get("t"))
    }

    /// `subtitle`, or its short form `st`
    pub fn subtitle(&self) -> Option<&str> {
        self.get("subtitle").or_else(|| self.get("st"))
    }

    pub fn artist(&self) -> Option<&str> {
        self.get("artist")
    }

    pub fn key(&self) -> Option<&str> {
        self.get("key")
    }

    /// Capo fret, if the directive holds a number
    pub fn capo(&self) -> Option<u8> {
        self.get("capo").and_then(|v| v.parse().ok())
    }

    /// Tempo in BPM, if the directive holds a number
    pub fn tempo(&self) -> Option<u32> {
        self.get("tempo").and_then(|v| v.parse().ok())
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Every directive in `text`, in document order, duplicates included.
pub fn directives(text: &str) -> Vec<Directive> {
    DIRECTIVE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().trim().to_lowercase();
            let value = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            if key.is_empty() {
                log::debug!("skipping directive with blank key: {:?}", &caps[0]);
                return None;
            }
            Some(Directive { key, value })
        })
        .collect()
}

/// Collect a document's directives into ordered metadata (last value wins).
///
/// # Examples
/// ```
/// use chordsheet::extract_meta;
///
/// let meta = extract_meta("{key: C}{title: My Song}");
/// assert_eq!(meta.get("key"), Some("C"));
/// assert_eq!(meta.title(), Some("My Song"));
/// assert_eq!(meta.len(), 2);
/// ```
pub fn extract_meta(text: &str) -> Metadata {
    let mut meta = Metadata::new();
    for Directive { key, value } in directives(text) {
        if let Some(previous) = meta.get(&key) {
            log::debug!("directive {:?} redefined: {:?} -> {:?}", key, previous, value);
        }
        meta.insert(key, value);
    }
    meta
}
