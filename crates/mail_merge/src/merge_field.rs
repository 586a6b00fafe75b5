//! Placeholder tokens and the token → value map

use serde::{Deserialize, Serialize};

/// The fixed markers a badge template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    Name1,
    Company1,
    Name2,
    Company2,
}

impl Placeholder {
    /// All placeholders in substitution order
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Name1,
        Placeholder::Company1,
        Placeholder::Name2,
        Placeholder::Company2,
    ];

    /// The literal marker as it appears in the template
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name1 => "{{NAME1}}",
            Placeholder::Company1 => "{{COMPANY1}}",
            Placeholder::Name2 => "{{NAME2}}",
            Placeholder::Company2 => "{{COMPANY2}}",
        }
    }
}

/// Ordered token → replacement mapping
///
/// Replacement runs in insertion order, so a value containing a later
/// entry's token is substituted again by that entry. Keeping tokens out of
/// values is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a token, keeping its original position if present
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    /// Set the value for one of the fixed placeholders
    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.insert(placeholder.token(), value);
    }

    /// Value bound to a token
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in substitution order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any token occurs in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.entries.iter().any(|(t, _)| !t.is_empty() && text.contains(t.as_str()))
    }

    /// Replace every occurrence of every token, in map order
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (token, value) in &self.entries {
            if token.is_empty() || !out.contains(token.as_str()) {
                continue;
            }
            out = out.replace(token.as_str(), value);
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlaceholderMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (token, value) in iter {
            map.insert(token, value);
        }
        map
    }
}
