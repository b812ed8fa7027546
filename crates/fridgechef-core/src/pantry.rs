//! The user's working list of ingredients.
//!
//! Names are kept in insertion order and are unique by exact string match.
//! There is no case folding or fuzzy matching: "ovos" and "Ovos" are two
//! different entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed name.
    ///
    /// Returns the stored name, or `None` when the trimmed name is empty or
    /// already present. A rejected add leaves the pantry unchanged.
    pub fn add(&mut self, name: &str) -> Option<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            tracing::debug!("rejected empty ingredient name");
            return None;
        }
        if self.contains(trimmed) {
            tracing::debug!(name = trimmed, "rejected duplicate ingredient");
            return None;
        }
        self.items.push(trimmed.to_string());
        self.items.last().map(String::as_str)
    }

    /// Remove the entry at `index`, or do nothing when out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole list, keeping the first occurrence of each name.
    pub fn replace_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.items.clear();
        for name in names {
            self.add(name.as_ref());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pantry = Pantry::new();
        pantry.replace_all(iter);
        pantry
    }
}
