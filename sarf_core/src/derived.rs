//! Per-root registry of generated words.

use serde::{Deserialize, Serialize};

/// A surface form produced from a root, with the pattern that produced it
/// and how many times it has been generated or recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedWordEntry {
    pub word: String,
    pub pattern: String,
    pub frequency: u32,
}

/// Derived words of one root, unique by word text, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedWordList {
    entries: Vec<DerivedWordEntry>,
}

impl DerivedWordList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `word`. A word already present keeps its original pattern and
    /// has its frequency bumped. Returns the frequency after recording.
    pub fn record(&mut self, word: &str, pattern: &str) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.word == word) {
            entry.frequency = entry.frequency.saturating_add(1);
            return entry.frequency;
        }
        self.entries.push(DerivedWordEntry {
            word: word.to_string(),
            pattern: pattern.to_string(),
            frequency: 1,
        });
        1
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&DerivedWordEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DerivedWordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DerivedWordList {
    type Item = &'a DerivedWordEntry;
    type IntoIter = std::slice::Iter<'a, DerivedWordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
