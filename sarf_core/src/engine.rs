//! The morphology engine: roots, patterns and the operations between them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::derived::DerivedWordList;
use crate::error::{EngineError, RootError};
use crate::index::{self, RootEntry, RootIndex};
use crate::pattern::{self, Pattern, PatternStore, PatternTableOptions};
use crate::root::{Root, RootKey};
use crate::transform::{self, LiteralMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    #[serde(default)]
    pub literal_mode: LiteralMode,
    #[serde(default)]
    pub patterns: PatternTableOptions,
}

/// Outcome of validating a word or searching for its root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub matched: bool,
    pub pattern: Option<String>,
    pub root: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn no_match() -> Self {
        Self::default()
    }

    fn found(pattern: &Pattern, root: &Root) -> Self {
        Self {
            matched: true,
            pattern: Some(pattern.name().to_string()),
            root: Some(root.as_str().to_string()),
        }
    }
}

/// A word produced by applying one pattern to a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivation {
    pub pattern: String,
    pub word: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineStats {
    pub root_count: usize,
    pub pattern_count: usize,
    pub pattern_buckets: usize,
    pub load_factor: f64,
    pub tree_height: u32,
}

#[derive(Debug)]
pub struct MorphologyEngine {
    roots: RootIndex,
    patterns: PatternStore,
    literal_mode: LiteralMode,
}

impl MorphologyEngine {
    /// An engine with no roots and no patterns.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self {
            roots: RootIndex::new(),
            patterns: PatternStore::with_options(options.patterns),
            literal_mode: options.literal_mode,
        }
    }

    /// An engine preloaded with [`pattern::default_patterns`].
    #[must_use]
    pub fn with_default_patterns(options: EngineOptions) -> Self {
        let mut engine = Self::new(options);
        engine.load_default_patterns();
        engine
    }

    #[must_use]
    pub const fn literal_mode(&self) -> LiteralMode {
        self.literal_mode
    }

    // --- roots -----------------------------------------------------------

    /// Register a root. `Ok(false)` means it was already present.
    ///
    /// # Errors
    /// Returns `RootError` if the text is not three alphabet letters.
    pub fn add_root(&mut self, root: &str) -> Result<bool, RootError> {
        let root = Root::parse(root)?;
        Ok(self.roots.insert(root))
    }

    /// Remove a root and its derived words. Returns `false` if absent.
    pub fn remove_root(&mut self, root: &str) -> bool {
        self.roots.remove(root.trim()).is_some()
    }

    #[must_use]
    pub fn find_root(&self, root: &str) -> Option<RootEntry<'_>> {
        self.roots.get(root.trim())
    }

    #[must_use]
    pub fn contains_root(&self, root: &str) -> bool {
        self.roots.contains(root.trim())
    }

    /// Roots in ascending alphabetical-key order.
    #[must_use]
    pub fn roots(&self) -> index::Iter<'_> {
        self.roots.iter()
    }

    #[must_use]
    pub const fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Replace the root index with a balanced tree built from `roots`.
    pub fn load_roots_balanced<I, S>(&mut self, roots: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roots.build_balanced(roots)
    }

    /// Stored roots containing `query`, ascending. An empty query matches
    /// nothing.
    #[must_use]
    pub fn suggest_roots(&self, query: &str) -> Vec<&Root> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.roots
            .iter()
            .filter(|entry| entry.root.as_str().contains(query))
            .map(|entry| entry.root)
            .collect()
    }

    // --- patterns --------------------------------------------------------

    /// Insert or replace a pattern. Returns `true` if the name was new.
    pub fn add_pattern(&mut self, pattern: Pattern) -> bool {
        self.patterns.insert(pattern)
    }

    /// Replace an existing pattern.
    ///
    /// # Errors
    /// Returns `EngineError::PatternNotFound` if no pattern has that name.
    pub fn update_pattern(&mut self, pattern: Pattern) -> Result<(), EngineError> {
        if !self.patterns.contains(pattern.name()) {
            return Err(EngineError::PatternNotFound(pattern.name().to_string()));
        }
        self.patterns.insert(pattern);
        Ok(())
    }

    pub fn remove_pattern(&mut self, name: &str) -> Option<Pattern> {
        self.patterns.remove(name.trim())
    }

    #[must_use]
    pub fn find_pattern(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name.trim())
    }

    /// Patterns in table order.
    #[must_use]
    pub fn patterns(&self) -> pattern::Iter<'_> {
        self.patterns.iter()
    }

    #[must_use]
    pub const fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.patterns.load_factor()
    }

    /// Register the built-in patterns, replacing same-named ones. Returns
    /// how many were new.
    pub fn load_default_patterns(&mut self) -> usize {
        let mut added = 0;
        for pattern in pattern::default_patterns() {
            if self.patterns.insert(pattern) {
                added += 1;
            }
        }
        info!(added, total = self.patterns.len(), "loaded default patterns");
        added
    }

    // --- generation ------------------------------------------------------

    fn stored_root(&self, root: &str) -> Result<&Root, EngineError> {
        let parsed = Root::parse(root)?;
        self.roots
            .get(parsed.as_str())
            .map(|entry| entry.root)
            .ok_or_else(|| EngineError::RootNotFound(parsed.as_str().to_string()))
    }

    fn registered_pattern(&self, name: &str) -> Result<&Pattern, EngineError> {
        let name = name.trim();
        self.patterns
            .get(name)
            .ok_or_else(|| EngineError::PatternNotFound(name.to_string()))
    }

    /// Generate the word for `root` and `pattern`, recording it in the
    /// root's derived words.
    ///
    /// # Errors
    /// Returns `EngineError` if the root is malformed or either side is not
    /// registered.
    pub fn generate_derived_word(
        &mut self,
        root: &str,
        pattern: &str,
    ) -> Result<String, EngineError> {
        let stored = self.stored_root(root)?;
        let pattern = self.registered_pattern(pattern)?;
        let word = transform::generate(stored, pattern);
        let key = stored.as_str().to_string();
        let pattern_name = pattern.name().to_string();

        if let Some(derived) = self.roots.derived_mut(&key) {
            let frequency = derived.record(&word, &pattern_name);
            debug!(root = %key, pattern = %pattern_name, %word, frequency, "generated word");
        }
        Ok(word)
    }

    /// Generate and record the word for every registered pattern.
    ///
    /// # Errors
    /// Returns `EngineError` if the root is malformed or not registered.
    pub fn generate_all_derivatives_for_root(
        &mut self,
        root: &str,
    ) -> Result<Vec<Derivation>, EngineError> {
        let derivations = self.preview_derivatives(root)?;
        let key = self.stored_root(root)?.as_str().to_string();
        if let Some(derived) = self.roots.derived_mut(&key) {
            for derivation in &derivations {
                derived.record(&derivation.word, &derivation.pattern);
            }
        }
        info!(root = %key, count = derivations.len(), "generated all derivatives");
        Ok(derivations)
    }

    /// Apply every pattern to `root` without recording anything.
    ///
    /// # Errors
    /// Returns `EngineError` if the root is malformed or not registered.
    pub fn preview_derivatives(&self, root: &str) -> Result<Vec<Derivation>, EngineError> {
        let stored = self.stored_root(root)?;
        Ok(self
            .patterns
            .iter()
            .map(|pattern| Derivation {
                pattern: pattern.name().to_string(),
                word: transform::generate(stored, pattern),
                description: pattern.description().to_string(),
            })
            .collect())
    }

    /// Record an attested word for `root`, attributed to `pattern`.
    /// Returns the word's frequency after recording.
    ///
    /// # Errors
    /// Returns `EngineError` if the root is malformed or either side is not
    /// registered.
    pub fn record_derived_word(
        &mut self,
        root: &str,
        word: &str,
        pattern: &str,
    ) -> Result<u32, EngineError> {
        let key = self.stored_root(root)?.as_str().to_string();
        let pattern_name = self.registered_pattern(pattern)?.name().to_string();
        self.roots
            .derived_mut(&key)
            .map(|derived| derived.record(word.trim(), &pattern_name))
            .ok_or(EngineError::RootNotFound(key))
    }

    /// Derived words recorded for `root`.
    #[must_use]
    pub fn derived_words(&self, root: &str) -> Option<&DerivedWordList> {
        self.roots.get(root.trim()).map(|entry| entry.derived)
    }

    /// Every root with a non-empty family, ascending by key.
    pub fn families(&self) -> impl Iterator<Item = RootEntry<'_>> {
        self.roots.iter().filter(|entry| !entry.derived.is_empty())
    }

    // --- validation ------------------------------------------------------

    /// Check whether some registered pattern derives `word` from
    /// `expected_root`. The first matching pattern in table order is
    /// reported.
    #[must_use]
    pub fn validate_word(&self, word: &str, expected_root: &str) -> ValidationResult {
        let Some(entry) = self.roots.get(expected_root.trim()) else {
            return ValidationResult::no_match();
        };
        let expected: RootKey = entry.root.key();

        self.patterns
            .iter()
            .find(|pattern| {
                transform::extract(word, pattern, self.literal_mode)
                    .is_some_and(|candidate| candidate.key() == expected)
            })
            .map_or_else(ValidationResult::no_match, |pattern| {
                ValidationResult::found(pattern, entry.root)
            })
    }

    /// Find a registered root that some pattern turns into `word`.
    #[must_use]
    pub fn find_root_of_word(&self, word: &str) -> ValidationResult {
        self.patterns
            .iter()
            .find_map(|pattern| {
                let candidate = transform::extract(word, pattern, self.literal_mode)?;
                let entry = self.roots.get(candidate.as_str())?;
                Some(ValidationResult::found(pattern, entry.root))
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            root_count: self.roots.len(),
            pattern_count: self.patterns.len(),
            pattern_buckets: self.patterns.capacity(),
            load_factor: self.patterns.load_factor(),
            tree_height: self.roots.height(),
        }
    }
}

impl Default for MorphologyEngine {
    fn default() -> Self {
        Self::with_default_patterns(EngineOptions::default())
    }
}
