//! Ordered root index.
//!
//! An AVL tree keyed by [`RootKey`]. Each node owns the root's
//! [`DerivedWordList`]. Lookups accept any spelling; variant letters fold to
//! the same key, so `أكل` and `اكل` address the same entry.

mod iter;
mod node;

use tracing::{debug, info, warn};

use crate::derived::DerivedWordList;
use crate::root::{Root, RootKey};

pub use iter::Iter;
use node::Link;

/// A stored root and its derived words.
#[derive(Debug, Clone, Copy)]
pub struct RootEntry<'a> {
    pub root: &'a Root,
    pub derived: &'a DerivedWordList,
}

#[derive(Debug, Default)]
pub struct RootIndex {
    root: Link,
    len: usize,
}

impl RootIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `root`. Returns `false` if a root with the same key is present.
    pub fn insert(&mut self, root: Root) -> bool {
        let mut inserted = false;
        let text = root.as_str().to_string();
        self.root = Some(node::insert(self.root.take(), root, &mut inserted));
        if inserted {
            self.len += 1;
            debug!(root = %text, size = self.len, "inserted root");
        }
        inserted
    }

    /// Remove a root together with its derived words.
    pub fn remove(&mut self, root: &str) -> Option<(Root, DerivedWordList)> {
        let key = RootKey::of(root)?;
        let (tree, removed) = node::remove(self.root.take(), key);
        self.root = tree;
        if removed.is_some() {
            self.len -= 1;
            debug!(root, size = self.len, "removed root");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, root: &str) -> Option<RootEntry<'_>> {
        let key = RootKey::of(root)?;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key()) {
                std::cmp::Ordering::Less => current = node.left.as_deref(),
                std::cmp::Ordering::Greater => current = node.right.as_deref(),
                std::cmp::Ordering::Equal => {
                    return Some(RootEntry {
                        root: &node.root,
                        derived: &node.derived,
                    });
                }
            }
        }
        None
    }

    /// Mutable access to the derived words of a stored root.
    pub fn derived_mut(&mut self, root: &str) -> Option<&mut DerivedWordList> {
        let key = RootKey::of(root)?;
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key()) {
                std::cmp::Ordering::Less => current = node.left.as_deref_mut(),
                std::cmp::Ordering::Greater => current = node.right.as_deref_mut(),
                std::cmp::Ordering::Equal => return Some(&mut node.derived),
            }
        }
        None
    }

    #[must_use]
    pub fn contains(&self, root: &str) -> bool {
        self.get(root).is_some()
    }

    /// Replace the whole index with a minimal-height tree built from `roots`.
    ///
    /// Entries that are not valid roots are dropped, duplicates (by key) keep
    /// their first spelling after sorting. Derived words of the previous tree
    /// are discarded. Returns the number of stored roots.
    pub fn build_balanced<I, S>(&mut self, roots: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<Root> = roots
            .into_iter()
            .filter_map(|text| match Root::parse(text.as_ref()) {
                Ok(root) => Some(root),
                Err(e) => {
                    warn!("skipping seed entry: {e}");
                    None
                }
            })
            .collect();
        parsed.sort_by_key(Root::key);
        parsed.dedup_by_key(|root| root.key());

        self.len = parsed.len();
        self.root = node::build_sorted(parsed);
        info!(size = self.len, height = self.height(), "built balanced root index");
        self.len
    }

    /// Stored roots in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty.
    #[must_use]
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Whether every node is ordered, AVL-balanced and has a correct cached
    /// height.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        node::checked_height(&self.root, None, None).is_some()
    }

    #[cfg(test)]
    fn top(&self) -> Option<&Root> {
        self.root.as_ref().map(|node| &node.root)
    }
}

impl<'a> IntoIterator for &'a RootIndex {
    type Item = RootEntry<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(text: &str) -> Root {
        Root::parse(text).unwrap_or_else(|e| panic!("{e}"))
    }

    fn texts(index: &RootIndex) -> Vec<String> {
        index.iter().map(|e| e.root.as_str().to_string()).collect()
    }

    #[test]
    fn test_insert_and_contains() {
        let mut index = RootIndex::new();
        assert!(index.insert(root("كتب")));
        assert!(index.contains("كتب"));
        assert!(!index.contains("درس"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut index = RootIndex::new();
        assert!(index.insert(root("كتب")));
        assert!(!index.insert(root("كتب")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_folded_spellings_share_an_entry() {
        let mut index = RootIndex::new();
        assert!(index.insert(root("أكل")));
        assert!(!index.insert(root("اكل")));
        assert_eq!(index.get("اكل").map(|e| e.root.as_str()), Some("أكل"));
    }

    #[test]
    fn test_remove_missing() {
        let mut index = RootIndex::new();
        assert!(index.remove("xyz").is_none());
        assert!(index.remove("كتب").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut index = RootIndex::new();
        for text in ["كتب", "درس", "زرع", "علم", "بحث"] {
            index.insert(root(text));
        }
        assert_eq!(texts(&index), vec!["بحث", "درس", "زرع", "علم", "كتب"]);
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut index = RootIndex::new();
        let letters: Vec<char> = "بتثجحخدذرزسشصضطظعغفقكلمنهوي".chars().collect();
        for &c in &letters {
            index.insert(root(&format!("{c}رس")));
        }
        assert_eq!(index.len(), letters.len());
        assert!(index.is_balanced());
        // 27 nodes fit in an AVL tree of height at most 6
        assert!(index.height() <= 6);
    }

    #[test]
    fn test_remove_node_with_two_children_keeps_derived_words() {
        let mut index = RootIndex::new();
        for text in ["درس", "بحث", "كتب", "زرع", "علم"] {
            index.insert(root(text));
        }
        if let Some(list) = index.derived_mut("علم") {
            list.record("عالم", "فاعل");
        }

        let removed = index.remove("درس");
        assert_eq!(removed.map(|(r, _)| r.as_str().to_string()), Some("درس".to_string()));
        assert!(!index.contains("درس"));
        assert!(index.is_balanced());
        assert_eq!(index.len(), 4);

        let entry = index.get("علم");
        assert!(entry.is_some_and(|e| e.derived.contains("عالم")));
    }

    #[test]
    fn test_remove_returns_derived_words() {
        let mut index = RootIndex::new();
        index.insert(root("كتب"));
        if let Some(list) = index.derived_mut("كتب") {
            list.record("كاتب", "فاعل");
        }
        let removed = index.remove("كتب");
        assert!(removed.is_some_and(|(_, derived)| derived.contains("كاتب")));
    }

    #[test]
    fn test_build_balanced_picks_median() {
        let mut index = RootIndex::new();
        let stored = index.build_balanced(["زرع", "كتب", "درس"]);
        assert_eq!(stored, 3);
        assert_eq!(index.height(), 2);
        assert_eq!(index.top().map(Root::as_str), Some("زرع"));
        assert_eq!(texts(&index), vec!["درس", "زرع", "كتب"]);
    }

    #[test]
    fn test_build_balanced_filters_and_dedups() {
        let mut index = RootIndex::new();
        index.insert(root("علم"));
        let stored = index.build_balanced(["كتب", "xyz", "كتب", "كاتب", "", "درس"]);
        assert_eq!(stored, 2);
        assert_eq!(index.len(), 2);
        assert!(!index.contains("علم"));
    }

    #[test]
    fn test_build_balanced_then_insert_stays_avl() {
        let mut index = RootIndex::new();
        index.build_balanced(["بحث", "درس", "زرع"]);
        for text in ["علم", "فهم", "قرأ", "كتب", "لعب"] {
            index.insert(root(text));
        }
        assert!(index.is_balanced());
        assert_eq!(index.len(), 8);
    }
}
