//! Property tests for the root index.

mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use sarf_core::{Root, RootIndex, RootKey};

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Remove(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => common::root_text().prop_map(Op::Insert),
        2 => common::root_text().prop_map(Op::Remove),
    ]
}

fn parse(text: &str) -> Root {
    Root::parse(text).unwrap_or_else(|e| panic!("{e}"))
}

proptest! {
    #[test]
    fn insert_then_remove_toggles_membership(text in common::root_text()) {
        let mut index = RootIndex::new();
        index.insert(parse(&text));
        prop_assert!(index.contains(&text));
        prop_assert!(index.remove(&text).is_some());
        prop_assert!(!index.contains(&text));
    }

    #[test]
    fn random_operations_keep_tree_balanced(ops in prop::collection::vec(op(), 1..200)) {
        let mut index = RootIndex::new();
        let mut model: BTreeSet<RootKey> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(text) => {
                    let root = parse(&text);
                    let key = root.key();
                    prop_assert_eq!(index.insert(root), model.insert(key));
                }
                Op::Remove(text) => {
                    let key = RootKey::of(&text);
                    let expected = key.is_some_and(|k| model.remove(&k));
                    prop_assert_eq!(index.remove(&text).is_some(), expected);
                }
            }
            prop_assert!(index.is_balanced());
            prop_assert_eq!(index.len(), model.len());
        }

        let keys: Vec<RootKey> = index.iter().map(|e| e.root.key()).collect();
        let expected: Vec<RootKey> = model.into_iter().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn build_balanced_has_minimal_height(
        roots in prop::collection::vec(common::root_text(), 0..300)
    ) {
        let distinct: BTreeSet<RootKey> = roots.iter().filter_map(|r| RootKey::of(r)).collect();
        let n = distinct.len();

        let mut index = RootIndex::new();
        prop_assert_eq!(index.build_balanced(&roots), n);
        prop_assert_eq!(index.height(), usize::BITS - n.leading_zeros());
        prop_assert!(index.is_balanced());
    }
}
