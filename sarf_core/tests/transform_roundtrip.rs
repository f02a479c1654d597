//! Generation and extraction are inverse for single-slot templates.

mod common;

use proptest::prelude::*;
use sarf_core::pattern::default_patterns;
use sarf_core::transform::{extract, generate};
use sarf_core::{LiteralMode, Root};

proptest! {
    #[test]
    fn extract_inverts_generate(text in common::root_text()) {
        let root = Root::parse(&text).unwrap_or_else(|e| panic!("{e}"));
        for pattern in default_patterns() {
            let word = generate(&root, &pattern);
            prop_assert_eq!(word.chars().count(), pattern.tokens().len());
            prop_assert_eq!(extract(&word, &pattern, LiteralMode::Strict), Some(root.clone()));
            prop_assert_eq!(extract(&word, &pattern, LiteralMode::Lenient), Some(root.clone()));
        }
    }

    #[test]
    fn generate_is_deterministic(text in common::root_text()) {
        let root = Root::parse(&text).unwrap_or_else(|e| panic!("{e}"));
        for pattern in default_patterns() {
            prop_assert_eq!(generate(&root, &pattern), generate(&root, &pattern));
        }
    }
}
