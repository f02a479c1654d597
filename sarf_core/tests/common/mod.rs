//! Shared helpers for the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;

/// One representative spelling per alphabet rank.
pub const LETTERS: &str = "ابتثجحخدذرزسشصضطظعغفقكلمنهويء";

pub fn letter() -> impl Strategy<Value = char> {
    let letters: Vec<char> = LETTERS.chars().collect();
    proptest::sample::select(letters)
}

/// Any valid root text.
pub fn root_text() -> impl Strategy<Value = String> {
    (letter(), letter(), letter()).prop_map(|(a, b, c)| [a, b, c].iter().collect())
}
