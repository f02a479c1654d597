#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

//! Root-and-pattern morphology index.
//!
//! Roots live in an AVL tree ordered by alphabetical rank, patterns in a
//! chained hash table. [`MorphologyEngine`] ties them together: it generates
//! words from a root and a pattern, records them per root, and runs the
//! inverse transform to validate words or discover their root.

pub mod alphabet;
pub mod derived;
pub mod engine;
pub mod error;
pub mod graphemes;
pub mod index;
pub mod pattern;
pub mod root;
pub mod seed;
pub mod transform;

pub use derived::{DerivedWordEntry, DerivedWordList};
pub use engine::{Derivation, EngineOptions, EngineStats, MorphologyEngine, ValidationResult};
pub use error::{EngineError, PatternError, RootError, SeedError};
pub use index::{RootEntry, RootIndex};
pub use pattern::{Pattern, PatternSpec, PatternStore, PatternTableOptions, Radical, Token};
pub use root::{Root, RootKey};
pub use seed::{load_seed_file, parse_seed, save_seed_file};
pub use transform::LiteralMode;
