//! Seed file round trips through the filesystem.

use sarf_core::{MorphologyEngine, SeedError, load_seed_file, save_seed_file};
use tempfile::tempdir;

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("roots.txt");

    save_seed_file(&path, ["كتب", "درس", "زرع"])
        .unwrap_or_else(|e| panic!("{e}"));
    let roots = load_seed_file(&path).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(roots, vec!["كتب", "درس", "زرع"]);
}

#[test]
fn test_load_seed_into_engine() {
    let dir = tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("roots.txt");
    std::fs::write(&path, "# roots\nكتب\n\n  درس \nxyz\nكاتب\nكتب\n")
        .unwrap_or_else(|e| panic!("{e}"));

    let roots = load_seed_file(&path).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(roots.len(), 5);

    let mut engine = MorphologyEngine::default();
    assert_eq!(engine.load_roots_balanced(&roots), 2);
    assert!(engine.contains_root("كتب"));
    assert!(engine.contains_root("درس"));
}

#[test]
fn test_invalid_utf8_bytes_are_dropped() {
    let dir = tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("roots.txt");
    let mut bytes = "كتب\n".as_bytes().to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    bytes.extend_from_slice("\nدرس\n".as_bytes());
    std::fs::write(&path, bytes)
        .unwrap_or_else(|e| panic!("{e}"));

    let roots = load_seed_file(&path).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(roots, vec!["كتب", "درس"]);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap_or_else(|e| panic!("{e}"));
    let result = load_seed_file(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(SeedError::Read { .. })));
}
