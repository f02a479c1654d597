use std::path::{Path, PathBuf};

use sarf_config::Config;
use sarf_core::{MorphologyEngine, load_seed_file, save_seed_file};
use tracing::info;

/// A loaded engine together with the seed file it came from.
///
/// Root additions and removals mark the session dirty; the seed file is
/// rewritten by [`Session::save_if_dirty`].
///
/// Saving regenerates the file from the index: the standard `#` header, then
/// the stored roots in key order. Hand-written comments, lines that are not
/// valid roots and folded duplicate spellings (`اكل` after `أكل`) are not
/// kept. Untouched sessions never write the file.
#[derive(Debug)]
pub struct Session {
    pub engine: MorphologyEngine,
    seed_path: PathBuf,
    dirty: bool,
}

impl Session {
    /// Build the engine from `config` and load the seed file, if it exists.
    /// `seed` overrides the configured seed path.
    pub fn open(config: &Config, seed: Option<PathBuf>) -> anyhow::Result<Self> {
        let seed_path = seed.map_or_else(|| config.seed.resolved_path(), Ok)?;

        let mut engine = MorphologyEngine::new(config.engine_options());
        if config.patterns.load_defaults {
            engine.load_default_patterns();
        }
        for pattern in config.patterns.extra_patterns() {
            engine.add_pattern(pattern);
        }

        if seed_path.exists() {
            let roots = load_seed_file(&seed_path)?;
            let loaded = engine.load_roots_balanced(&roots);
            info!("Loaded {loaded} roots from {}", seed_path.display());
        } else {
            info!("No seed file at {}, starting empty", seed_path.display());
        }

        Ok(Self {
            engine,
            seed_path,
            dirty: false,
        })
    }

    pub fn seed_path(&self) -> &Path {
        &self.seed_path
    }

    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Write the current roots back to the seed file if they changed.
    /// Returns whether anything was written.
    pub fn save_if_dirty(&mut self) -> anyhow::Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        if let Some(parent) = self.seed_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        save_seed_file(
            &self.seed_path,
            self.engine.roots().map(|entry| entry.root.as_str()),
        )?;
        self.dirty = false;
        info!(
            "Saved {} roots to {}",
            self.engine.root_count(),
            self.seed_path.display()
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_without_seed_file() {
        let dir = tempdir().unwrap();
        let session = Session::open(&Config::default(), Some(dir.path().join("roots.txt")))
            .unwrap();
        assert_eq!(session.engine.root_count(), 0);
        assert_eq!(session.engine.pattern_count(), 6);
    }

    #[test]
    fn test_open_skips_default_patterns() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.patterns.load_defaults = false;
        let session = Session::open(&config, Some(dir.path().join("roots.txt"))).unwrap();
        assert_eq!(session.engine.pattern_count(), 0);
    }

    #[test]
    fn test_save_regenerates_seed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roots.txt");
        std::fs::write(&path, "# my notes\nكتب\nxyz\nأكل\nاكل\n").unwrap();

        let mut session = Session::open(&Config::default(), Some(path.clone())).unwrap();
        assert_eq!(session.engine.root_count(), 2);
        assert!(session.engine.remove_root("كتب"));
        session.mark_dirty();
        assert!(session.save_if_dirty().unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("my notes"));
        assert!(!content.contains("xyz"));
        assert_eq!(load_seed_file(&path).unwrap(), vec!["أكل"]);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("roots.txt");
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(&path, "# seed\nكتب\nدرس\n").unwrap();

        let mut session = Session::open(&Config::default(), Some(path.clone())).unwrap();
        assert_eq!(session.engine.root_count(), 2);
        assert!(!session.save_if_dirty().unwrap());

        assert_eq!(session.engine.add_root("زرع"), Ok(true));
        session.mark_dirty();
        assert!(session.save_if_dirty().unwrap());

        let reopened = Session::open(&Config::default(), Some(path)).unwrap();
        assert_eq!(reopened.engine.root_count(), 3);
        assert!(reopened.engine.contains_root("زرع"));
    }
}
