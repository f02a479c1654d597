use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use sarf_core::{EngineOptions, LiteralMode, Pattern, PatternSpec, PatternTableOptions};

const CONFIG_DIR: &str = "sarf";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Seed file; `~/sarf/roots.txt` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SeedConfig {
    pub fn resolved_path(&self) -> anyhow::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join("roots.txt")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PatternsConfig {
    #[serde(default = "PatternsConfig::default_load_defaults")]
    pub load_defaults: bool,
    #[serde(flatten)]
    pub table: PatternTableOptions,
    #[serde(default)]
    pub extra: Vec<PatternSpec>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            load_defaults: Self::default_load_defaults(),
            table: PatternTableOptions::default(),
            extra: Vec::new(),
        }
    }
}

impl PatternsConfig {
    const fn default_load_defaults() -> bool {
        true
    }

    /// Configured extra patterns; invalid entries are skipped with a warning.
    #[must_use]
    pub fn extra_patterns(&self) -> Vec<Pattern> {
        self.extra
            .iter()
            .filter_map(|spec| match Pattern::try_from(spec.clone()) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("ignoring configured pattern: {e}");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Require literal letters of a template to match during validation.
    #[serde(default = "ValidationConfig::default_strict_literals")]
    pub strict_literals: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_literals: Self::default_strict_literals(),
        }
    }
}

impl ValidationConfig {
    const fn default_strict_literals() -> bool {
        true
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `~/sarf/config.json`, or the defaults if it does not exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            return Self::load_from(&config_path);
        }
        info!("No config at {}, using defaults", config_path.display());
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!(
            "   1. Put one root per line in {}",
            config_dir.join("roots.txt").display()
        );
        println!("   2. Run 'sarf roots list' to check they were loaded");
        println!("   3. Run 'sarf shell' for an interactive session");
        println!();
        println!("🔧 Configuration options:");
        println!("   - seed.path: seed file to load at startup");
        println!("   - patterns.load_defaults: register the built-in patterns");
        println!("   - patterns.extra: additional patterns (name, structure, description)");
        println!("   - validation.strict_literals: literal letters must match when validating");
        println!();
        Ok(())
    }

    /// Write the commented-free JSON template used by `sarf init`.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        let config_template = r#"{
  "patterns": {
    "load_defaults": true,
    "initial_capacity": 16,
    "max_load_factor": 0.75,
    "extra": [
      {
        "name": "استفعال",
        "structure": "VCCVCCVC",
        "description": "Form X verbal noun"
      }
    ]
  },
  "validation": {
    "strict_literals": true
  }
}"#;
        std::fs::write(path, config_template)?;
        Ok(())
    }

    #[must_use]
    pub const fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            literal_mode: if self.validation.strict_literals {
                LiteralMode::Strict
            } else {
                LiteralMode::Lenient
            },
            patterns: self.patterns.table,
        }
    }
}
