use std::path::PathBuf;

use sarf_config::Config;
use sarf_core::load_seed_file;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Seed file location and how many entries it lists
/// - Pattern table settings and configured extra patterns
/// - Validation mode
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    /// Seed file override from the command line.
    type Input<'a> = Option<PathBuf>;

    fn execute(&self, seed: Self::Input<'_>) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== sarf Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if config_path.exists() {
            println!("  Status: Found");
        } else {
            println!("  Status: Not found (using defaults, run 'sarf init')");
        }
        println!();

        println!("Seed File:");
        let seed_path = seed.map_or_else(|| config.seed.resolved_path(), Ok)?;
        println!("  Path: {}", seed_path.display());
        if seed_path.exists() {
            info!("Reading seed file");
            match load_seed_file(&seed_path) {
                Ok(roots) => println!("  Entries: {}", roots.len()),
                Err(e) => {
                    println!("  Status: Unreadable");
                    println!("  Error: {e}");
                }
            }
        } else {
            println!("  Status: Not found (starting with no roots)");
        }
        println!();

        println!("Patterns:");
        println!("  Load Defaults: {}", config.patterns.load_defaults);
        println!(
            "  Initial Capacity: {}",
            config.patterns.table.initial_capacity
        );
        println!(
            "  Max Load Factor: {}",
            config.patterns.table.max_load_factor
        );
        if config.patterns.extra.is_empty() {
            println!("  Extra: (none)");
        } else {
            let names: Vec<&str> = config
                .patterns
                .extra
                .iter()
                .map(|spec| spec.name.as_str())
                .collect();
            println!("  Extra: {}", names.join(", "));
        }
        println!();

        println!("Validation:");
        println!("  Strict Literals: {}", config.validation.strict_literals);

        Ok(())
    }
}
