use clap::Subcommand;
use sarf_core::Pattern;

use super::Session;

#[derive(Debug, Subcommand)]
pub enum PatternsAction {
    /// List registered patterns
    List,
    /// Add or replace a pattern for this session
    Add {
        /// Template written with ف ع ل as the radical slots
        name: String,

        /// Consonant/vowel skeleton, e.g. CVCCVC
        #[arg(long, default_value_t)]
        structure: String,

        #[arg(long, default_value_t)]
        description: String,
    },
    /// Replace an existing pattern; fails if the name is not registered
    Update {
        name: String,

        #[arg(long, default_value_t)]
        structure: String,

        #[arg(long, default_value_t)]
        description: String,
    },
    /// Remove a pattern
    Remove { name: String },
    /// Register the built-in patterns again
    Defaults,
}

/// Input parameters for the Patterns command strategy.
#[derive(Debug)]
pub struct PatternsInput<'a> {
    pub session: &'a mut Session,
    pub action: PatternsAction,
}

/// Strategy for managing the pattern table.
///
/// Changes last for the session only; persistent patterns go under
/// `patterns.extra` in the config file.
#[derive(Debug, Clone, Copy)]
pub struct PatternsStrategy;

impl super::CommandStrategy for PatternsStrategy {
    type Input<'a> = PatternsInput<'a>;

    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()> {
        let PatternsInput { session, action } = input;
        let engine = &mut session.engine;

        match action {
            PatternsAction::List => {
                if engine.pattern_count() == 0 {
                    println!("No patterns registered.");
                    return Ok(());
                }
                for pattern in engine.patterns() {
                    println!(
                        "  {:<10} {:<10} {}",
                        pattern.name(),
                        pattern.structure(),
                        pattern.description()
                    );
                }
                println!(
                    "\nTotal: {} patterns (load factor {:.2})",
                    engine.pattern_count(),
                    engine.load_factor()
                );
            }
            PatternsAction::Add {
                name,
                structure,
                description,
            } => {
                let pattern = Pattern::new(name, structure, description)?;
                let name = pattern.name().to_string();
                if engine.add_pattern(pattern) {
                    println!("✓ Added pattern {name}");
                } else {
                    println!("✓ Updated pattern {name}");
                }
            }
            PatternsAction::Update {
                name,
                structure,
                description,
            } => {
                let pattern = Pattern::new(name, structure, description)?;
                let name = pattern.name().to_string();
                match engine.update_pattern(pattern) {
                    Ok(()) => println!("✓ Updated pattern {name}"),
                    Err(e) => println!("✗ {e}"),
                }
            }
            PatternsAction::Defaults => {
                let added = engine.load_default_patterns();
                println!(
                    "✓ Loaded default patterns ({added} new, {} total)",
                    engine.pattern_count()
                );
            }
            PatternsAction::Remove { name } => match engine.remove_pattern(&name) {
                Some(pattern) => println!("✓ Removed pattern {}", pattern.name()),
                None => println!("✗ Pattern not found: {}", name.trim()),
            },
        }

        Ok(())
    }
}
