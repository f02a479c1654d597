use std::path::PathBuf;

use clap::Subcommand;
use sarf_core::{Root, save_seed_file};

use super::Session;

#[derive(Debug, Subcommand)]
pub enum RootsAction {
    /// List roots in key order
    List,
    /// Add one or more roots
    Add {
        #[arg(required = true)]
        roots: Vec<String>,
    },
    /// Remove one or more roots
    Remove {
        #[arg(required = true)]
        roots: Vec<String>,
    },
    /// Look up a root
    Search { root: String },
    /// Suggest stored roots containing the given letters
    Suggest { query: String },
    /// Write the current roots to a seed file
    Export { path: PathBuf },
}

/// Input parameters for the Roots command strategy.
#[derive(Debug)]
pub struct RootsInput<'a> {
    pub session: &'a mut Session,
    pub action: RootsAction,
}

/// Strategy for managing the root index.
///
/// Additions and removals mark the session dirty so the seed file is
/// rewritten when the command or shell ends.
#[derive(Debug, Clone, Copy)]
pub struct RootsStrategy;

impl super::CommandStrategy for RootsStrategy {
    type Input<'a> = RootsInput<'a>;

    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()> {
        let RootsInput { session, action } = input;

        match action {
            RootsAction::List => {
                if session.engine.root_count() == 0 {
                    println!("No roots loaded.");
                    return Ok(());
                }
                for entry in session.engine.roots() {
                    println!("  {}  ({} derived)", entry.root, entry.derived.len());
                }
                println!("\nTotal: {} roots", session.engine.root_count());
            }
            RootsAction::Add { roots } => {
                for root in &roots {
                    match session.engine.add_root(root) {
                        Ok(true) => {
                            session.mark_dirty();
                            println!("✓ Added {}", root.trim());
                        }
                        Ok(false) => println!("• {} is already present", root.trim()),
                        Err(e) => println!("✗ {e}"),
                    }
                }
            }
            RootsAction::Remove { roots } => {
                for root in &roots {
                    if session.engine.remove_root(root) {
                        session.mark_dirty();
                        println!("✓ Removed {}", root.trim());
                    } else {
                        println!("✗ Root not found: {}", root.trim());
                    }
                }
            }
            RootsAction::Search { root } => match session.engine.find_root(&root) {
                Some(entry) => println!(
                    "✓ {} found ({} derived words)",
                    entry.root,
                    entry.derived.len()
                ),
                None => println!("✗ Root not found: {}", root.trim()),
            },
            RootsAction::Suggest { query } => {
                let suggestions = session.engine.suggest_roots(&query);
                if suggestions.is_empty() {
                    println!("No suggestions.");
                } else {
                    let names: Vec<&str> = suggestions.into_iter().map(Root::as_str).collect();
                    println!("{}", names.join("  "));
                }
            }
            RootsAction::Export { path } => {
                save_seed_file(
                    &path,
                    session.engine.roots().map(|entry| entry.root.as_str()),
                )?;
                println!(
                    "✓ Wrote {} roots to {}",
                    session.engine.root_count(),
                    path.display()
                );
            }
        }

        Ok(())
    }
}
