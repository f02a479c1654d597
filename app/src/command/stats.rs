use sarf_core::LiteralMode;

use super::Session;

/// Strategy for displaying index statistics.
#[derive(Debug, Clone, Copy)]
pub struct StatsStrategy;

impl super::CommandStrategy for StatsStrategy {
    type Input<'a> = &'a Session;

    fn execute(&self, session: Self::Input<'_>) -> anyhow::Result<()> {
        let stats = session.engine.stats();

        println!("Roots:");
        println!("  Count: {}", stats.root_count);
        println!("  Tree Height: {}", stats.tree_height);
        println!();
        println!("Patterns:");
        println!("  Count: {}", stats.pattern_count);
        println!("  Buckets: {}", stats.pattern_buckets);
        println!("  Load Factor: {:.2}", stats.load_factor);
        println!();
        println!("Validation:");
        let mode = match session.engine.literal_mode() {
            LiteralMode::Strict => "strict",
            LiteralMode::Lenient => "lenient",
        };
        println!("  Literal Matching: {mode}");
        Ok(())
    }
}
