use sarf_core::DerivedWordList;

use super::Session;

/// Input parameters for the Family command strategy.
#[derive(Debug)]
pub struct FamilyInput<'a> {
    pub session: &'a Session,
    /// Root to show; every non-empty family when `None`
    pub root: Option<String>,
}

/// Strategy for listing recorded derived words.
#[derive(Debug, Clone, Copy)]
pub struct FamilyStrategy;

impl super::CommandStrategy for FamilyStrategy {
    type Input<'a> = FamilyInput<'a>;

    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()> {
        let engine = &input.session.engine;

        if let Some(root) = input.root {
            let root = root.trim();
            let derived = engine
                .derived_words(root)
                .ok_or_else(|| anyhow::anyhow!("Root not found: {root}"))?;
            if derived.is_empty() {
                println!("{root}: no derived words recorded");
            } else {
                println!("{root}:");
                print_family(derived);
            }
            return Ok(());
        }

        let mut shown = 0;
        for entry in engine.families() {
            println!("{}:", entry.root);
            print_family(entry.derived);
            shown += 1;
        }
        if shown == 0 {
            println!("No derived words recorded.");
        }
        Ok(())
    }
}

fn print_family(derived: &DerivedWordList) {
    for entry in derived {
        println!(
            "  {:<10} {:<10} ×{}",
            entry.word, entry.pattern, entry.frequency
        );
    }
}
