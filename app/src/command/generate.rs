use sarf_core::Derivation;

use super::Session;

/// Input parameters for the Generate command strategy.
#[derive(Debug)]
pub struct GenerateInput<'a> {
    pub session: &'a mut Session,
    pub root: String,
    /// Single pattern to apply
    pub pattern: Option<String>,
    /// Apply and record every pattern
    pub all: bool,
}

/// Strategy for generating derived words.
///
/// Three modes:
/// - one pattern: generate and record a single word
/// - `--all`: generate and record the word for every pattern
/// - neither: preview every pattern without recording
#[derive(Debug, Clone, Copy)]
pub struct GenerateStrategy;

impl super::CommandStrategy for GenerateStrategy {
    type Input<'a> = GenerateInput<'a>;

    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()> {
        let engine = &mut input.session.engine;
        let root = input.root.trim();

        if let Some(pattern) = input.pattern {
            let word = engine.generate_derived_word(root, &pattern)?;
            println!("{root} + {} → {word}", pattern.trim());
            return Ok(());
        }

        if input.all {
            let derivations = engine.generate_all_derivatives_for_root(root)?;
            print_derivations(root, &derivations);
        } else {
            let derivations = engine.preview_derivatives(root)?;
            print_derivations(root, &derivations);
            println!("(preview only, use --all to record)");
        }
        Ok(())
    }
}

fn print_derivations(root: &str, derivations: &[Derivation]) {
    if derivations.is_empty() {
        println!("No patterns registered.");
        return;
    }
    println!("Derivatives of {root}:");
    for derivation in derivations {
        println!(
            "  {:<10} {:<10} {}",
            derivation.pattern, derivation.word, derivation.description
        );
    }
}
