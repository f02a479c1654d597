use super::Session;

/// Input parameters for the Validate command strategy.
#[derive(Debug)]
pub struct ValidateInput<'a> {
    pub session: &'a Session,
    pub word: String,
    pub root: String,
}

/// Strategy for checking a word against an expected root.
#[derive(Debug, Clone, Copy)]
pub struct ValidateStrategy;

impl super::CommandStrategy for ValidateStrategy {
    type Input<'a> = ValidateInput<'a>;

    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()> {
        let engine = &input.session.engine;
        let word = input.word.trim();
        let root = input.root.trim();

        if !engine.contains_root(root) {
            println!("✗ Root not found: {root}");
            return Ok(());
        }

        let result = engine.validate_word(word, root);
        match result.pattern {
            Some(pattern) if result.matched => {
                println!("✓ {word} derives from {root} (pattern {pattern})");
            }
            _ => println!("✗ {word} does not derive from {root}"),
        }
        Ok(())
    }
}
