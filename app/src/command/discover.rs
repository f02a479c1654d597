use super::Session;

/// Input parameters for the Discover command strategy.
#[derive(Debug)]
pub struct DiscoverInput<'a> {
    pub session: &'a Session,
    pub word: String,
}

/// Strategy for finding the registered root of a word.
#[derive(Debug, Clone, Copy)]
pub struct DiscoverStrategy;

impl super::CommandStrategy for DiscoverStrategy {
    type Input<'a> = DiscoverInput<'a>;

    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()> {
        let word = input.word.trim();
        let result = input.session.engine.find_root_of_word(word);

        match (result.root, result.pattern) {
            (Some(root), Some(pattern)) => println!("✓ {word}: root {root}, pattern {pattern}"),
            _ => println!("✗ No registered root derives {word}"),
        }
        Ok(())
    }
}
