//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type. Commands that
//! work on the morphology index share one [`EngineCommand`] grammar, used both
//! by the one-shot CLI and by the interactive shell.

use clap::Subcommand;

mod discover;
mod family;
mod generate;
mod info;
mod init;
mod patterns;
mod roots;
mod session;
mod shell;
mod stats;
mod validate;
mod version;

pub use discover::{DiscoverInput, DiscoverStrategy};
pub use family::{FamilyInput, FamilyStrategy};
pub use generate::{GenerateInput, GenerateStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use patterns::{PatternsAction, PatternsInput, PatternsStrategy};
pub use roots::{RootsAction, RootsInput, RootsStrategy};
pub use session::Session;
pub use shell::ShellStrategy;
pub use stats::StatsStrategy;
pub use validate::{ValidateInput, ValidateStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Borrowed state**: Inputs may borrow the session, so the shell can run
///   many commands against one engine
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input<'a> = &'a mut Session;
///
///     fn execute(&self, session: Self::Input<'_>) -> anyhow::Result<()> {
///         println!("{} roots", session.engine.root_count());
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input<'a>;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input<'_>) -> anyhow::Result<()>;
}

/// Commands that operate on a loaded [`Session`].
#[derive(Debug, Subcommand)]
pub enum EngineCommand {
    /// Manage roots
    Roots {
        #[command(subcommand)]
        action: RootsAction,
    },
    /// Manage patterns
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
    /// Generate derived words for a root
    Generate {
        /// Root to derive from
        root: String,

        /// Pattern to apply; without it every pattern is previewed
        pattern: Option<String>,

        /// Apply and record every pattern
        #[arg(long, conflicts_with = "pattern")]
        all: bool,
    },
    /// Check whether a word derives from a root
    Validate {
        /// Word to check
        word: String,

        /// Expected root
        root: String,
    },
    /// Find the root of a word
    Discover {
        /// Word to analyse
        word: String,
    },
    /// Show recorded derived words
    Family {
        /// Root to show; all families when omitted
        root: Option<String>,
    },
    /// Show index statistics
    Stats,
}

impl EngineCommand {
    pub fn run(self, session: &mut Session) -> anyhow::Result<()> {
        match self {
            Self::Roots { action } => RootsStrategy.execute(RootsInput { session, action }),
            Self::Patterns { action } => {
                PatternsStrategy.execute(PatternsInput { session, action })
            }
            Self::Generate { root, pattern, all } => GenerateStrategy.execute(GenerateInput {
                session,
                root,
                pattern,
                all,
            }),
            Self::Validate { word, root } => {
                ValidateStrategy.execute(ValidateInput { session, word, root })
            }
            Self::Discover { word } => DiscoverStrategy.execute(DiscoverInput { session, word }),
            Self::Family { root } => FamilyStrategy.execute(FamilyInput { session, root }),
            Self::Stats => StatsStrategy.execute(&*session),
        }
    }
}
