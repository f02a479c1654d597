#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sarf_config::Config;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use command::{
    CommandStrategy, EngineCommand, InfoStrategy, InitStrategy, Session, ShellStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "sarf")]
#[command(about = "Arabic root and pattern morphology index", long_about = None)]
struct Cli {
    /// Seed file to load instead of the configured one
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
    /// Start an interactive session
    Shell,
    #[command(flatten)]
    Engine(EngineCommand),
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(cli.seed),
        Commands::Version => VersionStrategy.execute(()),
        Commands::Shell => {
            let mut session = Session::open(&Config::load_or_default()?, cli.seed)?;
            ShellStrategy.execute(&mut session)?;
            session.save_if_dirty()?;
            Ok(())
        }
        Commands::Engine(command) => {
            let mut session = Session::open(&Config::load_or_default()?, cli.seed)?;
            debug!(roots = session.engine.root_count(), "session ready");
            command.run(&mut session)?;
            session.save_if_dirty()?;
            Ok(())
        }
    }
}
