//! Interactive session over the [`EngineCommand`] grammar.

use std::io::{self, BufRead, Write};

use clap::Parser;

use super::{EngineCommand, Session};

/// One shell line, parsed with the same grammar as the CLI.
#[derive(Debug, Parser)]
#[command(name = "sarf", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: EngineCommand,
}

#[derive(Debug)]
enum ShellInput {
    Empty,
    Quit,
    Save,
    Command(EngineCommand),
    Invalid(clap::Error),
}

impl ShellInput {
    fn parse(line: &str) -> Self {
        let words = split_line(line);
        match words.first().map(String::as_str) {
            None => Self::Empty,
            Some("exit" | "quit") => Self::Quit,
            Some("save") => Self::Save,
            Some(_) => match ShellLine::try_parse_from(words) {
                Ok(parsed) => Self::Command(parsed.command),
                Err(e) => Self::Invalid(e),
            },
        }
    }
}

/// Split a line on whitespace. Double quotes group words.
fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut pending = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        words.push(current);
    }
    words
}

/// Strategy for the interactive shell.
///
/// Every line runs against the same session, so roots, patterns and
/// recorded words accumulate until the shell exits.
///
/// # Design
/// - Same grammar as the one-shot CLI (`help` lists it)
/// - Command errors are printed and the loop continues
/// - `save` writes the seed file immediately; otherwise it is written on exit
#[derive(Debug, Clone, Copy)]
pub struct ShellStrategy;

impl super::CommandStrategy for ShellStrategy {
    type Input<'a> = &'a mut Session;

    fn execute(&self, session: Self::Input<'_>) -> anyhow::Result<()> {
        println!(
            "sarf shell: {} roots, {} patterns (seed: {})",
            session.engine.root_count(),
            session.engine.pattern_count(),
            session.seed_path().display()
        );
        println!("Type 'help' for commands, 'exit' to quit.\n");

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            print!("sarf> ");
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                println!();
                break;
            }

            match ShellInput::parse(&line) {
                ShellInput::Empty => {}
                ShellInput::Quit => break,
                ShellInput::Save => {
                    if session.save_if_dirty()? {
                        println!("✓ Saved to {}", session.seed_path().display());
                    } else {
                        println!("Nothing to save.");
                    }
                }
                ShellInput::Command(command) => {
                    if let Err(e) = command.run(session) {
                        println!("✗ {e}");
                    }
                }
                ShellInput::Invalid(e) => e.print()?,
            }
        }

        Ok(())
    }
}
