//! Command-line flags and the console continue prompt.

use crate::nickname::{ContinuePrompt, GenerationConfig};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "randomnickgen", version, about = "Generate random Minecraft-style nicknames")]
pub struct Cli {
    /// Print only the generated names and stop after the first one
    #[arg(short, long)]
    pub quiet: bool,

    /// Cut names longer than 16 characters instead of retrying
    #[arg(short = 't', long)]
    pub force_truncate: bool,

    /// Do not ask the profile API whether a name is taken
    #[arg(short = 'c', long)]
    pub no_existence_check: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub no_log: bool,

    /// Append generated names to the save file
    #[arg(short, long)]
    pub save: bool,

    /// Number of names to generate; without it, ask after each name
    #[arg(long)]
    pub count: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            force_truncate: self.force_truncate,
            skip_existence_check: self.no_existence_check,
            persist_batch: self.save,
        }
    }
}

/// Asks on the terminal whether to generate another name.
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn console() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ContinuePrompt for StdinPrompt<R, W> {
    fn should_continue(&mut self, _name: &str) -> io::Result<bool> {
        write!(self.output, "Retry? (y/n)? ")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}
