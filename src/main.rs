mod cli;
mod config;
mod logging;
mod lookup;
mod nickname;
mod storage;

use crate::cli::{Cli, StdinPrompt};
use crate::lookup::mojang::MojangProfiles;
use crate::nickname::{
    ContinuePrompt, GenerationLoop, NameMutator, NameValidator, NicknameBatch, RandomSource,
    RngSource, StopAfterFirst, WordSource,
};
use crate::storage::AppendFile;
use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let cfg = config::load_config(cli.config.as_deref())?;
    if cli.print_config {
        print!("{}", config::render_config(&cfg)?);
        return Ok(());
    }

    if !cli.no_log {
        logging::init(&cfg.logging, !cli.quiet)?;
    }
    tracing::info!("Starting");
    tracing::debug!("Arguments: {:?}", cli);

    let words = match &cfg.generator.words_path {
        Some(path) => WordSource::from_path(path)?,
        None => WordSource::bundled()?,
    };
    tracing::debug!("Vocabulary has {} words", words.len());

    match cli.seed {
        Some(seed) => run(&cli, &cfg, words, RngSource(StdRng::seed_from_u64(seed))).await,
        None => run(&cli, &cfg, words, RngSource(rand::rng())).await,
    }
}

async fn run(
    cli: &Cli,
    cfg: &config::AppConfig,
    words: WordSource,
    rng: impl RandomSource,
) -> Result<()> {
    let profiles = MojangProfiles::new(
        &cfg.existence.endpoint,
        Duration::from_secs(cfg.existence.timeout_secs),
        &cfg.existence.user_agent,
    )?;
    let mutator = NameMutator::new(cfg.generator.prefixes.clone(), cfg.generator.suffixes.clone());
    let batch = NicknameBatch::new(
        Box::new(AppendFile::new(&cfg.output.save_path)),
        cfg.generator.batch_size,
    );

    let mut generator = GenerationLoop::new(
        words,
        mutator,
        NameValidator::new(Box::new(profiles)),
        cli.generation_config(),
        rng,
    )
    .with_batch(batch)
    .with_max_attempts(cfg.generator.max_attempts);

    let emit = |name: &str| println!("{}", name);
    let result = match cli.count {
        Some(count) => generator.run_bounded(count, emit).await,
        None => {
            let mut prompt: Box<dyn ContinuePrompt> = if cli.quiet {
                Box::new(StopAfterFirst)
            } else {
                Box::new(StdinPrompt::console())
            };
            generator.run_interactive(prompt.as_mut(), emit).await
        }
    };

    // Names accepted before a failure are still saved.
    generator.finish()?;
    result?;
    tracing::info!(
        "Done, {} nicknames in {} attempts",
        generator.generated(),
        generator.attempts()
    );
    Ok(())
}
