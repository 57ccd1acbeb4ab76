//! The retry loop that turns base words into accepted nicknames.
//!
//! Every attempt draws a fresh base word, mutates it and validates the
//! result. A rejected candidate is dropped; the next attempt starts over
//! from the word source. Accepted names can be batched for persistence.

use super::mutator::NameMutator;
use super::random::RandomSource;
use super::validator::{NameValidator, ValidationOutcome};
use super::words::WordSource;
use super::GenerationConfig;
use crate::storage::NameSink;
use std::io;
use thiserror::Error;

pub const DEFAULT_BATCH_SIZE: usize = 1000;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to persist generated names: {0}")]
    Persist(#[source] io::Error),

    #[error("failed to read continue prompt: {0}")]
    Prompt(#[source] io::Error),

    #[error("no acceptable name after {0} attempts")]
    AttemptsExhausted(u64),
}

/// Decides whether the interactive loop keeps going after a name.
pub trait ContinuePrompt {
    fn should_continue(&mut self, name: &str) -> io::Result<bool>;
}

/// Stops after the first accepted name.
pub struct StopAfterFirst;

impl ContinuePrompt for StopAfterFirst {
    fn should_continue(&mut self, _name: &str) -> io::Result<bool> {
        Ok(false)
    }
}

/// Accepted names waiting to be written, space-separated.
pub struct NicknameBatch {
    buffer: String,
    len: usize,
    threshold: usize,
    sink: Box<dyn NameSink>,
}

impl NicknameBatch {
    pub fn new(sink: Box<dyn NameSink>, threshold: usize) -> Self {
        Self {
            buffer: String::new(),
            len: 0,
            threshold: threshold.max(1),
            sink,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer a name, flushing once the threshold is reached.
    pub fn push(&mut self, name: &str) -> io::Result<()> {
        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.len += 1;
        if self.len >= self.threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Write whatever is buffered. Nothing is written for an empty batch.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        self.sink.append(&self.buffer)?;
        tracing::info!("Saved {} nicknames", self.len);
        self.buffer.clear();
        self.len = 0;
        Ok(())
    }
}

/// Owns everything one generation run needs, including the batch.
pub struct GenerationLoop<R> {
    words: WordSource,
    mutator: NameMutator,
    validator: NameValidator,
    config: GenerationConfig,
    rng: R,
    batch: Option<NicknameBatch>,
    max_attempts: Option<u64>,
    attempts: u64,
    generated: u64,
}

impl<R: RandomSource> GenerationLoop<R> {
    pub fn new(
        words: WordSource,
        mutator: NameMutator,
        validator: NameValidator,
        config: GenerationConfig,
        rng: R,
    ) -> Self {
        Self {
            words,
            mutator,
            validator,
            config,
            rng,
            batch: None,
            max_attempts: None,
            attempts: 0,
            generated: 0,
        }
    }

    /// Destination for accepted names when `persist_batch` is set.
    pub fn with_batch(mut self, batch: NicknameBatch) -> Self {
        self.batch = Some(batch);
        self
    }

    /// Give up on a single name after this many rejected attempts.
    /// Without a cap the loop retries forever.
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Attempts made so far, accepted or not.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn generated(&self) -> u64 {
        self.generated
    }

    #[cfg(test)]
    pub fn batch(&self) -> Option<&NicknameBatch> {
        self.batch.as_ref()
    }

    /// Attempt until one name is accepted.
    pub async fn next_name(&mut self) -> Result<String, GenerateError> {
        let mut tries: u64 = 0;
        loop {
            if let Some(cap) = self.max_attempts {
                if tries >= cap {
                    return Err(GenerateError::AttemptsExhausted(cap));
                }
            }
            tries += 1;
            self.attempts += 1;

            let word = self.words.next_word(&mut self.rng);
            tracing::debug!("Random word: {}", word);
            let candidate = self.mutator.mutate(word, &mut self.rng);

            match self.validator.validate(candidate, &self.config).await {
                ValidationOutcome::Accepted(name) => {
                    tracing::info!("Generated nickname: {}", name);
                    self.record(&name)?;
                    return Ok(name);
                }
                outcome => tracing::trace!("Attempt {} rejected: {:?}", tries, outcome),
            }
        }
    }

    /// Produce exactly `count` accepted names.
    pub async fn run_bounded(
        &mut self,
        count: u64,
        mut emit: impl FnMut(&str),
    ) -> Result<(), GenerateError> {
        for _ in 0..count {
            let name = self.next_name().await?;
            emit(&name);
        }
        Ok(())
    }

    /// Produce names one at a time until the prompt says stop.
    pub async fn run_interactive(
        &mut self,
        prompt: &mut dyn ContinuePrompt,
        mut emit: impl FnMut(&str),
    ) -> Result<(), GenerateError> {
        loop {
            let name = self.next_name().await?;
            emit(&name);
            if !prompt.should_continue(&name).map_err(GenerateError::Prompt)? {
                return Ok(());
            }
        }
    }

    /// Flush any names still buffered. Call once when the run ends.
    pub fn finish(&mut self) -> Result<(), GenerateError> {
        if let Some(batch) = self.batch.as_mut() {
            batch.flush().map_err(GenerateError::Persist)?;
        }
        Ok(())
    }

    fn record(&mut self, name: &str) -> Result<(), GenerateError> {
        self.generated += 1;
        if !self.config.persist_batch {
            return Ok(());
        }
        if let Some(batch) = self.batch.as_mut() {
            batch.push(name).map_err(GenerateError::Persist)?;
        }
        Ok(())
    }
}
