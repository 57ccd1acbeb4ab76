//! Base word vocabulary.
//!
//! The vocabulary is a space-delimited token list, either the one bundled
//! into the binary or a file named in the config. It is loaded once and
//! never changes afterwards.

use super::random::RandomSource;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED_WORDS: &str = include_str!("../../assets/words.txt");

#[derive(Error, Debug)]
pub enum WordSourceError {
    #[error("vocabulary file {} could not be read: {source}", .path.display())]
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("vocabulary {0} contains no words")]
    Empty(String),
}

/// Hands out uniformly random base words from a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// The vocabulary compiled into the binary.
    pub fn bundled() -> Result<Self, WordSourceError> {
        Self::from_text(BUNDLED_WORDS, "<bundled>")
    }

    /// Load a vocabulary file from disk.
    pub fn from_path(path: &Path) -> Result<Self, WordSourceError> {
        let contents = std::fs::read_to_string(path).map_err(|source| WordSourceError::Missing {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents, &path.display().to_string())
    }

    /// Parse a whitespace-delimited word list. `origin` only names the
    /// vocabulary in errors.
    pub fn from_text(text: &str, origin: &str) -> Result<Self, WordSourceError> {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Err(WordSourceError::Empty(origin.to_string()));
        }
        tracing::debug!(count = words.len(), origin, "Vocabulary loaded");
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Draw one base word.
    pub fn next_word(&self, rng: &mut impl RandomSource) -> &str {
        &self.words[rng.index(self.words.len())]
    }
}
