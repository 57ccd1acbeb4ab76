//! Username existence checks.
//!
//! The generator only needs a yes/no answer per name; anything that goes
//! wrong on the way is a [`LookupError`] and the caller decides what it means.

pub mod mojang;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("profile lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("profile lookup returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot build a lookup URL for {0:?}")]
    InvalidName(String),
}

/// Answers whether a username is already registered.
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    /// `Ok(true)` when the name is taken, `Ok(false)` when it is free.
    async fn exists(&self, name: &str) -> Result<bool, LookupError>;
}
