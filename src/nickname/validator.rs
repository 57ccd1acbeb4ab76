//! Length rules and the existence check for candidate names.

use super::GenerationConfig;
use crate::lookup::ExistenceCheck;

pub const MIN_LEN: usize = 3;
pub const MAX_LEN: usize = 16;

/// Verdict on one candidate. Rejections are ordinary outcomes that send the
/// generator back for a fresh attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(String),
    RejectedTooLong,
    RejectedTooShort,
    RejectedTaken,
}

/// Checks candidates against the length bounds and the existence check.
pub struct NameValidator {
    checker: Box<dyn ExistenceCheck>,
}

impl NameValidator {
    pub fn new(checker: Box<dyn ExistenceCheck>) -> Self {
        Self { checker }
    }

    pub async fn validate(&self, name: String, cfg: &GenerationConfig) -> ValidationOutcome {
        let mut name = name;

        if name.chars().count() > MAX_LEN {
            if !cfg.force_truncate {
                tracing::warn!("{} is too long, retrying", name);
                return ValidationOutcome::RejectedTooLong;
            }
            name = name.chars().take(MAX_LEN).collect();
            tracing::warn!("Name was too long, truncated to {}", name);
        }

        if name.chars().count() < MIN_LEN {
            tracing::warn!("{} is too short, retrying", name);
            return ValidationOutcome::RejectedTooShort;
        }

        if cfg.skip_existence_check {
            tracing::debug!("Existence check skipped for {}", name);
            return ValidationOutcome::Accepted(name);
        }

        match self.checker.exists(&name).await {
            Ok(true) => {
                tracing::warn!("{} is taken, retrying", name);
                ValidationOutcome::RejectedTaken
            }
            Ok(false) => ValidationOutcome::Accepted(name),
            // An unreachable lookup service must not stall generation.
            Err(e) => {
                tracing::error!("Existence check for {} failed, accepting: {}", name, e);
                ValidationOutcome::Accepted(name)
            }
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use crate::lookup::{ExistenceCheck, LookupError};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Answers from a fixed set of taken names and counts its queries.
    #[derive(Default)]
    pub struct FakeProfiles {
        taken: HashSet<String>,
        pub queries: Arc<AtomicUsize>,
    }

    impl FakeProfiles {
        pub fn with_taken(names: &[&str]) -> Self {
            Self {
                taken: names.iter().map(|n| n.to_string()).collect(),
                queries: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl ExistenceCheck for FakeProfiles {
        async fn exists(&self, name: &str) -> Result<bool, LookupError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(self.taken.contains(name))
        }
    }

    /// Every name is taken.
    pub struct AllTaken;

    #[async_trait]
    impl ExistenceCheck for AllTaken {
        async fn exists(&self, _name: &str) -> Result<bool, LookupError> {
            Ok(true)
        }
    }

    /// The lookup service is never reachable.
    pub struct Unreachable;

    #[async_trait]
    impl ExistenceCheck for Unreachable {
        async fn exists(&self, name: &str) -> Result<bool, LookupError> {
            Err(LookupError::InvalidName(name.to_string()))
        }
    }

    /// Reports the first `n` queries as taken, then everything as free.
    pub struct TakenFirst {
        remaining: AtomicUsize,
    }

    impl TakenFirst {
        pub fn new(n: usize) -> Self {
            Self {
                remaining: AtomicUsize::new(n),
            }
        }
    }

    #[async_trait]
    impl ExistenceCheck for TakenFirst {
        async fn exists(&self, _name: &str) -> Result<bool, LookupError> {
            let taken = self
                .remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            Ok(taken)
        }
    }
}
