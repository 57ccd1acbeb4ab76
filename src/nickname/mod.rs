//! Nickname generation: word source, mutation, validation and the retry loop.

pub mod generator;
pub mod mutator;
pub mod random;
pub mod validator;
pub mod words;

pub use generator::{ContinuePrompt, GenerationLoop, NicknameBatch, StopAfterFirst};
pub use mutator::NameMutator;
pub use random::{RandomSource, RngSource};
pub use validator::NameValidator;
pub use words::WordSource;

/// Run-time switches fixed before generation starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Cut overlong candidates to the maximum length instead of rejecting them.
    pub force_truncate: bool,
    /// Accept names without asking the existence check.
    pub skip_existence_check: bool,
    /// Buffer accepted names and append them to the save file.
    pub persist_batch: bool,
}
