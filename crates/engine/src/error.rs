use crate::options::OptionsError;
use thiserror::Error;

/// Errors produced while running the text pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The supplied cleaning options failed validation.
    #[error("invalid cleaning options: {0}")]
    InvalidOptions(#[from] OptionsError),

    /// The input text exceeds the configured byte limit.
    #[error("input is {len} bytes, which exceeds the configured limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
}
