use engine::OptionsError;
use thiserror::Error;

use crate::job::JobStatus;

/// Errors surfaced by the job manager and poller.
///
/// Per-item processing failures are deliberately absent: those are recorded
/// as data inside the batch (see [`crate::BatchItem::Failed`]) and never
/// abort the job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The submission itself is malformed; no job was created.
    #[error("invalid batch submission: {0}")]
    InvalidInput(String),

    /// The submitted cleaning options failed validation.
    #[error("invalid cleaning options: {0}")]
    InvalidOptions(#[from] OptionsError),

    /// No job with this id exists in the registry.
    #[error("job `{0}` not found")]
    NotFound(String),

    /// Results were requested before the job completed.
    #[error("job `{id}` is not ready: status is {status:?}")]
    NotReady { id: String, status: JobStatus },

    /// The job reached `Failed`; carries the recorded error message.
    #[error("job `{id}` failed: {error}")]
    JobFailed { id: String, error: String },

    /// The caller cancelled its polling loop. The job itself keeps running.
    #[error("polling cancelled by the caller")]
    PollCancelled,
}
