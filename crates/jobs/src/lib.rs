//! # jobs
//!
//! Asynchronous batch orchestration over the `engine` pipeline.
//!
//! A [`JobManager`] accepts a batch of texts, validates the submission
//! synchronously, and returns a job id immediately; items fan out through a
//! bounded worker pool while callers follow along with non-blocking status
//! reads or the [`poll_until_complete`] loop.
//!
//! Two failure scopes are kept strictly apart:
//!
//! - **Job-level** errors (empty batch, oversized batch, bad options) are
//!   rejected at submission, before a job exists.
//! - **Item-level** errors are recorded in place as [`BatchItem::Failed`]
//!   and never abort the batch: the job still completes and the summary
//!   counts the failure.
//!
//! Jobs are scoped to the process lifetime; nothing is persisted across a
//! restart.
//!
//! # Quick start
//!
//! ```no_run
//! use engine::CleaningOptions;
//! use jobs::{poll_until_complete, CancelSignal, JobManager, PollOptions};
//!
//! # async fn demo() -> Result<(), jobs::JobError> {
//! let manager = JobManager::with_defaults();
//! let job_id = manager.submit(
//!     vec!["First document.".into(), "Second document.".into()],
//!     CleaningOptions::default(),
//! )?;
//!
//! let view = poll_until_complete(
//!     &manager,
//!     &job_id,
//!     &PollOptions::default(),
//!     CancelSignal::never(),
//!     |v| println!("{}/{} items done", v.progress, v.total),
//! )
//! .await?;
//!
//! assert_eq!(view.progress, 2);
//! let results = manager.results(&job_id)?;
//! # let _ = results;
//! # Ok(())
//! # }
//! ```
//!
//! This crate logs through `tracing` but never installs a subscriber;
//! that belongs to the binary embedding it.

mod config;
mod error;
mod job;
mod manager;
mod poller;

pub use config::{ConfigError, JobsConfig};
pub use error::JobError;
pub use job::{BatchItem, JobStatus, JobStatusView};
pub use manager::JobManager;
pub use poller::{cancellation, poll_until_complete, CancelHandle, CancelSignal, PollOptions};
