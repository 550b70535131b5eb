//! Client-side polling until a job reaches a terminal state.
//!
//! The poller is the only component that deliberately sleeps. It runs on
//! the caller's task and owns nothing: cancelling it abandons the waiting
//! loop and leaves the underlying job running to completion.

use std::time::Duration;

use tokio::sync::watch;

use crate::error::JobError;
use crate::job::{JobStatus, JobStatusView};
use crate::manager::JobManager;

/// Tuning for [`poll_until_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay between consecutive status reads.
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// Creates a linked cancellation pair.
///
/// The handle side stays with whoever may abandon the wait; the signal side
/// goes into [`poll_until_complete`]. Cancelling is idempotent and reaches
/// every cloned signal.
pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx: Some(rx) })
}

/// Caller-held side of a cancellation pair.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Stops every linked polling loop. Safe to call more than once.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Poller-held side of a cancellation pair.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: Option<watch::Receiver<bool>>,
}

impl CancelSignal {
    /// A signal that never fires, for callers that always poll to the end.
    pub fn never() -> Self {
        Self { rx: None }
    }

    /// Resolves once the linked handle cancels. A dropped handle without a
    /// cancel counts as never-cancelled, not as a cancellation.
    async fn cancelled(&mut self) {
        let Some(rx) = self.rx.as_mut() else {
            return std::future::pending::<()>().await;
        };
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return std::future::pending::<()>().await;
            }
        }
    }
}

/// Polls `job_id` until it reaches a terminal state.
///
/// Each status read is handed to `on_progress` before it is inspected, so
/// the callback also sees the terminal view. Resolves with the final view
/// on `Completed`; returns [`JobError::JobFailed`] with the recorded
/// message on `Failed`; returns [`JobError::PollCancelled`] if `cancel`
/// fires while waiting. Cancellation never touches the job itself.
pub async fn poll_until_complete<F>(
    manager: &JobManager,
    job_id: &str,
    options: &PollOptions,
    mut cancel: CancelSignal,
    mut on_progress: F,
) -> Result<JobStatusView, JobError>
where
    F: FnMut(&JobStatusView),
{
    loop {
        let view = manager.status(job_id)?;
        on_progress(&view);
        match view.status {
            JobStatus::Completed => return Ok(view),
            JobStatus::Failed => {
                let error = view
                    .error
                    .clone()
                    .unwrap_or_else(|| "job failed without a recorded error".to_string());
                return Err(JobError::JobFailed {
                    id: view.job_id,
                    error,
                });
            }
            JobStatus::Queued | JobStatus::Running => {}
        }
        tokio::select! {
            _ = cancel.cancelled() => return Err(JobError::PollCancelled),
            _ = tokio::time::sleep(options.interval) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::CleaningOptions;

    fn fast_poll() -> PollOptions {
        PollOptions {
            interval: Duration::from_millis(2),
        }
    }

    #[tokio::test]
    async fn resolves_with_the_completed_view() {
        let manager = JobManager::with_defaults();
        let id = manager
            .submit(
                vec!["polling target text".to_string()],
                CleaningOptions::default(),
            )
            .expect("submit");

        let mut observed = Vec::new();
        let view = poll_until_complete(&manager, &id, &fast_poll(), CancelSignal::never(), |v| {
            observed.push(v.progress)
        })
        .await
        .expect("job completes");

        assert_eq!(view.status, JobStatus::Completed);
        assert_eq!(view.progress, 1);
        assert!(!observed.is_empty());
        assert!(observed.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[tokio::test]
    async fn unknown_job_fails_immediately() {
        let manager = JobManager::with_defaults();
        let err = poll_until_complete(
            &manager,
            "missing",
            &fast_poll(),
            CancelSignal::never(),
            |_| {},
        )
        .await
        .unwrap_err();
        assert!(matches!(err, JobError::NotFound(_)));
    }

    #[tokio::test]
    async fn failed_job_surfaces_its_recorded_error() {
        let manager = JobManager::with_defaults();
        let id = manager.insert_failed_job("upstream exploded");
        let err = poll_until_complete(&manager, &id, &fast_poll(), CancelSignal::never(), |_| {})
            .await
            .unwrap_err();
        match err {
            JobError::JobFailed { error, .. } => assert_eq!(error, "upstream exploded"),
            other => panic!("expected JobFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancellation_stops_the_loop() {
        let manager = JobManager::with_defaults();
        // A job that never leaves Queued keeps the poller waiting forever.
        let id = manager.insert_stalled_job(1);
        let (handle, signal) = cancellation();
        handle.cancel();

        let slow = PollOptions {
            interval: Duration::from_secs(3600),
        };
        let err = poll_until_complete(&manager, &id, &slow, signal, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::PollCancelled));
    }

    #[tokio::test]
    async fn cancelling_one_poller_leaves_the_job_alone() {
        let manager = JobManager::with_defaults();
        let id = manager
            .submit(
                vec!["survives cancellation".to_string()],
                CleaningOptions::default(),
            )
            .expect("submit");

        // First poller is cancelled before the runner ever gets scheduled.
        let (handle, signal) = cancellation();
        handle.cancel();
        let slow = PollOptions {
            interval: Duration::from_secs(3600),
        };
        let err = poll_until_complete(&manager, &id, &slow, signal, |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::PollCancelled));

        // The job itself still runs to completion for a second poller.
        let view =
            poll_until_complete(&manager, &id, &fast_poll(), CancelSignal::never(), |_| {})
                .await
                .expect("job completes");
        assert_eq!(view.status, JobStatus::Completed);
        assert_eq!(manager.results(&id).expect("results").len(), 1);
    }

    #[tokio::test]
    async fn dropped_handle_does_not_cancel() {
        let manager = JobManager::with_defaults();
        let id = manager
            .submit(
                vec!["handle dropped early".to_string()],
                CleaningOptions::default(),
            )
            .expect("submit");

        let (handle, signal) = cancellation();
        drop(handle);
        let view = poll_until_complete(&manager, &id, &fast_poll(), signal, |_| {})
            .await
            .expect("job completes");
        assert_eq!(view.status, JobStatus::Completed);
    }
}
