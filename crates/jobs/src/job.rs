//! Batch job records and their lifecycle.
//!
//! A [`BatchJob`] is created by the manager on submission, mutated only by
//! the manager while it runs, and frozen once it reaches a terminal status.
//! Readers never see the record itself; they get a [`JobStatusView`] clone
//! or, once the job is complete, the ordered [`BatchItem`] sequence.

use chrono::{DateTime, Utc};
use engine::{BatchSummary, CleaningResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a batch job.
///
/// Transitions are monotonic: `Queued → Running → {Completed, Failed}`.
/// There is no transition out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Completed and Failed are terminal; the record no longer changes.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Outcome of one item in a batch, held at that item's input position.
///
/// A failed item is data, not an error: the batch keeps going and the
/// failure message sits where the result would have been.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BatchItem {
    Ok { result: CleaningResult },
    Failed { error: String },
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchItem::Ok { .. })
    }

    /// The cleaning result, if this item succeeded.
    pub fn result(&self) -> Option<&CleaningResult> {
        match self {
            BatchItem::Ok { result } => Some(result),
            BatchItem::Failed { .. } => None,
        }
    }

    /// The failure message, if this item failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            BatchItem::Ok { .. } => None,
            BatchItem::Failed { error } => Some(error),
        }
    }
}

/// What a status lookup returns: every job field except the result payloads,
/// so polling stays cheap regardless of batch size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatusView {
    pub job_id: String,
    pub status: JobStatus,
    /// Items attempted so far, successes and failures alike.
    pub progress: usize,
    pub total: usize,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Present only when `status` is [`JobStatus::Failed`].
    pub error: Option<String>,
}

/// One batch submission, tracked in the manager's registry.
#[derive(Debug, Clone)]
pub(crate) struct BatchJob {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
    pub(crate) progress: usize,
    pub(crate) total: usize,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) completed_at: Option<DateTime<Utc>>,
    /// Empty until the job completes, then exactly `total` entries in
    /// input order.
    pub(crate) results: Vec<BatchItem>,
    pub(crate) summary: Option<BatchSummary>,
    pub(crate) error: Option<String>,
}

impl BatchJob {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            job_id: Uuid::new_v4().to_string(),
            status: JobStatus::Queued,
            progress: 0,
            total,
            created_at: Utc::now(),
            completed_at: None,
            results: Vec::new(),
            summary: None,
            error: None,
        }
    }

    pub(crate) fn start(&mut self) {
        if self.status == JobStatus::Queued {
            self.status = JobStatus::Running;
        }
    }

    /// Counts one attempted item. Saturates at `total` so concurrent status
    /// reads never observe `progress > total`.
    pub(crate) fn record_progress(&mut self) {
        if !self.status.is_terminal() && self.progress < self.total {
            self.progress += 1;
        }
    }

    pub(crate) fn complete(&mut self, results: Vec<BatchItem>, summary: BatchSummary) {
        if self.status.is_terminal() {
            return;
        }
        self.progress = self.total;
        self.results = results;
        self.summary = Some(summary);
        self.completed_at = Some(Utc::now());
        self.status = JobStatus::Completed;
    }

    pub(crate) fn fail(&mut self, error: String) {
        if self.status.is_terminal() {
            return;
        }
        self.error = Some(error);
        self.completed_at = Some(Utc::now());
        self.status = JobStatus::Failed;
    }

    pub(crate) fn view(&self) -> JobStatusView {
        JobStatusView {
            job_id: self.job_id.clone(),
            status: self.status,
            progress: self.progress,
            total: self.total,
            created_at: self.created_at,
            completed_at: self.completed_at,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::SummaryAccumulator;

    fn completed_item() -> BatchItem {
        let result = engine::normalize("plain sample", &engine::CleaningOptions::default())
            .expect("valid input");
        BatchItem::Ok { result }
    }

    #[test]
    fn new_job_starts_queued_with_unique_id() {
        let a = BatchJob::new(3);
        let b = BatchJob::new(3);
        assert_eq!(a.status, JobStatus::Queued);
        assert_eq!(a.progress, 0);
        assert_eq!(a.total, 3);
        assert!(a.results.is_empty());
        assert!(a.completed_at.is_none());
        assert_ne!(a.job_id, b.job_id);
    }

    #[test]
    fn lifecycle_reaches_completed() {
        let mut job = BatchJob::new(1);
        job.start();
        assert_eq!(job.status, JobStatus::Running);
        job.record_progress();
        assert_eq!(job.progress, 1);

        let item = completed_item();
        let mut acc = SummaryAccumulator::default();
        acc.record(item.result().expect("ok item"));
        job.complete(vec![item], acc.finish());

        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.results.len(), 1);
        assert!(job.summary.is_some());
        assert!(job.completed_at.is_some());
    }

    #[test]
    fn terminal_states_are_sticky() {
        let mut job = BatchJob::new(2);
        job.start();
        job.fail("boom".to_string());
        assert_eq!(job.status, JobStatus::Failed);

        job.start();
        job.record_progress();
        job.complete(Vec::new(), SummaryAccumulator::default().finish());
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.progress, 0);
        assert_eq!(job.error.as_deref(), Some("boom"));
    }

    #[test]
    fn progress_is_bounded_by_total() {
        let mut job = BatchJob::new(2);
        job.start();
        for _ in 0..5 {
            job.record_progress();
        }
        assert_eq!(job.progress, 2);
    }

    #[test]
    fn view_omits_results() {
        let mut job = BatchJob::new(1);
        job.start();
        job.record_progress();
        let view = job.view();
        assert_eq!(view.job_id, job.job_id);
        assert_eq!(view.status, JobStatus::Running);
        assert_eq!(view.progress, 1);
        assert_eq!(view.total, 1);
        assert!(view.error.is_none());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&JobStatus::Completed).expect("serialize");
        assert_eq!(json, r#""completed""#);
    }

    #[test]
    fn failed_item_round_trips_as_data() {
        let item = BatchItem::Failed {
            error: "input is 99 bytes, which exceeds the configured limit of 8 bytes".into(),
        };
        assert!(!item.is_ok());
        assert!(item.result().is_none());
        let json = serde_json::to_string(&item).expect("serialize");
        let back: BatchItem = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(item, back);
    }
}
