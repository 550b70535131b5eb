//! The job manager: registry, bounded fan-out, progress accounting.
//!
//! This is the only component in the workspace with shared mutable state.
//! Each job lives in a [`DashMap`] entry; every write happens under that
//! entry's guard, so concurrent status readers always see a consistent
//! record and a monotonically non-decreasing progress count.

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use engine::{BatchSummary, CleaningOptions, SummaryAccumulator};
use futures::stream::{self, StreamExt};
use tracing::{info, warn, Instrument, Level};

use crate::config::{ConfigError, JobsConfig};
use crate::error::JobError;
use crate::job::{BatchItem, BatchJob, JobStatus, JobStatusView};

/// Owns every batch job for the lifetime of the process.
///
/// Cloning is cheap and clones share the same registry, so a manager can be
/// handed to request handlers and background tasks alike. There is no
/// cross-restart persistence: a process restart loses all job state.
#[derive(Debug, Clone)]
pub struct JobManager {
    config: JobsConfig,
    jobs: Arc<DashMap<String, BatchJob>>,
}

impl JobManager {
    /// Creates a manager with validated limits.
    pub fn new(config: JobsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            jobs: Arc::new(DashMap::new()),
        })
    }

    /// Creates a manager with the default [`JobsConfig`].
    pub fn with_defaults() -> Self {
        Self {
            config: JobsConfig::default(),
            jobs: Arc::new(DashMap::new()),
        }
    }

    pub fn config(&self) -> &JobsConfig {
        &self.config
    }

    /// Accepts a batch and returns its job id immediately.
    ///
    /// The submission is validated synchronously: an empty batch, an
    /// oversized batch, or bad options is rejected here and no job is
    /// created. Item processing runs on a spawned task, so this must be
    /// called from within a Tokio runtime.
    pub fn submit(
        &self,
        texts: Vec<String>,
        options: CleaningOptions,
    ) -> Result<String, JobError> {
        if texts.is_empty() {
            return Err(JobError::InvalidInput(
                "batch contains no texts".to_string(),
            ));
        }
        if texts.len() > self.config.max_batch_items {
            return Err(JobError::InvalidInput(format!(
                "batch has {} items, which exceeds the limit of {}",
                texts.len(),
                self.config.max_batch_items
            )));
        }
        options.validate()?;

        let job = BatchJob::new(texts.len());
        let job_id = job.job_id.clone();
        self.jobs.insert(job_id.clone(), job);
        info!(job_id = %job_id, total = texts.len(), "job_submitted");

        let span = tracing::span!(Level::INFO, "jobs.run", job_id = %job_id);
        let runner = run_batch(
            Arc::clone(&self.jobs),
            job_id.clone(),
            texts,
            options,
            self.config.concurrency,
        );
        let handle = tokio::spawn(runner.instrument(span));

        // A panicking runner would otherwise leave the job Running forever;
        // join it in the background and record the panic as a job failure.
        let jobs = Arc::clone(&self.jobs);
        let id = job_id.clone();
        tokio::spawn(async move {
            if let Err(err) = handle.await {
                warn!(job_id = %id, error = %err, "job_failure");
                if let Some(mut job) = jobs.get_mut(&id) {
                    job.fail(format!("batch worker panicked: {err}"));
                }
            }
        });

        Ok(job_id)
    }

    /// Non-blocking status lookup. Never includes result payloads.
    pub fn status(&self, job_id: &str) -> Result<JobStatusView, JobError> {
        self.jobs
            .get(job_id)
            .map(|job| job.view())
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))
    }

    /// The ordered item outcomes of a completed job: `results[i]`
    /// corresponds to `texts[i]` of the submission.
    pub fn results(&self, job_id: &str) -> Result<Vec<BatchItem>, JobError> {
        let job = self
            .jobs
            .get(job_id)
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))?;
        match job.status {
            JobStatus::Completed => Ok(job.results.clone()),
            JobStatus::Failed => Err(JobError::JobFailed {
                id: job.job_id.clone(),
                error: job.error.clone().unwrap_or_default(),
            }),
            status => Err(JobError::NotReady {
                id: job.job_id.clone(),
                status,
            }),
        }
    }

    /// The aggregate summary of a completed job. Same error rules as
    /// [`JobManager::results`].
    pub fn summary(&self, job_id: &str) -> Result<BatchSummary, JobError> {
        let job = self
            .jobs
            .get(job_id)
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))?;
        match (&job.status, &job.summary) {
            (JobStatus::Completed, Some(summary)) => Ok(summary.clone()),
            (JobStatus::Failed, _) => Err(JobError::JobFailed {
                id: job.job_id.clone(),
                error: job.error.clone().unwrap_or_default(),
            }),
            (status, _) => Err(JobError::NotReady {
                id: job.job_id.clone(),
                status: *status,
            }),
        }
    }

    /// Number of jobs currently tracked, terminal or not.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    #[cfg(test)]
    pub(crate) fn insert_failed_job(&self, error: &str) -> String {
        let mut job = BatchJob::new(1);
        let id = job.job_id.clone();
        job.start();
        job.fail(error.to_string());
        self.jobs.insert(id.clone(), job);
        id
    }

    #[cfg(test)]
    pub(crate) fn insert_stalled_job(&self, total: usize) -> String {
        let job = BatchJob::new(total);
        let id = job.job_id.clone();
        self.jobs.insert(id.clone(), job);
        id
    }
}

/// Processes one submitted batch to completion.
///
/// Items fan out through `buffer_unordered` with the manager's fixed
/// concurrency; each finished item bumps the job's progress under the
/// registry entry guard. Completion order is arbitrary, so outcomes carry
/// their input index and are reordered before the job record is finalized.
async fn run_batch(
    jobs: Arc<DashMap<String, BatchJob>>,
    job_id: String,
    texts: Vec<String>,
    options: CleaningOptions,
    concurrency: usize,
) {
    let start = Instant::now();
    match jobs.get_mut(&job_id) {
        Some(mut job) => job.start(),
        None => return,
    }

    let mut indexed: Vec<(usize, BatchItem)> =
        stream::iter(texts.into_iter().enumerate().map(|(idx, text)| {
            let options = options.clone();
            let jobs = Arc::clone(&jobs);
            let job_id = job_id.clone();
            async move {
                let item = match engine::normalize(&text, &options) {
                    Ok(result) => BatchItem::Ok { result },
                    Err(err) => {
                        warn!(item = idx, error = %err, "item_failure");
                        BatchItem::Failed {
                            error: err.to_string(),
                        }
                    }
                };
                if let Some(mut job) = jobs.get_mut(&job_id) {
                    job.record_progress();
                }
                (idx, item)
            }
        }))
        .buffer_unordered(concurrency)
        .collect()
        .await;

    indexed.sort_by_key(|(idx, _)| *idx);
    let results: Vec<BatchItem> = indexed.into_iter().map(|(_, item)| item).collect();

    let mut acc = SummaryAccumulator::default();
    for item in &results {
        match item {
            BatchItem::Ok { result } => acc.record(result),
            BatchItem::Failed { .. } => acc.record_failure(),
        }
    }
    let summary = acc.finish();

    let elapsed_micros = start.elapsed().as_micros() as u64;
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        elapsed_micros,
        "job_completed"
    );
    if let Some(mut job) = jobs.get_mut(&job_id) {
        job.complete(results, summary);
    }
}
