use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{
    args::PositiveUsize,
    error::{AppError, AppResult, DispatchError},
    metrics::{RequestOutcome, RunSummary},
};

use super::fetcher::Fetcher;
use super::queue::TaskQueue;

/// Issues `request_count` GETs against `url` using exactly `concurrency`
/// workers and waits until every request has produced an outcome.
///
/// Individual request failures never abort the batch; they are recorded as
/// failed outcomes. With `request_count == 0` nothing is dispatched and the
/// summary is empty with zero elapsed time.
///
/// # Errors
///
/// Returns an error when a worker task panics or is cancelled, or when the
/// collected outcome count does not match the number of queued requests.
pub async fn run_batch(
    fetcher: Arc<dyn Fetcher>,
    url: &str,
    request_count: u64,
    concurrency: PositiveUsize,
) -> AppResult<RunSummary> {
    if request_count == 0 {
        debug!("No requests queued; skipping dispatch.");
        return Ok(RunSummary::empty());
    }

    let queue = Arc::new(TaskQueue::preloaded(url, request_count));
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let collector = tokio::spawn(collect_outcomes(outcome_rx, request_count));

    let started_at = Instant::now();
    let mut workers = JoinSet::new();
    for index in 0..concurrency.get() {
        let worker = Worker {
            name: format!("worker-{}", index),
            queue: Arc::clone(&queue),
            fetcher: Arc::clone(&fetcher),
            outcome_tx: outcome_tx.clone(),
        };
        workers.spawn(worker.run());
    }
    drop(outcome_tx);

    await_completion(&queue, &mut workers).await?;
    let total_elapsed = started_at.elapsed();

    while let Some(joined) = workers.join_next().await {
        joined.map_err(|err| AppError::dispatch(DispatchError::WorkerFailed { source: err }))?;
    }
    let outcomes = collector.await?;

    let collected = u64::try_from(outcomes.len()).unwrap_or(u64::MAX);
    if collected != request_count {
        return Err(AppError::dispatch(DispatchError::OutcomeCountMismatch {
            expected: request_count,
            collected,
        }));
    }

    info!(
        "{} workers took {:.2} seconds to complete {} requests",
        concurrency.get(),
        total_elapsed.as_secs_f64(),
        collected
    );

    Ok(RunSummary::from_elapsed(total_elapsed, outcomes))
}

/// Waits for the queue barrier, surfacing a crashed worker instead of
/// waiting on a task it will never acknowledge.
async fn await_completion(queue: &TaskQueue, workers: &mut JoinSet<()>) -> AppResult<()> {
    loop {
        tokio::select! {
            () = queue.join() => return Ok(()),
            Some(joined) = workers.join_next() => {
                joined.map_err(|err| {
                    AppError::dispatch(DispatchError::WorkerFailed { source: err })
                })?;
            }
        }
    }
}

async fn collect_outcomes(
    mut outcome_rx: mpsc::UnboundedReceiver<RequestOutcome>,
    expected: u64,
) -> Vec<RequestOutcome> {
    let mut outcomes = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    while let Some(outcome) = outcome_rx.recv().await {
        outcomes.push(outcome);
    }
    outcomes
}

struct Worker {
    name: String,
    queue: Arc<TaskQueue>,
    fetcher: Arc<dyn Fetcher>,
    outcome_tx: mpsc::UnboundedSender<RequestOutcome>,
}

impl Worker {
    async fn run(self) {
        while let Some(url) = self.queue.pop() {
            debug!("{} - Fetching {}", self.name, url);
            let outcome = self.fetcher.fetch(&url).await;
            if self.outcome_tx.send(outcome).is_err() {
                warn!("{} - Outcome collector closed; result dropped.", self.name);
            }
            self.queue.task_done();
        }
    }
}
