use super::queue::TaskQueue;
use super::*;
use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, DispatchError};
use crate::metrics::{RequestOutcome, StatsAggregator};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const TEST_URL: &str = "http://localhost/health";

fn positive_usize(value: usize) -> AppResult<PositiveUsize> {
    Ok(PositiveUsize::try_from(value)?)
}

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

/// Answers with a fixed status after a short delay and tracks overlap.
#[derive(Default)]
struct CountingFetcher {
    calls: AtomicU64,
    in_flight: AtomicU64,
    max_in_flight: AtomicU64,
}

#[async_trait]
impl Fetcher for CountingFetcher {
    async fn fetch(&self, _url: &str) -> RequestOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(2)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        RequestOutcome::new(200, Duration::from_millis(2))
    }
}

/// Every third request fails at the transport level.
#[derive(Default)]
struct FlakyFetcher {
    calls: AtomicU64,
}

#[async_trait]
impl Fetcher for FlakyFetcher {
    async fn fetch(&self, _url: &str) -> RequestOutcome {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if call % 3 == 0 {
            RequestOutcome::transport_failure()
        } else {
            RequestOutcome::new(201, Duration::from_millis(5))
        }
    }
}

struct UrlRecordingFetcher {
    seen: std::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl Fetcher for UrlRecordingFetcher {
    async fn fetch(&self, url: &str) -> RequestOutcome {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(url.to_owned());
        }
        RequestOutcome::new(204, Duration::ZERO)
    }
}

struct CrashingFetcher;

#[async_trait]
impl Fetcher for CrashingFetcher {
    #[expect(clippy::panic, reason = "Simulates a fetcher bug inside a worker.")]
    async fn fetch(&self, _url: &str) -> RequestOutcome {
        panic!("fetcher crashed");
    }
}

#[test]
fn zero_requests_return_empty_summary() -> AppResult<()> {
    run_async_test(async {
        let fetcher = Arc::new(CountingFetcher::default());
        let summary = run_batch(fetcher.clone(), TEST_URL, 0, positive_usize(4)?).await?;

        if !summary.outcomes.is_empty() {
            return Err(AppError::validation("Expected no outcomes"));
        }
        if summary.total_elapsed_seconds.abs() > f64::EPSILON {
            return Err(AppError::validation("Expected zero elapsed time"));
        }
        if fetcher.calls.load(Ordering::SeqCst) != 0 {
            return Err(AppError::validation("Expected no fetches"));
        }

        let stats = StatsAggregator::new(&summary);
        if stats.requests_per_second() > 0.0 || stats.slowest() > 0.0 {
            return Err(AppError::validation("Expected zero metrics"));
        }
        Ok(())
    })
}

#[test]
fn outcome_count_matches_request_count() -> AppResult<()> {
    run_async_test(async {
        let fetcher = Arc::new(FlakyFetcher::default());
        let summary = run_batch(fetcher.clone(), TEST_URL, 30, positive_usize(4)?).await?;

        if summary.outcomes.len() != 30 {
            return Err(AppError::validation(format!(
                "Expected 30 outcomes, got {}",
                summary.outcomes.len()
            )));
        }
        if fetcher.calls.load(Ordering::SeqCst) != 30 {
            return Err(AppError::validation("Expected exactly 30 fetches"));
        }

        let stats = StatsAggregator::new(&summary);
        if stats.failed_requests() != 10 || stats.successful_requests() != 20 {
            return Err(AppError::validation(format!(
                "Unexpected split: {} ok / {} failed",
                stats.successful_requests(),
                stats.failed_requests()
            )));
        }
        if summary.total_elapsed_seconds <= 0.0 {
            return Err(AppError::validation("Expected positive elapsed time"));
        }
        Ok(())
    })
}

#[test]
fn in_flight_requests_never_exceed_concurrency() -> AppResult<()> {
    run_async_test(async {
        let fetcher = Arc::new(CountingFetcher::default());
        let summary = run_batch(fetcher.clone(), TEST_URL, 200, positive_usize(5)?).await?;

        let max_in_flight = fetcher.max_in_flight.load(Ordering::SeqCst);
        if max_in_flight > 5 {
            return Err(AppError::validation(format!(
                "Observed {} concurrent fetches",
                max_in_flight
            )));
        }
        if max_in_flight == 0 {
            return Err(AppError::validation("Expected at least one fetch in flight"));
        }
        if summary.outcomes.len() != 200 {
            return Err(AppError::validation("Expected 200 outcomes"));
        }
        Ok(())
    })
}

#[test]
fn excess_workers_exit_without_fetching() -> AppResult<()> {
    run_async_test(async {
        let fetcher = Arc::new(CountingFetcher::default());
        let summary = run_batch(fetcher.clone(), TEST_URL, 3, positive_usize(16)?).await?;

        if fetcher.calls.load(Ordering::SeqCst) != 3 {
            return Err(AppError::validation("Expected exactly 3 fetches"));
        }
        if summary.outcomes.len() != 3 {
            return Err(AppError::validation("Expected 3 outcomes"));
        }
        Ok(())
    })
}

#[test]
fn single_worker_processes_whole_batch() -> AppResult<()> {
    run_async_test(async {
        let fetcher = Arc::new(CountingFetcher::default());
        let summary = run_batch(fetcher.clone(), TEST_URL, 12, positive_usize(1)?).await?;

        if fetcher.max_in_flight.load(Ordering::SeqCst) != 1 {
            return Err(AppError::validation("Expected strictly sequential fetches"));
        }
        if summary.outcomes.len() != 12 {
            return Err(AppError::validation("Expected 12 outcomes"));
        }
        Ok(())
    })
}

#[test]
fn every_task_targets_the_requested_url() -> AppResult<()> {
    run_async_test(async {
        let fetcher = Arc::new(UrlRecordingFetcher {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        run_batch(fetcher.clone(), TEST_URL, 9, positive_usize(3)?).await?;

        let seen = fetcher
            .seen
            .lock()
            .map_err(|err| AppError::validation(format!("lock poisoned: {}", err)))?
            .clone();
        if seen.len() != 9 || seen.iter().any(|url| url != TEST_URL) {
            return Err(AppError::validation(format!("Unexpected urls: {:?}", seen)));
        }
        Ok(())
    })
}

#[test]
fn crashed_worker_surfaces_dispatch_error() -> AppResult<()> {
    run_async_test(async {
        let result = run_batch(Arc::new(CrashingFetcher), TEST_URL, 4, positive_usize(2)?).await;
        match result {
            Err(AppError::Dispatch(DispatchError::WorkerFailed { .. })) => Ok(()),
            Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
            Ok(_) => Err(AppError::validation("Expected dispatch failure")),
        }
    })
}

#[test]
fn transport_failure_maps_to_synthetic_500() -> AppResult<()> {
    run_async_test(async {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        let fetcher = HttpFetcher::new(Duration::from_secs(2))?;
        let outcome = fetcher.fetch(&format!("http://{}/", addr)).await;
        if outcome != RequestOutcome::transport_failure() {
            return Err(AppError::validation(format!(
                "Unexpected outcome: {:?}",
                outcome
            )));
        }
        Ok(())
    })
}

#[test]
fn queue_join_waits_for_acknowledgements() -> AppResult<()> {
    run_async_test(async {
        let queue = Arc::new(TaskQueue::preloaded(TEST_URL, 2));
        let first = queue.pop();
        let second = queue.pop();
        if first.is_none() || second.is_none() || queue.pop().is_some() {
            return Err(AppError::validation("Expected exactly two tasks"));
        }

        queue.task_done();
        if queue.pending() != 1 {
            return Err(AppError::validation("Expected one pending task"));
        }

        let waiter = {
            let queue = Arc::clone(&queue);
            tokio::spawn(async move { queue.join().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        if waiter.is_finished() {
            return Err(AppError::validation("Join returned before all tasks were done"));
        }

        queue.task_done();
        tokio::time::timeout(Duration::from_secs(2), waiter)
            .await
            .map_err(|err| AppError::validation(format!("join timed out: {}", err)))??;
        Ok(())
    })
}
