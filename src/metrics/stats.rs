use super::report::StatsReport;
use super::types::{RequestOutcome, RunSummary};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Divides, falling back to `0.0` when the denominator is zero, negative,
/// or not finite.
#[must_use]
pub fn safe_divide_or_default(numerator: f64, denominator: f64) -> f64 {
    if denominator.is_finite() && denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Folds `values` with `reduce`; an empty input yields `0.0`.
#[must_use]
pub fn guarded_reduce<I, F>(values: I, reduce: F) -> f64
where
    I: IntoIterator<Item = f64>,
    F: FnMut(f64, f64) -> f64,
{
    values.into_iter().reduce(reduce).unwrap_or(0.0)
}

/// Rounds to two decimal places for display. Stored values are never rounded.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Read-only view answering summary queries over a finished batch.
///
/// Every query is a pure function of the borrowed [`RunSummary`], so the
/// order in which outcomes were collected never affects the answers.
#[derive(Debug, Clone, Copy)]
pub struct StatsAggregator<'run> {
    summary: &'run RunSummary,
}

impl<'run> StatsAggregator<'run> {
    #[must_use]
    pub const fn new(summary: &'run RunSummary) -> Self {
        Self { summary }
    }

    #[must_use]
    pub const fn summary(&self) -> &'run RunSummary {
        self.summary
    }

    fn successful(&self) -> impl Iterator<Item = &'run RequestOutcome> {
        self.summary
            .outcomes
            .iter()
            .filter(|outcome| outcome.is_successful())
    }

    fn successful_times(&self) -> impl Iterator<Item = f64> {
        self.successful().map(|outcome| outcome.elapsed_seconds)
    }

    #[must_use]
    pub fn slowest(&self) -> f64 {
        round_to_hundredths(guarded_reduce(self.successful_times(), f64::max))
    }

    #[must_use]
    pub fn fastest(&self) -> f64 {
        round_to_hundredths(guarded_reduce(self.successful_times(), f64::min))
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        let (sum, count) = self
            .successful_times()
            .fold((0.0_f64, 0_u64), |(sum, count), elapsed| {
                (sum + elapsed, count.saturating_add(1))
            });
        round_to_hundredths(safe_divide_or_default(sum, count as f64))
    }

    #[must_use]
    pub fn successful_requests(&self) -> u64 {
        count_matching(&self.summary.outcomes, RequestOutcome::is_successful)
    }

    #[must_use]
    pub fn failed_requests(&self) -> u64 {
        count_matching(&self.summary.outcomes, RequestOutcome::is_failed)
    }

    #[must_use]
    pub fn total_requests(&self) -> u64 {
        self.summary.total_requests()
    }

    #[must_use]
    pub fn total_time(&self) -> f64 {
        round_to_hundredths(self.summary.total_elapsed_seconds)
    }

    #[must_use]
    pub fn requests_per_minute(&self) -> f64 {
        round_to_hundredths(self.raw_requests_per_second() * SECONDS_PER_MINUTE)
    }

    #[must_use]
    pub fn requests_per_second(&self) -> f64 {
        round_to_hundredths(self.raw_requests_per_second())
    }

    fn raw_requests_per_second(&self) -> f64 {
        safe_divide_or_default(
            self.total_requests() as f64,
            self.summary.total_elapsed_seconds,
        )
    }

    #[must_use]
    pub fn report(&self) -> StatsReport {
        StatsReport {
            successful_requests: self.successful_requests(),
            failed_requests: self.failed_requests(),
            slowest: self.slowest(),
            fastest: self.fastest(),
            average: self.average(),
            total_time: self.total_time(),
            requests_per_minute: self.requests_per_minute(),
            requests_per_second: self.requests_per_second(),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.report().to_text()
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        self.report().to_json()
    }
}

fn count_matching(outcomes: &[RequestOutcome], predicate: fn(&RequestOutcome) -> bool) -> u64 {
    let count = outcomes.iter().filter(|outcome| predicate(*outcome)).count();
    u64::try_from(count).unwrap_or(u64::MAX)
}
