use std::time::Duration;

use serde::Serialize;

/// Synthetic status recorded when the transport fails before a response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// Recorded result of one request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequestOutcome {
    pub status_code: u16,
    pub elapsed_seconds: f64,
}

impl RequestOutcome {
    #[must_use]
    pub const fn new(status_code: u16, elapsed: Duration) -> Self {
        Self {
            status_code,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    /// Outcome for a request that never produced a response.
    ///
    /// Indistinguishable from a real 500 once recorded.
    #[must_use]
    pub const fn transport_failure() -> Self {
        Self {
            status_code: TRANSPORT_FAILURE_STATUS,
            elapsed_seconds: 0.0,
        }
    }

    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self.status_code, 200..=299)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status_code, 500..=599)
    }
}

/// Everything a finished batch hands over to the aggregator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total_elapsed_seconds: f64,
    pub outcomes: Vec<RequestOutcome>,
}

impl RunSummary {
    #[must_use]
    pub const fn new(total_elapsed_seconds: f64, outcomes: Vec<RequestOutcome>) -> Self {
        Self {
            total_elapsed_seconds,
            outcomes,
        }
    }

    #[must_use]
    pub const fn from_elapsed(total_elapsed: Duration, outcomes: Vec<RequestOutcome>) -> Self {
        Self::new(total_elapsed.as_secs_f64(), outcomes)
    }

    /// Summary of a batch that never ran.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(0.0, Vec::new())
    }

    #[must_use]
    pub fn total_requests(&self) -> u64 {
        u64::try_from(self.outcomes.len()).unwrap_or(u64::MAX)
    }
}
