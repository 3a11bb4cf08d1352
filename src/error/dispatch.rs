use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Worker task failed: {source}")]
    WorkerFailed {
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Collected {collected} outcomes but {expected} tasks were queued.")]
    OutcomeCountMismatch { expected: u64, collected: u64 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
