//! Request execution and the bounded worker pool that drives a batch.
mod dispatcher;
mod fetcher;
mod queue;

#[cfg(test)]
mod tests;

pub use dispatcher::run_batch;
pub use fetcher::{Fetcher, HttpFetcher};
