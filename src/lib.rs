//! Core library for the `ulta` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, the bounded-concurrency request dispatcher,
//! and statistics aggregation over recorded outcomes. The primary
//! user-facing interface is the `ulta` command-line application; the
//! dispatcher and aggregator are also usable directly:
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use ulta::args::PositiveUsize;
//! use ulta::http::{HttpFetcher, run_batch};
//! use ulta::metrics::StatsAggregator;
//!
//! # async fn demo() -> ulta::error::AppResult<()> {
//! let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(30))?);
//! let concurrency = PositiveUsize::try_from(10)?;
//! let summary = run_batch(fetcher, "http://localhost:8080/", 100, concurrency).await?;
//! println!("{}", StatsAggregator::new(&summary).to_text());
//! # Ok(())
//! # }
//! ```
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
