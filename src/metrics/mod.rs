//! Request outcomes and the statistics computed over a finished batch.
mod report;
mod stats;
mod types;


pub use report::StatsReport;
pub use stats::{StatsAggregator, guarded_reduce, round_to_hundredths, safe_divide_or_default};
pub use types::{RequestOutcome, RunSummary};
