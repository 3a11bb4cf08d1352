use std::sync::Arc;

use tracing::info;

use crate::{
    args::{TesterArgs, parse_target_url},
    error::{AppError, AppResult, ValidationError},
    http::{HttpFetcher, run_batch},
    metrics::StatsAggregator,
};

use super::{export, selections};

/// Runs one batch against the configured target and emits the report.
pub(crate) async fn run_local(args: &TesterArgs) -> AppResult<()> {
    let raw_url = args.url.as_deref().ok_or_else(|| {
        tracing::error!("Missing URL (pass it as an argument or provide it in config).");
        AppError::validation(ValidationError::MissingUrl)
    })?;
    let target = parse_target_url(raw_url)?;

    for line in selections::selection_lines(args, target.as_str()) {
        info!("{}", line);
    }

    let fetcher = Arc::new(HttpFetcher::new(args.request_timeout)?);
    let summary = run_batch(fetcher, target.as_str(), args.requests, args.concurrency).await?;
    info!("... Done!");

    let report = StatsAggregator::new(&summary).report();
    match args.json_file.as_deref() {
        Some(path) => {
            export::export_json(path, &report).await?;
            info!("Report written to {}", path);
        }
        None => {
            println!("{}", export::render_report(&report, args.output_format)?);
        }
    }
    Ok(())
}
