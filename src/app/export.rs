use tokio::io::{AsyncWriteExt, BufWriter};

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::StatsReport;

/// Renders the report for the terminal. JSON is pretty-printed.
pub(crate) fn render_report(report: &StatsReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.to_json())?),
    }
}

pub(crate) async fn export_json(path: &str, report: &StatsReport) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    let json = serde_json::to_vec_pretty(&report.to_json()).map_err(std::io::Error::other)?;
    writer.write_all(&json).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
