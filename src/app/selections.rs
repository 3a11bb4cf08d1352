use crate::args::{OutputFormat, TesterArgs};

pub(crate) fn selection_lines(args: &TesterArgs, url: &str) -> Vec<String> {
    vec![
        "Selections:".to_owned(),
        format!("requests: {}", args.requests),
        format!("concurrency: {}", args.concurrency),
        format!("process: {}", args.process),
        format!("json_file: {}", args.json_file.as_deref().unwrap_or("none")),
        format!("output_format: {}", format_output_format(args.output_format)),
        format!("request_timeout_ms: {}", args.request_timeout.as_millis()),
        format!("url: {}", url),
    ]
}

const fn format_output_format(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    }
}
