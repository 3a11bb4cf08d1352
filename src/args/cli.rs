use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize, parse_request_count};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal async HTTP load generator: send a fixed number of GET requests with a bounded worker pool and report latency and throughput."
)]
pub struct TesterArgs {
    /// Target URL for the load test
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Number of requests to send (0 sends nothing)
    #[arg(
        long = "request",
        short = 'r',
        visible_alias = "requests",
        default_value = "100",
        allow_negative_numbers = true,
        value_parser = parse_request_count
    )]
    pub requests: u64,

    /// Number of concurrent workers
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = "3",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Number of runtime worker threads driving the workers
    #[arg(
        long = "process",
        short = 'p',
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub process: PositiveUsize,

    /// Write the JSON report to this file instead of the terminal
    #[arg(long = "json-file", short = 'j')]
    pub json_file: Option<String>,

    /// Report format printed to the terminal
    #[arg(
        long = "output-format",
        short = 'o',
        default_value = "json",
        ignore_case = true
    )]
    pub output_format: OutputFormat,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Path to config file (TOML/JSON). Defaults to ./ulta.toml or ./ulta.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging, including one line per dispatched request (also enabled by DEBUG)
    #[arg(long, short = 'v', alias = "debug")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
