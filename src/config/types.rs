use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "request")]
    pub requests: Option<u64>,
    pub concurrency: Option<usize>,
    pub process: Option<usize>,
    pub json_file: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub timeout: Option<DurationValue>,
    pub verbose: Option<bool>,
}

/// Duration given either as whole seconds or as text with a unit suffix.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    return Err(ValidationError::DurationZero);
                }
                Ok(Duration::from_secs(*secs))
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
