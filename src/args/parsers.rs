use std::time::Duration;

use url::Url;

use super::types::PositiveUsize;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

pub(crate) fn parse_request_count(s: &str) -> Result<u64, ValidationError> {
    let value = s.trim();
    if let Some(magnitude) = value.strip_prefix('-') {
        return Err(ValidationError::NegativeRequestCount {
            value: magnitude.to_owned(),
        });
    }
    value
        .parse::<u64>()
        .map_err(|err| ValidationError::InvalidNumber { source: err })
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Validates the load-test target before any request is queued.
///
/// # Errors
///
/// Returns an error when the URL does not parse, is not http(s), or has no host.
pub fn parse_target_url(value: &str) -> AppResult<Url> {
    let parsed = Url::parse(value.trim()).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: value.to_owned(),
            source: err,
        })
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::validation(ValidationError::UnsupportedScheme {
            scheme: parsed.scheme().to_owned(),
        }));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    Ok(parsed)
}

pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
