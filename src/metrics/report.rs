use serde::Serialize;

/// Rendered metrics of one batch, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsReport {
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub slowest: f64,
    pub fastest: f64,
    pub average: f64,
    pub total_time: f64,
    pub requests_per_minute: f64,
    pub requests_per_second: f64,
}

impl StatsReport {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Successful requests: {}", self.successful_requests),
            format!("Failed requests: {}", self.failed_requests),
            format!("Slowest: {:.2}s", self.slowest),
            format!("Fastest: {:.2}s", self.fastest),
            format!("Average: {:.2}s", self.average),
            format!("Total time: {:.2}s", self.total_time),
            format!("Requests Per Minute: {:.2}", self.requests_per_minute),
            format!("Requests Per Second: {:.2}", self.requests_per_second),
        ]
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "successful_requests": self.successful_requests,
            "failed_requests": self.failed_requests,
            "slowest": self.slowest,
            "fastest": self.fastest,
            "average": self.average,
            "total_time": self.total_time,
            "requests_per_minute": self.requests_per_minute,
            "requests_per_second": self.requests_per_second
        })
    }
}
