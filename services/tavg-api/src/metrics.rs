//! Request metrics.

use std::time::Duration;

use metrics::{counter, histogram};

pub const REQUESTS_TOTAL: &str = "tavg_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "tavg_request_duration_seconds";
pub const POINTS_RETURNED: &str = "tavg_points_returned";

/// Record one `/temperature` request. `outcome` is `ok` or an error kind label.
pub fn record_request(outcome: &'static str, elapsed: Duration) {
    counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "outcome" => outcome).record(elapsed.as_secs_f64());
}

pub fn record_points(count: usize) {
    histogram!(POINTS_RETURNED).record(count as f64);
}
