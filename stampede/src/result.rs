use crate::stats;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Aggregate outcome of one load-test invocation.
///
/// Mutable while the run is in flight: every virtual user funnels its outcome
/// through [`record`](RunResult::record), which the runner serializes behind
/// a single lock. Once `end_time` is set the result is snapshotted via
/// [`summarize`](RunResult::summarize) and never touched again.
#[derive(Debug)]
pub struct RunResult {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    response_times: Vec<f64>,
    pub start_time: Option<OffsetDateTime>,
    pub end_time: Option<OffsetDateTime>,
    pub concurrent_users: u32,
    pub test_duration: u64,
}

impl RunResult {
    pub fn new(concurrent_users: u32, test_duration: u64) -> Self {
        Self {
            total_requests: 0,
            successful_requests: 0,
            failed_requests: 0,
            response_times: Vec::new(),
            start_time: Some(OffsetDateTime::now_utc()),
            end_time: None,
            concurrent_users,
            test_duration,
        }
    }

    /// Record one request outcome as a single unit: bump the total, bump
    /// exactly one of the success/failure counters, and append the latency.
    /// Keeping this one operation (rather than independently updated fields)
    /// is what preserves `total == successful + failed` under concurrency.
    pub fn record(&mut self, success: bool, latency_ms: f64) {
        self.total_requests += 1;
        if success {
            self.successful_requests += 1;
        } else {
            self.failed_requests += 1;
        }
        self.response_times.push(latency_ms);
    }

    /// Latencies in completion order, one entry per recorded request.
    pub fn response_times(&self) -> &[f64] {
        &self.response_times
    }

    pub fn avg_response_time(&self) -> f64 {
        stats::average(&self.response_times)
    }

    pub fn min_response_time(&self) -> f64 {
        stats::minimum(&self.response_times)
    }

    pub fn max_response_time(&self) -> f64 {
        stats::maximum(&self.response_times)
    }

    pub fn p95_response_time(&self) -> f64 {
        stats::percentile(&self.response_times, 0.95)
    }

    pub fn p99_response_time(&self) -> f64 {
        stats::percentile(&self.response_times, 0.99)
    }

    pub fn success_rate(&self) -> f64 {
        stats::success_rate(self.successful_requests, self.total_requests)
    }

    pub fn requests_per_second(&self) -> f64 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                stats::throughput(self.total_requests, (end - start).as_seconds_f64())
            }
            _ => 0.0,
        }
    }

    /// Snapshot the run with all derived metrics materialized.
    pub fn summarize(&self) -> RunSummary {
        RunSummary {
            total_requests: self.total_requests,
            successful_requests: self.successful_requests,
            failed_requests: self.failed_requests,
            avg_response_time: self.avg_response_time(),
            min_response_time: self.min_response_time(),
            max_response_time: self.max_response_time(),
            p95_response_time: self.p95_response_time(),
            p99_response_time: self.p99_response_time(),
            start_time: self.start_time,
            end_time: self.end_time,
            concurrent_users: self.concurrent_users,
            test_duration: self.test_duration,
            success_rate: self.success_rate(),
            requests_per_second: self.requests_per_second(),
        }
    }
}

/// Immutable, serializable snapshot of a finished run. Timestamps serialize
/// as RFC 3339 strings, or null when absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub avg_response_time: f64,
    pub min_response_time: f64,
    pub max_response_time: f64,
    pub p95_response_time: f64,
    pub p99_response_time: f64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    pub concurrent_users: u32,
    pub test_duration: u64,
    pub success_rate: f64,
    pub requests_per_second: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests={} ({} ok, {} failed), success={:.1}%, avg={:.1}ms, p95={:.1}ms, p99={:.1}ms, rps={:.1}",
            self.total_requests,
            self.successful_requests,
            self.failed_requests,
            self.success_rate,
            self.avg_response_time,
            self.p95_response_time,
            self.p99_response_time,
            self.requests_per_second,
        )
    }
}
